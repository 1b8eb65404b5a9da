use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology::{dilate, erode};

/// Clean speckle out of a segmentation mask: one erosion drops isolated
/// noise pixels, two dilations re-grow the surviving blob so thin parts of
/// the hand are not lost.
pub fn clean_mask(mask: &GrayImage, radius: u8) -> GrayImage {
    if radius == 0 {
        return mask.clone();
    }
    let eroded = erode(mask, Norm::L2, radius);
    let grown = dilate(&eroded, Norm::L2, radius);
    dilate(&grown, Norm::L2, radius)
}
