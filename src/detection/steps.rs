use crate::detection::{blobs, color, morphology, preprocessing};
use crate::detection::color::HsvRange;
use crate::models::{HandDetection, Point};
use crate::pipeline::{FrameData, PipelineContext, PipelineStep};
use anyhow::Result;
use image::DynamicImage;

/// Blur the color frame before thresholding
pub struct BlurStep {
    pub sigma: f32,
}

impl PipelineStep for BlurStep {
    fn process(&self, data: Vec<FrameData>, _context: &PipelineContext) -> Result<Vec<FrameData>> {
        let mut result = Vec::new();
        for mut item in data {
            let rgb = item.image.to_rgb8();
            let blurred = preprocessing::apply_blur(&rgb, self.sigma);
            item.image = DynamicImage::ImageRgb8(blurred);
            result.push(item);
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Gaussian Blur"
    }
}

/// Threshold against the glove HSV range, producing a binary mask
pub struct HsvMaskStep {
    pub range: HsvRange,
}

impl PipelineStep for HsvMaskStep {
    fn process(&self, data: Vec<FrameData>, _context: &PipelineContext) -> Result<Vec<FrameData>> {
        let mut result = Vec::new();
        for mut item in data {
            let rgb = item.image.to_rgb8();
            let mask = color::hsv_mask(&rgb, &self.range);
            item.image = DynamicImage::ImageLuma8(mask);
            result.push(item);
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "HSV Mask"
    }
}

/// Zero out the mask zones where face and shirt would dominate
pub struct SuppressZonesStep {
    pub top_fraction: f32,
    pub left_fraction: f32,
}

impl PipelineStep for SuppressZonesStep {
    fn process(&self, data: Vec<FrameData>, _context: &PipelineContext) -> Result<Vec<FrameData>> {
        let mut result = Vec::new();
        for mut item in data {
            let mut mask = item.image.to_luma8();
            preprocessing::suppress_zones(&mut mask, self.top_fraction, self.left_fraction);
            item.image = DynamicImage::ImageLuma8(mask);
            result.push(item);
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Zone Suppression"
    }
}

/// Erode/dilate cleanup of the mask
pub struct MorphologyStep {
    pub radius: u8,
}

impl PipelineStep for MorphologyStep {
    fn process(&self, data: Vec<FrameData>, _context: &PipelineContext) -> Result<Vec<FrameData>> {
        let mut result = Vec::new();
        for mut item in data {
            let mask = item.image.to_luma8();
            let cleaned = morphology::clean_mask(&mask, self.radius);
            item.image = DynamicImage::ImageLuma8(cleaned);
            result.push(item);
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Morphology"
    }
}

/// Select the largest mask blob as the hand - filters out frames with no
/// acceptable blob (many → fewer)
pub struct LargestBlobStep {
    pub min_area: u32,
}

impl PipelineStep for LargestBlobStep {
    fn process(&self, data: Vec<FrameData>, context: &PipelineContext) -> Result<Vec<FrameData>> {
        let mut result = Vec::new();

        for mut item in data {
            let mask = item.image.to_luma8();
            let Some(blob) = blobs::largest_blob(&mask, self.min_area) else {
                if context.verbose {
                    println!("  No blob above {} px, hand not detected", self.min_area);
                }
                continue;
            };

            let centroid = blob.centroid();
            item.bbox = Some(blob.bbox());
            item.set_float("centroid_x", centroid.x);
            item.set_float("centroid_y", centroid.y);
            item.set_int("area", blob.area() as i32);
            result.push(item);
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Largest Blob"
    }
}

/// Reassemble a `HandDetection` from the metadata `LargestBlobStep` attached.
pub fn detection_from(item: &FrameData) -> Option<HandDetection> {
    let bbox = item.bbox.clone()?;
    let x = item.get_float("centroid_x")?;
    let y = item.get_float("centroid_y")?;
    let area = item.get_int("area")? as u32;
    Some(HandDetection {
        centroid: Point::new(x, y),
        bbox,
        area,
    })
}
