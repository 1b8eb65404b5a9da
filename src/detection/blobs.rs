use crate::models::{BoundingBox, Point};
use image::{GrayImage, Luma};
use imageproc::region_labelling::{Connectivity, connected_components};
use std::collections::HashMap;

/// A connected region of mask pixels.
#[derive(Debug, Clone)]
pub struct Blob {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub pixel_count: u32,
    sum_x: u64,
    sum_y: u64,
}

impl Blob {
    pub fn area(&self) -> u32 {
        self.pixel_count
    }

    /// Mean position of the member pixels.
    pub fn centroid(&self) -> Point {
        Point {
            x: self.sum_x as f32 / self.pixel_count as f32,
            y: self.sum_y as f32 / self.pixel_count as f32,
        }
    }

    pub fn bbox(&self) -> BoundingBox {
        BoundingBox {
            x: self.min_x,
            y: self.min_y,
            width: self.max_x - self.min_x + 1,
            height: self.max_y - self.min_y + 1,
        }
    }
}

/// Find connected regions in a binary mask, dropping those below `min_area`.
pub fn find_blobs(mask: &GrayImage, min_area: u32) -> Vec<Blob> {
    // Label connected components (white pixels = mask hits)
    let labeled = connected_components(mask, Connectivity::Eight, Luma([0u8]));

    let mut regions: HashMap<u32, Blob> = HashMap::new();

    for (x, y, label) in labeled.enumerate_pixels() {
        let label_val = label[0];
        if label_val == 0 {
            continue; // Skip background
        }

        regions
            .entry(label_val)
            .and_modify(|blob| {
                blob.min_x = blob.min_x.min(x);
                blob.min_y = blob.min_y.min(y);
                blob.max_x = blob.max_x.max(x);
                blob.max_y = blob.max_y.max(y);
                blob.pixel_count += 1;
                blob.sum_x += x as u64;
                blob.sum_y += y as u64;
            })
            .or_insert(Blob {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
                pixel_count: 1,
                sum_x: x as u64,
                sum_y: y as u64,
            });
    }

    regions
        .into_values()
        .filter(|b| b.pixel_count >= min_area)
        .collect()
}

/// Largest region by pixel count, or `None` when nothing passes `min_area`.
pub fn largest_blob(mask: &GrayImage, min_area: u32) -> Option<Blob> {
    find_blobs(mask, min_area)
        .into_iter()
        .max_by_key(|b| b.pixel_count)
}
