//! Normalized bounding box operations and IoU calculations

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned bounding box in normalized [0,1] image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormRect {
    /// X coordinate of top-left corner (normalized 0-1)
    pub x: f32,
    /// Y coordinate of top-left corner (normalized 0-1)
    pub y: f32,
    /// Width of bounding box (normalized 0-1)
    pub width: f32,
    /// Height of bounding box (normalized 0-1)
    pub height: f32,
}

impl NormRect {
    /// Create new normalized rect
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get center point coordinates
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Get area in normalized units
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Check if two rects overlap
    pub fn intersects(&self, other: &NormRect) -> bool {
        let x_overlap = self.x < other.x + other.width && self.x + self.width > other.x;
        let y_overlap = self.y < other.y + other.height && self.y + self.height > other.y;
        x_overlap && y_overlap
    }

    /// Calculate intersection over union (IoU) with another rect
    pub fn iou(&self, other: &NormRect) -> f32 {
        // Early exit for non-overlapping rects
        if !self.intersects(other) {
            return 0.0;
        }

        let x_left = self.x.max(other.x);
        let y_top = self.y.max(other.y);
        let x_right = (self.x + self.width).min(other.x + other.width);
        let y_bottom = (self.y + self.height).min(other.y + other.height);

        let intersection_area = (x_right - x_left) * (y_bottom - y_top);
        let union_area = self.area() + other.area() - intersection_area;

        if union_area > 0.0 {
            intersection_area / union_area
        } else {
            0.0
        }
    }
}

impl fmt::Display for NormRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NormRect({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Compute IoU matrix between detection rects and candidate rects with parallel processing
/// Returns: (n_detections, n_candidates) IoU matrix
pub fn iou_matrix(detections: &[NormRect], candidates: &[NormRect]) -> Vec<Vec<f32>> {
    if detections.is_empty() || candidates.is_empty() {
        return vec![vec![]; detections.len()];
    }

    detections
        .par_iter()
        .map(|det| candidates.iter().map(|cand| det.iou(cand)).collect())
        .collect()
}
