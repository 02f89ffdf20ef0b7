//! Per-frame detection records consumed by the tracker

use crate::bbox::NormRect;
use serde::{Deserialize, Serialize};

/// Single per-frame observation of one candidate object.
///
/// Produced by the detector once per frame per object. `box_area` is
/// detector-supplied alongside `bbox`; the tracker compares it against the
/// admission threshold as given and does not recompute it from the box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detector-assigned stable identity hint, when its own tracking supports one
    pub tracking_token: Option<String>,
    /// Bounding box in normalized [0,1] coordinates
    pub bbox: NormRect,
    /// Detection confidence score (0-1)
    pub confidence: f32,
    /// Classification category hint
    pub category: String,
    /// Human-readable label hint
    pub label: String,
    /// Area of `bbox` in normalized units
    pub box_area: f32,
}

impl Detection {
    /// Create an untracked detection, deriving `box_area` from the rect.
    ///
    /// Detectors that precompute their own area can set the field directly.
    pub fn new(bbox: NormRect, confidence: f32, category: &str, label: &str) -> Self {
        Self {
            tracking_token: None,
            bbox,
            confidence,
            category: category.to_string(),
            label: label.to_string(),
            box_area: bbox.area(),
        }
    }

    /// Attach a tracking token
    pub fn with_token<S: Into<String>>(mut self, token: S) -> Self {
        self.tracking_token = Some(token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_derives_area() {
        let det = Detection::new(NormRect::new(0.1, 0.1, 0.2, 0.2), 0.9, "cup", "Coffee Cup");
        assert_abs_diff_eq!(det.box_area, 0.04, epsilon = 1e-6);
        assert!(det.tracking_token.is_none());
        assert_eq!(det.category, "cup");
        assert_eq!(det.label, "Coffee Cup");
    }

    #[test]
    fn test_with_token() {
        let det = Detection::new(NormRect::new(0.0, 0.0, 0.1, 0.1), 0.5, "book", "Book")
            .with_token("vision-42");
        assert_eq!(det.tracking_token.as_deref(), Some("vision-42"));
    }

    #[test]
    fn test_explicit_area_is_kept() {
        let mut det = Detection::new(NormRect::new(0.0, 0.0, 0.1, 0.1), 0.5, "book", "Book");
        det.box_area = 0.5;
        assert_eq!(det.box_area, 0.5);
    }
}
