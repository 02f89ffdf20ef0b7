//! Per-object tracking state accumulated across frames

use crate::bbox::NormRect;
use crate::detection::Detection;
use serde::{Deserialize, Serialize};

/// One physical-object hypothesis tracked across frames.
///
/// Owned exclusively by the engine; callers receive clones, never live
/// references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable identifier for the candidate's lifetime (reuses the detector's
    /// tracking token when one was present at creation)
    pub id: String,
    /// Number of frames in which this candidate was matched
    pub seen_count: u32,
    /// Maximum confidence ever observed
    pub max_confidence: f32,
    /// Running mean of observed normalized box areas
    pub average_box_area: f32,
    /// Category of the most confident sighting
    pub category: String,
    /// Label of the most confident sighting
    pub label: String,
    /// Most recently observed box, used for geometric matching
    pub last_bbox: NormRect,
    /// Frame index of the most recent match
    pub last_seen_frame: u32,
    /// True once confirmation criteria have been met; never revoked
    pub confirmed: bool,
}

impl Candidate {
    /// Create a new candidate from its first admitted observation
    pub fn new(id: String, detection: &Detection, frame: u32) -> Self {
        Self {
            id,
            seen_count: 1,
            max_confidence: detection.confidence,
            average_box_area: detection.box_area,
            category: detection.category.clone(),
            label: detection.label.clone(),
            last_bbox: detection.bbox,
            last_seen_frame: frame,
            confirmed: false,
        }
    }

    /// Fold a matched observation into the candidate state.
    ///
    /// `seen_count` advances at most once per frame, so repeated observations
    /// within one frame (possible with duplicated tracking tokens) don't
    /// inflate the frame count.
    pub fn observe(&mut self, detection: &Detection, frame: u32) {
        if self.last_seen_frame < frame {
            self.seen_count += 1;
        }

        self.average_box_area +=
            (detection.box_area - self.average_box_area) / self.seen_count as f32;

        // The candidate keeps the label of its most confident sighting,
        // not necessarily its most recent one
        if detection.confidence > self.max_confidence {
            self.max_confidence = detection.confidence;
            self.category = detection.category.clone();
            self.label = detection.label.clone();
        }

        self.last_bbox = detection.bbox;
        self.last_seen_frame = frame;
    }

    /// Frames elapsed since this candidate was last matched
    pub fn frames_unseen(&self, current_frame: u32) -> u32 {
        current_frame.saturating_sub(self.last_seen_frame)
    }
}
