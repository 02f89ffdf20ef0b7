//! Configuration for the candidate tracker
//!
//! A `TrackerConfig` is supplied once at engine construction. There is no
//! runtime reconfiguration; changing thresholds requires a new engine.

use crate::error::{Result, TrackError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds governing matching, confirmation, and expiry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Minimum distinct frames a candidate must be observed in before confirmation
    pub min_frames_to_confirm: u32,
    /// Minimum confidence, ever observed, required for confirmation
    pub min_confidence: f32,
    /// Minimum per-detection normalized area; smaller detections are discarded before matching
    pub min_box_area: f32,
    /// Maximum frame gap tolerated for geometric matching (token matches are exempt)
    pub max_frame_gap: u32,
    /// Minimum IoU required to match a detection to a candidate without a tracking token
    pub min_match_score: f32,
    /// Frames a candidate may go unseen before it is purged
    pub expiry_frames: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_frames_to_confirm: 3,
            min_confidence: 0.4, // matches typical detector confidence levels (~30-50%)
            min_box_area: 0.001, // rejects sub-0.1% specks that are sensor noise
            max_frame_gap: 5,
            min_match_score: 0.3,
            expiry_frames: 10,
        }
    }
}

impl TrackerConfig {
    /// Check threshold ranges.
    ///
    /// Ratio thresholds must lie in [0, 1] and at least one sighting is
    /// required for confirmation.
    pub fn validate(&self) -> Result<()> {
        if self.min_frames_to_confirm == 0 {
            return Err(TrackError::config("min_frames_to_confirm must be >= 1"));
        }
        for (name, value) in [
            ("min_confidence", self.min_confidence),
            ("min_box_area", self.min_box_area),
            ("min_match_score", self.min_match_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TrackError::config(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
