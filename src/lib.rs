//! Pure Rust detection-to-candidate tracking and confirmation library
//!
//! Converts noisy per-frame object-detection output into a small set of
//! stable, confirmed physical objects suitable for downstream cataloguing.
//! Detector tracking tokens resolve identity when present; IoU-based
//! geometric matching is the fallback.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stabletrack::{CandidateTracker, Detection, NormRect, TrackerConfig};
//!
//! let mut tracker = CandidateTracker::new(TrackerConfig::default());
//!
//! // One call per analyzed camera frame
//! let detections = vec![
//!     Detection::new(NormRect::new(0.1, 0.1, 0.2, 0.2), 0.9, "cup", "Coffee Cup")
//!         .with_token("vision-17"),
//! ];
//! let confirmed = tracker.process_frame(&detections);
//! for candidate in confirmed {
//!     println!("confirmed {} after {} frames", candidate.id, candidate.seen_count);
//! }
//! ```

pub mod bbox;
pub mod candidate;
pub mod config;
pub mod detection;
pub mod error;
pub mod tracker;

pub use bbox::{iou_matrix, NormRect};
pub use candidate::Candidate;
pub use config::TrackerConfig;
pub use detection::Detection;
pub use error::{Result, TrackError};
pub use tracker::{CandidateTracker, TrackerStats};
