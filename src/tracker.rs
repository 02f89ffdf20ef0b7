//! Candidate tracking and confirmation engine
//!
//! Receives one frame's worth of detections at a time, matches them against
//! tracked candidates (detector tracking tokens are authoritative, IoU is the
//! fallback), confirms candidates that have been sighted often and confidently
//! enough, and purges candidates that have gone unseen for too long.

use crate::candidate::Candidate;
use crate::config::TrackerConfig;
use crate::detection::Detection;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Read-only snapshot of engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStats {
    /// Frames processed since construction or the last reset
    pub current_frame: u32,
    /// Candidates currently tracked (confirmed or not)
    pub active_candidates: usize,
    /// Confirmed candidates among the active set
    pub confirmed_candidates: usize,
}

/// Multi-frame candidate tracker with confirmation and expiry.
///
/// The engine is the sole owner of all candidate storage; `process_frame`
/// returns clones of newly confirmed candidates, never live references.
/// Single-threaded and synchronous, no internal locking.
#[derive(Debug, Clone)]
pub struct CandidateTracker {
    config: TrackerConfig,
    /// Candidates keyed by id. BTreeMap iteration order doubles as the
    /// deterministic tie-break for equal-IoU geometric matches.
    candidates: BTreeMap<String, Candidate>,
    next_candidate_id: u64,
    current_frame: u32,
}

impl CandidateTracker {
    /// Create a new tracker with the given thresholds
    pub fn new(config: TrackerConfig) -> Self {
        log::info!(
            "Creating CandidateTracker with config: min_frames_to_confirm={}, min_confidence={:.3}, min_box_area={:.4}, max_frame_gap={}, min_match_score={:.3}, expiry_frames={}",
            config.min_frames_to_confirm,
            config.min_confidence,
            config.min_box_area,
            config.max_frame_gap,
            config.min_match_score,
            config.expiry_frames,
        );
        CandidateTracker {
            config,
            candidates: BTreeMap::new(),
            next_candidate_id: 1,
            current_frame: 0,
        }
    }

    /// The thresholds this tracker was constructed with
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Find the candidate a detection belongs to, if any.
    ///
    /// A tracking token resolves identity directly and is exempt from the
    /// frame-gap and overlap checks. Without a token the best-overlapping
    /// candidate wins, ties going to the lowest id.
    fn match_detection(&self, detection: &Detection, touched: &HashSet<String>) -> Option<String> {
        if let Some(token) = &detection.tracking_token {
            return self.candidates.contains_key(token).then(|| token.clone());
        }

        let mut best_id: Option<&String> = None;
        let mut best_iou = 0.0f32;
        for (id, candidate) in &self.candidates {
            if touched.contains(id) {
                continue;
            }
            if candidate.frames_unseen(self.current_frame) > self.config.max_frame_gap {
                continue;
            }
            let iou = candidate.last_bbox.iou(&detection.bbox);
            if iou >= self.config.min_match_score && iou > best_iou {
                best_iou = iou;
                best_id = Some(id);
            }
        }
        best_id.cloned()
    }

    /// Start tracking a new candidate, reusing the detection's token as its
    /// id when present
    fn create_candidate(&mut self, detection: &Detection) -> String {
        let id = match &detection.tracking_token {
            Some(token) => token.clone(),
            None => {
                let id = format!("cand-{:06}", self.next_candidate_id);
                self.next_candidate_id += 1;
                id
            }
        };
        log::debug!(
            "Frame {}: new candidate {} ({}, confidence {:.3})",
            self.current_frame,
            id,
            detection.category,
            detection.confidence
        );
        self.candidates.insert(
            id.clone(),
            Candidate::new(id.clone(), detection, self.current_frame),
        );
        id
    }

    /// Advance one frame: match, update, confirm, and expire.
    ///
    /// Returns the candidates that became confirmed during this call only;
    /// a candidate is never returned a second time. Empty input is valid and
    /// still advances the frame counter and runs expiry.
    pub fn process_frame(&mut self, detections: &[Detection]) -> Vec<Candidate> {
        // Step 1: Advance the frame counter
        self.current_frame += 1;

        // Step 2: Match or create a candidate for every admitted detection.
        // Detections below the area threshold never touch engine state.
        let mut touched: HashSet<String> = HashSet::new();
        for detection in detections {
            if detection.box_area < self.config.min_box_area {
                continue;
            }

            let id = match self.match_detection(detection, &touched) {
                Some(id) => {
                    if let Some(candidate) = self.candidates.get_mut(&id) {
                        candidate.observe(detection, self.current_frame);
                    }
                    id
                }
                None => self.create_candidate(detection),
            };
            touched.insert(id);
        }

        // Step 3: Confirm candidates that now meet the sighting and
        // confidence thresholds. Candidates untouched this frame cannot
        // newly qualify.
        let mut newly_confirmed = Vec::new();
        for candidate in self.candidates.values_mut() {
            if !candidate.confirmed
                && candidate.seen_count >= self.config.min_frames_to_confirm
                && candidate.max_confidence >= self.config.min_confidence
            {
                candidate.confirmed = true;
                log::debug!(
                    "Frame {}: confirmed candidate {} ({}, seen {} frames, max confidence {:.3})",
                    self.current_frame,
                    candidate.id,
                    candidate.category,
                    candidate.seen_count,
                    candidate.max_confidence
                );
                newly_confirmed.push(candidate.clone());
            }
        }

        // Step 4: Expire candidates unseen for too long, confirmed or not
        let before = self.candidates.len();
        let current_frame = self.current_frame;
        let expiry_frames = self.config.expiry_frames;
        self.candidates
            .retain(|_, candidate| candidate.frames_unseen(current_frame) <= expiry_frames);
        if self.candidates.len() < before {
            log::debug!(
                "Frame {}: expired {} candidate(s)",
                self.current_frame,
                before - self.candidates.len()
            );
        }

        newly_confirmed
    }

    /// Read-only snapshot of the engine counters, recomputed on demand
    pub fn get_stats(&self) -> TrackerStats {
        TrackerStats {
            current_frame: self.current_frame,
            active_candidates: self.candidates.len(),
            confirmed_candidates: self.candidates.values().filter(|c| c.confirmed).count(),
        }
    }

    /// Clear all candidates and reset the frame and id counters. Idempotent.
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.next_candidate_id = 1;
        self.current_frame = 0;
    }

    /// Iterate over the currently tracked candidates in id order
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.values()
    }

    /// Look up a tracked candidate by id
    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.get(id)
    }

    /// Number of currently tracked candidates
    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// Stop tracking a specific candidate
    pub fn remove_candidate(&mut self, id: &str) {
        self.candidates.remove(id);
    }
}

impl Default for CandidateTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
