//! Benchmarks for the candidate tracking engine

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stabletrack::{iou_matrix, CandidateTracker, Detection, NormRect, TrackerConfig};
use std::hint::black_box;

fn create_test_frames(n_detections: usize, n_frames: usize) -> Vec<Vec<Detection>> {
    (0..n_frames)
        .map(|frame| {
            (0..n_detections)
                .map(|i| {
                    // objects drift slowly so frame-to-frame IoU stays high
                    let x = (i as f32 * 0.09 + frame as f32 * 0.002) % 0.9;
                    let y = (i as f32 * 0.07 + frame as f32 * 0.001) % 0.9;
                    Detection::new(NormRect::new(x, y, 0.08, 0.08), 0.8, "object", "Object")
                })
                .collect()
        })
        .collect()
}

fn bench_tracker_update(c: &mut Criterion) {
    let frames = create_test_frames(20, 10);

    c.bench_function("tracker_update_20_detections", |b| {
        b.iter_batched(
            || CandidateTracker::new(TrackerConfig::default()),
            |mut tracker| {
                for frame in &frames {
                    let _confirmed = tracker.process_frame(black_box(frame));
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_tracker_various_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker_various_detection_counts");

    for &n_detections in &[5, 10, 20, 50] {
        let frames = create_test_frames(n_detections, 10);

        group.bench_with_input(BenchmarkId::new("detections", n_detections), &frames, |b, frames| {
            b.iter_batched(
                || CandidateTracker::new(TrackerConfig::default()),
                |mut tracker| {
                    for frame in frames {
                        let _confirmed = tracker.process_frame(black_box(frame));
                    }
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_iou_matrix(c: &mut Criterion) {
    let detections: Vec<NormRect> = (0..50)
        .map(|i| NormRect::new((i as f32 * 0.017) % 0.9, (i as f32 * 0.013) % 0.9, 0.08, 0.08))
        .collect();
    let candidates: Vec<NormRect> = (0..30)
        .map(|i| NormRect::new((i as f32 * 0.019) % 0.9, (i as f32 * 0.011) % 0.9, 0.08, 0.08))
        .collect();

    c.bench_function("iou_matrix_50x30", |b| {
        b.iter(|| iou_matrix(black_box(&detections), black_box(&candidates)))
    });
}

criterion_group!(
    benches,
    bench_tracker_update,
    bench_tracker_various_sizes,
    bench_iou_matrix
);
criterion_main!(benches);
