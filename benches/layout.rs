use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use starmap_overlay::{LabelText, MapObject, ObjectKind, OverlayConfig, Scene, compute_layout};
use std::hint::black_box;

/// Objects on two concentric rings, dense enough that radii shrink and
/// labels fight for space.
fn ring_scene(count: usize) -> Scene {
    let mut objects = Vec::with_capacity(count);
    for i in 0..count {
        let angle = i as f32 * std::f32::consts::TAU / count.max(1) as f32;
        let ring = if i % 2 == 0 { 900.0 } else { 1500.0 };
        objects.push(MapObject {
            id: format!("obj-{i}"),
            kind: if i % 3 == 0 {
                ObjectKind::Gate
            } else {
                ObjectKind::Body
            },
            pos: (ring * angle.cos(), ring * angle.sin()),
            radius: 40.0 + (i % 5) as f32 * 12.0,
            label: LabelText::new(format!("Object {i}"), 56.0 + (i % 4) as f32 * 10.0, 13.0),
            known: true,
        });
    }
    Scene {
        objects,
        viewport: (800.0, 600.0),
    }
}

fn bench_compute_layout(c: &mut Criterion) {
    let config = OverlayConfig::default();
    let mut group = c.benchmark_group("compute_layout");
    for count in [4usize, 16, 64, 128] {
        let scene = ring_scene(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &scene, |b, scene| {
            b.iter(|| black_box(compute_layout(scene, &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_layout);
criterion_main!(benches);
