use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use stl_viewer::scene::MeshGeometry;
use stl_viewer::types::Triangle;

/// Deterministic triangle soup on a wavy height field
fn triangle_soup(count: usize) -> Vec<Triangle> {
    (0..count)
        .map(|i| {
            let x = (i % 512) as f32;
            let z = (i / 512) as f32;
            let h = |x: f32, z: f32| (x * 0.37).sin() * (z * 0.23).cos() * 4.0;
            Triangle::new(
                Vec3::new(x, h(x, z), z),
                Vec3::new(x + 1.0, h(x + 1.0, z), z),
                Vec3::new(x, h(x, z + 1.0), z + 1.0),
            )
        })
        .collect()
}

fn bench_mesh_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_geometry");

    for count in [1_000, 100_000, 1_000_000] {
        let triangles = triangle_soup(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &triangles, |b, tris| {
            b.iter(|| MeshGeometry::from_triangles(black_box(tris), black_box(0.05)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mesh_geometry);
criterion_main!(benches);
