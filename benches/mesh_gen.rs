//! Benchmarks for partitioning and mesh generation.

use criterion::{criterion_group, criterion_main, Criterion};
use quadmesh::prelude::*;

fn circle_scene(resolution: usize) -> Vec<Shape> {
    vec![
        Shape::circle(50.0, 50.0, 30.0, 1, resolution),
        Shape::square(20.0, 20.0, 15.0, 2, resolution / 2),
    ]
}

fn bench_partition(c: &mut Criterion) {
    let shapes = circle_scene(512);
    let samples = sample_boundaries(&shapes);
    let bounds = Bounds::from_extent(100.0, 100.0);

    c.bench_function("partition_768_samples_depth8", |b| {
        b.iter(|| {
            let mut tree = Quadtree::new(bounds, 8);
            tree.partition(&samples, 1);
            tree.num_cells()
        });
    });
}

fn bench_generate_mesh(c: &mut Criterion) {
    let shapes = circle_scene(512);
    let mut domain = DomainBox::new(
        100.0,
        100.0,
        shapes.clone(),
        MeshOptions::default().with_max_depth(8),
    )
    .unwrap();
    domain.partition(1);

    c.bench_function("generate_mesh_depth8", |b| {
        b.iter(|| {
            let mesh = domain.generate_mesh();
            mesh.num_nodes()
        });
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    c.bench_function("partition_and_mesh_depth5", |b| {
        let shapes = circle_scene(128);
        b.iter(|| {
            let mut domain =
                DomainBox::new(100.0, 100.0, shapes.clone(), MeshOptions::default()).unwrap();
            domain.partition(1);
            domain.generate_mesh().num_elements()
        });
    });
}

criterion_group!(benches, bench_partition, bench_generate_mesh, bench_end_to_end);
criterion_main!(benches);
