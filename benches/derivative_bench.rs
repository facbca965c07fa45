//! Benchmarks for derivative assembly and application.
//!
//! Run with: `cargo bench --bench derivative_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cutcell::bcs::{GridBcs, ObjectBcs, DD, FF, NN};
use cutcell::types::{DomainBounds, IndexExtents, Real3};
use cutcell::{make_sphere, ApplyOp, Derivative, Mesh, Scalar, E2};

fn cut_mesh() -> Mesh {
    let bounds =
        DomainBounds::new(Real3::new(-1.0, -1.0, 0.0), Real3::new(1.0, 2.0, 2.2)).unwrap();
    Mesh::with_shapes(
        IndexExtents::new(64, 64, 64),
        bounds,
        vec![make_sphere(0, Real3::new(0.01, -0.01, 0.5), 0.25)],
    )
    .unwrap()
}

fn bench_assembly(c: &mut Criterion) {
    let mesh = cut_mesh();
    let grid_bcs = GridBcs::new(DD, FF, NN);
    let obj_bcs = ObjectBcs::dirichlet(1);

    c.bench_function("assemble_e2_64", |b| {
        b.iter(|| {
            let d = Derivative::new(
                black_box(2),
                black_box(&mesh),
                &E2,
                &grid_bcs,
                &obj_bcs,
            );
            black_box(d);
        })
    });
}

fn bench_apply(c: &mut Criterion) {
    let mesh = cut_mesh();
    let grid_bcs = GridBcs::new(DD, FF, NN);
    let obj_bcs = ObjectBcs::dirichlet(1);
    let d = Derivative::new(2, &mesh, &E2, &grid_bcs, &obj_bcs);

    let mut u = Scalar::zeros(&mesh);
    u.set_domain_from(&mesh, |p| p[0] * p[0] + p[1] * p[2]);
    u.set_boundaries_from(&mesh, |p| p[0] * p[0] + p[1] * p[2]);
    let mut nu = Scalar::zeros(&mesh);
    nu.set_domain_from(&mesh, |p| 2.0 * p[0]);
    let mut du = Scalar::zeros(&mesh);

    c.bench_function("apply_e2_64", |b| {
        b.iter(|| {
            d.apply_with_neumann(black_box(&u), black_box(&nu), &mut du, ApplyOp::Assign);
            black_box(&du);
        })
    });
}

criterion_group!(benches, bench_assembly, bench_apply);
criterion_main!(benches);
