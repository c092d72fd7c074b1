use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use trisolve::{
    cholesky_decompose, determinant, doolittle_decompose, lu_decompose_pivoted, Matrix,
    TriangularFactors,
};

// diagonally dominant and symmetric, valid input for every factorization
fn spd_rows(n: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..i {
            let v = rng.random_range(-1.0..1.0);
            rows[i][j] = v;
            rows[j][i] = v;
        }
        rows[i][i] = n as f64 + 1.0;
    }
    rows
}

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorize");
    let mut rng = StdRng::seed_from_u64(0);

    for n in [8, 32, 128] {
        let rows = spd_rows(n, &mut rng);
        let a = Matrix::from_rows(rows.clone()).expect("square matrix");
        let a_faer = faer::Mat::<f64>::from_fn(n, n, |i, j| rows[i][j]);
        let b = vec![1.0; n];

        group.bench_with_input(BenchmarkId::new("cholesky", n), &a, |bench, a| {
            bench.iter(|| black_box(cholesky_decompose(a)))
        });

        group.bench_with_input(BenchmarkId::new("cholesky_faer", n), &a_faer, |bench, a| {
            bench.iter(|| black_box(a.cholesky(faer::Side::Lower).is_ok()))
        });

        group.bench_with_input(BenchmarkId::new("doolittle", n), &a, |bench, a| {
            bench.iter(|| black_box(doolittle_decompose(a)))
        });

        group.bench_with_input(BenchmarkId::new("lu_pivoted", n), &a, |bench, a| {
            bench.iter(|| black_box(lu_decompose_pivoted(a)))
        });

        group.bench_with_input(BenchmarkId::new("lu_faer", n), &a_faer, |bench, a| {
            bench.iter(|| {
                a.partial_piv_lu();
                black_box(());
            })
        });

        group.bench_with_input(BenchmarkId::new("determinant", n), &a, |bench, a| {
            bench.iter(|| black_box(determinant(a)))
        });

        let chol = cholesky_decompose(&a).expect("positive definite");
        group.bench_with_input(BenchmarkId::new("solve", n), &b, |bench, b| {
            bench.iter(|| black_box(chol.solve(b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_factorize);
criterion_main!(benches);
