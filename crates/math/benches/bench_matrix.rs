use std::hint::black_box;
use std::time::Instant;

use vantage_math::{Mat4, Vec3};

fn sample_transform(i: usize) -> Mat4<f32> {
    let mut m = Mat4::identity();
    m.scale_by(Vec3::new(1.0 + i as f32 * 0.01, 2.0, 0.5));
    m.rotate_axes(Vec3::new(1.0, 1.0, 1.0), Vec3::new(i as f32, 15.0, 30.0));
    m.translate(Vec3::new(i as f32, -3.0, 7.5));
    m
}

fn bench_mul(iterations: usize) {
    let a = sample_transform(1);
    let b = sample_transform(2);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(black_box(a) * black_box(b));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  mul ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_determinant(iterations: usize) {
    let m = sample_transform(3);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(black_box(m).determinant());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  determinant via minors ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_inverse(iterations: usize) {
    let m = sample_transform(4);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(black_box(m).inverse());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  inverse ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_model_matrix(iterations: usize) {
    let start = Instant::now();
    for i in 0..iterations {
        let _ = black_box(sample_transform(black_box(i % 360)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  scale/rotate/translate ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Matrix Benchmarks ===\n");

    println!("4x4 kernels:");
    bench_mul(1_000_000);
    bench_determinant(1_000_000);
    bench_inverse(1_000_000);

    println!("\nModel matrix composition:");
    bench_model_matrix(100_000);

    println!("\n=== Done ===");
}
