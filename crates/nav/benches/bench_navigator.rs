use std::hint::black_box;
use std::time::Instant;

use fractalspace_common::ViewState;
use fractalspace_input::InputSnapshot;
use fractalspace_nav::{NavConfig, NavSession, Navigator};

fn bench_apply(label: &str, snap: InputSnapshot, iterations: usize) {
    let nav = Navigator::new(NavConfig::default());
    let mut view = ViewState::default();

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(nav.apply(black_box(&mut view), black_box(&snap), black_box(0.016)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  apply [{label}] ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_session(iterations: usize) {
    let mut session = NavSession::new(NavConfig::default());
    let pan = InputSnapshot {
        right: true,
        zoom_in: true,
        ..Default::default()
    };

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(session.advance(black_box(&pan), black_box(0.016)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  session advance ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Navigator Benchmarks ===\n");

    println!("Mapper:");
    bench_apply("neutral", InputSnapshot::NEUTRAL, 1_000_000);
    bench_apply(
        "pan+zoom",
        InputSnapshot {
            right: true,
            up: true,
            zoom_in: true,
            ..Default::default()
        },
        1_000_000,
    );

    println!("\nSession:");
    bench_session(1_000_000);

    println!("\n=== Done ===");
}
