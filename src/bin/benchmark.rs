//! Performance comparison of serial vs. parallel generation advance.

use std::time::Instant;

use sparse_life::domain::random_soup;
use sparse_life::{LiveSet, advance, advance_parallel};

fn benchmark_serial(soup: &LiveSet, iterations: u32) -> f64 {
    let mut live = soup.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        live = advance(&live).expect("soup stays far from the coordinate boundary");
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(soup: &LiveSet, iterations: u32) -> f64 {
    let mut live = soup.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        live = advance_parallel(&live).expect("soup stays far from the coordinate boundary");
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Sparse Life Advance Benchmark ===\n");

    let sides = [50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>8} {:>12} {:>12} {:>12} {:>10}",
        "Side", "Population", "Serial", "Parallel", "Speedup");
    println!("{:-<60}", "");

    for side in sides {
        let soup = random_soup(side, side, 0.3);
        let population = soup.len();

        let serial_ms = benchmark_serial(&soup, iterations);
        let parallel_ms = benchmark_parallel(&soup, iterations);
        let speedup = serial_ms / parallel_ms;

        println!("{:>8} {:>12} {:>11.2}ms {:>11.2}ms {:>9.2}x",
            side, population, serial_ms, parallel_ms, speedup);
    }
}
