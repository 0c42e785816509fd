use std::env;
use std::time::Instant;

use bitvector::{BitVector, Result};
use log::{debug, error, info, LevelFilter};
use rand::Rng;
use simple_logger::SimpleLogger;

const SIZE: usize = 100_000;
const ROUNDS: usize = 1000;

fn main() {
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("logger: {}", e);
    }

    let mut args = env::args().skip(1);
    let size = args.next().and_then(|s| s.parse().ok()).unwrap_or(SIZE);
    let rounds = args.next().and_then(|s| s.parse().ok()).unwrap_or(ROUNDS);

    if let Err(e) = benchmark_bit_vector(size, rounds) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn benchmark_bit_vector(size: usize, rounds: usize) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut a = BitVector::new(size);
    let mut b = BitVector::new(size);
    if size == 0 {
        info!("Nothing to do for an empty BitVector");
        return Ok(());
    }

    let indices: Vec<(usize, bool)> = (0..size)
        .map(|_| (rng.gen_range(0..size), rng.gen_bool(0.5)))
        .collect();

    let now = Instant::now();
    for _ in 0..rounds {
        for &(i, v) in &indices {
            a.set(i, v)?;
            b.set(size - 1 - i, !v)?;
        }
    }
    info!(
        "Number of sets: {}, Milliseconds: {}, MOps: {}",
        2 * size * rounds,
        now.elapsed().as_millis(),
        ((2 * size * rounds) as f32)
            / ((now.elapsed().as_nanos() as f32) / 1_000_000_000f32)
            / 1_000_000f32
    );

    let now = Instant::now();
    let mut ones = 0usize;
    for _ in 0..rounds {
        for &(i, _) in &indices {
            if a.get(i)? {
                ones += 1;
            }
        }
    }
    info!(
        "Number of gets: {}, set bits seen: {}, Milliseconds: {}",
        size * rounds,
        ones,
        now.elapsed().as_millis()
    );

    let now = Instant::now();
    let mut and = a.and(&b)?;
    let mut or = a.or(&b)?;
    for _ in 1..rounds {
        and = a.and(&b)?;
        or = a.or(&b)?;
    }
    info!(
        "AND/OR of {} bits x {} rounds, Milliseconds: {}",
        size,
        rounds,
        now.elapsed().as_millis()
    );

    for i in 0..size.min(16) {
        debug!(
            "Bit: {}, a: {}, b: {}, and: {}, or: {}",
            i,
            a.get(i)?,
            b.get(i)?,
            and.get(i)?,
            or.get(i)?
        );
    }
    Ok(())
}
