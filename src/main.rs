use lapboard::constants::*;
use lapboard::Lapboard;
use std::error::Error;
use std::hint::black_box;

// Spin the cpu so the laps have something to measure.
fn count_till(limit: u64) {
    for i in 0..limit {
        black_box(i);
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    #[cfg(debug_assertions)]
    println!("{LAPBOARD}\n{DEV} v.{}", env!("CARGO_PKG_VERSION"));

    #[cfg(not(debug_assertions))]
    println!("{LAPBOARD}\n{RELEASE} v.{}", env!("CARGO_PKG_VERSION"));

    let mut board = Lapboard::new(DEMO_HEADLINE);

    for (label, limit) in [
        ("till 10_000", 10_000),
        ("till 10_000_000", 10_000_000),
        ("till 100_000_000", 100_000_000),
    ] {
        board.start(label)?;
        count_till(limit);
        board.stop()?;
    }

    print!("{board}");
    println!();

    for lap in board.laps() {
        println!("{}: {:.6} ms", lap.label(), lap.duration_ms());
    }

    Ok(())
}
