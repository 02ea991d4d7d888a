//! Filling and generating sequences.

use anyhow::Result;

use crate::fmt::braced;
use crate::utils::SplitMix64;

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x6E4E);

    println!();
    println!("v.fill(7):");
    let mut v = vec![0; 6];
    println!("'v': {}", braced(&v));
    v.fill(7);
    println!("filled 'v': {}", braced(&v));

    // fill_n: fill a prefix, leave the rest alone.
    println!();
    println!("v[..3].fill(0):");
    v[..3].fill(0);
    println!("'v': {}", braced(&v));

    println!();
    println!("iter::repeat_with(|| rng draw).take(6) (generate):");
    let drawn: Vec<u64> = std::iter::repeat_with(|| rng.next_u64() % 10).take(6).collect();
    println!("'res': {}", braced(&drawn));

    println!();
    println!("(1..7) is iota:");
    println!("'res': {}", braced(1..7));
    println!("chars too: {}", braced('a'..='f'));

    println!();
    println!("iter::successors(Some(1), |x| Some(x * 2)).take(6):");
    println!(
        "powers of two: {}",
        braced(std::iter::successors(Some(1u32), |x| Some(x * 2)).take(6))
    );

    println!();
    println!("iter::repeat(3).take(4):");
    println!("'res': {}", braced(std::iter::repeat(3).take(4)));

    Ok(())
}
