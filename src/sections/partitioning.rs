//! Splitting a sequence by a predicate.
//!
//! Partitioning is ordering with respect to a boolean test: everything
//! that passes groups in front of everything that fails.

use anyhow::Result;

use crate::fmt::braced;
use crate::utils::{SplitMix64, scrambled};

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x9A47);

    // In-place partition; the returned index is the split point.
    println!();
    println!("itertools::partition(v.iter_mut(), |&x| x < 5):");
    let mut v = scrambled(1..9, &mut rng);
    println!("'v': {}", braced(&v));
    let split = itertools::partition(v.iter_mut(), |&x| x < 5);
    println!("x < 5: {}", braced(&v[..split]));
    println!("x >= 5: {}", braced(&v[split..]));

    // The iterator form copies out but keeps relative order on both
    // sides, like a stable partition.
    println!();
    println!("v.iter().copied().partition(|&x| x < 5):");
    let v = scrambled(1..9, &mut rng);
    println!("'v': {}", braced(&v));
    let (low, high): (Vec<i32>, Vec<i32>) = v.iter().copied().partition(|&x| x < 5);
    println!("x < 5: {}", braced(&low));
    println!("x >= 5: {}", braced(&high));

    println!();
    println!("is 'v' partitioned by even? (skip_while(even).all(odd)):");
    let mut v = scrambled(1..9, &mut rng);
    itertools::partition(v.iter_mut(), |&x| x % 2 == 0);
    println!("'v': {}", braced(&v));
    let partitioned = v
        .iter()
        .skip_while(|&&x| x % 2 == 0)
        .all(|&x| x % 2 != 0);
    println!("partitioned?: {partitioned}");

    println!();
    println!("partition into 'even'/'odd' vectors:");
    let v = scrambled(1..9, &mut rng);
    println!("'v': {}", braced(&v));
    let (even, odd): (Vec<i32>, Vec<i32>) = v.iter().copied().partition(|&x| x % 2 == 0);
    println!("'even': {}", braced(&even));
    println!("'odd': {}", braced(&odd));

    // nth-element: one element lands in its sorted position, with
    // everything greater (here) in front of it and everything smaller
    // behind, neither side sorted.
    println!();
    println!("v.select_nth_unstable_by(4, |a, b| b.cmp(a)):");
    let mut v = scrambled(1..9, &mut rng);
    println!("unsorted 'v': {}", braced(&v));
    let (before, nth, after) = v.select_nth_unstable_by(4, |a: &i32, b: &i32| b.cmp(a));
    println!("before: {}  nth: {}  after: {}", braced(&*before), nth, braced(&*after));

    Ok(())
}
