//! Parallel execution on isolated calls.
//!
//! Rayon plays the role of the parallel execution policies: the same
//! sorts, reductions, and searches, split across a work-stealing pool.
//! Every call here is isolated; no state is shared between them.

use anyhow::Result;
use rayon::prelude::*;

use crate::fmt::braced;
use crate::topk::{TopK, top_k};
use crate::utils::{SplitMix64, scrambled, shuffle};

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x9A2A);

    println!();
    println!("rayon sees {} CPUs", num_cpus::get());

    println!();
    println!("v.par_sort_unstable() on 100_000 items:");
    let mut v: Vec<i32> = (0..100_000).collect();
    shuffle(&mut v, &mut rng);
    println!("head before: {}", braced(&v[..8]));
    v.par_sort_unstable();
    println!("head after: {}  tail after: {}", braced(&v[..8]), braced(&v[v.len() - 8..]));

    // An associative reduction splits cleanly; both modes agree.
    println!();
    println!("v.par_iter().map(i64::from).sum() vs sequential:");
    let par_sum: i64 = v.par_iter().copied().map(i64::from).sum();
    let seq_sum: i64 = v.iter().copied().map(i64::from).sum();
    println!("parallel: {par_sum}  sequential: {seq_sum}  equal: {}", par_sum == seq_sum);

    // find_any returns whichever thread wins, not the first position.
    println!();
    println!("v.par_iter().find_any(|&&x| x == 77_777):");
    println!("found: {:?}", v.par_iter().find_any(|&&x| x == 77_777));

    // Bounded selection composes across partitions: select per half,
    // then fold the halves through one more bounded buffer.
    println!();
    println!("join(top_k(left, 5), top_k(right, 5)), then merge:");
    let data = scrambled(0..1000, &mut rng);
    let (left, right) = data.split_at(data.len() / 2);
    let (top_left, top_right) = rayon::join(|| top_k(left.to_vec(), 5), || top_k(right.to_vec(), 5));
    println!("left top 5: {}", braced(&top_left));
    println!("right top 5: {}", braced(&top_right));
    let mut merged = TopK::new(5);
    merged.extend(top_left);
    merged.extend(top_right);
    println!("overall top 5: {}", braced(merged.into_sorted_vec()));

    Ok(())
}
