//! Linear passes over sorted sequences: merging, dedup, inclusion.

use anyhow::Result;
use itertools::Itertools;

use crate::fmt::braced;
use crate::utils::{SplitMix64, shuffle};

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x11EA);

    println!();
    println!("a.iter().merge(&b):");
    let a: Vec<i32> = (0..10).step_by(2).collect();
    let b: Vec<i32> = (0..10).step_by(3).collect();
    println!("'a': {}  'b': {}", braced(&a), braced(&b));
    println!("merged: {}", braced(a.iter().merge(&b)));

    // Two sorted runs back to back; the driving sort is adaptive and
    // finds them, which is the in-place merge.
    println!();
    println!("concat two sorted runs, then v.sort():");
    let mut v: Vec<i32> = a.iter().chain(&b).copied().collect();
    println!("two runs 'v': {}", braced(&v));
    v.sort();
    println!("merged 'v': {}", braced(&v));

    println!();
    println!("v.dedup():");
    let mut v = vec![1, 1, 2, 3, 3, 3, 4, 1];
    println!("'v': {}", braced(&v));
    v.dedup();
    println!("consecutive dedup 'v': {}", braced(&v));

    println!();
    println!("v.iter().dedup() (copying form):");
    let mut v = vec![5, 2, 5, 2, 2, 5];
    println!("unsorted 'v': {}", braced(&v));
    v.sort();
    println!("sorted 'v': {}", braced(&v));
    println!("unique: {}", braced(v.iter().dedup()));

    // Sorted inclusion: every needle is found by binary search.
    println!();
    println!("needles.iter().all(|x| hay.binary_search(x).is_ok()):");
    let mut hay: Vec<i32> = (0..12).collect();
    shuffle(&mut hay, &mut rng);
    hay.sort();
    let needles = vec![2, 5, 9];
    let strangers = vec![2, 5, 42];
    println!("'hay': {}", braced(&hay));
    println!(
        "includes {}?: {}",
        braced(&needles),
        needles.iter().all(|x| hay.binary_search(x).is_ok())
    );
    println!(
        "includes {}?: {}",
        braced(&strangers),
        strangers.iter().all(|x| hay.binary_search(x).is_ok())
    );

    Ok(())
}
