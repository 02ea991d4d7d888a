//! Set algebra over ordered sets and sorted sequences.

use anyhow::Result;
use itertools::Itertools;
use std::collections::BTreeSet;

use crate::fmt::braced;

pub(crate) fn run() -> Result<()> {
    let a: BTreeSet<i32> = (1..8).collect();
    let b: BTreeSet<i32> = (5..12).collect();

    println!();
    println!("a.union(&b):");
    println!("'a': {}  'b': {}", braced(&a), braced(&b));
    println!("union: {}", braced(a.union(&b)));

    println!();
    println!("a.intersection(&b):");
    println!("intersection: {}", braced(a.intersection(&b)));

    println!();
    println!("a.difference(&b) / b.difference(&a):");
    println!("a - b: {}", braced(a.difference(&b)));
    println!("b - a: {}", braced(b.difference(&a)));

    println!();
    println!("a.symmetric_difference(&b):");
    println!("symmetric difference: {}", braced(a.symmetric_difference(&b)));

    println!();
    println!("a.is_subset(&b) / smaller.is_subset(&a):");
    let smaller: BTreeSet<i32> = (2..5).collect();
    println!("'smaller': {}", braced(&smaller));
    println!("a subset of b?: {}", a.is_subset(&b));
    println!("smaller subset of a?: {}", smaller.is_subset(&a));

    // The same union on plain sorted vectors: merge, then drop the
    // duplicates the overlap produced.
    println!();
    println!("xs.iter().merge(&ys).dedup() on sorted vectors:");
    let xs: Vec<i32> = (1..8).collect();
    let ys: Vec<i32> = (5..12).collect();
    println!("'xs': {}  'ys': {}", braced(&xs), braced(&ys));
    println!("union: {}", braced(xs.iter().merge(&ys).dedup()));

    Ok(())
}
