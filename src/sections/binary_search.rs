//! Divide and conquer on sorted data: binary search and bounds.

use anyhow::Result;

use crate::fmt::braced;

pub(crate) fn run() -> Result<()> {
    let v = vec![1, 2, 2, 2, 3, 5, 8, 8, 13];

    println!();
    println!("v.binary_search(&5):");
    println!("'v': {}", braced(&v));
    println!("binary_search(&5): {:?}", v.binary_search(&5));
    println!("binary_search(&4): {:?}", v.binary_search(&4));

    // partition_point is the lower bound; with <= it becomes the upper
    // bound. Both only require the predicate to be partitioned, not the
    // data to be fully sorted.
    println!();
    println!("v.partition_point(|&x| x < 2) / partition_point(|&x| x <= 2):");
    println!("'v': {}", braced(&v));
    let lower = v.partition_point(|&x| x < 2);
    let upper = v.partition_point(|&x| x <= 2);
    println!("lower bound of 2: {lower}");
    println!("upper bound of 2: {upper}");

    println!();
    println!("equal range of 2 is v[lower..upper]:");
    println!("equal range: {}", braced(&v[lower..upper]));

    // Searching under a non-natural order takes the comparator form.
    println!();
    println!("w.binary_search_by(|x| 8.cmp(x)) on a descending 'w':");
    let w: Vec<i32> = v.iter().rev().copied().collect();
    println!("'w': {}", braced(&w));
    println!("position of 8: {:?}", w.binary_search_by(|x| 8.cmp(x)));

    Ok(())
}
