//! Order-free reductions and scans.
//!
//! Where a fold commits to left-to-right evaluation, reduce only asks
//! for an associative operation, which is what lets the parallel section
//! split the same computations across threads.

use anyhow::Result;

use crate::fmt::braced;

pub(crate) fn run() -> Result<()> {
    println!();
    println!("v.iter().copied().reduce(|a, b| a + b):");
    let v: Vec<i32> = (1..7).collect();
    println!("'v': {}", braced(&v));
    println!("reduce: {:?}", v.iter().copied().reduce(|a, b| a + b));
    println!(
        "reduce on empty: {:?}",
        std::iter::empty::<i32>().reduce(|a, b| a + b)
    );

    println!();
    println!("v.iter().product::<i64>():");
    let v: Vec<i64> = (1..7).collect();
    println!("'v': {}", braced(&v));
    println!("product: {}", v.iter().product::<i64>());

    // Inclusive scan: each output includes its own element.
    println!();
    println!("inclusive scan:");
    let v: Vec<i32> = (1..7).collect();
    println!("'v': {}", braced(&v));
    println!(
        "'res': {}",
        braced(v.iter().scan(0, |acc, &x| {
            *acc += x;
            Some(*acc)
        }))
    );

    // Exclusive scan: each output is the sum of everything before it.
    println!();
    println!("exclusive scan (emit, then add):");
    println!(
        "'res': {}",
        braced(v.iter().scan(0, |acc, &x| {
            let before = *acc;
            *acc += x;
            Some(before)
        }))
    );

    // Fused transform + reduce and transform + scan.
    println!();
    println!("v.iter().map(|x| x * x).sum() (transform + reduce):");
    println!("'v': {}", braced(&v));
    println!("sum of squares: {}", v.iter().map(|x| x * x).sum::<i32>());

    println!();
    println!("v.iter().map(|x| x * x).scan(..) (transform + scan):");
    println!(
        "prefix sums of squares: {}",
        braced(v.iter().map(|x| x * x).scan(0, |acc, x| {
            *acc += x;
            Some(*acc)
        }))
    );

    Ok(())
}
