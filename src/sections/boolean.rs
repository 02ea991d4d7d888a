//! Boolean reductions: all, any, none.

use anyhow::Result;

use crate::fmt::braced;

pub(crate) fn run() -> Result<()> {
    let v: Vec<i32> = (0..5).map(|i| i * 2).collect();

    println!();
    println!("v.iter().all(|&x| x % 2 == 0):");
    println!("'v': {}", braced(&v));
    println!("'res': {}", v.iter().all(|&x| x % 2 == 0));

    println!();
    println!("v.iter().any(|&x| x < 0):");
    println!("'v': {}", braced(&v));
    println!("'res': {}", v.iter().any(|&x| x < 0));

    println!();
    println!("none: !v.iter().any(|&x| x > 8):");
    println!("'v': {}", braced(&v));
    println!("'res': {}", !v.iter().any(|&x| x > 8));

    // Both short-circuit; all() on an empty sequence is vacuously true.
    println!();
    println!("empty.all(..) / empty.any(..):");
    let empty: Vec<i32> = Vec::new();
    println!("all: {}", empty.iter().all(|&x| x > 0));
    println!("any: {}", empty.iter().any(|&x| x > 0));

    Ok(())
}
