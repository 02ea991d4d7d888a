//! Left folds: accumulation strictly in sequence order.

use anyhow::Result;
use itertools::Itertools;

use crate::fmt::braced;

pub(crate) fn run() -> Result<()> {
    println!();
    println!("v.iter().fold(0, |acc, x| acc + x) and v.iter().sum():");
    let v: Vec<i32> = (1..7).collect();
    println!("'v': {}", braced(&v));
    println!("fold: {}", v.iter().fold(0, |acc, x| acc + x));
    println!("sum: {}", v.iter().sum::<i32>());

    println!();
    println!("v.iter().fold(i32::MIN, |acc, &x| acc.max(x)):");
    println!("max by fold: {}", v.iter().fold(i32::MIN, |acc, &x| acc.max(x)));

    // Running (prefix) sums.
    println!();
    println!("v.iter().scan(0, |acc, &x| {{ *acc += x; Some(*acc) }}):");
    println!("'v': {}", braced(&v));
    println!(
        "prefix sums: {}",
        braced(v.iter().scan(0, |acc, &x| {
            *acc += x;
            Some(*acc)
        }))
    );

    println!();
    println!("v.iter().tuple_windows().map(|(a, b)| b - a):");
    let v = vec![3, 4, 8, 15, 16, 23];
    println!("'v': {}", braced(&v));
    println!(
        "adjacent differences: {}",
        braced(v.iter().tuple_windows().map(|(a, b)| b - a))
    );

    println!();
    println!("a.iter().zip(&b).map(|(x, y)| x * y).sum() (inner product):");
    let a: Vec<i32> = (1..5).collect();
    let b: Vec<i32> = (1..5).rev().collect();
    println!("'a': {}  'b': {}", braced(&a), braced(&b));
    println!(
        "inner product: {}",
        a.iter().zip(&b).map(|(x, y)| x * y).sum::<i32>()
    );

    // Folds are order-dependent: subtraction makes that visible.
    println!();
    println!("v.iter().fold(100, |acc, x| acc - x):");
    let v = vec![1, 2, 3];
    println!("'v': {}", braced(&v));
    println!("left-to-right: {}", v.iter().fold(100, |acc, x| acc - x));
    println!("reversed: {}", v.iter().rev().fold(100, |acc, x| acc - x));

    Ok(())
}
