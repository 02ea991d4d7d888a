//! Swapping values, elements, and whole slice ranges.

use anyhow::Result;
use std::mem;

use crate::fmt::braced;

pub(crate) fn run() -> Result<()> {
    println!();
    println!("mem::swap(&mut a, &mut b):");
    let mut a = 1;
    let mut b = 99;
    println!("before: a={a} b={b}");
    mem::swap(&mut a, &mut b);
    println!("after: a={a} b={b}");

    println!();
    println!("v.swap(0, 4):");
    let mut v: Vec<i32> = (0..6).collect();
    println!("'v': {}", braced(&v));
    v.swap(0, 4);
    println!("swapped 'v': {}", braced(&v));

    println!();
    println!("v[..3].swap_with_slice(&mut w[..3]):");
    let mut v: Vec<i32> = (0..6).collect();
    let mut w: Vec<i32> = (10..16).collect();
    println!("'v': {}  'w': {}", braced(&v), braced(&w));
    v[..3].swap_with_slice(&mut w[..3]);
    println!("'v': {}  'w': {}", braced(&v), braced(&w));

    // exchange: put a new value in, get the old one back.
    println!();
    println!("mem::replace(&mut x, 7) / mem::take(&mut s):");
    let mut x = 3;
    let old = mem::replace(&mut x, 7);
    println!("old: {old}  x: {x}");
    let mut s = String::from("moved out");
    let taken = mem::take(&mut s);
    println!("taken: \"{taken}\"  s: \"{s}\"");

    Ok(())
}
