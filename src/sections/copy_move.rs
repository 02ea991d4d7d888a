//! Copying into buffers, conditional copies, and moving out.

use anyhow::Result;

use crate::fmt::braced;
use crate::utils::{SplitMix64, scrambled, shuffle};

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0xC09E);

    println!();
    println!("w.copy_from_slice(&v):");
    let v: Vec<i32> = (1..7).collect();
    let mut w = vec![0; 6];
    println!("'v': {}  'w': {}", braced(&v), braced(&w));
    w.copy_from_slice(&v);
    println!("'w': {}", braced(&w));

    println!();
    println!("v.iter().filter(|&&x| x % 2 == 0).copied() (copy_if):");
    let v = scrambled(1..9, &mut rng);
    println!("'v': {}", braced(&v));
    let even: Vec<i32> = v.iter().filter(|&&x| x % 2 == 0).copied().collect();
    println!("'even': {}", braced(&even));

    println!();
    println!("v.iter().take(3) (copy_n) with extend (back_inserter):");
    let mut out: Vec<i32> = vec![-1];
    out.extend(v.iter().take(3));
    println!("'out': {}", braced(&out));

    // Overlapping copy within one buffer; the backward walk is chosen
    // internally when ranges overlap.
    println!();
    println!("v.copy_within(0..4, 2):");
    let mut v: Vec<i32> = (1..7).collect();
    println!("'v': {}", braced(&v));
    v.copy_within(0..4, 2);
    println!("'v': {}", braced(&v));

    println!();
    println!("remove_copy / replace_copy as filter / map:");
    let v = vec![1, 3, 5, 3, 7];
    println!("'v': {}", braced(&v));
    println!(
        "without 3s: {}",
        braced(v.iter().filter(|&&x| x != 3))
    );
    println!(
        "3s replaced: {}",
        braced(v.iter().map(|&x| if x == 3 { 33 } else { x }))
    );

    println!();
    println!("v.iter().rev() (reverse_copy):");
    println!("'res': {}", braced(v.iter().rev()));

    println!();
    println!("v[2..].iter().chain(&v[..2]) (rotate_copy):");
    let v: Vec<i32> = (1..7).collect();
    println!("'v': {}", braced(&v));
    println!("'res': {}", braced(v[2..].iter().chain(&v[..2])));

    // Sampling a few elements: scramble a copy, keep a prefix.
    println!();
    println!("sample 3 of 'v' (shuffle a copy, truncate):");
    let v: Vec<i32> = (0..10).collect();
    let mut sample = v.clone();
    shuffle(&mut sample, &mut rng);
    sample.truncate(3);
    println!("'v': {}  sample: {}", braced(&v), braced(&sample));

    // Moves: ownership transfers, nothing is duplicated.
    println!();
    println!("let w = v (move) and v.drain(..):");
    let v = vec![String::from("alpha"), String::from("beta")];
    let w = v;
    println!("moved 'w': {}", braced(&w));
    let mut w = w;
    let drained: Vec<String> = w.drain(..).collect();
    println!("drained: {}  'w' now: {}", braced(&drained), braced(&w));

    Ok(())
}
