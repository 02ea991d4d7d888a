//! Rewriting sequences: mapping, replacing, removing, rotating,
//! permutations.

use anyhow::Result;
use itertools::Itertools;

use crate::fmt::{braced, braced_with};
use crate::utils::{SplitMix64, scrambled, shuffle};

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x7249);

    println!();
    println!("v.iter().map(|x| x * x):");
    let v: Vec<i32> = (1..6).collect();
    println!("'v': {}", braced(&v));
    println!("squares: {}", braced(v.iter().map(|x| x * x)));

    // The two-sequence form zips first.
    println!();
    println!("a.iter().zip(&b).map(|(x, y)| x + y):");
    let a: Vec<i32> = (1..6).collect();
    let b: Vec<i32> = (10..60).step_by(10).collect();
    println!("'a': {}  'b': {}", braced(&a), braced(&b));
    println!("sums: {}", braced(a.iter().zip(&b).map(|(x, y)| x + y)));

    println!();
    println!("v.iter_mut().for_each(|x| *x *= 2) (in place):");
    let mut v: Vec<i32> = (1..6).collect();
    println!("'v': {}", braced(&v));
    v.iter_mut().for_each(|x| *x *= 2);
    println!("doubled 'v': {}", braced(&v));

    println!();
    println!("replace every 3 with 33:");
    let mut v = vec![1, 3, 5, 3, 7];
    println!("'v': {}", braced(&v));
    for x in &mut v {
        if *x == 3 {
            *x = 33;
        }
    }
    println!("replaced 'v': {}", braced(&v));

    // retain is the remove-erase idiom in one call.
    println!();
    println!("v.retain(|&x| x % 2 != 0):");
    let mut v = scrambled(1..9, &mut rng);
    println!("'v': {}", braced(&v));
    v.retain(|&x| x % 2 != 0);
    println!("odds kept 'v': {}", braced(&v));

    println!();
    println!("v.reverse() / v.rotate_left(2):");
    let mut v: Vec<i32> = (1..7).collect();
    println!("'v': {}", braced(&v));
    v.reverse();
    println!("reversed 'v': {}", braced(&v));
    v.rotate_left(2);
    println!("rotated 'v': {}", braced(&v));

    // Shift out the front; the vector shrinks, unlike a rotate.
    println!();
    println!("v.drain(..2):");
    let mut v: Vec<i32> = (1..7).collect();
    println!("'v': {}", braced(&v));
    let dropped: Vec<i32> = v.drain(..2).collect();
    println!("dropped: {}  shifted 'v': {}", braced(&dropped), braced(&v));

    // Same multiset, any order: compare occurrence counts.
    println!();
    println!("a.iter().counts() == b.iter().counts():");
    let a = vec![1, 2, 2, 3];
    let mut b = a.clone();
    shuffle(&mut b, &mut rng);
    let c = vec![1, 2, 3, 3];
    println!("'a': {}  'b': {}  'c': {}", braced(&a), braced(&b), braced(&c));
    println!("a permutation of b?: {}", a.iter().counts() == b.iter().counts());
    println!("a permutation of c?: {}", a.iter().counts() == c.iter().counts());

    println!();
    println!("(1..=3).permutations(3):");
    println!(
        "all orders: {}",
        braced_with((1..=3).permutations(3), |p| braced(p))
    );

    Ok(())
}
