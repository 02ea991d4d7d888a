//! Side-effecting traversal: for_each and inspect.

use anyhow::Result;

use crate::fmt::braced;
use crate::utils::{SplitMix64, scrambled};

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0xF0EA);

    println!();
    println!("v.iter().for_each(|x| print!(\"<{{x}}> \")):");
    let v = scrambled(0..6, &mut rng);
    println!("'v': {}", braced(&v));
    v.iter().for_each(|x| print!("<{x}> "));
    println!();

    // for_each over only the first n: bound the traversal with take.
    println!();
    println!("v.iter().take(3).for_each(..):");
    println!("'v': {}", braced(&v));
    v.iter().take(3).for_each(|x| print!("<{x}> "));
    println!();

    // inspect peeks at elements mid-pipeline without consuming them.
    println!();
    println!("v.iter().inspect(..).filter(..).sum():");
    println!("'v': {}", braced(&v));
    let total: i32 = v
        .iter()
        .inspect(|x| print!("saw {x}; "))
        .filter(|&&x| x % 2 == 0)
        .sum();
    println!();
    println!("sum of evens: {total}");

    // A mutable capture makes for_each an accumulator.
    println!();
    println!("for_each pushing into a String:");
    let mut line = String::new();
    v.iter().for_each(|x| line.push_str(&format!("[{x}]")));
    println!("'line': {line}");

    Ok(())
}
