//! Extrema, their positions, and the float ordering problem.

use anyhow::Result;
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::fmt::braced;
use crate::utils::{SplitMix64, scrambled};

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x313A);

    println!();
    println!("v.iter().min() / v.iter().max():");
    let v = scrambled(1..9, &mut rng);
    println!("'v': {}", braced(&v));
    println!("min: {:?}  max: {:?}", v.iter().min(), v.iter().max());

    println!();
    println!("v.iter().position_min() / position_max():");
    println!("'v': {}", braced(&v));
    println!(
        "min at: {:?}  max at: {:?}",
        v.iter().position_min(),
        v.iter().position_max()
    );

    // Both extrema in one pass.
    println!();
    println!("v.iter().minmax():");
    println!("'v': {}", braced(&v));
    println!("minmax: {:?}", v.iter().minmax().into_option());

    println!();
    println!("words.iter().max_by_key(|w| w.len()):");
    let words = vec!["fig", "apricot", "plum", "currant"];
    println!("'words': {}", braced(&words));
    println!("longest: {:?}", words.iter().max_by_key(|w| w.len()));

    // f64 is not Ord; either wrap in OrderedFloat or compare with
    // total_cmp explicitly.
    println!();
    println!("xs.iter().copied().map(OrderedFloat).max():");
    let xs: Vec<f64> = vec![2.5, -1.0, 7.25, 0.5];
    println!("'xs': {}", braced(&xs));
    println!(
        "max: {:?}",
        xs.iter().copied().map(OrderedFloat).max().map(|m| m.0)
    );
    println!(
        "min via total_cmp: {:?}",
        xs.iter().copied().min_by(|a, b| a.total_cmp(b))
    );

    Ok(())
}
