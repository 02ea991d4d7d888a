//! Sorting a sequence, with and without keys, and checking sortedness.

use anyhow::Result;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::fmt::{braced, braced_with};
use crate::utils::{SplitMix64, scrambled};

struct Account {
    value: f64,
}

#[derive(Serialize)]
struct Record {
    label: &'static str,
    rank: i32,
}

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x5041);

    println!();
    println!("v.sort():");
    let mut v = scrambled(1..5, &mut rng);
    println!("unsorted 'v': {}", braced(&v));
    v.sort();
    println!("sorted 'v': {}", braced(&v));

    println!();
    println!("v.sort_unstable_by(|a, b| b.cmp(a)):");
    let mut v = scrambled(1..5, &mut rng);
    println!("unsorted 'v': {}", braced(&v));
    v.sort_unstable_by(|a, b| b.cmp(a));
    println!("descending 'v': {}", braced(&v));

    // Key extraction instead of a comparator; OrderedFloat supplies the
    // total order f64 itself refuses to.
    println!();
    println!("v.sort_by_key(|a| OrderedFloat(a.value)):");
    let mut accounts: Vec<Account> = scrambled(1..5, &mut rng)
        .into_iter()
        .map(|i| Account {
            value: f64::from(i) * 2.4,
        })
        .collect();
    println!(
        "unsorted 'v': {}",
        braced_with(&accounts, |a| format!("{:.2}", a.value))
    );
    accounts.sort_by_key(|a| OrderedFloat(a.value));
    println!(
        "sorted 'v': {}",
        braced_with(&accounts, |a| format!("{:.2}", a.value))
    );

    // Two stable sorts in a row: records equal under the second key keep
    // the order the first sort gave them.
    println!();
    println!("v.sort_by_key(|r| r.label); v.sort_by_key(|r| r.rank):");
    let mut records = vec![
        Record { label: "q", rank: 1 },
        Record { label: "f", rank: 1 },
        Record { label: "c", rank: 2 },
        Record { label: "a", rank: 1 },
        Record { label: "d", rank: 3 },
    ];
    println!("unsorted 'v': {}", serde_json::to_string(&records)?);
    records.sort_by_key(|r| r.label);
    println!("sorted (label) 'v': {}", serde_json::to_string(&records)?);
    records.sort_by_key(|r| r.rank);
    println!("sorted (rank) 'v': {}", serde_json::to_string(&records)?);

    println!();
    println!("v.is_sorted():");
    let v: Vec<i32> = (1..5).collect();
    println!("'v': {}", braced(&v));
    println!("is 'v' sorted?: {}", v.is_sorted());

    let v = scrambled(1..5, &mut rng);
    println!("'v': {}", braced(&v));
    println!("is 'v' sorted?: {}", v.is_sorted());

    println!();
    println!("v.is_sorted_by(|a, b| a >= b):");
    let v: Vec<i32> = (1..5).rev().collect();
    println!("'v': {}", braced(&v));
    println!("is 'v' reverse sorted?: {}", v.is_sorted_by(|a, b| a >= b));

    // Partial sort of a prefix: place the pivot, then sort only what is
    // in front of it.
    println!();
    println!("v.select_nth_unstable_by(3, |a, b| b.cmp(a)); v[..3].sort_unstable_by(..):");
    let mut v = scrambled(1..10, &mut rng);
    println!("unsorted 'v': {}", braced(&v));
    v.select_nth_unstable_by(3, |a: &i32, b: &i32| b.cmp(a));
    v[..3].sort_unstable_by(|a, b| b.cmp(a));
    println!("partially sorted 'v': {}", braced(&v));

    Ok(())
}
