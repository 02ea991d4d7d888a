//! Lazy iterator adaptors: the Rust spelling of range views.
//!
//! Adaptors build a pipeline without doing any work; elements are pulled
//! one at a time when the chain is consumed, exactly like lazy range
//! views. Collecting is the explicit materialization step.

use anyhow::Result;
use serde::Deserialize;

use crate::fmt::{braced, braced_with};
use crate::utils::{SplitMix64, scrambled};

#[derive(Debug, Deserialize)]
struct Player {
    name: String,
    score: i64,
}

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x71E5);

    println!();
    println!("v.iter().take(3) / v.iter().skip(3):");
    let v: Vec<i32> = (0..8).collect();
    println!("'v': {}", braced(&v));
    println!("take(3): {}", braced(v.iter().take(3)));
    println!("skip(3): {}", braced(v.iter().skip(3)));

    println!();
    println!("v.iter().take_while(|&&x| x < 4) / skip_while(..):");
    let v = scrambled(0..8, &mut rng);
    println!("'v': {}", braced(&v));
    println!("take_while: {}", braced(v.iter().take_while(|&&x| x < 4)));
    println!("skip_while: {}", braced(v.iter().skip_while(|&&x| x < 4)));

    println!();
    println!("v.iter().filter(|&&x| x % 2 == 0).map(|&x| x * x):");
    println!("'v': {}", braced(&v));
    println!(
        "'res': {}",
        braced(v.iter().filter(|&&x| x % 2 == 0).map(|&x| x * x))
    );

    println!();
    println!("v.iter().rev() / v.iter().enumerate():");
    let v: Vec<i32> = (0..5).collect();
    println!("'v': {}", braced(&v));
    println!("rev: {}", braced(v.iter().rev()));
    println!(
        "enumerate: {}",
        braced_with(v.iter().enumerate(), |(i, x)| format!("({i}:{x})"))
    );

    println!();
    println!("a.iter().zip(&b) and back via unzip():");
    let a: Vec<i32> = (0..4).collect();
    let b = ["w", "x", "y", "z"];
    let zipped: Vec<(i32, &str)> = a.iter().copied().zip(b).collect();
    println!("'a': {}  'b': {}", braced(&a), braced(b));
    println!(
        "zipped: {}",
        braced_with(&zipped, |(n, s)| format!("({n},{s})"))
    );
    let (nums, names): (Vec<i32>, Vec<&str>) = zipped.into_iter().unzip();
    println!("unzipped: {} {}", braced(&nums), braced(&names));

    // keys/values of a pair sequence are just projections.
    println!();
    println!("pairs.iter().map(|(k, _)| k) / map(|(_, v)| v):");
    let pairs = vec![("one", 1), ("two", 2), ("three", 3)];
    println!(
        "'pairs': {}",
        braced_with(&pairs, |(k, v)| format!("({k},{v})"))
    );
    println!("keys: {}", braced(pairs.iter().map(|(k, _)| k)));
    println!("values: {}", braced(pairs.iter().map(|(_, v)| v)));

    println!();
    println!("nested.iter().flatten():");
    let nested = vec![vec![1, 2], vec![], vec![3, 4, 5]];
    println!(
        "'nested': {}",
        braced_with(&nested, |inner| braced(inner.iter()))
    );
    println!("flattened: {}", braced(nested.iter().flatten()));

    println!();
    println!("v.chunks(3) / v.windows(3):");
    let v: Vec<i32> = (0..7).collect();
    println!("'v': {}", braced(&v));
    println!("chunks: {}", braced_with(v.chunks(3), braced::<&[i32]>));
    println!("windows: {}", braced_with(v.windows(3), braced::<&[i32]>));

    println!();
    println!("iter::once / iter::empty / chain:");
    println!("once(7): {}", braced(std::iter::once(7)));
    println!("empty: {}", braced(std::iter::empty::<i32>()));
    println!(
        "once(0).chain(1..4): {}",
        braced(std::iter::once(0).chain(1..4))
    );

    // Parsing a text stream lazily; items that fail to parse drop out of
    // the pipeline instead of aborting it.
    println!();
    println!("text.split_whitespace().filter_map(|t| t.parse().ok()):");
    let text = "1 2 3 four 5";
    println!("'text': \"{text}\"");
    println!(
        "parsed: {}",
        braced(text.split_whitespace().filter_map(|t| t.parse::<i32>().ok()))
    );

    // The structured variant: a stream of JSON lines deserialized into
    // records, then adapted like any other sequence.
    println!();
    println!("jsonl.lines().map(serde_json::from_str) ... filter(score > 100):");
    let jsonl = "\
{\"name\":\"ada\",\"score\":310}
{\"name\":\"brin\",\"score\":88}
{\"name\":\"cleo\",\"score\":154}";
    println!("'jsonl':\n{jsonl}");
    let players = jsonl
        .lines()
        .map(serde_json::from_str::<Player>)
        .collect::<Result<Vec<_>, _>>()?;
    println!(
        "over 100: {}",
        braced_with(players.iter().filter(|p| p.score > 100), |p| {
            format!("({},{})", p.name, p.score)
        })
    );

    Ok(())
}
