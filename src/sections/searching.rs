//! Finding, counting, and comparing: linear search in all its forms.

use anyhow::Result;
use regex::Regex;

use crate::fmt::braced;
use crate::utils::{SplitMix64, scrambled};

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x5EEC);

    println!();
    println!("v.iter().find(|&&x| x % 3 == 0) / position(..):");
    let v = scrambled(1..9, &mut rng);
    println!("'v': {}", braced(&v));
    println!("find: {:?}", v.iter().find(|&&x| x % 3 == 0));
    println!("position: {:?}", v.iter().position(|&x| x % 3 == 0));
    println!("rposition: {:?}", v.iter().rposition(|&x| x % 3 == 0));

    println!();
    println!("v.contains(&5):");
    println!("'v': {}", braced(&v));
    println!("contains 5?: {}", v.contains(&5));

    println!();
    println!("v.iter().filter(|&&x| x % 2 == 0).count():");
    let v = vec![1, 2, 2, 3, 2, 4, 4];
    println!("'v': {}", braced(&v));
    println!(
        "count of 2: {}",
        v.iter().filter(|&&x| x == 2).count()
    );
    println!(
        "count even: {}",
        v.iter().filter(|&&x| x % 2 == 0).count()
    );

    // First adjacent equal pair.
    println!();
    println!("v.windows(2).position(|w| w[0] == w[1]):");
    println!("'v': {}", braced(&v));
    println!("adjacent pair at: {:?}", v.windows(2).position(|w| w[0] == w[1]));

    // Subsequence search: slide a needle-sized window over the haystack.
    println!();
    println!("hay.windows(needle.len()).position(|w| w == needle):");
    let hay: Vec<i32> = (0..10).chain(0..10).collect();
    let needle: &[i32] = &[6, 7, 8];
    println!("'hay': {}", braced(&hay));
    println!("'needle': {}", braced(needle));
    println!(
        "found at: {:?}",
        hay.windows(needle.len()).position(|w| w == needle)
    );

    // search_n: a run of identical values.
    println!();
    println!("v.windows(3).position(|w| w.iter().all(|&x| x == 4)):");
    let v = vec![1, 4, 4, 2, 4, 4, 4, 9];
    println!("'v': {}", braced(&v));
    println!(
        "run of three 4s at: {:?}",
        v.windows(3).position(|w| w.iter().all(|&x| x == 4))
    );

    println!();
    println!("text.find(\"needle\"):");
    let text = "a haystack with a needle in it";
    println!("'text': \"{text}\"");
    println!("found at byte: {:?}", text.find("needle"));

    // Pattern search: where substring search stops, a compiled regex
    // takes over.
    println!();
    println!("Regex::new(r\"[0-9]+\")?.find_iter(text):");
    let text = "order 66, aisle 7, bin 1024";
    let digits = Regex::new(r"[0-9]+")?;
    println!("'text': \"{text}\"");
    for m in digits.find_iter(text) {
        println!("match '{}' at {}..{}", m.as_str(), m.start(), m.end());
    }

    // mismatch: the first position where two sequences disagree.
    println!();
    println!("a.iter().zip(&b).position(|(x, y)| x != y):");
    let a = vec![1, 2, 3, 4, 5];
    let b = vec![1, 2, 9, 4, 5];
    println!("'a': {}  'b': {}", braced(&a), braced(&b));
    println!(
        "first mismatch at: {:?}",
        a.iter().zip(&b).position(|(x, y)| x != y)
    );

    println!();
    println!("a == b / a.iter().eq(&c):");
    let c = vec![1, 2, 3, 4, 5];
    println!("'a': {}  'b': {}  'c': {}", braced(&a), braced(&b), braced(&c));
    println!("a == b: {}", a == b);
    println!("a equals c: {}", a.iter().eq(&c));

    Ok(())
}
