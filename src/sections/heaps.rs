//! Binary heaps and bounded top-k selection.
//!
//! `BinaryHeap` is the built-in array-backed heap: a friendly interface
//! over the push/pop/drain maintenance the classic heap algorithms do by
//! hand. The last demos drive this crate's own bounded selector, which
//! is the one place the tour needed an engineered component instead of a
//! library call.

use anyhow::Result;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::fmt::{braced, braced_with};
use crate::topk::{TopK, bottom_k, top_k, top_k_by_key};
use crate::utils::{SplitMix64, scrambled};

pub(crate) fn run() -> Result<()> {
    let mut rng = SplitMix64::new(0x8EA9);

    println!();
    println!("BinaryHeap::from(v):");
    let v = scrambled(0..6, &mut rng);
    println!("original 'v': {}", braced(&v));
    let mut heap = BinaryHeap::from(v);
    println!("heap (internal order): {}", braced(heap.iter()));
    println!("heap.peek(): {:?}", heap.peek());

    println!();
    println!("heap.push(42); heap.push(-1):");
    heap.push(42);
    heap.push(-1);
    println!("heap (internal order): {}", braced(heap.iter()));
    println!("heap.peek(): {:?}", heap.peek());

    println!();
    println!("heap.pop():");
    println!("popped: {:?}", heap.pop());
    println!("heap.peek(): {:?}", heap.peek());

    println!();
    println!("heap.into_sorted_vec():");
    println!("sorted: {}", braced(heap.into_sorted_vec()));

    // Reverse flips the comparison, turning the max-heap into a min-heap.
    println!();
    println!("BinaryHeap<Reverse<i32>>:");
    let v = scrambled(0..6, &mut rng);
    println!("original 'v': {}", braced(&v));
    let min_heap: BinaryHeap<Reverse<i32>> = v.into_iter().map(Reverse).collect();
    println!("min_heap.peek(): {:?}", min_heap.peek().map(|r| r.0));

    // Bounded selection: the k best of a stream in O(k) memory.
    println!();
    println!("top_k(v, 3) / bottom_k(v, 3):");
    let v = scrambled(0..6, &mut rng);
    println!("original 'v': {}", braced(&v));
    println!("top 3 values: {}", braced(top_k(v.clone(), 3)));
    println!("lesser 3 values: {}", braced(bottom_k(v, 3)));

    println!();
    println!("top_k_by_key(players, 2, |p| p.1):");
    let players = vec![("ada", 310), ("brin", 88), ("cleo", 154), ("dov", 271)];
    println!(
        "'players': {}",
        braced_with(&players, |(n, s)| format!("({n},{s})"))
    );
    println!(
        "top 2 by score: {}",
        braced_with(top_k_by_key(players, 2, |p| p.1), |(n, s)| {
            format!("({n},{s})")
        })
    );

    // Streaming: feed one item at a time and watch the eviction
    // threshold (the worst retained item) rise.
    println!();
    println!("TopK::new(3) fed one item at a time:");
    let stream = scrambled(0..10, &mut rng);
    println!("'stream': {}", braced(&stream));
    let mut sel = TopK::new(3);
    for x in stream {
        sel.push(x);
        println!("pushed {x}: retained {}, threshold {:?}", sel.len(), sel.worst());
    }
    println!("final top 3: {}", braced(sel.into_sorted_vec()));

    Ok(())
}
