//! Lexicographic comparison and three-way ordering.

use anyhow::Result;
use std::cmp::Ordering;

use crate::fmt::braced;

pub(crate) fn run() -> Result<()> {
    // Sequences compare element by element; the first difference
    // decides, and a prefix orders before anything it prefixes.
    println!();
    println!("a.cmp(&b) on vectors:");
    let a = vec![1, 2, 3];
    let b = vec![1, 2, 4];
    let c = vec![1, 2];
    println!("'a': {}  'b': {}  'c': {}", braced(&a), braced(&b), braced(&c));
    println!("a vs b: {:?}", a.cmp(&b));
    println!("b vs a: {:?}", b.cmp(&a));
    println!("c vs a: {:?}", c.cmp(&a));
    println!("a vs a: {:?}", a.cmp(&a));

    println!();
    println!("a.iter().cmp(&b) (iterator form):");
    println!("a vs b: {:?}", a.iter().cmp(&b));

    println!();
    println!("strings order lexicographically too:");
    let s = "apple";
    let t = "apples";
    println!("\"{s}\" vs \"{t}\": {:?}", s.cmp(t));

    // Floats only offer a partial order; NaN has no answer.
    println!();
    println!("x.iter().partial_cmp(&y) on floats:");
    let x = vec![1.0, 2.0];
    let y = vec![1.0, f64::NAN];
    println!("[1.0,2.0] vs [1.0,2.0]: {:?}", x.iter().partial_cmp(&x));
    println!("[1.0,2.0] vs [1.0,NaN]: {:?}", x.iter().partial_cmp(&y));

    // Ordering values answer directly.
    println!();
    println!("Ordering::is_lt() and friends:");
    let ord = a.cmp(&b);
    println!("a vs b is_lt: {}", ord.is_lt());
    println!("a vs b is_ge: {}", ord.is_ge());
    println!("reversed: {:?}", ord.reverse());
    println!("then_with tiebreak: {:?}", Ordering::Equal.then_with(|| b.cmp(&a)));

    Ok(())
}
