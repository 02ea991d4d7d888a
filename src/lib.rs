//! # Algotour
//!
//! A **narrated tour of generic sequence algorithms** in Rust. Each
//! section is an independent demonstration program for one algorithm
//! family — sorting, searching, partitioning, set operations, folds and
//! reductions, heap operations, swaps, comparisons, generators, copies,
//! transformations, iterator adaptors, and parallel execution — run
//! against small in-memory sequences with inputs and outputs printed
//! for inspection.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run                      # run every section in order
//! cargo run -- sorting heaps     # run selected sections
//! cargo run -- --list            # list sections with summaries
//! ```
//!
//! ## Core Concepts
//!
//! ### Sections
//!
//! A section is a `fn() -> anyhow::Result<()>` registered in
//! [`sections::SECTIONS`] under a stable name. Sections share no state;
//! each builds its own data (usually a scrambled run of small integers,
//! see [`utils::scrambled`]) and narrates a family of library calls.
//! The binary dispatches to sections by name.
//!
//! Where C++'s `<algorithm>` exposes free functions over iterator
//! pairs, Rust spreads the same vocabulary across `Iterator` adaptors,
//! slice methods, and a few ecosystem crates (itertools for merges and
//! extrema positions, rayon for parallel execution policies). The tour
//! narrates the Rust spellings.
//!
//! ### Bounded top-k selection
//!
//! The one engineered component is [`topk`]: selecting the `k` best
//! items of a single-pass input with bounded memory, via a size-`k`
//! heap whose root is the next eviction candidate. See [`TopK`],
//! [`top_k`], [`bottom_k`], [`top_k_by`], and [`top_k_by_key`].
//!
//! ```
//! use algotour::top_k;
//! assert_eq!(top_k(vec![5, 1, 9, 3, 7, 2], 3), vec![9, 7, 5]);
//! ```
//!
//! ## Module Overview
//!
//! - [`topk`] - bounded top-k selection (the engineered core)
//! - [`sections`] - the demo sections and their registry
//! - [`fmt`] - braced `{a,b,c}` rendering of sequences
//! - [`utils`] - deterministic PRNG and shuffling for demo data

pub mod fmt;
pub mod sections;
pub mod topk;
pub mod utils;

// General re-exports
pub use sections::{SECTIONS, Section};
pub use topk::{TopK, bottom_k, top_k, top_k_by, top_k_by_key};
