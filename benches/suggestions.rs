//! Benchmark suite for the suggestion engine
//!
//! Measures prefix lookups over the master table using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Two tables are used:
//! - the compiled-in master table (34 ingredients)
//! - a synthetic table of 10,000 generated names

use grocery_billing::core::seed::default_master;
use grocery_billing::{MasterIngredient, SuggestionEngine};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

fn large_master() -> Vec<MasterIngredient> {
    (0..10_000)
        .map(|i| MasterIngredient::new(format!("Item {:05}", i), Decimal::from(i % 500)))
        .collect()
}

/// Single-letter query against the default table
#[divan::bench]
fn default_table_single_letter(bencher: divan::Bencher) {
    let engine = SuggestionEngine::new(default_master());
    bencher.bench_local(|| engine.suggest(divan::black_box("b")).len());
}

/// Query that matches nothing in the default table
#[divan::bench]
fn default_table_no_match(bencher: divan::Bencher) {
    let engine = SuggestionEngine::new(default_master());
    bencher.bench_local(|| engine.suggest(divan::black_box("zz")).len());
}

/// Query matching a tenth of a large table
#[divan::bench]
fn large_table_prefix(bencher: divan::Bencher) {
    let engine = SuggestionEngine::new(large_master());
    bencher.bench_local(|| engine.suggest(divan::black_box("item 01")).len());
}
