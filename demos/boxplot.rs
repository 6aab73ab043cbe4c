#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Boxplot Demo
//!
//! Composes a boxplot over five categories of deterministic pseudo-random
//! values and writes the specification to `boxplot_spec.json`.
//!
//! Run with: `cargo run --example boxplot`

use plotspec::prelude::*;

/// Deterministic pseudo-gaussian values (sum of three uniform draws from a
/// small linear congruential generator, shifted to mean zero).
fn pseudo_gaussian(n: usize) -> Vec<f64> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut uniform = || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..n).map(|_| uniform() + uniform() + uniform() - 1.5).collect()
}

fn main() {
    let categories = ["A", "B", "C", "D", "E"];
    let n = 500;

    let values = pseudo_gaussian(n);
    let cats: Vec<&str> = (0..n).map(|i| categories[i % categories.len()]).collect();

    let mut data = DataFrame::new();
    data.add_column_f64("val", &values);
    data.add_column_str("cat", &cats);

    let p = lets_plot(data).aes(PlotAes::new().x("cat").y("val"))
        + geom_boxplot(BoxplotAes::new()).outlier_color("red");

    p.write_spec("boxplot_spec.json").expect("writable specification");
    println!("Saved: boxplot_spec.json");
}
