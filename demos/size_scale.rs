#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Size Scale Demo
//!
//! Builds the same point plot twice: once with a plain size scale and once
//! with the area-proportional mapper, printing both specifications.
//!
//! Run with: `cargo run --example size_scale`

use plotspec::prelude::*;

fn main() {
    let mut dat = DataFrame::new();
    dat.add_column_int("x", &[0, 1, 2, 3, 4, 5]);
    dat.add_column_int("y", &[0, 0, 0, 0, 0, 0]);
    dat.add_column_int("s", &[0, 1, 2, 3, 4, 5]);

    let p = lets_plot(dat) + geom_point(PointAes::new().x("x").y("y").size("s"));

    // size ~= radius
    let sized = p.clone() + scale_size().range((5.0, 50.0)).guide("none") + ggtitle("scale_size");
    println!("{}", sized.to_json().expect("serializable specification"));

    // size ~= radius where 0 size --> 0 radius
    let area =
        p + scale_size_area().max_size(50.0).guide("none") + ggtitle("scale_size_area");
    println!("{}", area.to_json().expect("serializable specification"));
}
