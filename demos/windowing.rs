//! Show the windowing primitives on small inputs.

use tmplrev::{overlapping_windows, partition_by_separator};

fn main() {
    for step in [Some(1), None, Some(3)] {
        let windows: Vec<_> = overlapping_windows(1..=7, 2, step)
            .expect("length is non-zero")
            .collect();
        println!("length 2, step {step:?}: {windows:?}");
    }

    let parts: Vec<_> = partition_by_separator([1, 2, 3, 2, 2, 4], 2).collect();
    println!("split on 2: {parts:?}");
}
