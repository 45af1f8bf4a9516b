//! Classify a few level-order trees and print their branch sums.

use branchwise::{branch_sums, classify};

fn main() -> anyhow::Result<()> {
    let fixtures: [&[f64]; 5] = [
        &[3.0, 6.0, 2.0, 9.0, -1.0, 10.0],
        &[1.0, 4.0, 100.0, 5.0],
        &[5.0, 0.0, 0.0],
        &[7.0],
        &[],
    ];

    for values in fixtures {
        let outcome = classify(values)?;
        if values.len() > 1 {
            let (left, right) = branch_sums(values)?;
            println!("{values:?} -> {outcome} (left={left}, right={right})");
        } else {
            println!("{values:?} -> {outcome}");
        }
    }

    Ok(())
}
