//! Fixed-width text rendering for vectors and matrices.
//!
//! Presentation only: right-aligned cells with a fixed number of decimal
//! places, two spaces between columns, one line per matrix row. Entries with
//! magnitude below [`DISPLAY_EPSILON`] render as exactly zero so rounding
//! never produces a stray `-0.00`.

use ndarray::{Array1, Array2};

/// Magnitude below which a value is displayed as exactly zero.
pub const DISPLAY_EPSILON: f64 = 1e-5;

/// Render a vector on one line.
///
/// Each entry is right-aligned in a `width`-character cell with `decimals`
/// decimal places.
pub fn format_vector(v: &Array1<f64>, decimals: usize, width: usize) -> String {
    let cells: Vec<String> = v
        .iter()
        .map(|&x| format_entry(x, decimals, width))
        .collect();
    cells.join("  ")
}

/// Render a matrix, one line per row, cells formatted as in
/// [`format_vector`].
pub fn format_matrix(m: &Array2<f64>, decimals: usize, width: usize) -> String {
    let lines: Vec<String> = m
        .outer_iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|&x| format_entry(x, decimals, width))
                .collect();
            cells.join("  ")
        })
        .collect();
    lines.join("\n")
}

fn format_entry(x: f64, decimals: usize, width: usize) -> String {
    let clamped = if x.abs() < DISPLAY_EPSILON { 0.0 } else { x };
    format!("{:>width$.decimals$}", clamped)
}
