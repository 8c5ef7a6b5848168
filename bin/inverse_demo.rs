//! Matrix inversion demo
//!
//! Builds a 4x4 matrix from its literal string form, then prints the matrix,
//! its determinant, its inverse, and the product matrix * inverse as a
//! round-trip check.
//!
//! Usage:
//!     cargo run --bin inverse-demo

use math_matrix::{determinant, format_matrix, inverse, multiply, parse_matrix};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Begin matrix inversion demo");

    let m = parse_matrix(4, 4, "3,7,2,5, 4,0,1,1, 1,6,3,0, 2,8,4,3")?;

    println!("\nOriginal matrix m is:");
    println!("{}", format_matrix(&m, 1, 5));

    let d = determinant(&m)?;
    println!("\nDeterminant of m = {d}");

    let inv = inverse(&m)?;
    println!("\nInverse of m is:");
    println!("{}", format_matrix(&inv, 4, 8));

    let check = multiply(&m, &inv)?;
    println!("\nProduct of m * inv is:");
    println!("{}", format_matrix(&check, 2, 7));

    println!("\nEnd demo");
    Ok(())
}
