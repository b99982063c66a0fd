//! # Gradients on a graph with shared nodes
//!
//! Builds `root = 3x + 4x + (2x)²` so that `x` reaches the root through three
//! paths, one of them via an intermediate node used twice, then prints the
//! graph and every gradient after a single backward pass.
//!
//! Run with:
//! `cargo run --example fan_out_gradients`

use scalarflow_core::{ScalarFlowError, Value};

fn main() -> Result<(), ScalarFlowError> {
    let x: Value = "1.5".parse()?;
    x.set_label("x");

    let left = &x * 3.0;
    left.set_label("3x");
    let middle = &x * 4.0;
    middle.set_label("4x");
    let shared = &x * 2.0;
    shared.set_label("2x");
    let deep = &shared * &shared;
    deep.set_label("(2x)^2");

    let root = &(&left + &middle) + &deep;
    root.set_label("root");
    root.backward();

    println!("{root}");
    println!("root  = {:.4}", root.data());
    println!("dx    = {:.4} (expected 3 + 4 + 8x = {:.4})", x.grad(), 7.0 + 8.0 * x.data());
    println!("d(2x) = {:.4}", shared.grad());
    Ok(())
}
