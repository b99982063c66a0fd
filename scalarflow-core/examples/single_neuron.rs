//! # Training a single neuron
//!
//! Fits one tanh neuron to a handful of points with plain SGD and prints
//! the loss every 50 steps.
//!
//! Run with:
//! `RUST_LOG=debug cargo run --example single_neuron`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalarflow_core::nn::{MSELoss, Reduction};
use scalarflow_core::optim::{clip_grad_norm, Optimizer, SgdOptimizer};
use scalarflow_core::{values, Mlp, Module, ScalarFlowError, Value};

fn main() -> Result<(), ScalarFlowError> {
    env_logger::init();

    let xs = [[0.25, 0.25], [0.3, 0.2], [0.8, 0.3], [0.7, 0.1]];
    let ys = values(&[0.0, 0.1, 0.5, 0.6]);

    let model = Mlp::new(2, &[1], &mut StdRng::seed_from_u64(42))?;
    let loss_fn = MSELoss::new(Reduction::Sum);
    let params = model.parameters();
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.05)?;

    for step in 0..=500 {
        let preds = xs
            .iter()
            .map(|x| model.forward(&values(x))?.into_scalar())
            .collect::<Result<Vec<Value>, _>>()?;
        let loss = loss_fn.calculate(&preds, &ys)?;

        optimizer.zero_grad();
        loss.backward();
        clip_grad_norm(&params, 5.0)?;
        optimizer.step()?;

        if step % 50 == 0 {
            println!("step {step:>3}  loss {:.6}", loss.data());
        }
    }

    for x in &xs {
        println!("{x:?} -> {:.4}", model.predict(x)?[0]);
    }
    Ok(())
}
