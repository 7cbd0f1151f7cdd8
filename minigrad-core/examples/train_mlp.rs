//! # Training a Small MLP on Four Samples
//!
//! Fits `MLP(3, [4, 4, 1])` with sigmoid hidden units to a toy regression
//! problem using the plain sum of squared errors and momentum-free SGD.
//!
//! ## Steps per epoch:
//! 1.  Forward pass over every sample (a fresh graph each epoch).
//! 2.  Loss: `sum((pred - y)^2)`.
//! 3.  `zero_grad` on the parameters, then `backward` from the loss.
//! 4.  `optimizer.step()`: `p -= lr * grad`.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp`
//!
//! Set `RUST_LOG=debug` to also see the engine's per-pass logging.

use minigrad_core::nn::{Loss, MSELoss, Module, Reduction, MLP};
use minigrad_core::ops::activation::Activation;
use minigrad_core::optim::{Optimizer, SgdOptimizer};
use minigrad_core::{MinigradError, Value};

const EPOCHS: usize = 10_000;
const LEARNING_RATE: f64 = 0.001;

fn training_data() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, -1.0, -1.0],
    ];
    let ys = vec![-1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}

fn predict(mlp: &MLP, xs: &[Vec<f64>]) -> Result<Vec<Value>, MinigradError> {
    let mut preds = Vec::with_capacity(xs.len());
    for x in xs {
        let out = mlp.forward(&Value::from_slice(x))?;
        preds.extend(out);
    }
    Ok(preds)
}

fn main() -> Result<(), MinigradError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let (xs, ys) = training_data();
    let mlp = MLP::new(3, &[4, 4, 1], Activation::Sigmoid, Activation::Identity)?;
    let loss_fn = MSELoss::with_reduction(Reduction::Sum);
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), LEARNING_RATE, 0.0, false)?;
    log::info!("Training MLP with {} parameters", mlp.num_parameters());

    for epoch in 0..EPOCHS {
        let preds = predict(&mlp, &xs)?;
        let loss = loss_fn.calculate(&ys, &preds)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if epoch % 1000 == 0 || epoch + 1 == EPOCHS {
            log::info!("Epoch: {}, Loss: {:.6}", epoch + 1, loss.data());
        }
    }

    let preds: Vec<f64> = predict(&mlp, &xs)?.iter().map(Value::data).collect();
    log::info!("ypred={:?}, ys={:?}", preds, ys);
    Ok(())
}
