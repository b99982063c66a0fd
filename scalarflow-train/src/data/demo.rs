use super::{Sample, VecDataset};

const DEMO_INPUTS: [[f64; 2]; 6] = [
    [0.25, 0.25],
    [0.3, 0.2],
    [0.8, 0.3],
    [0.7, 0.1],
    [0.9, 0.8],
    [0.05, 0.03],
];
const DEMO_TARGETS: [f64; 6] = [0.0, 0.1, 0.5, 0.6, 0.1, 0.03];

/// Inputs the trained demo model is evaluated on after training.
pub const HOLDOUT_INPUTS: [[f64; 2]; 2] = [[0.25, 0.15], [0.5, 0.25]];

/// The six two-feature examples the reference driver trains on.
pub fn demo_dataset() -> VecDataset<Sample> {
    DEMO_INPUTS
        .iter()
        .zip(DEMO_TARGETS)
        .map(|(x, y)| Sample::new(x.to_vec(), y))
        .collect()
}
