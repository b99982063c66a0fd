//! In-memory datasets for the training driver.

pub mod demo;
pub mod sample;
pub mod vec_dataset;

pub use demo::{demo_dataset, HOLDOUT_INPUTS};
pub use sample::Sample;
pub use vec_dataset::VecDataset;

use scalarflow_core::ScalarFlowError;

/// A collection of items that can be read by index.
pub trait Dataset {
    type Item;

    /// Returns the item at `index`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarFlowError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
