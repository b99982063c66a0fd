use super::{Dataset, Sample};
use scalarflow_core::ScalarFlowError;

/// A dataset backed by a `Vec` of items.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl VecDataset<Sample> {
    /// Zips inputs with their targets.
    ///
    /// # Errors
    /// `ShapeMismatch` if `xs` and `ys` differ in length.
    pub fn from_pairs<X>(xs: &[X], ys: &[f64]) -> Result<Self, ScalarFlowError>
    where
        X: AsRef<[f64]>,
    {
        if xs.len() != ys.len() {
            return Err(ScalarFlowError::ShapeMismatch {
                expected: xs.len(),
                actual: ys.len(),
                operation: "VecDataset::from_pairs".to_string(),
            });
        }
        let data = xs
            .iter()
            .zip(ys)
            .map(|(x, &y)| Sample::new(x.as_ref(), y))
            .collect();
        Ok(Self { data })
    }

    /// Input width shared by every sample, or `None` if the dataset is empty
    /// or the widths disagree.
    pub fn input_width(&self) -> Option<usize> {
        let width = self.data.first()?.inputs.len();
        self.data
            .iter()
            .all(|s| s.inputs.len() == width)
            .then_some(width)
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarFlowError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(ScalarFlowError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Clone> FromIterator<T> for VecDataset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
