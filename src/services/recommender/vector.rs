use ndarray::Array1;

/// A dense feature vector with fixed segment layout:
/// positions, teams, eras, stat bins.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Array1<f64>);

impl FeatureVector {
    pub fn zeros(dimension: usize) -> Self {
        Self(Array1::zeros(dimension))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Owned 1-D arrays are always contiguous, so this never falls back
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice().unwrap_or(&[])
    }

    pub(crate) fn set(&mut self, index: usize) {
        self.0[index] = 1.0;
    }

    /// `self += weight * other`, element-wise
    pub fn add_scaled(&mut self, other: &FeatureVector, weight: f64) {
        self.0.scaled_add(weight, &other.0);
    }

    pub fn dot(&self, other: &FeatureVector) -> f64 {
        self.0.dot(&other.0)
    }

    pub fn norm(&self) -> f64 {
        self.0.dot(&self.0).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(Array1::from_vec(values))
    }
}
