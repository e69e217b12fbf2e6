use serde::Deserialize;
use std::ops::{Deref, Sub};

/// A vertical extent in user units. The page height is what flips
/// top-down user coordinates into PDF's bottom-up device space.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Height(f64);

impl Height {
    pub fn new(v: f64) -> Self {
        Height(v)
    }
}

impl Deref for Height {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub<f64> for Height {
    type Output = f64;

    fn sub(self, other: f64) -> Self::Output {
        self.0 - other
    }
}
