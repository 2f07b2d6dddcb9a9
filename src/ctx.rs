use crate::ratio::{SignCounts, SignRatios};

#[derive(Debug, Clone)]
pub struct Ctx {
    pub values: Vec<f64>,
    pub counts: Option<SignCounts>,
    pub ratios: Option<SignRatios>,
    pub rendered: Option<String>,
}

impl Ctx {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            counts: None,
            ratios: None,
            rendered: None,
        }
    }
}
