//! Sign classification and ratio computation.
//!
//! Every element falls into exactly one of three classes (positive,
//! negative, zero), so the ratios always partition 1.0.

use std::cmp::Ordering;

use crate::error::RatioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl From<Ordering> for Sign {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Sign::Positive,
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
        }
    }
}

/// Values that can be placed in one of the three sign classes.
///
/// Returns `None` when the value has no ordering against zero (NaN).
pub trait Classify {
    fn sign(&self) -> Option<Sign>;
}

macro_rules! impl_classify_int {
    ($($t:ty),*) => {
        $(
            impl Classify for $t {
                fn sign(&self) -> Option<Sign> {
                    Some(Sign::from(self.cmp(&0)))
                }
            }
        )*
    };
}

impl_classify_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Classify for f32 {
    fn sign(&self) -> Option<Sign> {
        self.partial_cmp(&0.0).map(Sign::from)
    }
}

impl Classify for f64 {
    fn sign(&self) -> Option<Sign> {
        self.partial_cmp(&0.0).map(Sign::from)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignCounts {
    pub positive: usize,
    pub negative: usize,
    pub zero: usize,
}

impl SignCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.zero
    }

    pub fn ratios(&self) -> Result<SignRatios, RatioError> {
        let n = self.total();
        if n == 0 {
            return Err(RatioError::EmptyInput);
        }
        let n = n as f64;
        Ok(SignRatios {
            positive: self.positive as f64 / n,
            negative: self.negative as f64 / n,
            zero: self.zero as f64 / n,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignRatios {
    pub positive: f64,
    pub negative: f64,
    pub zero: f64,
}

impl SignRatios {
    /// Ratios in output order: positive, negative, zero.
    pub fn as_array(&self) -> [f64; 3] {
        [self.positive, self.negative, self.zero]
    }

    pub fn sum(&self) -> f64 {
        self.positive + self.negative + self.zero
    }
}

pub fn count_signs<T: Classify>(values: &[T]) -> Result<SignCounts, RatioError> {
    if values.is_empty() {
        return Err(RatioError::EmptyInput);
    }
    let mut counts = SignCounts::default();
    for (index, value) in values.iter().enumerate() {
        match value.sign() {
            Some(Sign::Positive) => counts.positive += 1,
            Some(Sign::Negative) => counts.negative += 1,
            Some(Sign::Zero) => counts.zero += 1,
            None => return Err(RatioError::InvalidElement { index }),
        }
    }
    Ok(counts)
}

pub fn compute_ratios<T: Classify>(values: &[T]) -> Result<SignRatios, RatioError> {
    count_signs(values)?.ratios()
}
