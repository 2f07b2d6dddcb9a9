pub mod cli;
pub mod ctx;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod ratio;

pub use error::RatioError;
pub use io::report::{format_ratios, report_ratios};
pub use ratio::{Classify, Sign, SignCounts, SignRatios, compute_ratios, count_signs};
