use std::io::Write;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::pipeline::Pipeline;
use crate::ratio::SignRatios;

/// Three lines, positive then negative then zero, six fractional digits each.
///
/// Rounding is to nearest on the exact binary value; exact decimal ties go
/// to the even digit (`0.0078125` renders as `0.007812`).
pub fn format_ratios(ratios: &SignRatios) -> String {
    let mut out = String::new();
    for value in ratios.as_array() {
        out.push_str(&format!("{:.6}\n", value));
    }
    out
}

/// Runs the standard pipeline over `values` and writes the rendered ratios.
///
/// Nothing is written unless every stage succeeds.
pub fn report_ratios<W: Write>(values: &[f64], out: &mut W) -> Result<()> {
    let mut ctx = Ctx::new(values.to_vec());
    Pipeline::standard().run(&mut ctx)?;
    let rendered = ctx
        .rendered
        .as_deref()
        .context("rendered report missing after pipeline")?;
    out.write_all(rendered.as_bytes())
        .context("failed to write ratio report")?;
    out.flush()?;
    Ok(())
}
