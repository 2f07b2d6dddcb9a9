use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::ctx::Ctx;
use crate::pipeline::Stage;

const PARTITION_EPS: f64 = 1e-9;

pub struct Stage2Ratios;

impl Stage2Ratios {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Ratios {
    fn name(&self) -> &'static str {
        "stage2_ratios"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let counts = ctx
            .counts
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("sign counts missing before Stage 2"))?;
        if counts.total() != ctx.values.len() {
            bail!(
                "sign counts do not cover input: {} != {}",
                counts.total(),
                ctx.values.len()
            );
        }

        let ratios = counts.ratios()?;
        let sum = ratios.sum();
        if (sum - 1.0).abs() > PARTITION_EPS {
            bail!("sign ratios do not sum to 1: {}", sum);
        }
        debug!(sum, "ratio partition checked");

        info!(
            positive = ratios.positive,
            negative = ratios.negative,
            zero = ratios.zero,
            "ratios_ready"
        );
        ctx.ratios = Some(ratios);
        Ok(())
    }
}
