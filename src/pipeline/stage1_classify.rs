use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::ratio::count_signs;

pub struct Stage1Classify;

impl Stage1Classify {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Classify {
    fn name(&self) -> &'static str {
        "stage1_classify"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let counts = count_signs(&ctx.values)?;
        info!(
            positive = counts.positive,
            negative = counts.negative,
            zero = counts.zero,
            "signs_classified"
        );
        ctx.counts = Some(counts);
        Ok(())
    }
}
