use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::report::format_ratios;
use crate::pipeline::Stage;

pub struct Stage3Render;

impl Stage3Render {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Render {
    fn name(&self) -> &'static str {
        "stage3_render"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let ratios = ctx
            .ratios
            .as_ref()
            .context("sign ratios missing before Stage 3")?;
        let rendered = format_ratios(ratios);
        info!(bytes = rendered.len(), "report_rendered");
        ctx.rendered = Some(rendered);
        Ok(())
    }
}
