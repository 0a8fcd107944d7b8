use clap::Parser;
use esprst::error::ResetResult;
use reset::{ResetOptions, handle_reset};

mod reset;

fn main() -> ResetResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let opts = ResetOptions::parse();
    handle_reset(opts)?;

    Ok(())
}
