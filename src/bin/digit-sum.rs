use anyhow::{Context, Result};
use digit_sum::scanner::Scanner;
use digit_sum::shell::{self, Report};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive("digit_sum=warn".parse()?)
                .from_env_lossy(),
        )
        .init();

    let mut scan = Scanner::new(io::stdin().lock());
    let mut out = io::BufWriter::new(io::stdout().lock());
    // Rejected input still exits with status 0.
    match shell::run(&mut scan, &mut out).context("console i/o failed")? {
        Report::Sum(sum) => tracing::debug!(sum, "done"),
        Report::Rejected(e) => tracing::debug!(error = %e, "done"),
    }
    Ok(())
}
