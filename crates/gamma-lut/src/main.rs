//! Gamma LUT — prints the 8-bit gamma-correction table to stdout.
//!
//! Gamma defaults to 2.2 and can be overridden with `GAMMA_LUT_GAMMA`.
//! Logs go to stderr, filtered by `RUST_LOG`.

use std::process::ExitCode;

use gamma_lut_core::LutConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match LutConfig::from_env().and_then(|config| config.build()) {
        Ok(lut) => {
            println!("{lut}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("failed to build gamma LUT: {e}");
            ExitCode::FAILURE
        }
    }
}
