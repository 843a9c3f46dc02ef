// src/bin/smoke_test.rs
//! Generate fresh key material, round-trip the configured phrase, report

use std::process::ExitCode;

use aes_cbc_helper::{load_config, run_smoke_test, SymmetricCipher};
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config();
    info!(iv_mode = %config.cipher.iv_mode, "aes-cbc-helper smoke test");

    let cipher = SymmetricCipher::with_iv_mode(config.cipher.iv_mode);
    let report =
        run_smoke_test(&cipher, &config.smoke.phrase).context("smoke test could not run")?;

    println!("{}", report.outcome());
    Ok(ExitCode::from(report.exit_status()))
}
