//! Benchmark Binary
//!
//! Plays N hands against the remote opponent and prints the evaluation.
//! First Ctrl+C stops after the current hand, second exits immediately.

use anyhow::Context;
use clap::Parser;
use holdem_bench::config::Config;
use holdem_bench::run::*;
use holdem_bench::transport::HttpRemote;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();
    holdem_bench::log();
    let credentials = config.credentials().context("invalid api key")?;
    let orchestrator = Orchestrator::new(config.hands)
        .with_backoff(config.backoff())
        .with_confidence(config.confidence);
    interrupt(orchestrator.cancel().clone());
    let mut agent = config.agent.build();
    let remote = HttpRemote::new(config.endpoint());
    let report = orchestrator.run(remote, credentials, agent.as_mut()).await;
    println!("{}", report);
    Ok(ExitCode::from(report.exit_code()))
}

/// Graceful on the first Ctrl+C, immediate on the second.
fn interrupt(cancel: Cancel) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        println!();
        log::warn!("interrupt received, finishing current hand (Ctrl+C again to exit now)");
        cancel.cancel();
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(130);
        }
    });
}
