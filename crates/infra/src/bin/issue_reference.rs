//! Issue reference numbers against an in-memory store.
//!
//! Usage: `issue-reference <kind> [count]`, e.g. `issue-reference invoice 3`.

use clap::Parser;

use parabellum_core::SystemClock;
use parabellum_infra::{InMemoryReferenceStore, NumberingConfig, ReferenceIssuer};
use parabellum_numbering::EntityKind;

/// Issue sequential reference numbers for one entity class
#[derive(Parser, Debug)]
#[command(name = "issue-reference")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Entity class (customer, quote, invoice, payment, employee, intervention, mission)
    kind: EntityKind,

    /// How many references to issue
    #[arg(default_value_t = 1)]
    count: u32,
}

fn main() -> anyhow::Result<()> {
    parabellum_observability::init();

    let cli = Cli::parse();

    let config = NumberingConfig::from_env()?;
    tracing::info!(kind = ?cli.kind, count = cli.count, prefix = %config.scheme(cli.kind).prefix(), "issuing references");

    let issuer = ReferenceIssuer::new(InMemoryReferenceStore::new(), SystemClock, config);
    for _ in 0..cli.count {
        println!("{}", issuer.issue(cli.kind)?);
    }

    Ok(())
}
