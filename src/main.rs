//! Artifact generator CLI.
//!
//! This binary generates the full post-quantum PKI test fixture matrix:
//! one TA/CA/EE hierarchy per supported signature algorithm, written as
//! DER and PEM files under the output directory.

use clap::{Parser, Subcommand};
use pqc_artifacts::crypto::algorithm::SignatureAlgorithm;
use pqc_artifacts::error::Result;
use pqc_artifacts::hierarchy::generate_artifact_matrix;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pqc-artifacts")]
#[command(about = "Post-quantum PKI test fixture generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full artifact matrix
    Generate {
        /// Output directory
        #[arg(long, default_value = "artifacts")]
        output: PathBuf,
    },

    /// List the supported algorithms
    Algorithms,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { output } => {
            generate_artifact_matrix(&output)?;

            println!(
                "✓ Generated hierarchies for {} algorithms under: {}",
                SignatureAlgorithm::ALL.len(),
                output.display()
            );

            Ok(())
        }

        Commands::Algorithms => {
            println!("{:<16} OID", "Name");
            println!("{}", "-".repeat(44));

            for algorithm in SignatureAlgorithm::ALL {
                println!("{:<16} {}", algorithm.name(), algorithm.oid());
            }

            Ok(())
        }
    }
}
