// SPDX-License-Identifier: MIT OR Apache-2.0

//! `render-values` resolves the placeholders of a values document and prints the
//! result as JSON.
//!
//! ```bash
//! render-values helm/mlrun/values.yaml \
//!     --set hostName=mlrun.example.com \
//!     --set registryURL=gcr.io/my-project \
//!     --env-prefix VALUES_
//! ```
//!
//! `--set` values take precedence over environment variables. Set `RUST_LOG` or
//! pass `--verbose` to see what the loader does.

use clap::Parser;
use hexvalues::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "render-values",
    version,
    about = "Resolve ${name} placeholders in a values document and print it as JSON"
)]
struct Cli {
    /// Path to the values document.
    path: PathBuf,

    /// Substitution value; may be repeated.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    /// Also read substitution values from environment variables with this prefix.
    #[arg(long, value_name = "PREFIX")]
    env_prefix: Option<String>,

    /// Log the raw document and the substituted values.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match render(&cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn render(cli: &Cli) -> std::result::Result<String, Box<dyn std::error::Error>> {
    let mut builder = SubstitutionTableBuilder::new();
    if let Some(prefix) = &cli.env_prefix {
        builder = builder.with_env_prefix(prefix.as_str());
    }
    let table = builder
        .with_source(Box::new(CommandLineAdapter::from_assignments(
            cli.set.clone(),
        )))
        .build()?;

    let loader = ValuesLoader::builder().with_debug_dump(cli.verbose).build();
    let values = loader.load(&cli.path, &table)?;

    Ok(values.to_json_pretty()?)
}
