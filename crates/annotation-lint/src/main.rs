//! Annotation Lint
//!
//! Validates a multi-network annotation payload read from stdin and prints
//! its canonical encoding, or prints the JSON Schema of an annotation.
//!
//! Usage: `annotation-lint [--json-schema] <schema>`

mod config;
mod error;
mod schema;

#[cfg(test)]
mod config_test;

use crate::config::{Config, SCHEMA_ENV};
use crate::error::LintError;
use std::env;
use std::io::Read;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), LintError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(env::args().skip(1), env::var(SCHEMA_ENV).ok())?;
    info!(
        schema = ?config.schema,
        key = config.schema.annotation_key(),
        "Starting annotation lint"
    );

    if config.print_json_schema {
        println!("{}", config.schema.json_schema()?);
        return Ok(());
    }

    let mut payload = String::new();
    std::io::stdin().read_to_string(&mut payload)?;
    let payload = payload.trim_end_matches(['\r', '\n']);

    match config.schema.canonicalize(payload) {
        Ok(canonical) => {
            if canonical != payload {
                info!(
                    "Payload is valid but not in canonical form \
                     (key order, whitespace, or null lists inside records rewritten as [])"
                );
            }
            println!("{canonical}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Payload rejected");
            Err(e)
        }
    }
}
