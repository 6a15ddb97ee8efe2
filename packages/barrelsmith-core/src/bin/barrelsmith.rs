//! barrelsmith CLI
//!
//! # Usage
//!
//! ```bash
//! # Merge two modules into one barrel on stdout
//! barrelsmith src/models.ts src/api.ts
//!
//! # Write to a file with a header comment
//! barrelsmith src/models.ts src/api.ts -o src/generated/index.ts \
//!     --header "Generated file. Do not edit."
//!
//! # Inspect what would be merged
//! barrelsmith src/models.ts --dump-decls
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use barrelsmith_core::errors::{BarrelError, Result};
use barrelsmith_core::usecases::{BarrelOptions, GenerateBarrelUseCase, SourceSpec};
use barrelsmith_core::ExportScope;

#[derive(Parser)]
#[command(name = "barrelsmith")]
#[command(about = "Generate a unified barrel module from TypeScript sources", long_about = None)]
struct Cli {
    /// TypeScript modules to merge
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write the generated module here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Comment block placed at the top of the generated module
    #[arg(long)]
    header: Option<String>,

    /// Indentation used inside generated blocks (default: four spaces)
    #[arg(long)]
    indent: Option<String>,

    /// Import alias override for one input, as PATH=ALIAS (repeatable)
    #[arg(long, value_name = "PATH=ALIAS")]
    alias: Vec<String>,

    /// Enum wrapper label override for one input, as PATH=LABEL (repeatable)
    #[arg(long, value_name = "PATH=LABEL")]
    wrapper: Vec<String>,

    /// Treat top-level declarations as exported even without an `export` keyword
    #[arg(long)]
    ambient_exports: bool,

    /// Print the extracted declarations as JSON instead of generating
    #[arg(long)]
    dump_decls: bool,

    /// Verbose diagnostic logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let scope = if cli.ambient_exports {
        ExportScope::TopLevelAmbient
    } else {
        ExportScope::ExplicitOnly
    };
    let aliases = parse_overrides(&cli.alias, "--alias")?;
    let wrappers = parse_overrides(&cli.wrapper, "--wrapper")?;

    let sources: Vec<SourceSpec> = cli
        .inputs
        .iter()
        .map(|path| {
            let key = path.to_string_lossy();
            let mut spec = SourceSpec::new(path.clone());
            if let Some(alias) = aliases.get(key.as_ref()) {
                spec = spec.with_import_alias(alias.clone());
            }
            if let Some(wrapper) = wrappers.get(key.as_ref()) {
                spec = spec.with_enum_wrapper(wrapper.clone());
            }
            spec
        })
        .collect();

    let use_case = GenerateBarrelUseCase::new(scope);

    if cli.dump_decls {
        let args = use_case.extract_all(&sources)?;
        let json = serde_json::to_string_pretty(&args)
            .map_err(|e| BarrelError::Serialization(e.to_string()))?;
        println!("{json}");
        return Ok(());
    }

    let options = BarrelOptions {
        header: cli.header,
        indent: cli.indent,
    };
    let generated = use_case.execute(&sources, &options)?;

    match &cli.output {
        Some(path) => fs::write(path, generated)?,
        None => print!("{generated}"),
    }
    Ok(())
}

fn parse_overrides(entries: &[String], flag: &str) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for entry in entries {
        let Some((path, value)) = entry.split_once('=') else {
            return Err(BarrelError::config(format!(
                "{flag} expects PATH=VALUE, got \"{entry}\""
            )));
        };
        map.insert(path.to_string(), value.to_string());
    }
    Ok(map)
}
