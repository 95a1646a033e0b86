//! Command-line interface for emdoc
//! Reads an Emdocfile, scans the configured source files for annotation
//! sentinels, and renders each template into its sibling output document.
//!
//! Usage:
//!   emdoc [-f <path>] [--dump-values]

use clap::{Arg, ArgAction, Command};
use emdoc::emdoc::config::EmdocConfig;
use emdoc::emdoc::context::ParseContext;
use emdoc::emdoc::error::EmdocError;
use emdoc::emdoc::processor::process_config;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "Emdocfile";

fn main() {
    env_logger::init();

    let matches = Command::new("emdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates documentation from annotation comments in source files")
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Path to the Emdocfile, or a directory containing one")
                .default_value("./"),
        )
        .arg(
            Arg::new("dump-values")
                .long("dump-values")
                .help("Print the accumulated value store as JSON after processing")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let file = matches.get_one::<String>("file").expect("file has a default");
    let dump_values = matches.get_flag("dump-values");

    if let Err(e) = run(file, dump_values) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(file: &str, dump_values: bool) -> Result<(), EmdocError> {
    let metadata =
        fs::metadata(file).map_err(|e| EmdocError::Io(format!("can't open {}: {}", file, e)))?;
    let config_path: PathBuf = if metadata.is_dir() {
        Path::new(file).join(CONFIG_FILE)
    } else {
        PathBuf::from(file)
    };

    let config = EmdocConfig::load(&config_path)?;

    // Globs in the config are relative to the config file's directory.
    if let Some(dir) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::env::set_current_dir(dir)
            .map_err(|e| EmdocError::Io(format!("can't enter {}: {}", dir.display(), e)))?;
    }

    let mut ctx = ParseContext::new();
    let outputs = process_config(&mut ctx, &config)?;
    for output in &outputs {
        println!("{}", output.display());
    }

    if dump_values {
        let json = serde_json::to_string_pretty(&ctx.values)
            .map_err(|e| EmdocError::Io(format!("can't serialize values: {}", e)))?;
        println!("{}", json);
    }

    Ok(())
}
