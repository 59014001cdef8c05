//! Build script for runconf-cli.
//!
//! Generates the `runconf.1` man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/utils.rs.
fn build_cli() -> Command {
    let source_args = [
        Arg::new("schema")
            .long("schema")
            .help("Registry declaration file (YAML)")
            .value_name("FILE")
            .env("RUNCONF_SCHEMA"),
        Arg::new("file")
            .long("file")
            .help("Configuration file parsed before the arguments")
            .value_name("FILE"),
        Arg::new("args")
            .help("Arguments to parse, given after `--`")
            .value_name("ARGS")
            .num_args(0..)
            .last(true),
    ];

    Command::new("runconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and inspect registry-validated configuration")
        .long_about(
            "Build a configuration store from a registry declaration, parse a flat file \
             and/or an argument list into it, and read values back",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands([
            Command::new("parse")
                .about("Parse a file and/or arguments and print the resulting entries")
                .args(source_args.clone())
                .arg(Arg::new("format").long("format").value_name("FORMAT"))
                .arg(
                    Arg::new("no-verify")
                        .long("no-verify")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("get")
                .about("Print a single value through a typed accessor")
                .args(source_args)
                .arg(Arg::new("key").long("key").value_name("KEY"))
                .arg(Arg::new("as").long("as").value_name("TYPE")),
            Command::new("validate")
                .about("Validate a registry declaration file")
                .arg(Arg::new("schema-path").value_name("SCHEMA_PATH")),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").value_name("SHELL")),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer).unwrap();
    fs::write(man_dir.join("runconf.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/utils.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
