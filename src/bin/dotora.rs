//! Command-line interface for dotora
//! Inspects and edits Oracle network configuration files in place, leaving every untouched line as it was.
//!
//! Usage:
//!   dotora render `<file>`                                  - Print the file as the editor sees it
//!   dotora inspect `<file>` [--tree|--json|--yaml]          - Show the parameter tree
//!   dotora get `<file>` `<alias>` `<path>`                  - Print one parameter
//!   dotora set `<file>` `<alias>` `<param>` `<value>`       - Set a parameter everywhere under an alias
//!   dotora upsert `<file>` `<alias>` `<path>` `<value>`     - Set or create one parameter
//!
//! Edits print a report and write the file back unless `--check` is given.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dotora::dotora::config::{user_config_path, DotOraConfig, Loader, ReportFormat};
use dotora::dotora::formats::{to_json_str, to_treeviz_str, to_yaml_str};
use dotora::dotora::persist::write_atomic;
use dotora::dotora::DotOraDocument;

fn main() {
    let matches = build_cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    let file = || {
        Arg::new("file")
            .help("Path to the .ora file")
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
    };
    let alias = || {
        Arg::new("alias")
            .help("Alias to edit, or @all for every alias")
            .required(true)
    };
    let path = || {
        Arg::new("path")
            .help("Slash-separated parameter path, e.g. DESCRIPTION/ADDRESS/PORT")
            .required(true)
    };
    let value = || Arg::new("value").help("New value").required(true);

    Command::new("dotora")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A lossless editor for Oracle network configuration files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults (replaces the user file)")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Raise log verbosity (repeatable)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Report what an edit would change without writing the file")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("backup")
                .long("backup")
                .help("Keep a timestamped copy of the original file")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report format")
                .value_parser(["json", "yaml", "text"])
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Print the rendered file")
                .arg(file()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the parameter tree")
                .arg(file())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("yaml"),
                )
                .arg(Arg::new("yaml").long("yaml").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("tree")
                        .long("tree")
                        .help("Indented tree (default)")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["json", "yaml"]),
                ),
        )
        .subcommand(
            Command::new("aliases")
                .about("List the aliases defined in the file")
                .arg(file()),
        )
        .subcommand(
            Command::new("get")
                .about("Print the parameter at a path under an alias")
                .arg(file())
                .arg(alias())
                .arg(path()),
        )
        .subcommand(
            Command::new("set")
                .about("Set every scalar parameter with this name under an alias")
                .arg(file())
                .arg(alias())
                .arg(Arg::new("param").help("Parameter name").required(true))
                .arg(value())
                .arg(
                    Arg::new("old")
                        .long("old")
                        .help("Only replace values currently equal to this"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a scalar parameter at every level under an alias")
                .arg(file())
                .arg(alias())
                .arg(Arg::new("param").help("Parameter name").required(true)),
        )
        .subcommand(
            Command::new("delete-path")
                .about("Delete the parameter at a path under an alias")
                .arg(file())
                .arg(alias())
                .arg(path()),
        )
        .subcommand(
            Command::new("upsert")
                .about("Set the parameter at a path, creating the last segment if needed")
                .arg(file())
                .arg(alias())
                .arg(path())
                .arg(value()),
        )
        .subcommand(
            Command::new("upsert-alias")
                .about("Set an alias to a single value, appending it if absent")
                .arg(file())
                .arg(alias())
                .arg(value()),
        )
        .subcommand(
            Command::new("remove-alias")
                .about("Remove an alias and all of its lines")
                .arg(file())
                .arg(alias()),
        )
}

/// Outcome of an edit command
#[derive(Debug, Serialize)]
struct Report {
    changed: bool,
    warnings: Vec<String>,
    backup: Option<PathBuf>,
}

fn run(matches: &ArgMatches) -> Result<()> {
    let (command, args) = matches
        .subcommand()
        .context("a command is required")?;
    let config = load_config(args)?;
    init_logging(&config, args.get_count("verbose"));

    let path = args
        .get_one::<PathBuf>("file")
        .context("a file is required")?;
    let mut doc = DotOraDocument::from_file(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    debug!(command, path = %path.display(), "running");

    let arg = |name: &str| -> Result<String> {
        args.get_one::<String>(name)
            .cloned()
            .with_context(|| format!("missing <{}>", name))
    };

    match command {
        "render" => print!("{}", doc.render()),
        "inspect" => {
            let output = if args.get_flag("json") {
                to_json_str(&doc)?
            } else if args.get_flag("yaml") {
                to_yaml_str(&doc)?
            } else {
                to_treeviz_str(&doc)
            };
            print!("{}", output);
        }
        "aliases" => {
            for alias in doc.aliases() {
                println!("{}", alias);
            }
        }
        "get" => {
            let node = doc.get_alias_attribute(&arg("alias")?, &arg("path")?)?;
            match node.value() {
                Some(value) => println!("{}", value),
                None => println!("{}", node.render_body()),
            }
        }
        edit => {
            let alias = arg("alias")?;
            match edit {
                "set" => {
                    let old = args.get_one::<String>("old").map(String::as_str);
                    doc.set_param_value(&alias, &arg("param")?, &arg("value")?, old)
                }
                "delete" => doc.delete_param(&alias, &arg("param")?),
                "delete-path" => doc.delete_param_path(&alias, &arg("path")?),
                "upsert" => doc.upsert_alias_attribute(&alias, &arg("path")?, &arg("value")?),
                "upsert-alias" => doc.upsert_alias(&alias, &arg("value")?),
                "remove-alias" => doc.remove_alias(&alias),
                other => anyhow::bail!("unknown command {}", other),
            };
            let report = persist(&doc, path, &config, args.get_flag("check"))?;
            print!("{}", format_report(&report, config.report.format)?);
        }
    }

    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<DotOraConfig> {
    let mut loader = Loader::new();
    match matches.get_one::<PathBuf>("config") {
        Some(path) => loader = loader.with_file(path),
        None => {
            if let Some(path) = user_config_path() {
                loader = loader.with_optional_file(path);
            }
        }
    }
    if matches.get_flag("backup") {
        loader = loader.set_override("write.backup", true)?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("report.format", format.as_str())?;
    }
    loader.build().context("failed to load configuration")
}

fn init_logging(config: &DotOraConfig, verbosity: u8) {
    let level = match verbosity {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn persist(doc: &DotOraDocument, path: &Path, config: &DotOraConfig, check: bool) -> Result<Report> {
    let mut backup = None;
    if doc.changed() && !check {
        let suffix = config
            .write
            .backup
            .then_some(config.write.backup_suffix.as_str());
        backup = write_atomic(path, &doc.render(), suffix)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(Report {
        changed: doc.changed(),
        warnings: doc.warnings().to_vec(),
        backup,
    })
}

fn format_report(report: &Report, format: ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
        ReportFormat::Yaml => serde_yaml::to_string(report)?,
        ReportFormat::Text => {
            let mut text = format!("changed: {}\n", report.changed);
            for warning in &report.warnings {
                text.push_str(&format!("warning: {}\n", warning));
            }
            if let Some(backup) = &report.backup {
                text.push_str(&format!("backup: {}\n", backup.display()));
            }
            text
        }
    })
}
