use mutant_hints::config::{DEFAULT_TARGET_DIR, ReportConfig};
use mutant_hints::descriptor;
use mutant_hints::output;
use mutant_hints::pointcut;
use mutant_hints::report;
use mutant_hints::ReportError;

use std::process;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mutant-hints", version, about = "Explain why mutants survived and how to kill them")]
struct Cli {
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Warnings only
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build diagnostics for every survived mutant with observation hints
    Report {
        /// Build directory holding the mutation reports and observations
        #[arg(long, env = "MUTANT_HINTS_TARGET", default_value = DEFAULT_TARGET_DIR)]
        target_dir: Utf8PathBuf,
        /// Structured mutation report (default: <target>/mutations.json)
        #[arg(long)]
        mutations_json: Option<Utf8PathBuf>,
        /// XML mutation report (default: <target>/mutations.xml)
        #[arg(long)]
        mutations_xml: Option<Utf8PathBuf>,
        /// Observation output (default: <target>/reneri/observations)
        #[arg(long)]
        observations_dir: Option<Utf8PathBuf>,
        /// Package to keep in the uncovered-methods list (repeatable, default: all)
        #[arg(short, long = "package")]
        packages: Vec<String>,
        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
    /// Decode a method descriptor
    Descriptor {
        /// Descriptor, e.g. (I[Ljava/lang/String;)Z
        descriptor: String,
        /// Method name to print with it
        #[arg(long, default_value = "method")]
        name: String,
    },
    /// Decode a pointcut
    Pointcut {
        /// Pointcut, e.g. Foo|bar|0|3|#result
        pointcut: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match cli.command {
        Commands::Report {
            target_dir,
            mutations_json,
            mutations_xml,
            observations_dir,
            packages,
            json,
            output,
        } => {
            let config = ReportConfig::for_target(&target_dir)
                .with_mutations_json(mutations_json)
                .with_mutations_xml(mutations_xml)
                .with_observations_dir(observations_dir)
                .with_packages(packages);
            cmd_report(&config, json, output)
        }
        Commands::Descriptor { descriptor, name } => cmd_descriptor(&descriptor, &name),
        Commands::Pointcut { pointcut, json } => cmd_pointcut(&pointcut, json),
    };

    process::exit(exit_code);
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn exit_code_for(err: &ReportError) -> i32 {
    if err.is_input_error() { 2 } else { 3 }
}

fn cmd_report(config: &ReportConfig, json_mode: bool, output_path: Option<Utf8PathBuf>) -> i32 {
    let outcome = match report::build_report(config) {
        Ok(o) => o,
        Err(e) => {
            output::print_error(&e.to_string());
            return exit_code_for(&e);
        }
    };

    if json_mode || output_path.is_some() {
        let json = match serde_json::to_string_pretty(&outcome.report) {
            Ok(j) => j,
            Err(e) => {
                output::print_error(&format!("Failed to serialize report: {e}"));
                return 3;
            }
        };
        match output_path {
            Some(path) => {
                if let Err(e) = std::fs::write(&path, json) {
                    output::print_error(&format!("Failed to write {path}: {e}"));
                    return 3;
                }
                output::print_success(&format!(
                    "{} diagnostics written to {}",
                    outcome.report.hints.len(),
                    path
                ));
            }
            None => println!("{json}"),
        }
    } else {
        output::print_report(&outcome.report, &outcome.failures);
    }
    0
}

fn cmd_descriptor(raw: &str, name: &str) -> i32 {
    match descriptor::parse_descriptor(raw) {
        Ok(sig) => {
            output::print_signature(name, &sig);
            0
        }
        Err(e) => {
            output::print_error(&e.to_string());
            2
        }
    }
}

fn cmd_pointcut(raw: &str, json_mode: bool) -> i32 {
    let parsed = match pointcut::parse_pointcut(raw) {
        Ok(p) => p,
        Err(e) => {
            output::print_error(&e.to_string());
            return 2;
        }
    };
    if json_mode {
        match serde_json::to_string(&parsed) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                output::print_error(&format!("Failed to serialize pointcut: {e}"));
                return 3;
            }
        }
    } else {
        output::print_pointcut(&parsed);
    }
    0
}
