use clap::Parser;
use std::path::Path;
use std::process;

use ntm::catalog::MachineCatalog;
use ntm::loader::MachineLoader;
use ntm::types::{Machine, NtmError, Outcome, RunResult};
use ntm::Explorer;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The machine description file to run
    #[clap(short, long, conflicts_with = "catalog")]
    machine: Option<String>,

    /// Run an embedded catalog machine by name instead of a file
    #[clap(short, long)]
    catalog: Option<String>,

    /// Input strings to test for acceptance
    #[clap(short, long)]
    input: Vec<String>,

    /// A file of input strings, one per line
    #[clap(short = 'f', long)]
    input_file: Option<String>,

    /// Maximum BFS depth before the search is cut off
    #[clap(short = 'd', long, default_value_t = ntm::DEFAULT_DEPTH_LIMIT)]
    max_depth: usize,

    /// Emit results as JSON instead of the text report
    #[clap(long)]
    json: bool,

    /// List the embedded catalog machines and exit
    #[clap(long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        for name in MachineCatalog::names() {
            println!("{name}");
        }
        return;
    }

    let machine = load_machine(&cli).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let mut inputs = cli.input.clone();
    if let Some(path) = &cli.input_file {
        match MachineLoader::load_inputs(Path::new(path)) {
            Ok(lines) => inputs.extend(lines),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }

    let explorer = Explorer::with_depth_limit(&machine, cli.max_depth);

    for input in &inputs {
        let result = explorer.run(input);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        } else {
            print_report(input, &result);
        }
    }
}

fn load_machine(cli: &Cli) -> Result<Machine, NtmError> {
    if let Some(name) = &cli.catalog {
        return MachineCatalog::by_name(name);
    }

    match &cli.machine {
        Some(path) => MachineLoader::load_machine(Path::new(path)),
        None => Err(NtmError::FileError(
            "No machine given: pass --machine <file> or --catalog <name>".to_string(),
        )),
    }
}

fn print_report(input: &str, result: &RunResult) {
    println!("Machine: {}", result.machine_name);

    match &result.outcome {
        Outcome::Accepted {
            path,
            depth,
            action_count,
        } => {
            println!(
                "{:?} accepted at depth {} ({} transitions considered)",
                input, depth, action_count
            );
            println!("Path:");
            for snapshot in path {
                println!("  {snapshot}");
            }
        }
        Outcome::Rejected {
            depth,
            action_count,
        } => {
            println!(
                "{:?} rejected after depth {} ({} transitions considered)",
                input, depth, action_count
            );
        }
        Outcome::Truncated {
            depth,
            action_count,
        } => {
            println!(
                "{:?} undecided: search cut off at depth {} ({} transitions considered)",
                input, depth, action_count
            );
        }
    }
    println!();
}
