use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

use ferrite_logic::calculator::{describe_operation, EditorSource, ReaderSource};
use ferrite_logic::xor::MAX_GRID;
use ferrite_logic::{run_demo, Calculator, DemoConfig, Gate, Section};

#[derive(Parser, Debug)]
#[command(author, version, about = "ferrite-logic: Boolean logic gates as a first step into machine learning")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Increase output verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full walkthrough (default)
    Demo {
        #[command(flatten)]
        tree: TreeArgs,
        #[command(flatten)]
        data: DataArgs,
    },
    /// Print truth tables
    Gates {
        /// Gates to show; all of them when omitted
        #[arg(value_name = "GATE")]
        gates: Vec<Gate>,
    },
    /// Evaluate a single gate, e.g. `eval nand 1 1`
    Eval {
        gate: Gate,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=1), num_args = 1..=2)]
        bits: Vec<u8>,
    },
    /// Sample computations and NAND built from AND + NOT
    Circuit,
    /// Run test cases through a decision tree
    Tree {
        #[command(flatten)]
        tree: TreeArgs,
        /// Write the tree in use to this JSON file
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },
    /// Why XOR needs a hidden layer
    Xor {
        /// Search single-unit weights and bias in [-GRID, GRID]
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(i32).range(0..=MAX_GRID as i64))]
        grid: i32,
    },
    /// Apply gates to whole feature vectors at once
    Vectorized {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Interactive Boolean calculator
    Calc {
        /// Read answers from stdin line by line instead of the line editor
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Args, Debug, Default)]
struct TreeArgs {
    /// Decision tree JSON file to use instead of the built-in weather tree
    #[arg(long, value_name = "PATH")]
    tree: Option<PathBuf>,

    /// JSON array of test cases to use instead of the built-in ones
    #[arg(long, value_name = "PATH")]
    cases: Option<PathBuf>,

    /// Show every Boolean test taken on the way to a leaf
    #[arg(long)]
    trace: bool,
}

#[derive(Args, Debug, Default)]
struct DataArgs {
    /// Replace the fixed six-sample dataset with this many random samples
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Seed for --rows
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let base = DemoConfig { json: cli.json, ..DemoConfig::default() };

    match cli.command.unwrap_or(Command::Demo {
        tree: TreeArgs::default(),
        data: DataArgs { seed: 42, ..DataArgs::default() },
    }) {
        Command::Demo { tree, data } => {
            let config = with_data(with_tree(base, tree), data);
            run_demo(&config, &mut out)?;
        }
        Command::Gates { gates } => {
            let gates = if gates.is_empty() { Gate::ALL.to_vec() } else { gates };
            let config = DemoConfig { sections: vec![Section::Gates], gates, ..base };
            run_demo(&config, &mut out)?;
        }
        Command::Eval { gate, bits } => {
            let output = gate.eval(&bits)?;
            if cli.json {
                let doc = serde_json::json!({ "gate": gate, "inputs": bits, "output": output });
                writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
            } else {
                writeln!(out, "{}", describe_operation(gate, &bits, output))?;
            }
        }
        Command::Circuit => {
            run_demo(&DemoConfig { sections: vec![Section::Circuit], ..base }, &mut out)?;
        }
        Command::Tree { tree, save } => {
            let mut config = with_tree(DemoConfig { sections: vec![Section::Tree], ..base }, tree);
            if let Some(path) = &save {
                let in_use = config.tree_in_use()?;
                in_use
                    .save_json(path)
                    .with_context(|| format!("failed to save tree to {}", path.display()))?;
                log::info!("saved tree to {}", path.display());
                config.tree = Some(in_use);
            }
            run_demo(&config, &mut out)?;
        }
        Command::Xor { grid } => {
            run_demo(&DemoConfig { sections: vec![Section::Xor], grid, ..base }, &mut out)?;
        }
        Command::Vectorized { data } => {
            let config = with_data(DemoConfig { sections: vec![Section::Vectorized], ..base }, data);
            run_demo(&config, &mut out)?;
        }
        Command::Calc { plain } => {
            if plain {
                let stdin = io::stdin();
                Calculator::new(ReaderSource::new(stdin.lock()), &mut out).run()?;
            } else {
                let source = EditorSource::new().context("failed to start the line editor")?;
                Calculator::new(source, &mut out).run()?;
            }
        }
    }
    Ok(())
}

fn with_tree(config: DemoConfig, args: TreeArgs) -> DemoConfig {
    DemoConfig {
        tree_path: args.tree,
        cases_path: args.cases,
        trace: args.trace,
        ..config
    }
}

fn with_data(config: DemoConfig, args: DataArgs) -> DemoConfig {
    DemoConfig {
        random_rows: args.rows,
        seed: args.seed,
        ..config
    }
}

/// Level forced by `-v` flags. Without any, `RUST_LOG` decides and the
/// fallback is warn.
fn level_for(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn init_logging(verbosity: u8) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level_for(verbosity) {
        builder.filter_level(level);
    }
    builder.try_init().map_err(|err| err.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_decides_without_flags() {
        assert_eq!(level_for(0), None);
    }

    #[test]
    fn flags_raise_the_level() {
        assert_eq!(level_for(1), Some(LevelFilter::Info));
        assert_eq!(level_for(2), Some(LevelFilter::Debug));
        assert_eq!(level_for(7), Some(LevelFilter::Trace));
    }

    #[test]
    fn grid_is_bounded_on_the_command_line() {
        let cli = Cli::try_parse_from(["ferrite-logic", "xor", "--grid", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Xor { grid: 3 })));
        assert!(Cli::try_parse_from(["ferrite-logic", "xor", "--grid", "1500000000"]).is_err());
        assert!(Cli::try_parse_from(["ferrite-logic", "xor", "--grid", "-1"]).is_err());
    }
}
