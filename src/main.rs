//! semtab - command-line interface
//!
//! Reads one formula per line from a file or stdin. By default the first
//! line is a mode directive (`PARSE`, `SAT`, or both); `--mode` overrides
//! it, in which case every line is treated as a formula.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use semtab::{process, Mode, SemtabConfig};

#[derive(Parser)]
#[command(name = "semtab")]
#[command(version = "0.1.0")]
#[command(about = "Semantic-tableau formula classifier and satisfiability checker", long_about = None)]
struct Cli {
    /// Input file (defaults to stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Read input from stdin
    #[arg(long, conflicts_with = "input")]
    stdin: bool,

    /// Report mode, overriding the directive on the first input line
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Constant-pool bound before satisfiability reports unknown
    #[arg(long, value_name = "N")]
    max_constants: Option<usize>,

    /// Configuration file (defaults to semtab.toml lookup)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Trace branch expansion to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Suppress expansion tracing, even if enabled by configuration
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Report syntactic categories
    Parse,
    /// Report satisfiability verdicts
    Sat,
    /// Report both
    Both,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Mode {
        match arg {
            ModeArg::Parse => Mode {
                parse: true,
                sat: false,
            },
            ModeArg::Sat => Mode {
                parse: false,
                sat: true,
            },
            ModeArg::Both => Mode {
                parse: true,
                sat: true,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = SemtabConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            config.apply_env_overrides()?;
            config
        }
        None => SemtabConfig::load().context("failed to load configuration")?,
    };
    apply_cli_overrides(&mut config, &cli);
    let tableau_config = config.tableau();
    let mode_override = cli.mode.map(Mode::from);

    let stdin = io::stdin();
    let use_stdin = cli.stdin || cli.input.is_none();
    let result = match (&cli.input, use_stdin) {
        (Some(input), false) => {
            let file = File::open(input)
                .with_context(|| format!("failed to open {}", input.display()))?;
            run(
                BufReader::new(file),
                cli.output.as_deref(),
                mode_override,
                &tableau_config,
            )
        }
        _ => run(stdin.lock(), cli.output.as_deref(), mode_override, &tableau_config),
    };
    result.context("processing failed")
}

/// Fold CLI flags into the loaded configuration. Quiet beats verbose.
fn apply_cli_overrides(config: &mut SemtabConfig, cli: &Cli) {
    if let Some(bound) = cli.max_constants {
        config.engine.max_constants = bound;
    }
    if cli.verbose {
        config.engine.verbose = true;
    }
    if cli.quiet {
        config.engine.verbose = false;
    }
}

fn run<R: io::BufRead>(
    reader: R,
    output: Option<&std::path::Path>,
    mode_override: Option<Mode>,
    config: &semtab::TableauConfig,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            process(reader, &mut writer, mode_override, config)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            process(reader, &mut writer, mode_override, config)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mode_arg_mapping() {
        let mode: Mode = ModeArg::Both.into();
        assert!(mode.parse && mode.sat);
    }

    #[test]
    fn test_stdin_and_quiet_flags_parse() {
        let cli = Cli::try_parse_from(["semtab", "--stdin", "-q"]).unwrap();
        assert!(cli.stdin);
        assert!(cli.quiet);
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_stdin_conflicts_with_input_file() {
        assert!(Cli::try_parse_from(["semtab", "--stdin", "input.txt"]).is_err());
    }

    #[test]
    fn test_quiet_beats_verbose() {
        let cli = Cli::try_parse_from(["semtab", "-v", "-q", "--max-constants", "5"]).unwrap();
        let mut config = SemtabConfig::default();
        config.engine.verbose = true;
        apply_cli_overrides(&mut config, &cli);
        assert!(!config.engine.verbose);
        assert_eq!(config.engine.max_constants, 5);
    }
}
