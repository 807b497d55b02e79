//! CLI argument definitions for the programmer calculator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use progcalc_model::{Base, WordSize};

#[derive(Parser)]
#[command(
    name = "progcalc",
    version,
    about = "Fixed-width programmer calculator",
    long_about = "Fixed-width programmer calculator.\n\n\
                  Evaluates key sequences on a 4 to 256-bit word in binary, octal,\n\
                  decimal or hexadecimal, with wraparound arithmetic, shifts,\n\
                  rotations and bitwise logic."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML file with calculator defaults (base, word_size, history_limit).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a key sequence and print the resulting state.
    ///
    /// Keys: digits (runs like `FF` are split), `+ - * /`, `=`,
    /// `not lsh rsh rol ror`, `and or xor nand nor`, `bin oct dec hex`,
    /// `w4`..`w256`, `clear`, `ce`, `bs`.
    Eval(EvalArgs),

    /// Show a value in every base.
    Convert(ConvertArgs),

    /// Read keys from stdin line by line.
    Repl(SessionArgs),

    /// List the supported word sizes.
    WordSizes,
}

/// Starting base and word size; override the config file.
#[derive(Args, Clone, Copy)]
pub struct SessionArgs {
    /// Initial display base (bin, oct, dec, hex).
    #[arg(long = "base", value_name = "BASE")]
    pub base: Option<Base>,

    /// Initial word size in bits (4, 8, 16, 32, 64, 128, 256).
    #[arg(long = "word-size", short = 'w', value_name = "BITS")]
    pub word_size: Option<WordSize>,
}

#[derive(Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the final state as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Keys to press, in order.
    #[arg(
        value_name = "KEY",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub keys: Vec<String>,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Value to convert, written in the `--from` base.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Base the value is written in.
    #[arg(long = "from", value_name = "BASE", default_value = "dec")]
    pub from: Base,

    /// Word size in bits; the value is truncated to fit.
    #[arg(long = "word-size", short = 'w', value_name = "BITS")]
    pub word_size: Option<WordSize>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
