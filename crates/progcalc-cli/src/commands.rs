use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use progcalc_cli::config::resolve_options;
use progcalc_cli::render::{
    conversion_table, display_line, history_table, notice_table, value_table, word_size_table,
};
use progcalc_cli::session::{feed, parse_keys};
use progcalc_core::{Calculator, from_text};

use crate::cli::{ConvertArgs, EvalArgs, SessionArgs};

pub fn run_eval(config: Option<&Path>, args: &EvalArgs) -> Result<()> {
    let mut calculator = new_calculator(config, args.session)?;
    let keys = parse_keys(&args.keys).context("parse keys")?;
    let span = info_span!("eval", keys = keys.len());
    let _guard = span.enter();

    let notices = feed(&mut calculator, &keys).context("evaluate keys")?;
    if !notices.is_empty() {
        eprintln!("{}", notice_table(&notices));
    }
    if args.json {
        let json = serde_json::to_string_pretty(&calculator.snapshot())
            .context("serialize calculator state")?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", value_table(&calculator));
    if !calculator.history().is_empty() {
        println!("{}", history_table(calculator.history()));
    }
    Ok(())
}

pub fn run_convert(config: Option<&Path>, args: &ConvertArgs) -> Result<()> {
    let options = resolve_options(config, None, args.word_size)?;
    let value = from_text(&args.value, args.from)
        .with_context(|| format!("parse {} as {}", args.value, args.from))?;
    debug!(word_size = %options.word_size, "converting value");
    println!("{}", conversion_table(&value, options.word_size));
    Ok(())
}

/// Line-oriented session on stdin. Unknown tokens are reported and the line
/// is skipped; the calculator state carries over between lines.
pub fn run_repl(config: Option<&Path>, args: SessionArgs) -> Result<()> {
    let mut calculator = new_calculator(config, args)?;
    info!(
        base = %calculator.base(),
        word_size = %calculator.word_size(),
        "session started"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", display_line(&calculator))?;
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "quit" | "exit") {
            break;
        }
        let keys = match parse_keys(&[trimmed]) {
            Ok(keys) => keys,
            Err(error) => {
                writeln!(stdout, "! {error}")?;
                continue;
            }
        };
        for notice in feed(&mut calculator, &keys)? {
            writeln!(stdout, "! {}: {}", notice.key, notice.message)?;
        }
        writeln!(stdout, "{}", display_line(&calculator))?;
    }

    info!(history = calculator.history().len(), "session ended");
    Ok(())
}

pub fn run_word_sizes() -> Result<()> {
    println!("{}", word_size_table());
    Ok(())
}

fn new_calculator(config: Option<&Path>, args: SessionArgs) -> Result<Calculator> {
    let options = resolve_options(config, args.base, args.word_size)?;
    debug!(
        base = %options.base,
        word_size = %options.word_size,
        history_limit = options.history_limit,
        "calculator options resolved"
    );
    Ok(Calculator::new(options))
}
