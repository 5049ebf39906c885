use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use serde_json::json;

use rpn::{EvalContext, EvalError, Program, Token};

/// Evaluate a reverse-Polish-notation integer expression.
///
/// Each argument is one token: an integer, or one of `+ - * / %`
/// (also `add sub mul div mod`). Quote `*` to keep the shell from
/// expanding it. Flags go before the first token; everything after it is
/// read as a token.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Tokens in evaluation order, e.g. `5 10 + 3 '*'`
    #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
    tokens: Vec<String>,

    /// Log the stack after each token
    #[arg(long)]
    trace: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    logger.format_timestamp(None);
    if cli.trace {
        logger.filter_module("rpn", LevelFilter::Debug);
    }
    logger.init();

    let program = match parse_program(&cli.tokens) {
        Ok(program) => program,
        Err((position, e)) => {
            if cli.json {
                let out = json!({
                    "error": {
                        "kind": "invalid_token",
                        "message": e.to_string(),
                        "position": position,
                    }
                });
                println!("{}", serde_json::to_string(&out)?);
            } else {
                eprintln!("error: token {}: {}", position, e);
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let ctx = EvalContext {
        trace: cli.trace,
        ..Default::default()
    };

    match program.evaluate_with(&ctx) {
        Ok(value) => {
            if cli.json {
                println!("{}", serde_json::to_string(&json!({ "value": value }))?);
            } else {
                println!("{}", value);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            report(&e, cli.json)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Read one token per argument, reporting the index of the first bad one.
fn parse_program(words: &[String]) -> std::result::Result<Program, (usize, rpn::TokenError)> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| word.parse::<Token>().map_err(|e| (i, e)))
        .collect()
}

fn report(e: &EvalError, as_json: bool) -> Result<()> {
    if as_json {
        let out = json!({
            "error": {
                "kind": e.kind(),
                "message": e.to_string(),
                "position": e.position(),
            }
        });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        eprintln!("error: {}", e);
    }
    Ok(())
}
