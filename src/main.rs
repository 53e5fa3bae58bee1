//! Calc Engine CLI
//!
//! Evaluates one calculation and optionally records it in a history CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- 0.1 + 0.2
//! cargo run -- 10 / 3 history.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use calc_engine::{
    calculate_result, format_history_csv, parse_history_csv, CalcError, HistoryItem, Operand,
    Operator, Result, DEFAULT_MAX_INPUT_LENGTH, HISTORY_CSV_HEADER,
};
use chrono::Utc;
use log::debug;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return Err(CalcError::MissingArgument);
    }

    let value1: Operand = args[1].parse()?;
    let action: Operator = args[2].parse()?;
    let value2: Operand = args[3].parse()?;

    let result = calculate_result(&value1, &value2, action, DEFAULT_MAX_INPUT_LENGTH);
    println!("{}", result);

    if let Some(path) = args.get(4) {
        record_history(Path::new(path), &value1, action, &value2, &result)?;
    }

    Ok(())
}

/// Appends the calculation to the history file, rewriting it with the
/// canonical header. Non-finite results are not recorded.
fn record_history(
    path: &Path,
    value1: &Operand,
    action: Operator,
    value2: &Operand,
    result: &str,
) -> Result<()> {
    let result: Operand = match result.parse() {
        Ok(operand) => operand,
        Err(_) => {
            debug!("Non-finite result '{}' not recorded in history", result);
            return Ok(());
        }
    };

    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut items = parse_history_csv(&existing);
    items.push(HistoryItem {
        value1: value1.clone(),
        action,
        value2: value2.clone(),
        result,
        time_stamp: Utc::now(),
    });

    fs::write(path, format_history_csv(&items, HISTORY_CSV_HEADER))?;
    Ok(())
}
