//! Calculation history and its CSV codec.
//!
//! Parsing is best-effort and lossy by design: the header line is always
//! discarded, malformed rows are logged and dropped, and nothing here ever
//! returns an error to the caller. Formatting is the structural inverse for
//! well-formed data, so a format/parse round trip preserves every item.

use crate::operand::Operand;
use crate::operator::Operator;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::{ReaderBuilder, Trim};
use log::warn;
use serde::Deserialize;
use std::fmt::Write;

/// Canonical header line for history files written by this crate.
pub const HISTORY_CSV_HEADER: &str = "value1,action,value2,result,timeStamp\n";

/// One completed calculation.
///
/// All five fields are valid by construction; rows that cannot satisfy that
/// are dropped during parsing instead of surfacing an error.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    /// Left operand as entered.
    pub value1: Operand,

    /// Operator applied between the operands.
    pub action: Operator,

    /// Right operand as entered.
    pub value2: Operand,

    /// Computed result. Held as an `Operand` because history only records
    /// finite decimal results.
    pub result: Operand,

    /// When the calculation completed.
    pub time_stamp: DateTime<Utc>,
}

/// Raw history row as deserialized from CSV.
///
/// The numeric and operator fields are validated by their `Deserialize`
/// impls; the timestamp stays text until [`HistoryRecord::parse`] because
/// several date shapes are accepted.
#[derive(Debug, Deserialize)]
struct HistoryRecord {
    value1: Operand,
    action: Operator,
    value2: Operand,
    result: Operand,
    time_stamp: String,
}

impl HistoryRecord {
    /// Validates the timestamp and finishes the item.
    ///
    /// Returns `None` if the timestamp is not a parseable date.
    fn parse(self) -> Option<HistoryItem> {
        let time_stamp = parse_time_stamp(&self.time_stamp)?;
        Some(HistoryItem {
            value1: self.value1,
            action: self.action,
            value2: self.value2,
            result: self.result,
            time_stamp,
        })
    }
}

/// Parses history CSV text into the items it contains.
///
/// The first line is treated as a header and discarded regardless of
/// content. Every other line must carry exactly five comma-separated
/// fields `(value1, action, value2, result, time_stamp)`; lines that
/// don't, or whose fields fail validation, are logged at warn level and
/// skipped. Order of the surviving rows is preserved. Empty input yields
/// an empty vec.
pub fn parse_history_csv(csv: &str) -> Vec<HistoryItem> {
    if csv.is_empty() {
        return Vec::new();
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(csv.as_bytes());

    let mut items = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        // Row 0 is the header, whatever it says.
        if row_idx == 0 {
            continue;
        }
        let row_num = row_idx + 1;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Row {}: CSV parse error: {}", row_num, e);
                continue;
            }
        };

        if record.len() != 5 {
            warn!(
                "Row {}: expected 5 fields, found {}, dropping",
                row_num,
                record.len()
            );
            continue;
        }

        match record.deserialize::<HistoryRecord>(None) {
            Ok(raw) => match raw.parse() {
                Some(item) => items.push(item),
                None => warn!("Row {}: dropped record with invalid timestamp", row_num),
            },
            Err(e) => {
                warn!("Row {}: dropped malformed history record: {}", row_num, e);
            }
        }
    }

    items
}

/// Parses a timestamp field.
///
/// Accepts RFC 3339 (what `format_history_csv` writes), a naive
/// `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD` taken as midnight UTC.
fn parse_time_stamp(field: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(field) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(field, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(field, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Formats history items as `header + one CSV row per item`.
///
/// The header is emitted verbatim (callers supply its trailing newline;
/// see [`HISTORY_CSV_HEADER`]), rows follow in input order with RFC 3339
/// timestamps and a `\n` terminator each.
pub fn format_history_csv(items: &[HistoryItem], header: &str) -> String {
    let mut out = String::from(header);

    for item in items {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            item.value1,
            item.action,
            item.value2,
            item.result,
            item.time_stamp.to_rfc3339()
        );
    }

    out
}
