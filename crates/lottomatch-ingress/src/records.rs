//! Boundary parsing of result and entry records.
//!
//! Records arrive as untyped JSON. Every row is checked field by field so
//! that a type-invalid record fails here with
//! [`LottomatchError::InvalidInput`] naming the row, instead of flowing into
//! matching as a degenerate value.
//!
//! ## Accepted shapes
//!
//! ```text
//! results: [{ "contest": "6000" | 6000, "drawDate": "2024-01-06", "winningNumbers": [1, 2, ...] }]
//! entries: [{ "id"?: "<uuid>", "contest": ..., "drawDate": ..., "chosenNumbers": [...] }]
//! ```
//!
//! Draw dates that are strings but not ISO dates are kept as-is; they only
//! produce a warning.

use lottomatch_types::{
    ContestId, DrawDate, Entry, EntryId, LotteryNumber, LottomatchError, Result, ResultRecord,
};
use serde_json::{Map, Value};
use uuid::Uuid;

type Row = Map<String, Value>;

/// Parse a JSON array of result records.
///
/// # Errors
/// [`LottomatchError::Serialization`] for malformed JSON,
/// [`LottomatchError::InvalidInput`] for a row of the wrong shape.
pub fn parse_result_records(json: &str) -> Result<Vec<ResultRecord>> {
    let doc: Value = serde_json::from_str(json)?;
    result_records_from_value(&doc)
}

/// Typed result records from an already parsed JSON document.
pub fn result_records_from_value(doc: &Value) -> Result<Vec<ResultRecord>> {
    rows(doc, "results")?
        .iter()
        .enumerate()
        .map(|(idx, value)| -> Result<ResultRecord> {
            let row = object(idx, value)?;
            Ok(ResultRecord {
                contest: contest(idx, row)?,
                draw_date: draw_date(idx, row)?,
                winning_numbers: numbers(idx, row, "winningNumbers")?,
            })
        })
        .collect()
}

/// Parse a JSON array of entries.
///
/// # Errors
/// [`LottomatchError::Serialization`] for malformed JSON,
/// [`LottomatchError::InvalidInput`] for a row of the wrong shape.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    let doc: Value = serde_json::from_str(json)?;
    entries_from_value(&doc)
}

/// Typed entries from an already parsed JSON document.
pub fn entries_from_value(doc: &Value) -> Result<Vec<Entry>> {
    rows(doc, "entries")?
        .iter()
        .enumerate()
        .map(|(idx, value)| -> Result<Entry> {
            let row = object(idx, value)?;
            Ok(Entry {
                id: entry_id(idx, row)?,
                contest: contest(idx, row)?,
                draw_date: draw_date(idx, row)?,
                chosen_numbers: numbers(idx, row, "chosenNumbers")?,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

fn rows<'v>(doc: &'v Value, what: &str) -> Result<&'v Vec<Value>> {
    doc.as_array()
        .ok_or_else(|| LottomatchError::invalid_input(format!("{what} must be a JSON array")))
}

fn object(idx: usize, value: &Value) -> Result<&Row> {
    value
        .as_object()
        .ok_or_else(|| LottomatchError::invalid_input(format!("row {idx}: not an object")))
}

fn field<'r>(idx: usize, row: &'r Row, name: &str) -> Result<&'r Value> {
    row.get(name)
        .ok_or_else(|| LottomatchError::invalid_input(format!("row {idx}: missing {name}")))
}

fn contest(idx: usize, row: &Row) -> Result<ContestId> {
    match field(idx, row, "contest")? {
        Value::String(s) => Ok(ContestId::new(s.as_str())),
        Value::Number(n) if n.is_u64() => Ok(ContestId::new(n.to_string())),
        other => Err(LottomatchError::invalid_input(format!(
            "row {idx}: contest must be a string or non-negative integer, got {other}"
        ))),
    }
}

fn draw_date(idx: usize, row: &Row) -> Result<DrawDate> {
    let Value::String(s) = field(idx, row, "drawDate")? else {
        return Err(LottomatchError::invalid_input(format!(
            "row {idx}: drawDate must be a string"
        )));
    };
    let date = DrawDate::new(s.as_str());
    if date.as_naive_date().is_none() {
        tracing::warn!(row = idx, draw_date = %date, "Draw date is not an ISO date");
    }
    Ok(date)
}

fn numbers(idx: usize, row: &Row, name: &str) -> Result<Vec<LotteryNumber>> {
    let Value::Array(values) = field(idx, row, name)? else {
        return Err(LottomatchError::invalid_input(format!(
            "row {idx}: {name} must be an array"
        )));
    };
    values
        .iter()
        .enumerate()
        .map(|(pos, v)| {
            v.as_u64()
                .and_then(|n| LotteryNumber::try_from(n).ok())
                .ok_or_else(|| {
                    LottomatchError::invalid_input(format!(
                        "row {idx}: {name}[{pos}] must be a non-negative integer, got {v}"
                    ))
                })
        })
        .collect()
}

fn entry_id(idx: usize, row: &Row) -> Result<EntryId> {
    match row.get("id") {
        None | Some(Value::Null) => Ok(EntryId::new()),
        Some(Value::String(s)) => Uuid::parse_str(s).map(EntryId).map_err(|e| {
            LottomatchError::invalid_input(format!("row {idx}: id is not a UUID: {e}"))
        }),
        Some(other) => Err(LottomatchError::invalid_input(format!(
            "row {idx}: id must be a string, got {other}"
        ))),
    }
}
