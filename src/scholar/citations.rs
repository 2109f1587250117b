// Typed extraction of citation metrics from a SerpApi author response.
//
// The relevant part of a `google_scholar_author` response looks like:
//
//   "cited_by": {
//     "table": [
//       { "citations": { "all": 21934, "since_2016": 12302 } },
//       { "h_index":   { "all": 45,    "since_2016": 36 } },
//       { "i10_index": { "all": 59,    "since_2016": 51 } }
//     ],
//     "graph": [ ... ]
//   }
//
// Only `table[0].citations.all` is required. Everything else is best-effort.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a citation count could not be obtained.
#[derive(Debug, Error)]
pub enum CitationError {
    #[error("SerpApi request failed")]
    Network(#[source] reqwest::Error),
    #[error("SerpApi returned {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("SerpApi returned an error: {0}")]
    Upstream(String),
    #[error("SerpApi response is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),
    #[error("SerpApi response is not a JSON object: {0}")]
    NotAnObject(String),
    #[error("'cited_by' not found in response, fields present: {}", .available.join(", "))]
    MissingCitedBy { available: Vec<String> },
    #[error("'cited_by.table' is missing or empty: {fragment}")]
    MissingTable { fragment: String },
    #[error("'{field}' not found in cited_by table: {fragment}")]
    MissingField { field: &'static str, fragment: String },
    #[error("'{field}' is not a non-negative integer: {value}")]
    NotAnInteger { field: &'static str, value: String },
}

// The request URL carries the API key as a query parameter, so it is
// stripped before the error can reach logs or stderr.
impl From<reqwest::Error> for CitationError {
    fn from(err: reqwest::Error) -> Self {
        CitationError::Network(err.without_url())
    }
}

/// Metrics pulled from an author profile. Only `citations` is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScholarMetrics {
    pub author_name: Option<String>,
    pub citations: u64,
    pub h_index: Option<u64>,
    pub i10_index: Option<u64>,
}

/// Extract the total citation count (`cited_by.table[0].citations.all`).
pub fn extract_citations(body: &Value) -> Result<u64, CitationError> {
    let object = as_object(body)?;
    let table = cited_by_table(object)?;

    let all = table
        .first()
        .and_then(|row| row.get("citations"))
        .and_then(|citations| citations.get("all"))
        .ok_or_else(|| CitationError::MissingField {
            field: "citations.all",
            fragment: Value::Array(table.to_vec()).to_string(),
        })?;

    coerce_count(all).ok_or_else(|| CitationError::NotAnInteger {
        field: "citations.all",
        value: all.to_string(),
    })
}

/// Extract the citation count plus the optional h-index, i10-index and
/// author name.
pub fn extract_metrics(body: &Value) -> Result<ScholarMetrics, CitationError> {
    let citations = extract_citations(body)?;

    // extract_citations already validated the shape up to the table
    let table = body
        .get("cited_by")
        .and_then(|c| c.get("table"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    Ok(ScholarMetrics {
        author_name: body
            .get("author")
            .and_then(|a| a.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string),
        citations,
        h_index: table_metric(table, "h_index"),
        i10_index: table_metric(table, "i10_index"),
    })
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, CitationError> {
    let object = body
        .as_object()
        .ok_or_else(|| CitationError::NotAnObject(body.to_string()))?;

    // An application-level error wins over anything else in the body
    if let Some(error) = object.get("error") {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(CitationError::Upstream(message));
    }

    Ok(object)
}

fn cited_by_table(object: &Map<String, Value>) -> Result<&[Value], CitationError> {
    let cited_by = object
        .get("cited_by")
        .ok_or_else(|| CitationError::MissingCitedBy {
            available: object.keys().cloned().collect(),
        })?;

    cited_by
        .get("table")
        .and_then(Value::as_array)
        .filter(|table| !table.is_empty())
        .map(Vec::as_slice)
        .ok_or_else(|| CitationError::MissingTable {
            fragment: cited_by.to_string(),
        })
}

/// Find `{ name: { "all": n } }` anywhere in the table.
fn table_metric(table: &[Value], name: &str) -> Option<u64> {
    table
        .iter()
        .find_map(|row| row.get(name))
        .and_then(|metric| metric.get("all"))
        .and_then(coerce_count)
}

/// Accept unsigned integers, integral non-negative floats and digit strings.
fn coerce_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
                trimmed.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}
