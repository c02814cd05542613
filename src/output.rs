//! JSON rendering of search results.
//!
//! Results are written as one pretty-printed array (2-space indent) followed
//! by a newline. Rendering happens into a buffer first so that stdout never
//! receives a partial document.

use crate::error::Error;
use indexmap::IndexMap;
use serde_json::Value;
use std::io::Write;

/// A converted record: field name to value, in request order.
pub type RecordMap = IndexMap<String, Value>;

/// Serializes `records` to an indented JSON document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_records(records: &[RecordMap]) -> Result<Vec<u8>, Error> {
    let mut buf = serde_json::to_vec_pretty(records)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Renders `records` and writes the whole document to `out`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_records<W: Write>(out: &mut W, records: &[RecordMap]) -> Result<(), Error> {
    let rendered = render_records(records)?;
    out.write_all(&rendered)?;
    out.flush()?;
    Ok(())
}
