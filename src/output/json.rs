//! JSON renderers.
//!
//! `json` writes an array with one object per row; `jsonshort` writes one
//! object mapping each header to the column's values. Both keep keys in
//! header order and rows in insertion order. Compact output has no trailing
//! newline; pretty output is indented with one tab per level and ends with a
//! newline.

use std::io::Write;

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::PrettyFormatter;

use super::dataset::Dataset;
use super::session::Render;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRender;

impl Render for JsonRender {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, data: &Dataset, pretty: bool, out: &mut dyn Write) -> Result<()> {
        write_json(&Rows(data), pretty, out)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonShortRender;

impl Render for JsonShortRender {
    fn name(&self) -> &str {
        "jsonshort"
    }

    fn render(&self, data: &Dataset, pretty: bool, out: &mut dyn Write) -> Result<()> {
        write_json(&Columns(data), pretty, out)
    }
}

fn write_json<T: Serialize>(value: &T, pretty: bool, out: &mut dyn Write) -> Result<()> {
    if pretty {
        let mut ser = serde_json::Serializer::with_formatter(
            &mut *out,
            PrettyFormatter::with_indent(b"\t"),
        );
        value.serialize(&mut ser)?;
        out.write_all(b"\n")?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    Ok(())
}

/// `[{"h1":"v1",...},...]`
struct Rows<'a>(&'a Dataset);

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let headers = self.0.headers();
        let mut seq = serializer.serialize_seq(Some(self.0.row_count()))?;
        for record in self.0.records() {
            seq.serialize_element(&Object { headers, record })?;
        }
        seq.end()
    }
}

struct Object<'a> {
    headers: &'a [String],
    record: Vec<&'a str>,
}

impl Serialize for Object<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (key, value) in self.headers.iter().zip(&self.record) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// `{"h1":["v1",...],...}`
struct Columns<'a>(&'a Dataset);

impl Serialize for Columns<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let headers = self.0.headers();
        let mut map = serializer.serialize_map(Some(headers.len()))?;
        for (col, key) in headers.iter().enumerate() {
            map.serialize_entry(key, &Column { data: self.0, col })?;
        }
        map.end()
    }
}

struct Column<'a> {
    data: &'a Dataset,
    col: usize,
}

impl Serialize for Column<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.column(self.col))
    }
}
