//! Command output: bordered tables for people, JSON for scripts.

use std::io::Write;

use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// Table with a header row. `numeric` columns are right-aligned.
pub(crate) struct TableOutput {
    builder: Builder,
    numeric: Vec<usize>,
}

impl TableOutput {
    pub(crate) fn new<const N: usize>(header: [&str; N]) -> Self {
        let mut builder = Builder::default();

        builder.push_record(header.map(str::to_string));

        Self {
            builder,
            numeric: Vec::new(),
        }
    }

    pub(crate) fn numeric(mut self, columns: &[usize]) -> Self {
        self.numeric.extend_from_slice(columns);
        self
    }

    pub(crate) fn row<const N: usize>(&mut self, record: [String; N]) {
        self.builder.push_record(record);
    }

    pub(crate) fn write(self, out: &mut impl Write) -> Result<(), String> {
        let mut table = self.builder.build();

        table.with(Style::modern_rounded());

        for column in self.numeric {
            table.modify(Columns::one(column), Alignment::right());
        }

        writeln!(out, "{table}").map_err(write_error)
    }
}

pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|error| format!("failed to encode output: {error}"))?;

    writeln!(out, "{json}").map_err(write_error)
}

pub(crate) fn write_line(out: &mut impl Write, line: &str) -> Result<(), String> {
    writeln!(out, "{line}").map_err(write_error)
}

pub(crate) fn write_error(error: std::io::Error) -> String {
    format!("failed to write output: {error}")
}

/// Empty string for a missing value.
pub(crate) fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(String::new, |value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_contains_header_and_rows() {
        let mut table = TableOutput::new(["ID", "Name"]).numeric(&[0]);
        table.row(["7".to_string(), "Air Max 1".to_string()]);

        let mut buffer = Vec::new();
        table.write(&mut buffer).expect("table should render");
        let rendered = String::from_utf8(buffer).expect("table should be UTF-8");

        assert!(rendered.contains("Name"), "header missing: {rendered}");
        assert!(rendered.contains("Air Max 1"), "row missing: {rendered}");
    }

    #[test]
    fn optional_values_render_blank() {
        assert_eq!(optional::<i64>(None), "");
        assert_eq!(optional(Some(4)), "4");
    }
}
