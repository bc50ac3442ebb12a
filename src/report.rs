use std::fmt::Write;

use serde::Serialize;

use crate::convert::{convert_miles_to_units, Conversions, Unit};
use crate::error::ParseError;
use crate::format::format_number;
use crate::parse::parse_miles;

/// A converted distance together with its display rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    miles: f64,
    conversions: Conversions,
}

/// A single display row: the unit label and its formatted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub unit: &'static str,
    pub value: String,
}

impl Report {
    #[tracing::instrument(level = "debug")]
    pub fn new(miles: f64) -> Self {
        let conversions = convert_miles_to_units(miles);
        tracing::debug!(units = conversions.len(), "converted");
        Self { miles, conversions }
    }

    /// Parse raw user input and convert it.
    ///
    /// # Errors
    ///
    /// Returns the parser's error if the input is not a valid distance in miles.
    pub fn from_input(text: &str) -> Result<Self, ParseError> {
        Ok(Self::new(parse_miles(text)?))
    }

    pub fn miles(&self) -> f64 {
        self.miles
    }

    pub fn conversions(&self) -> &Conversions {
        &self.conversions
    }

    pub fn rows(&self) -> Vec<Row> {
        self.conversions
            .iter()
            .map(|c| Row {
                unit: c.unit.label(),
                value: format_number(c.value),
            })
            .collect()
    }

    pub fn status(&self) -> String {
        format!(
            "Converted {} miles into {} units.",
            format_number(self.miles),
            self.conversions.len()
        )
    }

    /// Two column table with left-aligned unit labels and right-aligned values.
    pub fn render_table(&self) -> String {
        render_rows(&self.rows())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Report {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct JsonConversion {
            unit: Unit,
            value: f64,
            display: String,
        }

        #[derive(Serialize)]
        struct JsonReport {
            miles: f64,
            miles_display: String,
            conversions: Vec<JsonConversion>,
        }

        JsonReport {
            miles: self.miles,
            miles_display: format_number(self.miles),
            conversions: self
                .conversions
                .iter()
                .map(|c| JsonConversion {
                    unit: c.unit,
                    value: c.value,
                    display: format_number(c.value),
                })
                .collect(),
        }
        .serialize(serializer)
    }
}

const UNIT_HEADER: &str = "Unit";
const VALUE_HEADER: &str = "Value";

pub fn render_rows(rows: &[Row]) -> String {
    let unit_width = rows
        .iter()
        .map(|r| r.unit.chars().count())
        .chain(std::iter::once(UNIT_HEADER.len()))
        .max()
        .unwrap_or_default();
    let value_width = rows
        .iter()
        .map(|r| r.value.chars().count())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    // writing into a String never fails
    let _ = writeln!(
        out,
        "{:<uw$}  {:>vw$}",
        UNIT_HEADER,
        VALUE_HEADER,
        uw = unit_width,
        vw = value_width
    );
    let _ = writeln!(out, "{}  {}", "-".repeat(unit_width), "-".repeat(value_width));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<uw$}  {:>vw$}",
            row.unit,
            row.value,
            uw = unit_width,
            vw = value_width
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_miles() {
        let report = Report::from_input("10").unwrap();
        assert_eq!(report.miles(), 10.0);
        assert_eq!(report.conversions().value(Unit::Feet), 52800.0);
        assert_eq!(report.status(), "Converted 10 miles into 8 units.");

        let rows = report.rows();
        assert_eq!(
            rows[4],
            Row {
                unit: "Feet (ft)",
                value: "52,800".to_string()
            }
        );
        assert_eq!(rows[0].value, "16.09344");
        assert_eq!(rows[7].value, "8.689762");
    }

    #[test]
    fn invalid_input_is_propagated() {
        assert_eq!(Report::from_input(" "), Err(ParseError::Empty));
    }

    #[test]
    fn table_layout() {
        let table = Report::new(1.0).render_table();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Unit                      Value");
        assert_eq!(lines[2], "Kilometers (km)        1.609344");
        assert_eq!(lines[6], "Feet (ft)                 5,280");
        assert!(lines.iter().skip(1).all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn json_keeps_display_order() {
        let json: serde_json::Value =
            serde_json::from_str(&Report::new(1234.5).to_json().unwrap()).unwrap();
        assert_eq!(json["miles"], 1234.5);
        assert_eq!(json["miles_display"], "1,234.5");

        let conversions = json["conversions"].as_array().unwrap();
        assert_eq!(conversions.len(), 8);
        assert_eq!(conversions[0]["unit"], "Kilometers (km)");
        assert_eq!(conversions[4]["unit"], "Feet (ft)");
        assert_eq!(conversions[4]["value"], 6_518_160.0);
        assert_eq!(conversions[4]["display"], "6,518,160");
        assert_eq!(conversions[7]["unit"], "Nautical miles (nmi)");
    }
}
