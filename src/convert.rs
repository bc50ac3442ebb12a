use std::fmt;

use serde::Serialize;

use crate::utils;

/// The distance units a mile value is converted into, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    #[serde(rename = "Kilometers (km)")]
    Kilometers,
    #[serde(rename = "Meters (m)")]
    Meters,
    #[serde(rename = "Centimeters (cm)")]
    Centimeters,
    #[serde(rename = "Millimeters (mm)")]
    Millimeters,
    #[serde(rename = "Feet (ft)")]
    Feet,
    #[serde(rename = "Yards (yd)")]
    Yards,
    #[serde(rename = "Inches (in)")]
    Inches,
    #[serde(rename = "Nautical miles (nmi)")]
    NauticalMiles,
}

impl Unit {
    pub const ALL: [Unit; 8] = [
        Unit::Kilometers,
        Unit::Meters,
        Unit::Centimeters,
        Unit::Millimeters,
        Unit::Feet,
        Unit::Yards,
        Unit::Inches,
        Unit::NauticalMiles,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Unit::Kilometers => "Kilometers (km)",
            Unit::Meters => "Meters (m)",
            Unit::Centimeters => "Centimeters (cm)",
            Unit::Millimeters => "Millimeters (mm)",
            Unit::Feet => "Feet (ft)",
            Unit::Yards => "Yards (yd)",
            Unit::Inches => "Inches (in)",
            Unit::NauticalMiles => "Nautical miles (nmi)",
        }
    }

    /// Convert a distance in miles into this unit.
    pub fn from_miles(self, miles: f64) -> f64 {
        match self {
            Unit::Kilometers => utils::mi_to_km(miles),
            Unit::Meters => utils::mi_to_m(miles),
            Unit::Centimeters => utils::mi_to_cm(miles),
            Unit::Millimeters => utils::mi_to_mm(miles),
            Unit::Feet => utils::mi_to_ft(miles),
            Unit::Yards => utils::mi_to_yd(miles),
            Unit::Inches => utils::mi_to_in(miles),
            Unit::NauticalMiles => utils::mi_to_nmi(miles),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub unit: Unit,
    pub value: f64,
}

/// All eight conversions of a single distance, kept in [`Unit::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversions(Vec<Conversion>);

impl Conversions {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|c| c.unit.label() == label)
            .map(|c| c.value)
    }

    pub fn value(&self, unit: Unit) -> f64 {
        // entries are always laid out in `Unit::ALL` order
        self.0[unit as usize].value
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Conversion> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Conversions {
    type Item = &'a Conversion;
    type IntoIter = std::slice::Iter<'a, Conversion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub fn convert_miles_to_units(miles: f64) -> Conversions {
    Conversions(
        Unit::ALL
            .iter()
            .map(|&unit| Conversion {
                unit,
                value: unit.from_miles(miles),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_display_order() {
        let labels: Vec<_> = convert_miles_to_units(1.0)
            .iter()
            .map(|c| c.unit.label())
            .collect();
        assert_eq!(
            labels,
            [
                "Kilometers (km)",
                "Meters (m)",
                "Centimeters (cm)",
                "Millimeters (mm)",
                "Feet (ft)",
                "Yards (yd)",
                "Inches (in)",
                "Nautical miles (nmi)",
            ]
        );
    }

    #[test]
    fn one_mile() {
        let result = convert_miles_to_units(1.0);
        assert!(!result.is_empty());
        assert_eq!(result.len(), 8);
        assert_eq!(result.value(Unit::Meters), 1609.344);
        assert_eq!(result.value(Unit::Feet), 5280.0);
        assert_eq!(result.value(Unit::Yards), 1760.0);
        assert_eq!(result.value(Unit::Inches), 63360.0);
        assert!((result.value(Unit::Kilometers) - 1.609344).abs() < 1e-12);
        assert!((result.value(Unit::Centimeters) - 160_934.4).abs() < 1e-9);
        assert!((result.value(Unit::Millimeters) - 1_609_344.0).abs() < 1e-6);
        assert!((result.value(Unit::NauticalMiles) - 0.868_976_242).abs() < 1e-9);
    }

    #[test]
    fn feet_and_kilometers_scale_linearly() {
        for m in [0.0, 0.25, 1.0, 3.7, 10.0, 1234.5, 1e9] {
            let result = convert_miles_to_units(m);
            assert_eq!(result.get("Feet (ft)"), Some(m * 5280.0));
            let km = result.get("Kilometers (km)").unwrap();
            assert!((km - m * 1.609344).abs() <= 1e-9 * m.max(1.0));
        }
    }

    #[test]
    fn zero_miles() {
        assert!(convert_miles_to_units(0.0).iter().all(|c| c.value == 0.0));
    }

    #[test]
    fn unknown_label() {
        assert_eq!(convert_miles_to_units(1.0).get("Furlongs"), None);
    }
}
