macro_rules! test_conversion {
    ($name:ident, $input:expr, $unit:expr, $display:expr) => {
        #[test]
        #[tracing_test::traced_test]
        fn $name() {
            use crate::convert::Unit;
            use crate::report::Report;

            let report = Report::from_input($input).unwrap();
            let row = report
                .rows()
                .into_iter()
                .find(|row| row.unit == $unit.label())
                .unwrap();
            assert_eq!(row.value, $display);
        }
    };
}

test_conversion!(ten_miles_in_feet, "10", Unit::Feet, "52,800");
test_conversion!(ten_miles_in_km, "10", Unit::Kilometers, "16.09344");
test_conversion!(ten_miles_in_mm, "10", Unit::Millimeters, "16,093,440");
test_conversion!(ten_miles_in_nmi, "10", Unit::NauticalMiles, "8.689762");
test_conversion!(grouped_input_in_yards, "1,234.5", Unit::Yards, "2,172,720");
test_conversion!(nbsp_input_in_inches, "\u{a0}2\u{a0}", Unit::Inches, "126,720");
test_conversion!(zero_in_meters, "0", Unit::Meters, "0");
test_conversion!(half_mile_in_cm, "0.5", Unit::Centimeters, "80,467.2");

#[test]
#[tracing_test::traced_test]
fn logs_conversion() {
    crate::report::Report::new(3.0);
    assert!(logs_contain("converted"));
}

#[test]
fn formatting_is_idempotent() {
    use crate::format::format_number;
    use crate::parse::parse_miles;

    for value in [0.0, 1.5, 1000.0, 16.09344, 8.689762419184254, 123_456_789.123_456_7] {
        let formatted = format_number(value);
        let reparsed = parse_miles(&formatted).unwrap();
        assert_eq!(format_number(reparsed), formatted);
    }
}
