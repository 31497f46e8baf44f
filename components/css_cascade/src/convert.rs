//! Bridges `css_parser_core`'s typed declaration values into the
//! `css_parser_values::LexicalUnit` token shape value managers consume.
//!
//! The reference grammar parser (`css_parser_core`) and the reference value
//! parser (`css_parser_values`) were built as separate, independently
//! testable crates; the cascade assembler is the seam where a concrete
//! declaration's value needs to reach a `ValueManager`.

use css_parser_core::PropertyValue;
use css_parser_values::{ComplexValue, LexicalUnit, ValueKind};
use css_types::LengthUnit;

/// Render a typed declaration value back into a lexical unit for a
/// `ValueManager` to interpret.
pub fn property_value_to_lexical_unit(value: &PropertyValue) -> LexicalUnit {
    match value {
        PropertyValue::Color(c) => ComplexValue::new(
            ValueKind::Color,
            format!("rgba({}, {}, {}, {})", c.r(), c.g(), c.b(), c.a()),
        ),
        PropertyValue::Length(l) => {
            ComplexValue::new(ValueKind::Length, format!("{}{}", l.value(), unit_str(l.unit())))
        }
        PropertyValue::Keyword(k) => ComplexValue::new(ValueKind::Keyword, k.clone()),
        PropertyValue::String(s) => ComplexValue::new(ValueKind::String, s.clone()),
    }
}

fn unit_str(unit: LengthUnit) -> &'static str {
    match unit {
        LengthUnit::Px => "px",
        LengthUnit::Em => "em",
        LengthUnit::Rem => "rem",
        LengthUnit::Percent => "%",
        LengthUnit::Vw => "vw",
        LengthUnit::Vh => "vh",
    }
}
