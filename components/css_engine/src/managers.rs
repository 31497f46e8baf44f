//! Reference `ValueManager`/`ShorthandManager` implementations.
//!
//! These cover enough of CSS2.1's visual box/text properties to exercise
//! the whole cascade → computed-value pipeline end to end: colors, lengths
//! (including `font-size`'s and `line-height`'s relative resolution), plain
//! keyword properties, and a couple of 1-4-value box shorthands.

use browser_interfaces::DomNode;
use css_parser_values::{parse_color_value, LexicalUnit, ValueKind};
use css_stylist_core::{ComputeContext, ParseContext, ShorthandManager, StylistError, Value, ValueManager};
use css_types::{Color, Length, LengthUnit};
use std::marker::PhantomData;

/// A computed length, resolved to device pixels. `font-size`, `line-height`,
/// and every box-model length manager in this module produce this as their
/// computed-value payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedPx(pub f32);

/// A cascaded length still in its specified unit, as produced by `create_value`
/// for any length-typed property.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SpecifiedLength {
    Px(f32),
    Em(f32),
    Rem(f32),
    Percent(f32),
}

impl SpecifiedLength {
    fn from_lexical_unit(lexical_unit: &LexicalUnit, property: &str) -> Result<Self, StylistError> {
        match lexical_unit.kind() {
            // A bare number (most commonly unitless `0`) is a pixel length.
            ValueKind::Number => {
                let v = lexical_unit.data().parse::<f32>().map_err(|_| StylistError::InvalidValue {
                    property: property.to_string(),
                    reason: format!("invalid number: {}", lexical_unit.data()),
                })?;
                Ok(SpecifiedLength::Px(v))
            }
            ValueKind::Length => {
                let length = Length::parse(lexical_unit.data()).map_err(|e| StylistError::InvalidValue {
                    property: property.to_string(),
                    reason: e.to_string(),
                })?;
                Ok(match length.unit() {
                    LengthUnit::Px => SpecifiedLength::Px(length.value()),
                    LengthUnit::Em => SpecifiedLength::Em(length.value()),
                    LengthUnit::Rem => SpecifiedLength::Rem(length.value()),
                    LengthUnit::Percent => SpecifiedLength::Percent(length.value()),
                    LengthUnit::Vw | LengthUnit::Vh => SpecifiedLength::Px(length.value()),
                })
            }
            ValueKind::Percentage => {
                let pct = lexical_unit
                    .data()
                    .trim_end_matches('%')
                    .parse::<f32>()
                    .map_err(|_| StylistError::InvalidValue {
                        property: property.to_string(),
                        reason: format!("invalid percentage: {}", lexical_unit.data()),
                    })?;
                Ok(SpecifiedLength::Percent(pct))
            }
            _ => Err(StylistError::InvalidValue {
                property: property.to_string(),
                reason: format!("expected a length, found {:?}", lexical_unit.kind()),
            }),
        }
    }
}

/// The root font size every `rem` length resolves against. This engine does
/// not model a document tree deep enough to find the actual root element's
/// computed `font-size`, so `rem` resolves against this fixed base instead
/// of walking to the root — a known simplification.
const ROOT_FONT_SIZE_PX: f32 = 16.0;

/// `color` / `background-color` / any other `<color>`-valued longhand.
#[derive(Debug)]
pub struct ColorManager {
    property: &'static str,
    inherited: bool,
    default: Color,
}

impl ColorManager {
    pub fn new(property: &'static str, inherited: bool, default: Color) -> Self {
        ColorManager { property, inherited, default }
    }
}

impl<E: DomNode> ValueManager<E> for ColorManager {
    fn property_name(&self) -> &str {
        self.property
    }

    fn is_inherited(&self) -> bool {
        self.inherited
    }

    fn default_value(&self) -> Value {
        Value::specified(self.default)
    }

    fn create_value(&self, lexical_unit: &LexicalUnit, _ctx: &ParseContext) -> Result<Value, StylistError> {
        if lexical_unit.kind() == ValueKind::Keyword && lexical_unit.data() == "inherit" {
            return Ok(Value::Inherit);
        }
        let color = parse_color_value(lexical_unit.data()).map_err(|e| StylistError::InvalidValue {
            property: self.property.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Value::specified(color))
    }

    fn compute_value(&self, _ctx: &mut ComputeContext<'_, E>, cascaded: &Value) -> Value {
        // Colors need no further resolution once parsed.
        cascaded.clone()
    }
}

/// `font-size`: the one length whose relative units (`em`, `%`) resolve
/// against the *parent's* computed font-size rather than the element's own,
/// per CSS2.1 §10.2.
#[derive(Debug)]
pub struct FontSizeManager;

impl<E: DomNode + Clone> ValueManager<E> for FontSizeManager {
    fn property_name(&self) -> &str {
        "font-size"
    }

    fn is_inherited(&self) -> bool {
        true
    }

    fn default_value(&self) -> Value {
        Value::specified(ComputedPx(ROOT_FONT_SIZE_PX))
    }

    fn create_value(&self, lexical_unit: &LexicalUnit, _ctx: &ParseContext) -> Result<Value, StylistError> {
        if lexical_unit.kind() == ValueKind::Keyword && lexical_unit.data() == "inherit" {
            return Ok(Value::Inherit);
        }
        let specified = SpecifiedLength::from_lexical_unit(lexical_unit, "font-size")?;
        Ok(Value::specified(specified))
    }

    fn compute_value(&self, ctx: &mut ComputeContext<'_, E>, cascaded: &Value) -> Value {
        let Some(specified) = cascaded.downcast_ref::<SpecifiedLength>() else {
            return Value::specified(ComputedPx(ROOT_FONT_SIZE_PX));
        };
        let parent_px = || -> f32 {
            match ctx.parent_computed(ctx.registry().font_size_index()) {
                Some(value) => value
                    .resolved()
                    .downcast_ref::<ComputedPx>()
                    .map(|px| px.0)
                    .unwrap_or(ROOT_FONT_SIZE_PX),
                None => ROOT_FONT_SIZE_PX,
            }
        };
        let px = match *specified {
            SpecifiedLength::Px(v) => v,
            SpecifiedLength::Em(v) => v * parent_px(),
            SpecifiedLength::Percent(v) => (v / 100.0) * parent_px(),
            SpecifiedLength::Rem(v) => v * ROOT_FONT_SIZE_PX,
        };
        Value::specified(ComputedPx(px))
    }
}

/// `line-height`: a bare number is a multiplier of the element's own
/// font-size; a length resolves like any other length, but `em`/`%` are
/// relative to the element's own (not the parent's) font-size.
#[derive(Debug)]
pub struct LineHeightManager;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SpecifiedLineHeight {
    Number(f32),
    Length(SpecifiedLength),
    Normal,
}

impl<E: DomNode + Clone> ValueManager<E> for LineHeightManager {
    fn property_name(&self) -> &str {
        "line-height"
    }

    fn is_inherited(&self) -> bool {
        true
    }

    fn default_value(&self) -> Value {
        Value::specified(SpecifiedLineHeight::Normal)
    }

    fn create_value(&self, lexical_unit: &LexicalUnit, _ctx: &ParseContext) -> Result<Value, StylistError> {
        if lexical_unit.kind() == ValueKind::Keyword {
            return match lexical_unit.data() {
                "inherit" => Ok(Value::Inherit),
                "normal" => Ok(Value::specified(SpecifiedLineHeight::Normal)),
                other => Err(StylistError::InvalidValue {
                    property: "line-height".to_string(),
                    reason: format!("unknown keyword: {}", other),
                }),
            };
        }
        if lexical_unit.kind() == ValueKind::Number {
            let n = lexical_unit.data().parse::<f32>().map_err(|_| StylistError::InvalidValue {
                property: "line-height".to_string(),
                reason: format!("invalid number: {}", lexical_unit.data()),
            })?;
            return Ok(Value::specified(SpecifiedLineHeight::Number(n)));
        }
        let specified = SpecifiedLength::from_lexical_unit(lexical_unit, "line-height")?;
        Ok(Value::specified(SpecifiedLineHeight::Length(specified)))
    }

    fn compute_value(&self, ctx: &mut ComputeContext<'_, E>, cascaded: &Value) -> Value {
        let own_font_size_px = || -> f32 {
            ctx.computed(ctx.registry().font_size_index())
                .resolved()
                .downcast_ref::<ComputedPx>()
                .map(|px| px.0)
                .unwrap_or(ROOT_FONT_SIZE_PX)
        };
        match cascaded.downcast_ref::<SpecifiedLineHeight>() {
            Some(SpecifiedLineHeight::Normal) | None => Value::specified(ComputedPx(own_font_size_px() * 1.2)),
            Some(SpecifiedLineHeight::Number(n)) => Value::specified(ComputedPx(n * own_font_size_px())),
            Some(SpecifiedLineHeight::Length(SpecifiedLength::Px(v))) => Value::specified(ComputedPx(*v)),
            Some(SpecifiedLineHeight::Length(SpecifiedLength::Em(v))) => {
                Value::specified(ComputedPx(v * own_font_size_px()))
            }
            Some(SpecifiedLineHeight::Length(SpecifiedLength::Percent(v))) => {
                Value::specified(ComputedPx((v / 100.0) * own_font_size_px()))
            }
            Some(SpecifiedLineHeight::Length(SpecifiedLength::Rem(v))) => {
                Value::specified(ComputedPx(v * ROOT_FONT_SIZE_PX))
            }
        }
    }
}

/// A non-font-size box-model length: `width`, `height`, the `margin-*`/
/// `padding-*` longhands, `top`/`right`/`bottom`/`left`, `border-width`.
/// `em`/`rem` resolve against the element's own font-size/the root size;
/// `%` is carried through unresolved since this engine has no layout
/// containing-block geometry to resolve it against.
#[derive(Debug)]
pub struct LengthManager {
    property: &'static str,
    inherited: bool,
    default_px: f32,
}

impl LengthManager {
    pub fn new(property: &'static str, inherited: bool, default_px: f32) -> Self {
        LengthManager { property, inherited, default_px }
    }
}

impl<E: DomNode + Clone> ValueManager<E> for LengthManager {
    fn property_name(&self) -> &str {
        self.property
    }

    fn is_inherited(&self) -> bool {
        self.inherited
    }

    fn default_value(&self) -> Value {
        Value::specified(ComputedPx(self.default_px))
    }

    fn create_value(&self, lexical_unit: &LexicalUnit, _ctx: &ParseContext) -> Result<Value, StylistError> {
        if lexical_unit.kind() == ValueKind::Keyword {
            return match lexical_unit.data() {
                "inherit" => Ok(Value::Inherit),
                "auto" => Ok(Value::specified(ComputedPx(0.0))),
                other => Err(StylistError::InvalidValue {
                    property: self.property.to_string(),
                    reason: format!("unknown keyword: {}", other),
                }),
            };
        }
        let specified = SpecifiedLength::from_lexical_unit(lexical_unit, self.property)?;
        Ok(Value::specified(specified))
    }

    fn compute_value(&self, ctx: &mut ComputeContext<'_, E>, cascaded: &Value) -> Value {
        let Some(specified) = cascaded.downcast_ref::<SpecifiedLength>() else {
            return cascaded.clone();
        };
        let px = match *specified {
            SpecifiedLength::Px(v) => v,
            SpecifiedLength::Rem(v) => v * ROOT_FONT_SIZE_PX,
            SpecifiedLength::Em(v) => {
                let own_font_size = ctx
                    .computed(ctx.registry().font_size_index())
                    .resolved()
                    .downcast_ref::<ComputedPx>()
                    .map(|px| px.0)
                    .unwrap_or(ROOT_FONT_SIZE_PX);
                v * own_font_size
            }
            // Percentages need a containing-block size this engine does not
            // model; carried through as the raw percentage rather than
            // guessed at.
            SpecifiedLength::Percent(v) => return Value::specified(SpecifiedLength::Percent(v)),
        };
        Value::specified(ComputedPx(px))
    }
}

/// A plain keyword-valued longhand with no further computation: `display`,
/// `visibility`, `text-align`, `font-weight`'s keyword forms, and similar.
#[derive(Debug)]
pub struct KeywordManager {
    property: &'static str,
    inherited: bool,
    default: &'static str,
    allowed: &'static [&'static str],
}

impl KeywordManager {
    pub fn new(
        property: &'static str,
        inherited: bool,
        default: &'static str,
        allowed: &'static [&'static str],
    ) -> Self {
        KeywordManager { property, inherited, default, allowed }
    }
}

impl<E: DomNode> ValueManager<E> for KeywordManager {
    fn property_name(&self) -> &str {
        self.property
    }

    fn is_inherited(&self) -> bool {
        self.inherited
    }

    fn default_value(&self) -> Value {
        Value::specified(self.default.to_string())
    }

    fn create_value(&self, lexical_unit: &LexicalUnit, _ctx: &ParseContext) -> Result<Value, StylistError> {
        if lexical_unit.kind() != ValueKind::Keyword {
            return Err(StylistError::InvalidValue {
                property: self.property.to_string(),
                reason: format!("expected a keyword, found {:?}", lexical_unit.kind()),
            });
        }
        let word = lexical_unit.data();
        if word == "inherit" {
            return Ok(Value::Inherit);
        }
        if !self.allowed.contains(&word) {
            return Err(StylistError::InvalidValue {
                property: self.property.to_string(),
                reason: format!("'{}' is not a valid value for {}", word, self.property),
            });
        }
        Ok(Value::specified(word.to_string()))
    }

    fn compute_value(&self, _ctx: &mut ComputeContext<'_, E>, cascaded: &Value) -> Value {
        cascaded.clone()
    }
}

/// Shared CSS2.1 1-to-4-value expansion for the `margin`/`padding`
/// shorthands: `a` -> all sides; `a b` -> top/bottom, left/right; `a b c` ->
/// top, left/right, bottom; `a b c d` -> top, right, bottom, left.
fn expand_box_shorthand<'a>(parts: &'a [&'a str]) -> Result<[&'a str; 4], StylistError> {
    match parts.len() {
        1 => Ok([parts[0], parts[0], parts[0], parts[0]]),
        2 => Ok([parts[0], parts[1], parts[0], parts[1]]),
        3 => Ok([parts[0], parts[1], parts[2], parts[1]]),
        4 => Ok([parts[0], parts[1], parts[2], parts[3]]),
        n => Err(StylistError::InvalidValue {
            property: "box-shorthand".to_string(),
            reason: format!("expected 1-4 values, found {}", n),
        }),
    }
}

/// `margin: <top-bottom-left-right box shorthand>`.
pub struct MarginShorthand<E> {
    _marker: PhantomData<fn(&E)>,
}

impl<E> std::fmt::Debug for MarginShorthand<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarginShorthand").finish()
    }
}

impl<E> MarginShorthand<E> {
    pub fn new() -> Self {
        MarginShorthand { _marker: PhantomData }
    }
}

impl<E> Default for MarginShorthand<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DomNode> ShorthandManager<E> for MarginShorthand<E> {
    fn property_name(&self) -> &str {
        "margin"
    }

    fn set_values(
        &self,
        lexical_unit: &LexicalUnit,
        important: bool,
        _ctx: &ParseContext,
        emit: &mut dyn FnMut(&str, &LexicalUnit, bool),
    ) -> Result<(), StylistError> {
        let parts: Vec<&str> = lexical_unit.data().split_whitespace().collect();
        let [top, right, bottom, left] = expand_box_shorthand(&parts)?;
        for (name, token) in [
            ("margin-top", top),
            ("margin-right", right),
            ("margin-bottom", bottom),
            ("margin-left", left),
        ] {
            let unit = css_parser_values::parse_value(token, name).map_err(|e| StylistError::InvalidValue {
                property: "margin".to_string(),
                reason: e.to_string(),
            })?;
            emit(name, &unit, important);
        }
        Ok(())
    }
}

/// `padding: <top-bottom-left-right box shorthand>`.
pub struct PaddingShorthand<E> {
    _marker: PhantomData<fn(&E)>,
}

impl<E> std::fmt::Debug for PaddingShorthand<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaddingShorthand").finish()
    }
}

impl<E> PaddingShorthand<E> {
    pub fn new() -> Self {
        PaddingShorthand { _marker: PhantomData }
    }
}

impl<E> Default for PaddingShorthand<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DomNode> ShorthandManager<E> for PaddingShorthand<E> {
    fn property_name(&self) -> &str {
        "padding"
    }

    fn set_values(
        &self,
        lexical_unit: &LexicalUnit,
        important: bool,
        _ctx: &ParseContext,
        emit: &mut dyn FnMut(&str, &LexicalUnit, bool),
    ) -> Result<(), StylistError> {
        let parts: Vec<&str> = lexical_unit.data().split_whitespace().collect();
        let [top, right, bottom, left] = expand_box_shorthand(&parts)?;
        for (name, token) in [
            ("padding-top", top),
            ("padding-right", right),
            ("padding-bottom", bottom),
            ("padding-left", left),
        ] {
            let unit = css_parser_values::parse_value(token, name).map_err(|e| StylistError::InvalidValue {
                property: "padding".to_string(),
                reason: e.to_string(),
            })?;
            emit(name, &unit, important);
        }
        Ok(())
    }
}

/// Construct the engine's default set of value managers, in the order the
/// registry assigns their `PropertyIndex`.
#[allow(clippy::type_complexity)]
pub fn default_value_managers<E: DomNode + Clone + 'static>() -> Vec<Box<dyn ValueManager<E>>> {
    vec![
        Box::new(ColorManager::new("color", true, Color::rgb(0, 0, 0))),
        Box::new(ColorManager::new("background-color", false, Color::rgba(0, 0, 0, 0.0))),
        Box::new(FontSizeManager),
        Box::new(LineHeightManager),
        Box::new(LengthManager::new("width", false, 0.0)),
        Box::new(LengthManager::new("height", false, 0.0)),
        Box::new(LengthManager::new("margin-top", false, 0.0)),
        Box::new(LengthManager::new("margin-right", false, 0.0)),
        Box::new(LengthManager::new("margin-bottom", false, 0.0)),
        Box::new(LengthManager::new("margin-left", false, 0.0)),
        Box::new(LengthManager::new("padding-top", false, 0.0)),
        Box::new(LengthManager::new("padding-right", false, 0.0)),
        Box::new(LengthManager::new("padding-bottom", false, 0.0)),
        Box::new(LengthManager::new("padding-left", false, 0.0)),
        Box::new(LengthManager::new("border-width", false, 0.0)),
        Box::new(KeywordManager::new(
            "display",
            false,
            "inline",
            &["block", "inline", "inline-block", "none", "flex"],
        )),
        Box::new(KeywordManager::new(
            "visibility",
            true,
            "visible",
            &["visible", "hidden", "collapse"],
        )),
        Box::new(KeywordManager::new(
            "text-align",
            true,
            "left",
            &["left", "right", "center", "justify"],
        )),
        Box::new(KeywordManager::new(
            "font-weight",
            true,
            "normal",
            &["normal", "bold", "bolder", "lighter"],
        )),
    ]
}

/// Construct the engine's default set of shorthand managers.
#[allow(clippy::type_complexity)]
pub fn default_shorthand_managers<E: DomNode + 'static>() -> Vec<Box<dyn ShorthandManager<E>>> {
    vec![Box::new(MarginShorthand::new()), Box::new(PaddingShorthand::new())]
}
