//! The cascade assembler: builds a fresh [`StyleMap`] for an element from
//! its matching rules across every origin.

use crate::convert::property_value_to_lexical_unit;
use crate::matcher::selector_matches;
use crate::media::media_list_matches;
use crate::sheet::CascadeSheet;
use browser_interfaces::DomNode;
use css_parser_core::{CssRule, PropertyDeclaration};
use css_parser_values::LexicalUnit;
use css_stylist_core::{ParseContext, PropertyRegistry, StyleMap};
use css_types::{Origin, PropertyIndex, Specificity};

/// An already-parsed declaration from an element's inline `style="..."`
/// attribute, cascading at the `InlineAuthor` origin.
pub type InlineDeclaration = PropertyDeclaration;

struct Applied {
    origin: Origin,
    specificity: Specificity,
    source_order: usize,
    idx: PropertyIndex,
    value: css_stylist_core::Value,
    important: bool,
}

/// Build a style map for `element` from:
/// - `sheets`: stylesheets at any origin, filtered by `enabled` and by
///   `active_media` (and, for nested `@media` rules, by their own list).
/// - `inline_declarations`: the element's parsed inline style, if any
///   (`InlineAuthor` origin).
/// - `non_css_hints`: presentational hint declarations not expressed as CSS
///   (`NonCss` origin) — e.g. a legacy `bgcolor` attribute.
pub fn build_style_map<E: DomNode>(
    registry: &PropertyRegistry<E>,
    sheets: &[CascadeSheet],
    inline_declarations: &[InlineDeclaration],
    non_css_hints: &[(String, LexicalUnit)],
    element: &E,
    active_media: &[String],
) -> StyleMap {
    let mut applied = Vec::new();
    let ctx = ParseContext::new("");
    let mut source_order = 0usize;

    for sheet in sheets {
        if !sheet.enabled {
            continue;
        }
        if !media_list_matches(&sheet.media_queries, active_media) {
            continue;
        }
        collect_from_rules(
            &sheet.stylesheet.rules,
            sheet.origin,
            active_media,
            element,
            registry,
            &ctx,
            &mut source_order,
            &mut applied,
        );
    }

    for (name, lexical_unit) in non_css_hints {
        emit_declaration(
            registry,
            name,
            lexical_unit,
            false,
            Origin::NonCss,
            Specificity::zero(),
            &mut source_order,
            &ctx,
            &mut applied,
        );
    }

    for decl in inline_declarations {
        let lexical_unit = property_value_to_lexical_unit(&decl.value);
        emit_declaration(
            registry,
            &decl.name,
            &lexical_unit,
            decl.important,
            Origin::InlineAuthor,
            Specificity::zero(),
            &mut source_order,
            &ctx,
            &mut applied,
        );
    }

    let mut map = StyleMap::new(registry.property_count());

    let mut ua_user: Vec<&Applied> = applied
        .iter()
        .filter(|a| matches!(a.origin, Origin::UserAgent | Origin::User))
        .collect();
    ua_user.sort_by(|a, b| {
        a.origin
            .cmp(&b.origin)
            .then(a.specificity.cmp(&b.specificity))
            .then(a.source_order.cmp(&b.source_order))
    });
    for a in ua_user {
        map.write_unconditional(a.idx, a.value.clone(), a.important, a.origin);
    }

    let mut author: Vec<&Applied> = applied
        .iter()
        .filter(|a| matches!(a.origin, Origin::NonCss | Origin::Author | Origin::InlineAuthor))
        .collect();
    author.sort_by(|a, b| {
        a.origin
            .cmp(&b.origin)
            .then(a.specificity.cmp(&b.specificity))
            .then(a.source_order.cmp(&b.source_order))
    });
    for a in author {
        map.write_author(a.idx, a.value.clone(), a.important, a.origin);
    }

    map
}

#[allow(clippy::too_many_arguments)]
fn collect_from_rules<E: DomNode>(
    rules: &[CssRule],
    origin: Origin,
    active_media: &[String],
    element: &E,
    registry: &PropertyRegistry<E>,
    ctx: &ParseContext,
    source_order: &mut usize,
    applied: &mut Vec<Applied>,
) {
    for rule in rules {
        match rule {
            CssRule::Style(style_rule) => {
                let specificity = style_rule
                    .selectors
                    .iter()
                    .find(|selector| selector_matches(selector, element))
                    .map(|selector| selector.specificity());

                let Some(specificity) = specificity else { continue };

                for decl in &style_rule.declarations {
                    let lexical_unit = property_value_to_lexical_unit(&decl.value);
                    emit_declaration(
                        registry,
                        &decl.name,
                        &lexical_unit,
                        decl.important,
                        origin,
                        specificity,
                        source_order,
                        ctx,
                        applied,
                    );
                }
            }
            CssRule::Media(media_rule) => {
                if media_list_matches(&media_rule.media_queries, active_media) {
                    collect_from_rules(
                        &media_rule.rules,
                        origin,
                        active_media,
                        element,
                        registry,
                        ctx,
                        source_order,
                        applied,
                    );
                }
            }
            CssRule::Import(_) => {
                // Import resolution is an external collaborator's job; a
                // resolved `@import` shows up as its own `CascadeSheet`.
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn emit_declaration<E: DomNode>(
    registry: &PropertyRegistry<E>,
    name: &str,
    lexical_unit: &LexicalUnit,
    important: bool,
    origin: Origin,
    specificity: Specificity,
    source_order: &mut usize,
    ctx: &ParseContext,
    applied: &mut Vec<Applied>,
) {
    let order = *source_order;
    *source_order += 1;

    let _ = registry.create_value(name, lexical_unit, important, ctx, &mut |idx, value, important| {
        applied.push(Applied {
            origin,
            specificity,
            source_order: order,
            idx,
            value,
            important,
        });
    });
}
