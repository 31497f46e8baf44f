//! CSS Parser implementation

use crate::declaration::parse_declarations;
use crate::selector::parse_selector_list;
use crate::{CssRule, ImportRule, MediaRule, ParseError, StyleRule, Stylesheet};

/// CSS Parser for CSS2.1 stylesheets, with `@media`/`@import` at-rule support.
pub struct CssParser {
    // Parser state (if needed in future)
}

impl CssParser {
    /// Create a new CSS parser
    pub fn new() -> Self {
        CssParser {}
    }

    /// Parse a complete CSS stylesheet
    pub fn parse(&self, input: &str) -> Result<Stylesheet, ParseError> {
        let mut stylesheet = Stylesheet::author();
        stylesheet.rules = self.parse_rule_list(input)?;
        Ok(stylesheet)
    }

    /// Parse a sequence of top-level rules (used for both a whole stylesheet
    /// and the body of a `@media` block).
    fn parse_rule_list(&self, input: &str) -> Result<Vec<CssRule>, ParseError> {
        let mut rules = Vec::new();

        if input.trim().is_empty() {
            return Ok(rules);
        }

        for rule_text in self.extract_rules(input)? {
            let rule_text = rule_text.trim();
            if rule_text.is_empty() {
                continue;
            }
            if let Some(rule) = self.parse_rule(rule_text)? {
                rules.push(rule);
            }
        }

        Ok(rules)
    }

    /// Parse a single CSS rule (style rule or at-rule). Returns `Ok(None)`
    /// for at-rules that produce no rule node (none currently, kept for
    /// forward compatibility with e.g. `@charset`).
    pub fn parse_rule(&self, input: &str) -> Result<Option<CssRule>, ParseError> {
        let input = input.trim();

        if let Some(rest) = input.strip_prefix("@media") {
            return self.parse_media_rule(rest).map(Some);
        }

        if let Some(rest) = input.strip_prefix("@import") {
            return self.parse_import_rule(rest).map(Some);
        }

        // Find the selector/declaration split at '{'
        let open_brace = input
            .find('{')
            .ok_or_else(|| ParseError::new(1, 1, "Expected '{' in rule"))?;

        let close_brace = input
            .rfind('}')
            .ok_or_else(|| ParseError::new(1, 1, "Expected '}' in rule"))?;

        if open_brace >= close_brace {
            return Err(ParseError::new(1, 1, "Mismatched braces"));
        }

        // Extract selectors and declaration block
        let selector_text = &input[..open_brace];
        let declaration_text = &input[open_brace + 1..close_brace];

        // Parse selectors
        let selectors = parse_selector_list(selector_text)?;

        // Parse declarations
        let declarations = parse_declarations(declaration_text)?;

        Ok(Some(CssRule::Style(StyleRule {
            selectors,
            declarations,
        })))
    }

    /// Parse the body of an `@media <media-list> { ... }` rule. `rest` is
    /// everything after the `@media` keyword.
    fn parse_media_rule(&self, rest: &str) -> Result<CssRule, ParseError> {
        let open_brace = rest
            .find('{')
            .ok_or_else(|| ParseError::new(1, 1, "Expected '{' after @media"))?;
        let close_brace = rest
            .rfind('}')
            .ok_or_else(|| ParseError::new(1, 1, "Expected '}' to close @media"))?;

        if open_brace >= close_brace {
            return Err(ParseError::new(1, 1, "Mismatched braces in @media"));
        }

        let media_queries = parse_media_list(&rest[..open_brace]);
        let body = &rest[open_brace + 1..close_brace];
        let rules = self.parse_rule_list(body)?;

        Ok(CssRule::Media(MediaRule {
            media_queries,
            rules,
        }))
    }

    /// Parse an `@import url(...) <media-list>;` rule. `rest` is everything
    /// after the `@import` keyword, including the terminating `;`.
    fn parse_import_rule(&self, rest: &str) -> Result<CssRule, ParseError> {
        let rest = rest.trim_end().strip_suffix(';').unwrap_or(rest).trim();

        let (url_token, tail) = match rest.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (rest, ""),
        };

        let url = parse_url_token(url_token)
            .ok_or_else(|| ParseError::new(1, 1, "Invalid @import URL"))?;
        let media_queries = parse_media_list(tail);

        Ok(CssRule::Import(ImportRule { url, media_queries }))
    }

    /// Extract individual top-level rules (style rules and at-rule blocks)
    /// from a rule-list body, splitting on balanced `{ }` groups and on `;`
    /// for brace-less at-rules like `@import`.
    fn extract_rules<'a>(&self, input: &'a str) -> Result<Vec<&'a str>, ParseError> {
        let mut rules = Vec::new();
        let mut start = 0;
        let mut brace_depth = 0;

        for (i, ch) in input.char_indices() {
            match ch {
                '{' => brace_depth += 1,
                '}' => {
                    brace_depth -= 1;
                    if brace_depth == 0 {
                        rules.push(&input[start..=i]);
                        start = i + 1;
                    }
                }
                ';' if brace_depth == 0 => {
                    let candidate = input[start..=i].trim();
                    if candidate.starts_with("@import") {
                        rules.push(&input[start..=i]);
                        start = i + 1;
                    }
                }
                _ => {}
            }
        }

        if brace_depth != 0 {
            return Err(ParseError::new(1, 1, "Mismatched braces in stylesheet"));
        }

        Ok(rules)
    }
}

/// Parse a comma-separated media-type list; empty input means "all media".
fn parse_media_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Parse a `url(...)` token or a bare/quoted string literal into a URL.
fn parse_url_token(token: &str) -> Option<String> {
    let token = token.trim();
    if let Some(inner) = token
        .strip_prefix("url(")
        .and_then(|s| s.strip_suffix(')'))
    {
        return Some(strip_quotes(inner).to_string());
    }
    if token.starts_with('"') || token.starts_with('\'') {
        return Some(strip_quotes(token).to_string());
    }
    None
}

fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if (s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')) {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}
