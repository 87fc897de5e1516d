// Placeholder scanning and substitution over "{name}" templates

pub const OPEN_TAG: char = '{';
pub const CLOSE_TAG: char = '}';

/// One lexical piece of a template: literal text or a `{name}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePiece<'a> {
    Literal(&'a str),
    Parameter(&'a str),
}

/// Iterator over the pieces of a template, left to right.
pub struct Pieces<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Pieces<'a> {
    type Item = TemplatePiece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(OPEN_TAG) {
            None => {
                let literal = self.rest;
                self.rest = "";
                Some(TemplatePiece::Literal(literal))
            }
            Some(0) => match self.rest[1..].find(CLOSE_TAG) {
                Some(end) if end > 0 => {
                    let name = &self.rest[1..1 + end];
                    self.rest = &self.rest[end + 2..];
                    Some(TemplatePiece::Parameter(name))
                }
                // unmatched or empty braces count as literal text
                _ => {
                    let literal = &self.rest[..1];
                    self.rest = &self.rest[1..];
                    Some(TemplatePiece::Literal(literal))
                }
            },
            Some(idx) => {
                let literal = &self.rest[..idx];
                self.rest = &self.rest[idx..];
                Some(TemplatePiece::Literal(literal))
            }
        }
    }
}

pub fn pieces(text: &str) -> Pieces<'_> {
    Pieces { rest: text }
}

/// Placeholder names in template order, duplicates preserved.
pub fn parameter_names(text: &str) -> Vec<String> {
    pieces(text)
        .filter_map(|piece| match piece {
            TemplatePiece::Parameter(name) => Some(name.to_string()),
            TemplatePiece::Literal(_) => None,
        })
        .collect()
}

/// The token form of a parameter name, e.g. `country` -> `{country}`.
pub fn parameter_key(name: &str) -> String {
    format!("{OPEN_TAG}{name}{CLOSE_TAG}")
}

/// Replaces every placeholder the callback knows a value for, in one pass.
/// Unknown placeholders keep their token text, so substituted values are
/// never re-scanned for further tokens.
pub fn substitute<F>(text: &str, mut value_for: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    for piece in pieces(text) {
        match piece {
            TemplatePiece::Literal(literal) => out.push_str(literal),
            TemplatePiece::Parameter(name) => match value_for(name) {
                Some(value) => out.push_str(&value),
                None => {
                    out.push(OPEN_TAG);
                    out.push_str(name);
                    out.push(CLOSE_TAG);
                }
            },
        }
    }
    out
}
