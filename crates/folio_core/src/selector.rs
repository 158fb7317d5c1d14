//! Minimal selector subset
//!
//! Parses exactly what the page consumes: `tag`, `#id`, `.class`,
//! `[attr]`, `[attr="value"]`, compounds of those, and comma-separated
//! lists. No combinators. Malformed input surfaces as a [`SelectorError`],
//! which the resolver layer turns into a warning and an empty result.

use crate::dom::{Document, NodeId};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,
    #[error("expected an identifier after '{0}'")]
    MissingIdentifier(char),
    #[error("combinators are not supported (found '{0}')")]
    UnsupportedCombinator(char),
    #[error("unterminated attribute selector")]
    UnterminatedAttribute,
    #[error("unexpected character '{0}' in selector")]
    UnexpectedChar(char),
}

/// One predicate inside `[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrPredicate {
    Present(String),
    Equals(String, String),
}

/// A compound simple selector, e.g. `.nav-link[href="#about"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrPredicate>,
}

impl Selector {
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        if let Some(tag) = &self.tag {
            if doc.tag(node) != Some(tag.as_str()) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if doc.id_of(node) != Some(id.as_str()) {
                return false;
            }
        }
        for class in &self.classes {
            if !doc.has_class(node, class) {
                return false;
            }
        }
        for pred in &self.attrs {
            // The id lives outside the attribute map, but `[id]` must still
            // see it (`section[id]` relies on this).
            let matched = match pred {
                AttrPredicate::Present(name) if name == "id" => doc.id_of(node).is_some(),
                AttrPredicate::Present(name) => doc.attr(node, name).is_some(),
                AttrPredicate::Equals(name, value) if name == "id" => {
                    doc.id_of(node) == Some(value.as_str())
                }
                AttrPredicate::Equals(name, value) => doc.attr(node, name) == Some(value.as_str()),
            };
            if !matched {
                return false;
            }
        }
        true
    }
}

/// A comma-separated selector list; matches when any member matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<Selector>,
}

impl SelectorList {
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.selectors.iter().any(|s| s.matches(doc, node))
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn read_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if is_ident_char(c) {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }
        let mut selector = Selector::default();
        let mut chars = input.chars().peekable();
        let mut first = true;
        while let Some(&c) = chars.peek() {
            match c {
                '#' => {
                    chars.next();
                    let ident = read_ident(&mut chars);
                    if ident.is_empty() {
                        return Err(SelectorError::MissingIdentifier('#'));
                    }
                    selector.id = Some(ident);
                }
                '.' => {
                    chars.next();
                    let ident = read_ident(&mut chars);
                    if ident.is_empty() {
                        return Err(SelectorError::MissingIdentifier('.'));
                    }
                    selector.classes.push(ident);
                }
                '[' => {
                    chars.next();
                    selector.attrs.push(parse_attr(&mut chars)?);
                }
                c if c.is_whitespace() || c == '>' || c == '+' || c == '~' => {
                    return Err(SelectorError::UnsupportedCombinator(c));
                }
                c if is_ident_char(c) => {
                    if !first {
                        return Err(SelectorError::UnexpectedChar(c));
                    }
                    selector.tag = Some(read_ident(&mut chars));
                }
                c => return Err(SelectorError::UnexpectedChar(c)),
            }
            first = false;
        }
        Ok(selector)
    }
}

fn parse_attr(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<AttrPredicate, SelectorError> {
    let name = read_ident(chars);
    if name.is_empty() {
        return Err(SelectorError::MissingIdentifier('['));
    }
    match chars.next() {
        Some(']') => Ok(AttrPredicate::Present(name)),
        Some('=') => {
            let value = match chars.peek().copied() {
                Some(quote) if quote == '"' || quote == '\'' => {
                    chars.next();
                    let mut value = String::new();
                    loop {
                        match chars.next() {
                            Some(c) if c == quote => break,
                            Some(c) => value.push(c),
                            None => return Err(SelectorError::UnterminatedAttribute),
                        }
                    }
                    value
                }
                _ => read_ident(chars),
            };
            match chars.next() {
                Some(']') => Ok(AttrPredicate::Equals(name, value)),
                _ => Err(SelectorError::UnterminatedAttribute),
            }
        }
        _ => Err(SelectorError::UnterminatedAttribute),
    }
}

impl FromStr for SelectorList {
    type Err = SelectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // Split on commas outside quotes, so `[href="a,b"]` stays whole.
        let mut parts = Vec::new();
        let mut quote: Option<char> = None;
        let mut start = 0;
        for (i, c) in input.char_indices() {
            match (quote, c) {
                (Some(q), c) if c == q => quote = None,
                (None, '"' | '\'') => quote = Some(c),
                (None, ',') => {
                    parts.push(&input[start..i]);
                    start = i + c.len_utf8();
                }
                _ => {}
            }
        }
        parts.push(&input[start..]);

        let selectors = parts
            .into_iter()
            .map(Selector::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SelectorList { selectors })
    }
}
