//! Query dialect for addressing elements on the page.
//!
//! Supports the subset the page contract needs: tag names, `.class` filters,
//! the descendant combinator, `:visible`, `:has-text("…")`, and a trailing
//! `>> nth=N` positional index.

use crate::error::{HarnessError, HarnessResult};

/// One simple selector in a descendant chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    pub tag: Option<String>,
    pub classes: Vec<String>,
    pub has_text: Option<String>,
    pub visible_only: bool,
}

/// A parsed selector: descendant steps plus an optional positional index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub steps: Vec<Step>,
    pub nth: Option<usize>,
}

impl Selector {
    pub fn parse(input: &str) -> HarnessResult<Self> {
        let invalid = |reason: &str| HarnessError::InvalidSelector {
            selector: input.to_string(),
            reason: reason.to_string(),
        };

        let (body, nth) = match input.split_once(">>") {
            Some((body, suffix)) => {
                let n = suffix
                    .trim()
                    .strip_prefix("nth=")
                    .and_then(|n| n.parse::<usize>().ok())
                    .ok_or_else(|| invalid("expected `>> nth=N`"))?;
                (body, Some(n))
            }
            None => (input, None),
        };

        let tokens = split_on_unquoted_whitespace(body);
        if tokens.is_empty() {
            return Err(invalid("empty selector"));
        }

        let steps = tokens
            .iter()
            .map(|t| parse_step(t).ok_or_else(|| invalid(&format!("bad step `{t}`"))))
            .collect::<HarnessResult<Vec<_>>>()?;

        Ok(Self { steps, nth })
    }
}

/// Splits a selector body into steps, keeping quoted text intact so
/// `:has-text("Option 2")` survives as one token.
fn split_on_unquoted_whitespace(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn parse_step(token: &str) -> Option<Step> {
    let mut step = Step::default();
    let mut rest = token;

    let tag_end = rest.find(['.', ':']).unwrap_or(rest.len());
    if tag_end > 0 {
        step.tag = Some(rest[..tag_end].to_string());
        rest = &rest[tag_end..];
    }

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('.') {
            let end = after.find(['.', ':']).unwrap_or(after.len());
            if end == 0 {
                return None;
            }
            step.classes.push(after[..end].to_string());
            rest = &after[end..];
        } else if let Some(after) = rest.strip_prefix(':') {
            if let Some(after) = after.strip_prefix("visible") {
                step.visible_only = true;
                rest = after;
            } else if let Some(after) = after.strip_prefix("has-text(\"") {
                let end = after.find('"')?;
                step.has_text = Some(after[..end].to_string());
                rest = after[end..].strip_prefix("\")")?;
            } else {
                return None;
            }
        } else {
            return None;
        }
    }

    Some(step)
}
