//! The tokenizer for the Stencil Templating Engine.
// Copyright (C) 2024  Frankie Baffa
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod consts;

use {
    crate::{
        error::{
            Error,
            Result,
        },
        file::Coordinate,
        tag::{
            Operator,
            Tag,
        },
    },
    regex::{
        escape,
        Regex,
    },
    std::sync::LazyLock,
    tracing::{
        debug,
        trace,
    },
};

// The comment-wrapped form comes first so that `<!--{x}-->` is taken whole
// rather than as a bare `{x}` surrounded by literal text.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    let body = format!(r"\s*[{}]?\s*[{}]*\s*", consts::OPERATORS, consts::TOKEN_CHARS);

    Regex::new(&format!(
        "{}({body}){}|{}({body}){}",
        escape(consts::COMMENT_OPEN),
        escape(consts::COMMENT_CLOSE),
        escape(consts::OPEN),
        escape(consts::CLOSE),
    ))
    .expect("tag pattern is a valid regex")
});

fn trimmed_token(rest: &str) -> Option<String> {
    let token = rest.trim();

    if token.is_empty() {
        None
    }
    else {
        Some(token.to_owned())
    }
}

fn classify(text: &str, body: &str, start: usize) -> Result<(Operator, Option<String>)> {
    let mut chars = body.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Ok((Operator::Print, None)),
    };

    let operator = match Operator::from_symbol(first) {
        Some(operator) => operator,
        None => return Ok((Operator::Print, Some(body.to_owned()))),
    };

    let rest = chars.as_str();
    match operator {
        Operator::If|Operator::Loop => trimmed_token(rest)
            .map(|token| (operator, Some(token)))
            .ok_or_else(|| Error::Grammar(operator, Coordinate::from_offset(text, start))),
        Operator::EndLoop|Operator::Else => Ok((operator, None)),
        Operator::Print => Ok((operator, trimmed_token(rest))),
    }
}

/// Scans `text` for tags, returning them in source order.
///
/// Both `{body}` and `<!--{body}-->` are recognized. Nesting is not
/// considered here; a loop that is never closed still parses.
///
/// # Errors
///
/// [`Error::Grammar`] when an `?` or `@` tag has no token.
///
/// # Examples
///
/// ```rust
/// use stencil_core::{parse, Operator};
///
/// let tags = parse("<!--{@ items}-->{.name}<!--{/}-->").unwrap();
/// assert_eq!(3, tags.len());
/// assert_eq!(Operator::Loop, tags[0].operator());
/// assert_eq!(Some("items"), tags[0].token());
/// ```
pub
fn parse(text: &str) -> Result<Vec<Tag>> {
    let mut tags = Vec::new();

    for captures in TAG.captures_iter(text) {
        let whole = match captures.get(0) {
            Some(m) => m,
            None => continue,
        };

        let body = captures.get(1)
            .or_else(|| captures.get(2))
            .map(|m| m.as_str().trim())
            .unwrap_or("");

        let (operator, token) = classify(text, body, whole.start())?;
        trace!(%operator, ?token, start = whole.start(), "found tag");

        // matches are never empty, the delimiters alone span two bytes
        tags.push(Tag::new(operator, token, whole.start()..=whole.end() - 1));
    }

    debug!(tags = tags.len(), "parsed template");

    Ok(tags)
}
