//! The context logic of the Stencil Templating Engine
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
// along with this program.  If not, see <https://www.gnu.org/licenses/>

use {
    crate::{
        error::{
            Error,
            Result,
        },
        file::read_file,
    },
    regex::Regex,
    serde_json::{
        from_str as from_json_str,
        Value as JsonValue,
    },
    std::{
        fmt::{
            Display,
            Formatter,
            Result as FmtResult,
        },
        path::Path,
        sync::LazyLock,
    },
};

const SCOPESEP: char = '.';

static VALID_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.*[a-zA-Z][a-zA-Z0-9]*$").expect("token pattern is a valid regex")
});

/// A validated token, split into the frame it addresses and its key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub
struct Token<'a> {
    depth: usize,
    key: &'a str,
}

impl<'a> Token<'a> {
    /// Splits `input` into depth and key.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidToken`] when `input` fails [`validate_token`].
    pub
    fn new(input: &'a str) -> Result<Self> {
        if !validate_token(input) {
            return Err(Error::InvalidToken(input.to_owned()));
        }

        let key = input.trim_start_matches(SCOPESEP);

        Ok(Self {
            depth: input.len() - key.len(),
            key,
        })
    }

    pub
    fn depth(&self) -> usize {
        self.depth
    }

    pub
    fn key(&self) -> &'a str {
        self.key
    }
}

impl Display for Token<'_> {
    fn fmt(&self, fmtr: &mut Formatter<'_>) -> FmtResult {
        for _ in 0..self.depth {
            fmtr.write_fmt(format_args!("{}", SCOPESEP))?;
        }

        fmtr.write_str(self.key)
    }
}

/// Whether `token` is a run of leading dots followed by one ASCII letter
/// and any number of ASCII letters or digits.
///
/// # Examples
///
/// ```rust
/// use stencil_core::validate_token;
///
/// assert!(validate_token("..value"));
/// assert!(!validate_token("goods.label"));
/// assert!(!validate_token("0goods"));
/// ```
pub
fn validate_token(token: &str) -> bool {
    VALID_TOKEN.is_match(token)
}

/// `null`, `false`, zero and the empty string count as absent.
fn is_present(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_)|JsonValue::Object(_) => true,
    }
}

/// Resolves `token` against a stack of context frames.
///
/// The number of leading dots selects the frame (none addresses the root at
/// index zero) and the remainder is looked up on that frame. Values that are
/// `null`, `false`, zero or `""` resolve to `None` exactly as missing keys do.
///
/// # Errors
///
/// * [`Error::NoContext`] when `frames` is empty.
/// * [`Error::InvalidToken`] when the token fails [`validate_token`].
/// * [`Error::InsufficientDepth`] when there is no frame at the token's
///   depth, i.e. `frames.len() <= depth`.
///
/// # Examples
///
/// ```rust
/// use {
///     serde_json::json,
///     stencil_core::get_value,
/// };
///
/// let root = json!({ "label": "LABEL" });
/// let item = json!({ "name": "Size" });
///
/// assert_eq!(Some(&json!("Size")), get_value(".name", &[&root, &item]).unwrap());
/// assert_eq!(None, get_value("missing", &[&root]).unwrap());
/// ```
pub
fn get_value<'a>(token: &str, frames: &[&'a JsonValue]) -> Result<Option<&'a JsonValue>> {
    if frames.is_empty() {
        return Err(Error::NoContext);
    }

    let token = Token::new(token)?;

    let frame: &'a JsonValue = frames.get(token.depth())
        .copied()
        .ok_or_else(|| Error::InsufficientDepth(
            token.to_string(),
            token.depth(),
            frames.len(),
        ))?;

    Ok(frame.get(token.key()).filter(|v| is_present(v)))
}

/// The text a value renders as: strings verbatim, floats without a trailing
/// `.0` when integral, everything else as compact JSON.
pub(crate)
fn to_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.to_owned(),
        JsonValue::Number(n) if n.is_f64() => n.as_f64()
            .map(|f| f.to_string())
            .unwrap_or_else(|| n.to_string()),
        other => other.to_string(),
    }
}

/// Resolves `token` like [`get_value`] and renders the result, yielding an
/// empty string for absent values.
///
/// # Errors
///
/// Any error of [`get_value`].
pub
fn print(token: &str, frames: &[&JsonValue]) -> Result<String> {
    Ok(get_value(token, frames)?.map(to_text).unwrap_or_default())
}

/// Reads a root context from a json file. The file must hold an object.
///
/// # Errors
///
/// [`Error::IO`], [`Error::JsonParse`] or [`Error::NotAMap`].
pub
fn read_context<P: AsRef<Path>>(p: P) -> Result<JsonValue> {
    let p = p.as_ref();
    let file = read_file(p)?;

    let properties = from_json_str::<JsonValue>(&file)
        .map_err(|e| Error::JsonParse(e, p.into()))?;

    if !matches!(properties, JsonValue::Object(_)) {
        return Err(Error::NotAMap(p.into()));
    }

    Ok(properties)
}
