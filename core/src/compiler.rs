//! The evaluator for the Stencil Templating Engine.
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

use {
    crate::{
        context::{
            get_value,
            print,
        },
        error::{
            Error,
            Result,
        },
        file::{
            Coordinate,
            read_file,
        },
        parser::parse,
        tag::{
            Operator,
            Tag,
        },
    },
    serde_json::Value as JsonValue,
    std::path::Path,
    tracing::{
        debug,
        trace,
    },
};

/// Bookkeeping for one open loop.
#[derive(Debug)]
struct LoopFrame<'a> {
    /// Byte offset just past the loop tag, where the body's text begins.
    content_start: usize,
    cur: usize,
    arr: &'a [JsonValue],
    /// Index of the loop tag, the body replays from the tag after it.
    tag_idx: usize,
}

/// Finds the end tag closing the loop opened at `loop_idx`.
fn matching_end(tags: &[Tag], loop_idx: usize) -> Option<usize> {
    let mut depth = 0;

    for (idx, tag) in tags.iter().enumerate().skip(loop_idx + 1) {
        match tag.operator() {
            Operator::Loop => depth += 1,
            Operator::EndLoop if depth == 0 => return Some(idx),
            Operator::EndLoop => depth -= 1,
            _ => (),
        }
    }

    None
}

fn unterminated(text: &str, tag: &Tag) -> Error {
    Error::UnterminatedLoop(
        tag.token().unwrap_or_default().to_owned(),
        Coordinate::from_offset(text, tag.start()),
    )
}

/// Renders `text` against the `root` context.
///
/// Tags are visited in a single pass with a rewindable index. A loop pushes
/// its first element onto the context stack and every loop end either
/// advances to the next element, rewinding to the start of the body, or
/// closes the loop. Loops over an empty array skip their body entirely.
///
/// # Errors
///
/// * Any error from [`parse`] or [`get_value`].
/// * [`Error::ValueNotArray`] when a loop token is absent or not an array.
/// * [`Error::NoOpenLoop`] for a loop end with no open loop.
/// * [`Error::UnterminatedLoop`] when a loop over an empty array has no
///   matching end to skip to.
/// * [`Error::InvalidOperator`] when an `?` or `:` tag is reached.
///
/// # Examples
///
/// ```rust
/// use {
///     serde_json::json,
///     stencil_core::compile,
/// };
///
/// let out = compile(
///     "<ul><!--{@items}--><li>{.name}</li><!--{/}--></ul>",
///     &json!({ "items": [{ "name": "A" }, { "name": "B" }] }),
/// ).unwrap();
///
/// assert_eq!("<ul><li>A</li><li>B</li></ul>", out);
/// ```
pub
fn compile(text: &str, root: &JsonValue) -> Result<String> {
    let tags = parse(text)?;

    let mut loops: Vec<LoopFrame> = Vec::new();
    let mut context: Vec<&JsonValue> = vec![root];
    let mut output = String::with_capacity(text.len());
    let mut prev_cursor = 0;
    let mut i = 0;

    while let Some(tag) = tags.get(i) {
        debug_assert_eq!(context.len(), loops.len() + 1);

        output.push_str(&text[prev_cursor..tag.start()]);
        let after = tag.end() + 1;

        match tag.operator() {
            Operator::Print => {
                if let Some(token) = tag.token() {
                    output.push_str(&print(token, &context)?);
                }

                prev_cursor = after;
                i += 1;
            },
            Operator::Loop => {
                let token = tag.token().unwrap_or_default();
                let arr = match get_value(token, &context)? {
                    Some(JsonValue::Array(arr)) => arr.as_slice(),
                    _ => return Err(Error::ValueNotArray(
                        token.to_owned(),
                        Coordinate::from_offset(text, tag.start()),
                    )),
                };

                if let Some(first) = arr.first() {
                    trace!(token, len = arr.len(), "opening loop");
                    loops.push(LoopFrame {
                        content_start: after,
                        cur: 0,
                        arr,
                        tag_idx: i,
                    });
                    context.push(first);
                    prev_cursor = after;
                    i += 1;
                }
                else {
                    let end = matching_end(&tags, i).ok_or_else(|| unterminated(text, tag))?;
                    trace!(token, "skipping loop over empty array");
                    prev_cursor = tags[end].end() + 1;
                    i = end + 1;
                }
            },
            Operator::EndLoop => {
                let frame = loops.last_mut()
                    .ok_or_else(|| Error::NoOpenLoop(Coordinate::from_offset(text, tag.start())))?;

                context.pop();
                frame.cur += 1;

                let arr = frame.arr;
                if let Some(next) = arr.get(frame.cur) {
                    trace!(iteration = frame.cur, "replaying loop body");
                    context.push(next);
                    prev_cursor = frame.content_start;
                    i = frame.tag_idx + 1;
                }
                else {
                    trace!("closing loop");
                    loops.pop();
                    prev_cursor = after;
                    i += 1;
                }
            },
            op @ (Operator::If|Operator::Else) => return Err(Error::InvalidOperator(
                op,
                Coordinate::from_offset(text, tag.start()),
            )),
        }
    }

    // a loop left open simply ends with the tags, its body rendered once
    output.push_str(&text[prev_cursor..]);
    debug!(tags = tags.len(), bytes = output.len(), "compiled template");

    Ok(output)
}

/// Reads a template from `path` and renders it like [`compile`].
///
/// # Errors
///
/// [`Error::IO`] when the file cannot be read, otherwise as [`compile`].
pub
fn compile_file<P: AsRef<Path>>(path: P, root: &JsonValue) -> Result<String> {
    let text = read_file(&path)?;
    debug!(path = ?path.as_ref(), "read template");
    compile(&text, root)
}
