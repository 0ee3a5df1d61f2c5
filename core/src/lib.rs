//! The Stencil Templating Engine.
//!
//! Templates are plain text with embedded tags, written either as `{body}`
//! or, to stay invisible inside raw html, as `<!--{body}-->`. A body is an
//! optional operator followed by an optional token:
//!
//! * `{name}` or `{= name}` prints a value.
//! * `{@ items}` opens a loop over an array and `{/}` closes it.
//! * `{? cond}` and `{:}` are recognized but cannot be evaluated.
//!
//! Tokens address a stack of json contexts. Each leading `.` selects one
//! level deeper: `name` is looked up on the root, `.name` on the element of
//! the outermost loop, `..name` on the element of the loop inside that.
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

mod compiler;
mod context;
mod error;
mod file;
mod parser;
mod tag;

pub use {
    compiler::{
        compile,
        compile_file,
    },
    context::{
        get_value,
        print,
        read_context,
        validate_token,
        Token,
    },
    error::{
        Error,
        Result,
    },
    file::Coordinate,
    parser::parse,
    tag::{
        Operator,
        Tag,
    },
};
