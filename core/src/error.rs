//! Error types for the Stencil Templating Engine.
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
        file::Coordinate,
        tag::Operator,
    },
    std::{
        error::Error as StdError,
        fmt::{
            Display,
            Formatter,
            Result as FmtResult,
        },
        io::Error as IOError,
        path::PathBuf,
        result::Result as StdResult,
    },
    serde_json::Error as JsonError,
};

/// The error type for the Stencil Templating Engine.
///
/// Every variant aborts the whole `parse`/`compile` call that produced it.
#[derive(Debug)]
pub enum Error {
    IO(IOError, PathBuf),
    JsonParse(JsonError, PathBuf),
    NotAMap(PathBuf),
    /// An `?` or `@` tag without a token.
    Grammar(Operator, Coordinate),
    /// A tag whose operator has no execution semantics.
    InvalidOperator(Operator, Coordinate),
    NoOpenLoop(Coordinate),
    UnterminatedLoop(String, Coordinate),
    NoContext,
    InvalidToken(String),
    /// The token, its depth and the number of frames that were available.
    InsufficientDepth(String, usize, usize),
    ValueNotArray(String, Coordinate),
}

impl Display for Error {
    fn fmt(&self, fmtr: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::IO(e, p) => fmtr.write_fmt(format_args!("IO error in {:?} {:?}", p, e)),
            Self::JsonParse(e, p) => fmtr.write_fmt(format_args!("Json error in {:?} {:?}", p, e)),
            Self::NotAMap(p) => fmtr.write_fmt(
                format_args!("Context at {:?} was not a json object", p)
            ),
            Self::Grammar(op, c) => fmtr.write_fmt(format_args!(
                "{} operator must have a token at line {} position {}",
                op,
                c.line() + 1,
                c.position() + 1,
            )),
            Self::InvalidOperator(op, c) => fmtr.write_fmt(format_args!(
                "Invalid operator '{}' at line {} position {}",
                op,
                c.line() + 1,
                c.position() + 1,
            )),
            Self::NoOpenLoop(c) => fmtr.write_fmt(format_args!(
                "Loop end without an open loop at line {} position {}",
                c.line() + 1,
                c.position() + 1,
            )),
            Self::UnterminatedLoop(t, c) => fmtr.write_fmt(format_args!(
                "Unterminated loop over {} at line {} position {}",
                t,
                c.line() + 1,
                c.position() + 1,
            )),
            Self::NoContext => fmtr.write_str("No context found"),
            Self::InvalidToken(t) => fmtr.write_fmt(format_args!("Invalid token {:?}", t)),
            Self::InsufficientDepth(t, depth, frames) => fmtr.write_fmt(format_args!(
                "Cannot find context for depth {} of {} ({} frames available)",
                depth,
                t,
                frames,
            )),
            Self::ValueNotArray(t, c) => fmtr.write_fmt(format_args!(
                "Value at {} was not an array at line {} position {}",
                t,
                c.line() + 1,
                c.position() + 1,
            )),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::IO(e, _) => Some(e),
            Self::JsonParse(e, _) => Some(e),
            _ => None,
        }
    }
}

/// The result type for the Stencil Templating Engine.
pub type Result<T> = StdResult<T, Error>;
