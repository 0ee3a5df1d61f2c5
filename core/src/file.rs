//! File handling utilities for the Stencil Templating Engine.
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
    crate::error::{
        Error,
        Result,
    },
    std::{
        fmt::{ Display, Formatter, Result as FmtResult, },
        fs::read_to_string,
        path::Path,
    },
};

const NEWLINE: char = '\n';

/// Reads a file verbatim, line endings and trailing newline included.
pub(crate)
fn read_file<P: AsRef<Path>>(p: P) -> Result<String> {
    read_to_string(&p).map_err(|e| Error::IO(e, p.as_ref().into()))
}

/// A zero-based line and character position within a template.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub
struct Coordinate {
    line: usize,
    position: usize,
}

impl Coordinate {
    /// Locates the byte `offset` within `text`. Offsets past the end of
    /// `text` are clamped to it.
    pub(crate)
    fn from_offset(text: &str, offset: usize) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &text[..offset];
        let line = before.matches(NEWLINE).count();
        let line_start = before.rfind(NEWLINE).map(|i| i + 1).unwrap_or(0);

        Self {
            line,
            position: before[line_start..].chars().count(),
        }
    }

    pub
    fn line(&self) -> usize {
        self.line
    }

    pub
    fn position(&self) -> usize {
        self.position
    }
}

impl Display for Coordinate {
    fn fmt(&self, fmtr: &mut Formatter<'_>) -> FmtResult {
        fmtr.write_fmt(format_args!(
            "line {} position {}",
            self.line + 1,
            self.position + 1
        ))
    }
}
