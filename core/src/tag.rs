//! Tags produced by the tokenizer for the Stencil Templating Engine.
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

use std::{
    fmt::{
        Display,
        Formatter,
        Result as FmtResult,
    },
    ops::RangeInclusive,
};

const PRINT: char = '=';
const IF: char = '?';
const LOOP: char = '@';
const END_LOOP: char = '/';
const ELSE: char = ':';

/// The kind of directive a tag represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub
enum Operator {
    /// `=`, also the default when a tag has no operator.
    Print,
    /// `?`, recognized but not executable.
    If,
    /// `@`, opens a loop over an array.
    Loop,
    /// `/`, closes the innermost open loop.
    EndLoop,
    /// `:`, recognized but not executable.
    Else,
}

impl Operator {
    pub
    fn symbol(&self) -> char {
        match self {
            Self::Print => PRINT,
            Self::If => IF,
            Self::Loop => LOOP,
            Self::EndLoop => END_LOOP,
            Self::Else => ELSE,
        }
    }

    pub
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            PRINT => Some(Self::Print),
            IF => Some(Self::If),
            LOOP => Some(Self::Loop),
            END_LOOP => Some(Self::EndLoop),
            ELSE => Some(Self::Else),
            _ => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, fmtr: &mut Formatter<'_>) -> FmtResult {
        fmtr.write_fmt(format_args!("{}", self.symbol()))
    }
}

/// A directive found in a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub
struct Tag {
    operator: Operator,
    token: Option<String>,
    range: RangeInclusive<usize>,
}

impl Tag {
    pub(crate)
    fn new(operator: Operator, token: Option<String>, range: RangeInclusive<usize>) -> Self {
        Self { operator, token, range, }
    }

    pub
    fn operator(&self) -> Operator {
        self.operator
    }

    pub
    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The inclusive byte span of the whole tag, delimiters included.
    pub
    fn range(&self) -> &RangeInclusive<usize> {
        &self.range
    }

    pub
    fn start(&self) -> usize {
        *self.range.start()
    }

    pub
    fn end(&self) -> usize {
        *self.range.end()
    }
}
