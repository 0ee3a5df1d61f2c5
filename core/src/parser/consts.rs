//! Delimiters and character classes for Stencil tags.
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

pub(crate)
const COMMENT_OPEN: &str = "<!--{";

pub(crate)
const COMMENT_CLOSE: &str = "}-->";

pub(crate)
const OPEN: &str = "{";

pub(crate)
const CLOSE: &str = "}";

/// Every character that may introduce a tag body as its operator.
pub(crate)
const OPERATORS: &str = "@=/:?";

/// ASCII word characters and the depth separator.
pub(crate)
const TOKEN_CHARS: &str = "A-Za-z0-9_.";
