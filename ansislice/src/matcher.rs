//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Escape sequence recognition.
//!
//! Sequences are found with a single regular expression covering the common
//! terminal grammar:
//!
//! - CSI sequences introduced by `ESC [` or the C1 byte `U+009B`, such as SGR
//!   colors (`ESC [ 1 ; 31 m`) and cursor movement (`ESC [ 2 A`)
//! - String commands terminated by `BEL`, `ESC \` or `U+009C`, such as OSC 8
//!   hyperlinks (`ESC ] 8 ; ; url BEL`)
//!
//! Matches are leftmost-first and never overlap. Each one carries its byte
//! offset, so repeated identical sequences resolve to distinct positions.

use regex::{Matches, Regex};
use std::sync::LazyLock;

/// Regular expression matching a single ANSI escape sequence.
pub const ESCAPE_PATTERN: &str = concat!(
    // Introducer and optional prefix bytes
    r"[\x1B\x{9B}][\[\]()#;?]*",
    "(?:",
    // String command terminated by BEL, ESC \ or ST
    r"(?:(?:(?:;[-a-zA-Z0-9/#&.:=?%@~_]+)*|[a-zA-Z0-9]+(?:;[-a-zA-Z0-9/#&.:=?%@~_]*)*)?",
    r"(?:\x07|\x1B\\|\x{9C}))",
    "|",
    // Control sequence parameters and final byte
    r"(?:(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-PR-TZcf-nq-uy=><~])",
    ")"
);

static ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ESCAPE_PATTERN).expect("valid ANSI escape pattern"));

/// Returns the compiled escape sequence expression.
pub fn escape_regex() -> &'static Regex {
    &ESCAPE_REGEX
}

/// A single escape sequence located in a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EscapeMatch<'a> {
    /// The matched sequence, verbatim
    pub text: &'a str,
    /// Byte offset of the first byte of the sequence
    pub offset: usize,
}

impl<'a> EscapeMatch<'a> {
    /// Byte offset just past the sequence.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Iterator over the escape sequences of a string, in order.
///
/// Created by [`find_escape_sequences`].
#[derive(Debug)]
pub struct EscapeMatches<'a> {
    inner: Matches<'static, 'a>,
}

impl<'a> Iterator for EscapeMatches<'a> {
    type Item = EscapeMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| EscapeMatch {
            text: m.as_str(),
            offset: m.start(),
        })
    }
}

/// Finds every escape sequence in `str`, left to right.
pub fn find_escape_sequences(str: &str) -> EscapeMatches<'_> {
    EscapeMatches {
        inner: ESCAPE_REGEX.find_iter(str),
    }
}

/// Returns `true` if `str` contains at least one escape sequence.
pub fn contains_escape_sequences(str: &str) -> bool {
    ESCAPE_REGEX.is_match(str)
}
