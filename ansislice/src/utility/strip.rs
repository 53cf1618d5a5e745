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

use crate::matcher::escape_regex;
use std::borrow::Cow;

/// Removes ANSI escape sequences from a string.
///
/// Every sequence recognized by [`find_escape_sequences`](crate::find_escape_sequences)
/// is removed: SGR colors and styles, cursor movement, erase commands and OSC
/// string commands such as hyperlinks.
///
/// # Performance
///
/// If no escape sequence is found the input is returned borrowed (zero-copy).
/// Otherwise a new `String` is allocated with the sequences removed.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use termionix_ansislice::strip_ansi_codes;
///
/// let colored = "\x1b[1;31mRed Text\x1b[0m";
/// assert_eq!(strip_ansi_codes(colored), "Red Text");
///
/// let plain = "Plain Text";
/// assert!(matches!(strip_ansi_codes(plain), Cow::Borrowed(_)));
///
/// let linked = "\x1b]8;;https://example.com\x07click\x1b]8;;\x07";
/// assert_eq!(strip_ansi_codes(linked), "click");
/// ```
pub fn strip_ansi_codes(str: &str) -> Cow<'_, str> {
    escape_regex().replace_all(str, "")
}

/// Number of visible characters in `str`, escape sequences excluded.
pub fn visible_len(str: &str) -> usize {
    strip_ansi_codes(str).chars().count()
}
