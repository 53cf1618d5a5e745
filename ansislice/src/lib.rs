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

//! Slice strings by their visible characters while keeping every ANSI escape
//! sequence (colors, styles, cursor controls, hyperlinks) intact.
//!
//! ```
//! use termionix_ansislice::{slice_ansi, strip_ansi_codes};
//!
//! let link = "\x1b]8;;https://example.com\x07click\x1b]8;;\x07";
//! let tail = slice_ansi(link, -3, None);
//! assert_eq!(strip_ansi_codes(&tail), "ick");
//! ```

mod config;
mod index;
mod input;
pub mod matcher;
mod result;
mod slice;
pub mod utility;

pub use self::config::{SliceConfig, TrailingText};
pub use self::index::SliceIndex;
pub use self::input::SliceInput;
pub use self::matcher::{
    ESCAPE_PATTERN, EscapeMatch, EscapeMatches, contains_escape_sequences, find_escape_sequences,
};
pub use self::result::{SliceError, SliceResult};
pub use self::slice::{AnsiSlice, AnsiSlicer, slice_ansi, try_slice_ansi};
pub use self::utility::{strip_ansi_codes, visible_len};
