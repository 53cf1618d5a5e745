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

/// Slicing behavior settings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SliceConfig {
    /// Handling of visible text after the last escape sequence
    pub trailing: TrailingText,
}

impl SliceConfig {
    /// Keep trailing text, so slicing behaves like a plain substring over the
    /// visible characters.
    pub fn standard() -> SliceConfig {
        SliceConfig {
            trailing: TrailingText::Keep,
        }
    }
    /// Drop trailing text, so only text found before an escape sequence is
    /// ever copied.
    pub fn compatible() -> SliceConfig {
        SliceConfig {
            trailing: TrailingText::Drop,
        }
    }
}

/// What to do with visible characters that follow the last escape sequence.
///
/// The shortcut for unbounded slices and strings without escape sequences
/// always returns the plain substring, whichever variant is selected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum TrailingText {
    /// Copy trailing characters that fall inside the slice.
    #[default]
    Keep,
    /// Never copy trailing characters.
    Drop,
}
