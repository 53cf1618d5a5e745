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

use crate::config::{SliceConfig, TrailingText};
use crate::index::SliceIndex;
use crate::input::SliceInput;
use crate::matcher::find_escape_sequences;
use crate::result::{SliceError, SliceResult};
use crate::utility::visible_len;
use tracing::{instrument, trace};

/// Slices a string by visible characters, keeping every ANSI escape sequence.
///
/// `start` and `end` count only visible characters. Escape sequences are
/// zero-width: all of them are kept, in their original order and at the same
/// position relative to the visible characters that survive. The visible
/// text of the result is exactly what a plain substring of the stripped input
/// would give.
///
/// Escape sequences are recognized again on the output, not carried as
/// tokens. A stray `ESC` in the visible text can therefore run into the text
/// that ends up next to it after slicing and be read back as a different
/// sequence, so `"\x1bA \x07"` sliced from `1` yields `"\x1bA\x07"`.
///
/// A missing `end` slices through the end of the string. Negative indices
/// count back from the end of the visible text. Out of range indices clamp,
/// and `start >= end` yields only the escape sequences.
///
/// # Examples
///
/// ```
/// # use termionix_ansislice::slice_ansi;
/// let red = "\x1b[31mhello\x1b[39m";
/// assert_eq!(slice_ansi(red, 1, Some(3.into())), "\x1b[31mel\x1b[39m");
/// assert_eq!(slice_ansi(red, -2, None), "\x1b[31mlo\x1b[39m");
/// ```
pub fn slice_ansi(input: &str, start: impl Into<SliceIndex>, end: Option<SliceIndex>) -> String {
    AnsiSlicer {
        input,
        start: start.into(),
        end,
        config: SliceConfig::default(),
    }
    .slice()
}

/// Slices a dynamically typed value that is expected to be a string.
///
/// Fails with [`SliceError::InvalidArgumentType`] before doing anything else
/// if `value` is not a string. Otherwise behaves exactly like [`slice_ansi`].
pub fn try_slice_ansi<T: SliceInput + ?Sized>(
    value: &T,
    start: impl Into<SliceIndex>,
    end: Option<SliceIndex>,
) -> SliceResult<String> {
    let mut slicer = AnsiSlicer::from_value(value)?.start(start);
    slicer.end = end;
    Ok(slicer.slice())
}

/// Extension trait slicing strings by visible characters.
pub trait AnsiSlice {
    /// See [`slice_ansi`].
    fn slice_ansi(&self, start: impl Into<SliceIndex>, end: Option<SliceIndex>) -> String;
}

impl AnsiSlice for str {
    fn slice_ansi(&self, start: impl Into<SliceIndex>, end: Option<SliceIndex>) -> String {
        slice_ansi(self, start, end)
    }
}

/// Builder for a single slice operation.
///
/// ```
/// # use termionix_ansislice::{AnsiSlicer, SliceConfig};
/// let sliced = AnsiSlicer::new("\x1b[1mbold\x1b[22m text")
///     .start(2)
///     .end(6)
///     .with_config(SliceConfig::standard())
///     .slice();
/// assert_eq!(sliced, "\x1b[1mld\x1b[22m t");
/// ```
#[derive(Clone, Debug)]
pub struct AnsiSlicer<'a> {
    input: &'a str,
    start: SliceIndex,
    end: Option<SliceIndex>,
    config: SliceConfig,
}

impl<'a> AnsiSlicer<'a> {
    /// Creates a slicer covering the whole of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: SliceIndex::ZERO,
            end: None,
            config: SliceConfig::default(),
        }
    }

    /// Creates a slicer from a value that must be a string.
    pub fn from_value<T: SliceInput + ?Sized>(value: &'a T) -> SliceResult<Self> {
        value
            .as_slice_input()
            .map(Self::new)
            .ok_or(SliceError::InvalidArgumentType {
                found: std::any::type_name::<T>(),
            })
    }

    /// Sets the first visible index to keep.
    pub fn start(mut self, start: impl Into<SliceIndex>) -> Self {
        self.start = start.into();
        self
    }

    /// Sets the visible index to stop before.
    pub fn end(mut self, end: impl Into<SliceIndex>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Replaces the slicing configuration.
    pub fn with_config(mut self, config: SliceConfig) -> Self {
        self.config = config;
        self
    }

    /// Performs the slice.
    #[instrument(
        level = "trace",
        skip_all,
        fields(len = self.input.len(), start = self.start.get(), end = ?self.end)
    )]
    pub fn slice(&self) -> String {
        let input = self.input;
        let mut matches = find_escape_sequences(input).peekable();

        if matches.peek().is_none() || (self.start.is_exact_zero() && self.end.is_none()) {
            trace!("plain substring");
            return slice_plain(input, self.start, self.end);
        }

        // Raw length including escapes; only ever compared to the visible cursor
        let end = self
            .end
            .unwrap_or_else(|| SliceIndex::from(input.chars().count()));

        let (start, end) = if self.start.is_negative() || end.is_negative() {
            let plain_len = i64::try_from(visible_len(input)).unwrap_or(i64::MAX);
            trace!(plain_len, "resolving negative indices");
            (self.start.resolve(plain_len), end.resolve(plain_len))
        } else {
            (self.start.get(), end.get())
        };

        let mut visible = 0;
        let mut cursor = 0;
        let mut sliced = String::with_capacity(input.len());

        for escape in matches {
            if visible < end {
                let segment = &input[cursor..escape.offset];
                copy_visible(segment, start, end, &mut visible, &mut sliced);
            }
            sliced.push_str(escape.text);
            cursor = escape.end();
        }

        if self.config.trailing == TrailingText::Keep && visible < end {
            copy_visible(&input[cursor..], start, end, &mut visible, &mut sliced);
        }

        sliced
    }
}

/// Appends the characters of `segment` whose visible index is in `start..end`.
fn copy_visible(segment: &str, start: i64, end: i64, visible: &mut i64, sliced: &mut String) {
    for ch in segment.chars() {
        if *visible >= end {
            break;
        }
        if start <= *visible {
            sliced.push(ch);
        }
        *visible += 1;
    }
}

/// Plain substring over `char`s for input without escape sequences.
fn slice_plain(input: &str, start: SliceIndex, end: Option<SliceIndex>) -> String {
    let len = i64::try_from(input.chars().count()).unwrap_or(i64::MAX);
    let from = start.clamp_to(len);
    let to = end.map_or(len, |end| end.clamp_to(len));
    if from >= to {
        return String::new();
    }
    input
        .chars()
        .skip(from as usize)
        .take((to - from) as usize)
        .collect()
}
