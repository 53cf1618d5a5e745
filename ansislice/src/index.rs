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

//! Slice index normalization.

/// A start or end position for [`slice_ansi`](crate::slice_ansi), counted in
/// visible characters.
///
/// Indices may be built from any integer or floating point value. Floating
/// point values are truncated toward zero, so `4.9` becomes `4` and `-23.1`
/// becomes `-23`. `NaN` becomes `0` and values outside the `i64` range
/// saturate. Negative values count back from the end of the visible text.
///
/// Whether the original value was integral is remembered, so `0.5` truncates
/// to the same position as `0` without being an exact zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SliceIndex {
    index: i64,
    exact: bool,
}

impl Default for SliceIndex {
    fn default() -> Self {
        SliceIndex::ZERO
    }
}

impl SliceIndex {
    /// Index of the first visible character.
    pub const ZERO: SliceIndex = SliceIndex::new(0);

    /// Creates an index from an integral position.
    pub const fn new(index: i64) -> Self {
        SliceIndex { index, exact: true }
    }

    /// The truncated integral position.
    pub const fn get(self) -> i64 {
        self.index
    }

    /// Returns `true` if the index was built from an integral value.
    pub const fn is_exact(self) -> bool {
        self.exact
    }

    /// Returns `true` if the index was given as exactly zero.
    pub const fn is_exact_zero(self) -> bool {
        self.exact && self.index == 0
    }

    /// Returns `true` if this index counts back from the end.
    pub const fn is_negative(self) -> bool {
        self.index < 0
    }

    fn from_float(value: f64) -> Self {
        // `as` truncates toward zero, saturates, and maps NaN to zero
        SliceIndex {
            index: value as i64,
            exact: value.fract() == 0.0,
        }
    }

    /// Resolves a negative index against `len`.
    ///
    /// Non-negative indices are returned unchanged. The result is not clamped
    /// and may still be negative or beyond `len`.
    pub fn resolve(self, len: i64) -> i64 {
        if self.index < 0 {
            self.index.saturating_add(len)
        } else {
            self.index
        }
    }

    /// Resolves and clamps the index into `0..=len` the way a plain
    /// substring does.
    pub fn clamp_to(self, len: i64) -> i64 {
        self.resolve(len).clamp(0, len)
    }
}

macro_rules! slice_index_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SliceIndex {
                fn from(value: $ty) -> Self {
                    SliceIndex::new(i64::from(value))
                }
            }
        )*
    };
}

slice_index_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for SliceIndex {
    fn from(value: isize) -> Self {
        SliceIndex::new(value as i64)
    }
}

impl From<usize> for SliceIndex {
    fn from(value: usize) -> Self {
        SliceIndex::new(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for SliceIndex {
    fn from(value: f64) -> Self {
        SliceIndex::from_float(value)
    }
}

impl From<f32> for SliceIndex {
    fn from(value: f32) -> Self {
        SliceIndex::from_float(f64::from(value))
    }
}
