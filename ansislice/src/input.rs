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

//! Dynamically typed slice arguments.

use std::borrow::Cow;

/// A value that may or may not be a string.
///
/// [`try_slice_ansi`](crate::try_slice_ansi) and
/// [`AnsiSlicer::from_value`](crate::AnsiSlicer::from_value) accept any
/// `SliceInput` and reject values that are not strings with
/// [`SliceError::InvalidArgumentType`](crate::SliceError::InvalidArgumentType).
pub trait SliceInput {
    /// Returns the string content, or `None` if the value is not a string.
    fn as_slice_input(&self) -> Option<&str>;
}

impl SliceInput for str {
    fn as_slice_input(&self) -> Option<&str> {
        Some(self)
    }
}

impl SliceInput for String {
    fn as_slice_input(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl SliceInput for Box<str> {
    fn as_slice_input(&self) -> Option<&str> {
        Some(self)
    }
}

impl SliceInput for Cow<'_, str> {
    fn as_slice_input(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: SliceInput + ?Sized> SliceInput for &T {
    fn as_slice_input(&self) -> Option<&str> {
        (**self).as_slice_input()
    }
}

/// `None` stands for a missing argument.
impl<T: SliceInput> SliceInput for Option<T> {
    fn as_slice_input(&self) -> Option<&str> {
        self.as_ref().and_then(SliceInput::as_slice_input)
    }
}

macro_rules! not_slice_input {
    ($($ty:ty),*) => {
        $(
            impl SliceInput for $ty {
                fn as_slice_input(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

not_slice_input!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
