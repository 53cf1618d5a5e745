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

//! Error types for the ansislice crate.

/// Result type alias for operations that may fail with a [`SliceError`].
pub type SliceResult<T> = Result<T, SliceError>;

/// Errors that can occur when slicing a string containing ANSI sequences.
///
/// Out of range indices are never an error. They degrade to an empty or
/// partial result the same way a plain substring does.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SliceError {
    /// The value handed to a dynamically typed entry point was not a string.
    #[error("first argument must be a string (found {found})")]
    InvalidArgumentType {
        /// Type name of the rejected value
        found: &'static str,
    },
}

impl SliceError {
    /// Check if the error was caused by a non-string argument
    pub fn is_type_error(&self) -> bool {
        matches!(self, SliceError::InvalidArgumentType { .. })
    }
}
