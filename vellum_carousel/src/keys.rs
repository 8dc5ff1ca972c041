// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Keyboard navigation commands understood by a focused carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// `ArrowRight` or `PageDown`.
    Next,
    /// `ArrowLeft` or `PageUp`.
    Previous,
    /// `Home`.
    First,
    /// `End`.
    Last,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value to a command.
    ///
    /// Returns `None` for keys the carousel does not handle; their default
    /// browser action should be left alone.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "PageDown" => Some(Self::Next),
            "ArrowLeft" | "PageUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}
