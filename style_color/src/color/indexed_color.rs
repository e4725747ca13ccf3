// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Workbook palette reference.
//!
//! The index points into the `indexedColors` table of the style sheet. Which indices are
//! valid is up to that table, so nothing is checked here.

/// An index into the workbook level palette. Read it with [`IndexedColor::index`] and
/// write it with [`IndexedColor::set_index`], the field itself is private.
///
/// ```compile_fail
/// let mut indexed = style_color::IndexedColor::new(1);
/// indexed.index = 2;
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct IndexedColor {
    index: u32,
}

impl From<u32> for IndexedColor {
    fn from(index: u32) -> Self { Self { index } }
}

impl IndexedColor {
    #[must_use]
    pub const fn new(index: u32) -> Self { Self { index } }

    #[must_use]
    pub const fn index(&self) -> u32 { self.index }

    pub fn set_index(&mut self, index: u32) { self.index = index; }
}
