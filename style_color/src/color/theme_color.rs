// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// An index into the theme palette (`dk1`, `lt1`, `dk2`, `lt2`, `accent1`..). The theme
/// owns the valid range.
///
/// ```compile_fail
/// let theme = style_color::ThemeColor::new(1);
/// let _ = theme.index;
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct ThemeColor {
    index: u32,
}

impl From<u32> for ThemeColor {
    fn from(index: u32) -> Self { Self { index } }
}

impl ThemeColor {
    #[must_use]
    pub const fn new(index: u32) -> Self { Self { index } }

    #[must_use]
    pub const fn index(&self) -> u32 { self.index }

    pub fn set_index(&mut self, index: u32) { self.index = index; }
}
