// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter};

/// The discriminant of a [`Color`]: which payload it holds.
///
/// The `Display` form (`indexed`, `theme`, `rgb`) is what shows up in error messages.
///
/// [`Color`]: crate::Color
#[derive(Debug, Display, EnumCount, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum ColorType {
    Indexed,
    Theme,
    Rgb,
}

impl ColorType {
    /// Integer tag fed to the hash before anything else, so that payloads of different
    /// variants which share a number (`theme(1)` and `indexed(1)`) never line up.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            ColorType::Indexed => 0,
            ColorType::Theme => 1,
            ColorType::Rgb => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    #[test_case(ColorType::Indexed, "indexed")]
    #[test_case(ColorType::Theme, "theme")]
    #[test_case(ColorType::Rgb, "rgb")]
    fn test_display(color_type: ColorType, expected: &str) {
        assert_eq2!(color_type.to_string(), expected);
    }

    #[test]
    fn test_tags_are_unique() {
        let mut tags: Vec<u8> = ColorType::iter().map(ColorType::tag).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq2!(tags.len(), ColorType::COUNT);
    }
}
