// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Gate for the `tracing` events emitted by this crate. Flip it to `false` to silence
/// them without touching the subscriber.
pub const DEBUG_STYLE_COLOR: bool = true;
