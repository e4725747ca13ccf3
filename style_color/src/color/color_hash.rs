// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Order sensitive hash combiner used by [`Color::hash_value`].
//!
//! Every field is hashed on its own with [`rustc_hash::FxHasher`] and then folded into a
//! running seed. The fold is the golden ratio combiner (the one popularized by Boost),
//! widened to 64 bits. Plain XOR or addition would let two colors that differ only in
//! one byte (eg: alpha) cluster, and would make the result independent of field order.
//!
//! [`Color::hash_value`]: crate::Color::hash_value

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// 2^64 / φ, the 64 bit counterpart of `0x9e3779b9`.
pub const GOLDEN_RATIO_64: u64 = 0x9e37_79b9_7f4a_7c15;

/// Folds the hash of `value` into `seed`.
pub fn hash_combine<T: Hash + ?Sized>(seed: &mut u64, value: &T) {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    let hash = hasher.finish();
    *seed ^= hash
        .wrapping_add(GOLDEN_RATIO_64)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
}
