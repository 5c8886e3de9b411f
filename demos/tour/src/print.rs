// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt::Debug;

use sliceworks::seq::GrowableSeq;

pub fn title(value: &str) {
    println!("\n============ {value} ============");
}

pub fn subtitle(value: &str) {
    println!("\n--- {value} ---");
}

/// Formats `name - [values] - len: n - cap: c`.
pub fn seq_line<T: Debug>(name: &str, seq: &GrowableSeq<T>) -> String {
    seq.open(|live| format!("{name} - {live:?} - len: {} - cap: {}", seq.len(), seq.capacity()))
}

pub fn seq<T: Debug>(name: &str, seq: &GrowableSeq<T>) {
    println!("{}", seq_line(name, seq));
}
