// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `iconique`.
//!
//! - The `util` module contains shared helpers needed by different test
//!   methods: a builder for minimal synthetic font binaries and test
//!   doubles for the font source seam.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes
//!   it easy to share the utilities above.
//! - Tests for the icon table go into `icons.rs`; tests for registration,
//!   resolution, and sized lookup go into `registry.rs`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod icons;
mod util;
