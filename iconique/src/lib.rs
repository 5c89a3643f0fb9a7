// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration and glyph lookup for the bundled Material Icons font.
//!
//! The crate does two small things:
//!
//! - [`material_icon`] translates a named [`Icon`] into the character whose
//!   glyph renders that icon in the Material Icons font.
//! - [`font_of_size`] returns a ready-to-use [`IconFont`] handle at a point
//!   size, registering the bundled font data on the first request. The
//!   registration side effect runs at most once per [`FontRegistry`] no
//!   matter how many threads race on it, and a failed registration is
//!   sticky: a missing or invalid font asset is a packaging defect, not a
//!   runtime condition to recover from.
//!
//! ```
//! use iconique::{Icon, material_icon};
//!
//! assert_eq!(material_icon(Icon::Check), '\u{e5ca}');
//! ```
//!
//! Without the `std` feature only the icon table is available and the crate
//! is `no_std`.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("iconique requires either the `std` or `libm` feature to be enabled");

mod icon;

#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
mod font;
#[cfg(feature = "std")]
mod registry;
#[cfg(feature = "std")]
mod source;

#[cfg(feature = "std")]
pub use peniko::Blob;

pub use icon::{Icon, material_icon};

#[cfg(feature = "std")]
pub use error::{Error, ErrorKind};
#[cfg(feature = "std")]
pub use font::{FAMILY_NAME, IconFont};
#[cfg(feature = "std")]
pub use registry::{FontRegistry, RegistryOptions, font_of_size, global, set_global};
#[cfg(feature = "std")]
pub use source::{
    BundledSource, FontSource, MemorySource, NESTED_DIR, Packaging, RESOURCE_NAME,
};
