// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sized handle for the registered icon font.

use super::icon::Icon;
use peniko::Blob;
use read_fonts::{FontRef, TableProvider as _};
use std::sync::Arc;

/// Family name under which the icon font registers.
pub const FAMILY_NAME: &str = "Material Icons";

/// Ready-to-use handle for the registered icon font at a point size.
///
/// Cheap to clone; the backing font data is shared. Handles are produced by
/// [`FontRegistry::font_of_size`](crate::FontRegistry::font_of_size) and
/// carry everything a text stack needs: the family name as read from the
/// font, the raw data, the face index, and the requested size.
#[derive(Clone, Debug)]
pub struct IconFont {
    data: Blob<u8>,
    index: u32,
    family: Arc<str>,
    size: f32,
}

impl IconFont {
    pub(crate) fn new(data: Blob<u8>, index: u32, family: Arc<str>, size: f32) -> Self {
        Self {
            data,
            index,
            family,
            size,
        }
    }

    /// Returns the family name read from the registered font.
    pub fn family_name(&self) -> &str {
        &self.family
    }

    /// Returns the point size of this handle.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the raw bytes of the backing font file.
    pub fn data(&self) -> &Blob<u8> {
        &self.data
    }

    /// Returns the index of the face within the backing font file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns this handle at a different point size.
    ///
    /// Registration is not repeated; only the size changes.
    pub fn with_size(&self, size: f32) -> Self {
        debug_assert!(size > 0.0, "point size must be positive");
        Self {
            size,
            ..self.clone()
        }
    }

    /// Returns the nominal glyph identifier for the given character, if the
    /// font maps it.
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        let font = FontRef::from_index(self.data.as_ref(), self.index).ok()?;
        let cmap = font.cmap().ok()?;
        cmap.map_codepoint(ch).map(|gid| gid.to_u32())
    }

    /// Whether the font has a glyph for the given character.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.glyph_id(ch).is_some()
    }

    /// Whether the font has a glyph for the given icon.
    pub fn covers(&self, icon: Icon) -> bool {
        self.has_glyph(icon.as_char())
    }
}
