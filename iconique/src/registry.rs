// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time registration of the icon font.

use super::error::Error;
use super::font::{FAMILY_NAME, IconFont};
use super::source::{BundledSource, FontSource, MemorySource, Packaging};
use core::fmt;
use peniko::Blob;
use read_fonts::{
    FontRef, TableProvider as _,
    tables::name::{Name, NameRecord},
    types::NameId,
};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Options for a font registry.
#[derive(Clone, Debug, Default)]
pub struct RegistryOptions {
    /// Directory holding the font resource. When `None`, the directory
    /// containing the current executable is used.
    pub resource_dir: Option<PathBuf>,

    /// Layout of the resource within the resource directory.
    pub packaging: Packaging,
}

/// Lazily-initialized owner of the registered icon font.
///
/// Registration runs at most once per registry, on the first lookup or an
/// explicit [`ensure_registered`](Self::ensure_registered), no matter how
/// many threads race on the first request. The outcome is sticky: a failed
/// registration is reported to every later caller and never retried,
/// reflecting that a missing or invalid font asset is a packaging defect
/// rather than a runtime condition.
pub struct FontRegistry {
    source: Box<dyn FontSource + Send + Sync>,
    face: OnceLock<Result<Face, Error>>,
}

impl FontRegistry {
    /// Creates a registry over the bundled resource layout.
    pub fn new(options: RegistryOptions) -> Self {
        let source = match options.resource_dir {
            Some(dir) => BundledSource::new(dir, options.packaging),
            None => BundledSource::near_executable(options.packaging),
        };
        Self::with_source(source)
    }

    /// Creates a registry over caller-provided font bytes.
    pub fn from_memory(data: Vec<u8>) -> Self {
        Self::with_source(MemorySource::new(data))
    }

    /// Creates a registry with a custom source.
    pub fn with_source(source: impl FontSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
            face: OnceLock::new(),
        }
    }

    /// Ensures the font is registered, registering it if this is the first
    /// request.
    ///
    /// In a correctly packaged build this never fails.
    pub fn ensure_registered(&self) -> Result<(), Error> {
        self.face().map(|_| ())
    }

    /// Whether a registration attempt has already succeeded.
    pub fn is_registered(&self) -> bool {
        matches!(self.face.get(), Some(Ok(_)))
    }

    /// Returns a handle for the icon font at the given point size,
    /// performing first-use registration transparently.
    ///
    /// `size` is a positive point size. A successful registration implies
    /// the family name matches [`FAMILY_NAME`], so in a correctly packaged
    /// build this never fails.
    pub fn font_of_size(&self, size: f32) -> Result<IconFont, Error> {
        debug_assert!(size > 0.0, "point size must be positive");
        let face = self.face()?;
        Ok(IconFont::new(
            face.data.clone(),
            face.index,
            face.family.clone(),
            size,
        ))
    }

    fn face(&self) -> Result<&Face, Error> {
        self.face
            .get_or_init(|| register(self.source.as_ref()))
            .as_ref()
            .map_err(Error::clone)
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("registered", &self.is_registered())
            .finish_non_exhaustive()
    }
}

/// A successfully registered font face.
#[derive(Clone, Debug)]
struct Face {
    data: Blob<u8>,
    index: u32,
    family: Arc<str>,
}

fn register(source: &dyn FontSource) -> Result<Face, Error> {
    let data = source.load()?;
    let font =
        FontRef::new(data.as_ref()).map_err(|err| Error::registration_rejected(err.to_string()))?;
    let name = font
        .name()
        .map_err(|err| Error::registration_rejected(err.to_string()))?;
    let family = family_name(&name)
        .ok_or_else(|| Error::registration_rejected("font data carries no family name"))?;
    if !family.eq_ignore_ascii_case(FAMILY_NAME) {
        return Err(Error::registration_rejected(format!(
            "font family is `{family}`, expected `{FAMILY_NAME}`"
        )));
    }
    log::info!("registered icon font family `{family}`");
    Ok(Face {
        data,
        index: 0,
        family: family.into(),
    })
}

/// Reads the family name from the `name` table, preferring the typographic
/// family over the legacy family name.
fn family_name(name: &Name<'_>) -> Option<String> {
    [NameId::TYPOGRAPHIC_FAMILY_NAME, NameId::FAMILY_NAME]
        .into_iter()
        .find_map(|id| english_or_first_name(name, id))
        .filter(|family| !family.is_empty())
}

/// Returns the value of the given name identifier, preferring English
/// Unicode records over whatever else the table carries.
fn english_or_first_name(name: &Name<'_>, id: NameId) -> Option<String> {
    let mut first = None;
    for record in name.name_record() {
        if record.name_id() != id {
            continue;
        }
        let Ok(value) = record.string(name.string_data()) else {
            continue;
        };
        let value: String = value.chars().collect();
        if is_english_unicode(record) {
            return Some(value);
        }
        if first.is_none() {
            first = Some(value);
        }
    }
    first
}

fn is_english_unicode(record: &NameRecord) -> bool {
    match record.platform_id() {
        0 => true,
        3 => record.encoding_id() <= 1 && record.language_id() == 0x409,
        _ => false,
    }
}

static GLOBAL: OnceLock<FontRegistry> = OnceLock::new();

/// Returns the process-wide registry, creating it with default options on
/// first use.
///
/// The default registry expects the resource next to the current executable
/// in the flat layout. Applications with a different layout should install
/// their own registry via [`set_global`] before the first lookup.
pub fn global() -> &'static FontRegistry {
    GLOBAL.get_or_init(|| FontRegistry::new(RegistryOptions::default()))
}

/// Installs the process-wide registry.
///
/// Returns the rejected registry if one is already installed, including one
/// created implicitly by an earlier lookup.
pub fn set_global(registry: FontRegistry) -> Result<(), FontRegistry> {
    GLOBAL.set(registry)
}

/// Returns a handle for the icon font at the given point size from the
/// process-wide registry, performing first-use registration transparently.
pub fn font_of_size(size: f32) -> Result<IconFont, Error> {
    global().font_of_size(size)
}
