// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating the bytes of the bundled icon font.

use super::error::Error;
use peniko::Blob;
use smallvec::SmallVec;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File name of the bundled font resource.
pub const RESOURCE_NAME: &str = "MaterialIcons-Regular.ttf";

/// Subdirectory holding the resource under [`Packaging::Nested`].
pub const NESTED_DIR: &str = "material-icons";

/// How the font resource is laid out relative to the resource directory.
///
/// Selected explicitly by the embedding application; the layout is never
/// sniffed at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Packaging {
    /// The resource lives in a [`NESTED_DIR`] subdirectory, the layout
    /// produced when the crate's assets are installed by a dependency
    /// manager. The flat location is probed as a fallback when the nested
    /// one is absent.
    Nested,

    /// The resource sits directly in the resource directory.
    #[default]
    Flat,
}

/// Strategy for producing the bytes of the icon font.
///
/// Implemented by [`BundledSource`] and [`MemorySource`];
/// [`FontRegistry`](crate::FontRegistry) accepts any implementation.
pub trait FontSource {
    /// Returns the contents of the font file.
    fn load(&self) -> Result<Blob<u8>, Error>;
}

/// Source that reads the font from a resource directory on disk.
#[derive(Clone, Debug)]
pub struct BundledSource {
    resource_dir: Option<PathBuf>,
    packaging: Packaging,
}

impl BundledSource {
    /// Creates a source rooted at the given resource directory.
    pub fn new(resource_dir: impl Into<PathBuf>, packaging: Packaging) -> Self {
        Self {
            resource_dir: Some(resource_dir.into()),
            packaging,
        }
    }

    /// Creates a source rooted at the directory containing the current
    /// executable, the usual home of resources shipped alongside an
    /// application.
    pub fn near_executable(packaging: Packaging) -> Self {
        Self {
            resource_dir: None,
            packaging,
        }
    }

    /// Candidate paths for the resource, in probe order.
    pub fn candidates(&self) -> Result<SmallVec<[PathBuf; 2]>, Error> {
        let base = match &self.resource_dir {
            Some(dir) => dir.clone(),
            None => executable_dir().ok_or_else(|| Error::resource_not_found(RESOURCE_NAME))?,
        };
        let mut paths = SmallVec::new();
        if self.packaging == Packaging::Nested {
            paths.push(base.join(NESTED_DIR).join(RESOURCE_NAME));
        }
        paths.push(base.join(RESOURCE_NAME));
        Ok(paths)
    }
}

impl FontSource for BundledSource {
    fn load(&self) -> Result<Blob<u8>, Error> {
        let candidates = self.candidates()?;
        for path in &candidates {
            if let Some(blob) = load_blob(path) {
                log::debug!("loaded icon font from {}", path.display());
                return Ok(blob);
            }
        }
        let reported = candidates
            .last()
            .cloned()
            .unwrap_or_else(|| RESOURCE_NAME.into());
        Err(Error::resource_not_found(reported))
    }
}

/// Source backed by font bytes already in memory.
///
/// This is the way to bundle the font file into the binary itself:
///
/// ```no_run
/// use iconique::{FontRegistry, MemorySource};
///
/// let data = std::fs::read("resources/MaterialIcons-Regular.ttf")?;
/// let registry = FontRegistry::with_source(MemorySource::new(data));
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct MemorySource {
    data: Blob<u8>,
}

impl MemorySource {
    /// Creates a source over the given font bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: Blob::new(Arc::new(data)),
        }
    }

    /// Creates a source over an existing shared blob.
    pub fn from_blob(data: Blob<u8>) -> Self {
        Self { data }
    }
}

impl FontSource for MemorySource {
    fn load(&self) -> Result<Blob<u8>, Error> {
        Ok(self.data.clone())
    }
}

fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.to_path_buf())
}

#[expect(unsafe_code, reason = "memory mapping the font file")]
fn load_blob(path: &Path) -> Option<Blob<u8>> {
    let file = std::fs::File::open(path).ok()?;
    let mapped = unsafe { memmap2::Mmap::map(&file).ok()? };
    Some(Blob::new(Arc::new(mapped)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_nested_probes_subdirectory_first() {
        let source = BundledSource::new("/res", Packaging::Nested);
        let paths = source.candidates().unwrap();
        assert_eq!(paths.len(), 2, "nested packaging probes two locations");
        assert!(
            paths[0].ends_with("material-icons/MaterialIcons-Regular.ttf"),
            "first probe must be the nested location: {}",
            paths[0].display()
        );
        assert!(
            paths[1].ends_with("res/MaterialIcons-Regular.ttf"),
            "second probe must be the flat location: {}",
            paths[1].display()
        );
    }

    #[test]
    fn candidates_flat_probes_single_location() {
        let source = BundledSource::new("/res", Packaging::Flat);
        let paths = source.candidates().unwrap();
        assert_eq!(paths.len(), 1, "flat packaging probes one location");
        assert!(
            paths[0].ends_with("res/MaterialIcons-Regular.ttf"),
            "flat probe must sit directly in the resource dir: {}",
            paths[0].display()
        );
    }
}
