// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for font registration and lookup.

use core::fmt;
use std::path::{Path, PathBuf};

/// Error produced while registering or looking up the icon font.
///
/// Carries a non-exhaustive [`ErrorKind`] plus contextual information about
/// the resource path or font data involved. Both kinds indicate a broken
/// build or package rather than a runtime fault: a correctly packaged
/// application never observes either.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The resource path involved in the failure, when one was resolved.
    resource: Option<PathBuf>,

    /// Extra detail reported by the font parser or validator.
    detail: Option<String>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The resource path involved in the failure, when one was resolved.
    pub fn resource(&self) -> Option<&Path> {
        self.resource.as_deref()
    }

    /// Extra detail reported by the font parser or validator, if available.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Creates an error reporting that the font resource is absent from the
    /// given location.
    pub fn resource_not_found(resource: impl Into<PathBuf>) -> Self {
        Self {
            kind: ErrorKind::ResourceNotFound,
            resource: Some(resource.into()),
            detail: None,
        }
    }

    /// Creates an error reporting that the font data failed validation.
    pub fn registration_rejected(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::RegistrationRejected,
            resource: None,
            detail: Some(detail.into()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::ResourceNotFound => match &self.resource {
                Some(resource) => {
                    write!(f, "font resource `{}` not found", resource.display())
                }
                None => f.write_str("font resource not found"),
            },
            ErrorKind::RegistrationRejected => match &self.detail {
                Some(detail) => write!(f, "icon font data rejected: {detail}"),
                None => f.write_str("icon font data rejected"),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The font file is absent from every resolved candidate location.
    ResourceNotFound,

    /// The font data failed validation: unparseable, or carrying a missing
    /// or unexpected family name.
    RegistrationRejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_resource() {
        let err = Error::resource_not_found("/res/MaterialIcons-Regular.ttf");
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
        assert!(
            err.to_string().contains("MaterialIcons-Regular.ttf"),
            "diagnostic must identify the resource: {err}"
        );
    }

    #[test]
    fn display_carries_rejection_detail() {
        let err = Error::registration_rejected("no usable family name");
        assert_eq!(err.kind(), ErrorKind::RegistrationRejected);
        assert!(
            err.to_string().contains("no usable family name"),
            "diagnostic must carry the validator detail: {err}"
        );
    }
}
