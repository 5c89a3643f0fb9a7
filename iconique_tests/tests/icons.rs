// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the icon identifier table.

use iconique::{Icon, material_icon};
use std::collections::BTreeSet;

#[test]
fn icon_check_maps_to_the_canonical_code_point() {
    assert_eq!(
        material_icon(Icon::Check),
        '\u{e5ca}',
        "check must map to U+E5CA"
    );
}

#[test]
fn icon_lookup_is_pure() {
    for icon in Icon::all() {
        assert_eq!(
            material_icon(icon),
            icon.as_char(),
            "free function and method must agree for {icon}"
        );
        assert_eq!(
            char::from(icon),
            icon.as_char(),
            "conversion and method must agree for {icon}"
        );
    }
}

#[test]
fn icon_names_round_trip() {
    for icon in Icon::all() {
        assert_eq!(
            Icon::from_name(icon.name()),
            Some(icon),
            "{icon} must be found under its canonical name"
        );
    }
}

#[test]
fn icon_from_name_is_case_insensitive() {
    assert_eq!(
        Icon::from_name("CHECK"),
        Some(Icon::Check),
        "lookup must ignore ASCII case"
    );
    assert_eq!(
        Icon::from_name("Zoom_Out"),
        Some(Icon::ZoomOut),
        "lookup must ignore ASCII case"
    );
}

#[test]
fn icon_from_name_rejects_unknown_names() {
    assert_eq!(Icon::from_name("not_an_icon"), None, "unknown name");
    assert_eq!(Icon::from_name(""), None, "empty name");
}

#[test]
fn icon_glyphs_are_unique() {
    let mut seen = BTreeSet::new();
    for icon in Icon::all() {
        assert!(seen.insert(icon.as_char()), "duplicate glyph for {icon}");
    }
    assert_eq!(
        seen.len(),
        Icon::all().count(),
        "every entry must be distinct"
    );
}

#[test]
fn icon_display_prints_the_canonical_name() {
    assert_eq!(Icon::AddAPhoto.to_string(), "add_a_photo");
    assert_eq!(Icon::Wifi.to_string(), "wifi");
}
