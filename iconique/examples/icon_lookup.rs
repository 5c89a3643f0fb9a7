// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print a few icons with their glyph code points, then request a sized
//! handle for the bundled font.

use iconique::{Icon, font_of_size, material_icon};

fn main() {
    for icon in [Icon::Home, Icon::Search, Icon::Settings, Icon::Check] {
        println!("{icon}: U+{:04X}", u32::from(material_icon(icon)));
    }

    match font_of_size(24.0) {
        Ok(font) => println!("registered `{}` at {}pt", font.family_name(), font.size()),
        Err(err) => println!("font unavailable: {err}"),
    }
}
