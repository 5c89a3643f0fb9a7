// Copyright 2026 the Iconique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for building font data and sources under test.

use iconique::{Blob, Error, FontSource};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Builds a minimal sfnt carrying a `name` table with the given family
/// name and a `cmap` that maps the Material Icons private-use range
/// `U+E000..=U+E935` to glyphs `1..`.
///
/// The parser reads the table directory lazily and does not verify
/// checksums, so these two tables are all the tests need.
pub fn synthetic_font(family: &str) -> Vec<u8> {
    let cmap = cmap_table();
    let name = name_table(family);

    let mut font = Vec::new();
    push_u32(&mut font, 0x0001_0000); // sfnt version
    push_u16(&mut font, 2); // numTables
    push_u16(&mut font, 32); // searchRange
    push_u16(&mut font, 1); // entrySelector
    push_u16(&mut font, 0); // rangeShift

    // Table records, sorted by tag, offsets relative to the file start.
    let mut offset = 12 + 2 * 16;
    for (tag, table) in [(b"cmap", &cmap), (b"name", &name)] {
        font.extend_from_slice(tag);
        push_u32(&mut font, 0); // checksum
        push_u32(&mut font, offset as u32);
        push_u32(&mut font, table.len() as u32);
        offset += padded(table.len());
    }
    for table in [&cmap, &name] {
        let end = font.len() + padded(table.len());
        font.extend_from_slice(table);
        font.resize(end, 0);
    }
    font
}

/// A `name` table (format 0) with family and subfamily records in the
/// Windows Unicode BMP encoding.
fn name_table(family: &str) -> Vec<u8> {
    let entries: [(u16, &str); 2] = [(1, family), (2, "Regular")];

    let mut storage = Vec::new();
    let mut records = Vec::new();
    for (name_id, value) in entries {
        let start = storage.len();
        for unit in value.encode_utf16() {
            storage.extend_from_slice(&unit.to_be_bytes());
        }
        records.push((name_id, start as u16, (storage.len() - start) as u16));
    }

    let mut table = Vec::new();
    push_u16(&mut table, 0); // format
    push_u16(&mut table, records.len() as u16);
    push_u16(&mut table, (6 + records.len() * 12) as u16); // stringOffset
    for (name_id, offset, len) in records {
        push_u16(&mut table, 3); // platformID: Windows
        push_u16(&mut table, 1); // encodingID: Unicode BMP
        push_u16(&mut table, 0x409); // languageID: en-US
        push_u16(&mut table, name_id);
        push_u16(&mut table, len);
        push_u16(&mut table, offset);
    }
    table.extend_from_slice(&storage);
    table
}

/// A `cmap` with a single format 4 subtable: one segment for the icon
/// range and the required terminator segment.
fn cmap_table() -> Vec<u8> {
    let mut table = Vec::new();
    push_u16(&mut table, 0); // version
    push_u16(&mut table, 1); // numTables
    push_u16(&mut table, 3); // platformID: Windows
    push_u16(&mut table, 1); // encodingID: Unicode BMP
    push_u32(&mut table, 12); // subtable offset

    push_u16(&mut table, 4); // format
    push_u16(&mut table, 32); // length
    push_u16(&mut table, 0); // language
    push_u16(&mut table, 4); // segCountX2
    push_u16(&mut table, 4); // searchRange
    push_u16(&mut table, 1); // entrySelector
    push_u16(&mut table, 0); // rangeShift
    push_u16(&mut table, 0xE935); // endCode
    push_u16(&mut table, 0xFFFF);
    push_u16(&mut table, 0); // reservedPad
    push_u16(&mut table, 0xE000); // startCode
    push_u16(&mut table, 0xFFFF);
    push_u16(&mut table, 0x2001); // idDelta: U+E000 maps to glyph 1
    push_u16(&mut table, 1);
    push_u16(&mut table, 0); // idRangeOffset
    push_u16(&mut table, 0);
    table
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn padded(len: usize) -> usize {
    len.next_multiple_of(4)
}

/// Font source double that counts how many times the load side effect
/// runs.
pub struct CountingSource {
    data: Blob<u8>,
    loads: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(data: Vec<u8>) -> (Self, Arc<AtomicUsize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        let source = Self {
            data: Blob::new(Arc::new(data)),
            loads: loads.clone(),
        };
        (source, loads)
    }
}

impl FontSource for CountingSource {
    fn load(&self) -> Result<Blob<u8>, Error> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.data.clone())
    }
}

/// Creates a unique scratch directory under the system temp dir.
pub fn scratch_dir(label: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("iconique-{}-{label}-{n}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
