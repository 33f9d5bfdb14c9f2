// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{MarkerCatalog, MarkerId};

/// Skip the run of markers that starts at `cursor` (a byte offset into `text`) and
/// return the last one.
///
/// The catalog is swept in order. On the first literal that starts at `cursor`, the
/// cursor moves past it and the sweep starts over from the new position. The run ends
/// when a full sweep matches nothing. Literals are never empty, so every match advances
/// the cursor and this always terminates.
///
/// Returns [`None`] when no marker starts at `cursor`, which is the common case, and
/// leaves `cursor` untouched. A `cursor` at (or past) the end of `text` never matches.
///
/// The cursor stays on a `char` boundary, since it only moves by whole literals.
///
/// ```
/// use r3bl_hilite::{HiliteKind, MarkerCatalog, consume_markers};
///
/// let catalog = MarkerCatalog::sql_hilite();
/// let text = "\x1b[1m\x1b[0mSELECT";
/// let mut cursor = 0;
///
/// let last = consume_markers(text, &mut cursor, &catalog);
/// assert_eq!(last, Some(HiliteKind::None.marker_id()));
/// assert_eq!(&text[cursor..], "SELECT");
/// ```
pub fn consume_markers(
    text: &str,
    cursor: &mut usize,
    catalog: &MarkerCatalog,
) -> Option<MarkerId> {
    let mut last_consumed = None;

    while let Some((id, marker)) = catalog.find_at(text, *cursor) {
        *cursor += marker.len();
        last_consumed = Some(id);
    }

    last_consumed
}
