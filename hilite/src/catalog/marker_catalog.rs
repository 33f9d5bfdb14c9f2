// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CatalogErrorCouldNot, HiliteKind, Marker, MarkerId,
            sizing::DEFAULT_CATALOG_SIZE};
use smallvec::SmallVec;
use strum::IntoEnumIterator;

pub type InlineVecMarkers = SmallVec<[Marker; DEFAULT_CATALOG_SIZE]>;

/// The ordered set of markers a renderer may emit, with one of them designated as the
/// reset ("none") marker.
///
/// - Order matters for scanning: at a given position the catalog is swept front to back
///   and the first literal that matches wins.
/// - [`Self::try_new`] rejects catalogs where that order could change the outcome, ie:
///   when one literal is a prefix of another. So for every valid catalog at most one
///   marker can match at a given position.
/// - The catalog is immutable once built. Share it by reference between comparisons and
///   threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerCatalog {
    markers: InlineVecMarkers,
    reset: MarkerId,
}

impl MarkerCatalog {
    /// Validates `markers` and looks up the reset marker by name.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `markers` is empty
    /// - a literal is empty
    /// - a name or a literal is used more than once
    /// - a literal is a prefix of another literal
    /// - no marker is named `reset_name`
    pub fn try_new(
        markers: impl IntoIterator<Item = Marker>,
        reset_name: &str,
    ) -> Result<Self, CatalogErrorCouldNot> {
        let markers: InlineVecMarkers = markers.into_iter().collect();

        if markers.is_empty() {
            return Err(CatalogErrorCouldNot::BuildEmptyCatalog);
        }

        for (index, marker) in markers.iter().enumerate() {
            if marker.is_empty() {
                return Err(CatalogErrorCouldNot::AcceptEmptyLiteral {
                    name: marker.name.to_string(),
                });
            }

            for earlier in &markers[..index] {
                if earlier.name == marker.name {
                    return Err(CatalogErrorCouldNot::AcceptDuplicateName {
                        name: marker.name.to_string(),
                    });
                }
                if earlier.literal == marker.literal {
                    return Err(CatalogErrorCouldNot::AcceptDuplicateLiteral {
                        literal: marker.literal.to_string(),
                        first: earlier.name.to_string(),
                        second: marker.name.to_string(),
                    });
                }
            }
        }

        // Checked after duplicates, so equal literals report as duplicates.
        for prefix in &markers {
            for longer in &markers {
                if prefix.len() < longer.len()
                    && longer.literal.starts_with(prefix.literal.as_str())
                {
                    return Err(CatalogErrorCouldNot::AcceptAmbiguousPrefix {
                        prefix: prefix.name.to_string(),
                        prefix_literal: prefix.literal.to_string(),
                        longer: longer.name.to_string(),
                        longer_literal: longer.literal.to_string(),
                    });
                }
            }
        }

        let Some(reset_index) =
            markers.iter().position(|marker| marker.name.as_str() == reset_name)
        else {
            return Err(CatalogErrorCouldNot::FindResetMarker {
                reset_name: reset_name.to_string(),
            });
        };

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🗂️ marker catalog built",
            marker_count = markers.len(),
            reset = %markers[reset_index]
        );

        Ok(Self {
            markers,
            reset: MarkerId(reset_index),
        })
    }

    /// The catalog for the ANSI palette of the SQL highlighter. The order is the order
    /// of [`HiliteKind`], and the reset marker is [`HiliteKind::None`].
    ///
    /// This skips validation, the palette is known to be valid (see the tests).
    #[must_use]
    pub fn sql_hilite() -> Self {
        Self {
            markers: HiliteKind::iter().map(HiliteKind::marker).collect(),
            reset: HiliteKind::None.marker_id(),
        }
    }

    /// The id of the reset ("none") marker. This is the initial active style on both
    /// sides of a comparison.
    #[must_use]
    pub fn reset(&self) -> MarkerId { self.reset }

    #[must_use]
    pub fn len(&self) -> usize { self.markers.len() }

    /// Always `false` for a catalog built by [`Self::try_new`], kept for symmetry with
    /// [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool { self.markers.is_empty() }

    #[must_use]
    pub fn get(&self, id: MarkerId) -> Option<&Marker> { self.markers.get(id.0) }

    /// Name of the marker, or `"?"` for an id that belongs to another catalog.
    #[must_use]
    pub fn name_of(&self, id: MarkerId) -> &str {
        self.get(id).map_or("?", |marker| marker.name.as_str())
    }

    /// Literal of the marker, or `""` for an id that belongs to another catalog.
    #[must_use]
    pub fn literal_of(&self, id: MarkerId) -> &str {
        self.get(id).map_or("", |marker| marker.literal.as_str())
    }

    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<MarkerId> {
        self.markers
            .iter()
            .position(|marker| marker.name.as_str() == name)
            .map(MarkerId)
    }

    /// The markers in scanning order, with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &Marker)> {
        self.markers
            .iter()
            .enumerate()
            .map(|(index, marker)| (MarkerId(index), marker))
    }

    /// Sweep the catalog in order and return the first marker that starts at `cursor`.
    #[must_use]
    pub fn find_at(&self, text: &str, cursor: usize) -> Option<(MarkerId, &Marker)> {
        self.iter().find(|(_, marker)| marker.is_at(text, cursor))
    }
}
