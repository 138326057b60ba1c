// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for layout passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! positioner calls as it places items. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! [`PlacementTally`] counts placements during a batch and feeds the
//! [`BatchEndEvent`].
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates [`RowWalkEvent`] and the
//!   corresponding `TraceSink` method.

use kurbo::Rect;

use crate::alignment::HorizontalAlignment;
use crate::item::ItemKey;
use crate::layout::Placement;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a cell has been given its final frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPlacedEvent {
    /// The item.
    pub key: ItemKey,
    /// Frame reported by the base layout.
    pub default_frame: Rect,
    /// Frame after alignment.
    pub frame: Rect,
    /// How the frame was derived.
    pub placement: Placement,
}

/// Emitted when the base layout has no item for a requested key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemMissingEvent {
    /// The requested key.
    pub key: ItemKey,
}

/// Marks the beginning of a viewport query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchBeginEvent {
    /// The queried viewport.
    pub viewport: Rect,
    /// Alignment in effect for the batch.
    pub alignment: HorizontalAlignment,
}

/// Marks the end of a viewport query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchEndEvent {
    /// The queried viewport.
    pub viewport: Rect,
    /// Number of elements returned, cells and others.
    pub elements: usize,
    /// Placement counts for the cells among them.
    pub tally: PlacementTally,
}

/// Per-item walk toward the alignment axis.
///
/// A cell already placed earlier in the same batch reports zero steps and
/// `reused`.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowWalkEvent {
    /// The item whose frame was requested.
    pub key: ItemKey,
    /// Number of neighbors visited before reaching an anchor.
    pub steps: usize,
    /// Whether the walk reached a frame resolved earlier in the same batch.
    pub reused: bool,
    /// Whether the walk hit the section-length bound.
    pub truncated: bool,
}

// ---------------------------------------------------------------------------
// PlacementTally
// ---------------------------------------------------------------------------

/// Counts how cells were placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlacementTally {
    /// Cells flushed against the axis.
    pub axis: usize,
    /// Cells packed against a neighbor.
    pub adjacent: usize,
    /// Cells left at their default frame.
    pub unaligned: usize,
}

impl PlacementTally {
    /// Records one placement.
    pub fn record(&mut self, placement: Placement) {
        match placement {
            Placement::Axis => self.axis += 1,
            Placement::Adjacent { .. } => self.adjacent += 1,
            Placement::Unaligned => self.unaligned += 1,
        }
    }

    /// Total number of cells recorded.
    #[must_use]
    pub const fn cells(&self) -> usize {
        self.axis + self.adjacent + self.unaligned
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the positioner.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a cell has been placed.
    fn on_item_placed(&mut self, e: &ItemPlacedEvent) {
        _ = e;
    }

    /// Called when a requested key does not exist.
    fn on_item_missing(&mut self, e: &ItemMissingEvent) {
        _ = e;
    }

    /// Called before a viewport query is answered.
    fn on_batch_begin(&mut self, e: &BatchBeginEvent) {
        _ = e;
    }

    /// Called after a viewport query is answered.
    fn on_batch_end(&mut self, e: &BatchEndEvent) {
        _ = e;
    }

    /// Called after each walk toward the axis (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_row_walk(&mut self, e: &RowWalkEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`ItemPlacedEvent`].
    #[inline]
    pub fn item_placed(&mut self, e: &ItemPlacedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_item_placed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ItemMissingEvent`].
    #[inline]
    pub fn item_missing(&mut self, e: &ItemMissingEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_item_missing(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`BatchBeginEvent`].
    #[inline]
    pub fn batch_begin(&mut self, e: &BatchBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_batch_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`BatchEndEvent`].
    #[inline]
    pub fn batch_end(&mut self, e: &BatchEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_batch_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RowWalkEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn row_walk(&mut self, e: &RowWalkEvent) {
        if let Some(s) = &mut self.sink {
            s.on_row_walk(e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_placed() -> ItemPlacedEvent {
        ItemPlacedEvent {
            key: ItemKey::new(0, 3),
            default_frame: Rect::new(100.0, 0.0, 160.0, 30.0),
            frame: Rect::new(98.0, 0.0, 158.0, 30.0),
            placement: Placement::Adjacent {
                neighbor: ItemKey::new(0, 2),
            },
        }
    }

    #[test]
    fn tally_counts_each_kind() {
        let mut tally = PlacementTally::default();
        tally.record(Placement::Axis);
        tally.record(Placement::Adjacent {
            neighbor: ItemKey::new(0, 0),
        });
        tally.record(Placement::Adjacent {
            neighbor: ItemKey::new(0, 1),
        });
        tally.record(Placement::Unaligned);
        assert_eq!(tally.axis, 1);
        assert_eq!(tally.adjacent, 2);
        assert_eq!(tally.unaligned, 1);
        assert_eq!(tally.cells(), 4);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_item_placed(&sample_placed());
        sink.on_item_missing(&ItemMissingEvent {
            key: ItemKey::new(4, 0),
        });
        sink.on_batch_end(&BatchEndEvent {
            viewport: Rect::ZERO,
            elements: 0,
            tally: PlacementTally::default(),
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.item_placed(&sample_placed());
        tracer.batch_begin(&BatchBeginEvent {
            viewport: Rect::ZERO,
            alignment: HorizontalAlignment::Left,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            placed: Vec<ItemKey>,
        }
        impl TraceSink for RecordingSink {
            fn on_item_placed(&mut self, e: &ItemPlacedEvent) {
                self.placed.push(e.key);
            }
        }

        let mut sink = RecordingSink { placed: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.item_placed(&sample_placed());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.placed, &[ItemKey::new(0, 3)]);
    }
}
