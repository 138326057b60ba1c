// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as little-endian records. [`decode`] reads them back as an
//! iterator of [`RecordedEvent`].
//!
//! Item keys are stored as two `u64`s, coordinates as `f64` bit patterns.

use kurbo::Rect;
use ragged_core::alignment::HorizontalAlignment;
use ragged_core::item::ItemKey;
use ragged_core::layout::Placement;
use ragged_core::trace::{
    BatchBeginEvent, BatchEndEvent, ItemMissingEvent, ItemPlacedEvent, PlacementTally,
    RowWalkEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_ITEM_PLACED: u8 = 1;
const TAG_ITEM_MISSING: u8 = 2;
const TAG_BATCH_BEGIN: u8 = 3;
const TAG_BATCH_END: u8 = 4;
const TAG_ROW_WALK: u8 = 5;

const PLACEMENT_AXIS: u8 = 0;
const PLACEMENT_ADJACENT: u8 = 1;
const PLACEMENT_UNALIGNED: u8 = 2;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_usize(&mut self, v: usize) {
        self.write_u64(u64::try_from(v).unwrap_or(u64::MAX));
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_key(&mut self, key: ItemKey) {
        self.write_usize(key.section);
        self.write_usize(key.index);
    }

    fn write_rect(&mut self, r: Rect) {
        self.write_f64(r.x0);
        self.write_f64(r.y0);
        self.write_f64(r.x1);
        self.write_f64(r.y1);
    }

    fn write_alignment(&mut self, a: HorizontalAlignment) {
        self.write_u8(match a {
            HorizontalAlignment::Left => 0,
            HorizontalAlignment::Right => 1,
        });
    }

    fn write_placement(&mut self, p: Placement) {
        match p {
            Placement::Axis => self.write_u8(PLACEMENT_AXIS),
            Placement::Adjacent { neighbor } => {
                self.write_u8(PLACEMENT_ADJACENT);
                self.write_key(neighbor);
            }
            Placement::Unaligned => self.write_u8(PLACEMENT_UNALIGNED),
        }
    }
}

impl TraceSink for RecorderSink {
    fn on_item_placed(&mut self, e: &ItemPlacedEvent) {
        self.write_u8(TAG_ITEM_PLACED);
        self.write_key(e.key);
        self.write_rect(e.default_frame);
        self.write_rect(e.frame);
        self.write_placement(e.placement);
    }

    fn on_item_missing(&mut self, e: &ItemMissingEvent) {
        self.write_u8(TAG_ITEM_MISSING);
        self.write_key(e.key);
    }

    fn on_batch_begin(&mut self, e: &BatchBeginEvent) {
        self.write_u8(TAG_BATCH_BEGIN);
        self.write_rect(e.viewport);
        self.write_alignment(e.alignment);
    }

    fn on_batch_end(&mut self, e: &BatchEndEvent) {
        self.write_u8(TAG_BATCH_END);
        self.write_rect(e.viewport);
        self.write_usize(e.elements);
        self.write_usize(e.tally.axis);
        self.write_usize(e.tally.adjacent);
        self.write_usize(e.tally.unaligned);
    }

    fn on_row_walk(&mut self, e: &RowWalkEvent) {
        self.write_u8(TAG_ROW_WALK);
        self.write_key(e.key);
        self.write_usize(e.steps);
        self.write_bool(e.reused);
        self.write_bool(e.truncated);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// An [`ItemPlacedEvent`].
    ItemPlaced(ItemPlacedEvent),
    /// An [`ItemMissingEvent`].
    ItemMissing(ItemMissingEvent),
    /// A [`BatchBeginEvent`].
    BatchBegin(BatchBeginEvent),
    /// A [`BatchEndEvent`].
    BatchEnd(BatchEndEvent),
    /// A [`RowWalkEvent`].
    RowWalk(RowWalkEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
///
/// Stops at the first unknown tag or truncated record.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn read_u8(&mut self) -> Option<u8> {
        let v = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        let bytes = self.data.get(self.pos..self.pos + 8)?;
        let v = u64::from_le_bytes(bytes.try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_usize(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_bool(&mut self) -> Option<bool> {
        Some(self.read_u8()? != 0)
    }

    fn read_f64(&mut self) -> Option<f64> {
        Some(f64::from_bits(self.read_u64()?))
    }

    fn read_key(&mut self) -> Option<ItemKey> {
        Some(ItemKey::new(self.read_usize()?, self.read_usize()?))
    }

    fn read_rect(&mut self) -> Option<Rect> {
        Some(Rect::new(
            self.read_f64()?,
            self.read_f64()?,
            self.read_f64()?,
            self.read_f64()?,
        ))
    }

    fn read_alignment(&mut self) -> Option<HorizontalAlignment> {
        Some(match self.read_u8()? {
            0 => HorizontalAlignment::Left,
            _ => HorizontalAlignment::Right,
        })
    }

    fn read_placement(&mut self) -> Option<Placement> {
        match self.read_u8()? {
            PLACEMENT_AXIS => Some(Placement::Axis),
            PLACEMENT_ADJACENT => Some(Placement::Adjacent {
                neighbor: self.read_key()?,
            }),
            PLACEMENT_UNALIGNED => Some(Placement::Unaligned),
            _ => None,
        }
    }

    fn decode_item_placed(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ItemPlaced(ItemPlacedEvent {
            key: self.read_key()?,
            default_frame: self.read_rect()?,
            frame: self.read_rect()?,
            placement: self.read_placement()?,
        }))
    }

    fn decode_item_missing(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ItemMissing(ItemMissingEvent {
            key: self.read_key()?,
        }))
    }

    fn decode_batch_begin(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::BatchBegin(BatchBeginEvent {
            viewport: self.read_rect()?,
            alignment: self.read_alignment()?,
        }))
    }

    fn decode_batch_end(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::BatchEnd(BatchEndEvent {
            viewport: self.read_rect()?,
            elements: self.read_usize()?,
            tally: PlacementTally {
                axis: self.read_usize()?,
                adjacent: self.read_usize()?,
                unaligned: self.read_usize()?,
            },
        }))
    }

    fn decode_row_walk(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::RowWalk(RowWalkEvent {
            key: self.read_key()?,
            steps: self.read_usize()?,
            reused: self.read_bool()?,
            truncated: self.read_bool()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_ITEM_PLACED => self.decode_item_placed(),
            TAG_ITEM_MISSING => self.decode_item_missing(),
            TAG_BATCH_BEGIN => self.decode_batch_begin(),
            TAG_BATCH_END => self.decode_batch_end(),
            TAG_ROW_WALK => self.decode_row_walk(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
