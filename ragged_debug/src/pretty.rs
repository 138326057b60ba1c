// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use kurbo::Rect;
use ragged_core::layout::Placement;
use ragged_core::trace::{
    BatchBeginEvent, BatchEndEvent, ItemMissingEvent, ItemPlacedEvent, RowWalkEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    /// Skip items whose frame did not move.
    moved_only: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("moved_only", &self.moved_only)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            moved_only: false,
        }
    }

    /// Only report placed items whose frame differs from the default.
    #[must_use]
    pub fn moved_only(mut self, moved_only: bool) -> Self {
        self.moved_only = moved_only;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

struct ShowRect(Rect);

impl std::fmt::Display for ShowRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = self.0;
        write!(f, "({:.1},{:.1})-({:.1},{:.1})", r.x0, r.y0, r.x1, r.y1)
    }
}

struct ShowPlacement(Placement);

impl std::fmt::Display for ShowPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Placement::Axis => f.write_str("axis"),
            Placement::Adjacent { neighbor } => write!(f, "after {neighbor:?}"),
            Placement::Unaligned => f.write_str("unaligned"),
        }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_item_placed(&mut self, e: &ItemPlacedEvent) {
        let dx = e.frame.x0 - e.default_frame.x0;
        if self.moved_only && dx == 0.0 {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[place] {:?} {} dx={:+.1} {}",
            e.key,
            ShowRect(e.frame),
            dx,
            ShowPlacement(e.placement),
        );
    }

    fn on_item_missing(&mut self, e: &ItemMissingEvent) {
        let _ = writeln!(self.writer, "[missing] {:?}", e.key);
    }

    fn on_batch_begin(&mut self, e: &BatchBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[batch:begin] {} align={:?}",
            ShowRect(e.viewport),
            e.alignment,
        );
    }

    fn on_batch_end(&mut self, e: &BatchEndEvent) {
        let _ = writeln!(
            self.writer,
            "[batch:end] elements={} cells={} axis={} adjacent={} unaligned={}",
            e.elements,
            e.tally.cells(),
            e.tally.axis,
            e.tally.adjacent,
            e.tally.unaligned,
        );
    }

    fn on_row_walk(&mut self, e: &RowWalkEvent) {
        let _ = writeln!(
            self.writer,
            "[walk] {:?} steps={}{}{}",
            e.key,
            e.steps,
            if e.reused { " reused" } else { "" },
            if e.truncated { " truncated" } else { "" },
        );
    }
}
