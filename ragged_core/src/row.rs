// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric row-membership test.
//!
//! Base flow layouts do not report which row an item landed in, so rows are
//! inferred from default frames. A [`RowProbe`] is a band that spans the
//! content width at one item's vertical extent:
//!
//! ```text
//! +--------+-------------------------------------------------+--------+
//! |        |   +--------+                                    |        |
//! |  left  |- -|- - - - |- - - - +-----------+ - - - - - - -|  right |
//! |  inset |   | overlap|  probe |   item    |               |  inset |
//! |        |- -|- - - - |- - - - +-----------+ - - - - - - -|        |
//! |        |   +--------+                                    |        |
//! |        |   neighbor                                      |        |
//! +--------+-------------------------------------------------+--------+
//! ```
//!
//! A neighbor is in the same row iff its frame overlaps the band. This works
//! even when the base layout centers a lone item, where "first in row" and
//! "first by index" disagree.

use kurbo::Rect;

use crate::flow::FlowMetrics;

/// A horizontal band covering one item's row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowProbe {
    band: Rect,
}

impl RowProbe {
    /// Builds the probe for the row containing `frame`.
    ///
    /// The band runs from the left inset to the right inset. While the
    /// container width is unknown it is horizontally unbounded, so only the
    /// vertical test applies and a left-aligned row still packs against its
    /// neighbors. A horizontally empty band would instead make every item
    /// the first of its own row and flush them all onto the left inset.
    #[must_use]
    pub fn new(metrics: &FlowMetrics, frame: Rect) -> Self {
        let (x0, x1) = match metrics.container_width {
            Some(width) => (metrics.section_inset.x0, width - metrics.section_inset.x1),
            None => (f64::NEG_INFINITY, f64::INFINITY),
        };
        Self {
            band: Rect::new(x0, frame.y0, x1, frame.y1),
        }
    }

    /// The band as a rectangle.
    #[inline]
    #[must_use]
    pub const fn band(&self) -> Rect {
        self.band
    }

    /// Returns `true` if `frame` lies in this row.
    ///
    /// Vertical extents are compared as open intervals: rows that only touch
    /// (zero line spacing) stay separate, while a zero-height frame strictly
    /// inside the band, or a band of zero height inside a taller frame,
    /// still counts. Horizontal contact is enough.
    #[must_use]
    pub fn contains(&self, frame: Rect) -> bool {
        frame.y0 < self.band.y1
            && frame.y1 > self.band.y0
            && frame.x1 >= self.band.x0
            && frame.x0 <= self.band.x1
    }
}

/// Returns `true` if `other` lies in the row of `frame`.
#[inline]
#[must_use]
pub fn same_row(metrics: &FlowMetrics, frame: Rect, other: Rect) -> bool {
    RowProbe::new(metrics, frame).contains(other)
}
