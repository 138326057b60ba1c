// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-aware positioning on top of a base flow layout.
//!
//! [`AlignedFlowLayout`] takes the default frames of a [`FlowLayout`] and
//! moves every cell horizontally so each row reads like left- or
//! right-aligned text. Vertical positions and sizes are never changed.
//!
//! # Placement
//!
//! For each cell the positioner looks at its *neighbor toward the axis*: the
//! previous item of the section for left alignment, the next one for right
//! alignment. Then:
//!
//! - If there is no such neighbor, or the neighbor's default frame lies in
//!   a different row (see [`row`](crate::row)), the cell is the one closest
//!   to the axis and is flushed against it.
//! - Otherwise the cell is packed against the neighbor's *aligned* frame,
//!   leaving [`FlowMetrics::minimum_inter_item_spacing`] between them.
//!
//! The second case depends on the neighbor's aligned frame, so resolution
//! walks toward the axis until it finds the row's anchor item and then
//! places items back outward. The walk never visits more items than the
//! section holds.
//!
//! While the axis cannot be resolved (right alignment before the container
//! has a width) cells keep their default frames.
//!
//! [`FlowMetrics::minimum_inter_item_spacing`]: crate::flow::FlowMetrics::minimum_inter_item_spacing

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::alignment::{AlignmentAxis, HorizontalAlignment};
use crate::flow::{FlowLayout, FlowMetrics};
use crate::item::{ItemKey, LayoutAttributes};
use crate::row::RowProbe;
use crate::trace::{
    BatchBeginEvent, BatchEndEvent, ItemMissingEvent, ItemPlacedEvent, PlacementTally, Tracer,
};

/// How a cell's aligned frame was derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Flushed against the alignment axis.
    Axis,
    /// Packed against the aligned frame of `neighbor`.
    Adjacent {
        /// The neighbor toward the axis.
        neighbor: ItemKey,
    },
    /// Left at its default frame because the axis is unresolved.
    Unaligned,
}

/// A flow layout whose rows are aligned to the left or right edge.
///
/// Wraps any [`FlowLayout`], owned or borrowed (`&T` implements the trait
/// too). Alignment is per instance and defaults to
/// [`HorizontalAlignment::Left`].
///
/// # Usage
///
/// ```rust,ignore
/// let mut layout = AlignedFlowLayout::new(&engine);
/// layout.set_alignment(HorizontalAlignment::Right);
/// for attrs in layout.position_items(viewport) {
///     draw(attrs.key, attrs.frame);
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct AlignedFlowLayout<F> {
    flow: F,
    alignment: HorizontalAlignment,
}

impl<F: FlowLayout> AlignedFlowLayout<F> {
    /// Creates a left-aligned layout over `flow`.
    #[must_use]
    pub fn new(flow: F) -> Self {
        Self::with_alignment(flow, HorizontalAlignment::default())
    }

    /// Creates a layout over `flow` with the given alignment.
    #[must_use]
    pub fn with_alignment(flow: F, alignment: HorizontalAlignment) -> Self {
        Self { flow, alignment }
    }

    /// The alignment applied to every row.
    #[inline]
    #[must_use]
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Changes the alignment for subsequent queries.
    #[inline]
    pub fn set_alignment(&mut self, alignment: HorizontalAlignment) {
        self.alignment = alignment;
    }

    /// The wrapped base layout.
    #[inline]
    #[must_use]
    pub fn flow(&self) -> &F {
        &self.flow
    }

    /// Mutable access to the wrapped base layout.
    #[inline]
    pub fn flow_mut(&mut self) -> &mut F {
        &mut self.flow
    }

    /// Unwraps the base layout.
    #[inline]
    #[must_use]
    pub fn into_flow(self) -> F {
        self.flow
    }

    /// The axis rows are currently aligned against, if it can be resolved.
    #[must_use]
    pub fn alignment_axis(&self) -> Option<AlignmentAxis> {
        let metrics = self.flow.metrics();
        AlignmentAxis::resolve(
            self.alignment,
            metrics.container_width,
            metrics.section_inset,
        )
    }

    /// Aligned attributes of the item at `key`.
    ///
    /// Returns `None` if the base layout has no such item. If the axis is
    /// unresolved the default attributes are returned unchanged.
    #[must_use]
    pub fn position_item(&self, key: ItemKey) -> Option<LayoutAttributes> {
        self.position_item_traced(key, &mut Tracer::none())
    }

    /// Like [`position_item`](Self::position_item), reporting to `tracer`.
    pub fn position_item_traced(
        &self,
        key: ItemKey,
        tracer: &mut Tracer<'_>,
    ) -> Option<LayoutAttributes> {
        self.place_item_traced(key, tracer).map(|(attrs, _)| attrs)
    }

    /// Aligned frame of the item at `key`.
    #[must_use]
    pub fn frame_for_item(&self, key: ItemKey) -> Option<Rect> {
        self.position_item(key).map(|attrs| attrs.frame)
    }

    /// Aligned attributes of the item at `key` together with how they were
    /// derived.
    #[must_use]
    pub fn place_item(&self, key: ItemKey) -> Option<(LayoutAttributes, Placement)> {
        self.place_item_traced(key, &mut Tracer::none())
    }

    fn place_item_traced(
        &self,
        key: ItemKey,
        tracer: &mut Tracer<'_>,
    ) -> Option<(LayoutAttributes, Placement)> {
        let Some(default) = self.flow.default_attributes(key) else {
            tracer.item_missing(&ItemMissingEvent { key });
            return None;
        };
        let (placed, placement) = match Resolver::new(&self.flow, self.alignment) {
            Some(mut resolver) => resolver.place(default, tracer),
            None => (default, Placement::Unaligned),
        };
        tracer.item_placed(&ItemPlacedEvent {
            key,
            default_frame: default.frame,
            frame: placed.frame,
            placement,
        });
        Some((placed, placement))
    }

    /// Aligned attributes of every element intersecting `viewport`.
    ///
    /// Elements come back in the base layout's order. Cells are repositioned
    /// exactly as [`position_item`](Self::position_item) would; other
    /// categories pass through untouched.
    #[must_use]
    pub fn position_items(&self, viewport: Rect) -> Vec<LayoutAttributes> {
        self.position_items_traced(viewport, &mut Tracer::none())
    }

    /// Like [`position_items`](Self::position_items), reporting to `tracer`.
    pub fn position_items_traced(
        &self,
        viewport: Rect,
        tracer: &mut Tracer<'_>,
    ) -> Vec<LayoutAttributes> {
        tracer.batch_begin(&BatchBeginEvent {
            viewport,
            alignment: self.alignment,
        });

        let mut elements = self.flow.default_attributes_in_rect(viewport);
        // Shared across the batch so rows are walked once; dropped afterwards.
        let mut resolver = Resolver::new(&self.flow, self.alignment);
        let mut tally = PlacementTally::default();

        for attrs in elements.iter_mut().filter(|attrs| attrs.is_cell()) {
            let key = attrs.key;
            let Some(default) = self.flow.default_attributes(key) else {
                tracer.item_missing(&ItemMissingEvent { key });
                continue;
            };
            let (placed, placement) = match &mut resolver {
                Some(resolver) => resolver.place(default, tracer),
                None => (default, Placement::Unaligned),
            };
            attrs.frame = placed.frame;
            tally.record(placement);
            tracer.item_placed(&ItemPlacedEvent {
                key,
                default_frame: default.frame,
                frame: placed.frame,
                placement,
            });
        }

        tracer.batch_end(&BatchEndEvent {
            viewport,
            elements: elements.len(),
            tally,
        });
        elements
    }
}

/// Per-query state: the resolved axis plus frames aligned so far.
struct Resolver<'f, F> {
    flow: &'f F,
    metrics: FlowMetrics,
    axis: AlignmentAxis,
    resolved: BTreeMap<ItemKey, (Rect, Placement)>,
}

impl<'f, F: FlowLayout> Resolver<'f, F> {
    fn new(flow: &'f F, alignment: HorizontalAlignment) -> Option<Self> {
        let metrics = flow.metrics();
        let axis = AlignmentAxis::resolve(alignment, metrics.container_width, metrics.section_inset)?;
        Some(Self {
            flow,
            metrics,
            axis,
            resolved: BTreeMap::new(),
        })
    }

    /// Default attributes of the item between `key` and the axis, if any.
    fn neighbor(&self, key: ItemKey) -> Option<LayoutAttributes> {
        let neighbor = match self.axis.side {
            HorizontalAlignment::Left => key.previous(),
            HorizontalAlignment::Right => key.next(self.flow.item_count(key.section)),
        }?;
        self.flow.default_attributes(neighbor)
    }

    /// The neighbor toward the axis, if it shares `attrs`' row.
    fn row_neighbor(&self, attrs: &LayoutAttributes) -> Option<LayoutAttributes> {
        let probe = RowProbe::new(&self.metrics, attrs.frame);
        self.neighbor(attrs.key)
            .filter(|neighbor| probe.contains(neighbor.frame))
    }

    /// Origin x that packs `frame` against an already aligned neighbor.
    fn packed_x0(&self, frame: Rect, neighbor: Rect) -> f64 {
        let spacing = self.metrics.minimum_inter_item_spacing;
        match self.axis.side {
            HorizontalAlignment::Left => neighbor.x1 + spacing,
            HorizontalAlignment::Right => neighbor.x0 - spacing - frame.width(),
        }
    }

    fn place(
        &mut self,
        default: LayoutAttributes,
        tracer: &mut Tracer<'_>,
    ) -> (LayoutAttributes, Placement) {
        if let Some(&(frame, placement)) = self.resolved.get(&default.key) {
            #[cfg(feature = "trace-rich")]
            tracer.row_walk(&crate::trace::RowWalkEvent {
                key: default.key,
                steps: 0,
                reused: true,
                truncated: false,
            });
            return (LayoutAttributes { frame, ..default }, placement);
        }

        // Walk toward the axis, collecting row members that still need a
        // frame, until the row ends or a member is already resolved.
        // Neighbor indices move strictly toward the section edge, so a
        // consistent base layout never reaches `bound`; it is a backstop
        // against one whose answers contradict `item_count`.
        let bound = self
            .flow
            .item_count(default.key.section)
            .max(default.key.index.saturating_add(1));
        let mut pending: Vec<LayoutAttributes> = Vec::new();
        let mut anchor: Option<(ItemKey, Rect)> = None;
        let mut truncated = false;
        loop {
            let current = pending.last().copied().unwrap_or(default);
            let Some(neighbor) = self.row_neighbor(&current) else {
                break;
            };
            if let Some(&(frame, _)) = self.resolved.get(&neighbor.key) {
                anchor = Some((neighbor.key, frame));
                break;
            }
            if pending.len() + 1 >= bound {
                truncated = true;
                break;
            }
            pending.push(neighbor);
        }

        #[cfg(feature = "trace-rich")]
        tracer.row_walk(&crate::trace::RowWalkEvent {
            key: default.key,
            steps: pending.len() + usize::from(anchor.is_some()),
            reused: anchor.is_some(),
            truncated,
        });
        #[cfg(not(feature = "trace-rich"))]
        {
            _ = (tracer, truncated);
        }

        let mut previous = anchor;
        for attrs in pending.iter().rev() {
            previous = Some((attrs.key, self.align(*attrs, previous).0.frame));
        }
        self.align(default, previous)
    }

    /// Aligns one item given the aligned frame of its neighbor toward the
    /// axis (`None` for the row's first item), and records the result.
    fn align(
        &mut self,
        attrs: LayoutAttributes,
        neighbor: Option<(ItemKey, Rect)>,
    ) -> (LayoutAttributes, Placement) {
        let (x0, placement) = match neighbor {
            None => (self.axis.flush_x0(attrs.frame.width()), Placement::Axis),
            Some((key, frame)) => (
                self.packed_x0(attrs.frame, frame),
                Placement::Adjacent { neighbor: key },
            ),
        };
        let placed = attrs.with_x0(x0);
        self.resolved.insert(attrs.key, (placed.frame, placement));
        (placed, placement)
    }
}
