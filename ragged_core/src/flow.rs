// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract for the base flow layout that alignment is applied on top of.
//!
//! Ragged does not wrap items into rows itself. A *base* flow layout does
//! that and reports a default frame for every element: gap-filled rows,
//! lone items centered, headers spanning the section. The pieces it must
//! provide are:
//!
//! - **Element queries**: [`FlowLayout::default_attributes`] for a single
//!   key and [`FlowLayout::default_attributes_in_rect`] for a viewport.
//! - **Section sizes**: [`FlowLayout::item_count`], so the right-aligned
//!   walk knows where a section ends.
//! - **Metrics**: [`FlowMetrics`]: container width (if measured yet),
//!   section inset, and minimum inter-item spacing.
//!
//! # Ownership
//!
//! Every query returns owned values. The base layout may keep its own
//! copies cached and immutable; [`AlignedFlowLayout`] only ever modifies the
//! values it was handed.
//!
//! # Crate boundaries
//!
//! `ragged_core` owns the alignment algorithm and this contract. Hosts that
//! already have a flow engine implement [`FlowLayout`] for it; the
//! `ragged_flow` crate provides a reference engine for everyone else.
//!
//! [`AlignedFlowLayout`]: crate::layout::AlignedFlowLayout

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Insets, Rect};

use crate::item::{ItemKey, LayoutAttributes};

/// Geometry a base flow layout exposes to the aligner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowMetrics {
    /// Width of the container, or `None` before it has been measured.
    pub container_width: Option<f64>,
    /// Insets applied to every section. Only the horizontal components
    /// (`x0` left, `x1` right) affect alignment.
    pub section_inset: Insets,
    /// Spacing placed between neighboring items of a row.
    pub minimum_inter_item_spacing: f64,
}

impl FlowMetrics {
    /// Width available to items, between the left and right insets.
    ///
    /// Returns `None` while the container width is unknown.
    #[inline]
    #[must_use]
    pub fn content_width(&self) -> Option<f64> {
        self.container_width
            .map(|width| width - self.section_inset.x0 - self.section_inset.x1)
    }
}

impl Default for FlowMetrics {
    fn default() -> Self {
        Self {
            container_width: None,
            section_inset: Insets::ZERO,
            minimum_inter_item_spacing: 0.0,
        }
    }
}

/// Read-only queries against a base flow layout.
///
/// Implementations must be consistent within a layout pass: the frame
/// returned for a key by [`default_attributes`](Self::default_attributes)
/// is the frame [`default_attributes_in_rect`](Self::default_attributes_in_rect)
/// reports for it.
///
/// # Alignment pseudocode
///
/// A host's layout callback typically looks like this:
///
/// ```rust,ignore
/// fn layout_visible(&mut self, viewport: Rect) {
///     self.engine.set_container_width(self.view_width);
///     let aligned = AlignedFlowLayout::with_alignment(&self.engine, HorizontalAlignment::Right);
///     for attrs in aligned.position_items(viewport) {
///         self.place_view(attrs.key, attrs.category, attrs.frame);
///     }
/// }
/// ```
pub trait FlowLayout {
    /// Default attributes of the item at `key`, or `None` if there is no
    /// such item.
    fn default_attributes(&self, key: ItemKey) -> Option<LayoutAttributes>;

    /// Default attributes of every element whose frame intersects `rect`,
    /// in the layout's own enumeration order.
    fn default_attributes_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes>;

    /// Number of items in `section`; zero for unknown sections.
    fn item_count(&self, section: usize) -> usize;

    /// Current container geometry and spacing.
    fn metrics(&self) -> FlowMetrics;
}

impl<T: FlowLayout + ?Sized> FlowLayout for &T {
    #[inline]
    fn default_attributes(&self, key: ItemKey) -> Option<LayoutAttributes> {
        (**self).default_attributes(key)
    }

    #[inline]
    fn default_attributes_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes> {
        (**self).default_attributes_in_rect(rect)
    }

    #[inline]
    fn item_count(&self, section: usize) -> usize {
        (**self).item_count(section)
    }

    #[inline]
    fn metrics(&self) -> FlowMetrics {
        (**self).metrics()
    }
}

impl<T: FlowLayout + ?Sized> FlowLayout for Box<T> {
    #[inline]
    fn default_attributes(&self, key: ItemKey) -> Option<LayoutAttributes> {
        (**self).default_attributes(key)
    }

    #[inline]
    fn default_attributes_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes> {
        (**self).default_attributes_in_rect(rect)
    }

    #[inline]
    fn item_count(&self, section: usize) -> usize {
        (**self).item_count(section)
    }

    #[inline]
    fn metrics(&self) -> FlowMetrics {
        (**self).metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_width_subtracts_both_insets() {
        let metrics = FlowMetrics {
            container_width: Some(300.0),
            section_inset: Insets::new(10.0, 0.0, 20.0, 0.0),
            minimum_inter_item_spacing: 8.0,
        };
        assert_eq!(metrics.content_width(), Some(270.0));
    }

    #[test]
    fn content_width_unknown_without_container() {
        assert_eq!(FlowMetrics::default().content_width(), None);
    }
}
