// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item identity and layout attributes.

use core::fmt;

use kurbo::Rect;

/// Identifies one element of a flow layout by section and index.
///
/// Keys are stable for the lifetime of the data they describe. Ordering is
/// section-major, so sorting keys yields layout order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemKey {
    /// Section the element belongs to.
    pub section: usize,
    /// Index of the element within its section.
    pub index: usize,
}

impl ItemKey {
    /// Creates a key from a section and index.
    #[inline]
    #[must_use]
    pub const fn new(section: usize, index: usize) -> Self {
        Self { section, index }
    }

    /// The key of the preceding item in the same section, if any.
    #[inline]
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index.checked_sub(1) {
            Some(index) => Some(Self::new(self.section, index)),
            None => None,
        }
    }

    /// The key of the following item in the same section, if it is below
    /// `item_count`.
    #[inline]
    #[must_use]
    pub const fn next(self, item_count: usize) -> Option<Self> {
        match self.index.checked_add(1) {
            Some(index) if index < item_count => Some(Self::new(self.section, index)),
            _ => None,
        }
    }
}

impl fmt::Debug for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemKey({}:{})", self.section, self.index)
    }
}

/// What kind of element a [`LayoutAttributes`] value describes.
///
/// Only [`Cell`](Self::Cell) elements are ever repositioned. Headers,
/// footers, and decorations keep the frame the base layout gave them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    /// An ordinary item.
    #[default]
    Cell,
    /// A supplementary view such as a section header or footer.
    Supplementary,
    /// A decoration view.
    Decoration,
}

/// Position and identity of one element, as produced by a flow layout.
///
/// Values are owned: whoever receives one may change its frame without
/// affecting the layout that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutAttributes {
    /// Which element this describes.
    pub key: ItemKey,
    /// The element's frame in content coordinates.
    pub frame: Rect,
    /// The kind of element.
    pub category: ElementCategory,
}

impl LayoutAttributes {
    /// Creates attributes for a [`Cell`](ElementCategory::Cell).
    #[inline]
    #[must_use]
    pub const fn cell(key: ItemKey, frame: Rect) -> Self {
        Self {
            key,
            frame,
            category: ElementCategory::Cell,
        }
    }

    /// Creates attributes for a [`Supplementary`](ElementCategory::Supplementary)
    /// element.
    #[inline]
    #[must_use]
    pub const fn supplementary(key: ItemKey, frame: Rect) -> Self {
        Self {
            key,
            frame,
            category: ElementCategory::Supplementary,
        }
    }

    /// Creates attributes for a [`Decoration`](ElementCategory::Decoration)
    /// element.
    #[inline]
    #[must_use]
    pub const fn decoration(key: ItemKey, frame: Rect) -> Self {
        Self {
            key,
            frame,
            category: ElementCategory::Decoration,
        }
    }

    /// Returns `true` if this element is an ordinary item.
    #[inline]
    #[must_use]
    pub const fn is_cell(&self) -> bool {
        matches!(self.category, ElementCategory::Cell)
    }

    /// Returns a copy with the frame's origin x replaced, keeping its size.
    #[inline]
    #[must_use]
    pub fn with_x0(self, x0: f64) -> Self {
        Self {
            frame: Rect::new(x0, self.frame.y0, x0 + self.frame.width(), self.frame.y1),
            ..self
        }
    }
}
