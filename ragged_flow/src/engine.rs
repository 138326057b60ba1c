// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reference flow engine.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Rect, Size};
use ragged_core::flow::{FlowLayout, FlowMetrics};
use ragged_core::item::{ItemKey, LayoutAttributes};

use crate::config::FlowConfig;

/// A flow layout that fills rows edge to edge.
///
/// Items of each section are wrapped greedily into lines that fit the
/// content width. A line with several items is justified: the first item
/// sits on the left inset, the last on the right inset, and leftover space
/// is shared evenly between them. A line with a single item is centered.
/// Items are centered vertically within their line.
///
/// While the container width is unknown each section is laid out as one
/// unwrapped line, packed from the left inset.
///
/// Frames are recomputed eagerly whenever the engine is mutated, so queries
/// are cheap lookups.
#[derive(Clone, Debug, Default)]
pub struct FlowEngine {
    config: FlowConfig,
    sections: Vec<Vec<Size>>,

    // -- Computed by relayout --
    headers: Vec<Option<Rect>>,
    frames: Vec<Vec<Rect>>,
    content_height: f64,
}

impl FlowEngine {
    /// Creates an empty engine.
    ///
    /// # Panics
    ///
    /// Panics if `config` has negative spacing, header height, or container
    /// width.
    #[must_use]
    pub fn new(config: FlowConfig) -> Self {
        config.validate();
        Self {
            config,
            ..Self::default()
        }
    }

    /// The current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Replaces the configuration and recomputes all frames.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`new`](Self::new).
    pub fn set_config(&mut self, config: FlowConfig) {
        config.validate();
        self.config = config;
        self.relayout();
    }

    /// Sets the container width (`None` for unmeasured) and recomputes all
    /// frames.
    ///
    /// # Panics
    ///
    /// Panics if `width` is negative.
    pub fn set_container_width(&mut self, width: Option<f64>) {
        self.set_config(FlowConfig {
            container_width: width,
            ..self.config
        });
    }

    /// Appends a section with the given item sizes and returns its index.
    pub fn push_section(&mut self, sizes: impl IntoIterator<Item = Size>) -> usize {
        self.sections.push(sizes.into_iter().collect());
        self.relayout();
        self.sections.len() - 1
    }

    /// Changes the size of one item.
    ///
    /// Returns `false` (and changes nothing) if there is no item at `key`.
    pub fn set_item_size(&mut self, key: ItemKey, size: Size) -> bool {
        let Some(slot) = self
            .sections
            .get_mut(key.section)
            .and_then(|items| items.get_mut(key.index))
        else {
            return false;
        };
        *slot = size;
        self.relayout();
        true
    }

    /// Removes every section.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.relayout();
    }

    /// Number of sections.
    #[inline]
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total size of the laid-out content.
    ///
    /// The width is the container width, or the widest unwrapped line while
    /// the container is unmeasured.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let width = self.config.container_width.unwrap_or_else(|| {
            self.frames
                .iter()
                .flatten()
                .map(|frame| frame.x1 + self.config.section_inset.x1)
                .fold(0.0, f64::max)
        });
        Size::new(width, self.content_height)
    }

    /// Default frame of the header of `section`, if headers are enabled.
    #[must_use]
    pub fn header_frame(&self, section: usize) -> Option<Rect> {
        self.headers.get(section).copied().flatten()
    }

    fn relayout(&mut self) {
        let config = self.config;
        let inset = config.section_inset;
        let content_width = config.content_width();
        let spacing = config.minimum_inter_item_spacing;

        self.headers.clear();
        self.frames.clear();
        let mut y = 0.0;

        for sizes in &self.sections {
            if config.header_height > 0.0 {
                let width = config.container_width.unwrap_or(0.0);
                self.headers
                    .push(Some(Rect::new(0.0, y, width, y + config.header_height)));
                y += config.header_height;
            } else {
                self.headers.push(None);
            }
            y += inset.y0;

            let mut frames = Vec::with_capacity(sizes.len());
            let lines = wrap_lines(sizes, content_width, spacing);
            for (line_index, line) in lines.iter().enumerate() {
                if line_index > 0 {
                    y += config.minimum_line_spacing;
                }
                let items = &sizes[line.clone()];
                let line_height = items.iter().map(|size| size.height).fold(0.0, f64::max);
                let xs = arrange_line(items, inset.x0, content_width, spacing);
                for (size, x) in items.iter().zip(xs) {
                    let top = y + (line_height - size.height) / 2.0;
                    frames.push(Rect::new(x, top, x + size.width, top + size.height));
                }
                y += line_height;
            }

            y += inset.y1;
            self.frames.push(frames);
        }
        self.content_height = y;
    }
}

/// Splits `sizes` into lines no wider than `content_width`.
///
/// Every line holds at least one item, even if that item is wider than the
/// content. Without a width everything goes on one line.
fn wrap_lines(sizes: &[Size], content_width: Option<f64>, spacing: f64) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0.0;
    for (index, size) in sizes.iter().enumerate() {
        let needed = if index == start {
            size.width
        } else {
            used + spacing + size.width
        };
        if index > start && content_width.is_some_and(|limit| needed > limit) {
            lines.push(start..index);
            start = index;
            used = size.width;
        } else {
            used = needed;
        }
    }
    if start < sizes.len() {
        lines.push(start..sizes.len());
    }
    lines
}

/// Origin x of each item on one line.
fn arrange_line(items: &[Size], left: f64, content_width: Option<f64>, spacing: f64) -> Vec<f64> {
    let total: f64 = items.iter().map(|size| size.width).sum();
    let (start, gap) = match (content_width, items.len()) {
        (None, _) => (left, spacing),
        (Some(width), 1) => (left + (width - total) / 2.0, 0.0),
        (Some(width), count) => (left, (width - total) / (count - 1) as f64),
    };

    let mut xs = Vec::with_capacity(items.len());
    let mut cursor = start;
    for size in items {
        xs.push(cursor);
        cursor += size.width + gap;
    }
    xs
}

impl FlowLayout for FlowEngine {
    fn default_attributes(&self, key: ItemKey) -> Option<LayoutAttributes> {
        let frame = *self.frames.get(key.section)?.get(key.index)?;
        Some(LayoutAttributes::cell(key, frame))
    }

    fn default_attributes_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes> {
        let mut out = Vec::new();
        for (section, frames) in self.frames.iter().enumerate() {
            if let Some(header) = self.header_frame(section) {
                if overlaps(header, rect) {
                    out.push(LayoutAttributes::supplementary(
                        ItemKey::new(section, 0),
                        header,
                    ));
                }
            }
            for (index, frame) in frames.iter().enumerate() {
                if overlaps(*frame, rect) {
                    out.push(LayoutAttributes::cell(ItemKey::new(section, index), *frame));
                }
            }
        }
        out
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    fn metrics(&self) -> FlowMetrics {
        FlowMetrics {
            container_width: self.config.container_width,
            section_inset: self.config.section_inset,
            minimum_inter_item_spacing: self.config.minimum_inter_item_spacing,
        }
    }
}

/// Positive-area overlap.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
