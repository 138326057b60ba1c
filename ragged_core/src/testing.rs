// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`FlowLayout`] with hand-written frames, for unit tests.

use alloc::vec::Vec;

use kurbo::{Insets, Rect};

use crate::flow::{FlowLayout, FlowMetrics};
use crate::item::{ItemKey, LayoutAttributes};

#[derive(Clone, Debug)]
pub(crate) struct FixedFlow {
    pub(crate) metrics: FlowMetrics,
    pub(crate) elements: Vec<LayoutAttributes>,
}

impl FixedFlow {
    /// Width 300, insets 10/10, spacing 8.
    pub(crate) fn new() -> Self {
        Self {
            metrics: FlowMetrics {
                container_width: Some(300.0),
                section_inset: Insets::new(10.0, 0.0, 10.0, 0.0),
                minimum_inter_item_spacing: 8.0,
            },
            elements: Vec::new(),
        }
    }

    pub(crate) fn cell(mut self, section: usize, index: usize, frame: Rect) -> Self {
        self.elements
            .push(LayoutAttributes::cell(ItemKey::new(section, index), frame));
        self
    }

    pub(crate) fn header(mut self, section: usize, frame: Rect) -> Self {
        self.elements
            .push(LayoutAttributes::supplementary(ItemKey::new(section, 0), frame));
        self
    }

    pub(crate) fn decoration(mut self, section: usize, frame: Rect) -> Self {
        self.elements
            .push(LayoutAttributes::decoration(ItemKey::new(section, 0), frame));
        self
    }

    /// One justified row of widths 80, 60, 100 at y 0..30, then a lone
    /// 50-wide item centered at y 40..70.
    pub(crate) fn three_and_one() -> Self {
        Self::new()
            .cell(0, 0, Rect::new(10.0, 0.0, 90.0, 30.0))
            .cell(0, 1, Rect::new(110.0, 0.0, 170.0, 30.0))
            .cell(0, 2, Rect::new(190.0, 0.0, 290.0, 30.0))
            .cell(0, 3, Rect::new(125.0, 40.0, 175.0, 70.0))
    }
}

impl FlowLayout for FixedFlow {
    fn default_attributes(&self, key: ItemKey) -> Option<LayoutAttributes> {
        self.elements
            .iter()
            .find(|attrs| attrs.is_cell() && attrs.key == key)
            .copied()
    }

    fn default_attributes_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes> {
        self.elements
            .iter()
            .filter(|attrs| {
                let f = attrs.frame;
                f.x0 < rect.x1 && f.x1 > rect.x0 && f.y0 < rect.y1 && f.y1 > rect.y0
            })
            .copied()
            .collect()
    }

    fn item_count(&self, section: usize) -> usize {
        self.elements
            .iter()
            .filter(|attrs| attrs.is_cell() && attrs.key.section == section)
            .count()
    }

    fn metrics(&self) -> FlowMetrics {
        self.metrics
    }
}
