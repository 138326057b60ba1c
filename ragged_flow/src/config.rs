// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for [`FlowEngine`](crate::FlowEngine).

use kurbo::Insets;

/// Geometry and spacing used by the reference flow engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowConfig {
    /// Width of the container, or `None` before it has been measured.
    pub container_width: Option<f64>,
    /// Insets around the items of every section. The top inset is applied
    /// below the section header.
    pub section_inset: Insets,
    /// Smallest gap between items on the same line.
    pub minimum_inter_item_spacing: f64,
    /// Gap between consecutive lines of a section.
    pub minimum_line_spacing: f64,
    /// Height of each section header; `0.0` disables headers.
    pub header_height: f64,
}

impl FlowConfig {
    /// Unmeasured container, no insets, 8-point spacing, no headers.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            container_width: None,
            section_inset: Insets {
                x0: 0.0,
                y0: 0.0,
                x1: 0.0,
                y1: 0.0,
            },
            minimum_inter_item_spacing: 8.0,
            minimum_line_spacing: 8.0,
            header_height: 0.0,
        }
    }

    /// Tag-cloud defaults: 16-point side insets, tight spacing, 24-point
    /// section headers.
    #[must_use]
    pub const fn tags() -> Self {
        Self {
            container_width: None,
            section_inset: Insets {
                x0: 16.0,
                y0: 8.0,
                x1: 16.0,
                y1: 16.0,
            },
            minimum_inter_item_spacing: 6.0,
            minimum_line_spacing: 6.0,
            header_height: 24.0,
        }
    }

    /// Returns a copy with the container width set.
    #[must_use]
    pub const fn with_container_width(self, width: f64) -> Self {
        Self {
            container_width: Some(width),
            ..self
        }
    }

    /// Width available to items, or `None` while the container is
    /// unmeasured. Never negative.
    #[must_use]
    pub fn content_width(&self) -> Option<f64> {
        self.container_width
            .map(|width| (width - self.section_inset.x0 - self.section_inset.x1).max(0.0))
    }

    pub(crate) fn validate(&self) {
        assert!(
            self.minimum_inter_item_spacing >= 0.0,
            "inter-item spacing must be non-negative"
        );
        assert!(
            self.minimum_line_spacing >= 0.0,
            "line spacing must be non-negative"
        );
        assert!(
            self.header_height >= 0.0,
            "header height must be non-negative"
        );
        if let Some(width) = self.container_width {
            assert!(width >= 0.0, "container width must be non-negative");
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self::compact()
    }
}
