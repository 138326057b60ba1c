// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment sides and the axis rows are aligned against.

use kurbo::Insets;

/// Which edge of the container items are flushed against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Ragged-right: each row starts at the left inset.
    #[default]
    Left,
    /// Ragged-left: each row ends at the right inset.
    Right,
}

/// A vertical line that the axis-adjacent item of every row touches.
///
/// For [`Left`](HorizontalAlignment::Left) alignment the item's left edge
/// lies on the axis; for [`Right`](HorizontalAlignment::Right) its right edge
/// does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignmentAxis {
    /// Which side of the axis items are placed on.
    pub side: HorizontalAlignment,
    /// Horizontal position of the axis in content coordinates.
    pub x: f64,
}

impl AlignmentAxis {
    /// Resolves the axis for `alignment` within a container.
    ///
    /// Left alignment only needs the left inset and is always defined. Right
    /// alignment needs the container width and returns `None` while it is
    /// unknown.
    #[must_use]
    pub fn resolve(
        alignment: HorizontalAlignment,
        container_width: Option<f64>,
        section_inset: Insets,
    ) -> Option<Self> {
        let x = match alignment {
            HorizontalAlignment::Left => section_inset.x0,
            HorizontalAlignment::Right => container_width? - section_inset.x1,
        };
        Some(Self {
            side: alignment,
            x,
        })
    }

    /// Returns the origin x that puts an item of `width` flush against the
    /// axis.
    #[inline]
    #[must_use]
    pub fn flush_x0(&self, width: f64) -> f64 {
        match self.side {
            HorizontalAlignment::Left => self.x,
            HorizontalAlignment::Right => self.x - width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inset() -> Insets {
        Insets::new(10.0, 0.0, 12.0, 0.0)
    }

    #[test]
    fn left_axis_sits_on_left_inset() {
        let axis = AlignmentAxis::resolve(HorizontalAlignment::Left, Some(300.0), inset());
        assert_eq!(
            axis,
            Some(AlignmentAxis {
                side: HorizontalAlignment::Left,
                x: 10.0
            })
        );
    }

    #[test]
    fn left_axis_needs_no_width() {
        let axis = AlignmentAxis::resolve(HorizontalAlignment::Left, None, inset());
        assert_eq!(axis.map(|a| a.x), Some(10.0));
    }

    #[test]
    fn right_axis_sits_inside_right_inset() {
        let axis = AlignmentAxis::resolve(HorizontalAlignment::Right, Some(300.0), inset());
        assert_eq!(axis.map(|a| a.x), Some(288.0));
    }

    #[test]
    fn right_axis_without_width_is_unresolved() {
        assert_eq!(
            AlignmentAxis::resolve(HorizontalAlignment::Right, None, inset()),
            None
        );
    }

    #[test]
    fn flush_origin_depends_on_side() {
        let left = AlignmentAxis {
            side: HorizontalAlignment::Left,
            x: 10.0,
        };
        let right = AlignmentAxis {
            side: HorizontalAlignment::Right,
            x: 290.0,
        };
        assert_eq!(left.flush_x0(80.0), 10.0);
        assert_eq!(right.flush_x0(80.0), 210.0);
    }

    #[test]
    fn default_is_left() {
        assert_eq!(HorizontalAlignment::default(), HorizontalAlignment::Left);
    }
}
