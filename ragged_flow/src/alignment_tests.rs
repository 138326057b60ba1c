// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aligned layouts over the reference engine.

use alloc::vec::Vec;

use kurbo::{Insets, Rect, Size};
use ragged_core::alignment::HorizontalAlignment;
use ragged_core::flow::FlowLayout;
use ragged_core::item::{ElementCategory, ItemKey, LayoutAttributes};
use ragged_core::layout::AlignedFlowLayout;

use crate::{FlowConfig, FlowEngine, sketch_ascii};

const SPACING: f64 = 8.0;
const VIEWPORT: Rect = Rect::new(0.0, 0.0, 300.0, 1000.0);

fn config() -> FlowConfig {
    FlowConfig {
        container_width: Some(300.0),
        section_inset: Insets::new(10.0, 0.0, 10.0, 0.0),
        minimum_inter_item_spacing: SPACING,
        minimum_line_spacing: 10.0,
        header_height: 0.0,
    }
}

fn engine(widths: &[f64]) -> FlowEngine {
    let mut engine = FlowEngine::new(config());
    engine.push_section(widths.iter().map(|&w| Size::new(w, 30.0)));
    engine
}

fn aligned(engine: &FlowEngine, alignment: HorizontalAlignment) -> Vec<LayoutAttributes> {
    AlignedFlowLayout::with_alignment(engine, alignment).position_items(VIEWPORT)
}

/// Cells grouped by row (default y0), in index order.
fn rows(frames: &[LayoutAttributes]) -> Vec<Vec<Rect>> {
    let mut rows: Vec<Vec<Rect>> = Vec::new();
    for attrs in frames.iter().filter(|attrs| attrs.is_cell()) {
        match rows.last_mut() {
            Some(row) if row[0].y0 == attrs.frame.y0 => row.push(attrs.frame),
            _ => rows.push(alloc::vec![attrs.frame]),
        }
    }
    rows
}

#[test]
fn scenario_left() {
    let engine = engine(&[80.0, 60.0, 100.0]);
    let lefts: Vec<f64> = aligned(&engine, HorizontalAlignment::Left)
        .iter()
        .map(|a| a.frame.x0)
        .collect();
    assert_eq!(lefts, [10.0, 98.0, 166.0]);
}

#[test]
fn scenario_right() {
    let engine = engine(&[80.0, 60.0, 100.0]);
    let rights: Vec<f64> = aligned(&engine, HorizontalAlignment::Right)
        .iter()
        .map(|a| a.frame.x1)
        .collect();
    assert_eq!(rights, [114.0, 182.0, 290.0]);
}

#[test]
fn scenario_unmeasured_right_is_default() {
    let mut engine = engine(&[80.0, 60.0, 100.0]);
    engine.set_container_width(None);
    let layout = AlignedFlowLayout::with_alignment(&engine, HorizontalAlignment::Right);
    for index in 0..3 {
        let key = ItemKey::new(0, index);
        assert_eq!(layout.position_item(key), engine.default_attributes(key));
    }
}

#[test]
fn single_item_rows_flush_left() {
    let engine = engine(&[200.0, 150.0]);
    let default = engine.default_attributes(ItemKey::new(0, 1));
    assert_eq!(default.map(|a| a.frame.x0), Some(75.0), "engine centers");
    for row in rows(&aligned(&engine, HorizontalAlignment::Left)) {
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].x0, 10.0);
    }
}

#[test]
fn single_item_rows_flush_right() {
    let engine = engine(&[200.0, 150.0]);
    for row in rows(&aligned(&engine, HorizontalAlignment::Right)) {
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].x1, 290.0);
    }
}

#[test]
fn rows_pack_left_with_minimum_spacing() {
    let engine = engine(&[120.0, 90.0, 40.0, 100.0, 70.0, 60.0, 200.0, 30.0]);
    let rows = rows(&aligned(&engine, HorizontalAlignment::Left));
    assert!(rows.len() > 1, "fixture should wrap");
    for row in rows {
        assert_eq!(row[0].x0, 10.0);
        for pair in row.windows(2) {
            assert_eq!(pair[1].x0, pair[0].x1 + SPACING);
        }
    }
}

#[test]
fn rows_pack_right_with_minimum_spacing() {
    let engine = engine(&[120.0, 90.0, 40.0, 100.0, 70.0, 60.0, 200.0, 30.0]);
    let rows = rows(&aligned(&engine, HorizontalAlignment::Right));
    assert!(rows.len() > 1, "fixture should wrap");
    for row in rows {
        assert_eq!(row[row.len() - 1].x1, 290.0);
        for pair in row.windows(2) {
            assert_eq!(pair[0].x1, pair[1].x0 - SPACING);
        }
    }
}

#[test]
fn mixed_heights_share_a_row() {
    let mut engine = FlowEngine::new(config());
    engine.push_section([
        Size::new(80.0, 40.0),
        Size::new(60.0, 12.0),
        Size::new(100.0, 30.0),
    ]);
    let frames = aligned(&engine, HorizontalAlignment::Left);
    let lefts: Vec<f64> = frames.iter().map(|a| a.frame.x0).collect();
    assert_eq!(lefts, [10.0, 98.0, 166.0]);
    assert_eq!(frames[1].frame.y0, 14.0, "vertical centering kept");
}

#[test]
fn zero_height_item_keeps_its_row_packed() {
    let mut engine = FlowEngine::new(config());
    engine.push_section([
        Size::new(80.0, 30.0),
        Size::new(60.0, 0.0),
        Size::new(100.0, 30.0),
    ]);
    let flat = engine.default_attributes(ItemKey::new(0, 1)).map(|a| a.frame);
    assert_eq!(flat, Some(Rect::new(110.0, 15.0, 170.0, 15.0)));

    let lefts: Vec<f64> = aligned(&engine, HorizontalAlignment::Left)
        .iter()
        .map(|a| a.frame.x0)
        .collect();
    assert_eq!(lefts, [10.0, 98.0, 166.0]);
    let rights: Vec<f64> = aligned(&engine, HorizontalAlignment::Right)
        .iter()
        .map(|a| a.frame.x1)
        .collect();
    assert_eq!(rights, [114.0, 182.0, 290.0]);
}

#[test]
fn changing_one_row_leaves_others_alone() {
    // Rows: [120, 120] [60, 60, 60] [120]
    let mut engine = engine(&[120.0, 120.0, 60.0, 60.0, 60.0, 120.0]);
    let untouched = [0, 1, 5].map(|i| ItemKey::new(0, i));
    let before: Vec<_> = {
        let layout = AlignedFlowLayout::with_alignment(&engine, HorizontalAlignment::Right);
        untouched.iter().map(|&k| layout.position_item(k)).collect()
    };

    assert!(engine.set_item_size(ItemKey::new(0, 3), Size::new(70.0, 30.0)));

    let layout = AlignedFlowLayout::with_alignment(&engine, HorizontalAlignment::Right);
    let after: Vec<_> = untouched.iter().map(|&k| layout.position_item(k)).collect();
    assert_eq!(before, after);
    assert_eq!(
        layout.frame_for_item(ItemKey::new(0, 2)).map(|f| f.x1),
        Some(290.0 - 60.0 - SPACING - 70.0 - SPACING)
    );
}

#[test]
fn repeated_queries_agree() {
    let engine = engine(&[120.0, 90.0, 40.0, 100.0, 70.0]);
    for alignment in [HorizontalAlignment::Left, HorizontalAlignment::Right] {
        let layout = AlignedFlowLayout::with_alignment(&engine, alignment);
        for index in 0..5 {
            let key = ItemKey::new(0, index);
            assert_eq!(layout.position_item(key), layout.position_item(key));
        }
        assert_eq!(layout.position_items(VIEWPORT), layout.position_items(VIEWPORT));
    }
}

#[test]
fn headers_pass_through() {
    let mut engine = FlowEngine::new(FlowConfig {
        header_height: 24.0,
        ..config()
    });
    engine.push_section([Size::new(50.0, 30.0)]);
    engine.push_section([Size::new(50.0, 30.0), Size::new(70.0, 30.0)]);
    for alignment in [HorizontalAlignment::Left, HorizontalAlignment::Right] {
        let headers: Vec<Rect> = aligned(&engine, alignment)
            .iter()
            .filter(|a| a.category == ElementCategory::Supplementary)
            .map(|a| a.frame)
            .collect();
        let expected: Vec<Rect> = (0..2).filter_map(|s| engine.header_frame(s)).collect();
        assert_eq!(headers, expected);
    }
}

#[test]
fn every_section_restarts_at_the_axis() {
    let mut engine = FlowEngine::new(FlowConfig {
        header_height: 24.0,
        ..config()
    });
    engine.push_section([Size::new(50.0, 30.0), Size::new(60.0, 30.0)]);
    engine.push_section([Size::new(70.0, 30.0)]);
    let layout = AlignedFlowLayout::new(&engine);
    assert_eq!(layout.frame_for_item(ItemKey::new(0, 1)).map(|f| f.x0), Some(68.0));
    assert_eq!(layout.frame_for_item(ItemKey::new(1, 0)).map(|f| f.x0), Some(10.0));
}

#[test]
fn zero_line_spacing_keeps_rows_apart() {
    let mut engine = FlowEngine::new(FlowConfig {
        minimum_line_spacing: 0.0,
        ..config()
    });
    engine.push_section([Size::new(200.0, 30.0), Size::new(150.0, 30.0)]);
    let layout = AlignedFlowLayout::new(&engine);
    assert_eq!(layout.frame_for_item(ItemKey::new(0, 1)).map(|f| f.x0), Some(10.0));
}

#[test]
fn sketch_shows_ragged_edge() {
    let engine = engine(&[80.0, 60.0, 100.0, 50.0]);
    let left = sketch_ascii(&aligned(&engine, HorizontalAlignment::Left), 300.0, 30);
    let right = sketch_ascii(&aligned(&engine, HorizontalAlignment::Right), 300.0, 30);
    assert!(left.lines().all(|l| l.starts_with(" [")), "left:\n{left}");
    assert!(right.lines().all(|l| l.ends_with("] ") || l.ends_with(']')), "right:\n{right}");
    assert_eq!(right.lines().count(), 2, "right:\n{right}");
}
