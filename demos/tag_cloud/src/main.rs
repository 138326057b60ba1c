// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two sections of text tags, right-aligned, with every layout event traced.
//!
//! Events go to both a
//! [`PrettyPrintSink`](ragged_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](ragged_debug::recorder::RecorderSink); the recording is
//! exported as JSON once the frames have been printed.

use std::fs::File;
use std::io::BufWriter;

use kurbo::{Rect, Size};
use ragged_core::alignment::HorizontalAlignment;
use ragged_core::layout::AlignedFlowLayout;
use ragged_core::trace::{
    BatchBeginEvent, BatchEndEvent, ItemMissingEvent, ItemPlacedEvent, RowWalkEvent, TraceSink,
    Tracer,
};
use ragged_flow::{FlowConfig, FlowEngine, sketch_ascii};

use ragged_debug::pretty::PrettyPrintSink;
use ragged_debug::recorder::RecorderSink;

const CONTAINER_WIDTH: f64 = 320.0;
const TAG_HEIGHT: f64 = 28.0;
/// Rough advance of one character at the tag font size.
const CHAR_WIDTH: f64 = 7.5;
const TAG_PADDING: f64 = 16.0;

const SECTIONS: [&[&str]; 2] = [
    &[
        "When you",
        "eliminate",
        "the impossible,",
        "whatever remains,",
        "however improbable,",
        "must be",
        "the truth.",
    ],
    &[
        "Of all the souls",
        "I have",
        "encountered",
        "in my travels,",
        "his",
        "was the most…",
        "human.",
    ],
];

/// Forwards every event to two sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Tee<'_> {
    fn on_item_placed(&mut self, e: &ItemPlacedEvent) {
        self.pretty.on_item_placed(e);
        self.recorder.on_item_placed(e);
    }

    fn on_item_missing(&mut self, e: &ItemMissingEvent) {
        self.pretty.on_item_missing(e);
        self.recorder.on_item_missing(e);
    }

    fn on_batch_begin(&mut self, e: &BatchBeginEvent) {
        self.pretty.on_batch_begin(e);
        self.recorder.on_batch_begin(e);
    }

    fn on_batch_end(&mut self, e: &BatchEndEvent) {
        self.pretty.on_batch_end(e);
        self.recorder.on_batch_end(e);
    }

    fn on_row_walk(&mut self, e: &RowWalkEvent) {
        self.pretty.on_row_walk(e);
        self.recorder.on_row_walk(e);
    }
}

fn tag_size(text: &str) -> Size {
    let chars = text.chars().count();
    let chars = u32::try_from(chars).unwrap_or(u32::MAX);
    Size::new(f64::from(chars) * CHAR_WIDTH + TAG_PADDING, TAG_HEIGHT)
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    // -- base layout -------------------------------------------------------
    let mut engine = FlowEngine::new(FlowConfig::tags().with_container_width(CONTAINER_WIDTH));
    for tags in SECTIONS {
        engine.push_section(tags.iter().copied().map(tag_size));
    }
    let content = engine.content_size();

    // -- aligned pass ------------------------------------------------------
    let layout = AlignedFlowLayout::with_alignment(&engine, HorizontalAlignment::Right);
    let viewport = Rect::from_origin_size((0.0, 0.0), content);
    let elements = {
        let mut tee = Tee {
            pretty: &mut pretty,
            recorder: &mut recorder,
        };
        layout.position_items_traced(viewport, &mut Tracer::new(&mut tee))
    };

    // -- frames ------------------------------------------------------------
    println!();
    for attrs in &elements {
        let label = if attrs.is_cell() {
            SECTIONS[attrs.key.section][attrs.key.index]
        } else {
            "<header>"
        };
        let f = attrs.frame;
        println!(
            "{:?} {:>7.1} {:>7.1} {:>7.1} {:>7.1}  {label}",
            attrs.key, f.x0, f.y0, f.x1, f.y1
        );
    }
    println!();
    println!("{}", sketch_ascii(&elements, CONTAINER_WIDTH, 64));
    println!();

    // -- export JSON -------------------------------------------------------
    let path = "tag_cloud_trace.json";
    let file = File::create(path).expect("failed to create tag_cloud_trace.json");
    let mut writer = BufWriter::new(file);
    ragged_debug::json::export(recorder.as_bytes(), &mut writer)
        .expect("failed to write trace JSON");

    println!("Wrote {path} ({} elements)", elements.len());
}
