// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded layout traces.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes a JSON array with one object per event to the given writer.
//! Every object carries an `"event"` name; batch events also carry a
//! `"batch"` counter so items can be grouped by the query that placed them.

use std::io::{self, Write};

use kurbo::Rect;
use ragged_core::item::ItemKey;
use ragged_core::layout::Placement;
use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut batch: u64 = 0;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::BatchBegin(e) => {
                batch += 1;
                events.push(json!({
                    "event": "BatchBegin",
                    "batch": batch,
                    "viewport": rect(e.viewport),
                    "alignment": format!("{:?}", e.alignment),
                }));
            }
            RecordedEvent::BatchEnd(e) => {
                events.push(json!({
                    "event": "BatchEnd",
                    "batch": batch,
                    "viewport": rect(e.viewport),
                    "elements": e.elements,
                    "tally": {
                        "axis": e.tally.axis,
                        "adjacent": e.tally.adjacent,
                        "unaligned": e.tally.unaligned,
                    }
                }));
            }
            RecordedEvent::ItemPlaced(e) => {
                events.push(json!({
                    "event": "ItemPlaced",
                    "batch": batch,
                    "key": key(e.key),
                    "default_frame": rect(e.default_frame),
                    "frame": rect(e.frame),
                    "placement": placement(e.placement),
                }));
            }
            RecordedEvent::ItemMissing(e) => {
                events.push(json!({
                    "event": "ItemMissing",
                    "batch": batch,
                    "key": key(e.key),
                }));
            }
            RecordedEvent::RowWalk(e) => {
                events.push(json!({
                    "event": "RowWalk",
                    "batch": batch,
                    "key": key(e.key),
                    "steps": e.steps,
                    "reused": e.reused,
                    "truncated": e.truncated,
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn rect(r: Rect) -> Value {
    json!([r.x0, r.y0, r.x1, r.y1])
}

fn key(k: ItemKey) -> Value {
    json!({ "section": k.section, "index": k.index })
}

fn placement(p: Placement) -> Value {
    match p {
        Placement::Axis => json!("axis"),
        Placement::Adjacent { neighbor } => json!({ "adjacent": key(neighbor) }),
        Placement::Unaligned => json!("unaligned"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use ragged_core::alignment::HorizontalAlignment;
    use ragged_core::trace::{
        BatchBeginEvent, BatchEndEvent, ItemPlacedEvent, PlacementTally, TraceSink,
    };

    #[test]
    fn export_produces_valid_json() {
        let viewport = Rect::new(0.0, 0.0, 300.0, 100.0);
        let mut rec = RecorderSink::new();
        rec.on_batch_begin(&BatchBeginEvent {
            viewport,
            alignment: HorizontalAlignment::Right,
        });
        rec.on_item_placed(&ItemPlacedEvent {
            key: ItemKey::new(0, 0),
            default_frame: Rect::new(10.0, 0.0, 90.0, 30.0),
            frame: Rect::new(34.0, 0.0, 114.0, 30.0),
            placement: Placement::Adjacent {
                neighbor: ItemKey::new(0, 1),
            },
        });
        rec.on_batch_end(&BatchEndEvent {
            viewport,
            elements: 1,
            tally: PlacementTally::default(),
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["event"], "BatchBegin");
        assert_eq!(parsed[0]["alignment"], "Right");
        assert_eq!(parsed[0]["batch"], 1);

        assert_eq!(parsed[1]["event"], "ItemPlaced");
        assert_eq!(parsed[1]["frame"][2], 114.0);
        assert_eq!(parsed[1]["placement"]["adjacent"]["index"], 1);

        assert_eq!(parsed[2]["event"], "BatchEnd");
        assert_eq!(parsed[2]["batch"], 1);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert!(parsed.is_empty());
    }
}
