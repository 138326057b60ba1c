// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ASCII sketches of laid-out rows, for demos and test failure messages.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use ragged_core::item::LayoutAttributes;

/// Draws each row of cells as one line of text, `columns` characters wide
/// for `container_width`.
///
/// A cell spanning several columns is drawn as `[===]`; a cell narrower than
/// two columns as `#`. Rows are separated by `\n` and trailing spaces are
/// trimmed. Non-cell elements are skipped.
#[must_use]
pub fn sketch_ascii(elements: &[LayoutAttributes], container_width: f64, columns: usize) -> String {
    let mut cells: Vec<Rect> = elements
        .iter()
        .filter(|attrs| attrs.is_cell())
        .map(|attrs| attrs.frame)
        .collect();
    cells.sort_by(|a, b| a.y0.total_cmp(&b.y0).then(a.x0.total_cmp(&b.x0)));

    let mut out = String::new();
    let mut row: Vec<Rect> = Vec::new();
    let mut band = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for frame in cells {
        if frame.y0 >= band.1 && !row.is_empty() {
            push_line(&mut out, &row, container_width, columns);
            row.clear();
        }
        if row.is_empty() {
            band = (frame.y0, frame.y1);
        }
        band.1 = band.1.max(frame.y1);
        row.push(frame);
    }
    if !row.is_empty() {
        push_line(&mut out, &row, container_width, columns);
    }
    out
}

fn push_line(out: &mut String, row: &[Rect], container_width: f64, columns: usize) {
    let mut line = alloc::vec![b' '; columns];
    let column = |x: f64| -> usize {
        let scaled = (x * columns as f64 / container_width).round().max(0.0);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "column is clamped to the line width"
        )]
        let col = (scaled as usize).min(columns);
        col
    };
    for frame in row {
        let start = column(frame.x0);
        let end = column(frame.x1);
        match end.saturating_sub(start) {
            0 | 1 => {
                if let Some(slot) = line.get_mut(start) {
                    *slot = b'#';
                }
            }
            _ => {
                line[start] = b'[';
                line[start + 1..end - 1].fill(b'=');
                line[end - 1] = b']';
            }
        }
    }
    if !out.is_empty() {
        out.push('\n');
    }
    let text: String = line.iter().map(|&b| char::from(b)).collect();
    out.push_str(text.trim_end());
}
