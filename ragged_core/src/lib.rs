// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-aware left/right alignment for flow layouts.
//!
//! `ragged_core` turns the default output of a flow layout (rows filled
//! edge to edge, lone items centered) into left- or right-aligned rows, the
//! way ragged-right or ragged-left text is set. It is `no_std` compatible
//! (with `alloc`) and has no opinion about rendering: it answers frame
//! queries and leaves presentation to the caller.
//!
//! # Architecture
//!
//! ```text
//!   base FlowLayout (default frames, wrapping, insets, spacing)
//!       │
//!       ▼
//!   AlignmentAxis::resolve() ──► RowProbe (row membership)
//!                                    │
//!                 ┌──────────────────┘
//!                 ▼
//!   AlignedFlowLayout::position_item() ◄── position_items(viewport)
//!       │
//!       ▼
//!   aligned LayoutAttributes ──► rendering pipeline
//! ```
//!
//! **[`flow`]**: The [`FlowLayout`](flow::FlowLayout) trait a base layout
//! implements, and the [`FlowMetrics`](flow::FlowMetrics) it reports.
//!
//! **[`item`]**: Element keys, categories, and owned layout attributes.
//!
//! **[`alignment`]**: Alignment sides and the axis each row is flushed
//! against.
//!
//! **[`row`]**: Geometric inference of which row an item belongs to.
//!
//! **[`layout`]**: [`AlignedFlowLayout`](layout::AlignedFlowLayout), the
//! positioner for single items and whole viewports.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! layout instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-item
//!   row-walk events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod alignment;
pub mod flow;
pub mod item;
pub mod layout;
pub mod row;
pub mod trace;

#[cfg(test)]
mod testing;
