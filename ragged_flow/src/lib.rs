// Copyright 2026 the Ragged Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference flow engine for ragged.
//!
//! [`FlowEngine`] implements [`FlowLayout`](ragged_core::flow::FlowLayout)
//! the way platform flow layouts usually behave: greedy line wrapping,
//! justified lines, lone items centered, optional section headers. It gives
//! [`AlignedFlowLayout`](ragged_core::layout::AlignedFlowLayout) something to
//! correct in tests and demos, and serves hosts that have no flow engine of
//! their own.
//!
//! - [`FlowEngine`]: sections of item sizes laid out into default frames
//! - [`FlowConfig`]: container width, insets, spacing, header height
//! - [`sketch_ascii`]: one text line per row, for eyeballing results

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod sketch;

pub use config::FlowConfig;
pub use engine::FlowEngine;
pub use sketch::sketch_ascii;

#[cfg(test)]
mod alignment_tests;
