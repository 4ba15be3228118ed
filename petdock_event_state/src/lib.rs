// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petdock Event State: small pointer state machines shared by the widget
//! and the sheet.
//!
//! Each module handles one interaction pattern that needs state across
//! several events:
//!
//! - [`drag`]: track a pointer drag, producing per-event deltas, the total
//!   gesture offset and a release velocity.
//! - [`cooldown`]: suppress repeats of an action inside a time window (for
//!   example rapid double taps opening a modal twice).
//!
//! The managers take raw positions and millisecond timestamps from the host
//! and never read a clock themselves, which keeps them deterministic under
//! test.
//!
//! This crate is `no_std`.

#![no_std]

pub mod cooldown;
pub mod drag;
