// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petdock Animation: headless animated scalars.
//!
//! This crate models the animation backend the widget and sheet drive:
//! - [`AnimatedValue`]: a scalar that can be set directly or driven by a
//!   [`Motion`] (tween, spring, or endless loop).
//! - [`Animator`]: a keyed collection of values where each
//!   [`Animator::animate`] call forms a batch and returns a
//!   [`CompletionToken`]. [`Animator::tick`] reports each batch once all its
//!   members settle, so "run this after the animation" becomes explicit
//!   sequencing on the caller's side instead of nested callbacks.
//!
//! Nothing here reads a clock. The host calls [`Animator::tick`] once per
//! frame with a millisecond timestamp, which keeps every animation
//! deterministic under test.
//!
//! ## Example
//!
//! ```rust
//! use petdock_animation::{Animator, Motion, TimingSpec};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Channel {
//!     Opacity,
//! }
//!
//! let mut animator = Animator::new();
//! animator.set(Channel::Opacity, 0.0);
//! let token = animator.animate(
//!     [(Channel::Opacity, Motion::timing(1.0, TimingSpec::linear(200)))],
//!     0,
//! );
//!
//! assert!(animator.tick(100).is_empty());
//! assert_eq!(animator.get(Channel::Opacity), 0.5);
//!
//! let done = animator.tick(200);
//! assert_eq!(done[0].token, token);
//! assert!(done[0].finished);
//! ```

mod animator;
mod easing;
mod spec;
mod value;

pub use animator::{Animator, Completion, CompletionToken, Completions};
pub use easing::Easing;
pub use spec::{LoopLeg, Motion, SpringSpec, TimingSpec};
pub use value::{AnimatedValue, Step};
