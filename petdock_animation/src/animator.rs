// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::spec::Motion;
use crate::value::{AnimatedValue, Step};

/// Identifies one batch of animations started together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompletionToken(u64);

/// Reported by [`Animator::tick`] once every member of a batch has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The batch this completion belongs to.
    pub token: CompletionToken,
    /// `true` if every member reached its target, `false` if the batch was
    /// interrupted by [`Animator::set`] or [`Animator::stop`] on a member.
    pub finished: bool,
}

/// Completions reported by one [`Animator::tick`].
pub type Completions = SmallVec<[Completion; 4]>;

#[derive(Debug)]
struct Batch<K> {
    token: CompletionToken,
    pending: SmallVec<[K; 4]>,
}

/// A set of keyed [`AnimatedValue`]s with grouped completion.
///
/// Animations started by one [`Animator::animate`] call form a batch that
/// completes when all its members reach their targets. Interrupting any
/// member (setting or stopping it, or starting a new animation on it) stops
/// the whole batch where it stands and reports it as not finished on the next
/// tick.
///
/// Keys that were never written read as `0.0`.
#[derive(Debug)]
pub struct Animator<K> {
    values: HashMap<K, AnimatedValue>,
    batches: Vec<Batch<K>>,
    interrupted: Completions,
    next_token: u64,
}

impl<K> Default for Animator<K> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            batches: Vec::new(),
            interrupted: SmallVec::new(),
            next_token: 0,
        }
    }
}

impl<K> Animator<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `key`.
    #[must_use]
    pub fn get(&self, key: K) -> f64 {
        self.values.get(&key).map_or(0.0, AnimatedValue::get)
    }

    /// Returns `true` while `key` is being driven by a motion.
    #[must_use]
    pub fn is_animating(&self, key: K) -> bool {
        self.values.get(&key).is_some_and(AnimatedValue::is_animating)
    }

    /// Jumps `key` to `value`, interrupting its batch if it has one.
    pub fn set(&mut self, key: K, value: f64) {
        self.interrupt(key);
        self.values
            .entry(key)
            .or_insert_with(|| AnimatedValue::new(value))
            .set(value);
    }

    /// Freezes `key` where it is, interrupting its batch if it has one.
    pub fn stop(&mut self, key: K) {
        self.interrupt(key);
        if let Some(value) = self.values.get_mut(&key) {
            value.stop();
        }
    }

    /// Freezes every key and interrupts every batch.
    pub fn stop_all(&mut self) {
        for batch in self.batches.drain(..) {
            self.interrupted.push(Completion {
                token: batch.token,
                finished: false,
            });
        }
        for value in self.values.values_mut() {
            value.stop();
        }
    }

    /// Starts every `(key, motion)` pair at `now_ms` as one batch.
    ///
    /// A batch with no members completes (finished) on the next tick.
    pub fn animate(
        &mut self,
        motions: impl IntoIterator<Item = (K, Motion)>,
        now_ms: u64,
    ) -> CompletionToken {
        let token = CompletionToken(self.next_token);
        self.next_token += 1;
        let mut pending = SmallVec::new();
        for (key, motion) in motions {
            self.interrupt(key);
            self.values
                .entry(key)
                .or_insert_with(|| AnimatedValue::new(0.0))
                .start(motion, now_ms);
            if !pending.contains(&key) {
                pending.push(key);
            }
        }
        self.batches.push(Batch { token, pending });
        token
    }

    /// Advances every driven value to `now_ms` and reports batches that
    /// stopped since the last tick, in the order they were started.
    pub fn tick(&mut self, now_ms: u64) -> Completions {
        let mut done: SmallVec<[K; 8]> = SmallVec::new();
        for (key, value) in &mut self.values {
            if value.advance(now_ms) == Step::Finished {
                done.push(*key);
            }
        }

        let mut completions = core::mem::take(&mut self.interrupted);
        self.batches.retain_mut(|batch| {
            batch.pending.retain(|key| !done.contains(key));
            if batch.pending.is_empty() {
                completions.push(Completion {
                    token: batch.token,
                    finished: true,
                });
                false
            } else {
                true
            }
        });
        for completion in &completions {
            log::trace!(
                "animation batch {:?} completed (finished: {})",
                completion.token,
                completion.finished
            );
        }
        completions
    }

    // Stops the batch that currently drives `key`, freezing its other members.
    fn interrupt(&mut self, key: K) {
        let Some(index) = self
            .batches
            .iter()
            .position(|batch| batch.pending.contains(&key))
        else {
            return;
        };
        let batch = self.batches.remove(index);
        for member in &batch.pending {
            if let Some(value) = self.values.get_mut(member) {
                value.stop();
            }
        }
        self.interrupted.push(Completion {
            token: batch.token,
            finished: false,
        });
    }
}
