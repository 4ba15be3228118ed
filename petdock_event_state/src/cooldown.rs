// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cooldown guard: let an action fire at most once per time window.
//!
//! ```
//! use petdock_event_state::cooldown::Cooldown;
//!
//! let mut guard = Cooldown::new(300);
//! assert!(guard.try_fire(1_000));
//! assert!(!guard.try_fire(1_200)); // still cooling down
//! assert!(guard.try_fire(1_300));
//! ```

/// Suppresses repeats of an action inside a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    window_ms: u64,
    last_fired: Option<u64>,
}

impl Cooldown {
    /// Creates a guard with the given window, in milliseconds.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_fired: None,
        }
    }

    /// Window length in milliseconds.
    pub const fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Returns `true` if an action fired less than one window before `now_ms`.
    pub fn is_cooling(&self, now_ms: u64) -> bool {
        self.last_fired
            .is_some_and(|last| now_ms.saturating_sub(last) < self.window_ms)
    }

    /// Records a firing at `now_ms` unless still cooling down.
    ///
    /// Returns whether the action may proceed. A suppressed attempt does not
    /// extend the window.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        if self.is_cooling(now_ms) {
            return false;
        }
        self.last_fired = Some(now_ms);
        true
    }

    /// Forgets the last firing.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}

#[cfg(test)]
mod tests {
    use super::Cooldown;

    #[test]
    fn first_attempt_always_fires() {
        let mut guard = Cooldown::new(300);
        assert!(!guard.is_cooling(0));
        assert!(guard.try_fire(0));
        assert!(guard.is_cooling(299));
    }

    #[test]
    fn suppressed_attempts_do_not_extend_window() {
        let mut guard = Cooldown::new(300);
        assert!(guard.try_fire(100));
        assert!(!guard.try_fire(250));
        assert!(!guard.try_fire(399));
        assert!(guard.try_fire(400));
    }

    #[test]
    fn reset_clears_window() {
        let mut guard = Cooldown::new(300);
        assert!(guard.try_fire(100));
        guard.reset();
        assert!(guard.try_fire(101));
    }

    #[test]
    fn zero_window_never_cools() {
        let mut guard = Cooldown::new(0);
        assert!(guard.try_fire(5));
        assert!(guard.try_fire(5));
    }
}
