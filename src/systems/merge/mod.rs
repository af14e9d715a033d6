//! Merge/Split - repeated contacts fuse two bodies, a timer splits them again
//!
//! SEPARATE -> STREAK (counter 1..threshold) -> MERGED -> SEPARATE (split)
//!
//! The streak counters and the single pending split timer are owned by
//! `MergeState`, which the world passes by `&mut` into every step.

mod pair_counter;
mod split_timer;

pub use pair_counter::{PairCounter, PairKey};
pub use split_timer::SplitTimer;

use crate::body::Body;
use crate::domain::{PairKeyMode, PhysicsSettings};

pub struct MergeState {
    counters: PairCounter,
    split: SplitTimer,
    mode: PairKeyMode,
    threshold: u32,
    split_delay_ms: f64,
}

impl MergeState {
    pub fn new(settings: &PhysicsSettings) -> Self {
        Self {
            counters: PairCounter::new(),
            split: SplitTimer::new(),
            mode: settings.pair_key_mode,
            threshold: settings.merge_threshold,
            split_delay_ms: settings.split_delay_ms,
        }
    }

    pub fn set_pair_key_mode(&mut self, mode: PairKeyMode) {
        self.mode = mode;
    }

    pub fn pair_key_mode(&self) -> PairKeyMode {
        self.mode
    }

    /// Count one more contact between `active` and `other`.
    ///
    /// Returns true when the pair just reached the merge threshold; its
    /// counter entry is dropped in that case.
    pub fn record_contact(&mut self, active: usize, other: usize) -> bool {
        let key = PairKey::new(active, other, self.mode);
        let count = self.counters.bump(key);
        if count >= self.threshold {
            self.counters.remove(key);
            return true;
        }
        false
    }

    /// Re-arm the split timer; a pending split is replaced, not queued.
    pub fn arm_split(&mut self) {
        self.split.arm(self.split_delay_ms);
    }

    /// Let `elapsed_ms` pass. True when the pending split is due now.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        self.split.advance(elapsed_ms)
    }

    pub fn split_pending(&self) -> bool {
        self.split.is_armed()
    }

    pub fn counters(&self) -> &PairCounter {
        &self.counters
    }

    /// Drop every streak and any pending split.
    pub fn reset(&mut self) {
        self.counters.clear();
        self.split.disarm();
    }
}

/// Fuse `absorbed` into `absorber`.
///
/// Area is kept (r = sqrt(r1² + r2²)), masses add, colors average. The
/// absorber's own pre-merge look is not saved anywhere, so a later split
/// leaves it merged.
pub fn merge_into(absorber: &mut Body, absorbed: &mut Body) {
    absorber.radius = (absorber.radius * absorber.radius + absorbed.radius * absorbed.radius).sqrt();
    absorber.color = absorber.color.mix(absorbed.color);
    absorber.mass += absorbed.mass;
    absorbed.absorbed = true;
}

/// Split: bring every absorbed body back to its creation radius and color,
/// then forget all streaks. Returns how many bodies came back.
pub fn explode(bodies: &mut [Body], state: &mut MergeState) -> u32 {
    let mut restored = 0;
    for body in bodies.iter_mut().filter(|b| b.absorbed) {
        body.restore();
        restored += 1;
    }
    state.reset();
    restored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rgb;

    fn ball(radius: f64, color: u32, mass: f64) -> Body {
        Body::new(0.0, 0.0, radius, Rgb::from_packed(color), mass, 0.0)
    }

    #[test]
    fn merge_keeps_area_adds_mass_mixes_color() {
        let mut a = ball(3.0, 0x000000, 0.2);
        let mut b = ball(4.0, 0xffffff, 0.3);
        merge_into(&mut a, &mut b);

        assert_eq!(a.radius, 5.0);
        assert!((a.mass - 0.5).abs() < 1e-12);
        assert_eq!(a.color.to_hex(), "#7f7f7f");
        assert!(b.absorbed);
        assert_eq!(b.radius, 4.0);
    }

    #[test]
    fn fifth_contact_triggers_merge() {
        let mut state = MergeState::new(&PhysicsSettings::default());
        for _ in 0..4 {
            assert!(!state.record_contact(0, 1));
        }
        assert_eq!(state.counters().get(PairKey::new(0, 1, PairKeyMode::Ordered)), Some(4));
        assert!(state.record_contact(0, 1));
        assert!(state.counters().is_empty());
        // The streak starts over after a merge.
        assert!(!state.record_contact(0, 1));
    }

    #[test]
    fn ordered_keys_split_streaks_by_direction() {
        let mut state = MergeState::new(&PhysicsSettings::default());
        for _ in 0..3 {
            state.record_contact(0, 1);
            state.record_contact(1, 0);
        }
        assert_eq!(state.counters().len(), 2);
        assert!(!state.record_contact(0, 1));
    }

    #[test]
    fn canonical_keys_share_one_streak() {
        let settings = PhysicsSettings {
            pair_key_mode: PairKeyMode::Canonical,
            ..PhysicsSettings::default()
        };
        let mut state = MergeState::new(&settings);
        for _ in 0..2 {
            assert!(!state.record_contact(0, 1));
            assert!(!state.record_contact(1, 0));
        }
        assert_eq!(state.counters().len(), 1);
        assert!(state.record_contact(1, 0));
    }

    #[test]
    fn explode_restores_only_absorbed_bodies_and_clears_all_streaks() {
        let mut bodies = vec![ball(3.0, 0x000000, 1.0), ball(4.0, 0xffffff, 1.0), ball(2.0, 0x102030, 1.0)];
        let mut state = MergeState::new(&PhysicsSettings::default());
        state.record_contact(2, 0);
        state.record_contact(1, 2);

        let (left, right) = bodies.split_at_mut(1);
        merge_into(&mut left[0], &mut right[0]);
        state.arm_split();

        assert_eq!(explode(&mut bodies, &mut state), 1);
        assert!(!bodies[1].absorbed);
        assert_eq!(bodies[1].radius, 4.0);
        assert_eq!(bodies[1].color, Rgb::from_packed(0xffffff));
        // The absorber keeps what it gained.
        assert_eq!(bodies[0].radius, 5.0);
        assert_eq!(bodies[0].mass, 2.0);
        assert!(state.counters().is_empty());
        assert!(!state.split_pending());
    }
}
