/// The one pending split, as a countdown in milliseconds
///
/// Advanced once per frame by the world; never more than one split is
/// outstanding.
#[derive(Clone, Copy, Debug, Default)]
pub struct SplitTimer {
    remaining_ms: Option<f64>,
}

impl SplitTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown.
    pub fn arm(&mut self, delay_ms: f64) {
        self.remaining_ms = Some(delay_ms);
    }

    pub fn disarm(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    pub fn remaining_ms(&self) -> Option<f64> {
        self.remaining_ms
    }

    /// Returns true exactly once, on the call that runs the countdown out.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        let Some(remaining) = self.remaining_ms.as_mut() else {
            return false;
        };
        // Negative or non-finite time does not move the clock.
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            *remaining -= elapsed_ms;
        }
        if *remaining <= 0.0 {
            self.remaining_ms = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut timer = SplitTimer::new();
        assert!(!timer.advance(5000.0));

        timer.arm(3000.0);
        assert!(!timer.advance(1000.0));
        assert!(!timer.advance(1999.0));
        assert!(timer.advance(1.0));
        assert!(!timer.is_armed());
        assert!(!timer.advance(1000.0));
    }

    #[test]
    fn rearming_replaces_pending_split() {
        let mut timer = SplitTimer::new();
        timer.arm(3000.0);
        assert!(!timer.advance(2500.0));
        timer.arm(3000.0);
        assert!(!timer.advance(2500.0));
        assert_eq!(timer.remaining_ms(), Some(500.0));
    }

    #[test]
    fn bad_elapsed_times_are_ignored() {
        let mut timer = SplitTimer::new();
        timer.arm(3000.0);
        assert!(!timer.advance(f64::NAN));
        assert!(!timer.advance(-500.0));
        assert!(!timer.advance(f64::INFINITY));
        assert_eq!(timer.remaining_ms(), Some(3000.0));
        assert!(timer.advance(3000.0));
    }
}
