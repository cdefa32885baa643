//! Twelve o'clock crossing detection
//!
//! A crossing is recognised by quadrant rather than by equality with 0°: the
//! hand must leave the quadrant just before twelve and land in the quadrant
//! just after it (or the reverse) within one tick. That tolerates any step
//! under 180°.

/// Time angle above which the hand is "just before twelve"
pub const BEFORE_TWELVE: f64 = 270.0;

/// Time angle below which the hand is "just after twelve"
pub const AFTER_TWELVE: f64 = 90.0;

/// Result of comparing two consecutive time angles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// Hand passed twelve clockwise
    Forward,
    /// Hand passed twelve counter-clockwise
    Backward,
}

impl Crossing {
    /// +1 for forward, -1 for backward
    pub fn step(self) -> i64 {
        match self {
            Crossing::Forward => 1,
            Crossing::Backward => -1,
        }
    }
}

/// Compare the previous and current time angles.
pub fn detect(prev_time: f64, time: f64) -> Option<Crossing> {
    if prev_time > BEFORE_TWELVE && time < AFTER_TWELVE {
        Some(Crossing::Forward)
    } else if prev_time < AFTER_TWELVE && time > BEFORE_TWELVE {
        Some(Crossing::Backward)
    } else {
        None
    }
}

/// Move `index` one photo in the crossing's direction, clamped to the sequence.
///
/// With zero or one photos the index stays at 0.
pub fn apply(index: usize, crossing: Crossing, photo_count: usize) -> usize {
    let last = photo_count.saturating_sub(1);
    match crossing {
        Crossing::Forward => index.saturating_add(1).min(last),
        Crossing::Backward => index.saturating_sub(1).min(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_crossing() {
        assert_eq!(detect(350.0, 10.0), Some(Crossing::Forward));
        assert_eq!(detect(271.0, 89.0), Some(Crossing::Forward));
    }

    #[test]
    fn test_backward_crossing() {
        assert_eq!(detect(10.0, 350.0), Some(Crossing::Backward));
        assert_eq!(detect(89.0, 271.0), Some(Crossing::Backward));
    }

    #[test]
    fn test_no_crossing_inside_quadrants() {
        assert_eq!(detect(30.0, 150.0), None);
        assert_eq!(detect(150.0, 270.0), None);
        assert_eq!(detect(270.0, 350.0), None);
        assert_eq!(detect(350.0, 355.0), None);
        // Boundaries themselves do not count
        assert_eq!(detect(270.0, 10.0), None);
        assert_eq!(detect(350.0, 90.0), None);
    }

    #[test]
    fn test_skipping_exact_zero_still_counts() {
        // 50° per tick at top speed never lands on 0° exactly
        assert_eq!(detect(335.0, 25.0), Some(Crossing::Forward));
    }

    #[test]
    fn test_apply_clamps() {
        assert_eq!(apply(2, Crossing::Forward, 5), 3);
        assert_eq!(apply(4, Crossing::Forward, 5), 4);
        assert_eq!(apply(0, Crossing::Backward, 5), 0);
        assert_eq!(apply(3, Crossing::Backward, 5), 2);
    }

    #[test]
    fn test_apply_degenerate_sequences() {
        for count in [0, 1] {
            assert_eq!(apply(0, Crossing::Forward, count), 0);
            assert_eq!(apply(0, Crossing::Backward, count), 0);
        }
    }

    #[test]
    fn test_step_sign() {
        assert_eq!(Crossing::Forward.step(), 1);
        assert_eq!(Crossing::Backward.step(), -1);
    }
}
