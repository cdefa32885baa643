//! Angle conventions
//!
//! Two conventions are in play. The *hand angle* is the rendering rotation,
//! measured counter-clockwise from the positive x-axis. The *time angle* puts
//! 0° at twelve o'clock and grows clockwise, like a clock face.

/// Wrap any angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Angle of a pointer around the pivot, in the hand (rendering) convention.
///
/// `x` and `y` are the pointer offset from the pivot in screen coordinates,
/// where y grows downwards. Points above the pivot give `|atan2|`, points on or
/// below it give `360 - |atan2|`. A pointer sitting exactly on the pivot
/// yields 0°.
pub fn pointer_angle(x: f64, y: f64) -> f64 {
    let theta = y.atan2(x).to_degrees().abs();
    let angle = if y < 0.0 { theta } else { 360.0 - theta };
    normalize_degrees(angle)
}

/// Convert a hand angle to a time angle (0° up, clockwise).
pub fn to_time_angle(hand_angle: f64) -> f64 {
    normalize_degrees(90.0 - hand_angle)
}

/// Convert a time angle back to a hand angle.
///
/// The mapping is its own inverse.
pub fn to_hand_angle(time_angle: f64) -> f64 {
    normalize_degrees(90.0 - time_angle)
}

/// Time angle of a pointer around the pivot.
pub fn pointer_time_angle(x: f64, y: f64) -> f64 {
    to_time_angle(pointer_angle(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_pointer_angle_cardinals() {
        // Screen y points down, so "up" is negative y
        assert!(approx(pointer_angle(1.0, 0.0), 0.0));
        assert!(approx(pointer_angle(0.0, -1.0), 90.0));
        assert!(approx(pointer_angle(-1.0, 0.0), 180.0));
        assert!(approx(pointer_angle(0.0, 1.0), 270.0));
    }

    #[test]
    fn test_pointer_angle_quadrants() {
        assert!(approx(pointer_angle(1.0, -1.0), 45.0));
        assert!(approx(pointer_angle(-1.0, -1.0), 135.0));
        assert!(approx(pointer_angle(-1.0, 1.0), 225.0));
        assert!(approx(pointer_angle(1.0, 1.0), 315.0));
    }

    #[test]
    fn test_pointer_at_pivot_is_zero() {
        let angle = pointer_angle(0.0, 0.0);
        assert!(!angle.is_nan());
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_pointer_angle_range() {
        for i in 0..720 {
            let rad = (i as f64 * 0.5).to_radians();
            let angle = pointer_angle(rad.cos() * 50.0, rad.sin() * 50.0);
            assert!((0.0..360.0).contains(&angle), "angle {} out of range", angle);
        }
    }

    #[test]
    fn test_time_angle_twelve_is_up() {
        assert!(approx(pointer_time_angle(0.0, -10.0), 0.0));
        assert!(approx(pointer_time_angle(10.0, 0.0), 90.0));
        assert!(approx(pointer_time_angle(0.0, 10.0), 180.0));
        assert!(approx(pointer_time_angle(-10.0, 0.0), 270.0));
    }

    #[test]
    fn test_time_angle_inverse() {
        for hand in [0.0, 30.0, 60.0, 90.0, 179.5, 270.0, 359.0] {
            assert!(approx(to_hand_angle(to_time_angle(hand)), hand));
        }
        assert!(approx(to_time_angle(60.0), 30.0));
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!(approx(normalize_degrees(-10.0), 350.0));
        assert!(approx(normalize_degrees(725.0), 5.0));
        assert!(normalize_degrees(-1e-18) < 360.0);
    }
}
