//! Toggle thumb travel

/// Track and thumb measurements of a toggle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbGeometry {
    pub track_width: f32,
    pub thumb_width: f32,
    pub horizontal_padding: f32,
}

impl ThumbGeometry {
    pub const fn new(track_width: f32, thumb_width: f32, horizontal_padding: f32) -> Self {
        Self {
            track_width,
            thumb_width,
            horizontal_padding,
        }
    }

    pub fn travel(&self) -> f32 {
        compute_travel(self)
    }
}

/// Distance the thumb moves between its off and on positions
///
/// `max(track - thumb - 2 * padding, 0)`. Negative and non-finite inputs
/// count as zero, so misconfigured styles yield no travel instead of a
/// negative offset.
pub fn compute_travel(geometry: &ThumbGeometry) -> f32 {
    let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let track = sanitize(geometry.track_width);
    let thumb = sanitize(geometry.thumb_width);
    let padding = sanitize(geometry.horizontal_padding);
    (track - thumb - 2.0 * padding).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_switch_travel() {
        assert_eq!(compute_travel(&ThumbGeometry::new(44.0, 20.0, 3.0)), 18.0);
        assert_eq!(compute_travel(&ThumbGeometry::new(52.0, 24.0, 4.0)), 20.0);
    }

    #[test]
    fn test_travel_clamps_when_thumb_does_not_fit() {
        for (track, thumb, padding) in [
            (20.0, 20.0, 1.0),
            (10.0, 20.0, 0.0),
            (30.0, 10.0, 10.5),
            (0.0, 0.0, 0.1),
        ] {
            assert!(thumb + 2.0 * padding > track);
            assert_eq!(
                compute_travel(&ThumbGeometry::new(track, thumb, padding)),
                0.0,
                "track {track}, thumb {thumb}, padding {padding}"
            );
        }
    }

    #[test]
    fn test_negative_and_non_finite_inputs() {
        assert_eq!(compute_travel(&ThumbGeometry::new(-10.0, 4.0, 0.0)), 0.0);
        assert_eq!(compute_travel(&ThumbGeometry::new(40.0, -4.0, 0.0)), 40.0);
        assert_eq!(compute_travel(&ThumbGeometry::new(f32::NAN, 4.0, 0.0)), 0.0);
        assert_eq!(
            compute_travel(&ThumbGeometry::new(40.0, 20.0, f32::INFINITY)),
            20.0
        );
    }
}
