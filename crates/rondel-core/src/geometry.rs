//! Ring geometry for the clock face.
//!
//! `compute_frame` is the whole engine: a pure function from a time
//! sample, the configuration, and the canvas size to the set of markers
//! to draw. It is rebuilt from scratch every frame; at 72 markers that
//! is cheaper than any diffing scheme would be.

use crate::config::ClockConfig;
use crate::time::TimeSample;

/// Markers on the outer (hour) ring.
pub const NUM_HOURS: usize = 12;
/// Markers on the middle (minute) ring.
pub const NUM_MINUTES: usize = 60;

// Rotates index 0 to the top of the circle; trig convention would put it
// on the right. Applied to every ring.
const TOP_OFFSET_DEG: f64 = -90.0;

/// One drawable circle on a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    /// Whether this marker matches the ring's current time unit. At most
    /// one marker per ring is active, and only it grows.
    pub is_active: bool,
}

/// Radii of the faint reference circles, one per visible ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideRadii {
    pub outer: f64,
    pub middle: f64,
    /// Present only while the inner ring is shown.
    pub inner: Option<f64>,
}

/// Everything the presentation layer needs to draw one frame.
///
/// Ephemeral: built by [`compute_frame`], consumed, discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGeometry {
    /// The 12 hour markers, index 0 at the top.
    pub outer_markers: Vec<Marker>,
    /// The 60 minute markers, index 0 at the top.
    pub middle_markers: Vec<Marker>,
    /// The travelling second pointer, present iff the inner ring is shown.
    pub inner_marker: Option<Marker>,
    pub guide_radii: GuideRadii,
}

/// Linear interpolation, unclamped.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Point at `angle_deg` on a circle of `radius` around `(cx, cy)`.
///
/// Degrees convert to radians here and nowhere else; y grows downward,
/// matching the screen convention the scenarios are stated in.
fn on_circle(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Growth fraction for an active marker.
///
/// Divides by 59, not 60: the driver's last representable value must map
/// to exactly 1.0 so the marker hits full size on the last tick of its
/// unit. When the driver rolls over to 0 the size snaps back, which is
/// the intended look.
fn growth(driver: u8) -> f64 {
    f64::from(driver) / 59.0
}

/// Lay out one ring of `count` evenly spaced markers, growing the one at
/// `current` according to `driver`.
fn ring_markers(
    count: usize,
    radius: f64,
    current: usize,
    driver: u8,
    cx: f64,
    cy: f64,
    config: &ClockConfig,
) -> Vec<Marker> {
    let step = 360.0 / count as f64;
    (0..count)
        .map(|i| {
            let (x, y) = on_circle(cx, cy, radius, i as f64 * step + TOP_OFFSET_DEG);
            let is_active = i == current;
            let diameter = if is_active {
                lerp(config.min_size, config.max_size, growth(driver))
            } else {
                config.min_size
            };
            Marker {
                x,
                y,
                diameter,
                is_active,
            }
        })
        .collect()
}

/// Compute the full frame geometry for one time sample.
///
/// Deterministic and total: it reads its inputs, allocates the output,
/// and cannot fail. Out-of-range configuration values simply yield
/// unusual geometry.
pub fn compute_frame(time: TimeSample, config: &ClockConfig, canvas_size: f64) -> FrameGeometry {
    let cx = canvas_size / 2.0;
    let cy = canvas_size / 2.0;

    let middle_ring_radius = config.middle_ring_radius();
    let inner_ring_radius = config.inner_ring_radius();

    // Hours grow as minutes pass, minutes grow as seconds pass.
    let outer_markers = ring_markers(
        NUM_HOURS,
        config.orbit,
        usize::from(time.hour12),
        time.minute,
        cx,
        cy,
        config,
    );
    let middle_markers = ring_markers(
        NUM_MINUTES,
        middle_ring_radius,
        usize::from(time.minute),
        time.second,
        cx,
        cy,
        config,
    );

    // The second pointer is the finest indicator there is, so nothing
    // drives a growth animation for it: fixed size, one lap per minute.
    let inner_marker = config.show_inner_ring.then(|| {
        let angle = f64::from(time.second) * 6.0 + TOP_OFFSET_DEG;
        let (x, y) = on_circle(cx, cy, inner_ring_radius, angle);
        Marker {
            x,
            y,
            diameter: config.min_size,
            is_active: true,
        }
    });

    FrameGeometry {
        outer_markers,
        middle_markers,
        inner_marker,
        guide_radii: GuideRadii {
            outer: config.orbit,
            middle: middle_ring_radius,
            inner: config.show_inner_ring.then_some(inner_ring_radius),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: f64 = 800.0;
    const CX: f64 = 400.0;
    const CY: f64 = 400.0;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn frame_at(hour12: u8, minute: u8, second: u8) -> FrameGeometry {
        let config = ClockConfig::for_canvas(CANVAS);
        compute_frame(
            TimeSample {
                hour12,
                minute,
                second,
            },
            &config,
            CANVAS,
        )
    }

    #[test]
    fn markers_sit_at_their_ring_angles() {
        let config = ClockConfig::for_canvas(CANVAS);
        let frame = frame_at(4, 17, 42);

        for (i, marker) in frame.outer_markers.iter().enumerate() {
            let angle = (i as f64 * 30.0 - 90.0).to_radians();
            assert!(close(marker.x, CX + config.orbit * angle.cos()));
            assert!(close(marker.y, CY + config.orbit * angle.sin()));
        }
        for (i, marker) in frame.middle_markers.iter().enumerate() {
            let angle = (i as f64 * 6.0 - 90.0).to_radians();
            let r = config.middle_ring_radius();
            assert!(close(marker.x, CX + r * angle.cos()));
            assert!(close(marker.y, CY + r * angle.sin()));
        }
    }

    #[test]
    fn guide_radii_follow_the_ratio_chain() {
        let config = ClockConfig::for_canvas(CANVAS);
        let frame = frame_at(0, 0, 0);
        assert_eq!(frame.guide_radii.outer, config.orbit);
        assert!(close(frame.guide_radii.middle, config.orbit * 0.58));
        assert_eq!(frame.guide_radii.inner, Some(frame.guide_radii.middle / 2.0));
    }

    #[test]
    fn exactly_one_marker_per_ring_is_active() {
        let frame = frame_at(7, 23, 11);

        let active_hours: Vec<usize> = (0..NUM_HOURS)
            .filter(|&i| frame.outer_markers[i].is_active)
            .collect();
        assert_eq!(active_hours, vec![7]);
        let active_minutes: Vec<usize> = (0..NUM_MINUTES)
            .filter(|&i| frame.middle_markers[i].is_active)
            .collect();
        assert_eq!(active_minutes, vec![23]);

        for marker in frame
            .outer_markers
            .iter()
            .chain(frame.middle_markers.iter())
            .filter(|m| !m.is_active)
        {
            assert_eq!(marker.diameter, 18.0);
        }
    }

    #[test]
    fn active_diameter_interpolates_over_the_driver() {
        // Driver 0 is min size, driver 59 is exactly max size.
        assert_eq!(frame_at(5, 0, 0).outer_markers[5].diameter, 18.0);
        assert_eq!(frame_at(5, 59, 0).outer_markers[5].diameter, 70.0);
        assert_eq!(frame_at(0, 30, 59).middle_markers[30].diameter, 70.0);

        let mid = frame_at(5, 29, 0).outer_markers[5].diameter;
        assert!(close(mid, 18.0 + (70.0 - 18.0) * 29.0 / 59.0));
    }

    #[test]
    fn hiding_the_inner_ring_removes_pointer_and_guide() {
        let mut config = ClockConfig::for_canvas(CANVAS);
        config.show_inner_ring = false;
        let time = TimeSample {
            hour12: 1,
            minute: 2,
            second: 3,
        };
        let frame = compute_frame(time, &config, CANVAS);
        assert!(frame.inner_marker.is_none());
        assert!(frame.guide_radii.inner.is_none());
    }

    #[test]
    fn identical_inputs_yield_identical_frames() {
        assert_eq!(frame_at(9, 41, 27), frame_at(9, 41, 27));
    }

    #[test]
    fn second_pointer_wraps_forward_through_the_top() {
        let config = ClockConfig::for_canvas(CANVAS);
        let r = config.inner_ring_radius();

        // 59 * 6 - 90 = 264 degrees; the next tick lands on 270 (top),
        // a 6 degree step forward rather than a lap backward.
        let before = frame_at(0, 0, 59).inner_marker.unwrap();
        let rad = 264.0_f64.to_radians();
        assert!(close(before.x, CX + r * rad.cos()));
        assert!(close(before.y, CY + r * rad.sin()));

        let after = frame_at(0, 0, 0).inner_marker.unwrap();
        assert!(close(after.x, CX));
        assert!(close(after.y, CY - r));

        let step = (after.y - CY).atan2(after.x - CX) - (before.y - CY).atan2(before.x - CX);
        let step_deg = step.to_degrees().rem_euclid(360.0);
        assert!(close(step_deg, 6.0));
    }
}
