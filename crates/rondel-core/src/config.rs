use std::ops::RangeInclusive;

use crate::color::ActiveColor;

/// Diameter range for inactive markers and the inner pointer.
pub const MIN_SIZE_RANGE: RangeInclusive<f64> = 4.0..=40.0;
/// Diameter range an active marker reaches at the end of its cycle.
pub const MAX_SIZE_RANGE: RangeInclusive<f64> = 20.0..=120.0;
/// Max-size adjustments move in coarser steps than the other sliders.
pub const MAX_SIZE_STEP: f64 = 5.0;
/// Outer ring radius, as a fraction of the canvas size.
pub const ORBIT_FRAC_RANGE: RangeInclusive<f64> = 0.1..=0.5;
/// Middle ring placement, as an integer percentage of the orbit.
pub const RING_RATIO_PCT_RANGE: RangeInclusive<u16> = 20..=95;

/// The six tunables of the clock, mutated by key presses between frames
/// and read by the geometry engine each frame.
///
/// The nudge methods clamp to the documented ranges, the way slider
/// widgets would. The engine itself never validates: out-of-range values
/// produce unusual but well-defined geometry. `max_size >= min_size` is
/// likewise left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    /// Diameter of every inactive marker and of the inner pointer.
    pub min_size: f64,
    /// Diameter the active marker grows to as its driver reaches 59.
    pub max_size: f64,
    /// Radius of the outer (hour) ring.
    pub orbit: f64,
    /// Middle ring placement as an integer percentage of `orbit`.
    pub ring_ratio_pct: u16,
    /// Whether the second-hand ring is computed and drawn.
    pub show_inner_ring: bool,
    /// Fill color for active markers.
    pub active_color: ActiveColor,
}

impl ClockConfig {
    /// Defaults for a given canvas size (orbit sits at 38% of it).
    pub fn for_canvas(canvas_size: f64) -> Self {
        Self {
            min_size: 18.0,
            max_size: 70.0,
            orbit: canvas_size * 0.38,
            ring_ratio_pct: 58,
            show_inner_ring: true,
            active_color: ActiveColor::default(),
        }
    }

    /// Ring ratio as a fraction in [0.20, 0.95].
    pub fn ring_ratio(&self) -> f64 {
        f64::from(self.ring_ratio_pct) / 100.0
    }

    /// Radius of the middle (minute) ring.
    pub fn middle_ring_radius(&self) -> f64 {
        self.orbit * self.ring_ratio()
    }

    /// Radius of the inner (second) ring, always the innermost.
    pub fn inner_ring_radius(&self) -> f64 {
        self.orbit * self.ring_ratio() / 2.0
    }

    /// Adjust the inactive-marker diameter, clamped to [4, 40].
    pub fn nudge_min_size(&mut self, delta: f64) {
        self.min_size =
            (self.min_size + delta).clamp(*MIN_SIZE_RANGE.start(), *MIN_SIZE_RANGE.end());
    }

    /// Adjust the active-marker full diameter, clamped to [20, 120].
    pub fn nudge_max_size(&mut self, delta: f64) {
        self.max_size =
            (self.max_size + delta).clamp(*MAX_SIZE_RANGE.start(), *MAX_SIZE_RANGE.end());
    }

    /// Adjust the outer ring radius, clamped to [0.1, 0.5] of the canvas.
    pub fn nudge_orbit(&mut self, delta: f64, canvas_size: f64) {
        self.orbit = (self.orbit + delta).clamp(
            canvas_size * ORBIT_FRAC_RANGE.start(),
            canvas_size * ORBIT_FRAC_RANGE.end(),
        );
    }

    /// Adjust the ring ratio percentage, clamped to [20, 95].
    pub fn nudge_ring_ratio(&mut self, delta: i16) {
        self.ring_ratio_pct = self
            .ring_ratio_pct
            .saturating_add_signed(delta)
            .clamp(*RING_RATIO_PCT_RANGE.start(), *RING_RATIO_PCT_RANGE.end());
    }

    /// Show or hide the second-hand ring.
    pub fn toggle_inner_ring(&mut self) {
        self.show_inner_ring = !self.show_inner_ring;
    }

    /// Switch to the other active-color swatch.
    pub fn toggle_active_color(&mut self) {
        self.active_color = self.active_color.toggle();
    }
}
