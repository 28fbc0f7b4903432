//! Core types and geometry for the rondel clock.
//!
//! This crate holds everything that can be computed without a terminal:
//! the configuration model, the per-frame time sample, and the geometry
//! engine that turns both into a set of drawable markers. Rendering is
//! the binary's job; nothing here issues a draw call.

mod color;
mod config;
mod geometry;
mod time;

pub use color::ActiveColor;
pub use config::{
    ClockConfig, MAX_SIZE_RANGE, MAX_SIZE_STEP, MIN_SIZE_RANGE, ORBIT_FRAC_RANGE,
    RING_RATIO_PCT_RANGE,
};
pub use geometry::{compute_frame, FrameGeometry, GuideRadii, Marker, NUM_HOURS, NUM_MINUTES};
pub use time::TimeSample;
