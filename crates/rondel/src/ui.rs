//! Presentation adapter: draws a [`FrameGeometry`] on a braille canvas.
//!
//! The geometry engine computes positions in a y-down screen space; the
//! canvas widget's y axis points up, so every point is flipped here and
//! nowhere else.

use ratatui::{
    layout::Rect,
    style::Color,
    symbols,
    widgets::canvas::{Canvas, Circle, Context, Points},
    Frame,
};
use rondel_core::{FrameGeometry, Marker};

const BACKGROUND: Color = Color::Rgb(0x2A, 0x2A, 0x2A);
const GUIDE: Color = Color::Rgb(0x37, 0x37, 0x37);
const CENTER_DOT: Color = Color::Rgb(0x46, 0x46, 0x46);
const INACTIVE_HOUR: Color = Color::Rgb(0xB9, 0xB9, 0xB9);
// Inactive minute markers are fainter than the hour markers so the two
// rings stay distinguishable at braille resolution.
const INACTIVE_MINUTE: Color = Color::Rgb(0x55, 0x55, 0x55);

/// Render one frame of clock geometry into `area`.
pub fn render_clock(frame: &mut Frame, area: Rect, geometry: &FrameGeometry, active_color: Color) {
    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .background_color(BACKGROUND)
        .x_bounds([0.0, crate::CANVAS_SIZE])
        .y_bounds([0.0, crate::CANVAS_SIZE])
        .paint(|ctx| paint(ctx, geometry, active_color));
    frame.render_widget(canvas, area);
}

fn paint(ctx: &mut Context, geometry: &FrameGeometry, active_color: Color) {
    let c = crate::CANVAS_SIZE / 2.0;

    // Orbit guide rings
    ctx.draw(&Circle {
        x: c,
        y: c,
        radius: geometry.guide_radii.outer,
        color: GUIDE,
    });
    ctx.draw(&Circle {
        x: c,
        y: c,
        radius: geometry.guide_radii.middle,
        color: GUIDE,
    });
    if let Some(inner) = geometry.guide_radii.inner {
        ctx.draw(&Circle {
            x: c,
            y: c,
            radius: inner,
            color: GUIDE,
        });
    }

    // Center dot
    fill_circle(ctx, c, c, 2.5, CENTER_DOT);

    for marker in &geometry.outer_markers {
        draw_marker(ctx, marker, INACTIVE_HOUR, active_color);
    }
    for marker in &geometry.middle_markers {
        draw_marker(ctx, marker, INACTIVE_MINUTE, active_color);
    }
    // The second pointer is always drawn filled, like an active marker.
    if let Some(marker) = &geometry.inner_marker {
        let (x, y) = flip(marker.x, marker.y);
        fill_circle(ctx, x, y, marker.diameter / 2.0, active_color);
    }
}

fn draw_marker(ctx: &mut Context, marker: &Marker, inactive_color: Color, active_color: Color) {
    let (x, y) = flip(marker.x, marker.y);
    if marker.is_active {
        fill_circle(ctx, x, y, marker.diameter / 2.0, active_color);
    } else {
        ctx.draw(&Circle {
            x,
            y,
            radius: marker.diameter / 2.0,
            color: inactive_color,
        });
    }
}

/// Geometry space has y growing downward; the canvas grows upward.
fn flip(x: f64, y: f64) -> (f64, f64) {
    (x, crate::CANVAS_SIZE - y)
}

/// The canvas only strokes outlines, so a filled disc is concentric
/// circles down to a center point.
fn fill_circle(ctx: &mut Context, x: f64, y: f64, radius: f64, color: Color) {
    let mut r = radius;
    while r > 0.0 {
        ctx.draw(&Circle {
            x,
            y,
            radius: r,
            color,
        });
        r -= 2.0;
    }
    ctx.draw(&Points {
        coords: &[(x, y)],
        color,
    });
}
