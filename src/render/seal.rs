use super::style::{font, rgba, white};
use super::{fill_circle, stroke_circle, text, PaintResult};
use crate::constants::*;
use orbit_core::Seal;
use std::f64::consts::{FRAC_PI_2, PI};
use web_sys as web;

/// Ring centre and base radius for a `width`×`height` seal canvas.
pub fn geometry(width: f64, height: f64) -> (f64, f64, f64) {
    let zone_top = height * SEAL_ZONE_TOP;
    let cy = zone_top + (height - zone_top) / 2.0 - 20.0;
    (width / 2.0, cy, width.min(height) * SEAL_RING_FRACTION)
}

pub fn paint(ctx: &web::CanvasRenderingContext2d, seal: &Seal, width: f64, height: f64) -> PaintResult {
    let state = seal.state();
    let hold = state.hold_progress as f64;
    let shatter = state.shatter_progress as f64;
    let done = state.completed;
    let zone_top = height * SEAL_ZONE_TOP;
    let (cx, cy, base_radius) = geometry(width, height);

    ctx.begin_path();
    ctx.move_to(0.0, zone_top);
    ctx.line_to(width, zone_top);
    ctx.set_stroke_style_str(&white(0.06));
    ctx.set_line_width(1.0);
    ctx.stroke();

    let zone = ctx.create_linear_gradient(0.0, zone_top, 0.0, height);
    zone.add_color_stop(0.0, "rgba(8,8,12,0.95)")?;
    zone.add_color_stop(1.0, "rgba(3,3,5,0.98)")?;
    ctx.set_fill_style_canvas_gradient(&zone);
    ctx.fill_rect(0.0, zone_top, width, height - zone_top);

    ctx.set_text_baseline("alphabetic");
    text(
        ctx,
        if done { SEAL_TITLE_DONE } else { SEAL_TITLE },
        cx,
        zone_top - 30.0,
        &font("", 12.0, FONT_SANS),
        &white(0.4),
    )?;

    let ring_radius = if done {
        base_radius * (1.0 - shatter * SEAL_RING_SHRINK)
    } else {
        base_radius
    };
    stroke_circle(ctx, cx, cy, ring_radius, &white(0.08), SEAL_RING_WIDTH)?;

    if hold > 0.0 && ring_radius > 0.0 {
        ctx.begin_path();
        ctx.arc(cx, cy, ring_radius, -FRAC_PI_2, -FRAC_PI_2 + hold * 2.0 * PI)?;
        let (stroke, line_width) = if done {
            (rgba(SEAL_ACCENT, (0.7 - shatter * 0.5) as f32), SEAL_RING_WIDTH)
        } else {
            (white((0.4 + hold * 0.4) as f32), SEAL_RING_WIDTH + hold * 3.0)
        };
        ctx.set_stroke_style_str(&stroke);
        ctx.set_line_width(line_width);
        ctx.set_line_cap("round");
        ctx.stroke();
    }

    if done && shatter > 0.0 {
        let fill = rgba(SEAL_ACCENT, (0.6 * (1.0 - shatter)) as f32);
        for p in seal.particles() {
            let d = ring_radius - p.speed as f64 * shatter;
            let angle = p.angle as f64;
            fill_circle(
                ctx,
                cx + angle.cos() * d,
                cy + angle.sin() * d,
                p.size as f64 * (1.0 - shatter * 0.5),
                &fill,
            )?;
        }
    }

    let print_alpha = if done { 0.3 } else { 0.15 + hold * 0.3 };
    ctx.set_stroke_style_str(&white(print_alpha as f32));
    ctx.set_line_width(1.5);
    ctx.set_line_cap("butt");
    for i in 1..=FINGERPRINT_ARCS {
        ctx.begin_path();
        ctx.arc(cx, cy, i as f64 * base_radius * 0.15, -PI * 0.7, PI * 0.7)?;
        ctx.stroke();
    }
    ctx.set_text_baseline("middle");
    text(
        ctx,
        SEAL_GLYPH,
        cx,
        cy,
        &font("", base_radius * 0.5, FONT_SANS),
        &white((print_alpha + 0.1) as f32),
    )?;

    ctx.set_text_baseline("alphabetic");
    text(
        ctx,
        if done { SEAL_CAPTION_DONE } else { SEAL_CAPTION },
        cx,
        cy + ring_radius + 40.0,
        &font("", CAPTION_PX, FONT_SANS),
        &white(0.35),
    )
}
