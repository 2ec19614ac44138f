use super::style::{balance_label, font, white, with_alpha};
use super::{glow, text, PaintResult};
use crate::constants::*;
use orbit_core::{Bubble, GravityWell, StreamLine};
use std::f64::consts::TAU;
use web_sys as web;

pub fn paint(ctx: &web::CanvasRenderingContext2d, well: &GravityWell, width: f64, height: f64) -> PaintResult {
    for stream in well.streams() {
        // either end may have left the group since the stream started
        if let Some((from, to)) = well.stream_endpoints(stream) {
            paint_stream(ctx, stream, from, to)?;
        }
    }
    for bubble in well.bubbles() {
        paint_bubble(ctx, bubble)?;
    }

    ctx.set_text_baseline("alphabetic");
    text(
        ctx,
        WELL_INSTRUCTION,
        width / 2.0,
        height - WELL_INSTRUCTION_BOTTOM,
        &font("", CAPTION_PX, FONT_SANS),
        &white(0.25),
    )
}

fn paint_stream(
    ctx: &web::CanvasRenderingContext2d,
    stream: &StreamLine,
    from: &Bubble,
    to: &Bubble,
) -> PaintResult {
    let delta = to.position - from.position;
    let dist = delta.length();
    if dist <= f32::EPSILON {
        return Ok(());
    }
    let n = delta / dist;
    let start = from.position + n * from.radius;
    let end = to.position - n * to.radius;
    let (sx, sy, ex, ey) = (start.x as f64, start.y as f64, end.x as f64, end.y as f64);
    let opacity = stream.opacity as f64;

    for p in 0..STREAM_PARTICLES {
        let t = (stream.progress as f64 + p as f64 / STREAM_PARTICLES as f64) % 1.0;
        let size = STREAM_PARTICLE_SIZE * (1.0 - (t - 0.5).abs() * 2.0) * opacity;
        if size <= 0.0 {
            continue;
        }
        ctx.begin_path();
        ctx.arc(sx + (ex - sx) * t, sy + (ey - sy) * t, size, 0.0, TAU)?;
        ctx.set_fill_style_str(&white(0.4 * stream.opacity));
        ctx.fill();
    }

    let (nx, ny) = (n.x as f64, n.y as f64);
    ctx.begin_path();
    ctx.move_to(sx, sy);
    ctx.quadratic_curve_to(
        (sx + ex) / 2.0 + ny * STREAM_BEND,
        (sy + ey) / 2.0 - nx * STREAM_BEND,
        ex,
        ey,
    );
    ctx.set_stroke_style_str(&white(0.15 * stream.opacity));
    ctx.set_line_width(2.0);
    ctx.stroke();
    Ok(())
}

fn paint_bubble(ctx: &web::CanvasRenderingContext2d, bubble: &Bubble) -> PaintResult {
    let (x, y, r) = (
        bubble.position.x as f64,
        bubble.position.y as f64,
        bubble.radius as f64,
    );
    if r <= 0.0 {
        return Ok(());
    }
    let color = bubble.user.color.as_str();

    glow(
        ctx,
        x,
        y,
        r * 0.5,
        r * BUBBLE_GLOW_SPREAD,
        &with_alpha(color, 0.19),
        &with_alpha(color, 0.0),
    )?;

    let body = ctx.create_radial_gradient(x - r * 0.2, y - r * 0.2, 0.0, x, y, r)?;
    body.add_color_stop(0.0, &with_alpha(color, 0.87))?;
    body.add_color_stop(1.0, &with_alpha(color, 0.53))?;
    ctx.set_fill_style_canvas_gradient(&body);
    ctx.begin_path();
    ctx.arc(x, y, r, 0.0, TAU)?;
    ctx.fill();
    ctx.set_stroke_style_str(&with_alpha(color, 0.38));
    ctx.set_line_width(1.5);
    ctx.stroke();

    ctx.set_text_baseline("middle");
    text(
        ctx,
        &bubble.user.name,
        x,
        y - 6.0,
        &font("bold", (r * 0.35).max(BUBBLE_NAME_MIN_PX), FONT_SANS),
        "white",
    )?;
    text(
        ctx,
        &balance_label(bubble.user.balance),
        x,
        y + 10.0,
        &font("", (r * 0.28).max(BUBBLE_BALANCE_MIN_PX), FONT_MONO),
        &white(0.7),
    )
}
