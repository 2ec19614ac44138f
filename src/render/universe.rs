use super::style::{font, ripple_stroke, white, with_alpha};
use super::{fill_circle, glow, PaintResult};
use crate::constants::*;
use orbit_core::Universe;
use std::f64::consts::TAU;
use web_sys as web;

pub fn paint(ctx: &web::CanvasRenderingContext2d, universe: &Universe) -> PaintResult {
    let (w, h) = (universe.width() as f64, universe.height() as f64);
    let time_ms = universe.time_ms();

    let sky = if universe.wallet_mode() { SKY_WALLET } else { SKY_COSMOS };
    let (fx, fy) = (w * 0.5, h * SKY_FOCUS_Y);
    let bg = ctx.create_radial_gradient(fx, fy, 0.0, fx, fy, (w * SKY_REACH).max(1.0))?;
    bg.add_color_stop(0.0, sky[0])?;
    bg.add_color_stop(1.0, sky[1])?;
    ctx.set_fill_style_canvas_gradient(&bg);
    ctx.fill_rect(0.0, 0.0, w, h);

    if universe.shows_starfield() {
        for star in universe.stars() {
            fill_circle(
                ctx,
                star.x as f64,
                star.y as f64,
                star.radius as f64,
                &white(star.alpha(time_ms)),
            )?;
        }
        let (nx, ny) = (w * NEBULA_CENTER.0, h * NEBULA_CENTER.1);
        let nebula = ctx.create_radial_gradient(nx, ny, 0.0, nx, ny, (w * NEBULA_REACH).max(1.0))?;
        nebula.add_color_stop(0.0, "rgba(100,140,255,0.06)")?;
        nebula.add_color_stop(0.5, "rgba(80,60,180,0.03)")?;
        nebula.add_color_stop(1.0, "rgba(0,0,0,0)")?;
        ctx.set_fill_style_canvas_gradient(&nebula);
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    for orb in universe.orbs() {
        let color = orb.category.color();
        let (x, y) = (orb.x as f64, orb.y as f64);
        let r = orb.pulsed_radius(time_ms).max(0.0) as f64;
        glow(
            ctx,
            x,
            y,
            r * 0.3,
            r * ORB_GLOW_SPREAD,
            &with_alpha(color, 0.25),
            &with_alpha(color, 0.0),
        )?;
        fill_circle(ctx, x, y, r, &with_alpha(color, ORB_CORE_ALPHA))?;
        if orb.shows_glyph() {
            ctx.set_font(&font("", orb.radius as f64 * 0.9, FONT_SANS));
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            ctx.fill_text(orb.category.glyph(), x, y)?;
        }
    }

    for ripple in universe.ripples().iter().filter(|r| r.visible()) {
        ctx.begin_path();
        let radius = ripple.radius.max(0.0) as f64;
        ctx.arc(ripple.x as f64, ripple.y as f64, radius, 0.0, TAU)?;
        ctx.set_stroke_style_str(&ripple_stroke(&ripple.color, ripple.opacity));
        ctx.set_line_width(ripple.stroke_width() as f64);
        ctx.stroke();
    }
    Ok(())
}
