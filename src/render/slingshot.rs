use super::style::{amount_label, font, white, with_alpha};
use super::{fill_circle, glow, stroke_circle, text, PaintResult};
use crate::constants::*;
use orbit_core::constants::SLINGSHOT_ANCHOR_INSET;
use orbit_core::{Category, Slingshot};
use std::f64::consts::{FRAC_PI_2, TAU};
use web_sys as web;

pub fn paint(ctx: &web::CanvasRenderingContext2d, sling: &Slingshot, width: f64, height: f64) -> PaintResult {
    let anchor = (width / 2.0, height - SLINGSHOT_ANCHOR_INSET as f64);
    let offset = sling.offset();
    let puck = (anchor.0 + offset.x as f64, anchor.1 - offset.y as f64);
    let tension = sling.tension() as f64;
    let category = sling.category();

    // tension line and anchor
    ctx.begin_path();
    ctx.move_to(anchor.0, anchor.1);
    ctx.line_to(puck.0, puck.1);
    ctx.set_stroke_style_str(&white((0.15 + tension * 0.6) as f32));
    ctx.set_line_width(2.0 + tension * 3.0);
    ctx.set_line_cap("round");
    ctx.stroke();
    fill_circle(
        ctx,
        anchor.0,
        anchor.1,
        ANCHOR_DOT_RADIUS + tension * 3.0,
        &white((0.3 + tension * 0.3) as f32),
    )?;

    paint_readout(ctx, sling, category, width)?;
    paint_dial(ctx, sling, anchor)?;

    // puck
    glow(
        ctx,
        puck.0,
        puck.1,
        PUCK_RADIUS,
        PUCK_RADIUS + 30.0 + tension * 40.0,
        &with_alpha(category.color(), 0.25),
        &with_alpha(category.color(), 0.0),
    )?;
    let body = ctx.create_radial_gradient(
        puck.0 - PUCK_RADIUS * 0.2,
        puck.1 - PUCK_RADIUS * 0.3,
        0.0,
        puck.0,
        puck.1,
        PUCK_RADIUS,
    )?;
    body.add_color_stop(0.0, "rgba(255,255,255,0.95)")?;
    body.add_color_stop(1.0, "rgba(200,200,220,0.85)")?;
    ctx.set_fill_style_canvas_gradient(&body);
    ctx.begin_path();
    ctx.arc(puck.0, puck.1, PUCK_RADIUS, 0.0, TAU)?;
    ctx.fill();
    ctx.set_text_baseline("middle");
    text(
        ctx,
        category.glyph(),
        puck.0,
        puck.1,
        &font("", PUCK_GLYPH_PX, FONT_SANS),
        "white",
    )?;

    let hint = if sling.is_launching() {
        Some((HINT_LAUNCHING, 0.4))
    } else if sling.hint_visible() {
        Some((HINT_PULL, 0.35))
    } else {
        None
    };
    if let Some((caption, alpha)) = hint {
        ctx.set_text_baseline("alphabetic");
        text(
            ctx,
            caption,
            width / 2.0,
            height - HINT_BOTTOM,
            &font("", CAPTION_PX, FONT_SANS),
            &white(alpha),
        )?;
    }
    Ok(())
}

fn paint_readout(
    ctx: &web::CanvasRenderingContext2d,
    sling: &Slingshot,
    category: Category,
    width: f64,
) -> PaintResult {
    let lit = sling.is_dragging() || sling.amount() > 0;
    ctx.set_global_alpha(if lit { 1.0 } else { 0.5 });
    ctx.set_text_baseline("top");
    text(
        ctx,
        &amount_label(sling.amount()),
        width / 2.0,
        AMOUNT_TOP,
        &font("700", AMOUNT_PX, FONT_MONO),
        "white",
    )?;
    let caption = format!("{} {}", category.glyph(), category.label().to_uppercase());
    text(
        ctx,
        &caption,
        width / 2.0,
        AMOUNT_TOP + AMOUNT_PX + 8.0,
        &font("600", CATEGORY_PX, FONT_SANS),
        category.color(),
    )?;
    ctx.set_global_alpha(1.0);
    Ok(())
}

fn paint_dial(ctx: &web::CanvasRenderingContext2d, sling: &Slingshot, anchor: (f64, f64)) -> PaintResult {
    ctx.save();
    ctx.translate(anchor.0, anchor.1)?;
    ctx.rotate((sling.dial_rotation_deg() as f64).to_radians())?;
    stroke_circle(ctx, 0.0, 0.0, DIAL_RADIUS, &white(0.12), 2.0)?;
    let slots = Category::ALL.len();
    for (i, slot) in Category::ALL.iter().enumerate() {
        let angle = (i as f64 / slots as f64) * TAU - FRAC_PI_2;
        let fill = if i == sling.category_index() {
            slot.color().to_string()
        } else {
            white(0.2)
        };
        fill_circle(
            ctx,
            angle.cos() * DIAL_TICK_RADIUS,
            angle.sin() * DIAL_TICK_RADIUS,
            DIAL_TICK_SIZE,
            &fill,
        )?;
    }
    fill_circle(ctx, 0.0, 0.0, DIAL_HUB_RADIUS, &white(0.5))?;
    ctx.restore();
    Ok(())
}
