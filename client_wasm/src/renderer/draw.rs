use game_core::{Frame, HitZone, Phase, Variant};
use glam::IVec2;
use web_sys::HtmlImageElement;

use super::hud::{self, TextLine};
use super::Renderer;

const BACKGROUND: &str = "black";
const HIT_ZONE: &str = "cyan";
const HUD_TEXT: &str = "white";
const OVERLAY_TEXT: &str = "red";
const BANNER_TEXT: &str = "yellow";

pub fn draw_frame(renderer: &Renderer, frame: &Frame) -> Result<(), String> {
    let ctx = &renderer.ctx;
    let (width, height) = renderer.size;

    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    // Arcade keeps a blank field until the first click
    let show_field = !(frame.variant == Variant::Arcade && frame.phase == Phase::Start);
    if show_field {
        draw_sprite(renderer, &renderer.bat_sprite.image, frame.bat.pos, frame.bat.size)?;
        draw_sprite(renderer, &renderer.ball_sprite.image, frame.ball.pos, frame.ball.size)?;
        draw_hit_zone(renderer, &frame.hit_zone)?;
    }

    ctx.set_font(hud::HUD_FONT);
    ctx.set_fill_style_str(HUD_TEXT);
    draw_lines(renderer, &hud::tally_lines(&frame.tally))?;

    ctx.set_fill_style_str(OVERLAY_TEXT);
    draw_lines(renderer, &hud::overlay_lines(frame.phase, frame.arena))?;

    if let Some((line, alpha)) = hud::message_banner(&frame.message, frame.arena) {
        ctx.save();
        ctx.set_global_alpha(alpha);
        ctx.set_font(hud::BANNER_FONT);
        ctx.set_fill_style_str(BANNER_TEXT);
        let result = draw_lines(renderer, std::slice::from_ref(&line));
        ctx.restore();
        result?;
    }

    Ok(())
}

fn draw_sprite(
    renderer: &Renderer,
    image: &HtmlImageElement,
    pos: IVec2,
    size: IVec2,
) -> Result<(), String> {
    renderer
        .ctx
        .draw_image_with_html_image_element_and_dw_and_dh(
            image,
            pos.x as f64,
            pos.y as f64,
            size.x as f64,
            size.y as f64,
        )
        .map_err(|e| format!("Failed to draw sprite: {:?}", e))
}

fn draw_hit_zone(renderer: &Renderer, zone: &HitZone) -> Result<(), String> {
    let ctx = &renderer.ctx;
    ctx.set_stroke_style_str(HIT_ZONE);
    ctx.set_line_width(1.0);
    match *zone {
        HitZone::Rect(aabb) => {
            let size = aabb.size();
            ctx.stroke_rect(
                aabb.min.x as f64,
                aabb.min.y as f64,
                size.x as f64,
                size.y as f64,
            );
        }
        HitZone::Circle { center, radius } => {
            ctx.begin_path();
            ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .map_err(|e| format!("Failed to trace hit zone: {:?}", e))?;
            ctx.stroke();
        }
    }
    Ok(())
}

fn draw_lines(renderer: &Renderer, lines: &[TextLine]) -> Result<(), String> {
    for line in lines {
        renderer
            .ctx
            .fill_text(&line.text, line.x, line.y)
            .map_err(|e| format!("Failed to draw text: {:?}", e))?;
    }
    Ok(())
}
