//! Render collaborator interface and the scene painter.
//!
//! The painter performs no layout: it hands the surface literal rectangles
//! taken from the session state, in field coordinates.

use crate::core::config::{AvatarConfig, PipeConfig};
use crate::core::geometry::{Field, Rect};
use crate::game::logic::Game;
use crate::game::types::{Avatar, Pipe};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

pub const SKY_COLOR: Rgb = Rgb::from_hex(0x70c4cd);
pub const AVATAR_COLOR: Rgb = Rgb::from_hex(0xd2bf2b);
pub const PIPE_COLOR: Rgb = Rgb::from_hex(0x73bf2d);
pub const OUTLINE_COLOR: Rgb = Rgb::from_hex(0x000000);

/// A 2D drawing surface in field coordinates.
pub trait Surface {
    fn clear_rect(&mut self, rect: Rect);
    fn set_fill_style(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: Rect);
    fn set_stroke_style(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f64);
    fn stroke_rect(&mut self, rect: Rect);
}

/// Clear the field and paint the sky.
pub fn draw_background<S: Surface + ?Sized>(surface: &mut S, field: Field) {
    let rect = field.rect();
    surface.clear_rect(rect);
    surface.set_fill_style(SKY_COLOR);
    surface.fill_rect(rect);
}

pub fn draw_avatar<S: Surface + ?Sized>(surface: &mut S, avatar: &Avatar, config: &AvatarConfig) {
    let rect = Rect::new(avatar.x, avatar.y, config.width, config.height);
    surface.set_fill_style(AVATAR_COLOR);
    surface.fill_rect(rect);
    surface.set_line_width(config.border);
    surface.set_stroke_style(OUTLINE_COLOR);
    surface.stroke_rect(rect);
}

/// Top and bottom segment rectangles of a pipe as drawn.
///
/// The top segment starts one border above the field so its upper outline is
/// hidden; the bottom segment is pushed down by one border for the same reason.
pub fn pipe_rects(pipe: &Pipe, config: &PipeConfig, field: Field) -> (Rect, Rect) {
    let top = Rect::new(pipe.x, -config.border, config.width, pipe.top_height);
    let bottom = Rect::new(
        pipe.x,
        field.height_f64() - pipe.bottom_height + config.border,
        config.width,
        pipe.bottom_height,
    );
    (top, bottom)
}

pub fn draw_pipe<S: Surface + ?Sized>(
    surface: &mut S,
    pipe: &Pipe,
    config: &PipeConfig,
    field: Field,
) {
    let (top, bottom) = pipe_rects(pipe, config, field);
    surface.set_fill_style(PIPE_COLOR);
    surface.fill_rect(top);
    surface.fill_rect(bottom);
    surface.set_line_width(config.border);
    surface.set_stroke_style(OUTLINE_COLOR);
    surface.stroke_rect(top);
    surface.stroke_rect(bottom);
}

/// Paint the avatar and every pipe on top of an already painted background.
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, game: &Game) {
    let config = game.config();
    draw_avatar(surface, &game.avatar, &config.avatar);
    for pipe in &game.pipes {
        draw_pipe(surface, pipe, &config.pipes, game.field());
    }
}
