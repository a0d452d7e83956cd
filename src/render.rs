//! Draw hand-off to an external rendering surface
//!
//! The simulation never draws. Once per frame the driver calls [`draw_frame`],
//! which walks the state in layer order and issues exactly one primitive per
//! live entity, followed by the score overlay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DRONE_SPRITE_SIZE, ORDNANCE_SPRITE_SIZE};
use crate::sim::body::BodyKind;
use crate::sim::geometry::Aabb;
use crate::sim::state::{GameState, ScoreTable};
use crate::sim::target::TargetKind;

/// 8-bit RGB color
pub type Rgb = [u8; 3];

pub const WHITE: Rgb = [255, 255, 255];
pub const RED: Rgb = [255, 0, 0];
pub const TEAL: Rgb = [0, 255, 255];

/// Score overlay placement
const OVERLAY_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
const OVERLAY_LINE_HEIGHT: f32 = 30.0;

/// Image assets, loaded and scaled by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Bomb,
    Bullet,
    Plane,
}

impl Sprite {
    /// Size the sprite is scaled to
    pub fn size(&self) -> Vec2 {
        match self {
            Sprite::Bomb | Sprite::Bullet => Vec2::splat(ORDNANCE_SPRITE_SIZE),
            Sprite::Plane => Vec2::splat(DRONE_SPRITE_SIZE),
        }
    }
}

/// Drawing primitives a frontend must provide
pub trait Surface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb);
    fn fill_rect(&mut self, rect: Aabb, color: Rgb);
    fn blit(&mut self, sprite: Sprite, top_left: Vec2);
    fn text(&mut self, line: &str, at: Vec2, color: Rgb);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle { center: Vec2, radius: f32, color: Rgb },
    Polygon { points: Vec<Vec2>, color: Rgb },
    Rect { rect: Aabb, color: Rgb },
    Sprite { sprite: Sprite, top_left: Vec2 },
    Text { line: String, at: Vec2, color: Rgb },
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawList {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        self.commands.push(DrawCmd::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_rect(&mut self, rect: Aabb, color: Rgb) {
        self.commands.push(DrawCmd::Rect { rect, color });
    }

    fn blit(&mut self, sprite: Sprite, top_left: Vec2) {
        self.commands.push(DrawCmd::Sprite { sprite, top_left });
    }

    fn text(&mut self, line: &str, at: Vec2, color: Rgb) {
        self.commands.push(DrawCmd::Text {
            line: line.to_string(),
            at,
            color,
        });
    }
}

/// Score overlay lines, top to bottom. The hits line only appears when
/// something can shoot back.
pub fn score_lines(score: &ScoreTable, show_hits: bool) -> Vec<(String, Rgb)> {
    let mut lines = vec![
        (format!("Destroyed: {}", score.destroyed), WHITE),
        (format!("Shells used: {}", score.shells_used), WHITE),
    ];
    if show_hits {
        lines.push((format!("Got hit: {}", score.hits_taken), WHITE));
    }
    lines.push((format!("Total: {}", score.score()), RED));
    lines
}

/// Draw one frame: shells, ordnance, targets, drone, platforms, score
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    for shell in &state.shells {
        surface.fill_circle(shell.pos, shell.radius, shell.color);
    }

    for piece in &state.ordnance {
        let sprite = match piece.kind {
            BodyKind::Bullet => Sprite::Bullet,
            BodyKind::Bomb | BodyKind::Shell => Sprite::Bomb,
        };
        surface.blit(sprite, piece.pos);
    }

    for target in &state.targets {
        match target.kind {
            TargetKind::Oscillating { size, .. } => {
                surface.fill_rect(Aabb::new(target.pos, size), target.color)
            }
            TargetKind::Stationary { radius }
            | TargetKind::Drifting { radius, .. }
            | TargetKind::Diagonal { radius, .. } => {
                surface.fill_circle(target.pos, radius, target.color)
            }
        }
    }

    if let Some(drone) = &state.drone {
        surface.blit(Sprite::Plane, drone.pos);
    }

    surface.fill_polygon(&state.player.barrel(), state.player.color);
    if let Some(rival) = &state.rival {
        surface.fill_polygon(&rival.barrel(), rival.color);
    }

    let lines = score_lines(&state.score, state.config.has_hostiles());
    for (i, (line, color)) in lines.iter().enumerate() {
        let at = OVERLAY_ORIGIN + Vec2::new(0.0, OVERLAY_LINE_HEIGHT * i as f32);
        surface.text(line, at, *color);
    }
}
