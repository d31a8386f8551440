use std::collections::{HashMap, VecDeque};

use engine::{
    boxes_overlap, render_text, BoxPx, FramePainter, InputEvent, Key, PointerButton, RasterImage,
    Scene, SceneCommand,
};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, info};

pub(crate) const WINDOW_WIDTH: u32 = 800;
pub(crate) const WINDOW_HEIGHT: u32 = 800;

const BACKGROUND_COLOR: [u8; 4] = [0x90, 0xa0, 0x80, 0xff];
const SELECTED_HIGHLIGHT_COLOR: [u8; 4] = [0xa0, 0x00, 0x00, 0xff];
const TARGET_HIGHLIGHT_COLOR: [u8; 4] = [0x00, 0xa0, 0x00, 0xff];
const MATCH_ZONE_COLOR: [u8; 4] = [0xe8, 0xe0, 0x50, 0xff];
const SCORE_TEXT_COLOR: [u8; 4] = [0xf5, 0xf5, 0xeb, 0xff];
const PARTICLE_COLOR: [u8; 4] = [0xf0, 0xf0, 0xdc, 0xff];
const HIGHLIGHT_STROKE_PX: i32 = 2;

const INITIAL_POPULATION: usize = 10;
const POPULATION_CEILING: usize = 32;
const SPAWN_ODDS: u32 = 60;
const MIN_CREATURE_SIZE: i32 = 4;
const MAX_CREATURE_SIZE: i32 = 32;

const MIN_WALK_STEP: i32 = 2;
const WING_TOGGLE_ODDS: u32 = 40;
const FACING_NUDGE_ODDS: u32 = 10;
const FACING_NUDGE_MAX_DEGREES: i32 = 15;

const TARGET_INTERVAL_TICKS: u64 = 120;
const TARGET_EXPIRY_ODDS: u32 = 3;
const MATCH_ZONE: BoxPx = BoxPx {
    x: 368,
    y: 8,
    width: 64,
    height: 64,
};
const MATCH_SCORE_PER_SIZE: u32 = 10;
const ICON_SIZE: u32 = 24;

const MAX_PARTICLES: usize = 64;
const PARTICLES_PER_BURST: usize = 12;
const PARTICLE_GRAVITY: f32 = 0.2;
const MAX_SCORE_LABELS: usize = 8;
const SCORE_LABEL_RISE_PX: i32 = 40;

const MIN_PALETTE_COLOURS: usize = 3;
const MAX_PALETTE_COLOURS: usize = 21;
const NAMED_COLOUR_ODDS: u32 = 10;
const JITTER_SHRINK: f32 = 0.8;
const JITTER_DELTA: f32 = 0.15;
const PATTERN_SCALE_MIN: f32 = 0.02;
const PATTERN_SCALE_MAX: f32 = 0.2;
const PATTERN_OFFSET_RANGE: i32 = 8;

include!("geometry.rs");
include!("palette.rs");
include!("appearance.rs");
include!("butterfly.rs");
include!("world.rs");
include!("effects.rs");
include!("session.rs");

pub(crate) fn build_session() -> Box<dyn Scene> {
    Box::new(GardenSession::from_entropy())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
