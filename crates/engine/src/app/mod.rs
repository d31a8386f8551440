mod collision;
mod input;
mod loop_runner;
mod rendering;
mod scene;
mod text;

pub use collision::{boxes_overlap, BoxPx};
pub use input::{InputEvent, Key, PointerButton};
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use rendering::{FramePainter, RasterImage};
pub use scene::{Scene, SceneCommand};
pub use text::render_text;
