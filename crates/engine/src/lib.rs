pub mod app;

pub use app::{
    boxes_overlap, render_text, run_app, AppError, BoxPx, FramePainter, InputEvent, Key,
    LoopConfig, PointerButton, RasterImage, Scene, SceneCommand,
};

