use super::input::InputEvent;
use super::rendering::FramePainter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    Continue,
    Quit,
}

/// The game's seam into the frame loop. One logical frame is: the runner
/// drains pending input, calls `update` with the ordered events, then hands
/// the framebuffer to `render` and presents it.
pub trait Scene {
    fn load(&mut self);
    fn update(&mut self, events: &[InputEvent]) -> SceneCommand;
    fn render(&mut self, painter: &mut FramePainter<'_>);
}
