use super::raster::RasterImage;
use crate::app::collision::BoxPx;
use crate::app::text;

/// Per-frame drawing surface handed to `Scene::render`. Wraps the RGBA
/// framebuffer slice for the duration of one present.
pub struct FramePainter<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FramePainter<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn viewport_box(&self) -> BoxPx {
        BoxPx::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn fill_background(&mut self, color: [u8; 4]) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    /// Pastes the image with its top-left corner at (x, y), skipping
    /// transparent source pixels.
    pub fn blit(&mut self, image: &RasterImage, x: i32, y: i32) {
        for sy in 0..image.height() as i32 {
            let py = y + sy;
            if py < 0 || py >= self.height as i32 {
                continue;
            }
            for sx in 0..image.width() as i32 {
                let px = x + sx;
                if px < 0 || px >= self.width as i32 {
                    continue;
                }
                if let Some(color) = image.pixel(sx, sy) {
                    if color[3] != 0 {
                        write_pixel_rgba(
                            self.frame,
                            self.width as usize,
                            px as usize,
                            py as usize,
                            color,
                        );
                    }
                }
            }
        }
    }

    pub fn blit_centered(&mut self, image: &RasterImage, center_x: i32, center_y: i32) {
        self.blit(
            image,
            center_x - image.width() as i32 / 2,
            center_y - image.height() as i32 / 2,
        );
    }

    pub fn draw_filled_rect(&mut self, x: i32, y: i32, rect_width: i32, rect_height: i32, color: [u8; 4]) {
        let start_x = x.max(0);
        let start_y = y.max(0);
        let end_x = (x + rect_width).min(self.width as i32);
        let end_y = (y + rect_height).min(self.height as i32);
        if end_x <= start_x || end_y <= start_y {
            return;
        }
        let width_usize = self.width as usize;
        for py in start_y..end_y {
            for px in start_x..end_x {
                write_pixel_rgba(self.frame, width_usize, px as usize, py as usize, color);
            }
        }
    }

    pub fn draw_rect_outline(
        &mut self,
        x: i32,
        y: i32,
        rect_width: i32,
        rect_height: i32,
        stroke: i32,
        color: [u8; 4],
    ) {
        if rect_width <= 1 || rect_height <= 1 || stroke <= 0 {
            return;
        }
        self.draw_filled_rect(x, y, rect_width, stroke, color);
        self.draw_filled_rect(x, y + rect_height - stroke, rect_width, stroke, color);
        self.draw_filled_rect(x, y, stroke, rect_height, color);
        self.draw_filled_rect(x + rect_width - stroke, y, stroke, rect_height, color);
    }

    pub fn draw_box_outline(&mut self, bounds: BoxPx, stroke: i32, color: [u8; 4]) {
        self.draw_rect_outline(bounds.x, bounds.y, bounds.width, bounds.height, stroke, color);
    }

    pub fn draw_text(&mut self, x: i32, y: i32, content: &str, color: [u8; 4]) {
        text::draw_text_clipped(self.frame, self.width, self.height, x, y, content, color);
    }
}

pub(crate) fn write_pixel_rgba(frame: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 4]) {
    let Some(pixel_offset) = y.checked_mul(width).and_then(|row| row.checked_add(x)) else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    let Some(end) = byte_offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }

    frame[byte_offset..end].copy_from_slice(&color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_fill_covers_every_pixel() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut painter = FramePainter::new(&mut frame, 4, 4);
        painter.fill_background([9, 8, 7, 255]);
        for chunk in frame.chunks_exact(4) {
            assert_eq!(chunk, [9, 8, 7, 255]);
        }
    }

    #[test]
    fn blit_clips_at_frame_edges() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut painter = FramePainter::new(&mut frame, 4, 4);
        let mut image = RasterImage::new(3, 3);
        image.set_pixel(0, 0, [1, 2, 3, 255]);
        image.set_pixel(2, 2, [4, 5, 6, 255]);
        painter.blit(&image, -2, -2);
        // Only the (2, 2) source pixel lands inside the frame, at (0, 0).
        assert_eq!(&frame[0..4], [4, 5, 6, 255]);
        assert!(frame[4..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn rect_outline_leaves_interior_untouched() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        let mut painter = FramePainter::new(&mut frame, 8, 8);
        painter.draw_rect_outline(1, 1, 6, 6, 1, [255, 255, 255, 255]);
        let pixel = |x: usize, y: usize| &frame[(y * 8 + x) * 4..(y * 8 + x) * 4 + 4];
        assert_eq!(pixel(1, 1), [255, 255, 255, 255]);
        assert_eq!(pixel(6, 6), [255, 255, 255, 255]);
        assert_eq!(pixel(3, 3), [0, 0, 0, 0]);
    }
}
