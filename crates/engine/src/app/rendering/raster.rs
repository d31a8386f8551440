/// Owned offscreen RGBA8 image. Alpha 0 means "no pixel"; compositing is a
/// plain replace wherever the source alpha is non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let mut color = [0; 4];
        color.copy_from_slice(&self.rgba[offset..offset + 4]);
        Some(color)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba[offset..offset + 4].copy_from_slice(&color);
    }

    /// Scanline fill, even-odd rule. The polygon is closed implicitly.
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: [u8; 4]) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.1)
            .max()
            .unwrap_or(0)
            .min(self.height as i32 - 1);

        let mut crossings: Vec<i32> = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            crossings.clear();
            for index in 0..points.len() {
                let (x0, y0) = points[index];
                let (x1, y1) = points[(index + 1) % points.len()];
                if (y0 <= y) != (y1 <= y) {
                    let t = (y - y0) as f32 / (y1 - y0) as f32;
                    crossings.push((x0 as f32 + t * (x1 - x0) as f32).round() as i32);
                }
            }
            crossings.sort_unstable();
            for pair in crossings.chunks_exact(2) {
                for x in pair[0]..=pair[1] {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: [u8; 4]) {
        // Bresenham.
        let (mut x, mut y) = from;
        let dx = (to.0 - from.0).abs();
        let dy = -(to.1 - from.1).abs();
        let step_x = if from.0 < to.0 { 1 } else { -1 };
        let step_y = if from.1 < to.1 { 1 } else { -1 };
        let mut error = dx + dy;
        loop {
            self.set_pixel(x, y, color);
            if x == to.0 && y == to.1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    /// Open polyline; the last point is not joined back to the first.
    pub fn draw_polyline(&mut self, points: &[(i32, i32)], color: [u8; 4]) {
        for segment in points.windows(2) {
            self.draw_line(segment[0], segment[1], color);
        }
    }

    pub fn draw_polygon_outline(&mut self, points: &[(i32, i32)], color: [u8; 4]) {
        if points.len() < 3 {
            return;
        }
        self.draw_polyline(points, color);
        self.draw_line(points[points.len() - 1], points[0], color);
    }

    /// Pastes `src` with its top-left corner at (x, y), skipping transparent
    /// source pixels.
    pub fn composite(&mut self, src: &RasterImage, x: i32, y: i32) {
        for sy in 0..src.height as i32 {
            for sx in 0..src.width as i32 {
                if let Some(color) = src.pixel(sx, sy) {
                    if color[3] != 0 {
                        self.set_pixel(x + sx, y + sy, color);
                    }
                }
            }
        }
    }

    pub fn flipped_vertical(&self) -> RasterImage {
        let mut out = RasterImage::new(self.width, self.height);
        let row_bytes = self.width as usize * 4;
        for y in 0..self.height as usize {
            let src_start = y * row_bytes;
            let dst_start = (self.height as usize - 1 - y) * row_bytes;
            out.rgba[dst_start..dst_start + row_bytes]
                .copy_from_slice(&self.rgba[src_start..src_start + row_bytes]);
        }
        out
    }

    /// Rotates counter-clockwise by `degrees` into a re-bounded canvas,
    /// nearest-neighbour sampled by inverse mapping.
    pub fn rotated(&self, degrees: f32) -> RasterImage {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        let src_w = self.width as f32;
        let src_h = self.height as f32;
        // Rounded, not ceiled: quarter turns must swap the dimensions
        // exactly despite sin/cos rounding error.
        let out_w = (src_w * cos.abs() + src_h * sin.abs()).round().max(1.0) as u32;
        let out_h = (src_w * sin.abs() + src_h * cos.abs()).round().max(1.0) as u32;

        let src_cx = src_w * 0.5;
        let src_cy = src_h * 0.5;
        let out_cx = out_w as f32 * 0.5;
        let out_cy = out_h as f32 * 0.5;

        let mut out = RasterImage::new(out_w, out_h);
        for y in 0..out_h as i32 {
            for x in 0..out_w as i32 {
                let dx = x as f32 + 0.5 - out_cx;
                let dy = y as f32 + 0.5 - out_cy;
                // Inverse rotation back into source space.
                let sx = (dx * cos - dy * sin + src_cx).floor() as i32;
                let sy = (dx * sin + dy * cos + src_cy).floor() as i32;
                if let Some(color) = self.pixel(sx, sy) {
                    if color[3] != 0 {
                        out.set_pixel(x, y, color);
                    }
                }
            }
        }
        out
    }

    /// Nearest-neighbour resample to the requested dimensions.
    pub fn scaled(&self, width: u32, height: u32) -> RasterImage {
        let mut out = RasterImage::new(width, height);
        if width == 0 || height == 0 || self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..height as i32 {
            let sy = (y as u64 * self.height as u64 / height as u64) as i32;
            for x in 0..width as i32 {
                let sx = (x as u64 * self.width as u64 / width as u64) as i32;
                if let Some(color) = self.pixel(sx, sy) {
                    out.set_pixel(x, y, color);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn new_image_is_fully_transparent() {
        let image = RasterImage::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(image.pixel(x, y), Some([0, 0, 0, 0]));
            }
        }
    }

    #[test]
    fn set_pixel_outside_bounds_is_a_no_op() {
        let mut image = RasterImage::new(2, 2);
        image.set_pixel(-1, 0, RED);
        image.set_pixel(0, 5, RED);
        assert!(image.rgba().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn filled_polygon_covers_its_interior() {
        let mut image = RasterImage::new(10, 10);
        image.fill_polygon(&[(1, 1), (8, 1), (8, 8), (1, 8)], RED);
        assert_eq!(image.pixel(4, 4), Some(RED));
        assert_eq!(image.pixel(1, 1), Some(RED));
        assert_eq!(image.pixel(9, 9), Some([0, 0, 0, 0]));
    }

    #[test]
    fn degenerate_polygon_fill_draws_nothing() {
        let mut image = RasterImage::new(8, 8);
        image.fill_polygon(&[(1, 1), (6, 6)], RED);
        assert!(image.rgba().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn polyline_is_open() {
        let mut image = RasterImage::new(10, 10);
        image.draw_polyline(&[(0, 0), (9, 0), (9, 9)], RED);
        assert_eq!(image.pixel(5, 0), Some(RED));
        assert_eq!(image.pixel(9, 5), Some(RED));
        // No closing segment back to the origin.
        assert_eq!(image.pixel(4, 4), Some([0, 0, 0, 0]));
    }

    #[test]
    fn vertical_flip_mirrors_rows() {
        let mut image = RasterImage::new(3, 3);
        image.set_pixel(1, 0, RED);
        let flipped = image.flipped_vertical();
        assert_eq!(flipped.pixel(1, 2), Some(RED));
        assert_eq!(flipped.pixel(1, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn composite_skips_transparent_source_pixels() {
        let mut base = RasterImage::new(4, 4);
        base.set_pixel(0, 0, RED);
        let mut overlay = RasterImage::new(4, 4);
        overlay.set_pixel(1, 1, [0, 255, 0, 255]);
        base.composite(&overlay, 0, 0);
        assert_eq!(base.pixel(0, 0), Some(RED));
        assert_eq!(base.pixel(1, 1), Some([0, 255, 0, 255]));
    }

    #[test]
    fn quarter_rotation_swaps_dimensions() {
        let image = RasterImage::new(6, 2);
        let rotated = image.rotated(90.0);
        assert_eq!((rotated.width(), rotated.height()), (2, 6));
    }

    #[test]
    fn rotation_preserves_opaque_content() {
        let mut image = RasterImage::new(5, 5);
        image.fill_polygon(&[(1, 1), (3, 1), (3, 3), (1, 3)], RED);
        let rotated = image.rotated(180.0);
        let opaque = rotated
            .rgba()
            .chunks_exact(4)
            .filter(|chunk| chunk[3] != 0)
            .count();
        assert!(opaque > 0);
    }

    #[test]
    fn scaling_halves_dimensions() {
        let mut image = RasterImage::new(8, 8);
        image.fill_polygon(&[(0, 0), (7, 0), (7, 7), (0, 7)], RED);
        let scaled = image.scaled(4, 4);
        assert_eq!((scaled.width(), scaled.height()), (4, 4));
        assert_eq!(scaled.pixel(2, 2), Some(RED));
    }
}
