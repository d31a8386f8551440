use super::rendering::{write_pixel_rgba, RasterImage};

const GLYPH_WIDTH: i32 = 3;
const GLYPH_HEIGHT: i32 = 5;
const TEXT_SCALE: i32 = 2;
const GLYPH_ADVANCE: i32 = (GLYPH_WIDTH + 1) * TEXT_SCALE;

#[derive(Debug, Clone, Copy)]
struct Glyph {
    rows: [u8; GLYPH_HEIGHT as usize],
}

const SPACE_GLYPH: Glyph = Glyph {
    rows: [0, 0, 0, 0, 0],
};

pub fn text_width_px(content: &str) -> i32 {
    content.chars().count() as i32 * GLYPH_ADVANCE
}

pub fn text_height_px() -> i32 {
    GLYPH_HEIGHT * TEXT_SCALE
}

pub(crate) fn draw_text_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    mut x: i32,
    y: i32,
    content: &str,
    color: [u8; 4],
) {
    for ch in content.chars() {
        let glyph = glyph_for(ch).unwrap_or(SPACE_GLYPH);
        draw_glyph_clipped(frame, width, height, x, y, glyph, color);
        x += GLYPH_ADVANCE;
    }
}

/// Rasterizes `content` into a tightly sized owned image.
pub fn render_text(content: &str, color: [u8; 4]) -> RasterImage {
    let width = text_width_px(content).max(1) as u32;
    let height = text_height_px() as u32;
    let mut image = RasterImage::new(width, height);
    let mut x = 0;
    for ch in content.chars() {
        let glyph = glyph_for(ch).unwrap_or(SPACE_GLYPH);
        for (row_index, row_bits) in glyph.rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (row_bits & (1 << (GLYPH_WIDTH - 1 - col))) == 0 {
                    continue;
                }
                for sy in 0..TEXT_SCALE {
                    for sx in 0..TEXT_SCALE {
                        image.set_pixel(
                            x + col * TEXT_SCALE + sx,
                            row_index as i32 * TEXT_SCALE + sy,
                            color,
                        );
                    }
                }
            }
        }
        x += GLYPH_ADVANCE;
    }
    image
}

fn draw_glyph_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    glyph: Glyph,
    color: [u8; 4],
) {
    if width == 0 || height == 0 {
        return;
    }

    let width_i32 = width as i32;
    let height_i32 = height as i32;

    for (row_index, row_bits) in glyph.rows.iter().enumerate() {
        let glyph_y = y + row_index as i32 * TEXT_SCALE;
        for col in 0..GLYPH_WIDTH {
            if (row_bits & (1 << (GLYPH_WIDTH - 1 - col))) == 0 {
                continue;
            }
            let glyph_x = x + col * TEXT_SCALE;
            for sy in 0..TEXT_SCALE {
                let pixel_y = glyph_y + sy;
                if pixel_y < 0 || pixel_y >= height_i32 {
                    continue;
                }
                for sx in 0..TEXT_SCALE {
                    let pixel_x = glyph_x + sx;
                    if pixel_x < 0 || pixel_x >= width_i32 {
                        continue;
                    }
                    write_pixel_rgba(
                        frame,
                        width as usize,
                        pixel_x as usize,
                        pixel_y as usize,
                        color,
                    );
                }
            }
        }
    }
}

fn glyph_for(ch: char) -> Option<Glyph> {
    let normalized = ch.to_ascii_uppercase();
    let rows: [u8; 5] = match normalized {
        ' ' => return Some(SPACE_GLYPH),
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        _ => return None,
    };
    Some(Glyph { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_text_is_tightly_sized() {
        let image = render_text("123", [255, 255, 255, 255]);
        assert_eq!(image.width(), text_width_px("123") as u32);
        assert_eq!(image.height(), text_height_px() as u32);
    }

    #[test]
    fn rendered_text_contains_opaque_pixels() {
        let image = render_text("BONUS", [10, 20, 30, 255]);
        let opaque = image
            .rgba()
            .chunks_exact(4)
            .filter(|chunk| chunk[3] != 0)
            .count();
        assert!(opaque > 0);
    }

    #[test]
    fn unknown_characters_render_as_space() {
        let image = render_text("~", [255, 255, 255, 255]);
        assert!(image.rgba().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn drawing_off_frame_does_not_write() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        draw_text_clipped(&mut frame, 8, 8, -100, -100, "99", [255, 0, 0, 255]);
        assert!(frame.iter().all(|byte| *byte == 0));
    }
}
