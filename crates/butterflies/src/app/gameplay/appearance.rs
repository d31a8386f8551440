/// A creature's visual identity, built exactly once at creation and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub(crate) struct Appearance {
    pub(crate) wings: RasterImage,
    pub(crate) body: RasterImage,
    pub(crate) icon: RasterImage,
}

pub(crate) fn generate_appearance(
    size: i32,
    palette: &mut Palette,
    rng: &mut dyn RngCore,
) -> Appearance {
    let side = (size.max(1) as u32) * 2;
    let colours = select_colours(palette, rng);
    let pattern_scale = rng.gen_range(PATTERN_SCALE_MIN..PATTERN_SCALE_MAX);

    let mut wings = RasterImage::new(side, side);
    for template in [main_wing_template(), sub_wing_template()] {
        let wing = template.jittered(rng);
        let outline = to_pixel_points(wing.points(), side);
        let mut layer = RasterImage::new(side, side);
        layer.fill_polygon(&outline, colours[0]);
        apply_wing_pattern(&mut layer, &colours, pattern_scale, rng);
        layer.draw_polygon_outline(&outline, colours[0]);
        wings.composite(&layer, 0, 0);
    }
    mirror_onto_self(&mut wings);

    let mut body = RasterImage::new(side, side);
    body.fill_polygon(&to_pixel_points(body_template().points(), side), colours[0]);
    body.draw_polyline(&to_pixel_points(antennae_template().points(), side), colours[0]);
    mirror_onto_self(&mut body);

    let mut combined = wings.clone();
    combined.composite(&body, 0, 0);
    let icon = combined.rotated(90.0).scaled(ICON_SIZE, ICON_SIZE);

    Appearance { wings, body, icon }
}

/// Keys the generator may ask the registry for. The last two are not
/// pre-registered; the palette mints them lazily on first use.
const COLOUR_KEYS: &[&str] = &[
    "soot",
    "chalk",
    "poppy",
    "marigold",
    "verdigris",
    "cornflower",
    "dusk",
    "meadow",
];

/// 3 to 21 entries; each is occasionally a keyed registry colour, otherwise
/// freshly minted.
fn select_colours(palette: &mut Palette, rng: &mut dyn RngCore) -> Vec<[u8; 4]> {
    let count = rng.gen_range(MIN_PALETTE_COLOURS..=MAX_PALETTE_COLOURS);
    (0..count)
        .map(|_| {
            if rng.gen_ratio(1, NAMED_COLOUR_ODDS) {
                let key = COLOUR_KEYS[rng.gen_range(0..COLOUR_KEYS.len())];
                palette.colour(key, rng)
            } else {
                random_bright_colour(rng)
            }
        })
        .collect()
}

/// Maps normalized template coordinates into a side×side image, y up, the
/// template's y in [0, 1] landing in the upper half.
fn to_pixel_points(points: &[(f32, f32)], side: u32) -> Vec<(i32, i32)> {
    let half_w = side as f32 * 0.5;
    let half_h = side as f32 * 0.5;
    points
        .iter()
        .map(|&(x, y)| {
            let px = (half_w + x * (half_w - 1.0)).round() as i32;
            let py = (half_h - y * (half_h - 1.0)).round() as i32;
            (px, py)
        })
        .collect()
}

/// Pseudo-fractal recolouring of the opaque interior of the upper half.
/// The modulus is clamped to at least 1 so a tiny colour set cannot divide
/// by zero.
fn apply_wing_pattern(
    layer: &mut RasterImage,
    colours: &[[u8; 4]],
    pattern_scale: f32,
    rng: &mut dyn RngCore,
) {
    let offset_x = rng.gen_range(-PATTERN_OFFSET_RANGE..=PATTERN_OFFSET_RANGE);
    let offset_y = rng.gen_range(-PATTERN_OFFSET_RANGE..=PATTERN_OFFSET_RANGE);
    let center_x = layer.width() as i32 / 2;
    let center_y = layer.height() as i32 / 2;
    let modulus = colours.len().saturating_sub(2).max(1);

    for y in 0..center_y {
        for x in 0..layer.width() as i32 {
            let Some(existing) = layer.pixel(x, y) else {
                continue;
            };
            if existing[3] == 0 {
                continue;
            }
            let product = ((x - center_x + offset_x) * (y - center_y + offset_y)).abs();
            let index = (product as f32 * pattern_scale) as usize % modulus + 1;
            layer.set_pixel(x, y, colours[index.min(colours.len() - 1)]);
        }
    }
}

/// Bilateral symmetry: composites a vertical mirror of the image onto
/// itself.
fn mirror_onto_self(image: &mut RasterImage) {
    let mirrored = image.flipped_vertical();
    image.composite(&mirrored, 0, 0);
}
