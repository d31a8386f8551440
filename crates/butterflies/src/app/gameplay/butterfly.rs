#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntityId(pub(crate) u64);

/// Capability seam for anything the world simulates. Butterfly is the only
/// variant today; the trait exists so new ones slot in without touching the
/// world or the session.
pub(crate) trait Entity {
    fn id(&self) -> EntityId;
    fn name(&self) -> &str;
    fn is_alive(&self) -> bool;
    fn mark_dead(&mut self);
    fn update(&mut self, rng: &mut dyn RngCore);
    fn draw(&mut self, painter: &mut FramePainter<'_>);
    fn draw_highlight(&self, painter: &mut FramePainter<'_>, colour: [u8; 4]);
    fn hit_test(&self, x: i32, y: i32) -> bool;
    fn bounds(&self) -> BoxPx;
    fn size(&self) -> i32;
    fn set_position(&mut self, x: f32, y: f32);
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);
    fn is_targeted(&self) -> bool;
    fn set_targeted(&mut self, targeted: bool);
    fn icon(&self) -> &RasterImage;
}

/// The pose the cached composition was built for. Recomposition happens on
/// key mismatch only; there is no clear-at-mutation-site bookkeeping to
/// miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PoseKey {
    facing_degrees: i32,
    wings_up: bool,
}

pub(crate) struct Butterfly {
    id: EntityId,
    name: String,
    x: f32,
    y: f32,
    size: i32,
    alive: bool,
    selected: bool,
    targeted: bool,
    age: u64,
    facing_degrees: i32,
    wings_up: bool,
    limits: BoxPx,
    appearance: Appearance,
    composed: Option<(PoseKey, RasterImage)>,
}

impl Butterfly {
    pub(crate) fn spawn(
        id: EntityId,
        name: String,
        x: f32,
        y: f32,
        size: i32,
        limits: BoxPx,
        palette: &mut Palette,
        rng: &mut dyn RngCore,
    ) -> Self {
        let appearance = generate_appearance(size, palette, rng);
        Self {
            id,
            name,
            x,
            y,
            size,
            alive: true,
            selected: false,
            targeted: false,
            age: 0,
            facing_degrees: 0,
            wings_up: false,
            limits,
            appearance,
            composed: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn age(&self) -> u64 {
        self.age
    }

    #[cfg(test)]
    pub(crate) fn facing_degrees(&self) -> i32 {
        self.facing_degrees
    }

    #[cfg(test)]
    pub(crate) fn wings_up(&self) -> bool {
        self.wings_up
    }

    fn pose_key(&self) -> PoseKey {
        PoseKey {
            facing_degrees: self.facing_degrees,
            wings_up: self.wings_up,
        }
    }

    /// Rebuilds the composed pose image when the cached key no longer
    /// matches. Returns true when a recomposition actually happened.
    pub(crate) fn ensure_composed(&mut self) -> bool {
        let key = self.pose_key();
        if matches!(&self.composed, Some((cached, _)) if *cached == key) {
            return false;
        }
        let image = self.compose(key);
        self.composed = Some((key, image));
        true
    }

    fn compose(&self, key: PoseKey) -> RasterImage {
        let side = self.appearance.wings.width();
        let mut canvas = RasterImage::new(side, side);
        if key.wings_up {
            // Folded pose: half-height wings, pushed toward the tail.
            let folded = self.appearance.wings.scaled(side, (side / 2).max(1));
            canvas.composite(&folded, 0, side as i32 / 4);
        } else {
            canvas.composite(&self.appearance.wings, 0, 0);
        }
        canvas.composite(&self.appearance.body, 0, 0);
        canvas.rotated(key.facing_degrees as f32)
    }
}

impl Entity for Butterfly {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn mark_dead(&mut self) {
        self.alive = false;
    }

    fn update(&mut self, rng: &mut dyn RngCore) {
        self.age += 1;

        if !boxes_overlap(self.bounds(), self.limits) && !self.selected && !self.targeted {
            self.alive = false;
            debug!(name = %self.name, age = self.age, "butterfly_expired");
            return;
        }

        let step = (self.size / 4).max(MIN_WALK_STEP);
        self.x += rng.gen_range(-step..=step) as f32;
        self.y += rng.gen_range(-step..=step) as f32;

        if rng.gen_ratio(1, WING_TOGGLE_ODDS) {
            self.wings_up = !self.wings_up;
        }
        if rng.gen_ratio(1, FACING_NUDGE_ODDS) {
            let nudge = rng.gen_range(-FACING_NUDGE_MAX_DEGREES..=FACING_NUDGE_MAX_DEGREES);
            self.facing_degrees = (self.facing_degrees + nudge).rem_euclid(360);
        }
        if self.selected || self.targeted {
            // A held creature always displays wings-down.
            self.wings_up = false;
        }
    }

    fn draw(&mut self, painter: &mut FramePainter<'_>) {
        if !boxes_overlap(self.bounds(), painter.viewport_box()) {
            return;
        }
        self.ensure_composed();
        if let Some((_, image)) = &self.composed {
            painter.blit_centered(image, self.x as i32, self.y as i32);
        }
    }

    fn draw_highlight(&self, painter: &mut FramePainter<'_>, colour: [u8; 4]) {
        if !boxes_overlap(self.bounds(), painter.viewport_box()) {
            return;
        }
        painter.draw_box_outline(self.bounds(), HIGHLIGHT_STROKE_PX, colour);
    }

    fn hit_test(&self, x: i32, y: i32) -> bool {
        self.bounds().contains_point(x, y)
    }

    fn bounds(&self) -> BoxPx {
        BoxPx::new(
            self.x as i32 - self.size,
            self.y as i32 - self.size,
            self.size * 2,
            self.size * 2,
        )
    }

    fn size(&self) -> i32 {
        self.size
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_targeted(&self) -> bool {
        self.targeted
    }

    fn set_targeted(&mut self, targeted: bool) {
        self.targeted = targeted;
    }

    fn icon(&self) -> &RasterImage {
        &self.appearance.icon
    }
}
