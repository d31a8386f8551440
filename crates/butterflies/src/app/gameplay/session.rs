/// The playable session: owns the world, the player's selection, the rolling
/// target queue, the score, and the transient effects.
pub(crate) struct GardenSession {
    world: World,
    rng: ChaCha8Rng,
    palette: Palette,
    next_entity_serial: u64,
    selected: Option<EntityId>,
    targets: VecDeque<EntityId>,
    score: u32,
    particles: Vec<Particle>,
    score_labels: Vec<ScoreLabel>,
    cursor: (i32, i32),
}

impl GardenSession {
    pub(crate) fn with_seed(seed: u64) -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            palette: Palette::with_named_colours(),
            next_entity_serial: 0,
            selected: None,
            targets: VecDeque::new(),
            score: 0,
            particles: Vec::new(),
            score_labels: Vec::new(),
            cursor: (-1, -1),
        }
    }

    pub(crate) fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            ..Self::with_seed(0)
        }
    }

    fn spawn_butterfly(&mut self) {
        let serial = self.next_entity_serial;
        self.next_entity_serial += 1;
        let id = EntityId(serial);
        let size = self.rng.gen_range(MIN_CREATURE_SIZE..=MAX_CREATURE_SIZE);
        let x = self.rng.gen_range(0..WINDOW_WIDTH as i32) as f32;
        let y = self.rng.gen_range(0..WINDOW_HEIGHT as i32) as f32;
        let limits = BoxPx::new(0, 0, WINDOW_WIDTH as i32, WINDOW_HEIGHT as i32);
        let butterfly = Butterfly::spawn(
            id,
            format!("butterfly-{serial}"),
            x,
            y,
            size,
            limits,
            &mut self.palette,
            &mut self.rng,
        );
        debug!(name = %butterfly.name(), x, y, size, "spawned");
        self.world.add(Box::new(butterfly));
    }

    fn handle_event(&mut self, event: InputEvent) -> SceneCommand {
        match event {
            InputEvent::Quit => return SceneCommand::Quit,
            InputEvent::KeyDown(Key::Escape) => return SceneCommand::Quit,
            InputEvent::KeyDown(_) => {}
            InputEvent::PointerMoved(x, y) => {
                self.cursor = (x, y);
                if let Some(id) = self.selected {
                    if let Some(entity) = self.world.find_mut(id) {
                        entity.set_position(x as f32, y as f32);
                    }
                }
            }
            InputEvent::PointerButtonUp(PointerButton::Left, x, y) => {
                self.select_at(x, y);
            }
            InputEvent::PointerButtonUp(PointerButton::Right, _, _) => {
                self.release_selection();
            }
        }
        SceneCommand::Continue
    }

    /// First live hit in iteration order wins. Any previous selection is
    /// released first.
    fn select_at(&mut self, x: i32, y: i32) {
        self.release_selection();
        for entity in self.world.entities_mut() {
            if entity.is_alive() && entity.hit_test(x, y) {
                entity.set_selected(true);
                self.selected = Some(entity.id());
                debug!(name = %entity.name(), "selected");
                break;
            }
        }
    }

    fn release_selection(&mut self) {
        if let Some(id) = self.selected.take() {
            if let Some(entity) = self.world.find_mut(id) {
                entity.set_selected(false);
            }
        }
    }

    /// Queues a uniformly random live entity that is not already a target.
    fn sample_target(&mut self) {
        let candidates: Vec<EntityId> = self
            .world
            .entities()
            .iter()
            .filter(|entity| entity.is_alive() && !self.targets.contains(&entity.id()))
            .map(|entity| entity.id())
            .collect();
        if candidates.is_empty() {
            return;
        }
        let id = candidates[self.rng.gen_range(0..candidates.len())];
        if let Some(entity) = self.world.find_mut(id) {
            entity.set_targeted(true);
            debug!(name = %entity.name(), "target_queued");
        }
        self.targets.push_back(id);
    }

    fn maybe_expire_oldest_target(&mut self) {
        if self.targets.is_empty() || !self.rng.gen_ratio(1, TARGET_EXPIRY_ODDS) {
            return;
        }
        if let Some(id) = self.targets.pop_front() {
            if let Some(entity) = self.world.find_mut(id) {
                entity.set_targeted(false);
                debug!(name = %entity.name(), "target_expired");
            }
        }
    }

    /// Tests every queued target against the match zone; a hit retires the
    /// target, kills the creature, and awards score by size.
    fn run_match_pass(&mut self) {
        let matched: Vec<EntityId> = self
            .targets
            .iter()
            .copied()
            .filter(|&id| {
                self.world
                    .find(id)
                    .map(|entity| boxes_overlap(entity.bounds(), MATCH_ZONE))
                    .unwrap_or(false)
            })
            .collect();

        for id in matched {
            let was_sole_target = self.targets.len() == 1;
            self.targets.retain(|&queued| queued != id);
            let Some(entity) = self.world.find_mut(id) else {
                continue;
            };
            let base_award = entity.size() as u32 * MATCH_SCORE_PER_SIZE;
            let award = if was_sole_target {
                base_award * 2
            } else {
                base_award
            };
            entity.set_targeted(false);
            entity.mark_dead();
            let bounds = entity.bounds();
            let center_x = bounds.x + bounds.width / 2;
            let center_y = bounds.y + bounds.height / 2;
            let name = entity.name().to_string();

            self.score += award;
            spawn_particle_burst(
                &mut self.particles,
                center_x as f32,
                center_y as f32,
                &mut self.rng,
            );
            push_score_label(
                &mut self.score_labels,
                center_x,
                center_y,
                &format!("+{award}"),
                SCORE_TEXT_COLOR,
            );
            if was_sole_target {
                push_score_label(
                    &mut self.score_labels,
                    center_x,
                    center_y - 16,
                    "BONUS X2",
                    MATCH_ZONE_COLOR,
                );
            }
            info!(name = %name, award, score = self.score, "target_matched");
        }
    }

    /// Drops references to entities the world pruned this tick.
    fn prune_stale_references(&mut self) {
        if let Some(id) = self.selected {
            if self.world.find(id).is_none() {
                self.selected = None;
            }
        }
        let world = &self.world;
        self.targets.retain(|&id| world.find(id).is_some());
    }

    #[cfg(test)]
    fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Scene for GardenSession {
    fn load(&mut self) {
        for _ in 0..INITIAL_POPULATION {
            self.spawn_butterfly();
        }
        info!(entity_count = self.world.entity_count(), "session_loaded");
    }

    fn update(&mut self, events: &[InputEvent]) -> SceneCommand {
        for &event in events {
            if self.handle_event(event) == SceneCommand::Quit {
                return SceneCommand::Quit;
            }
        }

        self.world.tick(&mut self.rng);
        self.prune_stale_references();

        if self.world.entity_count() < POPULATION_CEILING && self.rng.gen_ratio(1, SPAWN_ODDS) {
            self.spawn_butterfly();
        }
        if self.world.tick_count() % TARGET_INTERVAL_TICKS == 0 {
            self.sample_target();
            self.maybe_expire_oldest_target();
        }
        self.run_match_pass();

        let viewport = BoxPx::new(0, 0, WINDOW_WIDTH as i32, WINDOW_HEIGHT as i32);
        advance_particles(&mut self.particles, viewport);
        advance_score_labels(&mut self.score_labels);

        SceneCommand::Continue
    }

    fn render(&mut self, painter: &mut FramePainter<'_>) {
        painter.fill_background(self.world.background_colour());

        for entity in self.world.entities_mut() {
            if entity.is_alive() {
                entity.draw(painter);
            }
        }
        for entity in self.world.entities() {
            if entity.is_selected() {
                entity.draw_highlight(painter, SELECTED_HIGHLIGHT_COLOR);
            } else if entity.is_targeted() {
                entity.draw_highlight(painter, TARGET_HIGHLIGHT_COLOR);
            }
        }

        painter.draw_box_outline(MATCH_ZONE, HIGHLIGHT_STROKE_PX, MATCH_ZONE_COLOR);
        let mut icon_x = MATCH_ZONE.x + MATCH_ZONE.width + 8;
        for &id in &self.targets {
            if let Some(entity) = self.world.find(id) {
                painter.blit(entity.icon(), icon_x, MATCH_ZONE.y);
                icon_x += ICON_SIZE as i32 + 4;
            }
        }

        draw_effects(painter, &self.particles, &self.score_labels);
        painter.draw_text(8, 8, &format!("SCORE {}", self.score), SCORE_TEXT_COLOR);
    }
}
