/// Owns every live entity and the tick driver. The collection only ever
/// contains entities that were alive at the end of the last tick, in
/// insertion order.
pub(crate) struct World {
    entities: Vec<Box<dyn Entity>>,
    background_colour: [u8; 4],
    tick_counter: u64,
}

impl World {
    pub(crate) fn new() -> Self {
        Self {
            entities: Vec::new(),
            background_colour: BACKGROUND_COLOR,
            tick_counter: 0,
        }
    }

    pub(crate) fn add(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    /// Updates every live entity, then replaces the collection with the
    /// survivors. Never removes in place while iterating.
    pub(crate) fn tick(&mut self, rng: &mut dyn RngCore) {
        self.tick_counter += 1;
        let previous = std::mem::take(&mut self.entities);
        let mut survivors = Vec::with_capacity(previous.len());
        for mut entity in previous {
            if entity.is_alive() {
                entity.update(rng);
            }
            if entity.is_alive() {
                survivors.push(entity);
            }
        }
        self.entities = survivors;
    }

    pub(crate) fn entities(&self) -> &[Box<dyn Entity>] {
        &self.entities
    }

    pub(crate) fn entities_mut(&mut self) -> &mut [Box<dyn Entity>] {
        &mut self.entities
    }

    pub(crate) fn find(&self, id: EntityId) -> Option<&dyn Entity> {
        self.entities
            .iter()
            .find(|entity| entity.id() == id)
            .map(|entity| entity.as_ref())
    }

    pub(crate) fn find_mut(&mut self, id: EntityId) -> Option<&mut (dyn Entity + 'static)> {
        self.entities
            .iter_mut()
            .find(|entity| entity.id() == id)
            .map(|entity| entity.as_mut())
    }

    pub(crate) fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub(crate) fn tick_count(&self) -> u64 {
        self.tick_counter
    }

    pub(crate) fn background_colour(&self) -> [u8; 4] {
        self.background_colour
    }
}
