/// Keyed colour registry. Lookups for unrecognized keys mint a random bright
/// colour and remember it, so a key is never "missing".
#[derive(Debug, Clone)]
pub(crate) struct Palette {
    colours: HashMap<String, [u8; 4]>,
}

impl Palette {
    pub(crate) fn with_named_colours() -> Self {
        let mut colours = HashMap::new();
        for (name, colour) in [
            ("soot", [0x14, 0x14, 0x14, 0xff]),
            ("chalk", [0xeb, 0xeb, 0xe1, 0xff]),
            ("poppy", [0xdc, 0x3c, 0x32, 0xff]),
            ("marigold", [0xf0, 0xb4, 0x28, 0xff]),
            ("verdigris", [0x3c, 0xa0, 0x8c, 0xff]),
            ("cornflower", [0x5a, 0x78, 0xdc, 0xff]),
        ] {
            colours.insert(name.to_string(), colour);
        }
        Self { colours }
    }

    pub(crate) fn colour(&mut self, key: &str, rng: &mut dyn RngCore) -> [u8; 4] {
        if let Some(colour) = self.colours.get(key) {
            return *colour;
        }
        let minted = random_bright_colour(rng);
        self.colours.insert(key.to_string(), minted);
        minted
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.colours.len()
    }
}

pub(crate) fn random_bright_colour(rng: &mut dyn RngCore) -> [u8; 4] {
    [
        128 + rng.gen_range(0..=127u8),
        128 + rng.gen_range(0..=127u8),
        128 + rng.gen_range(0..=127u8),
        0xff,
    ]
}
