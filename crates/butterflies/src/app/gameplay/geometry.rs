#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum GeometryError {
    #[error("polygon requires at least 3 points, got {0}")]
    DegeneratePolygon(usize),
    #[error("polyline requires at least 2 points, got {0}")]
    DegeneratePolyline(usize),
}

/// Closed outline in normalized template space: x in [-1, 1], y in [0, 1]
/// for the mirrored upper half.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Polygon {
    points: Vec<(f32, f32)>,
}

impl Polygon {
    pub(crate) fn new(points: Vec<(f32, f32)>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::DegeneratePolygon(points.len()));
        }
        Ok(Self { points })
    }

    pub(crate) fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    /// Scales every vertex toward the template origin and perturbs it by an
    /// independent delta per axis. The clamp is deliberately asymmetric: x
    /// back to [-1, 1] but y to [0, 1], the mirrored half's range.
    pub(crate) fn jittered(&self, rng: &mut dyn RngCore) -> Polygon {
        let points = self
            .points
            .iter()
            .map(|&(x, y)| {
                let jx = x * JITTER_SHRINK + rng.gen_range(-JITTER_DELTA..=JITTER_DELTA);
                let jy = y * JITTER_SHRINK + rng.gen_range(-JITTER_DELTA..=JITTER_DELTA);
                (jx.clamp(-1.0, 1.0), jy.clamp(0.0, 1.0))
            })
            .collect();
        Polygon { points }
    }
}

/// Open stroke, never filled. Used for the antennae.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Polyline {
    points: Vec<(f32, f32)>,
}

impl Polyline {
    pub(crate) fn new(points: Vec<(f32, f32)>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::DegeneratePolyline(points.len()));
        }
        Ok(Self { points })
    }

    pub(crate) fn points(&self) -> &[(f32, f32)] {
        &self.points
    }
}

pub(crate) fn main_wing_template() -> Polygon {
    Polygon::new(vec![
        (0.05, 0.05),
        (0.65, 0.25),
        (1.0, 0.55),
        (0.9, 0.9),
        (0.45, 1.0),
        (0.1, 0.7),
    ])
    .expect("hand-authored wing template")
}

pub(crate) fn sub_wing_template() -> Polygon {
    Polygon::new(vec![
        (-0.05, 0.05),
        (-0.6, 0.15),
        (-1.0, 0.45),
        (-0.75, 0.8),
        (-0.3, 0.6),
    ])
    .expect("hand-authored wing template")
}

pub(crate) fn body_template() -> Polygon {
    Polygon::new(vec![
        (-0.12, 0.1),
        (0.12, 0.1),
        (0.16, 0.45),
        (0.08, 0.9),
        (0.0, 1.0),
        (-0.08, 0.9),
        (-0.16, 0.45),
    ])
    .expect("hand-authored body template")
}

pub(crate) fn antennae_template() -> Polyline {
    Polyline::new(vec![(0.0, 0.9), (0.3, 0.98), (0.45, 0.88)])
        .expect("hand-authored antennae template")
}
