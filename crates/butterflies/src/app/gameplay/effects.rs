/// Gravity-accelerated confetti spawned on a successful match.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Particle {
    x: f32,
    y: f32,
    velocity_x: f32,
    velocity_y: f32,
}

/// A rendered score readout that drifts upward and vanishes once fully
/// risen.
pub(crate) struct ScoreLabel {
    x: i32,
    y: i32,
    risen_px: i32,
    image: RasterImage,
}

pub(crate) fn spawn_particle_burst(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    rng: &mut dyn RngCore,
) {
    for _ in 0..PARTICLES_PER_BURST {
        if particles.len() >= MAX_PARTICLES {
            break;
        }
        particles.push(Particle {
            x,
            y,
            velocity_x: rng.gen_range(-2.0..=2.0),
            velocity_y: rng.gen_range(-3.0..=-0.5),
        });
    }
}

pub(crate) fn advance_particles(particles: &mut Vec<Particle>, viewport: BoxPx) {
    for particle in particles.iter_mut() {
        particle.velocity_y += PARTICLE_GRAVITY;
        particle.x += particle.velocity_x;
        particle.y += particle.velocity_y;
    }
    particles.retain(|particle| viewport.contains_point(particle.x as i32, particle.y as i32));
}

pub(crate) fn push_score_label(
    labels: &mut Vec<ScoreLabel>,
    x: i32,
    y: i32,
    content: &str,
    colour: [u8; 4],
) {
    if labels.len() >= MAX_SCORE_LABELS {
        return;
    }
    labels.push(ScoreLabel {
        x,
        y,
        risen_px: 0,
        image: render_text(content, colour),
    });
}

pub(crate) fn advance_score_labels(labels: &mut Vec<ScoreLabel>) {
    for label in labels.iter_mut() {
        label.y -= 1;
        label.risen_px += 1;
    }
    labels.retain(|label| label.risen_px < SCORE_LABEL_RISE_PX && label.y >= 0);
}

pub(crate) fn draw_effects(
    painter: &mut FramePainter<'_>,
    particles: &[Particle],
    labels: &[ScoreLabel],
) {
    for particle in particles {
        painter.draw_filled_rect(particle.x as i32, particle.y as i32, 2, 2, PARTICLE_COLOR);
    }
    for label in labels {
        painter.blit_centered(&label.image, label.x, label.y);
    }
}
