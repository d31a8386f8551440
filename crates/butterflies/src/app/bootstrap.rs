use engine::{LoopConfig, Scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Butterflies Startup ===");

    let scene = gameplay::build_session();
    let config = LoopConfig {
        window_title: "Butterflies".to_string(),
        window_width: gameplay::WINDOW_WIDTH,
        window_height: gameplay::WINDOW_HEIGHT,
        target_tps: 60,
    };

    AppWiring { config, scene }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
