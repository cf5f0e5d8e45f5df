use std::process::ExitCode;

use corridor_caster::app;
use corridor_caster::config::{GameConfig, DEFAULT_CONFIG_PATH};
use corridor_caster::logging::init_tracing;

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let path = std::env::var("CORRIDOR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let result = GameConfig::load_or_default(&path)
        .map_err(app::AppError::from)
        .and_then(|cfg| app::run(&cfg));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "corridor exited with an error");
            ExitCode::FAILURE
        }
    }
}
