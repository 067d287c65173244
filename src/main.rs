use dctm_assistant::config::{AppConfig, load_dotenv};

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing(_config: &AppConfig) {}

fn main() -> anyhow::Result<()> {
    let dotenv = load_dotenv();
    let config = AppConfig::from_env()?;
    init_tracing(&config);
    match dotenv {
        Ok(path) => tracing::info!("loaded environment from {}", path.display()),
        Err(err) => tracing::debug!("no .env loaded: {err}"),
    }

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(dctm_assistant::ui::App);
    Ok(())
}
