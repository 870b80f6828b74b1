use chop::{
    App,
    assets::{self, Assets},
    audio::Audio,
};
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let dir = assets::locate_dir();
    let assets = Assets::load(&dir)
        .wrap_err_with(|| format!("failed to load assets from {}", dir.display()))?;
    let audio = Audio::new().wrap_err("failed to open audio output")?;
    let app = App::new(assets, audio);

    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();

    tracing::info!("shutting down");
    result
}

/// Logs go to stderr, and only when `RUST_LOG` is set, so they stay out of the
/// alternate screen unless redirected.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
