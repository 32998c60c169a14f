use crate::config::AppConfig;
use crate::error::StackTrace;
use crate::handler::Handler;
use crate::menu::Menu;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod config;
mod controller;
mod error;
mod handler;
mod menu;
mod request;
mod response;

fn main() -> Result<(), StackTrace> {
    let config = AppConfig::load();

    let appender = tracing_appender::rolling::daily(config.log_dir(), config.log_file());
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::filter::LevelFilter::WARN),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .init();

    let handler = Handler::init()?;
    tracing::info!(log_dir = %config.log_dir().display(), "catalog started");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(&handler, stdin.lock(), stdout.lock()).run()?;

    tracing::info!("catalog closed");
    Ok(())
}
