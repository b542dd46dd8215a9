mod app;
mod cover_cache;
mod format;
mod screen;
mod style;
mod subscription;
mod theme;
mod toast;
mod widgets;
mod window_state;

use clap::Parser;

/// Desktop media-library browser for Jellyfin-compatible servers.
#[derive(Debug, Parser)]
#[command(name = "kurage", version, about)]
struct Args {
    /// Server URL to pre-fill on the login form, overriding the saved
    /// and configured values.
    #[arg(long)]
    server: Option<String>,
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kurage=info".into()),
        )
        .init();

    let args = Args::parse();

    let ws = window_state::WindowState::load();
    let mut win = iced::window::Settings {
        size: ws.size(),
        ..Default::default()
    };

    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    let server_override = args.server;
    iced::application(
        move || app::Kurage::new(server_override.clone()),
        app::Kurage::update,
        app::Kurage::view,
    )
    .title(app::Kurage::title)
    .subscription(app::Kurage::subscription)
    .theme(app::Kurage::theme)
    .window(win)
    .run()
}
