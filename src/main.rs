//! Statscout - player statistics lookup desktop application
//! Built with iced, talking to the stats REST backend

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod i18n;
mod ui;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = features::Settings::load();
    let api = app::helpers::init_api(&settings)?;
    tracing::info!("Using stats backend at {}", api.base_url());

    // Run as a daemon so window lifetime is driven by our own close handling
    iced::daemon(
        move || app::App::new(settings.clone(), api.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .antialiasing(true)
    .run()?;

    Ok(())
}
