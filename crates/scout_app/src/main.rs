mod app;
mod effects;
mod logging;
mod persistence;
mod ui;

fn main() -> anyhow::Result<()> {
    // The terminal belongs to the UI, so logs go to a file.
    logging::initialize(logging::LogDestination::File);
    app::run_app()
}
