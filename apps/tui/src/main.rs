mod app;
mod cli;
mod config;
mod data;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = config::init_app_config()?;
    let interactive = !args.wants_headless() && is_terminal();
    logging::init(&config, interactive)?;

    let (store, load_error) = data::load_or_unavailable(&config.data_path).await;
    let mut app = App::new(&config, store, load_error);

    if !interactive {
        return event::run_headless(&mut app, &args).await;
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
