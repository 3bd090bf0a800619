mod app;
mod config;
mod game_screen;
mod session;
mod start_screen;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::{BoardSize, FirstPlayerMode};
use common::{log, log_error, log_warn, logger};
use eframe::egui;

use app::TotitoApp;
use config::{Config, get_config_manager};
use start_screen::StartScreen;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    Random,
    X,
    O,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(value: FirstArg) -> Self {
        match value {
            FirstArg::Random => FirstPlayerMode::Random,
            FirstArg::X => FirstPlayerMode::X,
            FirstArg::O => FirstPlayerMode::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "totito_client", about = "Two-player tic-tac-toe")]
struct Args {
    /// Path of the YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board size: 3, 4 or 5.
    #[arg(long)]
    size: Option<usize>,

    #[arg(long)]
    player_x: Option<String>,

    #[arg(long)]
    player_o: Option<String>,

    /// Who moves first.
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Seed for the random starting mark.
    #[arg(long)]
    seed: Option<u64>,

    /// Go straight to the game screen.
    #[arg(long)]
    skip_start: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(args: &Args) -> (Config, Option<String>) {
    let manager = get_config_manager(args.config.clone());
    match manager.get_config() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err.to_string())),
    }
}

/// Parses `--size`; an unsupported value is logged and returned as its message.
fn board_size_arg(size: usize) -> Result<BoardSize, String> {
    BoardSize::new(size).map_err(|err| {
        log_error!("{}", err);
        err.to_string()
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (mut config, config_error) = load_config(&args);

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix, config.log_level);

    if let Some(err) = config_error {
        log_warn!("Using default config: {}", err);
    }

    if let Some(size) = args.size {
        config.board_size = board_size_arg(size)?;
    }
    if let Some(first) = args.first {
        config.first_player = first.into();
    }

    let start_screen = StartScreen::new(&config).with_names(
        args.player_x.clone().unwrap_or_default(),
        args.player_o.clone().unwrap_or_default(),
    );

    let app = if args.skip_start {
        TotitoApp::with_game(start_screen, args.seed)
    } else {
        TotitoApp::new(start_screen, args.seed)
    };

    log!("Starting tic-tac-toe client");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;

    Ok(())
}
