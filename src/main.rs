mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    self as term, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use directories::ProjectDirs;
use flappy::core::constants::{CELL_PIXEL_HEIGHT, CELL_PIXEL_WIDTH, FRAME_INTERVAL_MS};
use flappy::host::{map_event, preload_all, HostInput};
use flappy::{run_frame, Field, Game, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::cell_canvas::CellCanvas;
use ui::game_scene::{layout, render_game};
use ui::terminal_audio::{Scoreboard, TerminalAudio};

const LOG_ENV_VAR: &str = "FLAPPY_LOG";

struct Options {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    mute: bool,
}

fn print_help() {
    println!("Flappy - terminal arcade game\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --config <path>  Load settings from a JSON file");
    println!("  --seed <n>       Seed pipe placement for a repeatable run");
    println!("  --mute           Do not ring the terminal bell");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!("\nLogs go to flappy.log in the data directory; set {LOG_ENV_VAR}=debug for detail.");
}

fn parse_args() -> Options {
    let mut options = Options {
        config_path: None,
        seed: None,
        mute: false,
    };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => options.config_path = Some(PathBuf::from(path)),
                None => fail("--config needs a path"),
            },
            "--seed" => match args.next().and_then(|s| s.parse().ok()) {
                Some(seed) => options.seed = Some(seed),
                None => fail("--seed needs an unsigned integer"),
            },
            "--mute" => options.mute = true,
            "--version" | "-v" => {
                println!("flappy {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => fail(&format!("Unknown option: {}", other)),
        }
    }
    options
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'flappy --help' for usage.");
    std::process::exit(1);
}

/// Send tracing output to a file; the terminal belongs to the game.
fn init_logging() {
    let Some(dirs) = ProjectDirs::from("", "", "flappy") else {
        return;
    };
    let dir = dirs.data_dir();
    let file = fs::create_dir_all(dir).and_then(|_| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("flappy.log"))
    });
    let file = match file {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            return;
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn load_config(options: &Options) -> io::Result<GameConfig> {
    let config = match (&options.config_path, GameConfig::default_path()) {
        (Some(path), _) => GameConfig::load(path)?,
        (None, Some(path)) => GameConfig::load_or_default(&path)?,
        (None, None) => GameConfig::default(),
    };
    Ok(config)
}

/// Field for a terminal of `cols` x `rows` cells, treating each cell as a
/// block of pixels.
fn field_for_terminal(cols: u16, rows: u16) -> Field {
    Field::from_viewport(
        cols as u32 * CELL_PIXEL_WIDTH,
        rows as u32 * CELL_PIXEL_HEIGHT,
    )
}

fn main() -> io::Result<()> {
    let options = parse_args();
    init_logging();

    let config = load_config(&options)?;
    let (cols, rows) = term::size()?;
    let field = field_for_terminal(cols, rows);
    let mut game = Game::new(config, field, Instant::now())?;
    info!(
        width = field.width,
        height = field.height,
        seed = ?options.seed,
        "starting"
    );

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut audio = TerminalAudio::new(!options.mute);
    preload_all(&mut audio);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut game, &mut rng, &mut audio);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(score = game.score, "exiting");
    result
}

/// Frame loop: handle input until the next frame is due, then run one frame.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut Game,
    rng: &mut StdRng,
    audio: &mut TerminalAudio,
) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut scoreboard = Scoreboard::default();
    let mut next_frame = Instant::now();

    loop {
        game.fire_due_cues(Instant::now(), audio);
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match map_event(&event::read()?) {
                HostInput::Jump => game.jump(audio),
                HostInput::Quit => return Ok(()),
                HostInput::Resize { cols, rows } => {
                    // A rejected size keeps the current field; the game logs why
                    let _ = game.resize(field_for_terminal(cols, rows));
                }
                HostInput::Other => {}
            }
            continue;
        }

        let now = Instant::now();
        next_frame = now + frame_interval;
        terminal.draw(|frame| {
            let (play, _) = layout(frame.size());
            let mut canvas = CellCanvas::new(play.width, play.height, game.field());
            run_frame(game, now, rng, &mut canvas, audio, &mut scoreboard);
            render_game(frame, &canvas, &scoreboard, game.field());
        })?;
    }
}
