#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::collapsible_if)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use maze_explorer::config::ExplorerConfig;
use maze_explorer::maze::{Maze, SimRobot, run_episode};
use maze_explorer::navigation::Explorer;
use maze_explorer::ui::{field::compute_maze_grid, render::{draw_ui, hud_line}};
use maze_explorer::{Result, logging};

#[derive(Parser)]
#[command(
    name = "maze_explorer",
    version,
    about = "Explore a generated maze with a coordinate-free backtracking controller"
)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for maze generation and the controller's choices.
    #[arg(long)]
    seed: Option<u64>,
    /// Maze width in tiles.
    #[arg(long)]
    width: Option<usize>,
    /// Maze height in tiles.
    #[arg(long)]
    height: Option<usize>,
    /// Run without the terminal viewer and print one line per run.
    #[arg(long)]
    headless: bool,
    /// Runs to perform in headless mode.
    #[arg(long)]
    runs: Option<u32>,
    /// Step budget per run.
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = load_config(&cli)?;
    let seed = config.maze.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, width = config.maze.width, height = config.maze.height, "generating maze");

    let mut rng = StdRng::seed_from_u64(seed);
    let maze = Maze::generate(config.maze.width, config.maze.height, &mut rng)?;
    let mut robot = SimRobot::new(maze);
    let mut explorer = Explorer::new(config.controller.memory_capacity);

    if cli.headless {
        run_headless(&config, &mut robot, &mut explorer, &mut rng)
    } else {
        run_viewer(&config, &mut robot, &mut explorer, &mut rng)
    }
}

fn load_config(cli: &Cli) -> Result<ExplorerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            ExplorerConfig::load(path)?
        }
        None => ExplorerConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.maze.seed = Some(seed);
    }
    if let Some(width) = cli.width {
        config.maze.width = width;
    }
    if let Some(height) = cli.height {
        config.maze.height = height;
    }
    if let Some(runs) = cli.runs {
        config.runtime.runs = runs;
    }
    if let Some(max_steps) = cli.max_steps {
        config.runtime.max_steps = max_steps;
    }

    config.validate()?;
    Ok(config)
}

fn run_headless(
    config: &ExplorerConfig,
    robot: &mut SimRobot,
    explorer: &mut Explorer,
    rng: &mut StdRng,
) -> Result<()> {
    for run in 0..config.runtime.runs {
        if run > 0 {
            robot.new_run();
            explorer.on_run_reset();
        }
        let outcome = run_episode(robot, explorer, rng, config.runtime.max_steps)?;
        println!(
            "run {run}: {} in {} steps (max junction depth {}, collisions {})",
            if outcome.reached_exit { "exit reached" } else { "step budget spent" },
            outcome.steps,
            outcome.max_depth,
            outcome.collisions
        );
    }
    Ok(())
}

fn run_viewer(
    config: &ExplorerConfig,
    robot: &mut SimRobot,
    explorer: &mut Explorer,
    rng: &mut StdRng,
) -> Result<()> {
    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.runtime.tick_ms);
    let res = run_app(&mut terminal, robot, explorer, rng, tick_rate, config.runtime.max_steps);

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    robot: &mut SimRobot,
    explorer: &mut Explorer,
    rng: &mut StdRng,
    tick_rate: Duration,
    max_steps: u64,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        // 1. Update
        if last_tick.elapsed() >= tick_rate {
            if !robot.at_exit() && robot.steps() < max_steps {
                let chosen = explorer.control(&*robot, rng)?;
                robot.apply(chosen);
            }
            last_tick = Instant::now();
        }

        // 2. Render
        terminal.draw(|f| {
            let area = f.area();
            let rows = (area.height as usize).saturating_sub(1); // -1 for HUD
            let cols = area.width as usize;

            let grid = compute_maze_grid(robot, rows, cols);
            draw_ui(f, grid, &hud_line(explorer, robot));
        })?;

        // 3. Input
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') => {
                        robot.new_run();
                        explorer.on_run_reset();
                    }
                    _ => {}
                }
            }
        }
    }
}
