//! glowcard - Animated glowing border cards for the terminal
//!
//! A demo of rounded cards with a traveling gradient glow around their
//! borders, rendered on the terminal cell grid.
//!
//! Features:
//! - Three demo cards (green, blue, purple) with different glow radii
//! - Pause, restart, theme cycling, and an FPS HUD
//! - Frame-paced redraw loop with a configurable target FPS
//!
//! Usage: glowcard [--fps N] [--paused]

mod app;
mod config;
mod glow;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;

fn main() -> Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("glowcard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let options = parse_args(&args)?;

    // Run the application
    let result = run_app(options);

    // Always try to restore terminal state, even on error
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"glowcard - Animated glowing border cards for the terminal

USAGE:
    glowcard [OPTIONS]

OPTIONS:
        --fps <N>    Target frame rate (1-120, overrides config)
        --paused     Start with the animation paused
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS:
    Space            Pause/resume the sweep
    r                Restart the sweep
    t                Cycle theme
    h                Toggle HUD
    ?                Show keybindings
    q                Quit

CONFIG:
    ~/.config/glowcard/config.toml
"#
    );
}

/// Options accepted on the command line
#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    fps: Option<u16>,
    start_paused: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--fps" => {
                let value = iter
                    .next()
                    .context("--fps requires a value")?;
                let fps: u16 = value
                    .parse()
                    .with_context(|| format!("Invalid --fps value: {}", value))?;
                options.fps = Some(fps);
            }
            "--paused" => options.start_paused = true,
            other => anyhow::bail!("Unknown argument: {} (try --help)", other),
        }
    }

    Ok(options)
}

fn run_app(options: CliOptions) -> Result<()> {
    // Load configuration
    let mut config = config::Config::load().context("Failed to load configuration")?;
    if let Some(fps) = options.fps {
        config.target_fps = fps;
    }

    // Create application state
    let mut app = App::new(config);
    if options.start_paused {
        app.clock.pause();
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let frame_budget = glow::frame_duration(app.config.effective_fps());

    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        app.on_frame();

        // Poll for events with the frame budget as timeout, so the
        // animation redraws at the target rate even without input
        if event::poll(frame_budget)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
