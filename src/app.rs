//! Application state and event handling
//!
//! This is the core of glowcard, managing:
//! - The demo screen and its sweep clock
//! - Event handling (keyboard input)
//! - Theme and config changes

use crate::config::Config;
use crate::glow::{DemoGlowingBorders, Sweep, SweepClock};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// How long a flash message stays visible.
const FLASH_TTL: Duration = Duration::from_secs(3);

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,

    // The demo screen and its animation clock
    pub demo: DemoGlowingBorders,
    pub clock: SweepClock,

    // Overlay state
    pub show_help: bool,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)

    frame_stats: FrameStats,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_name(config.theme);
        Self {
            should_quit: false,
            config,
            theme,
            demo: DemoGlowingBorders::new(),
            clock: SweepClock::new(Sweep::default()),
            show_help: false,
            flash_message: None,
            frame_stats: FrameStats::new(),
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                self.clock.toggle_paused();
            }
            KeyCode::Char('r') => {
                self.clock.restart();
            }
            KeyCode::Char('t') => {
                self.cycle_theme();
            }
            KeyCode::Char('h') => {
                self.config.show_hud = !self.config.show_hud;
                self.save_config();
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
            }
            _ => {}
        }
        Ok(())
    }

    /// Per-frame bookkeeping: FPS measurement and flash expiry
    pub fn on_frame(&mut self) {
        self.frame_stats.update();

        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed() >= FLASH_TTL {
                self.flash_message = None;
            }
        }
    }

    /// Frames per second over the last measurement window
    pub fn measured_fps(&self) -> f32 {
        self.frame_stats.fps
    }

    /// Switch to the next theme and persist the choice
    fn cycle_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        self.theme = Theme::from_name(self.config.theme);
        self.show_flash(&format!("Theme: {}", self.config.theme.as_str()), false);
        self.save_config();
    }

    fn save_config(&mut self) {
        if let Err(e) = self.config.save() {
            self.show_flash(&format!("Save failed: {}", e), true);
        }
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}

/// Rolling FPS measurement over one-second windows.
struct FrameStats {
    frames: u32,
    window_start: Instant,
    fps: f32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
            fps: 0.0,
        }
    }

    fn update(&mut self) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= Duration::from_secs(1) {
            self.fps = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}
