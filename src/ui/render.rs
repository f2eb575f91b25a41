//! Main rendering module
//!
//! Draws the complete UI each frame: a one-line header, the demo area
//! with the three glowing cards, and a status bar with key hints and the
//! optional HUD.

use crate::app::App;
use crate::glow::demo::{BACKDROP, CARD_HEIGHT, CARD_SPACING, SCREEN_PADDING};
use crate::types::CellMetrics;
use crate::ui::raster::{to_color, Rasterizer};
use crate::ui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: header, demo area, status bar
    let layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_demo(frame, app, layout[1]);
    render_status_bar(frame, app, layout[2]);

    if app.show_help {
        widgets::render_help_popup(frame, &app.theme, area);
    }

    // Flash message (transient feedback)
    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, &app.theme, area);
    }
}

/// Render the one-line header
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    frame.render_widget(Block::default().style(theme.text()), area);

    let title = Paragraph::new(Line::styled(" glowcard · animated glow borders", theme.title()));
    frame.render_widget(title, area);

    let state = if app.clock.is_paused() { "paused " } else { "" };
    if !state.is_empty() {
        let right = Paragraph::new(Line::styled(state, theme.text_dim()))
            .alignment(Alignment::Right);
        frame.render_widget(right, area);
    }
}

/// Render the demo screen: three cards stacked on the black backdrop
fn render_demo(frame: &mut Frame, app: &App, area: Rect) {
    // Backdrop behind and between the cards
    frame.render_widget(
        Block::default().style(Style::default().bg(to_color(BACKDROP))),
        area,
    );

    let raster = Rasterizer::new(CellMetrics::default(), BACKDROP);
    let metrics = raster.metrics();

    let inner = area.inner(Margin::new(
        metrics.cols(SCREEN_PADDING),
        metrics.rows(SCREEN_PADDING),
    ));
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let card_rows = metrics.rows(CARD_HEIGHT);
    let gap_rows = metrics.rows(CARD_SPACING);
    let progress = app.clock.progress();
    let buf = frame.buffer_mut();

    for (i, card) in app.demo.cards().iter().enumerate() {
        let y = inner.top() + i as u16 * (card_rows + gap_rows);
        // Skip cards that no longer fit in a small terminal
        if y + card_rows > inner.bottom() {
            break;
        }
        let card_area = Rect::new(inner.left(), y, inner.width, card_rows);
        raster.render_card(card, card_area, progress, buf);
    }
}

/// Render status bar with keybindings and the optional HUD
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = if app.clock.is_paused() {
        "[Space] Resume  [r] Restart  [t] Theme  [h] HUD  [?] Help  [q] Quit"
    } else {
        "[Space] Pause  [r] Restart  [t] Theme  [h] HUD  [?] Help  [q] Quit"
    };

    let hud = if app.config.show_hud {
        format!(
            "progress {:+.2} · {:.0} fps · {}",
            app.clock.progress(),
            app.measured_fps(),
            app.config.theme.as_str()
        )
    } else {
        String::new()
    };

    widgets::render_status_bar(frame, hints, &hud, theme, area);
}
