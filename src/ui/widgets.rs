//! Reusable UI widgets
//!
//! Chrome shared by the demo screen: the status bar, transient flash
//! messages, and the help overlay.

use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Clear the line first
    frame.render_widget(Clear, status_area);

    // Left side
    let left_widget = Paragraph::new(left_content).style(theme.text_dim());

    // Right side
    let right_len = right_content.len() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: right_len.min(status_area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Render a success/error flash message (bottom of screen)
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]));

    frame.render_widget(flash, flash_area);
}

/// Render the keybindings overlay
pub fn render_help_popup(frame: &mut Frame, theme: &Theme, area: Rect) {
    let bindings: &[(&str, &str)] = &[
        ("Space", "Pause/resume the sweep"),
        ("r", "Restart the sweep"),
        ("t", "Cycle theme"),
        ("h", "Toggle HUD"),
        ("?", "Toggle this help"),
        ("q", "Quit"),
    ];

    let mut content = vec![Line::raw("")];
    for (key, action) in bindings {
        content.push(Line::from(vec![
            Span::styled(format!("  {:<7}", key), theme.title()),
            Span::styled(*action, theme.text()),
        ]));
    }
    content.push(Line::raw(""));

    let popup_width = 40.min(area.width.saturating_sub(4));
    let popup_height = (content.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(theme.title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.text());

    let popup = Paragraph::new(content).block(block);
    frame.render_widget(popup, popup_area);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_rect_oversized() {
        let area = Rect::new(0, 0, 10, 5);
        let popup = centered_rect(40, 20, area);
        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 0);
    }
}
