use ratatui::style::Color;

use crate::model::{TaskStatus, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Color,
    pub text: Color,
    pub dim: Color,
    pub message: Color,
    pub message_bg: Color,
    pub category: Color,
    pub pending: Color,
    pub in_progress: Color,
    pub done: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title: Color::Indexed(86),
            text: Color::Indexed(252),
            dim: Color::Indexed(240),
            message: Color::Indexed(245),
            message_bg: Color::Indexed(236),
            category: Color::Indexed(63),
            pending: Color::Indexed(250),
            in_progress: Color::Indexed(214),
            done: Color::Indexed(34),
            error: Color::Indexed(203),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "title" => theme.title = color,
                "text" => theme.text = color,
                "dim" => theme.dim = color,
                "message" => theme.message = color,
                "message_bg" => theme.message_bg = color,
                "category" => theme.category = color,
                "pending" => theme.pending = color,
                "in_progress" => theme.in_progress = color,
                "done" => theme.done = color,
                "error" => theme.error = color,
                _ => {}
            }
        }

        theme
    }

    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }
}
