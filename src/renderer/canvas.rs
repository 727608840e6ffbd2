//! Drawing surface contract
//!
//! The scene only ever issues fill commands; nothing is read back.

use serde::Serialize;

use crate::Color;

/// Pixel font size for text draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: f32,
}

impl Font {
    /// Score, lives and hint lines
    pub const HUD: Font = Font { size: 16.0 };
    /// Banners
    pub const TITLE: Font = Font { size: 24.0 };
}

/// Horizontal anchor of a text draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
}

/// A 2D surface the renderer can draw on
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, align: TextAlign, color: Color);

    /// Global alpha for subsequent draws (0-1)
    fn set_opacity(&mut self, alpha: f32);
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: Font,
        align: TextAlign,
        color: Color,
    },
    Opacity {
        alpha: f32,
    },
}

/// Canvas that stores every call, for headless hosts and tests
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand back the recorded frame and start a new one
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text lines drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rectangles drawn with `color`
    pub fn rects_with(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Rect { color: c, .. } if *c == color))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, align: TextAlign, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            font,
            align,
            color,
        });
    }

    fn set_opacity(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::Opacity { alpha });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_keeps_call_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(0.0, 0.0, 320.0, 480.0, Color::BLACK);
        canvas.set_opacity(0.5);
        canvas.fill_text("hi", 10.0, 25.0, Font::HUD, TextAlign::Left, Color::GREEN);

        assert_eq!(canvas.commands().len(), 3);
        assert!(matches!(canvas.commands()[1], DrawCommand::Opacity { alpha } if alpha == 0.5));
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["hi"]);
        assert_eq!(canvas.rects_with(Color::BLACK), 1);

        let frame = canvas.take();
        assert_eq!(frame.len(), 3);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_draw_commands_serialize_tagged() {
        let cmd = DrawCommand::Opacity { alpha: 1.0 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"op":"opacity","alpha":1.0}"#);
    }
}
