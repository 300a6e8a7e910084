use crate::trig::Point;
use crate::surface::ArcStroke;
use crate::surface::Color;
use crate::surface::Rect;
use crate::surface::Surface;

use alloc::vec::Vec;

/// One call made on a [`Surface`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    FillEllipse(Rect),
    StrokeArc(ArcStroke),
    ClipToPath(ArcStroke),
    DrawLinearGradient {
        colors: [Color; 2],
        start: Point,
        end: Point,
    },
    SaveState,
    RestoreState,
}

impl Command {
    pub fn as_text(&self) -> &'static str {
        match self {
            Command::FillEllipse(_) => "FillEllipse",
            Command::StrokeArc(_) => "StrokeArc",
            Command::ClipToPath(_) => "ClipToPath",
            Command::DrawLinearGradient { .. } => "Gradient",
            Command::SaveState => "SaveState",
            Command::RestoreState => "RestoreState",
        }
    }
}

/// Surface keeping a list of the calls made on it instead of drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    pub commands: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Depth of unmatched `save_state` calls, or `None` if some
    /// `restore_state` came without a matching save.
    pub fn state_depth(&self) -> Option<usize> {
        let mut depth = 0usize;
        for command in &self.commands {
            match command {
                Command::SaveState => depth += 1,
                Command::RestoreState => depth = depth.checked_sub(1)?,
                _ => (),
            }
        }
        Some(depth)
    }

    pub fn log_commands(&self) {
        log::info!(    "| INDEX |   COMMAND    |   X   |   Y   |");

        for (i, command) in self.commands.iter().enumerate() {
            let anchor = match command {
                Command::FillEllipse(rect) => Some(rect.center()),
                Command::StrokeArc(arc) => Some(arc.center),
                Command::ClipToPath(arc) => Some(arc.center),
                Command::DrawLinearGradient { start, .. } => Some(*start),
                Command::SaveState | Command::RestoreState => None,
            };

            let name = command.as_text();
            match anchor {
                Some(p) => log::info!("| {:^5} | {:^12} | {:^5} | {:^5} |", i, name, p.x, p.y),
                None => log::info!("| {:^5} | {:^12} |       |       |", i, name),
            }
        }
    }
}

impl Surface for Recorder {
    fn fill_ellipse(&mut self, rect: Rect) {
        self.commands.push(Command::FillEllipse(rect));
    }

    fn stroke_arc(&mut self, arc: &ArcStroke) {
        self.commands.push(Command::StrokeArc(*arc));
    }

    fn clip_to_path(&mut self, path: &ArcStroke) {
        self.commands.push(Command::ClipToPath(*path));
    }

    fn draw_linear_gradient(&mut self, colors: [Color; 2], start: Point, end: Point) {
        self.commands.push(Command::DrawLinearGradient { colors, start, end });
    }

    fn save_state(&mut self) {
        self.commands.push(Command::SaveState);
    }

    fn restore_state(&mut self) {
        self.commands.push(Command::RestoreState);
    }
}
