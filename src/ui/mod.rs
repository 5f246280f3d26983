//! Menu flow: start panel, mode selection, then the game canvas.

mod app;

pub use app::App;

use crate::game::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    ModeSelect,
    Playing(GameMode),
}

/// Which of the three panels is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub start: bool,
    pub mode_select: bool,
    pub canvas: bool,
}

impl Panels {
    #[cfg(test)]
    pub fn visible_count(self) -> usize {
        [self.start, self.mode_select, self.canvas]
            .into_iter()
            .filter(|shown| *shown)
            .count()
    }
}

impl Screen {
    pub fn panels(self) -> Panels {
        Panels {
            start: self == Screen::Start,
            mode_select: self == Screen::ModeSelect,
            canvas: matches!(self, Screen::Playing(_)),
        }
    }

    /// Start button: only leaves the start panel.
    pub fn press_start(self) -> Screen {
        match self {
            Screen::Start => Screen::ModeSelect,
            other => other,
        }
    }

    /// Mode button. `None` unless the mode panel is showing, which keeps a
    /// page to a single game session.
    pub fn choose_mode(self, mode: GameMode) -> Option<Screen> {
        match self {
            Screen::ModeSelect => Some(Screen::Playing(mode)),
            _ => None,
        }
    }
}
