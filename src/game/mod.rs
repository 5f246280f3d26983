//! Game modes and the table's extension points.
//!
//! The table does not deal real cards or take bets yet. [`TableHooks`] marks
//! where that logic plugs in, and [`start_game`] fixes the order in which it
//! runs relative to graphics setup and the first frame.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::{ConfigError, GfxError};
use crate::gpu::backend::Gl;
use crate::gpu::scene::RenderSession;
use crate::gpu::texture::PendingTexture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Endless,
    Money,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Endless => "endless",
            GameMode::Money => "money",
        }
    }

    pub fn uses_betting(self) -> bool {
        matches!(self, GameMode::Money)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "endless" => Ok(GameMode::Endless),
            "money" => Ok(GameMode::Money),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Table logic invoked while a game starts. Both hooks default to no-ops.
pub trait TableHooks {
    /// Runs for money games only, before any cards are dealt.
    fn setup_betting_system(&mut self) {}

    fn deal_initial_cards(&mut self) {}
}

/// The shipped table: no betting, no dealing.
#[derive(Debug, Default)]
pub struct StubTable;

impl TableHooks for StubTable {}

pub struct StartedGame<G: Gl> {
    pub mode: GameMode,
    pub session: RenderSession<G>,
    pub texture_load: PendingTexture<G>,
}

/// Sets up graphics, then runs the table hooks for `mode`.
///
/// The caller starts the texture load and the render loop afterwards, so the
/// hooks always finish before the first frame is drawn.
pub fn start_game<G: Gl, H: TableHooks>(
    gl: &G,
    mode: GameMode,
    config: &GameConfig,
    hooks: &mut H,
) -> Result<StartedGame<G>, GfxError> {
    let (session, texture_load) = RenderSession::init(gl, config)?;
    if !session.program().is_ready() {
        log::warn!("starting {mode} game without a shader program");
    }

    if mode.uses_betting() {
        hooks.setup_betting_system();
    }
    hooks.deal_initial_cards();

    Ok(StartedGame {
        mode,
        session,
        texture_load,
    })
}
