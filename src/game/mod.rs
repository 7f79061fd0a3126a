//! Flappy game core.
//!
//! A bird falls under gravity, the player flaps to counter it, and the bird
//! must thread the gaps of pipe pairs scrolling in from the right. Everything
//! here is pure simulation: the renderer reads a [`SceneSnapshot`] and feeds
//! input back through [`FlappySession`] commands.

/// Generate the standard `ALL`, `from_index()` and `name()` methods for the
/// three-variant difficulty enum (Easy / Medium / Hard).
macro_rules! difficulty_enum_impl {
    ($name:ident) => {
        impl $name {
            pub const ALL: [$name; 3] = [$name::Easy, $name::Medium, $name::Hard];

            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or($name::Easy)
            }

            pub fn name(&self) -> &'static str {
                match self {
                    Self::Easy => "Easy",
                    Self::Medium => "Medium",
                    Self::Hard => "Hard",
                }
            }
        }
    };
}

pub mod collision;
pub mod events;
pub mod logic;
pub mod physics;
pub mod snapshot;
pub mod spawner;
pub mod types;

pub use events::{EventLog, SessionEvent};
pub use logic::{process_input, FlappyInput};
pub use snapshot::{EntityRect, PipeView, SceneSnapshot};
pub use types::{
    Bird, CrashCause, DifficultyProfile, FlappyDifficulty, FlappySession, GamePhase, Pipe,
    PipeRole,
};
