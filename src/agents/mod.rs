//! Guessing agents
//!
//! The Agent contract plus the built-in policies: candidate elimination,
//! random guessing and an interactive human player.

mod agent;
mod elimination;
mod human;
mod random;

pub use agent::{Agent, AgentError, AgentKind, AgentMove, AgentType, GameSetup, Percept};
pub use elimination::EliminationAgent;
pub use human::{HumanAgent, HumanInput, InputSource, KeyInput, LineInput};
pub use random::RandomAgent;
