//! Level state - load-scoped context and the rules that shape a load

mod context;
mod rules;

pub use context::{LoadContext, LoadPhase, WorldSettings};
pub use rules::{GameRules, Skill};
