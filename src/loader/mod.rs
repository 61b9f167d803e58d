//! Level loading - from entity string to a linked entity pool
//!
//! - [`parse_record`] decodes one `{ ... }` record
//! - [`OverrideTable`] patches known map problems
//! - [`inhibit_reason`] filters entities by game mode and skill
//! - [`find_teams`] links team chains once every entity exists
//! - [`Spawner`] runs the whole load

mod error;
mod overrides;
mod policy;
mod record;
mod spawner;
mod teams;

pub use error::LoadError;
pub use overrides::{OverrideAction, OverrideMode, OverrideRule, OverrideTable};
pub use policy::{inhibit_reason, InhibitReason};
pub use record::parse_record;
pub use spawner::{LoadSummary, Spawner};
pub use teams::{find_teams, TeamStats};
