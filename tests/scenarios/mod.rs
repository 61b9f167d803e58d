//! Load scenarios
//!
//! - decode: typed fields, warnings, empty records, encoding round-trips
//! - dispatch: world binding, items, unresolved and missing classnames
//! - filtering: game mode, skill and map overrides
//! - teams: chain linking
//! - failures: fatal load errors
//! - config: configuration files and environment

pub mod config;
pub mod decode;
pub mod dispatch;
pub mod filtering;
