/// String case-conversion command.
pub mod case;
/// Document classification command.
pub mod classify;
/// Object key-case conversion command.
pub mod convert;
/// Duration phrasing command.
pub mod duration;
/// Host-environment report command.
pub mod env;

mod util;
