//! GateIntent- und GateCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::GateCommand;
pub use intent::GateIntent;
