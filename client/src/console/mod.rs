mod human_input;
mod renderer;
mod scoreboard;
mod session;

pub use session::{ConsoleSession, Seat};
