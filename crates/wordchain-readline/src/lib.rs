//! Terminal player for the Word Chain game.

pub mod client;
pub mod input;
pub mod render;

pub use client::{DEFAULT_SERVER, GameClient, NewGamePayload};
pub use input::{Command, parse_line};
