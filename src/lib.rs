pub mod cell;
pub mod coordinate;
pub mod error;
pub mod generator;
pub mod minefield;
pub mod session;
pub mod tui;

pub use cell::{Cell, Visibility};
pub use coordinate::Coordinate;
pub use error::{Error, ErrorKind, Result};
pub use generator::{Generator, Width};
pub use minefield::{CellState, FloodReport, Minefield};
pub use session::{Action, GameConfig, Outcome, Phase, Session};
