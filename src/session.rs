//! One game: a field, its generator, and the turn rules around them.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use crate::cell::Visibility;
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::minefield::{CellState, Minefield};

/// Starting parameters. Together they fully determine the mine layout for a
/// given first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub last_column: char,
    pub last_row: u32,
    pub mines: usize,
    pub bits: u32,
    pub seed: i128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstMove,
    Playing,
    Lost,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// `L`: clear a cell, flooding through empty regions.
    Clear,
    /// `M`: toggle a flag.
    Flag,
    /// `debug`: uncover the whole field.
    RevealAll,
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L" => Ok(Action::Clear),
            "M" => Ok(Action::Flag),
            "debug" => Ok(Action::RevealAll),
            other => Err(Error::InvalidAction(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Lost,
    Won,
}

pub struct Session {
    field: Minefield,
    generator: Generator,
    mines: usize,
    phase: Phase,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self> {
        if config.mines < 1 {
            return Err(Error::NoMines);
        }
        let generator = Generator::new(config.bits, config.seed)?;
        let field = Minefield::new(config.last_column, config.last_row)?;
        info!(
            corner = %field.corner(),
            mines = config.mines,
            generator = %generator,
            "session started"
        );
        Ok(Self { field, generator, mines: config.mines, phase: Phase::AwaitingFirstMove })
    }

    pub fn field(&self) -> &Minefield { &self.field }
    pub fn generator(&self) -> &Generator { &self.generator }
    pub fn mines(&self) -> usize { self.mines }
    pub fn phase(&self) -> Phase { self.phase }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Lost | Phase::Won)
    }

    /// Plant the mines around `coord` and clear it. The first cleared cell is
    /// never a mine and never borders one.
    pub fn first_move(&mut self, coord: &Coordinate) -> Result<Outcome> {
        if self.phase != Phase::AwaitingFirstMove {
            return self.play(Action::Clear, coord);
        }
        self.field.plant_mines(coord, &mut self.generator, self.mines)?;
        self.phase = Phase::Playing;
        self.field.reveal_flood(coord)?;
        Ok(self.settle())
    }

    /// Apply one move. Moves on a finished game change nothing and report the
    /// final outcome again.
    #[instrument(level = "trace", skip(self, coord), fields(coord = %coord))]
    pub fn play(&mut self, action: Action, coord: &Coordinate) -> Result<Outcome> {
        match self.phase {
            Phase::Lost => return Ok(Outcome::Lost),
            Phase::Won => return Ok(Outcome::Won),
            Phase::AwaitingFirstMove if action == Action::Clear => return self.first_move(coord),
            _ => {}
        }
        debug!(?action, "move");
        match action {
            Action::Flag => {
                if !self.field.toggle_flag(coord)? {
                    debug!(%coord, "cannot flag a revealed cell");
                }
                Ok(Outcome::Continue)
            }
            Action::Clear => {
                if self.field.reveal_flood(coord)?.target == Visibility::RevealedMine {
                    self.phase = Phase::Lost;
                    info!(%coord, "mine hit");
                    return Ok(Outcome::Lost);
                }
                Ok(self.settle())
            }
            Action::RevealAll => {
                self.field.reveal_all();
                Ok(self.settle())
            }
        }
    }

    fn settle(&mut self) -> Outcome {
        if self.phase == Phase::Playing && self.field.is_won() {
            self.phase = Phase::Won;
            info!("field cleared");
            return Outcome::Won;
        }
        Outcome::Continue
    }

    pub fn flagged(&self) -> usize {
        self.field.cells_by_state(CellState::Flagged).len()
    }

    /// `[Bandeiras <flagged>/<mines>]`
    pub fn flag_counter(&self) -> String {
        format!("[Bandeiras {}/{}]", self.flagged(), self.mines)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   {}", self.flag_counter())?;
        write!(f, "{}", self.field)
    }
}
