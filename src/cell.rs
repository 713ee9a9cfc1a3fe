use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Hidden,
    Flagged,
    Revealed,
    RevealedMine,
}

/// One square of the field. Visibility and the mine flag are independent:
/// a mined cell stays `Hidden` or `Flagged` until it is revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    visibility: Visibility,
    mined: bool,
}

impl Cell {
    pub fn new() -> Self { Self::default() }

    pub fn reveal(&mut self) {
        self.visibility = if self.mined { Visibility::RevealedMine } else { Visibility::Revealed };
    }

    pub fn flag(&mut self) { self.visibility = Visibility::Flagged; }
    pub fn unflag(&mut self) { self.visibility = Visibility::Hidden; }

    /// Flip between `Hidden` and `Flagged`. Revealed cells are left alone and
    /// `false` is returned.
    pub fn toggle_flag(&mut self) -> bool {
        match self.visibility {
            Visibility::Flagged => { self.unflag(); true }
            Visibility::Hidden => { self.flag(); true }
            Visibility::Revealed | Visibility::RevealedMine => false,
        }
    }

    pub fn plant_mine(&mut self) { self.mined = true; }

    pub fn visibility(&self) -> Visibility { self.visibility }
    pub fn is_revealed(&self) -> bool {
        matches!(self.visibility, Visibility::Revealed | Visibility::RevealedMine)
    }
    pub fn is_flagged(&self) -> bool { self.visibility == Visibility::Flagged }
    pub fn is_hidden(&self) -> bool { self.visibility == Visibility::Hidden }
    pub fn is_mined(&self) -> bool { self.mined }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self.visibility {
            Visibility::Hidden => '#',
            Visibility::Flagged => '@',
            Visibility::Revealed => '?',
            Visibility::RevealedMine => 'X',
        };
        write!(f, "{}", ch)
    }
}
