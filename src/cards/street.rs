/// The four betting rounds of a hand.
///
/// Preflop, flop, and turn are decision points; the river is reached only
/// when the bot stayed through all three and goes straight to showdown.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// streets where the bot is asked to stay or fold
    pub const fn decisions() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn]
    }
    /// community cards visible on this street
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// community cards still hidden on this street
    pub const fn n_hidden(&self) -> usize {
        5 - self.n_observed()
    }
}

/// board size -> Street
impl TryFrom<usize> for Street {
    type Error = crate::Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            n => Err(crate::Error::InvalidInput(format!(
                "a board holds 0, 3, 4 or 5 cards, not {}",
                n
            ))),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_sizes_round_trip() {
        for street in Street::all() {
            assert_eq!(Street::try_from(street.n_observed()), Ok(*street));
        }
        assert!(Street::try_from(1).is_err());
        assert!(Street::try_from(6).is_err());
    }

    #[test]
    fn river_hides_nothing() {
        assert_eq!(Street::decisions().last(), Some(&Street::Turn));
        assert_eq!(Street::Pref.n_hidden(), 5);
        assert_eq!(Street::Rive.n_hidden(), 0);
    }
}
