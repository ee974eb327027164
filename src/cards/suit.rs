#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const COUNT: usize = 4;
    pub const MAX: Self = Suit::Spade;
    pub const MIN: Self = Suit::Club;

    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
///
/// Each Suit owns a contiguous lane of 13 bits in a Hand bitstring.
/// ♠ lane
/// xxxxxxxxxxxx 1111111111111 0000000000000 0000000000000 0000000000000
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        (super::rank::Rank::mask() as u64) << (u8::from(s) as usize * 13)
    }
}

/// str isomorphism, accepting ascii letters or card symbols
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "c" | "C" | "♣" => Ok(Suit::Club),
            "d" | "D" | "♦" => Ok(Suit::Diamond),
            "h" | "H" | "♥" => Ok(Suit::Heart),
            "s" | "S" | "♠" => Ok(Suit::Spade),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "♣",
                Suit::Diamond => "♦",
                Suit::Heart => "♥",
                Suit::Spade => "♠",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_partition_the_deck() {
        let lanes = Suit::all().map(u64::from);
        assert_eq!(lanes.iter().fold(0u64, |a, b| a | b), (1u64 << 52) - 1);
        assert_eq!(lanes.iter().map(|l| l.count_ones()).sum::<u32>(), 52);
    }

    #[test]
    fn letters_and_symbols() {
        assert_eq!(Suit::try_from("s"), Ok(Suit::Spade));
        assert_eq!(Suit::try_from("♠"), Ok(Suit::Spade));
        assert_eq!(Suit::try_from("D"), Ok(Suit::Diamond));
        assert!(Suit::try_from("x").is_err());
    }
}
