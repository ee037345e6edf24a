/// Betting round, determined by how many community cards are showing.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

/// board size injection. only 0, 3, 4, 5 name a street.
impl TryFrom<usize> for Street {
    type Error = String;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            _ => Err(format!("no street has {} board cards", n)),
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
    fn board_sizes() {
        assert_eq!(Street::try_from(0), Ok(Street::Pref));
        assert_eq!(Street::try_from(3), Ok(Street::Flop));
        assert_eq!(Street::try_from(4), Ok(Street::Turn));
        assert_eq!(Street::try_from(5), Ok(Street::Rive));
        assert!(Street::try_from(1).is_err());
        assert!(Street::try_from(6).is_err());
    }
}
