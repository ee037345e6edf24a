use super::card::Card;

/// The agent's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = String;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        if a == b {
            Err(format!("duplicate hole card: {}", a))
        } else {
            Ok(Self(a, b))
        }
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = String;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] => Self::try_from((*a, *b)),
            _ => Err(format!("hole needs 2 cards, got {}", cards.len())),
        }
    }
}
