use super::card::Card;
use super::street::Street;

/// Community cards, always a legal street size.
#[derive(Debug, Default, Clone, Hash, Eq, PartialEq)]
pub struct Board {
    cards: Vec<Card>,
    street: Street,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = String;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let street = Street::try_from(cards.len())?;
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(format!("duplicate board card: {}", card));
            }
        }
        Ok(Self { cards, street })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
