use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EvalError;

/// Value of an ace counted high.
pub const ACE_HIGH: u8 = 14;
/// Value of an ace counted low. Only ever produced by [`Card::low_card`].
pub const ACE_LOW: u8 = 1;

/// Represents one of the four suits.
/// The declaration order is the deck order used by [`Card`]'s `Ord`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Suit following this one in deck order, wrapping from spades to clubs.
    pub fn next(self) -> Suit {
        match self {
            Suit::Clubs => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
            Suit::Hearts => Suit::Spades,
            Suit::Spades => Suit::Clubs,
        }
    }

    /// Lowercase letter used by the card notation.
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

/// A single playing card: a suit and a rank value in `1..=14`.
///
/// Equality (`==`) is identity: same suit and same value. Hand evaluation
/// compares ranks with [`same_rank`] instead, which ignores the suit.
///
/// The derived `Ord` is deck order, suit first and value second, so clubs
/// 2..=14 sort before diamonds 2..=14 and so on. It says nothing about hand
/// strength.
///
/// # Examples
///
/// ```
/// use fivecard_engine::cards::{Card, Suit, same_rank, identical};
///
/// let ace = Card::new(Suit::Hearts, 14).unwrap();
/// let other = "s14".parse::<Card>().unwrap();
/// assert!(same_rank(&ace, &other));
/// assert!(!identical(&ace, &other));
/// assert_eq!(ace.low_card().value(), 1);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "CardRepr")]
pub struct Card {
    suit: Suit,
    value: u8,
}

#[derive(Deserialize)]
struct CardRepr {
    suit: Suit,
    value: u8,
}

impl TryFrom<CardRepr> for Card {
    type Error = EvalError;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        Card::new(repr.suit, repr.value)
    }
}

impl Card {
    /// Creates a card, rejecting values outside `1..=14`.
    pub fn new(suit: Suit, value: u8) -> Result<Card, EvalError> {
        if !(ACE_LOW..=ACE_HIGH).contains(&value) {
            return Err(EvalError::InvalidCard { suit, value });
        }
        Ok(Card { suit, value })
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank value. Callers compare cards against raw integers through this.
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_ace(&self) -> bool {
        self.value == ACE_HIGH
    }

    pub fn is_ace_low(&self) -> bool {
        self.value == ACE_LOW
    }

    /// The ace-low view of this card: an ace becomes value 1, anything else
    /// is returned unchanged.
    pub fn low_card(&self) -> Card {
        if self.is_ace() {
            Card {
                suit: self.suit,
                value: ACE_LOW,
            }
        } else {
            *self
        }
    }

    /// Next card in deck order. An ace wraps to the low ace of the next suit.
    pub fn successor(&self) -> Card {
        if self.is_ace() {
            Card {
                suit: self.suit.next(),
                value: ACE_LOW,
            }
        } else {
            Card {
                suit: self.suit,
                value: self.value + 1,
            }
        }
    }

    /// True when `other` has the rank directly above this card, in any suit.
    /// An ace precedes nothing.
    pub fn precedes(&self, other: &Card) -> bool {
        !self.is_ace() && same_rank(&self.successor(), other)
    }

    /// Like [`Card::precedes`], but `other` must also be in the same suit.
    pub fn strictly_precedes(&self, other: &Card) -> bool {
        !self.is_ace() && identical(&self.successor(), other)
    }
}

/// Rank equality: suits are ignored.
pub fn same_rank(a: &Card, b: &Card) -> bool {
    a.value == b.value
}

/// Full identity: suit and rank both match.
pub fn identical(a: &Card, b: &Card) -> bool {
    a.suit == b.suit && a.value == b.value
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.letter(), self.value)
    }
}

/// Parses the shorthand notation: a suit letter (`h`, `d`, `c`, `s`, any
/// case) followed by a value in `2..=14`, e.g. `h14` for the ace of hearts.
impl FromStr for Card {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EvalError::InvalidCardNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let suit = chars.next().and_then(Suit::from_letter).ok_or_else(invalid)?;
        let value: u8 = chars.as_str().parse().map_err(|_| invalid())?;
        if !(2..=ACE_HIGH).contains(&value) {
            return Err(invalid());
        }
        Ok(Card { suit, value })
    }
}

/// The 52 physical cards in deck order: every suit with values 2 through 14.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &suit in &all_suits() {
        for value in 2..=ACE_HIGH {
            v.push(Card { suit, value });
        }
    }
    v
}
