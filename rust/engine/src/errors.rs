use thiserror::Error;

use crate::cards::Suit;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid hand: expected 5 cards, got {count}")]
    InvalidHand { count: usize },
    #[error("Invalid card notation: {notation:?}")]
    InvalidCardNotation { notation: String },
    #[error("Invalid card: {suit:?} with value {value} (expected 1..=14)")]
    InvalidCard { suit: Suit, value: u8 },
}
