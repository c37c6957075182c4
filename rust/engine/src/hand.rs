use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Suit};
use crate::errors::EvalError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Hand category. The discriminant is the category's base score, the first
/// element of every [`Score`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn base_score(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high_card",
            Category::Pair => "pair",
            Category::TwoPair => "two_pair",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full_house",
            Category::FourOfAKind => "four_of_a_kind",
            Category::StraightFlush => "straight_flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base score followed by kickers, highest priority first.
/// Scores compare lexicographically: a higher score is a stronger hand.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(Vec<u8>);

impl Score {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn base(&self) -> u8 {
        self.0[0]
    }

    pub fn kickers(&self) -> &[u8] {
        &self.0[1..]
    }
}

type Predicate = fn(&[Card; HAND_SIZE]) -> bool;

// Checked top to bottom; the first match wins, otherwise high card.
const CLASSIFIERS: [(Predicate, Category); 8] = [
    (is_straight_flush, Category::StraightFlush),
    (is_four_of_a_kind, Category::FourOfAKind),
    (is_full_house, Category::FullHouse),
    (is_flush, Category::Flush),
    (is_straight, Category::Straight),
    (is_three_of_a_kind, Category::ThreeOfAKind),
    (is_two_pair, Category::TwoPair),
    (is_pair, Category::Pair),
];

/// An immutable five-card hand.
///
/// Cards are kept sorted ascending by value; cards of equal value keep their
/// input order. Category and score are computed once at construction.
///
/// # Examples
///
/// ```
/// use fivecard_engine::hand::{Category, Hand};
///
/// let hand: Hand = "h14 h2 h3 h4 h5".parse().unwrap();
/// assert_eq!(hand.category(), Category::StraightFlush);
/// assert_eq!(hand.score().as_slice(), &[8, 5, 4, 3, 2, 1]);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    category: Category,
    score: Score,
}

impl Hand {
    /// Builds a hand from exactly five cards.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidHand`] for any other number of cards.
    pub fn new(input: &[Card]) -> Result<Hand, EvalError> {
        let mut cards: [Card; HAND_SIZE] = input
            .try_into()
            .map_err(|_| EvalError::InvalidHand { count: input.len() })?;
        cards.sort_by_key(Card::value);

        let category = classify(&cards);
        let score = compute_score(&cards, category);
        let hand = Hand {
            cards,
            category,
            score,
        };
        debug!(
            hand = %hand,
            category = %category,
            score = ?hand.score.as_slice(),
            "classified hand"
        );
        Ok(hand)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn values(&self) -> [u8; HAND_SIZE] {
        self.cards.map(|c| c.value())
    }

    pub fn suits(&self) -> [Suit; HAND_SIZE] {
        self.cards.map(|c| c.suit())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn is_straight(&self) -> bool {
        is_straight(&self.cards)
    }

    pub fn is_flush(&self) -> bool {
        is_flush(&self.cards)
    }

    /// True when the hand is a straight only with its aces counted low.
    pub fn is_aces_low_straight(&self) -> bool {
        is_aces_low_straight(&self.cards)
    }

    /// The hand with every ace valued 1, re-sorted by value.
    pub fn aces_low(&self) -> [Card; HAND_SIZE] {
        aces_low(&self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = EvalError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

/// Parses five card notations separated by whitespace or punctuation,
/// e.g. `"h3 d3 c9 s10 c11"` or `"h3,d3,c9,s10,c11"`.
impl FromStr for Hand {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::new(&cards)
    }
}

/// Orders two hands by score.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.score.cmp(&b.score)
}

fn classify(cards: &[Card; HAND_SIZE]) -> Category {
    CLASSIFIERS
        .iter()
        .find(|(matches, _)| matches(cards))
        .map(|&(_, category)| category)
        .unwrap_or(Category::HighCard)
}

fn compute_score(cards: &[Card; HAND_SIZE], category: Category) -> Score {
    let counts = value_counts(cards);
    let mut score = vec![category.base_score()];

    for size in [4, 3, 2] {
        let mut group: Vec<u8> = counts
            .iter()
            .filter(|&&(_, n)| n == size)
            .map(|&(value, _)| value)
            .collect();
        group.sort_unstable_by(|a, b| b.cmp(a));
        score.extend(group);
    }

    if is_aces_low_straight(cards) {
        score.extend(aces_low(cards).iter().rev().map(Card::value));
    } else {
        let mut singles: Vec<u8> = counts
            .iter()
            .filter(|&&(_, n)| n == 1)
            .map(|&(value, _)| value)
            .collect();
        singles.sort_unstable_by(|a, b| b.cmp(a));
        score.extend(singles);
    }
    Score(score)
}

// (value, occurrences) in ascending value order; expects sorted cards.
fn value_counts(cards: &[Card; HAND_SIZE]) -> Vec<(u8, usize)> {
    let mut counts: Vec<(u8, usize)> = Vec::with_capacity(HAND_SIZE);
    for card in cards {
        if let Some((value, n)) = counts.last_mut() {
            if *value == card.value() {
                *n += 1;
                continue;
            }
        }
        counts.push((card.value(), 1));
    }
    counts
}

fn has_group(cards: &[Card; HAND_SIZE], size: usize) -> bool {
    value_counts(cards).iter().any(|&(_, n)| n == size)
}

fn distinct_values(cards: &[Card; HAND_SIZE]) -> usize {
    value_counts(cards).len()
}

fn is_run(cards: &[Card; HAND_SIZE]) -> bool {
    cards.windows(2).all(|pair| pair[0].precedes(&pair[1]))
}

fn aces_low(cards: &[Card; HAND_SIZE]) -> [Card; HAND_SIZE] {
    let mut low = cards.map(|c| c.low_card());
    low.sort_by_key(Card::value);
    low
}

fn has_ace(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().any(Card::is_ace)
}

fn is_aces_low_straight(cards: &[Card; HAND_SIZE]) -> bool {
    !is_run(cards) && has_ace(cards) && is_run(&aces_low(cards))
}

fn is_straight(cards: &[Card; HAND_SIZE]) -> bool {
    is_run(cards) || is_aces_low_straight(cards)
}

fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    let first = cards[0].suit();
    cards.iter().all(|c| c.suit() == first)
}

fn is_straight_flush(cards: &[Card; HAND_SIZE]) -> bool {
    is_straight(cards) && is_flush(cards)
}

fn is_four_of_a_kind(cards: &[Card; HAND_SIZE]) -> bool {
    has_group(cards, 4)
}

fn is_full_house(cards: &[Card; HAND_SIZE]) -> bool {
    has_group(cards, 3) && has_group(cards, 2)
}

fn is_three_of_a_kind(cards: &[Card; HAND_SIZE]) -> bool {
    distinct_values(cards) == 3 && has_group(cards, 3)
}

fn is_two_pair(cards: &[Card; HAND_SIZE]) -> bool {
    distinct_values(cards) == 3 && has_group(cards, 2)
}

fn is_pair(cards: &[Card; HAND_SIZE]) -> bool {
    has_group(cards, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn base_scores_follow_category_order() {
        assert_eq!(Category::StraightFlush.base_score(), 8);
        assert_eq!(Category::TwoPair.base_score(), 2);
        assert_eq!(Category::HighCard.base_score(), 0);
        assert!(Category::Flush > Category::Straight);
    }

    #[test]
    fn cards_are_sorted_stably_by_value() {
        let h = hand("s9 h3 c9 d3 h2");
        assert_eq!(h.values(), [2, 3, 3, 9, 9]);
        assert_eq!(
            h.suits(),
            [Suit::Hearts, Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs]
        );
    }

    #[test]
    fn value_counts_group_adjacent_values() {
        let h = hand("h3 d3 c9 s10 c3");
        assert_eq!(value_counts(h.cards()), vec![(3, 3), (9, 1), (10, 1)]);
    }

    #[test]
    fn aces_low_view_remaps_and_resorts() {
        let h = hand("h14 d2 c3 s4 c5");
        let low: Vec<u8> = h.aces_low().iter().map(Card::value).collect();
        assert_eq!(low, vec![1, 2, 3, 4, 5]);
        assert!(h.is_aces_low_straight());
        assert!(!hand("h14 d10 c11 s12 c13").is_aces_low_straight());
    }

    #[test]
    fn ace_does_not_wrap_around_a_straight() {
        let h = hand("h12 d13 c14 s2 c3");
        assert!(!h.is_straight());
        assert_eq!(h.category(), Category::HighCard);
    }

    #[test]
    fn straight_may_span_suits() {
        let h = hand("c5 d6 h7 s8 c9");
        assert!(h.is_straight());
        assert!(!h.is_flush());
        assert_eq!(h.category(), Category::Straight);
    }

    #[test]
    fn display_lists_sorted_notation() {
        assert_eq!(hand("c11 h3 d4 c7 s8").to_string(), "h3 d4 c7 s8 c11");
    }
}
