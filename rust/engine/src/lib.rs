//! # fivecard-engine: Five-Card Hand Evaluation
//!
//! Classifies five-card poker hands and scores them so that any two hands can
//! be ranked against each other. Aces count high or low, whichever makes a
//! straight.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Card), rank/identity comparisons and notation
//! - [`hand`] - Hand classification (Category) and comparable Score
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG, dealt in hands of five
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for card and hand construction
//!
//! ## Quick Start
//!
//! ```rust
//! use fivecard_engine::hand::{compare_hands, Category, Hand};
//!
//! let pair: Hand = "h3 d3 c9 s10 c11".parse().unwrap();
//! let high: Hand = "h3 d4 c7 s8 c11".parse().unwrap();
//!
//! assert_eq!(pair.category(), Category::Pair);
//! assert_eq!(pair.score().as_slice(), &[1, 3, 11, 10, 9]);
//! assert!(compare_hands(&pair, &high).is_gt());
//! ```
//!
//! ## Dealing
//!
//! ```rust
//! use fivecard_engine::deck::Deck;
//!
//! let mut deck = Deck::new_with_seed(7);
//! deck.shuffle();
//! let hands = deck.deal_hands();
//! assert_eq!(hands.len(), 10);
//! assert_eq!(deck.remaining(), 2);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
