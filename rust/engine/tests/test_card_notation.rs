use fivecard_engine::cards::{identical, same_rank, Card, Suit};
use fivecard_engine::errors::EvalError;
use fivecard_engine::hand::Hand;

#[test]
fn notation_round_trips_suit_and_value() {
    for suit in ['h', 'd', 'c', 's'] {
        for value in 2..=14u8 {
            let text = format!("{suit}{value}");
            let card: Card = text.parse().expect("valid notation");
            assert_eq!(card.suit().letter(), suit);
            assert_eq!(card.value(), value);
            assert_eq!(card.to_string(), text);
        }
    }
}

#[test]
fn notation_rejects_bad_suit_or_value() {
    for bad in ["x3", "h1", "h15", "h", "", "14h", "hh", "d-2"] {
        assert_eq!(
            bad.parse::<Card>(),
            Err(EvalError::InvalidCardNotation {
                notation: bad.to_string()
            }),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn same_rank_ignores_suit_and_is_commutative() {
    let a: Card = "h9".parse().unwrap();
    let b: Card = "c9".parse().unwrap();
    let c: Card = "c10".parse().unwrap();
    assert!(same_rank(&a, &b) && same_rank(&b, &a));
    assert!(!same_rank(&a, &c) && !same_rank(&c, &a));
    assert!(!identical(&a, &b));
    assert!(identical(&a, &"H9".parse().unwrap()));
}

#[test]
fn compare_to_raw_value_through_accessor() {
    let ace: Card = "s14".parse().unwrap();
    assert!(ace.is_ace());
    assert!(ace.value() > 13);
    assert!(ace.low_card().is_ace_low());
    assert_eq!(ace.low_card().suit(), Suit::Spades);
}

#[test]
fn hand_notation_accepts_punctuation_separators() {
    let spaced: Hand = "h3 d3 c9 s10 c11".parse().unwrap();
    let commas: Hand = "h3,d3, c9;s10|c11".parse().unwrap();
    assert_eq!(spaced, commas);
}

#[test]
fn hand_requires_exactly_five_cards() {
    assert_eq!(
        "h3 d3 c9 s10".parse::<Hand>(),
        Err(EvalError::InvalidHand { count: 4 })
    );
    assert_eq!(
        "h3 d3 c9 s10 c11 c12".parse::<Hand>(),
        Err(EvalError::InvalidHand { count: 6 })
    );
    assert_eq!(Hand::new(&[]), Err(EvalError::InvalidHand { count: 0 }));
}

#[test]
fn hand_notation_reports_the_bad_token() {
    assert_eq!(
        "h3 d3 z9 s10 c11".parse::<Hand>(),
        Err(EvalError::InvalidCardNotation {
            notation: "z9".to_string()
        })
    );
}

#[test]
fn errors_render_readable_messages() {
    let err = Hand::new(&[]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid hand: expected 5 cards, got 0");
    let err = Card::new(Suit::Hearts, 20).unwrap_err();
    assert!(err.to_string().contains("20"));
}
