use holdem_engine::cards::{Card, Rank as R, Suit as S};
use holdem_engine::hand::{evaluate_hand, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn straight_flush_ranks_nine() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    let cat = evaluate_hand(&cards);
    assert_eq!(cat, Category::StraightFlush);
    assert_eq!(cat.rank(), 9);
}

#[test]
fn wheel_straight_is_recognized_without_a_flush() {
    // A-2-3-4-5 of mixed suits: Ace maps to 14, so only the membership
    // check can see this straight.
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Spades, R::Four),
        c(S::Hearts, R::Five),
    ];
    let cat = evaluate_hand(&cards);
    assert_eq!(cat, Category::Straight);
    assert_eq!(cat.rank(), 5);
}

#[test]
fn four_of_a_kind_regardless_of_kickers() {
    let cards = [
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Nine),
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::Two),
    ];
    assert_eq!(evaluate_hand(&cards).rank(), 8);
}

#[test]
fn full_house_needs_trips_and_a_pair() {
    let full = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Three),
    ];
    assert_eq!(evaluate_hand(&full), Category::FullHouse);

    let trips_only = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Three),
    ];
    assert_eq!(evaluate_hand(&trips_only), Category::ThreeOfAKind);
}

#[test]
fn flush_detected_over_any_five_suited_cards() {
    let cards = [
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Nine),
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::King),
    ];
    assert_eq!(evaluate_hand(&cards), Category::Flush);
}

#[test]
fn straight_run_survives_duplicate_ranks() {
    // The paired six must neither extend nor break the 5..9 run.
    let cards = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Diamonds, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Two),
    ];
    assert_eq!(evaluate_hand(&cards), Category::Straight);
}

#[test]
fn pairs_and_high_card_classification() {
    let two_pair = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::King),
        c(S::Hearts, R::King),
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Seven),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(evaluate_hand(&two_pair).rank(), 3);

    let one_pair = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Jack),
        c(S::Hearts, R::King),
    ];
    assert_eq!(evaluate_hand(&one_pair).rank(), 2);

    let high = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Five),
        c(S::Diamonds, R::Three),
        c(S::Hearts, R::Two),
    ];
    assert_eq!(evaluate_hand(&high).rank(), 1);
}

#[test]
fn categories_order_by_rank_number() {
    assert!(Category::StraightFlush > Category::FourOfAKind);
    assert!(Category::FullHouse > Category::Flush);
    assert!(Category::Straight > Category::ThreeOfAKind);
    assert!(Category::TwoPair > Category::OnePair);
    assert!(Category::OnePair > Category::HighCard);
}

#[test]
fn evaluation_ignores_input_order() {
    let mut cards = vec![
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Ace),
    ];
    let forward = evaluate_hand(&cards);
    cards.reverse();
    assert_eq!(evaluate_hand(&cards), forward);
    assert_eq!(forward, Category::Straight);
}
