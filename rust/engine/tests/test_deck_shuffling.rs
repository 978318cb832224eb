use std::collections::HashSet;

use holdem_engine::cards::full_deck;
use holdem_engine::deck::Deck;
use holdem_engine::engine::{Engine, TableConfig};
use holdem_engine::player::{Player, PlayerAction};

#[test]
fn full_deck_is_52_unique_cards() {
    let deck = full_deck();
    assert_eq!(deck.len(), 52);
    let unique: HashSet<_> = deck.iter().copied().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn shuffled_deck_deals_52_unique_cards() {
    let mut deck = Deck::new_with_seed(99);
    deck.shuffle();
    let mut seen = HashSet::new();
    while let Some(c) = deck.deal_card() {
        assert!(seen.insert(c), "duplicate card dealt: {:?}", c);
    }
    assert_eq!(seen.len(), 52);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new_with_seed(7);
    let mut b = Deck::new_with_seed(7);
    a.shuffle();
    b.shuffle();
    for _ in 0..52 {
        assert_eq!(a.deal_card(), b.deal_card());
    }
}

#[test]
fn dealing_never_duplicates_across_hands_and_board() {
    let players = vec![Player::new(0, "Alice", 100), Player::new(1, "Bob", 100)];
    let mut engine = Engine::new(players, TableConfig::default(), Some(11));
    engine.start_game().unwrap();

    // 2 hole cards each, 48 behind
    assert_eq!(engine.deck_remaining(), 48);
    let mut seen: HashSet<_> = engine
        .players()
        .iter()
        .flat_map(|p| p.hole_cards().into_iter().flatten())
        .collect();
    assert_eq!(seen.len(), 4);

    engine.handle_player_action(0, PlayerAction::Call).unwrap();
    engine.next_stage().unwrap();
    engine.handle_player_action(0, PlayerAction::Check).unwrap();
    engine.handle_player_action(1, PlayerAction::Check).unwrap();
    engine.next_stage().unwrap();
    engine.handle_player_action(0, PlayerAction::Check).unwrap();
    engine.handle_player_action(1, PlayerAction::Check).unwrap();
    engine.next_stage().unwrap();

    for &c in engine.community() {
        assert!(seen.insert(c), "community card repeats a hole card: {:?}", c);
    }
    // holes + board + remaining deck always account for all 52
    assert_eq!(engine.community().len(), 5);
    assert_eq!(engine.deck_remaining(), 43);
    assert_eq!(seen.len() + engine.deck_remaining(), 52);
}

#[test]
fn same_seed_reproduces_the_whole_deal() {
    let mk = || {
        let players = vec![Player::new(0, "Alice", 100), Player::new(1, "Bob", 100)];
        let mut e = Engine::new(players, TableConfig::default(), Some(123));
        e.start_game().unwrap();
        e.handle_player_action(0, PlayerAction::Call).unwrap();
        e.next_stage().unwrap();
        e
    };
    let a = mk();
    let b = mk();
    assert_eq!(a.community(), b.community());
    assert_eq!(
        a.players()[0].hole_cards(),
        b.players()[0].hole_cards()
    );
    assert_eq!(
        a.players()[1].hole_cards(),
        b.players()[1].hole_cards()
    );
}
