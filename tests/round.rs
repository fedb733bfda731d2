//! Round engine integration tests.

use std::collections::VecDeque;

use pooljack::{
    Card, DECK_SIZE, DealError, Decision, DecisionSource, DrawError, EndReason, Hand, Player,
    PlayerStatus, Round, RoundOptions, RoundPhase, Shoe, Suit, TurnError, determine_winners,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn set_shoe_from_draws(round: &mut Round, draws: &[Card]) {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    round.shoe.cards = cards;
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &c in cards {
        hand.add_card(c);
    }
    hand
}

/// Scripted decision source that records who was asked.
struct Script {
    decisions: VecDeque<Decision>,
    asked: Vec<String>,
}

impl Script {
    fn new(decisions: &[Decision]) -> Self {
        Self {
            decisions: decisions.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl DecisionSource for Script {
    fn decide(&mut self, player: &Player) -> Decision {
        self.asked.push(player.name().to_string());
        self.decisions.pop_front().unwrap_or(Decision::Stand)
    }
}

#[test]
fn hand_valuation_demotes_aces_one_at_a_time() {
    let hand = hand_of(&[card(Suit::Hearts, 1), card(Suit::Clubs, 5)]);
    assert_eq!(hand.value(), 16);
    assert!(hand.is_soft());

    let hand = hand_of(&[
        card(Suit::Hearts, 10),
        card(Suit::Spades, 13),
        card(Suit::Clubs, 1),
    ]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_soft());
    assert!(hand.is_high_score());

    let hand = hand_of(&[
        card(Suit::Hearts, 1),
        card(Suit::Spades, 1),
        card(Suit::Clubs, 9),
    ]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_soft());

    let hand = hand_of(&[
        card(Suit::Hearts, 13),
        card(Suit::Spades, 12),
        card(Suit::Clubs, 5),
    ]);
    assert_eq!(hand.value(), 25);
    assert!(hand.is_busted());
}

#[test]
fn card_nominal_values() {
    assert_eq!(card(Suit::Hearts, 1).value(), 11);
    assert!(card(Suit::Hearts, 1).is_ace());
    assert_eq!(card(Suit::Clubs, 7).value(), 7);
    assert_eq!(card(Suit::Spades, 11).value(), 10);
    assert_eq!(card(Suit::Diamonds, 13).value(), 10);
}

#[test]
fn shoe_conservation_across_draws() {
    for decks in [1u8, 3, 8] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut shoe = Shoe::shuffled(decks, &mut rng);
        assert_eq!(shoe.len(), decks as usize * DECK_SIZE);

        for k in 1..=10 {
            shoe.draw().unwrap();
            assert_eq!(shoe.len(), decks as usize * DECK_SIZE - k);
        }

        // Refill and check no card appears more often than the deck count
        // legitimately allows.
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let shoe = Shoe::shuffled(decks, &mut rng);
        for suit in pooljack::SUITS {
            for rank in 1..=13 {
                let copies = shoe
                    .cards
                    .iter()
                    .filter(|&&c| c == card(suit, rank))
                    .count();
                assert_eq!(copies, decks as usize);
            }
        }
    }
}

#[test]
fn drawing_from_an_empty_pool_fails() {
    let mut shoe = Shoe::new();
    assert_eq!(shoe.draw().unwrap_err(), DrawError::EmptyPool);
}

#[test]
fn options_builder_sets_fields() {
    let options = RoundOptions::default();
    assert_eq!(options.decks, 2);
    assert_eq!(options.max_rounds, 5);

    let options = RoundOptions::default().with_decks(6).with_max_rounds(3);
    assert_eq!(options.decks, 6);
    assert_eq!(options.max_rounds, 3);
}

#[test]
fn deal_errors() {
    let mut round = Round::new(RoundOptions::default(), 1);
    assert_eq!(round.deal_initial_cards().unwrap_err(), DealError::NoPlayers);

    round.join("Ann");
    round.join("Ben");
    set_shoe_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
        ],
    );
    assert_eq!(
        round.deal_initial_cards().unwrap_err(),
        DealError::NotEnoughCards
    );

    set_shoe_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 8),
        ],
    );
    round.deal_initial_cards().unwrap();
    assert_eq!(
        round.deal_initial_cards().unwrap_err(),
        DealError::InvalidState
    );
}

#[test]
fn deal_runs_two_passes_in_player_order() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");
    set_shoe_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 8),
        ],
    );

    round.deal_initial_cards().unwrap();

    let players = round.players();
    assert_eq!(
        players[0].hand().cards(),
        &[card(Suit::Hearts, 9), card(Suit::Diamonds, 7)]
    );
    assert_eq!(
        players[1].hand().cards(),
        &[card(Suit::Clubs, 5), card(Suit::Spades, 8)]
    );
    assert_eq!(round.phase(), RoundPhase::PlayerTurn);
    assert_eq!(round.current_player(), Some(0));
    assert_eq!(round.turn().pass, 1);
    assert_eq!(round.cards_remaining(), 0);
}

#[test]
fn turn_operations_require_a_dealt_round() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");

    assert_eq!(round.hit().unwrap_err(), TurnError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), TurnError::InvalidState);

    let mut script = Script::new(&[]);
    assert_eq!(round.play(&mut script).unwrap_err(), TurnError::InvalidState);
}

#[test]
fn immediate_high_score_ends_round_before_any_turn() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");
    set_shoe_from_draws(
        &mut round,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 10),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 9),
        ],
    );

    round.deal_initial_cards().unwrap();

    assert_eq!(round.phase(), RoundPhase::Finished);
    assert_eq!(round.current_player(), None);

    let result = round.result().unwrap();
    assert_eq!(result.winners, vec![0]);
    assert_eq!(result.score, 21);
    assert_eq!(result.reason, EndReason::InitialHighScore);

    // Turns can no longer be taken.
    assert_eq!(round.hit().unwrap_err(), TurnError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), TurnError::InvalidState);
}

#[test]
fn tie_at_deal_returns_every_high_scorer() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");
    set_shoe_from_draws(
        &mut round,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 1),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 12),
        ],
    );

    round.deal_initial_cards().unwrap();

    let result = round.result().unwrap();
    assert_eq!(result.winners, vec![0, 1]);
    assert_eq!(result.score, 21);
    assert_eq!(result.reason, EndReason::InitialHighScore);
}

#[test]
fn lone_survivor_wins_regardless_of_score() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");
    set_shoe_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 5),
            card(Suit::Hearts, 9),
            card(Suit::Diamonds, 2),
            card(Suit::Clubs, 5),
        ],
    );

    round.deal_initial_cards().unwrap();

    let mut script = Script::new(&[Decision::Hit]);
    let result = round.play(&mut script).unwrap();

    // Ann busts on 24; Ben wins outright with a hand of 7.
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.score, 7);
    assert_eq!(result.reason, EndReason::LoneSurvivor);
    assert_eq!(round.players()[0].status(), PlayerStatus::Busted);
    assert_eq!(round.players()[1].status(), PlayerStatus::Active);
    assert_eq!(script.asked, vec!["Ann"]);
}

#[test]
fn all_standing_ties_share_the_win() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");
    set_shoe_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 10),
            card(Suit::Hearts, 13),
            card(Suit::Diamonds, 12),
        ],
    );

    round.deal_initial_cards().unwrap();

    let mut script = Script::new(&[Decision::Stand, Decision::Stand]);
    let result = round.play(&mut script).unwrap();

    assert_eq!(result.winners, vec![0, 1]);
    assert_eq!(result.score, 20);
    assert_eq!(result.reason, EndReason::AllStanding);
    assert!(round.players().iter().all(Player::is_standing));
}

#[test]
fn winner_determination_with_everyone_busted_is_empty() {
    let mut busted_a = Player::new("Ann".to_string());
    busted_a.add_card(card(Suit::Hearts, 10));
    busted_a.add_card(card(Suit::Clubs, 13));
    busted_a.add_card(card(Suit::Spades, 8));

    let mut busted_b = Player::new("Ben".to_string());
    busted_b.add_card(card(Suit::Diamonds, 10));
    busted_b.add_card(card(Suit::Clubs, 12));
    busted_b.add_card(card(Suit::Spades, 6));

    let (winners, score) = determine_winners(&[busted_a, busted_b]);
    assert!(winners.is_empty());
    assert_eq!(score, 0);
}

#[test]
fn busted_status_is_terminal() {
    let mut player = Player::new("Ann".to_string());
    player.add_card(card(Suit::Hearts, 10));
    player.add_card(card(Suit::Clubs, 13));
    player.add_card(card(Suit::Spades, 5));
    assert_eq!(player.status(), PlayerStatus::Busted);

    player.add_card(card(Suit::Diamonds, 2));
    assert_eq!(player.status(), PlayerStatus::Busted);

    player.stand();
    assert_eq!(player.status(), PlayerStatus::Busted);
}

#[test]
fn hit_to_21_runs_full_winner_determination() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");
    set_shoe_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 10),
            card(Suit::Hearts, 5),
            card(Suit::Diamonds, 9),
            card(Suit::Clubs, 6),
        ],
    );

    round.deal_initial_cards().unwrap();

    let mut script = Script::new(&[Decision::Hit]);
    let result = round.play(&mut script).unwrap();

    // Ann reaches 21 and the round ends at once; Ben at 19 never acts.
    assert_eq!(result.winners, vec![0]);
    assert_eq!(result.score, 21);
    assert_eq!(result.reason, EndReason::HighScore);
    assert_eq!(script.asked, vec!["Ann"]);
    assert_eq!(round.players()[1].status(), PlayerStatus::Active);
}

#[test]
fn terminal_players_are_skipped_on_later_passes() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");
    round.join("Cal");
    round.join("Dee");
    set_shoe_from_draws(
        &mut round,
        &[
            // First deal.
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 10),
            card(Suit::Clubs, 5),
            card(Suit::Spades, 6),
            // Second deal.
            card(Suit::Hearts, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 5),
            card(Suit::Spades, 4),
            // Hits: Ann busts, Cal and Dee creep upward, Cal reaches 21.
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 2),
            card(Suit::Spades, 2),
            card(Suit::Clubs, 2),
            card(Suit::Spades, 2),
            card(Suit::Clubs, 7),
        ],
    );

    round.deal_initial_cards().unwrap();

    let mut script = Script::new(&[
        Decision::Hit,   // Ann -> 29, busted
        Decision::Stand, // Ben stands on 17
        Decision::Hit,   // Cal 10 -> 12
        Decision::Hit,   // Dee 10 -> 12
        Decision::Hit,   // Cal 12 -> 14
        Decision::Hit,   // Dee 12 -> 14
        Decision::Hit,   // Cal 14 -> 21, round ends
    ]);
    let result = round.play(&mut script).unwrap();

    // Busted Ann and standing Ben are never solicited again.
    assert_eq!(
        script.asked,
        vec!["Ann", "Ben", "Cal", "Dee", "Cal", "Dee", "Cal"]
    );
    assert_eq!(round.players()[0].status(), PlayerStatus::Busted);
    assert_eq!(round.players()[1].status(), PlayerStatus::Standing);

    assert_eq!(result.winners, vec![2]);
    assert_eq!(result.score, 21);
    assert_eq!(result.reason, EndReason::HighScore);
}

#[test]
fn round_cap_forces_winner_determination() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");

    let mut draws = vec![
        card(Suit::Hearts, 2),
        card(Suit::Diamonds, 2),
        card(Suit::Hearts, 2),
        card(Suit::Diamonds, 3),
    ];
    // One small hit per player per pass; nobody ever reaches 21.
    for _ in 0..10 {
        draws.push(card(Suit::Clubs, 2));
    }
    set_shoe_from_draws(&mut round, &draws);

    round.deal_initial_cards().unwrap();

    let mut script = Script::new(&[Decision::Hit; 10]);
    let result = round.play(&mut script).unwrap();

    assert_eq!(script.asked.len(), 10);
    assert_eq!(round.players()[0].hand_value(), 14);
    assert_eq!(round.players()[1].hand_value(), 15);

    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.score, 15);
    assert_eq!(result.reason, EndReason::RoundCap);
}

#[test]
fn hit_with_empty_shoe_returns_error() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.join("Ann");
    round.join("Ben");
    set_shoe_from_draws(
        &mut round,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Diamonds, 10),
            card(Suit::Hearts, 9),
            card(Suit::Diamonds, 8),
        ],
    );

    round.deal_initial_cards().unwrap();
    assert!(round.shoe.is_empty());

    assert_eq!(round.hit().unwrap_err(), TurnError::EmptyPool);
    // The failed draw leaves the round in the player-turn phase.
    assert_eq!(round.phase(), RoundPhase::PlayerTurn);
}

#[test]
fn play_accepts_a_closure_source() {
    let options = RoundOptions::default().with_decks(4);
    let mut round = Round::new(options, 99);
    round.join("Ann");
    round.join("Ben");
    round.deal_initial_cards().unwrap();

    let mut threshold = |player: &Player| {
        if player.hand_value() < 17 {
            Decision::Hit
        } else {
            Decision::Stand
        }
    };
    let result = round.play(&mut threshold).unwrap();

    assert_eq!(round.phase(), RoundPhase::Finished);
    assert_eq!(round.result(), Some(&result));
}
