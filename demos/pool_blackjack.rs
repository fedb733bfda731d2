//! Interactive pool blackjack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pooljack::{
    Card, Decision, EndReason, MAX_DECKS, MAX_PLAYERS, MIN_PLAYERS, Player, Round, RoundOptions,
    RoundPhase, Suit,
};

const SEPARATOR_LENGTH: usize = 40;

fn main() {
    println!("====================================");
    println!("        POOL BLACKJACK              ");
    println!("====================================\n");

    loop {
        play_game();

        let answer = prompt_line("\nDo you want to play another round? (yes/no): ");
        if answer != "yes" {
            break;
        }
    }

    println!("\nThanks for playing!");
}

fn play_game() {
    let decks = prompt_decks();
    let names = prompt_players();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoundOptions::default().with_decks(decks);
    let mut round = Round::new(options, seed);

    for name in names {
        round.join(name);
    }

    if let Err(err) = round.deal_initial_cards() {
        println!("Deal error: {err}");
        return;
    }
    print_initial_deal(&round);

    let mut printed_pass = 0;
    while round.phase() == RoundPhase::PlayerTurn {
        let pass = round.turn().pass;
        if pass != printed_pass {
            print_pass_header(pass);
            show_all_hands(&round);
            printed_pass = pass;
        }

        let Some(index) = round.current_player() else {
            break;
        };
        let player = &round.players()[index];
        println!("\n--- {} turn ---", player.name());
        println!("Current hand: {}", player.hand_value());

        match prompt_decision(player.name()) {
            Decision::Hit => {
                let name = player.name().to_string();
                match round.hit() {
                    Ok(card) => {
                        let player = &round.players()[index];
                        println!("\n{} draws: {}", name, format_card(card));
                        println!("New hand: {}", player.hand_value());
                        if player.is_busted() {
                            println!("{name} is over 21 and busted!");
                        } else if player.is_high_score() {
                            println!("{name} has exactly 21!");
                        }
                    }
                    Err(err) => {
                        println!("Turn error: {err}");
                        return;
                    }
                }
            }
            Decision::Stand => {
                let value = player.hand_value();
                let name = player.name().to_string();
                if let Err(err) = round.stand() {
                    println!("Turn error: {err}");
                    return;
                }
                println!("{name} stands (hand stays {value})");
            }
        }
    }

    if let Some(result) = round.result() {
        let result = result.clone();
        show_final_hands(&round);
        announce(&round, &result);
    }
}

fn prompt_decks() -> u8 {
    loop {
        let input = prompt_line(&format!(
            "How many decks should be used this round? (1-{MAX_DECKS}): "
        ));
        match input.parse::<u8>() {
            Ok(decks) if (1..=MAX_DECKS).contains(&decks) => return decks,
            Ok(_) => println!("Between 1 and {MAX_DECKS} decks can be used!"),
            Err(_) => println!("Please enter a number!"),
        }
    }
}

fn prompt_players() -> Vec<String> {
    let count = loop {
        let input = prompt_line("How many players want to play?: ");
        match input.parse::<usize>() {
            Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => break count,
            Ok(_) => println!(
                "At least {MIN_PLAYERS} or maximum {MAX_PLAYERS} of players need to participate!"
            ),
            Err(_) => println!("Please enter a number!"),
        }
    };

    let mut names = Vec::with_capacity(count);
    for i in 0..count {
        let name = prompt_raw_line(&format!("Please enter name of player {}: ", i + 1));
        names.push(name);
    }
    println!();
    names
}

fn prompt_decision(name: &str) -> Decision {
    loop {
        match prompt_line(&format!("{name}, do you want to hit? (yes/no): ")).as_str() {
            "yes" => return Decision::Hit,
            "no" => return Decision::Stand,
            _ => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw_line(prompt).to_lowercase()
}

fn prompt_raw_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn print_initial_deal(round: &Round) {
    println!("--- First deal ---");
    for player in round.players() {
        if let Some(&card) = player.hand().cards().first() {
            println!("{} gets: {}", player.name(), format_card(card));
        }
    }

    println!("\n--- Second deal ---");
    for player in round.players() {
        if let Some(&card) = player.hand().cards().get(1) {
            println!("{} gets: {}", player.name(), format_card(card));
        }
    }
}

fn print_pass_header(pass: u8) {
    println!("\n{}", "=".repeat(SEPARATOR_LENGTH));
    println!("*** ROUND {pass} ***");
    println!("{}", "=".repeat(SEPARATOR_LENGTH));
}

fn show_all_hands(round: &Round) {
    println!("\n=== Current hand ===");
    for player in round.players() {
        println!(
            "{}: {}{}",
            player.name(),
            player.hand_value(),
            status_suffix(player)
        );
    }
    println!();
}

fn show_final_hands(round: &Round) {
    println!("{}", "=".repeat(SEPARATOR_LENGTH));
    println!("*** FINAL HANDS ***");
    println!("{}", "=".repeat(SEPARATOR_LENGTH));

    for player in round.players() {
        println!(
            "{}: {} = {}{}",
            player.name(),
            format_hand(player),
            player.hand_value(),
            status_suffix(player)
        );
    }

    println!("{}", "=".repeat(SEPARATOR_LENGTH));
}

fn status_suffix(player: &Player) -> &'static str {
    if player.is_busted() {
        " (Busted)"
    } else if player.is_standing() {
        " (Standing)"
    } else {
        ""
    }
}

fn announce(round: &Round, result: &pooljack::RoundResult) {
    println!("\n{}", "=".repeat(SEPARATOR_LENGTH));

    match &result.winners[..] {
        [] => println!("All players busted. Nobody wins!"),
        [index] => {
            let name = round.players()[*index].name();
            match result.reason {
                EndReason::InitialHighScore | EndReason::HighScore => {
                    println!("*** {name} has 21 and wins! ***");
                }
                EndReason::LoneSurvivor => {
                    println!("*** {name} wins! ***");
                    println!("Hand: {}", result.score);
                }
                _ => println!("*** {name} wins with {} points! ***", result.score),
            }
        }
        winners => {
            println!("*** TIE! ***");
            let names: Vec<&str> = winners
                .iter()
                .map(|&index| round.players()[index].name())
                .collect();
            println!("Players with {}: {}", result.score, names.join(", "));
        }
    }

    println!("{}", "=".repeat(SEPARATOR_LENGTH));
}

fn format_hand(player: &Player) -> String {
    player
        .hand()
        .cards()
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_card(card: Card) -> String {
    let suit = match card.suit {
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
        Suit::Clubs => "♣",
        Suit::Spades => "♠",
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{suit}")
}
