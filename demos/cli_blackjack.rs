//! CLI blackjack example.
//!
//! Set `RUST_LOG=bjsolo=debug` to watch the engine's decisions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Action, Card, GameState, Suit, Turn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = GameState::setup(&mut rng);

    loop {
        print_table(&state);
        println!("{}", format_actions(&state));

        let next = match prompt_line("Action: ").as_str() {
            "h" | "hit" if state.is_legal(Action::Hit) => state.hit(),
            "s" | "stand" if state.is_legal(Action::Stand) => state.stand(),
            "r" | "reset" => Ok(state.reset(&mut rng)),
            "q" | "quit" => return,
            _ => {
                println!("Unavailable action.");
                continue;
            }
        };

        match next {
            Ok(next) => state = next,
            Err(err) => {
                println!("Engine error: {err}");
                state = state.reset(&mut rng);
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState) {
    println!("\nDeck: {} cards remaining", state.cards_remaining());

    let dealer = state.dealer_visible_cards();
    match state.turn() {
        Turn::PlayerTurn => println!("\nDealer: ?? {}", format_cards(dealer)),
        Turn::DealerTurn => println!(
            "\nDealer: {} (value {})",
            format_cards(dealer),
            state.dealer_hand().value()
        ),
    }

    let player = state.player_hand();
    println!(
        "Player: {} (value {})",
        format_cards(player.cards()),
        player.value()
    );

    match state.outcome() {
        Some(result) => println!("\n{}", colorize(&result.to_string(), "33")),
        None => println!("\n{}", state.turn()),
    }
    println!();
}

fn format_actions(state: &GameState) -> String {
    let parts = [
        format_action("hit", "h", state.is_legal(Action::Hit)),
        format_action("stand", "s", state.is_legal(Action::Stand)),
        format_action("reset", "r", state.is_legal(Action::Reset)),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
