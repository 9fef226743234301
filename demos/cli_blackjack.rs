//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tablejack::{
    Card, Decision, Game, GameOptions, Hand, Player, Rank, RoundOutcome, Step, Suit, parse_bet,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let name = prompt_line("Your name: ");
    let name = if name.is_empty() { "Player".to_string() } else { name };
    let mut game = Game::new(GameOptions::default(), seed, Player::new(name, 100));

    loop {
        let money = game.balance();
        if money == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        if let Err(err) = game.start_round() {
            println!("Round error: {err}");
            break;
        }

        let mut step = loop {
            let input = prompt_line(&format!("Bet amount (1-{money}): "));
            if is_quit(&input) {
                if confirm_quit() {
                    return;
                }
                continue;
            }
            let result = parse_bet(&input)
                .map_err(Into::into)
                .and_then(|amount| game.submit_bet(amount));
            match result {
                Ok(step) => break step,
                Err(err) if err.is_recoverable() => println!("Bet error: {err}"),
                Err(err) => {
                    println!("Fatal error: {err}");
                    return;
                }
            }
        };

        while step == Step::NeedDecision {
            print_table(&game);

            let decision = match prompt_line("[h]it or [s]tand: ").as_str() {
                "h" | "hit" => Decision::Hit,
                "s" | "stand" => Decision::Stand,
                "q" | "quit" => {
                    if confirm_quit() {
                        return;
                    }
                    continue;
                }
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match game.submit_decision(decision) {
                Ok(next) => step = next,
                Err(err) => {
                    println!("Fatal error: {err}");
                    return;
                }
            }
        }

        print_table(&game);
        if let Step::RoundOver(outcome) = step {
            println!("{}", describe(outcome));
        }
        println!("Balance: {}", game.balance());

        let keep_playing = !matches!(prompt_line("Play another round? [y/n]: ").as_str(), "n" | "no");
        match game.finish_round(keep_playing) {
            Ok(Step::GameOver) => {
                println!("Goodbye.");
                break;
            }
            Ok(_) => {}
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }
    }
}

fn describe(outcome: RoundOutcome) -> String {
    match outcome {
        RoundOutcome::PlayerWins(amount) => format!("You win {amount}."),
        RoundOutcome::HouseWins(amount) => format!("The house wins. You lose {amount}."),
        RoundOutcome::Push => "Push. Your bet is returned.".to_string(),
        RoundOutcome::PlayerBlackjack(amount) => format!("Blackjack! You win {amount}."),
    }
}

fn is_quit(input: &str) -> bool {
    input == "q" || input == "quit"
}

fn confirm_quit() -> bool {
    loop {
        match prompt_line("Do you really want to quit? [y/n]: ").as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("Please enter a valid response."),
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

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nDeck: {remaining} cards remaining");

    let house = game.house().hand();
    println!(
        "{}: {} (value {})",
        game.house().name(),
        format_hand(house),
        house.value()
    );

    let hand = game.player().hand();
    println!(
        "{}: {} (value {}) | bet {}",
        game.player().name(),
        format_hand(hand),
        hand.value(),
        game.player().bet()
    );
    println!();
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    if !card.is_face_up() {
        return "??".to_string();
    }

    let (suit, color_code) = match card.suit() {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank() {
        Rank::Ace => ("A".to_string(), true),
        Rank::Jack => ("J".to_string(), true),
        Rank::Queen => ("Q".to_string(), true),
        Rank::King => ("K".to_string(), true),
        other => (other.base_value().to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}
