//! AI-only simulation runner.
//! Plays a batch of seeded games and prints the combined statistics.

use clap::Parser;
use maumau::{DiscardPolicy, GameBuilder, GameConfig, GameError, Outcome, PlayerId, StatBook, StatKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate AI-only MauMau games")]
struct Args {
    #[arg(short, long, default_value = "4")]
    players: usize,

    #[arg(short, long, default_value = "100")]
    games: u64,

    #[arg(long, default_value = "42")]
    seed: u64,

    #[arg(long, default_value = "5")]
    hand_size: usize,

    #[arg(long)]
    jokers: Option<u8>,

    /// Keep covered cards in a hidden pile instead of burying them.
    #[arg(long)]
    pile: bool,

    /// Fail instead of recycling the discard pile.
    #[arg(long)]
    finite: bool,
}

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let mut config = GameConfig::default()
        .with_min_players(args.players)
        .with_hand_size(args.hand_size)
        .with_infinite(!args.finite);
    if let Some(jokers) = args.jokers {
        config = config.with_jokers(jokers);
    }
    if args.pile {
        config = config.with_discard(DiscardPolicy::Pile);
    }

    let mut totals = StatBook::new();
    let mut seats = vec![StatBook::new(); args.players];
    let mut aborted = 0u64;

    for game_index in 0..args.games {
        let mut game = GameBuilder::new(config.clone().with_seed(args.seed.wrapping_add(game_index))).build()?;

        match game.start() {
            Ok(Outcome::GameOver(winner)) => {
                info!(game = game_index, %winner, rounds = game.round(), "game over");
            }
            Ok(outcome) => warn!(game = game_index, ?outcome, "game stopped without a winner"),
            Err(error) => {
                aborted += 1;
                warn!(game = game_index, %error, "game aborted");
            }
        }

        totals.combine(game.stats());
        for (seat, book) in seats.iter_mut().enumerate() {
            if let Some(stats) = game.player_stats(PlayerId(seat as u8)) {
                book.combine(stats);
            }
        }
    }

    let name = |id: PlayerId| format!("Bot {}", id.0 + 1);
    println!("{} games, {} players, {} aborted", args.games, args.players, aborted);
    for line in totals.summary(name) {
        println!("{line}");
    }
    for (seat, book) in seats.iter().enumerate() {
        println!(
            "{}: {} wins, {} cards played, {} cards drawn",
            name(PlayerId(seat as u8)),
            book.value(StatKind::Wins),
            book.value(StatKind::CardsPlayed),
            book.value(StatKind::CardsDrawn),
        );
    }

    Ok(())
}
