//! Command-line driver: evolve a policy, print its chart, optionally replay
//! rounds with it.

use anyhow::Result;
use blackjack_ga::ga::GaConfig;
use blackjack_ga::game::{play_round_with_deck, Decide, Deck, Outcome, RandomDecider};
use blackjack_ga::optimizer::BlackjackProblem;
use blackjack_ga::random::rng_from_option;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "blackjack-ga", author, version)]
#[command(
    about = "Evolve a Blackjack hit/stand policy with a genetic algorithm",
    long_about = None
)]
struct Cli {
    /// Number of policies per generation
    #[arg(short, long, default_value_t = 100)]
    population_size: usize,

    /// Number of generations to run; 0 skips evolution and replays with a
    /// coin-flip player
    #[arg(short, long, default_value_t = 50)]
    generations: usize,

    /// Rounds simulated per fitness evaluation
    #[arg(long, default_value_t = 100)]
    games_per_eval: usize,

    /// Per-cell flip probability for children
    #[arg(short, long, default_value_t = 0.01)]
    mutation_rate: f64,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate policies on all cores
    #[arg(long)]
    parallel: bool,

    /// Replay this many rounds with the evolved policy
    #[arg(long, default_value_t = 0)]
    play: usize,

    /// Print the evolved policy as JSON rows instead of a chart
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default)]
struct Tally {
    wins: usize,
    losses: usize,
    pushes: usize,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.wins += 1,
            Outcome::DealerWin => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Deals `rounds` fresh decks to `decider`, printing each round and a tally.
fn replay<D: Decide>(decider: &mut D, rounds: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = rng_from_option(seed);
    let mut tally = Tally::default();
    for round in 1..=rounds {
        let record = play_round_with_deck(decider, Deck::shuffled(&mut rng))?;
        println!(
            "#{round}: upcard {} | player {} | dealer {} => {:?}",
            record.upcard(),
            record.player,
            record.dealer,
            record.outcome
        );
        tally.record(record.outcome);
    }
    println!(
        "wins {}, losses {}, pushes {} over {} rounds",
        tally.wins, tally.losses, tally.pushes, rounds
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    if cli.generations == 0 {
        info!("no generations requested, replaying with an untrained coin-flip player");
        let seed = cli.seed.unwrap_or_else(rand::random);
        return replay(&mut RandomDecider::new(seed), cli.play, cli.seed);
    }

    let problem = BlackjackProblem::default()
        .with_games_per_eval(cli.games_per_eval)
        .with_mutation_rate(cli.mutation_rate);
    let mut config = GaConfig::default()
        .with_population_size(cli.population_size)
        .with_generations(cli.generations)
        .with_parallel(cli.parallel);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.parallel && !cfg!(feature = "parallel") {
        info!("built without the `parallel` feature, evaluating sequentially");
    }

    let result = problem.run(&config)?;
    info!(
        "last generation best fitness {:.4}, best overall {:.4}",
        result.best_fitness, result.best_ever_fitness
    );

    if cli.json {
        println!("{}", serde_json::to_string(&result.best)?);
    } else {
        println!("Best policy (1 = hit, 0 = stand):");
        print!("{}", result.best);
    }

    if cli.play > 0 {
        replay(&mut result.best.clone(), cli.play, cli.seed)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_each_outcome() {
        let mut tally = Tally::default();
        for outcome in [Outcome::PlayerWin, Outcome::Push, Outcome::DealerWin, Outcome::PlayerWin] {
            tally.record(outcome);
        }
        assert_eq!((tally.wins, tally.losses, tally.pushes), (2, 1, 1));
    }

    #[test]
    fn test_untrained_player_replays() {
        assert!(replay(&mut RandomDecider::new(5), 10, Some(5)).is_ok());
    }

    #[test]
    fn test_zero_generations_parses() {
        let cli = Cli::parse_from(["blackjack-ga", "-g", "0", "--play", "3", "-s", "1"]);
        assert_eq!(cli.generations, 0);
        assert_eq!(cli.play, 3);
    }
}
