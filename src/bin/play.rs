//! Stay-or-Fold Binary
//!
//! Deals heads-up hands and plays them from the hero's seat, either with the
//! bandit search deciding or with you deciding at the prompt.
//!
//! Options: --hole, --board, --villain, --budget, --seed, --exploration,
//! --threshold, --human, --config

use anyhow::Context;
use banditpoker::cards::*;
use banditpoker::gameplay::*;
use banditpoker::search::*;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Heads-up Hold'em stay/fold bot", long_about = None)]
struct Args {
    /// hero hole cards, e.g. "As Kd"
    #[arg(long)]
    hole: Option<String>,
    /// all five community cards in dealing order, e.g. "Qs Js Ts 9s 8s"
    #[arg(long)]
    board: Option<String>,
    /// villain hole cards
    #[arg(long)]
    villain: Option<String>,
    /// thinking time per decision, e.g. "500ms", "2s"
    #[arg(long)]
    budget: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    /// candidates scored per selection step
    #[arg(long)]
    breadth: Option<usize>,
    /// UCB1 exploration constant
    #[arg(long)]
    exploration: Option<f64>,
    /// minimum estimated win rate to stay
    #[arg(long)]
    threshold: Option<f64>,
    /// rollout threads, 0 for one per core
    #[arg(long)]
    workers: Option<usize>,
    /// stop each search after this many rollouts
    #[arg(long)]
    rollouts: Option<usize>,
    /// decide yourself instead of the bot
    #[arg(long)]
    human: bool,
    /// number of hands to play
    #[arg(long, default_value_t = 1)]
    hands: usize,
    /// JSON file with search settings
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))
                .and_then(|json| serde_json::from_str::<Config>(&json).context("parsing config"))?,
            None => Config::from_env(),
        };
        if let Some(ref budget) = self.budget {
            config = config.with_budget_str(budget);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(breadth) = self.breadth {
            config = config.with_breadth(breadth);
        }
        if let Some(exploration) = self.exploration {
            config = config.with_exploration(exploration);
        }
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        if let Some(rollouts) = self.rollouts {
            config = config.with_rollouts(rollouts);
        }
        match self.workers {
            Some(0) => config = config.with_workers(num_cpus::get()),
            Some(n) => config = config.with_workers(n),
            None => {}
        }
        Ok(config)
    }

    /// Cards given on the command line are fixed; the rest are dealt.
    fn deal(&self, rng: &mut SmallRng) -> anyhow::Result<Deal> {
        let hole = self.hole.as_deref().map(Hole::try_from).transpose()?;
        let villain = self.villain.as_deref().map(Hole::try_from).transpose()?;
        let board = self
            .board
            .as_deref()
            .map(Card::parse)
            .transpose()
            .map_err(anyhow::Error::msg)?;
        let ref mut deck = Deck::new();
        hole.iter().for_each(|h| deck.remove(Hand::from(*h)));
        villain.iter().for_each(|h| deck.remove(Hand::from(*h)));
        board.iter().for_each(|b| deck.remove(b.iter().copied().collect::<Hand>()));
        let hole = match hole {
            Some(hole) => hole,
            None => Hole::try_from(Hand::from_iter(deck.deal(2, rng)?))?,
        };
        let board = match board {
            Some(board) => board,
            None => deck.deal(5, rng)?,
        };
        let villain = match villain {
            Some(villain) => villain,
            None => Hole::try_from(Hand::from_iter(deck.deal(2, rng)?))?,
        };
        let board = <[Card; 5]>::try_from(board)
            .map_err(|cards| anyhow::anyhow!("board needs 5 cards, got {}", cards.len()))?;
        Ok(Deal::new(hole, villain, board)?)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    banditpoker::log(args.level());
    let config = args.config()?;
    log::debug!("config {}", serde_json::to_string(&config)?);
    let ref mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut player: Box<dyn Player> = match args.human {
        true => Box::new(Human),
        false => Box::new(Robot::from(Search::new(config))),
    };
    let mut total = 0.0;
    for i in 0..args.hands {
        let game = Game::from(args.deal(rng)?);
        println!("{} {}", format!("HAND {}", i + 1).bold(), game.deal());
        let ending = game.play(player.as_mut())?;
        let score = ending.score();
        total += score;
        let line = format!("{:+.1}  {}", score, ending);
        match score {
            s if s > 0.5 => println!("{}", line.green()),
            s if s < 0.0 => println!("{}", line.red()),
            _ => println!("{}", line.yellow()),
        }
    }
    if args.hands > 1 {
        println!("{}", format!("TOTAL {:+.1} over {} hands", total, args.hands).bold());
    }
    Ok(())
}
