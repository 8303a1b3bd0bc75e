//! Batch command
//!
//! Plays a series of games against randomly drawn targets and keeps score.

use crate::agents::{Agent, AgentKind, AgentType};
use crate::core::{Alphabet, Code, CodeError};
use crate::game::{ErrorPolicy, GameEngine, GameError, GameRecord, GameSettings, GameState};
use crate::output::display;
use crate::output::render::renderer;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of one game in a batch
#[derive(Debug)]
pub struct GameOutcome {
    /// Full game record, absent when the game ended in a contract violation
    pub record: Option<GameRecord>,
    /// Violation recorded under the tournament policy
    pub violation: Option<String>,
    pub score: usize,
    pub duration: Duration,
}

/// Snapshot handed to the observer after every game
#[derive(Debug)]
pub struct GameProgress<'a> {
    /// 1-based number of the game just finished
    pub game: usize,
    pub total: usize,
    pub outcome: &'a GameOutcome,
    pub average_score: f64,
    pub elapsed: Duration,
}

impl GameProgress<'_> {
    /// Mean wall time per game so far
    #[must_use]
    pub fn average_time(&self) -> Duration {
        self.elapsed / u32::try_from(self.game.max(1)).unwrap_or(u32::MAX)
    }

    /// Projected time to finish the remaining games
    #[must_use]
    pub fn time_remaining(&self) -> Duration {
        self.average_time() * u32::try_from(self.total - self.game).unwrap_or(u32::MAX)
    }

    /// Projected time for the whole batch
    #[must_use]
    pub fn expected_total(&self) -> Duration {
        self.average_time() * u32::try_from(self.total).unwrap_or(u32::MAX)
    }
}

/// Statistics of a whole batch
#[derive(Debug, Default)]
pub struct RunSummary {
    pub games_requested: usize,
    pub games_played: usize,
    pub solved: usize,
    pub abstained: usize,
    pub exhausted: usize,
    pub violations: usize,
    /// The run was stopped before all games were played
    pub cancelled: bool,
    pub total_score: usize,
    /// Number of solved games per guess count
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games_played as f64
        }
    }

    /// Mean guesses over solved games only
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        let guesses: usize = self
            .guess_distribution
            .iter()
            .map(|(guesses, count)| guesses * count)
            .sum();
        guesses as f64 / self.solved as f64
    }

    fn record(&mut self, outcome: &GameOutcome) {
        self.games_played += 1;
        self.total_score += outcome.score;
        self.total_time += outcome.duration;

        match outcome.record.as_ref().map(|r| r.state) {
            Some(GameState::Solved { guesses }) => {
                self.solved += 1;
                *self.guess_distribution.entry(guesses).or_insert(0) += 1;
            }
            Some(GameState::Exhausted { abstained: true }) => self.abstained += 1,
            Some(GameState::Exhausted { abstained: false }) => self.exhausted += 1,
            _ => self.violations += 1,
        }
    }
}

/// Draw `games` targets from a generator seeded with `seed`
///
/// Each target is drawn position by position, uniformly over the alphabet, so
/// the same seed always yields the same targets.
///
/// # Errors
/// Returns `CodeError::EmptyCode` if `length` is zero.
pub fn generate_targets(
    alphabet: &Alphabet,
    length: usize,
    games: usize,
    seed: u64,
) -> Result<Vec<Code>, CodeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let colours = alphabet.colours();

    (0..games)
        .map(|_| {
            let pegs: Vec<_> = (0..length)
                .map(|_| colours[rng.random_range(0..colours.len())])
                .collect();
            Code::new(pegs)
        })
        .collect()
}

/// Play every target in turn with one agent
///
/// `observer` is called after each game. Under the tournament policy a contract
/// violation scores the game as `2 × max_guesses` and play continues; under the
/// strict policy it ends the batch. Inconsistent agent state always ends it. A
/// cancelled game stops the batch without counting.
///
/// # Errors
/// Returns the `GameError` that ended the batch.
pub fn run_games<A, F>(
    engine: &GameEngine,
    agent: &mut A,
    targets: &[Code],
    policy: ErrorPolicy,
    mut observer: F,
) -> Result<RunSummary, GameError>
where
    A: Agent + ?Sized,
    F: FnMut(&GameProgress<'_>),
{
    let max_guesses = engine.setup().max_guesses;
    let mut summary = RunSummary {
        games_requested: targets.len(),
        ..RunSummary::default()
    };

    engine.initialize(agent)?;

    for target in targets {
        let start = Instant::now();
        let result = engine.play(agent, target);
        let duration = start.elapsed();

        let outcome = match result {
            Ok(record) if record.state == GameState::Cancelled => {
                log::info!("Run cancelled after {} games", summary.games_played);
                summary.cancelled = true;
                break;
            }
            Ok(record) => GameOutcome {
                score: record.score.unwrap_or(2 * max_guesses),
                record: Some(record),
                violation: None,
                duration,
            },
            Err(e) if e.is_recoverable() && policy == ErrorPolicy::Tournament => {
                log::warn!("{e}");
                GameOutcome {
                    record: None,
                    violation: Some(e.to_string()),
                    score: 2 * max_guesses,
                    duration,
                }
            }
            Err(e) => return Err(e),
        };

        summary.record(&outcome);
        observer(&GameProgress {
            game: summary.games_played,
            total: targets.len(),
            outcome: &outcome,
            average_score: summary.average_score(),
            elapsed: summary.total_time,
        });
    }

    Ok(summary)
}

/// Run a batch as configured, printing progress and a final summary
///
/// # Errors
/// Returns an error for invalid settings or a game error that ends the batch.
pub fn execute_run(settings: &GameSettings, plain: bool) -> anyhow::Result<RunSummary> {
    let setup = settings.validate()?;
    let seed = settings.game_seed();
    let solver_seed = settings.solver_seed(seed);
    let targets = generate_targets(&setup.alphabet, setup.code_length, settings.games, seed)?;

    let engine = GameEngine::new(setup);
    let mut agent = AgentType::build(
        settings.agent,
        solver_seed,
        engine.cancel_token(),
        plain,
    );
    let render = renderer(plain);

    log::info!("Game seed {seed}, solver seed {solver_seed}");
    display::print_run_header(engine.setup(), settings, seed);

    // Progress bar would fight with per-game output
    let quiet = !settings.verbose && settings.agent != AgentKind::Human;
    let progress = quiet.then(|| {
        let pb = ProgressBar::new(settings.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    });

    let summary = run_games(&engine, &mut agent, &targets, settings.policy, |progress_info| {
        if let Some(pb) = &progress {
            pb.set_message(format!("Avg: {:.2}", progress_info.average_score));
            pb.inc(1);
        } else {
            display::print_game_progress(progress_info, render.as_ref(), settings.verbose);
        }
    });

    if let Some(pb) = &progress {
        pb.finish_with_message("Complete!");
    }

    let summary = summary?;
    display::print_run_summary(&summary, engine.setup().max_guesses);
    Ok(summary)
}
