//! Display functions for command results

use super::formatters::{create_progress_bar, guess_row, time_to_str};
use super::render::ColourRenderer;
use crate::agents::GameSetup;
use crate::commands::{AnalysisResult, GameProgress, RunSummary, SolveResult};
use crate::game::{GameRecord, GameSettings, GameState};
use colored::Colorize;

/// Print the parameters of a batch before it starts
pub fn print_run_header(setup: &GameSetup, settings: &GameSettings, seed: u64) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MASTERMIND".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("  Code length:  {}", setup.code_length);
    println!("  Colours:      {}", setup.alphabet);
    println!("  Num guesses:  {}", setup.max_guesses);
    println!("  Num games:    {}", settings.games);
    println!("  Agent:        {:?}", settings.agent);
    println!("  Policy:       {}", settings.policy);
    println!("  Seed:         {seed}");
}

/// Print a finished game, move by move
pub fn print_game_record(record: &GameRecord, renderer: &dyn ColourRenderer) {
    for (i, turn) in record.turns.iter().enumerate() {
        println!(
            "  Guess {:2}: {}",
            i + 1,
            guess_row(renderer, &turn.guess, turn.feedback)
        );
    }

    match record.state {
        GameState::Solved { guesses: 1 } => println!("{}", "  Solved in 1 guess!".green().bold()),
        GameState::Solved { guesses } => {
            println!("{}", format!("  Solved in {guesses} guesses!").green().bold());
        }
        GameState::Exhausted { abstained } => {
            if abstained {
                println!("{}", "  Gave up.".yellow());
            }
            println!("  The solution was: {}", renderer.code(&record.target));
        }
        GameState::AwaitingGuess { .. } | GameState::Scoring { .. } | GameState::Cancelled => {}
    }
}

/// Print the running score and timing after a game
pub fn print_game_progress(progress: &GameProgress<'_>, renderer: &dyn ColourRenderer, verbose: bool) {
    if verbose {
        println!("Round {}/{}", progress.game, progress.total);
        if let Some(record) = &progress.outcome.record {
            print_game_record(record, renderer);
        }
    }
    if let Some(violation) = &progress.outcome.violation {
        println!("  {} {violation}", "Violation:".red().bold());
    }

    println!(
        "Average score after game {}: {:.2}",
        progress.game, progress.average_score
    );

    if progress.game < progress.total {
        println!(
            "Average running time per game {}.",
            time_to_str(progress.average_time().as_secs_f64())
        );
        println!(
            "Time remaining {}.",
            time_to_str(progress.time_remaining().as_secs_f64())
        );
        println!(
            "Expected total running time {}.",
            time_to_str(progress.expected_total().as_secs_f64())
        );
    } else {
        println!(
            "Total running time {}.",
            time_to_str(progress.elapsed.as_secs_f64())
        );
    }
}

/// Print batch statistics with a guess distribution
pub fn print_run_summary(summary: &RunSummary, max_guesses: usize) {
    println!("\n{}", "═".repeat(60));
    println!(" Results ");
    println!("{}", "═".repeat(60));

    if summary.cancelled {
        println!(
            "{}",
            format!(
                "  Cancelled after {} of {} games",
                summary.games_played, summary.games_requested
            )
            .yellow()
        );
    }
    if summary.games_played == 0 {
        return;
    }

    let percent = |count: usize| count as f64 / summary.games_played as f64 * 100.0;

    println!("  Games played:    {}", summary.games_played);
    println!(
        "  Solved:          {} {}",
        summary.solved,
        format!("({:.1}%)", percent(summary.solved)).green()
    );
    if summary.exhausted > 0 {
        println!(
            "  Out of guesses:  {} {}",
            summary.exhausted,
            format!("({:.1}%)", percent(summary.exhausted)).red()
        );
    }
    if summary.abstained > 0 {
        println!("  Abstained:       {}", summary.abstained);
    }
    if summary.violations > 0 {
        println!(
            "  Violations:      {}",
            summary.violations.to_string().red().bold()
        );
    }
    println!(
        "  Average score:   {}",
        format!("{:.3}", summary.average_score()).bright_yellow().bold()
    );
    if summary.solved > 0 {
        println!("  Average guesses: {:.3} (solved games)", summary.average_guesses());
    }
    println!(
        "  Total time:      {}",
        time_to_str(summary.total_time.as_secs_f64())
    );

    if summary.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = summary.guess_distribution.values().copied().max().unwrap_or(1);
    for (guesses, count) in distribution_rows(summary, max_guesses) {
        println!(
            "  {guesses:2} guesses: {} {count:5} ({:5.1}%)",
            create_progress_bar(count, max_count, 40).green(),
            count as f64 / summary.solved as f64 * 100.0
        );
    }
}

/// Solved-game counts per guess count, from one guess up to the longest solve
fn distribution_rows(summary: &RunSummary, max_guesses: usize) -> Vec<(usize, usize)> {
    let longest = summary
        .guess_distribution
        .keys()
        .copied()
        .max()
        .unwrap_or(0)
        .min(max_guesses);

    (1..=longest)
        .map(|guesses| {
            let count = summary.guess_distribution.get(&guesses).copied().unwrap_or(0);
            (guesses, count)
        })
        .collect()
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, renderer: &dyn ColourRenderer, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", renderer.code(&result.target));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nGuess {:2}: {}",
            i + 1,
            guess_row(renderer, &step.guess, step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.1} candidates");
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult, renderer: &dyn ColourRenderer) {
    let metrics = &result.metrics;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        renderer.code(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("  Code space:          {} codes", result.space_size);
    println!(
        "  Expected remaining:  {}",
        format!("{:.2}", metrics.expected_remaining).bright_yellow().bold()
    );
    println!("  Worst case:          {} codes", metrics.max_partition);
    println!("  Distinct feedbacks:  {}", metrics.partitions);
    println!("  Entropy:             {:.3} bits", metrics.entropy);

    if let Some((best, expected)) = &result.best_opening {
        println!(
            "\n  Best opening:        {} ({expected:.2} expected)",
            renderer.code(best)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(solves: &[(usize, usize)]) -> RunSummary {
        let mut summary = RunSummary::default();
        for &(guesses, count) in solves {
            summary.guess_distribution.insert(guesses, count);
            summary.solved += count;
            summary.games_played += count;
            summary.total_score += guesses * count;
        }
        summary
    }

    #[test]
    fn distribution_fills_gaps() {
        let summary = summary(&[(2, 3), (5, 1)]);
        assert_eq!(
            distribution_rows(&summary, 10),
            [(1, 0), (2, 3), (3, 0), (4, 0), (5, 1)]
        );
    }

    #[test]
    fn distribution_capped_at_budget() {
        let summary = summary(&[(3, 2), (7, 1)]);
        assert_eq!(distribution_rows(&summary, 4).len(), 4);
    }

    #[test]
    fn distribution_empty_without_solves() {
        assert!(distribution_rows(&RunSummary::default(), 10).is_empty());
    }

    #[test]
    fn summary_prints_without_games() {
        let cancelled = RunSummary {
            games_requested: 5,
            cancelled: true,
            ..RunSummary::default()
        };
        print_run_summary(&cancelled, 10);
        print_run_summary(&summary(&[(4, 2)]), 10);
    }
}
