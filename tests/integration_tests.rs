// Integration tests for the mastermind solver
// These tests drive agents through the game engine end to end

use mastermind_solver::agents::{
    Agent, AgentError, AgentMove, EliminationAgent, GameSetup, HumanAgent, LineInput, Percept,
    RandomAgent,
};
use mastermind_solver::commands::{generate_targets, run_games};
use mastermind_solver::core::{Alphabet, Code, Feedback};
use mastermind_solver::game::{CancelToken, ErrorPolicy, GameEngine, GameError, GameState};
use mastermind_solver::output::PlainRenderer;
use mastermind_solver::solver::{CandidateTracker, CodeSpace, narrow};
use std::io::{self, Cursor};

/// Agent replaying a fixed list of guesses, then abstaining
struct Scripted {
    guesses: Vec<&'static str>,
    calls: usize,
}

impl Scripted {
    fn new(guesses: &[&'static str]) -> Self {
        Self {
            guesses: guesses.to_vec(),
            calls: 0,
        }
    }
}

impl Agent for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn initialize(&mut self, _setup: &GameSetup) -> Result<(), AgentError> {
        Ok(())
    }

    fn next_guess(&mut self, _percept: &Percept) -> Result<AgentMove, AgentError> {
        let reply = self
            .guesses
            .get(self.calls)
            .map_or(AgentMove::Abstain, |g| AgentMove::Guess(g.chars().collect()));
        self.calls += 1;
        Ok(reply)
    }
}

fn setup(colours: usize, length: usize, max_guesses: usize) -> GameSetup {
    GameSetup {
        code_length: length,
        alphabet: Alphabet::new(colours).unwrap(),
        max_guesses,
    }
}

#[test]
fn test_two_colour_scenario() {
    let engine = GameEngine::new(setup(2, 2, 10));
    let target = Code::parse("BR", &engine.setup().alphabet, 2).unwrap();
    let mut agent = Scripted::new(&["BB", "RB", "BR"]);

    let record = engine.play(&mut agent, &target).unwrap();

    let feedbacks: Vec<Feedback> = record.turns.iter().map(|t| t.feedback).collect();
    assert_eq!(
        feedbacks,
        [Feedback::new(1, 0), Feedback::new(0, 2), Feedback::new(2, 0)]
    );
    assert_eq!(record.state, GameState::Solved { guesses: 3 });
    assert_eq!(record.score, Some(3));
}

#[test]
fn test_narrowed_pool_matches_brute_force() {
    let space = CodeSpace::new(Alphabet::new(3).unwrap(), 3).unwrap();
    assert_eq!(space.len(), 27);

    let guess = Code::parse("BRG", space.alphabet(), 3).unwrap();
    let feedback = Feedback::new(1, 1);

    let mut tracker = CandidateTracker::from_space(&space);
    tracker.narrow(&guess, feedback).unwrap();

    let expected: Vec<Code> = space
        .iter()
        .filter(|c| Feedback::evaluate(&guess, c) == feedback)
        .cloned()
        .collect();

    assert!(!expected.is_empty());
    assert_eq!(tracker.pool(), expected.as_slice());
    assert_eq!(narrow(space.codes(), &guess, feedback), expected);
}

#[test]
fn test_abstain_on_first_turn() {
    let engine = GameEngine::new(setup(6, 5, 10));
    let target = Code::parse("CCPYB", &engine.setup().alphabet, 5).unwrap();
    let mut agent = Scripted::new(&[]);

    let record = engine.play(&mut agent, &target).unwrap();

    assert_eq!(record.state, GameState::Exhausted { abstained: true });
    assert_eq!(record.score, Some(10));
    assert!(record.turns.is_empty());
    assert_eq!(agent.calls, 1);
}

#[test]
fn test_budget_exhausted() {
    let engine = GameEngine::new(setup(3, 3, 3));
    let target = Code::parse("GGG", &engine.setup().alphabet, 3).unwrap();
    let mut agent = Scripted::new(&["BBB", "RRR", "BRB", "GGG"]);

    let record = engine.play(&mut agent, &target).unwrap();

    assert_eq!(record.state, GameState::Exhausted { abstained: false });
    assert_eq!(record.score, Some(6));
    assert_eq!(record.guesses(), 3);
    assert_eq!(agent.calls, 3);
}

#[test]
fn test_elimination_target_stays_in_pool() {
    let setup = setup(5, 4, 12);
    let space = CodeSpace::new(setup.alphabet.clone(), 4).unwrap();
    let targets = generate_targets(&setup.alphabet, 4, 10, 21).unwrap();
    let engine = GameEngine::new(setup);
    let mut agent = EliminationAgent::new(21);
    engine.initialize(&mut agent).unwrap();

    for target in &targets {
        let record = engine.play(&mut agent, target).unwrap();
        assert!(record.solved(), "{target} not solved");

        // Replaying the feedback never loses the target
        let mut tracker = CandidateTracker::from_space(&space);
        for turn in &record.turns {
            let before = tracker.len();
            let after = tracker.narrow(&turn.guess, turn.feedback).unwrap();
            assert!(after <= before);
            assert!(tracker.contains(target));
        }
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let play = |seed: u64| {
        let engine = GameEngine::new(setup(6, 5, 10));
        let targets = generate_targets(&engine.setup().alphabet, 5, 3, seed).unwrap();
        let mut agent = EliminationAgent::new(seed);
        let mut records = Vec::new();

        run_games(&engine, &mut agent, &targets, ErrorPolicy::Strict, |progress| {
            records.push(progress.outcome.record.clone());
        })
        .unwrap();

        records
    };

    assert_eq!(play(77), play(77));
}

#[test]
fn test_tournament_keeps_playing() {
    let engine = GameEngine::new(setup(3, 3, 5));
    let targets = generate_targets(&engine.setup().alphabet, 3, 4, 2).unwrap();

    let mut strict = Scripted::new(&["BBBB"]);
    let error = run_games(&engine, &mut strict, &targets, ErrorPolicy::Strict, |_| {}).unwrap_err();
    assert!(matches!(error, GameError::AgentContractViolation { .. }));

    // After the first game the script is spent and the agent abstains
    let mut tournament = Scripted::new(&["BBBB"]);
    let summary =
        run_games(&engine, &mut tournament, &targets, ErrorPolicy::Tournament, |_| {}).unwrap();
    assert_eq!(summary.games_played, 4);
    assert_eq!(summary.violations, 1);
    assert_eq!(summary.abstained, 3);
    assert_eq!(summary.total_score, 10 + 3 * 5);
}

#[test]
fn test_random_agent_batch() {
    let engine = GameEngine::new(setup(2, 2, 20));
    let targets = generate_targets(&engine.setup().alphabet, 2, 10, 4).unwrap();
    let mut agent = RandomAgent::new(4);

    let summary = run_games(&engine, &mut agent, &targets, ErrorPolicy::Strict, |_| {}).unwrap();

    assert_eq!(summary.games_played, 10);
    assert_eq!(summary.solved + summary.exhausted, 10);
    assert_eq!(summary.violations, 0);
}

#[test]
fn test_human_session_from_script() {
    let cancel = CancelToken::new();
    let engine = GameEngine::new(setup(3, 3, 10)).with_cancel(cancel.clone());
    let target = Code::parse("RGB", &engine.setup().alphabet, 3).unwrap();

    // One illegal entry, one miss, then the answer
    let script = "XYZ\nBBB\nrgb\n";
    let input = LineInput::new(Cursor::new(script), io::sink());
    let mut agent = HumanAgent::new(
        Box::new(input),
        Box::new(io::sink()),
        Box::new(PlainRenderer),
        cancel,
    );
    engine.initialize(&mut agent).unwrap();

    let record = engine.play(&mut agent, &target).unwrap();

    assert_eq!(record.state, GameState::Solved { guesses: 2 });
    assert_eq!(record.turns[0].feedback, Feedback::new(1, 0));
}

#[test]
fn test_human_quit_cancels_game() {
    let cancel = CancelToken::new();
    let engine = GameEngine::new(setup(3, 3, 10)).with_cancel(cancel.clone());
    let target = Code::parse("RGB", &engine.setup().alphabet, 3).unwrap();

    let input = LineInput::new(Cursor::new("BBB\nquit\n"), io::sink());
    let mut agent = HumanAgent::new(
        Box::new(input),
        Box::new(io::sink()),
        Box::new(PlainRenderer),
        cancel.clone(),
    );
    engine.initialize(&mut agent).unwrap();

    let record = engine.play(&mut agent, &target).unwrap();

    assert_eq!(record.state, GameState::Cancelled);
    assert_eq!(record.score, None);
    assert_eq!(record.guesses(), 1);
    assert!(cancel.is_cancelled());
}
