//! Mastermind Solver - CLI
//!
//! Batch play, interactive play, single-code solving and guess analysis.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mastermind_solver::{
    agents::AgentKind,
    commands::{analyze_code, execute_run, solve_code},
    core::Code,
    game::{
        DEFAULT_CODE_LENGTH, DEFAULT_COLOURS, DEFAULT_GAMES, DEFAULT_MAX_GUESSES, ErrorPolicy,
        GameSettings,
    },
    logging,
    output::{print_analysis_result, print_solve_result, render::renderer},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver using candidate elimination and expected partition size",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    game: GameArgs,

    /// Show every guess and extra diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print plain symbols instead of coloured pegs
    #[arg(long, global = true)]
    plain: bool,
}

/// Parameters shared by all commands
#[derive(Args)]
struct GameArgs {
    /// Number of pegs in a code
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Number of colours in play (1-6)
    #[arg(short = 'c', long, global = true, default_value_t = DEFAULT_COLOURS)]
    colours: usize,

    /// Guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    guesses: usize,

    /// Seed for target generation (default: current time)
    #[arg(short = 's', long, global = true)]
    seed: Option<u64>,

    /// Seed for the agent's randomness (default: derived from --seed)
    #[arg(long, global = true)]
    solver_seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a batch of games with an agent (default)
    Run {
        /// Number of games
        #[arg(short = 'n', long, default_value_t = DEFAULT_GAMES)]
        games: usize,

        /// Agent playing the games
        #[arg(short, long, value_enum, default_value_t = AgentKind::Elimination)]
        agent: AgentKind,

        /// What to do when the agent breaks the rules
        #[arg(short, long, value_enum, default_value_t = ErrorPolicy::Strict)]
        policy: ErrorPolicy,
    },

    /// Play yourself from the keyboard
    Play {
        /// Number of games
        #[arg(short = 'n', long, default_value_t = 1)]
        games: usize,
    },

    /// Solve a specific code with the elimination agent
    Solve {
        /// The target code, e.g. BRGYP
        code: String,
    },

    /// Analyze a code as an opening guess
    Analyze {
        /// Code to analyze
        code: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.plain {
        colored::control::set_override(false);
    }

    let command = cli.command.unwrap_or(Commands::Run {
        games: DEFAULT_GAMES,
        agent: AgentKind::Elimination,
        policy: ErrorPolicy::Strict,
    });

    let base = GameSettings {
        code_length: cli.game.length,
        colours: cli.game.colours,
        max_guesses: cli.game.guesses,
        seed: cli.game.seed,
        solver_seed: cli.game.solver_seed,
        verbose: cli.verbose,
        ..GameSettings::default()
    };

    match command {
        Commands::Run {
            games,
            agent,
            policy,
        } => {
            let settings = GameSettings {
                games,
                agent,
                policy,
                ..base
            };
            execute_run(&settings, cli.plain)?;
            Ok(())
        }
        Commands::Play { games } => {
            let settings = GameSettings {
                games,
                agent: AgentKind::Human,
                ..base
            };
            execute_run(&settings, cli.plain)?;
            Ok(())
        }
        Commands::Solve { code } => run_solve_command(&base, &code, cli.verbose, cli.plain),
        Commands::Analyze { code } => run_analyze_command(&base, &code, cli.plain),
    }
}

fn run_solve_command(settings: &GameSettings, code: &str, verbose: bool, plain: bool) -> Result<()> {
    let setup = settings.validate()?;
    let target = Code::parse(code, &setup.alphabet, setup.code_length)?;
    let seed = settings.solver_seed(settings.game_seed());

    let result = solve_code(setup, &target, seed)?;
    print_solve_result(&result, renderer(plain).as_ref(), verbose);
    Ok(())
}

fn run_analyze_command(settings: &GameSettings, code: &str, plain: bool) -> Result<()> {
    let setup = settings.validate()?;
    let guess = Code::parse(code, &setup.alphabet, setup.code_length)?;

    let result = analyze_code(&setup, &guess)?;
    print_analysis_result(&result, renderer(plain).as_ref());
    Ok(())
}
