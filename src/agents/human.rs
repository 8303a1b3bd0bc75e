//! Human agent
//!
//! Shows the previous guess and its feedback, then reads a guess from the
//! player. Illegal entries are rejected locally and the player is asked
//! again, so a human never trips the engine's contract check.

use super::{Agent, AgentError, AgentMove, GameSetup, Percept};
use crate::core::Code;
use crate::game::CancelToken;
use crate::output::render::{ColourRenderer, renderer};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, BufRead, Write};

/// One entry from the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HumanInput {
    /// A candidate code, not yet validated
    Line(String),
    /// Abstain from the current game
    GiveUp,
    /// Stop the whole run
    Quit,
}

/// Where player entries come from
pub trait InputSource {
    /// Show `prompt` and wait for one entry
    ///
    /// # Errors
    /// Returns an I/O error if the input cannot be read.
    fn read(&mut self, prompt: &str) -> io::Result<HumanInput>;
}

/// Line-based input, one entry per line
///
/// `quit` or end of input stops the run; `give up` or `?` abstains.
pub struct LineInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read(&mut self, prompt: &str) -> io::Result<HumanInput> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(HumanInput::Quit);
        }

        let entry = line.trim();
        Ok(match entry.to_ascii_lowercase().as_str() {
            "quit" | "exit" => HumanInput::Quit,
            "give up" | "?" => HumanInput::GiveUp,
            _ => HumanInput::Line(entry.to_string()),
        })
    }
}

/// Raw-mode keyboard input
///
/// Ctrl-C stops the run, Ctrl-D abstains, Enter submits.
#[derive(Debug, Default)]
pub struct KeyInput;

/// Leaves raw mode when dropped, even on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl InputSource for KeyInput {
    fn read(&mut self, prompt: &str) -> io::Result<HumanInput> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let _guard = RawModeGuard::enable()?;
        let mut buffer = String::new();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => {
                    write!(stdout, "\r\n")?;
                    return Ok(HumanInput::Quit);
                }
                KeyCode::Char('d') if ctrl => {
                    write!(stdout, "\r\n")?;
                    return Ok(HumanInput::GiveUp);
                }
                KeyCode::Char(c) if !c.is_whitespace() => {
                    buffer.push(c);
                    write!(stdout, "{c}")?;
                }
                KeyCode::Backspace => {
                    if buffer.pop().is_some() {
                        write!(stdout, "\u{8} \u{8}")?;
                    }
                }
                KeyCode::Enter => {
                    write!(stdout, "\r\n")?;
                    return Ok(HumanInput::Line(buffer));
                }
                _ => {}
            }
            stdout.flush()?;
        }
    }
}

/// Agent driven by a person at the terminal
pub struct HumanAgent {
    input: Box<dyn InputSource>,
    output: Box<dyn Write>,
    renderer: Box<dyn ColourRenderer>,
    cancel: CancelToken,
    setup: Option<GameSetup>,
}

impl HumanAgent {
    /// Human agent with custom input and output
    #[must_use]
    pub fn new(
        input: Box<dyn InputSource>,
        output: Box<dyn Write>,
        renderer: Box<dyn ColourRenderer>,
        cancel: CancelToken,
    ) -> Self {
        Self {
            input,
            output,
            renderer,
            cancel,
            setup: None,
        }
    }

    /// Human agent reading raw keystrokes from the terminal
    #[must_use]
    pub fn keyboard(cancel: CancelToken, plain: bool) -> Self {
        Self::new(
            Box::new(KeyInput),
            Box::new(io::stdout()),
            renderer(plain),
            cancel,
        )
    }

    fn show_previous(&mut self, percept: &Percept) -> io::Result<()> {
        if let Some(guess) = &percept.last_guess {
            writeln!(
                self.output,
                "  {:>2}. {}  {}",
                percept.turn,
                self.renderer.code(guess),
                self.renderer.feedback(percept.feedback())
            )?;
        }
        Ok(())
    }
}

impl Agent for HumanAgent {
    fn name(&self) -> &'static str {
        "human"
    }

    fn initialize(&mut self, setup: &GameSetup) -> Result<(), AgentError> {
        let palette: String = setup
            .alphabet
            .colours()
            .iter()
            .map(|&colour| self.renderer.peg(colour))
            .collect();
        writeln!(
            self.output,
            "Guess a code of {} pegs from {} in at most {} tries.",
            setup.code_length, palette, setup.max_guesses
        )?;
        self.setup = Some(setup.clone());
        Ok(())
    }

    fn next_guess(&mut self, percept: &Percept) -> Result<AgentMove, AgentError> {
        let setup = self.setup.clone().ok_or(AgentError::NotInitialized)?;

        if percept.turn == 0 {
            writeln!(self.output, "New game.")?;
        }
        self.show_previous(percept)?;

        let prompt = format!("  {:>2}> ", percept.turn + 1);
        loop {
            match self.input.read(&prompt)? {
                HumanInput::Quit => {
                    self.cancel.cancel();
                    return Ok(AgentMove::Abstain);
                }
                HumanInput::GiveUp => return Ok(AgentMove::Abstain),
                HumanInput::Line(entry) => {
                    match Code::parse(&entry, &setup.alphabet, setup.code_length) {
                        Ok(code) => return Ok(AgentMove::Guess(code.symbols())),
                        Err(e) => writeln!(self.output, "  {e}, try again")?,
                    }
                }
            }
        }
    }
}
