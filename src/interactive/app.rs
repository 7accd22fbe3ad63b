//! TUI application state and logic

use crate::game::{
    Difficulty, Game, GameError, Input, RandomPicker, Snapshot, TargetPicker,
};
use crate::lexicon::Lexicon;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, P: TargetPicker = RandomPicker> {
    pub game: Game<'a, P>,
    pub snapshot: Snapshot,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play(Input),
    Quit,
}

/// Results of the games played in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses used (index 1-6)
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    /// Count a finished game
    pub fn record(&mut self, snapshot: &Snapshot) {
        if !snapshot.over {
            return;
        }

        self.total_games += 1;
        if snapshot.won {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(snapshot.guesses.len()) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a, P: TargetPicker> App<'a, P> {
    /// Create the app with a first game at `level`
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon has no pool for `level`.
    pub fn new(lexicon: &'a Lexicon, level: Difficulty, picker: P) -> Result<Self, GameError> {
        let game = Game::new(lexicon, level, picker)?;
        let snapshot = game.snapshot();

        Ok(Self {
            game,
            messages: vec![
                Message {
                    text: format!(
                        "Guess the word in {} tries. Level: {}",
                        snapshot.max_guesses, snapshot.level
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Tab to change level".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            snapshot,
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Forward an input to the game and turn the outcome into messages
    pub fn apply(&mut self, input: Input) {
        match self.game.handle(input) {
            Ok(snapshot) => {
                let finished = snapshot.over && !self.snapshot.over;
                self.snapshot = snapshot;

                match input {
                    Input::ChangeLevel(level) => {
                        self.add_message(&format!("level: {level}"), MessageStyle::Success);
                    }
                    Input::NewGame(_) => {
                        self.add_message("New game started!", MessageStyle::Info);
                    }
                    _ => {}
                }

                if finished {
                    self.finish_game();
                }
            }
            // Stray keys are simply ignored
            Err(GameError::InvalidInput(_)) => {}
            Err(GameError::IncompleteGuess { .. }) => {
                self.add_message("word too short", MessageStyle::Error);
            }
            Err(GameError::UnknownWord(_)) => {
                self.add_message("not in word list", MessageStyle::Error);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.snapshot);

        if self.snapshot.won {
            let celebration = match self.snapshot.guesses.len() {
                1 => "🎯 you won! Hole in one!",
                2 => "🔥 you won! Two guesses!",
                3 => "✨ you won! Three guesses!",
                _ => "🎉 you won!",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message("game over", MessageStyle::Error);
        }

        if let Some(target) = &self.snapshot.target {
            let text = format!("the word was: {}", target.to_uppercase());
            self.add_message(&text, MessageStyle::Info);
        }
        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key_action(key, &self.snapshot) {
            Some(Action::Quit) => self.should_quit = true,
            Some(Action::Play(input)) => self.apply(input),
            None => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Map a key press to an action, given the current game
#[must_use]
pub fn key_action(key: KeyEvent, snapshot: &Snapshot) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::Play(Input::NewGame(snapshot.level))),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::Play(Input::ChangeLevel(snapshot.level.next()))),
        KeyCode::Char(c @ '1'..='3') => {
            let level = Difficulty::ALL[usize::from(c as u8 - b'1')];
            Some(Action::Play(Input::ChangeLevel(level)))
        }
        KeyCode::Enter if snapshot.over => Some(Action::Play(Input::NewGame(snapshot.level))),
        KeyCode::Enter => Some(Action::Play(Input::Submit)),
        KeyCode::Backspace => Some(Action::Play(Input::Delete)),
        KeyCode::Char(c) if !ctrl => Some(Action::Play(Input::Letter(c))),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: TargetPicker>(app: App<'_, P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, P: TargetPicker>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
