//! Turn-by-turn play of a single day's game
//!
//! The session owns the day's [`GameState`] and is the only place it
//! changes. Progress is loaded from storage when the session is created and
//! written back after every change; storage failures are logged and never
//! interrupt play.

use super::{Game, GameState, GameStatus, format_share_text, parse_game_state};
use crate::core::{Guess, KeyboardHints, collect_keyboard_hints, normalize_letter};
use crate::storage::{Storage, day_key};
use tracing::{debug, info, warn};

/// Which player inputs are currently accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Actions {
    pub letter: bool,
    pub backspace: bool,
    pub submit: bool,
}

/// Outcome of pressing enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Submitting is not enabled right now; nothing changed
    Unavailable,
    /// The word is not in the valid word list; nothing changed
    NotAWord(String),
    /// The guess was recorded and the game moved to this status
    Accepted(GameStatus),
}

/// A player's session on one day's game
pub struct Session<S: Storage> {
    game: Game,
    state: GameState,
    storage: S,
    key: String,
}

impl<S: Storage> Session<S> {
    /// Restore the day's progress from `storage`
    ///
    /// Falls back to an empty game if nothing is stored, the stored value
    /// cannot be decoded, or it does not fit `game`.
    pub fn load(game: Game, storage: S) -> Self {
        let key = day_key(game.day());
        let state = read_state(&storage, &key, &game);

        Self {
            game,
            state,
            storage,
            key,
        }
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.state.current_guess
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.state.guesses
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.game.word_length()
    }

    /// Guesses left, not counting the one being typed while playing
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        let in_progress = usize::from(self.state.status == GameStatus::Playing);
        self.game
            .max_attempts()
            .saturating_sub(self.state.guesses.len() + in_progress)
    }

    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        collect_keyboard_hints(&self.state.guesses)
    }

    #[must_use]
    pub fn actions(&self) -> Actions {
        if self.state.status != GameStatus::Playing
            || self.state.guesses.len() >= self.game.max_attempts()
        {
            return Actions::default();
        }

        let typed = self.typed_letters();
        let length = self.word_length();
        Actions {
            letter: typed < length,
            backspace: typed > 0,
            submit: typed == length,
        }
    }

    /// Type one letter
    ///
    /// Returns `false` without changing anything if typing is not enabled or
    /// `key` is not a letter of the alphabet.
    pub fn append_letter(&mut self, key: char) -> bool {
        let Some(letter) = normalize_letter(key) else {
            return false;
        };
        if !self.actions().letter {
            return false;
        }

        self.state.current_guess.push(letter);
        self.persist();
        true
    }

    /// Remove the last typed letter
    ///
    /// Returns `false` without changing anything if there is nothing to remove
    /// or the game is over.
    pub fn backspace(&mut self) -> bool {
        if !self.actions().backspace {
            return false;
        }

        self.state.current_guess.pop();
        self.persist();
        true
    }

    /// Submit the current guess
    ///
    /// Unknown words are rejected without consuming an attempt. An accepted
    /// guess is recorded, the current guess is cleared, and the status
    /// becomes Won, Lost or stays Playing, all in one step.
    pub fn submit(&mut self) -> Submission {
        if !self.actions().submit {
            return Submission::Unavailable;
        }

        let word = self.state.current_guess.clone();
        if !self.game.is_valid_word(&word) {
            debug!(day = self.game.day(), word = %word, "rejected guess, not a valid word");
            return Submission::NotAWord(word);
        }

        let guess = match Guess::score(&word, self.game.solution()) {
            Ok(guess) => guess,
            Err(e) => {
                warn!(day = self.game.day(), error = %e, "could not score guess");
                return Submission::Unavailable;
            }
        };

        let status = if guess.is_solved() {
            GameStatus::Won
        } else if self.state.guesses.len() + 1 >= self.game.max_attempts() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        self.state.current_guess.clear();
        self.state.guesses.push(guess);
        self.state.status = status;

        debug!(
            day = self.game.day(),
            attempt = self.state.guesses.len(),
            word = %word,
            "accepted guess"
        );
        if status.is_finished() {
            info!(
                day = self.game.day(),
                %status,
                attempts = self.state.guesses.len(),
                "game finished"
            );
        }

        self.persist();
        Submission::Accepted(status)
    }

    /// Shareable summary of the guesses so far
    #[must_use]
    pub fn share_text(&self) -> String {
        format_share_text(&self.game, &self.state.guesses)
    }

    /// Switch to another day's game, restoring that day's saved progress
    ///
    /// The previous day's stored state is left untouched.
    pub fn roll_over(&mut self, game: Game) {
        info!(from = self.game.day(), to = game.day(), "switching to a new day");
        self.key = day_key(game.day());
        self.state = read_state(&self.storage, &self.key, &game);
        self.game = game;
    }

    /// Give back the storage backend
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn typed_letters(&self) -> usize {
        self.state.current_guess.chars().count()
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.state) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not encode game state");
                return;
            }
        };

        if let Err(e) = self.storage.write(&self.key, &serialized) {
            warn!(key = %self.key, error = %e, "could not save game state");
        }
    }
}

fn read_state<S: Storage>(storage: &S, key: &str, game: &Game) -> GameState {
    let serialized = match storage.read(key) {
        Ok(Some(serialized)) => serialized,
        Ok(None) => {
            debug!(key, "no saved game state");
            return GameState::default();
        }
        Err(e) => {
            warn!(key, error = %e, "could not read game state, starting fresh");
            return GameState::default();
        }
    };

    let restored = parse_game_state(&serialized)
        .and_then(|state| state.validate_for(game).map(|()| state));

    match restored {
        Ok(state) => {
            debug!(
                key,
                guesses = state.guesses.len(),
                status = %state.status,
                "restored game state"
            );
            state
        }
        Err(e) => {
            warn!(key, error = %e, "discarding saved game state");
            GameState::default()
        }
    }
}
