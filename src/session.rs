use crate::corpus::Corpus;
use crate::limit::{self, Direction};
use crate::stats::{self, Stats};
use rand::rngs::StdRng;
use std::time::Instant;

/// Coarse lifecycle of a session, derived from its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Typing,
    Finished,
}

/// A single typing exercise: the target text, the live input buffer and
/// the per-position correctness bookkeeping.
///
/// Exactly one `Session` exists per running program. All mutation happens
/// through the event operations below; the renderer only reads.
#[derive(Debug)]
pub struct Session {
    pub words: Vec<String>,
    pub target: String,
    pub input: String,
    pub cursor_pos: usize,
    /// One slot per target character. `None` = never typed (or vacated by
    /// backspace), `Some(matched)` otherwise.
    pub correctness: Vec<Option<bool>>,
    pub words_typed: usize,
    pub limit: usize,
    pub finished: bool,
    pub started_at: Option<Instant>,
    /// Computed exactly once, at the moment the last character lands.
    pub stats: Option<Stats>,
    corpus: Corpus,
    rng: StdRng,
}

impl Session {
    /// Build a session over `corpus` and generate its first target.
    /// The generator is injected so tests can seed it.
    pub fn new(corpus: Corpus, limit: usize, rng: StdRng) -> Self {
        let mut session = Self {
            words: Vec::new(),
            target: String::new(),
            input: String::new(),
            cursor_pos: 0,
            correctness: Vec::new(),
            words_typed: 0,
            limit,
            finished: false,
            started_at: None,
            stats: None,
            corpus,
            rng,
        };
        session.generate_text();
        session
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.input.is_empty() {
            Phase::Idle
        } else {
            Phase::Typing
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    fn target_len(&self) -> usize {
        self.correctness.len()
    }

    pub fn expected_char(&self, idx: usize) -> Option<char> {
        self.target.chars().nth(idx)
    }

    /// Replace `words` and `target` with a fresh sample of `limit` words
    /// joined by single spaces, and size the correctness map to match.
    pub fn generate_text(&mut self) {
        self.words = self.corpus.sample(&mut self.rng, self.limit);
        self.target = self.words.join(" ");
        self.correctness = vec![None; self.target.chars().count()];
    }

    /// Clear the play state but keep the current target, so the same text
    /// can be attempted again.
    pub fn reset_play(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
        self.words_typed = 0;
        self.finished = false;
        self.started_at = None;
        self.stats = None;
        self.correctness.fill(None);
    }

    /// Replace the whole exercise: clear play state and resample the target.
    pub fn next(&mut self) {
        self.reset_play();
        self.generate_text();
    }

    /// Switch to a different word-count limit and start a fresh exercise.
    /// No-op when the limit is unchanged.
    pub fn set_limit(&mut self, new_limit: usize) {
        if new_limit == self.limit {
            return;
        }
        self.limit = new_limit;
        self.next();
    }

    /// Move the limit one step through the option set, clamped at the ends.
    pub fn cycle_limit(&mut self, direction: Direction) {
        self.set_limit(limit::step(self.limit, direction));
    }

    /// Process one typed character.
    ///
    /// Finished sessions ignore further input until `next`/`reset_play`. A
    /// leading space is discarded entirely: it does not start the timer,
    /// does not land in the input and does not advance the cursor.
    pub fn write(&mut self, c: char) {
        if self.finished {
            return;
        }

        if self.input.is_empty() {
            if c == ' ' {
                return;
            }
            self.started_at = Some(Instant::now());
        } else if c == ' ' {
            self.words_typed += 1;
        }

        if let Some(expected) = self.expected_char(self.cursor_pos) {
            self.correctness[self.cursor_pos] = Some(expected == c);
        }
        self.input.push(c);
        self.cursor_pos += 1;

        if self.cursor_pos == self.target_len() {
            self.finish();
        }
    }

    /// Remove the last typed character. No-op on a finished session or an
    /// empty input. The vacated correctness slot is cleared, so accuracy
    /// only ever covers positions occupied at finish.
    pub fn backspace(&mut self) {
        if self.finished || self.input.is_empty() {
            return;
        }

        self.input.pop();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
        if let Some(slot) = self.correctness.get_mut(self.cursor_pos) {
            *slot = None;
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.started_at
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn finish(&mut self) {
        self.finished = true;
        self.stats = Some(stats::compute(
            self.cursor_pos,
            self.elapsed_secs(),
            &self.correctness,
        ));
    }
}
