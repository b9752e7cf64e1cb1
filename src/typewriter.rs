use crate::motion::Repeat;

pub const TYPE_INTERVAL: f64 = 0.08;
pub const DELETE_INTERVAL: f64 = 0.05;
pub const HOLD_PAUSE: f64 = 1.5;

// A long-hidden tab can hand us a huge time jump; resync instead of replaying it.
const MAX_STEPS_PER_TICK: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub type_interval: f64,
    pub delete_interval: f64,
    pub pause: f64,
    /// Extra passes through the word list after the first.
    pub repeat: Repeat,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_interval: TYPE_INTERVAL,
            delete_interval: DELETE_INTERVAL,
            pause: HOLD_PAUSE,
            repeat: Repeat::Forever,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
    Done,
}

/// Types each word, holds it, deletes it, and moves on to the next.
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<String>,
    config: TypewriterConfig,
    word: usize,
    visible: usize,
    phase: Phase,
    next_step_at: Option<f64>,
    passes: u32,
}

impl Typewriter {
    pub fn new<I>(words: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let phase = if words.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };

        Self {
            words,
            config,
            word: 0,
            visible: 0,
            phase,
            next_step_at: None,
            passes: 0,
        }
    }

    /// Currently visible prefix of the active word.
    pub fn text(&self) -> String {
        self.words
            .get(self.word)
            .map(|word| word.chars().take(self.visible).collect())
            .unwrap_or_default()
    }

    /// Advance to `now`. Returns whether the visible text changed.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.phase == Phase::Done {
            return false;
        }

        let Some(mut due) = self.next_step_at else {
            self.next_step_at = Some(now + self.config.type_interval);
            return false;
        };

        let before = (self.word, self.visible);
        let mut steps = 0;
        while now >= due && self.phase != Phase::Done {
            if steps == MAX_STEPS_PER_TICK {
                due = now + self.interval();
                break;
            }
            self.step();
            due += self.interval();
            steps += 1;
        }
        self.next_step_at = Some(due);

        before != (self.word, self.visible)
    }

    fn interval(&self) -> f64 {
        match self.phase {
            Phase::Typing => self.config.type_interval,
            Phase::Holding => self.config.pause,
            Phase::Deleting => self.config.delete_interval,
            Phase::Done => 0.0,
        }
    }

    fn word_len(&self) -> usize {
        self.words
            .get(self.word)
            .map(|word| word.chars().count())
            .unwrap_or(0)
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.visible < self.word_len() {
                    self.visible += 1;
                }
                if self.visible >= self.word_len() {
                    self.phase = if self.is_final_word() {
                        Phase::Done
                    } else {
                        Phase::Holding
                    };
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.word += 1;
                    if self.word >= self.words.len() {
                        self.word = 0;
                        self.passes += 1;
                    }
                    self.phase = Phase::Typing;
                }
            }
            Phase::Done => {}
        }
    }

    fn is_final_word(&self) -> bool {
        match self.config.repeat {
            Repeat::Forever => false,
            Repeat::Times(extra) => self.passes >= extra && self.word + 1 == self.words.len(),
        }
    }
}

#[cfg(test)]
impl Typewriter {
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
