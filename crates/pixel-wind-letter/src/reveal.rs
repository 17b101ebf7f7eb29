//! Reader-side reveal sequence.
//!
//! Opening a letter plays a fixed script: a wind-only intro, the first
//! page typed out character by character, and, when there is a second page,
//! a pause, a fade out of the first page and a fade in of the second. The
//! script is a plain list of timed steps advanced by elapsed milliseconds,
//! so hosts drive it from their own frame clock and tests drive it by hand.

use std::collections::VecDeque;

use rand::Rng;

use crate::payload::LetterPayload;

/// Wind-only intro before any text appears.
pub const INTRO_MS: u64 = 2000;
/// Base delay between typed characters.
pub const TYPE_BASE_MS: u64 = 50;
/// Upper bound (exclusive) of the random extra delay per character.
pub const TYPE_JITTER_MS: u64 = 30;
/// Pause on the finished first page before moving on.
pub const READ_MS: u64 = 2000;
pub const FADE_OUT_MS: u64 = 1000;
pub const FADE_IN_MS: u64 = 2000;

/// One entry of the reveal script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealStep {
    /// Do nothing for a while.
    Delay(u64),
    /// Append one character to the first page.
    Type(char),
    /// Fade the first page out over the given duration.
    FadeOutFirstPage(u64),
    /// Switch to the second page and fade it in over the given duration.
    ShowSecondPage(u64),
}

impl RevealStep {
    fn duration(&self) -> u64 {
        match *self {
            RevealStep::Delay(ms)
            | RevealStep::FadeOutFirstPage(ms)
            | RevealStep::ShowSecondPage(ms) => ms,
            RevealStep::Type(_) => 0,
        }
    }
}

/// Which page of the letter is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    First,
    Second,
}

/// What the reader should see right now.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealView {
    pub page: Page,
    /// First-page text typed so far.
    pub typed: String,
    pub first_page_opacity: f64,
    pub second_page_opacity: f64,
}

/// Build the step list for a letter.
///
/// `jitter` is called once per character and its result, capped below
/// [`TYPE_JITTER_MS`], is added to the base typing delay.
pub fn script(msg1: &str, msg2: Option<&str>, mut jitter: impl FnMut() -> u64) -> Vec<RevealStep> {
    let mut steps = vec![RevealStep::Delay(INTRO_MS)];
    for ch in msg1.chars() {
        steps.push(RevealStep::Type(ch));
        steps.push(RevealStep::Delay(
            TYPE_BASE_MS + jitter().min(TYPE_JITTER_MS - 1),
        ));
    }
    if msg2.is_some_and(|m| !m.trim().is_empty()) {
        steps.push(RevealStep::Delay(READ_MS));
        steps.push(RevealStep::FadeOutFirstPage(FADE_OUT_MS));
        steps.push(RevealStep::ShowSecondPage(FADE_IN_MS));
    }
    steps
}

/// Plays a reveal script against elapsed time.
#[derive(Debug, Clone)]
pub struct RevealPlayer {
    steps: VecDeque<RevealStep>,
    /// Time already spent in the front step.
    progress_ms: u64,
    view: RevealView,
}

impl RevealPlayer {
    /// Script for a letter with random typing jitter.
    pub fn for_letter<R: Rng>(letter: &LetterPayload, rng: &mut R) -> Self {
        Self::new(script(letter.msg1(), letter.msg2(), || {
            rng.random_range(0..TYPE_JITTER_MS)
        }))
    }

    pub fn new(steps: Vec<RevealStep>) -> Self {
        Self {
            steps: steps.into(),
            progress_ms: 0,
            view: RevealView {
                first_page_opacity: 1.0,
                ..RevealView::default()
            },
        }
    }

    /// Move the script forward by `elapsed_ms` and return the current view.
    pub fn advance(&mut self, mut elapsed_ms: u64) -> &RevealView {
        while let Some(step) = self.steps.front() {
            let remaining = step.duration() - self.progress_ms;
            if elapsed_ms < remaining {
                self.progress_ms += elapsed_ms;
                self.apply_partial();
                break;
            }
            elapsed_ms -= remaining;
            self.progress_ms = 0;
            if let Some(step) = self.steps.pop_front() {
                self.complete(step);
            }
        }
        &self.view
    }

    /// Drop every remaining step, leaving the view where it is.
    pub fn cancel(&mut self) {
        self.steps.clear();
        self.progress_ms = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn view(&self) -> &RevealView {
        &self.view
    }

    fn apply_partial(&mut self) {
        let Some(step) = self.steps.front() else {
            return;
        };
        let t = self.progress_ms as f64 / step.duration().max(1) as f64;
        match step {
            RevealStep::FadeOutFirstPage(_) => self.view.first_page_opacity = 1.0 - t,
            RevealStep::ShowSecondPage(_) => {
                self.view.page = Page::Second;
                self.view.first_page_opacity = 0.0;
                self.view.second_page_opacity = t;
            }
            RevealStep::Delay(_) | RevealStep::Type(_) => {}
        }
    }

    fn complete(&mut self, step: RevealStep) {
        match step {
            RevealStep::Delay(_) => {}
            RevealStep::Type(ch) => self.view.typed.push(ch),
            RevealStep::FadeOutFirstPage(_) => self.view.first_page_opacity = 0.0,
            RevealStep::ShowSecondPage(_) => {
                self.view.page = Page::Second;
                self.view.first_page_opacity = 0.0;
                self.view.second_page_opacity = 1.0;
            }
        }
    }
}
