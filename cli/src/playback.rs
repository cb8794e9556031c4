use pathstep_core::{StepRecorder, StepSnapshot};
use std::{thread, time::Duration};

use crate::args::Args;

/// Presenter-side replay settings. The engine never waits; pacing lives here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackConfig {
    pub step_delay: Duration,
    pub replay_all: bool,
    pub focus_step: Option<usize>,
}

impl From<&Args> for PlaybackConfig {
    fn from(args: &Args) -> Self {
        Self {
            step_delay: Duration::from_millis(args.step_delay_ms),
            replay_all: args.steps,
            focus_step: args.step,
        }
    }
}

/// Cursor over recorded steps. Every move is clamped to the recorded range.
pub struct Playback<'a> {
    steps: &'a StepRecorder,
    position: usize,
}

impl<'a> Playback<'a> {
    pub fn new(steps: &'a StepRecorder) -> Self {
        Self { steps, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.count()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current(&self) -> Option<&'a StepSnapshot> {
        self.steps.at(self.position).ok()
    }

    /// Returns false when already on the last step.
    pub fn forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Returns false when already on the first step.
    pub fn backward(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn seek(&mut self, index: usize) -> usize {
        self.position = index.min(self.last_index());
        self.position
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.last_index()
    }

    fn last_index(&self) -> usize {
        self.steps.count().saturating_sub(1)
    }
}

/// Presents every step in order, sleeping `step_delay` between them.
pub fn replay<F>(steps: &StepRecorder, config: &PlaybackConfig, mut present: F)
where
    F: FnMut(usize, &StepSnapshot),
{
    let mut playback = Playback::new(steps);

    while let Some(step) = playback.current() {
        present(playback.position(), step);
        if !playback.forward() {
            break;
        }
        if !config.step_delay.is_zero() {
            thread::sleep(config.step_delay);
        }
    }
}
