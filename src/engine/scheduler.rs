//! Transition scheduler: one timeline per structure instance
//!
//! The timeline sequences highlight events against a logical clock. It never
//! reads wall time; the owner calls [`Timeline::advance`] with the elapsed
//! time (the UI passes real time from its poll loop, tests pass synthetic
//! durations) and gets back the events that came due, in order.
//!
//! # Jobs
//!
//! A timeline holds at most one job, so at most one highlight is active:
//!
//! - **Flash**: single-phase. The mutation already happened; the highlight
//!   clears when the deadline passes.
//! - **Commit**: two-phase. The highlight is up now, the mutation it carries
//!   is handed back as [`Fired::Committed`] at the deadline. The owner applies
//!   it in the same call that receives it, so highlight-cleared and
//!   mutation-applied are observed together.
//! - **Playback**: multi-step. Each step is highlighted for one interval, one
//!   after the other; after the last step the result is shown for one pause
//!   before the job ends.
//!
//! A new request replaces the current job. A pending commit is either
//! discarded or handed back first, depending on the [`OverlapPolicy`].
//!
//! # Timing
//!
//! Durations are divided by the speed factor in effect when the request is
//! made. Playback deadlines are chained from the previous deadline, so a
//! single large `advance` replays the exact same sequence as many small ones.

use super::settings::{OverlapPolicy, Settings, Speed};
use std::fmt::Debug;
use std::time::Duration;

/// Event produced by [`Timeline::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fired<T, M> {
    /// A single-phase highlight expired
    Cleared(T),
    /// A two-phase deadline passed: apply the mutation now
    Committed(M),
    /// Playback moved the highlight to the next step
    Stepped(T),
    /// Playback ran out of steps and now shows its result
    ResultShown,
    /// Playback result pause is over
    Finished,
}

/// How far a playback has progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackProgress {
    /// Number of steps highlighted so far, including the current one
    pub shown: usize,
    pub total: usize,
    /// True during the result pause after the last step
    pub showing_result: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaybackPhase {
    Stepping,
    Result,
}

#[derive(Debug, Clone)]
struct Playback<T> {
    steps: Vec<T>,
    shown: usize,
    phase: PlaybackPhase,
    next_at: Duration,
    interval: Duration,
    pause: Duration,
}

#[derive(Debug, Clone)]
enum Job<T, M> {
    Flash { target: T, until: Duration },
    Commit {
        target: T,
        until: Duration,
        mutation: M,
    },
    Playback(Playback<T>),
}

impl<T, M> Job<T, M> {
    fn deadline(&self) -> Duration {
        match self {
            Job::Flash { until, .. } | Job::Commit { until, .. } => *until,
            Job::Playback(playback) => playback.next_at,
        }
    }
}

/// A cancellable, speed-scaled highlight timeline
#[derive(Debug, Clone)]
pub struct Timeline<T, M> {
    label: &'static str,
    now: Duration,
    speed: Speed,
    highlight_base: Duration,
    pause_base: Duration,
    policy: OverlapPolicy,
    job: Option<Job<T, M>>,
}

impl<T: Copy + Debug, M: Debug> Timeline<T, M> {
    /// Create an idle timeline; `label` names the owning structure in logs
    pub fn new(label: &'static str, settings: &Settings) -> Self {
        Timeline {
            label,
            now: Duration::ZERO,
            speed: settings.speed,
            highlight_base: settings.highlight,
            pause_base: settings.result_pause,
            policy: settings.overlap,
            job: None,
        }
    }

    /// Logical time elapsed since creation
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Change the speed; only requests made afterwards are affected
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Highlight duration at the current speed
    pub fn interval(&self) -> Duration {
        self.speed.scale(self.highlight_base)
    }

    /// Result pause at the current speed
    pub fn pause(&self) -> Duration {
        self.speed.scale(self.pause_base)
    }

    /// The currently highlighted target, if any
    pub fn highlight(&self) -> Option<T> {
        match self.job.as_ref()? {
            Job::Flash { target, .. } | Job::Commit { target, .. } => Some(*target),
            Job::Playback(playback) => match playback.phase {
                PlaybackPhase::Stepping => playback
                    .shown
                    .checked_sub(1)
                    .and_then(|i| playback.steps.get(i).copied()),
                PlaybackPhase::Result => None,
            },
        }
    }

    /// The mutation waiting on a two-phase deadline
    pub fn pending(&self) -> Option<&M> {
        match self.job.as_ref()? {
            Job::Commit { mutation, .. } => Some(mutation),
            _ => None,
        }
    }

    /// Progress of the running playback
    pub fn playback(&self) -> Option<PlaybackProgress> {
        match self.job.as_ref()? {
            Job::Playback(playback) => Some(PlaybackProgress {
                shown: playback.shown,
                total: playback.steps.len(),
                showing_result: playback.phase == PlaybackPhase::Result,
            }),
            _ => None,
        }
    }

    /// When the next event is due, if anything is scheduled
    pub fn next_deadline(&self) -> Option<Duration> {
        self.job.as_ref().map(Job::deadline)
    }

    /// Time left until the next event
    pub fn remaining(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    pub fn is_idle(&self) -> bool {
        self.job.is_none()
    }

    /// Under [`OverlapPolicy::Settle`], take the pending commit out so the
    /// owner can apply it before handling a new request. Returns `None` under
    /// [`OverlapPolicy::Cancel`] or when nothing is pending.
    pub fn settle(&mut self) -> Option<M> {
        if self.policy != OverlapPolicy::Settle {
            return None;
        }
        match self.job.take() {
            Some(Job::Commit { mutation, .. }) => {
                tracing::trace!(structure = self.label, ?mutation, "settled pending commit");
                Some(mutation)
            }
            other => {
                self.job = other;
                None
            }
        }
    }

    /// Take the pending commit out regardless of policy, leaving any other
    /// job in place
    pub fn take_pending(&mut self) -> Option<M> {
        match self.job.take() {
            Some(Job::Commit { mutation, .. }) => {
                tracing::trace!(structure = self.label, ?mutation, "took pending commit");
                Some(mutation)
            }
            other => {
                self.job = other;
                None
            }
        }
    }

    /// Drop whatever is scheduled. Returns true if a job was dropped.
    pub fn cancel(&mut self) -> bool {
        match self.job.take() {
            Some(job) => {
                if let Job::Commit { mutation, .. } = &job {
                    tracing::trace!(structure = self.label, ?mutation, "discarded pending commit");
                }
                true
            }
            None => false,
        }
    }

    /// Single-phase highlight on `target`
    pub fn flash(&mut self, target: T) {
        let until = self.now + self.interval();
        self.replace(Job::Flash { target, until });
    }

    /// Two-phase highlight on `target`; `mutation` comes back at the deadline
    pub fn commit(&mut self, target: T, mutation: M) {
        let until = self.now + self.interval();
        self.replace(Job::Commit {
            target,
            until,
            mutation,
        });
    }

    /// Multi-step playback over `steps`. The first step is highlighted
    /// immediately; an empty list goes straight to the result pause.
    pub fn play(&mut self, steps: Vec<T>) {
        let interval = self.interval();
        let pause = self.pause();
        let playback = if steps.is_empty() {
            Playback {
                steps,
                shown: 0,
                phase: PlaybackPhase::Result,
                next_at: self.now + pause,
                interval,
                pause,
            }
        } else {
            Playback {
                steps,
                shown: 1,
                phase: PlaybackPhase::Stepping,
                next_at: self.now + interval,
                interval,
                pause,
            }
        };
        self.replace(Job::Playback(playback));
    }

    /// Move the clock forward and collect every event that came due
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Fired<T, M>> {
        self.now += elapsed;
        let mut fired = Vec::new();
        while let Some(deadline) = self.next_deadline() {
            if deadline > self.now {
                break;
            }
            if let Some(event) = self.fire() {
                tracing::trace!(structure = self.label, ?event, "timeline fired");
                fired.push(event);
            }
        }
        fired
    }

    fn replace(&mut self, job: Job<T, M>) {
        self.cancel();
        self.job = Some(job);
    }

    fn fire(&mut self) -> Option<Fired<T, M>> {
        match self.job.take()? {
            Job::Flash { target, .. } => Some(Fired::Cleared(target)),
            Job::Commit { mutation, .. } => Some(Fired::Committed(mutation)),
            Job::Playback(mut playback) => match playback.phase {
                PlaybackPhase::Stepping if playback.shown < playback.steps.len() => {
                    let target = playback.steps[playback.shown];
                    playback.shown += 1;
                    playback.next_at += playback.interval;
                    self.job = Some(Job::Playback(playback));
                    Some(Fired::Stepped(target))
                }
                PlaybackPhase::Stepping => {
                    playback.phase = PlaybackPhase::Result;
                    playback.next_at += playback.pause;
                    self.job = Some(Job::Playback(playback));
                    Some(Fired::ResultShown)
                }
                PlaybackPhase::Result => Some(Fired::Finished),
            },
        }
    }
}
