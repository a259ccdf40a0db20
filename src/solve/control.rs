/*!
# Cancellation and Progress

Every solver receives a [`Control`] that bundles
- a [`CancelToken`], a shared flag that may be raised from any thread and is polled by the
  solver at the end of each unit of work,
- an optional [`ProgressListener`] that is notified at most once per `min_interval`.

Notifications are pushed synchronously from the solver's thread; listeners must return
quickly. [`ChannelListener`] forwards the notifications into an unbounded channel for
consumers running elsewhere.
*/

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use crossbeam::channel::{Receiver, Sender, unbounded};
use tracing::debug;

use crate::{ops::GraphNodeOrder, utils::saturating_two_power};

/// Default minimum time between two progress notifications
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(20);

/// Shared cooperative cancellation flag. Clones observe the same flag.
///
/// # Example
/// ```
/// use grapher::solve::CancelToken;
///
/// let token = CancelToken::new();
/// let remote = token.clone();
/// remote.cancel();
/// remote.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag. Calling this more than once has no further effect.
    pub fn cancel(&self) {
        if !self.0.swap(true, Ordering::AcqRel) {
            debug!("cancellation requested");
        }
    }

    /// Returns *true* once [`CancelToken::cancel`] was called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Receiver of progress notifications
pub trait ProgressListener: Send + Sync {
    /// Progress in percent (`0.0..=100.0`)
    fn on_percentage(&self, percentage: f32);

    /// Progress as absolute position within the current goal
    fn on_checkpoint(&self, current: u64, goal: u64) {
        let _ = (current, goal);
    }
}

/// A single progress notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    Percentage(f32),
    Checkpoint { current: u64, goal: u64 },
}

/// Forwards notifications into an unbounded channel without ever blocking the solver.
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let (listener, events) = ChannelListener::new();
/// let control = Control::new().with_listener(listener);
/// ChromaticNumber::new(&complete_graph(6)).solve(&control).unwrap();
///
/// assert!(events.try_iter().any(|e| e == ProgressEvent::Percentage(100.0)));
/// ```
#[derive(Debug, Clone)]
pub struct ChannelListener {
    sender: Sender<ProgressEvent>,
}

impl ChannelListener {
    /// Creates the listener together with the receiving end of its channel
    pub fn new() -> (Self, Receiver<ProgressEvent>) {
        let (sender, receiver) = unbounded();
        (Self { sender }, receiver)
    }
}

impl ProgressListener for ChannelListener {
    fn on_percentage(&self, percentage: f32) {
        // a dropped receiver only means nobody is interested anymore
        let _ = self.sender.try_send(ProgressEvent::Percentage(percentage));
    }

    fn on_checkpoint(&self, current: u64, goal: u64) {
        let _ = self
            .sender
            .try_send(ProgressEvent::Checkpoint { current, goal });
    }
}

/// Cancellation token and progress configuration handed to every solver.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use grapher::solve::*;
///
/// let control = Control::new().with_min_interval(Duration::ZERO);
/// let token = control.cancel_token().clone();
/// token.cancel();
/// assert!(control.is_cancelled());
/// ```
#[derive(Clone)]
pub struct Control {
    cancel: CancelToken,
    listener: Option<Arc<dyn ProgressListener>>,
    min_interval: Duration,
}

impl Default for Control {
    fn default() -> Self {
        Self {
            cancel: CancelToken::new(),
            listener: None,
            min_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("cancelled", &self.is_cancelled())
            .field("listener", &self.listener.is_some())
            .field("min_interval", &self.min_interval)
            .finish()
    }
}

impl Control {
    /// Fresh token, no listener, [`DEFAULT_PROGRESS_INTERVAL`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the progress listener
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: ProgressListener + 'static,
    {
        self.listener = Some(Arc::new(listener));
    }

    /// Sets the progress listener
    pub fn with_listener<L>(mut self, listener: L) -> Self
    where
        L: ProgressListener + 'static,
    {
        self.set_listener(listener);
        self
    }

    /// Sets the minimum time between two notifications
    pub fn set_min_interval(&mut self, min_interval: Duration) {
        self.min_interval = min_interval;
    }

    /// Sets the minimum time between two notifications
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.set_min_interval(min_interval);
        self
    }

    /// Replaces the cancellation token, e.g. to share one token between several solvers
    pub fn set_cancel_token(&mut self, token: CancelToken) {
        self.cancel = token;
    }

    /// Replaces the cancellation token, e.g. to share one token between several solvers
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.set_cancel_token(token);
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Raises the cancellation flag
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Same cancellation token but without listener; used for nested solver calls
    pub fn silent(&self) -> Self {
        Self {
            cancel: self.cancel.clone(),
            listener: None,
            min_interval: self.min_interval,
        }
    }

    /// Starts a progress tracker with the given goal
    pub fn progress(&self, goal: u64) -> Progress<'_> {
        Progress {
            control: self,
            current: 0,
            goal,
            last_notified: None,
        }
    }

    /// Starts a progress tracker over all `2^n` vertex subsets of `graph`
    pub fn progress_for<G: GraphNodeOrder>(&self, graph: &G) -> Progress<'_> {
        self.progress(saturating_two_power(graph.number_of_nodes()))
    }
}

/// Throttled progress tracker of a single solver run.
///
/// The position never decreases and never exceeds the goal unless the goal is reset via
/// [`Progress::set_goal`].
#[derive(Debug)]
pub struct Progress<'a> {
    control: &'a Control,
    current: u64,
    goal: u64,
    last_notified: Option<Instant>,
}

impl Progress<'_> {
    pub fn goal(&self) -> u64 {
        self.goal
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    /// Starts over with a new goal at position `0`
    pub fn set_goal(&mut self, goal: u64) {
        self.goal = goal;
        self.current = 0;
        self.notify(false);
    }

    /// Moves the position forward by `steps`
    pub fn advance(&mut self, steps: u64) {
        self.set_current(self.current.saturating_add(steps));
    }

    /// Moves the position to `current` (clamped to the goal; smaller values are ignored)
    pub fn set_current(&mut self, current: u64) {
        let current = current.min(self.goal);
        if current > self.current {
            self.current = current;
            self.notify(false);
        }
    }

    /// Moves the position to the goal and notifies regardless of throttling
    pub fn finish(&mut self) {
        self.current = self.goal;
        self.notify(true);
    }

    /// Progress in percent
    pub fn percentage(&self) -> f32 {
        if self.goal == 0 {
            100.0
        } else {
            (self.current as f64 * 100.0 / self.goal as f64) as f32
        }
    }

    fn notify(&mut self, force: bool) {
        let Some(listener) = self.control.listener.as_ref() else {
            return;
        };

        let now = Instant::now();
        let due = self
            .last_notified
            .is_none_or(|last| now.duration_since(last) >= self.control.min_interval);
        if force || due {
            self.last_notified = Some(now);
            listener.on_percentage(self.percentage());
            listener.on_checkpoint(self.current, self.goal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::GraphNew;
    use crate::repr::SimpleGraph;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(u64, u64)>>);

    impl ProgressListener for Arc<Recorder> {
        fn on_percentage(&self, _: f32) {}

        fn on_checkpoint(&self, current: u64, goal: u64) {
            self.0.lock().push((current, goal));
        }
    }

    #[test]
    fn unthrottled_progress_is_monotone() {
        let recorder = Arc::new(Recorder::default());
        let control = Control::new()
            .with_listener(recorder.clone())
            .with_min_interval(Duration::ZERO);

        let mut progress = control.progress(10);
        progress.advance(3);
        progress.set_current(2);
        progress.set_current(50);
        progress.finish();

        assert_eq!(*recorder.0.lock(), vec![(3, 10), (10, 10), (10, 10)]);
        assert_eq!(progress.percentage(), 100.0);
    }

    #[test]
    fn throttling_keeps_final_notification() {
        let recorder = Arc::new(Recorder::default());
        let control = Control::new()
            .with_listener(recorder.clone())
            .with_min_interval(Duration::from_secs(3600));

        let mut progress = control.progress(1000);
        for _ in 0..1000 {
            progress.advance(1);
        }
        progress.finish();

        let events = recorder.0.lock();
        assert_eq!(events.len(), 2);
        assert_eq!(events.last(), Some(&(1000, 1000)));
    }

    #[test]
    fn subset_goal() {
        let control = Control::new();
        assert_eq!(control.progress_for(&SimpleGraph::new(5)).goal(), 32);
        assert_eq!(control.progress_for(&SimpleGraph::empty()).goal(), 1);
        assert_eq!(control.progress_for(&SimpleGraph::new(70)).goal(), u64::MAX);
    }

    #[test]
    fn goal_reset() {
        let control = Control::new();
        let mut progress = control.progress(4);
        progress.advance(4);
        progress.set_goal(8);
        assert_eq!(progress.current(), 0);
        assert_eq!(progress.goal(), 8);
        assert_eq!(control.progress(0).percentage(), 100.0);
    }

    #[test]
    fn silent_shares_token() {
        let control = Control::new().with_listener(ChannelListener::new().0);
        let silent = control.silent();
        assert!(silent.listener.is_none());
        control.cancel();
        assert!(silent.is_cancelled());
    }

    #[test]
    fn channel_survives_dropped_receiver() {
        let (listener, receiver) = ChannelListener::new();
        drop(receiver);
        listener.on_percentage(50.0);
        listener.on_checkpoint(1, 2);
    }
}
