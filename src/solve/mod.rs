/*!
# Exact Solvers

Exponential-time questions are answered by solver structs implementing [`Solver`]. A solver is
configured by its constructor and builder methods, owns a copy of its input graph and is run
with [`Solver::solve`] against a [`Control`]:

```
use grapher::{gens::*, solve::*};

let mut solver = HamiltonianCycle::new(&cycle_graph(6));
let cycle = solver.solve(&Control::new()).unwrap().found().unwrap();
assert_eq!(cycle.vertices.len(), 6);
```

Every solver distinguishes three outcomes (see [`Outcome`]): a solution was found, it was proven
that no solution exists, or the computation was cancelled. Invalid input (for instance too many
vertices for a bitmask based solver) is reported as `Err`.

Solvers may also run on a background thread via [`Job::spawn`].
*/

use std::{sync::Arc, thread::JoinHandle};

use parking_lot::Mutex;
use tracing::debug;

use crate::{prelude::*, utils::*};

mod chromatic;
mod claw_deletion;
mod coloring;
mod control;
mod dominating;
mod flow;
mod hamiltonian;
mod regular_deletion;

pub use chromatic::*;
pub use claw_deletion::*;
pub use coloring::*;
pub use control::*;
pub use dominating::*;
pub use flow::*;
pub use hamiltonian::*;
pub use regular_deletion::*;

/// Largest number of vertices supported by solvers that index vertex sets by `u64` masks
pub const MAX_MASK_VERTICES: usize = MAX_MASK_ELEMENTS;

/// Result of a completed solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// A solution
    Found(T),
    /// No solution exists
    Absent,
    /// The run was cancelled before it could decide
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Outcome::Absent)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    /// The solution if one was found
    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Found(value) => Outcome::Found(value),
            Outcome::Absent => Outcome::Absent,
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Found(value) => Outcome::Found(f(value)),
            Outcome::Absent => Outcome::Absent,
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Outcome::Absent, Outcome::Found)
    }
}

/// Common interface of all exact solvers
pub trait Solver {
    type Output;

    /// Runs the solver to completion, until cancellation is observed, or until it fails on
    /// invalid input
    fn solve(&mut self, control: &Control) -> Result<Outcome<Self::Output>>;
}

/// Life cycle of a solver run inside a [`Job`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    Created,
    Running,
    Completed,
    Cancelled,
    Failed,
}

impl SolverState {
    /// Returns *true* for `Completed`, `Cancelled` and `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SolverState::Completed | SolverState::Cancelled | SolverState::Failed
        )
    }

    fn after<T>(result: &Result<Outcome<T>>) -> Self {
        match result {
            Ok(Outcome::Cancelled) => SolverState::Cancelled,
            Ok(_) => SolverState::Completed,
            Err(_) => SolverState::Failed,
        }
    }
}

/// A solver together with its [`Control`] and observable [`SolverState`].
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let job = Job::new(ChromaticNumber::new(&cycle_graph(7)), Control::new());
/// let handle = job.spawn();
/// assert_eq!(handle.join().unwrap(), Outcome::Found(3));
/// ```
pub struct Job<S> {
    solver: S,
    control: Control,
    state: Arc<Mutex<SolverState>>,
}

impl<S: Solver> Job<S> {
    pub fn new(solver: S, control: Control) -> Self {
        Self {
            solver,
            control,
            state: Arc::new(Mutex::new(SolverState::Created)),
        }
    }

    pub fn state(&self) -> SolverState {
        *self.state.lock()
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    /// Runs the solver on the current thread. A job can only be run once.
    pub fn run(&mut self) -> Result<Outcome<S::Output>> {
        Self::start(&self.state)?;
        let result = self.solver.solve(&self.control);
        Self::finish(&self.state, &result);
        result
    }

    /// Runs the solver on a new thread
    pub fn spawn(self) -> JobHandle<S::Output>
    where
        S: Send + 'static,
        S::Output: Send + 'static,
    {
        let Self {
            mut solver,
            control,
            state,
        } = self;

        let handle_control = control.clone();
        let handle_state = state.clone();
        let thread = std::thread::spawn(move || {
            Self::start(&state)?;
            let result = solver.solve(&control);
            Self::finish(&state, &result);
            result
        });

        JobHandle {
            control: handle_control,
            state: handle_state,
            thread,
        }
    }

    fn start(state: &Mutex<SolverState>) -> Result<()> {
        let mut state = state.lock();
        if *state != SolverState::Created {
            return Err(GraphError::invalid_argument(format!(
                "job cannot be started in state {:?}",
                *state
            )));
        }
        *state = SolverState::Running;
        debug!("job started");
        Ok(())
    }

    fn finish(state: &Mutex<SolverState>, result: &Result<Outcome<S::Output>>) {
        let next = SolverState::after(result);
        *state.lock() = next;
        debug!(state = ?next, "job finished");
    }
}

/// Handle of a [`Job`] running on a background thread
pub struct JobHandle<T> {
    control: Control,
    state: Arc<Mutex<SolverState>>,
    thread: JoinHandle<Result<Outcome<T>>>,
}

impl<T> JobHandle<T> {
    /// Requests cooperative cancellation; idempotent
    pub fn cancel(&self) {
        self.control.cancel();
    }

    pub fn state(&self) -> SolverState {
        *self.state.lock()
    }

    /// Returns *true* once the worker thread has terminated
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the worker thread. Panics of the solver are propagated.
    pub fn join(self) -> Result<Outcome<T>> {
        match self.thread.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;

    struct Countdown(u32);

    impl Solver for Countdown {
        type Output = u32;

        fn solve(&mut self, control: &Control) -> Result<Outcome<u32>> {
            let mut progress = control.progress(self.0 as u64);
            while self.0 > 0 {
                if control.is_cancelled() {
                    return Ok(Outcome::Cancelled);
                }
                self.0 -= 1;
                progress.advance(1);
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            Ok(Outcome::Found(0))
        }
    }

    #[test]
    fn outcome_helpers() {
        let found: Outcome<u32> = Some(4).into();
        assert_eq!(found.as_ref().map(|x| x + 1), Outcome::Found(5));
        assert!(Outcome::<u32>::from(None).is_absent());
        assert_eq!(Outcome::<u32>::Cancelled.found(), None);
    }

    #[test]
    fn state_machine() {
        let mut job = Job::new(Countdown(3), Control::new());
        assert_eq!(job.state(), SolverState::Created);
        assert_eq!(job.run().unwrap(), Outcome::Found(0));
        assert_eq!(job.state(), SolverState::Completed);
        assert!(job.run().is_err());
        assert_eq!(job.state(), SolverState::Completed);
    }

    #[test]
    fn cancel_background_job() {
        let handle = Job::new(Countdown(u32::MAX), Control::new()).spawn();
        handle.cancel();
        handle.cancel();
        let state = handle.state.clone();
        assert_eq!(handle.join().unwrap(), Outcome::Cancelled);
        assert_eq!(*state.lock(), SolverState::Cancelled);
    }

    #[test]
    fn failing_job() {
        let mut job = Job::new(ChromaticNumber::new(&complete_graph(70)), Control::new());
        assert!(job.run().is_err());
        assert_eq!(job.state(), SolverState::Failed);
    }

    #[test]
    fn pre_cancelled_control() {
        let control = Control::new();
        control.cancel();
        let mut job = Job::new(Countdown(10), control);
        assert_eq!(job.run().unwrap(), Outcome::Cancelled);
        assert_eq!(job.state(), SolverState::Cancelled);
    }
}
