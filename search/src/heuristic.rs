//! Heuristic trait and the built-in heuristics.

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// Estimates are `u64`, so they are finite and non-negative by construction.
/// An admissible heuristic (never overestimates) makes the first goal the
/// engine pops cost-optimal.
pub trait Heuristic<S> {
    /// Name recorded in the search result description.
    fn name(&self) -> &str;

    /// Estimated cost from `state` to a goal.
    fn estimate(&self, state: &S) -> u64;
}

/// Always estimates zero. A* with this heuristic is uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "zero"
    }

    fn estimate(&self, _state: &S) -> u64 {
        0
    }
}

/// A named closure used as a heuristic.
///
/// Built with [`heuristic_fn`].
#[derive(Clone)]
pub struct FnHeuristic<F> {
    name: String,
    f: F,
}

impl<F> std::fmt::Debug for FnHeuristic<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHeuristic")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<S, F> Heuristic<S> for FnHeuristic<F>
where
    F: Fn(&S) -> u64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, state: &S) -> u64 {
        (self.f)(state)
    }
}

/// Wrap `f` as a heuristic called `name`.
#[must_use]
pub fn heuristic_fn<S, F>(name: impl Into<String>, f: F) -> FnHeuristic<F>
where
    F: Fn(&S) -> u64,
{
    FnHeuristic {
        name: name.into(),
        f,
    }
}

impl<S, H> Heuristic<S> for &H
where
    H: Heuristic<S> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn estimate(&self, state: &S) -> u64 {
        (**self).estimate(state)
    }
}
