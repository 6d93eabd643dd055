/*!
Schedulers, used to interrupt a solve for some task.

These return true (or some reason) if an interrupt is due.

- Restarts follow the [restart policy](crate::config::restarts::RestartPolicy) of a context.
- The [budget](crate::config::Budget) of a solve is checked before each decision of the solve loop, together with the termination callback.
*/

use std::time::Instant;

use crate::{
    config::restarts::RestartPolicy,
    context::GenericContext,
    misc::log::targets::{self},
    types::err::ResourceError,
};

/// Counts at the start of a solve, against which a [budget](crate::config::Budget) is measured.
pub struct BudgetBaseline {
    pub start: Instant,
    pub conflicts: usize,
    pub propagations: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns whether a restart is due, given conflicts since the last restart.
    pub fn restart_interrupt(&self) -> bool {
        let fresh_conflicts = self.counters.fresh_conflicts;
        match self.config.restart_policy.value {
            RestartPolicy::Luby => {
                fresh_conflicts
                    >= self
                        .config
                        .luby_u
                        .value
                        .saturating_mul(self.counters.luby.current())
            }

            RestartPolicy::Geometric => {
                let exponent = i32::try_from(self.counters.restart_index).unwrap_or(i32::MAX);
                let interval = self.config.restart_first.value as f64
                    * self.config.restart_factor.value.powi(exponent);
                fresh_conflicts as f64 >= interval
            }

            RestartPolicy::Never => false,
        }
    }

    /// Forgets all decisions and advances the restart schedule.
    pub fn restart(&mut self) {
        log::info!(target: targets::RESTART, "Restart after {} conflicts", self.counters.fresh_conflicts);
        self.backjump(0);
        self.counters.fresh_conflicts = 0;
        self.counters.restarts += 1;

        match self.config.restart_policy.value {
            RestartPolicy::Luby => {
                self.counters.luby.next();
            }
            RestartPolicy::Geometric => self.counters.restart_index += 1,
            RestartPolicy::Never => {}
        }
    }

    /// A baseline for the budget of a fresh solve.
    pub fn budget_baseline(&self) -> BudgetBaseline {
        BudgetBaseline {
            start: Instant::now(),
            conflicts: self.counters.total_conflicts,
            propagations: self.counters.total_propagations,
        }
    }

    /// Returns the first exhausted resource, if any, relative to the given baseline.
    ///
    /// The termination callback is consulted last, and only if no limit of the budget has been reached.
    pub fn budget_interrupt(&mut self, baseline: &BudgetBaseline) -> Option<ResourceError> {
        let budget = self.config.budget;

        if budget
            .time
            .is_some_and(|limit| baseline.start.elapsed() >= limit)
        {
            return Some(ResourceError::Time);
        }

        if budget.conflicts.is_some_and(|limit| {
            self.counters.total_conflicts - baseline.conflicts >= limit
        }) {
            return Some(ResourceError::Conflicts);
        }

        if budget.propagations.is_some_and(|limit| {
            self.counters.total_propagations - baseline.propagations >= limit
        }) {
            return Some(ResourceError::Propagations);
        }

        if self.check_callback_terminate() {
            return Some(ResourceError::Terminated);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{restarts::RestartPolicy, Config},
        context::Context,
    };

    #[test]
    fn luby_schedule() {
        let mut config = Config::default();
        config.luby_u.value = 2;
        let mut context = Context::from_config(config);

        context.counters.fresh_conflicts = 1;
        assert!(!context.restart_interrupt());
        context.counters.fresh_conflicts = 2;
        assert!(context.restart_interrupt());

        // The sequence continues 1, 2, …
        context.restart();
        assert_eq!(context.counters.restarts, 1);
        context.counters.fresh_conflicts = 2;
        assert!(context.restart_interrupt());
        context.restart();
        context.counters.fresh_conflicts = 3;
        assert!(!context.restart_interrupt());
        context.counters.fresh_conflicts = 4;
        assert!(context.restart_interrupt());
    }

    #[test]
    fn geometric_schedule() {
        let mut config = Config::default();
        config.restart_policy.value = RestartPolicy::Geometric;
        config.restart_first.value = 10;
        config.restart_factor.value = 2.0;
        let mut context = Context::from_config(config);

        context.counters.fresh_conflicts = 10;
        assert!(context.restart_interrupt());
        context.restart();
        context.counters.fresh_conflicts = 19;
        assert!(!context.restart_interrupt());
        context.counters.fresh_conflicts = 20;
        assert!(context.restart_interrupt());
    }

    #[test]
    fn never_restart() {
        let mut config = Config::default();
        config.restart_policy.value = RestartPolicy::Never;
        let mut context = Context::from_config(config);
        context.counters.fresh_conflicts = u32::MAX;
        assert!(!context.restart_interrupt());
    }
}
