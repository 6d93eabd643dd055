/*!
Policies for scheduling restarts.

A restart backjumps to level zero while keeping every clause learnt so far.
The policy determines how many conflicts are allowed between restarts.

- [Luby](RestartPolicy::Luby): the *i*th interval is `luby_u * luby(i)`, see [luby](crate::generic::luby).
- [Geometric](RestartPolicy::Geometric): the *i*th interval is `restart_first * restart_factor^i`.
- [Never](RestartPolicy::Never): no restarts, useful for reproducing a search step by step.
*/

use std::str::FromStr;

/// Supported restart policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RestartPolicy {
    Luby = 0,
    Geometric,
    Never,
}

impl RestartPolicy {
    pub const MIN: RestartPolicy = RestartPolicy::Luby;
    pub const MAX: RestartPolicy = RestartPolicy::Never;
}

impl std::fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Luby => write!(f, "luby"),
            Self::Geometric => write!(f, "geometric"),
            Self::Never => write!(f, "never"),
        }
    }
}

impl FromStr for RestartPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "luby" => Ok(Self::Luby),
            "geometric" => Ok(Self::Geometric),
            "never" => Ok(Self::Never),
            _unknown_string => Err(()),
        }
    }
}
