use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use websat::config::{restarts::RestartPolicy, vsids::VSIDS, Config};

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("websat_cli")
        .about("Determines whether a formula in DIMACS form is satisfiable or unsatisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to solve."))

        .arg(Arg::new("model")
            .short('m')
            .long("model")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display a model on finding the formula is satisfiable."))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display counts from the solve on completion."))

        .arg(Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The seed for the source of randomness.
Default: {}", defaults.random_seed.value)))

        .arg(Arg::new("restart")
            .long("restart")
            .value_name("POLICY")
            .value_parser(clap::builder::ValueParser::new(restart_parser))
            .required(false)
            .num_args(1)
            .help(format!("How restarts are scheduled.
Default: {}", defaults.restart_policy.value))
            .long_help(format!("How restarts are scheduled.
Default: {}

  - luby     : Restart after u * luby(i) conflicts, for the i-th element of the luby sequence.
  - geometric: Restart after first * factor^i conflicts.
  - never    : Keep every decision until a conflict forces a backjump.", defaults.restart_policy.value)))

        .arg(Arg::new("luby")
            .long("luby")
            .short('l')
            .value_name("U")
            .value_parser(value_parser!(websat::generic::luby::LubyRepresentation))
            .required(false)
            .num_args(1)
            .help(format!("The 'u' value to use for the luby calculation when restarts are permitted.
Default: {}", defaults.luby_u.value)))

        .arg(Arg::new("vsids")
            .long("vsids")
            .value_name("VARIANT")
            .value_parser(clap::builder::ValueParser::new(vsids_parser))
            .required(false)
            .num_args(1)
            .help(format!("Which VSIDS variant to use.
Default: {}", defaults.vsids.value))
            .long_help(format!("Which VSIDS variant to use.
Default: {}

  - MiniSAT: Bump the activity of every atom used when deriving a clause.
  - Chaff  : Bump the activity of the atoms in a conflicting clause.", defaults.vsids.value)))

        .arg(Arg::new("no_phase_saving")
            .long("no-phase-saving")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Choose the value of a decision with polarity lean, rather than the last value of the atom."))

        .arg(Arg::new("random_decision_bias")
            .long("random-decision-bias")
            .short('r')
            .value_name("BIAS")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The chance of making a random decision (as opposed to using VSIDS activity).
Default: {}", defaults.random_decision_bias.value)))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_name("LEAN")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The chance of assigning positive polarity to an atom when freely making a decision.
Default: {}", defaults.polarity_lean.value)))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for the solve in seconds.
Default: No limit"))

        .arg(Arg::new("conflict_budget")
            .long("conflict-budget")
            .value_name("CONFLICTS")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The count of conflicts allowed before the solve gives up.
Default: No limit"))
}

fn vsids_parser(arg: &str) -> Result<VSIDS, std::io::Error> {
    arg.parse().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown VSIDS variant")
    })
}

fn restart_parser(arg: &str) -> Result<RestartPolicy, std::io::Error> {
    arg.parse().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown restart policy")
    })
}
