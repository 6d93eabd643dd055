use clap::ArgMatches;

use websat::{
    config::{
        restarts::RestartPolicy, vsids::VSIDS, Config, PolarityLean, RandomDecisionBias,
    },
    generic::luby::LubyRepresentation,
    types::err::ConfigError,
};

/// A configuration from the given arguments, or the first option given a value out of bounds.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.random_seed.set(*seed)?;
    };

    if let Ok(Some(policy)) = args.try_get_one::<RestartPolicy>("restart") {
        the_config.restart_policy.set(*policy)?;
    };

    if let Ok(Some(u)) = args.try_get_one::<LubyRepresentation>("luby") {
        the_config.luby_u.set(*u)?;
    };

    if let Ok(Some(variant)) = args.try_get_one::<VSIDS>("vsids") {
        the_config.vsids.set(*variant)?;
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_phase_saving") {
        the_config.phase_saving.set(false)?;
    };

    if let Ok(Some(bias)) = args.try_get_one::<RandomDecisionBias>("random_decision_bias") {
        the_config.random_decision_bias.set(*bias)?;
    };

    if let Ok(Some(lean)) = args.try_get_one::<PolarityLean>("polarity_lean") {
        the_config.polarity_lean.set(*lean)?;
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        the_config.budget.time = Some(std::time::Duration::from_secs(*secs));
    };

    if let Ok(Some(conflicts)) = args.try_get_one::<usize>("conflict_budget") {
        the_config.budget.conflicts = Some(*conflicts);
    };

    Ok(the_config)
}
