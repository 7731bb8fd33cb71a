//! Resolving loader options from the command line.

use crate::cli::Args;
use classname_transformer::{ConfigError, PrefixConfig};

/// Builds the loader options for a run.
///
/// Layers, later ones winning: defaults, `--options` JSON, `--query`, then the
/// individual flags.
pub fn resolve(args: &Args) -> Result<PrefixConfig, ConfigError> {
    let mut config = match &args.options {
        Some(json) => PrefixConfig::from_json(json)?,
        None => PrefixConfig::default(),
    };

    if let Some(query) = &args.query {
        config = config.apply_query(query)?;
    }

    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }
    if let Some(name) = &args.attribute_name {
        config.attribute_name = name.clone();
    }
    if let Some(name) = &args.join_call_name {
        config.join_call_name = name.clone();
    }
    if args.enable_debugging {
        config.enable_debugging = true;
    }

    config.validate()?;
    Ok(config)
}
