//! nchat skin engine entry point.
//!
//! Lists the registered skins and behaviors, describes profiles, prints the
//! CSS custom properties a skin resolves to, and audits palette contrast.
//! Configuration comes from `nchat.toml` (or the file named by
//! `NCHAT_CONFIG`); custom skin packs are picked up from the skins directory.

mod commands;

use std::path::PathBuf;

use anyhow::Result;

use nchat_types::config::NchatConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::var_os("NCHAT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("nchat.toml"));
    let config = NchatConfig::load_or_default(&config_path)?;
    log::debug!("Config: {config:?}");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = commands::parse(&args)?;

    let registry = commands::load_registry(&config)?;
    log::info!(
        "Registry ready: {} skins, {} behaviors, {} profiles",
        registry.skin_ids().len(),
        registry.behavior_ids().len(),
        registry.profile_ids().len(),
    );

    let output = commands::run(&command, &registry, &config)?;
    println!("{output}");
    Ok(())
}
