//! CLI commands: argument parsing and text rendering.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};

use nchat_skin::css::VariableMap;
use nchat_skin::tokens::accessibility::contrast_report;
use nchat_skin::{
    BinderPrefixes, MemoryStyleRoot, Overrides, SkinBinder, SkinRegistry, SkinRequest, find_skin,
};
use nchat_types::config::NchatConfig;

pub const USAGE: &str = "\
usage: nchat-app <command>

commands:
  list                            list skins, behaviors and profiles
  show [profile]                  describe a profile
  vars [skin] [behavior] [--dark] print the CSS variables for a skin
  audit                           check every skin's contrast against WCAG AA
  help                            show this message";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show {
        profile: Option<String>,
    },
    Vars {
        skin: Option<String>,
        behavior: Option<String>,
        dark: bool,
    },
    Audit,
    Help,
}

/// Parse arguments (without the program name).
pub fn parse(args: &[String]) -> Result<Command> {
    let mut iter = args.iter().map(String::as_str);
    let Some(name) = iter.next() else {
        return Ok(Command::Help);
    };
    let rest: Vec<&str> = iter.collect();
    match name {
        "list" => Ok(Command::List),
        "show" => match rest.as_slice() {
            [] => Ok(Command::Show { profile: None }),
            [p] => Ok(Command::Show {
                profile: Some(p.to_string()),
            }),
            _ => bail!("show takes at most one profile id"),
        },
        "vars" => {
            let dark = rest.contains(&"--dark");
            let positional: Vec<&str> = rest.iter().copied().filter(|a| *a != "--dark").collect();
            if let Some(flag) = positional.iter().find(|a| a.starts_with("--")) {
                bail!("unknown flag '{flag}'");
            }
            match positional.as_slice() {
                [] => Ok(Command::Vars {
                    skin: None,
                    behavior: None,
                    dark,
                }),
                [s] => Ok(Command::Vars {
                    skin: Some(s.to_string()),
                    behavior: None,
                    dark,
                }),
                [s, b] => Ok(Command::Vars {
                    skin: Some(s.to_string()),
                    behavior: Some(b.to_string()),
                    dark,
                }),
                _ => bail!("vars takes a skin and an optional behavior"),
            }
        },
        "audit" => Ok(Command::Audit),
        "help" | "-h" | "--help" => Ok(Command::Help),
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    }
}

/// Build the registry the CLI works against: built-ins plus any packs
/// found in the configured skins directory.
pub fn load_registry(config: &NchatConfig) -> Result<SkinRegistry> {
    let mut registry = SkinRegistry::with_builtins().context("loading built-in skins")?;
    let dir = config.skins_dir.as_deref().unwrap_or(Path::new("skins"));
    for pack in nchat_skin::discover_packs(dir) {
        let name = pack.name.clone();
        if let Err(e) = registry.register_pack(pack) {
            log::warn!("Skin pack '{name}' rejected: {e}");
        }
    }
    Ok(registry)
}

/// Run a command and return its output.
pub fn run(command: &Command, registry: &SkinRegistry, config: &NchatConfig) -> Result<String> {
    match command {
        Command::List => Ok(list(registry)),
        Command::Show { profile } => {
            let id = profile
                .as_deref()
                .or(config.profile.as_deref())
                .unwrap_or(&config.skin);
            show(registry, id)
        },
        Command::Vars {
            skin,
            behavior,
            dark,
        } => {
            let skin = skin.as_deref().unwrap_or(&config.skin);
            vars(registry, config, skin, behavior.as_deref(), *dark || config.dark_mode)
        },
        Command::Audit => Ok(audit(registry)),
        Command::Help => Ok(USAGE.to_string()),
    }
}

fn list(registry: &SkinRegistry) -> String {
    let mut out = String::from("Skins:\n");
    for id in registry.skin_ids() {
        if let Some(skin) = registry.get_skin(id) {
            let _ = writeln!(out, "  {id:<12} {}", skin.name);
        }
    }
    out.push_str("\nBehaviors:\n");
    for id in registry.behavior_ids() {
        if let Some(b) = registry.get_behavior(id) {
            let _ = writeln!(out, "  {id:<12} {}", b.description);
        }
    }
    out.push_str("\nProfiles:\n");
    for id in registry.profile_ids() {
        if let Some(p) = registry.get_profile(id) {
            let _ = writeln!(out, "  {id:<12} {} + {}", p.skin_id, p.behavior_id);
        }
    }
    out
}

fn show(registry: &SkinRegistry, profile_id: &str) -> Result<String> {
    let profile = registry
        .get_profile(profile_id)
        .with_context(|| format!("no profile '{profile_id}'"))?;
    let resolved = registry.resolve_profile(profile_id, &Overrides::none())?;
    let skin = &resolved.skin;
    let m = &resolved.behavior.messaging;

    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", profile.name, profile.id);
    if !profile.description.is_empty() {
        let _ = writeln!(out, "{}", profile.description);
    }
    let _ = writeln!(out, "\nskin:      {} v{}", skin.id, skin.version);
    let _ = writeln!(out, "  primary   {} / {} (dark)", skin.colors.primary, skin.dark_mode.colors.primary);
    let _ = writeln!(
        out,
        "  font      {} {}",
        skin.typography.font_size_base, skin.typography.font_family
    );
    let _ = writeln!(
        out,
        "  layout    {:?}, {:?} avatars",
        skin.components.message_layout, skin.components.avatar_shape
    );
    let _ = writeln!(out, "\nbehavior:  {}", resolved.behavior.id);
    let _ = writeln!(out, "  edit      {}", window(m.edit_window));
    let _ = writeln!(out, "  delete    {}", window(m.delete_window));
    let _ = writeln!(out, "  threads   {:?}", m.threading_model);
    let _ = writeln!(out, "  e2ee      {:?}", resolved.behavior.privacy.end_to_end_encryption);
    Ok(out)
}

fn window(ms: u64) -> String {
    match ms {
        0 => "unlimited".to_string(),
        ms if ms % 3_600_000 == 0 => format!("{}h", ms / 3_600_000),
        ms if ms % 60_000 == 0 => format!("{}min", ms / 60_000),
        ms => format!("{ms}ms"),
    }
}

fn vars(
    registry: &SkinRegistry,
    config: &NchatConfig,
    skin: &str,
    behavior: Option<&str>,
    dark: bool,
) -> Result<String> {
    let mut binder = SkinBinder::with_prefixes(MemoryStyleRoot::new(), BinderPrefixes::from(config));
    match behavior {
        Some(b) => {
            let request = SkinRequest::Pair {
                skin: skin.to_string(),
                behavior: b.to_string(),
            };
            binder.switch_skin(registry, request, &Overrides::none(), dark)?;
        },
        None => {
            let dir = config.skins_dir.as_deref().unwrap_or(Path::new("skins"));
            let found = find_skin(registry, skin, dir)?;
            binder.switch_skin(registry, SkinRequest::Skin(Box::new(found)), &Overrides::none(), dark)?;
        },
    }
    Ok(render_vars(binder.applied()))
}

fn render_vars(vars: &VariableMap) -> String {
    let mut out = String::from(":root {\n");
    for (name, value) in vars {
        let _ = writeln!(out, "  {name}: {value};");
    }
    out.push('}');
    out
}

fn audit(registry: &SkinRegistry) -> String {
    let mut out = String::new();
    let mut total = 0;
    let mut passed = 0;
    for id in registry.skin_ids() {
        let Some(skin) = registry.get_skin(id) else {
            continue;
        };
        for (mode, is_dark) in [("light", false), ("dark", true)] {
            let report = contrast_report(skin.palette(is_dark));
            for (name, check) in report.checks() {
                total += 1;
                let verdict = if check.aa {
                    passed += 1;
                    "AA"
                } else if check.aa_large {
                    "AA large only"
                } else {
                    "FAIL"
                };
                let _ = writeln!(out, "{id:<10} {mode:<5} {name:<20} {:>5.2}  {verdict}", check.ratio);
            }
        }
    }
    let _ = write!(out, "\n{passed}/{total} pairs meet WCAG AA");
    out
}
