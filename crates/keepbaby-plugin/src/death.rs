//! Logging of player kills of age-locked creatures.

use keepbaby_plugin_api::{LogLevel, PluginEntity, PluginPlayer, ServerApi};

use crate::location::format_location;

/// Shown in place of a custom name the creature never received.
const UNNAMED: &str = "<unnamed>";

/// Extra attributes worth recording for `entity`: its coat pattern and owner.
///
/// An owner is only listed when the creature has actually been tamed.
pub fn extra_info(entity: &PluginEntity) -> String {
    let mut parts = Vec::new();
    if let Some(pattern) = &entity.coat_pattern {
        parts.push(format!("type = {pattern}"));
    }
    if let Some(owner) = entity.tameable.as_ref().and_then(|t| t.owner.as_ref()) {
        parts.push(format!("owner = {owner}"));
    }
    parts.join(" ")
}

/// The log line for `killer` killing the locked `entity`.
pub fn death_line(killer: &PluginPlayer, entity: &PluginEntity) -> String {
    let mut line = format!(
        "{} killed {} named {} at {}",
        killer.name,
        entity.entity_type,
        entity.custom_name.as_deref().unwrap_or(UNNAMED),
        format_location(&entity.location)
    );
    let extra = extra_info(entity);
    if !extra.is_empty() {
        line.push(' ');
        line.push_str(&extra);
    }
    line
}

/// Log the death of an age-locked creature killed by a player.
///
/// Returns whether a line was written.
pub fn on_death(entity: &PluginEntity, killer: Option<&PluginPlayer>, api: &dyn ServerApi) -> bool {
    let Some(killer) = killer else {
        return false;
    };
    if !entity.ageable.is_some_and(|a| a.age_lock) {
        return false;
    }
    api.log(LogLevel::Info, &death_line(killer, entity));
    true
}
