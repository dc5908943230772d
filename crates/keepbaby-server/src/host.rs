//! The game host: owns the mob world and the plugin manager and drives ticks.

use std::collections::HashMap;

use keepbaby_plugin_api::{EventResult, PluginEvent, PluginItem, PluginPlayer};
use tracing::info;

use crate::console::{ConsoleCommand, HELP};
use crate::plugin_manager::{PendingAction, PluginManager, ServerSnapshot};
use crate::world::MobWorld;

pub struct Host {
    world: MobWorld,
    plugins: PluginManager,
    current_tick: u64,
    plugin_started: bool,
    players: HashMap<String, PluginPlayer>,
}

impl Host {
    pub fn new(world: MobWorld, plugins: PluginManager) -> Self {
        Self {
            world,
            plugins,
            current_tick: 0,
            plugin_started: false,
            players: HashMap::new(),
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    fn build_snapshot(&self) -> ServerSnapshot {
        ServerSnapshot {
            current_tick: self.current_tick,
        }
    }

    fn apply_plugin_actions(&mut self, actions: Vec<PendingAction>) {
        self.world.apply_actions(actions);
    }

    pub fn enable_plugins(&mut self) {
        let snapshot = self.build_snapshot();
        let actions = self.plugins.enable_all(&snapshot);
        self.apply_plugin_actions(actions);
    }

    /// Run one game tick: growth, then the plugin scheduler.
    pub fn game_tick(&mut self) {
        self.current_tick += 1;
        self.world.tick_growth();

        // Plugin: dispatch ServerStarted on first tick
        if !self.plugin_started {
            self.plugin_started = true;
            let snapshot = self.build_snapshot();
            let (_, actions) = self
                .plugins
                .dispatch(&PluginEvent::ServerStarted, &snapshot);
            self.apply_plugin_actions(actions);
        }

        // Plugin scheduler tick
        let plugin_actions = {
            let snapshot = self.build_snapshot();
            self.plugins.tick_scheduler(&snapshot)
        };
        self.apply_plugin_actions(plugin_actions);
    }

    pub fn shutdown(&mut self) {
        let snapshot = self.build_snapshot();
        let (_, actions) = self
            .plugins
            .dispatch(&PluginEvent::ServerStopping, &snapshot);
        self.apply_plugin_actions(actions);
        self.plugins.disable_all();
    }

    /// Look up a console-driven player, creating it on first use.
    fn player(&mut self, name: &str) -> PluginPlayer {
        let next_id = 1_000_000 + self.players.len() as u64;
        self.players
            .entry(name.to_string())
            .or_insert_with(|| PluginPlayer {
                name: name.to_string(),
                uuid: format!("offline-{name}"),
                runtime_id: next_id,
                position: (0.0, 64.0, 0.0),
            })
            .clone()
    }

    /// `player` uses `item` on the mob `runtime_id`. Returns `None` if there is no such mob.
    pub fn interact(
        &mut self,
        player_name: &str,
        runtime_id: u64,
        item: PluginItem,
    ) -> Option<EventResult> {
        let entity = self.world.get(runtime_id)?.clone();
        let player = self.player(player_name);
        let event = PluginEvent::PlayerInteractEntity {
            player: Some(player.clone()),
            entity,
            main_hand: Some(item.clone()),
        };
        let snapshot = self.build_snapshot();
        let (result, actions) = self.plugins.dispatch(&event, &snapshot);
        self.apply_plugin_actions(actions);

        if result == EventResult::Continue {
            self.world.default_interaction(&player, runtime_id, &item);
        }
        Some(result)
    }

    /// Remove the mob `runtime_id`, reporting the death to plugins. Returns false if missing.
    pub fn kill(&mut self, runtime_id: u64, killer: Option<&str>) -> bool {
        let Some(entity) = self.world.remove(runtime_id) else {
            return false;
        };
        let killer = killer.map(|name| self.player(name));
        let snapshot = self.build_snapshot();
        let (_, actions) = self
            .plugins
            .dispatch(&PluginEvent::EntityDeath { entity, killer }, &snapshot);
        self.apply_plugin_actions(actions);
        true
    }

    /// Execute a parsed console command and return the reply.
    pub fn execute(&mut self, command: ConsoleCommand) -> String {
        match command {
            ConsoleCommand::Spawn {
                entity_type,
                baby,
                position,
                owner,
                pattern,
            } => {
                let id = self.world.spawn(entity_type, baby, position);
                let mut reply = format!("Spawned {entity_type} #{id}");
                if let Some(owner) = owner {
                    if self.world.tame(id, &owner) {
                        reply.push_str(&format!(", owned by {owner}"));
                    } else {
                        reply.push_str(&format!(", {entity_type} cannot be tamed"));
                    }
                }
                if let Some(pattern) = pattern {
                    if self.world.set_coat_pattern(id, &pattern) {
                        reply.push_str(&format!(", pattern {pattern}"));
                    } else {
                        reply.push_str(&format!(", {entity_type} has no coat pattern"));
                    }
                }
                reply
            }
            ConsoleCommand::Tame { runtime_id, owner } => {
                if self.world.tame(runtime_id, &owner) {
                    format!("#{runtime_id} now belongs to {owner}")
                } else {
                    format!("#{runtime_id} cannot be tamed")
                }
            }
            ConsoleCommand::Interact {
                player,
                runtime_id,
                item,
                display_name,
            } => {
                let stack = PluginItem {
                    item_type: item,
                    count: 1,
                    display_name,
                };
                let mut reply = match self.interact(&player, runtime_id, stack) {
                    Some(EventResult::Continue) => format!("{player} used {item} on #{runtime_id}"),
                    Some(EventResult::Cancelled) => "Interaction cancelled by a plugin".into(),
                    None => format!("No entity #{runtime_id}"),
                };
                for (to, message) in self.world.drain_chat() {
                    reply.push_str(&format!("\n[{to}] {message}"));
                }
                reply
            }
            ConsoleCommand::Kill { runtime_id, killer } => {
                if self.kill(runtime_id, killer.as_deref()) {
                    format!("Killed #{runtime_id}")
                } else {
                    format!("No entity #{runtime_id}")
                }
            }
            ConsoleCommand::List => self.describe_entities(),
            ConsoleCommand::Tick { count } => {
                for _ in 0..count {
                    self.game_tick();
                }
                format!("Now at tick {}", self.current_tick)
            }
            ConsoleCommand::Help => HELP.into(),
            ConsoleCommand::Stop => {
                info!("Stop requested from console");
                "Stopping".into()
            }
        }
    }

    fn describe_entities(&self) -> String {
        let lines: Vec<String> = self
            .world
            .entities()
            .map(|e| {
                let stage = match e.ageable {
                    Some(a) if a.age_lock && !a.adult => "baby, locked",
                    Some(a) if a.age_lock => "adult, locked",
                    Some(a) if a.adult => "adult",
                    Some(_) => "baby",
                    None => "-",
                };
                format!(
                    "#{} {} ({stage}) {}",
                    e.runtime_id,
                    e.entity_type,
                    e.custom_name.as_deref().unwrap_or("")
                )
                .trim_end()
                .to_string()
            })
            .collect();
        if lines.is_empty() {
            "No entities".into()
        } else {
            lines.join("\n")
        }
    }
}
