//! KeepBabyMobs: name a baby creature to keep it a baby forever.
//!
//! Naming a juvenile with any display-named item engages its age lock. Feeding
//! a locked creature one of its breeding items turns it back into a juvenile
//! on the next tick. Kills of locked creatures are logged.

pub mod config;
pub mod death;
pub mod location;
pub mod lock;
pub mod restore;

use keepbaby_plugin_api::{
    EventPriority, EventResult, LogLevel, Plugin, PluginEvent, PluginInfo, ServerApi,
};
use config::{load_breeding_table, BreedingTable, ConfigError};
use lock::LockHandler;
use restore::DeferredRestores;

pub const PLUGIN_NAME: &str = "KeepBabyMobs";

/// The KeepBabyMobs plugin.
pub struct KeepBabyMobs {
    lock: LockHandler,
    restores: DeferredRestores,
    /// Config diagnostics waiting for a `ServerApi` to be reported through.
    config_errors: Vec<ConfigError>,
}

impl Default for KeepBabyMobs {
    fn default() -> Self {
        Self::new()
    }
}

impl KeepBabyMobs {
    /// A plugin with no breeding items configured until `load_config` runs.
    pub fn new() -> Self {
        Self {
            lock: LockHandler::default(),
            restores: DeferredRestores::new(PLUGIN_NAME),
            config_errors: Vec::new(),
        }
    }

    pub fn breeding_table(&self) -> &BreedingTable {
        self.lock.table()
    }

    /// Number of juvenile restores waiting for their tick.
    pub fn pending_restores(&self) -> usize {
        self.restores.len()
    }
}

impl Plugin for KeepBabyMobs {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: PLUGIN_NAME.into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: "Preserve baby mobs by naming them".into(),
            author: "tompreuss".into(),
        }
    }

    fn on_enable(&mut self, api: &mut dyn ServerApi) {
        for err in self.config_errors.drain(..) {
            api.log(LogLevel::Info, &err.to_string());
        }
        api.log(
            LogLevel::Info,
            &format!(
                "{PLUGIN_NAME} enabled with breeding items for {} mob types",
                self.lock.table().len()
            ),
        );
    }

    fn on_disable(&mut self) {
        self.restores.clear();
    }

    fn priority(&self, event: &PluginEvent) -> EventPriority {
        match event {
            PluginEvent::PlayerInteractEntity { .. } => EventPriority::Highest,
            _ => EventPriority::Normal,
        }
    }

    fn on_event(&mut self, event: &PluginEvent, api: &mut dyn ServerApi) -> EventResult {
        match event {
            PluginEvent::PlayerInteractEntity {
                player,
                entity,
                main_hand,
            } => {
                self.lock.on_interact(
                    player.as_ref(),
                    entity,
                    main_hand.as_ref(),
                    &mut self.restores,
                    api,
                );
            }
            PluginEvent::EntityDeath { entity, killer } => {
                death::on_death(entity, killer.as_ref(), api);
            }
            PluginEvent::ServerStarted | PluginEvent::ServerStopping => {}
        }
        EventResult::Continue
    }

    fn on_task(&mut self, task_id: u32, api: &mut dyn ServerApi) {
        if let Some(runtime_id) = self.restores.take(task_id) {
            api.set_baby(runtime_id);
        }
    }

    fn default_config(&self) -> Option<serde_json::Value> {
        Some(config::default_config())
    }

    fn load_config(&mut self, config: serde_json::Value) {
        let load = load_breeding_table(&config);
        self.config_errors = load.errors;
        self.lock = LockHandler::new(load.table);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use keepbaby_plugin_api::{
        AgeState, EntityType, LogLevel, PluginEntity, PluginLocation, PluginPlayer, ServerApi,
    };

    pub fn player() -> PluginPlayer {
        PluginPlayer {
            name: "Steve".into(),
            uuid: "00000000-0000-0000-0000-000000000001".into(),
            runtime_id: 1,
            position: (10.0, 64.0, -3.0),
        }
    }

    /// An unlocked, unnamed juvenile at a fixed spot.
    pub fn baby(entity_type: EntityType) -> PluginEntity {
        PluginEntity {
            runtime_id: 42,
            entity_type,
            custom_name: None,
            location: PluginLocation {
                x: 10.5,
                y: 64.0,
                z: -3.25,
                world: "world".into(),
            },
            ageable: Some(AgeState::baby()),
            coat_pattern: None,
            tameable: None,
        }
    }

    /// Records every call for inspection.
    pub struct MockApi {
        pub messages: Vec<(String, String)>,
        pub logs: RefCell<Vec<(LogLevel, String)>>,
        pub locks: Vec<(u64, bool)>,
        pub ages: Vec<(u64, i32)>,
        pub names: Vec<(u64, String)>,
        pub babies: Vec<u64>,
        pub scheduled: Vec<(String, u64, u32)>,
    }

    impl MockApi {
        pub fn new() -> Self {
            Self {
                messages: Vec::new(),
                logs: RefCell::new(Vec::new()),
                locks: Vec::new(),
                ages: Vec::new(),
                names: Vec::new(),
                babies: Vec::new(),
                scheduled: Vec::new(),
            }
        }
    }

    impl ServerApi for MockApi {
        fn send_message(&mut self, player_name: &str, message: &str) {
            self.messages
                .push((player_name.to_string(), message.to_string()));
        }
        fn set_age_lock(&mut self, runtime_id: u64, locked: bool) {
            self.locks.push((runtime_id, locked));
        }
        fn set_age(&mut self, runtime_id: u64, age: i32) {
            self.ages.push((runtime_id, age));
        }
        fn set_custom_name(&mut self, runtime_id: u64, name: &str) {
            self.names.push((runtime_id, name.to_string()));
        }
        fn set_baby(&mut self, runtime_id: u64) {
            self.babies.push(runtime_id);
        }
        fn get_tick(&self) -> u64 {
            100
        }
        fn log(&self, level: LogLevel, message: &str) {
            self.logs.borrow_mut().push((level, message.to_string()));
        }
        fn schedule_delayed(&mut self, plugin_name: &str, delay_ticks: u64, task_id: u32) {
            self.scheduled
                .push((plugin_name.to_string(), delay_ticks, task_id));
        }
    }
}
