//! Plugin manager: loads, enables, and dispatches events to plugins.

use std::path::Path;

use keepbaby_plugin_api::{EventResult, LogLevel, Plugin, PluginEvent, ServerApi};
use tracing::{debug, error, info, warn};

// ─── Types ───────────────────────────────────────────────────────────────────

/// A one-shot scheduled task owned by a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub plugin_name: String,
    pub task_id: u32,
    pub remaining_ticks: u64,
}

/// Server state snapshot for plugin API reads (built before dispatch).
pub struct ServerSnapshot {
    pub current_tick: u64,
}

/// Deferred side-effect requested by a plugin during a callback.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    SendMessage { player_name: String, message: String },
    SetAgeLock { runtime_id: u64, locked: bool },
    SetAge { runtime_id: u64, age: i32 },
    SetCustomName { runtime_id: u64, name: String },
    SetBaby { runtime_id: u64 },
    ScheduleTask { task: ScheduledTask },
}

// ─── ServerApiImpl ───────────────────────────────────────────────────────────

/// Implements `ServerApi` using a snapshot for reads and accumulating PendingActions for writes.
struct ServerApiImpl<'a> {
    snapshot: &'a ServerSnapshot,
    actions: Vec<PendingAction>,
}

impl<'a> ServerApiImpl<'a> {
    fn new(snapshot: &'a ServerSnapshot) -> Self {
        Self {
            snapshot,
            actions: Vec::new(),
        }
    }

    fn take_actions(self) -> Vec<PendingAction> {
        self.actions
    }
}

impl ServerApi for ServerApiImpl<'_> {
    fn send_message(&mut self, player_name: &str, message: &str) {
        self.actions.push(PendingAction::SendMessage {
            player_name: player_name.to_string(),
            message: message.to_string(),
        });
    }

    fn set_age_lock(&mut self, runtime_id: u64, locked: bool) {
        self.actions
            .push(PendingAction::SetAgeLock { runtime_id, locked });
    }

    fn set_age(&mut self, runtime_id: u64, age: i32) {
        self.actions.push(PendingAction::SetAge { runtime_id, age });
    }

    fn set_custom_name(&mut self, runtime_id: u64, name: &str) {
        self.actions.push(PendingAction::SetCustomName {
            runtime_id,
            name: name.to_string(),
        });
    }

    fn set_baby(&mut self, runtime_id: u64) {
        self.actions.push(PendingAction::SetBaby { runtime_id });
    }

    fn get_tick(&self) -> u64 {
        self.snapshot.current_tick
    }

    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => info!("[plugin] {message}"),
            LogLevel::Warn => warn!("[plugin] {message}"),
            LogLevel::Error => error!("[plugin] {message}"),
            LogLevel::Debug => debug!("[plugin] {message}"),
        }
    }

    fn schedule_delayed(&mut self, plugin_name: &str, delay_ticks: u64, task_id: u32) {
        self.actions.push(PendingAction::ScheduleTask {
            task: ScheduledTask {
                plugin_name: plugin_name.to_string(),
                task_id,
                remaining_ticks: delay_ticks,
            },
        });
    }
}

// ─── PluginManager ───────────────────────────────────────────────────────────

/// Manages all loaded plugins and their scheduled tasks.
pub struct PluginManager {
    plugins: Vec<Box<dyn Plugin>>,
    tasks: Vec<ScheduledTask>,
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginManager {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Register a plugin (call before load_configs / enable_all).
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        info!("Registered plugin: {}", plugin.info().name);
        self.plugins.push(plugin);
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Enable all registered plugins. Returns actions the world must apply.
    pub fn enable_all(&mut self, snapshot: &ServerSnapshot) -> Vec<PendingAction> {
        let mut all_actions = Vec::new();
        for plugin in &mut self.plugins {
            let mut api = ServerApiImpl::new(snapshot);
            plugin.on_enable(&mut api);
            all_actions.extend(api.take_actions());
        }
        self.apply_internal_actions(all_actions)
    }

    /// Disable all registered plugins and drop their tasks.
    pub fn disable_all(&mut self) {
        for plugin in &mut self.plugins {
            plugin.on_disable();
        }
        self.tasks.clear();
    }

    /// Dispatch an event to all plugins, highest priority first.
    ///
    /// Plugins sharing a priority run in registration order. Returns the
    /// combined result and the actions the world must apply.
    pub fn dispatch(
        &mut self,
        event: &PluginEvent,
        snapshot: &ServerSnapshot,
    ) -> (EventResult, Vec<PendingAction>) {
        let cancellable = event.is_cancellable();
        let mut all_actions = Vec::new();
        let mut final_result = EventResult::Continue;

        let mut order: Vec<usize> = (0..self.plugins.len()).collect();
        // sort_by_key is stable, so ties keep registration order
        order.sort_by_key(|&i| std::cmp::Reverse(self.plugins[i].priority(event)));

        for i in order {
            let mut api = ServerApiImpl::new(snapshot);
            let result = self.plugins[i].on_event(event, &mut api);
            all_actions.extend(api.take_actions());

            if cancellable && result == EventResult::Cancelled {
                final_result = EventResult::Cancelled;
                break; // Stop propagation
            }
        }

        (final_result, self.apply_internal_actions(all_actions))
    }

    /// Tick the scheduler. Returns pending actions from fired tasks.
    pub fn tick_scheduler(&mut self, snapshot: &ServerSnapshot) -> Vec<PendingAction> {
        let mut all_actions = Vec::new();
        let mut fired: Vec<(String, u32)> = Vec::new();

        // Decrement and collect fired tasks
        for task in &mut self.tasks {
            if task.remaining_ticks > 0 {
                task.remaining_ticks -= 1;
            }
            if task.remaining_ticks == 0 {
                fired.push((task.plugin_name.clone(), task.task_id));
            }
        }

        self.tasks.retain(|t| t.remaining_ticks > 0);

        // Call on_task for each fired task
        for (plugin_name, task_id) in fired {
            if let Some(plugin) = self
                .plugins
                .iter_mut()
                .find(|p| p.info().name == plugin_name)
            {
                let mut api = ServerApiImpl::new(snapshot);
                plugin.on_task(task_id, &mut api);
                all_actions.extend(api.take_actions());
            }
        }

        self.apply_internal_actions(all_actions)
    }

    /// Load configs for all plugins from `<dir>/<name>/config.json`.
    ///
    /// A missing file is created from the plugin's default config. An
    /// unreadable or invalid file falls back to the default.
    pub fn load_configs(&mut self, dir: &Path) {
        for plugin in &mut self.plugins {
            let info = plugin.info();
            if let Some(default_config) = plugin.default_config() {
                let plugin_dir = dir.join(&info.name);
                let config_path = plugin_dir.join("config.json");

                let config = if config_path.exists() {
                    match std::fs::read_to_string(&config_path) {
                        Ok(data) => match serde_json::from_str(&data) {
                            Ok(v) => v,
                            Err(e) => {
                                warn!("Failed to parse config for {}: {e}", info.name);
                                default_config.clone()
                            }
                        },
                        Err(e) => {
                            warn!("Failed to read config for {}: {e}", info.name);
                            default_config.clone()
                        }
                    }
                } else {
                    // Write default config
                    if let Err(e) = std::fs::create_dir_all(&plugin_dir) {
                        warn!("Failed to create {}: {e}", plugin_dir.display());
                    } else if let Ok(json) = serde_json::to_string_pretty(&default_config) {
                        if let Err(e) = std::fs::write(&config_path, json) {
                            warn!("Failed to write default config for {}: {e}", info.name);
                        }
                    }
                    default_config
                };

                plugin.load_config(config);
            }
        }
    }

    /// Absorb scheduler actions; return the ones the world must apply.
    fn apply_internal_actions(&mut self, actions: Vec<PendingAction>) -> Vec<PendingAction> {
        let mut external = Vec::new();
        for action in actions {
            match action {
                PendingAction::ScheduleTask { task } => {
                    debug!(
                        "Plugin {} scheduled task {} in {} ticks",
                        task.plugin_name, task.task_id, task.remaining_ticks
                    );
                    self.tasks.push(task);
                }
                other => external.push(other),
            }
        }
        external
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
