//! Plugin API: traits, events, and server API for plugin authors.
//!
//! This crate defines the interface between the host server and its plugins.
//! It has no dependency on keepbaby-server.

mod kinds;

pub use kinds::{EntityType, ItemType, ParseKindError};

// ─── Types ───────────────────────────────────────────────────────────────────

/// Information about an online player, passed to plugins in events.
#[derive(Debug, Clone)]
pub struct PluginPlayer {
    pub name: String,
    pub uuid: String,
    pub runtime_id: u64,
    pub position: (f32, f32, f32),
}

/// A point in a named world.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub world: String,
}

/// Growth state of an ageable creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeState {
    /// Growth-stage flag: `false` while the creature looks and acts juvenile.
    pub adult: bool,
    /// Numeric age. Negative while juvenile, counts up towards 0.
    pub age: i32,
    /// While set, the apparent growth stage is frozen.
    pub age_lock: bool,
}

impl AgeState {
    /// Age a freshly spawned juvenile starts at (one in-game day of growth).
    pub const BABY_AGE: i32 = -24000;

    pub fn baby() -> Self {
        Self {
            adult: false,
            age: Self::BABY_AGE,
            age_lock: false,
        }
    }

    pub fn adult() -> Self {
        Self {
            adult: true,
            age: 0,
            age_lock: false,
        }
    }
}

/// Taming capability of a creature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tameable {
    /// Name of the owning player, `None` while untamed.
    pub owner: Option<String>,
}

/// A live creature, as seen by plugins.
///
/// Optional capabilities stand in for sub-kind checks: a creature is growth
/// capable iff `ageable` is set, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginEntity {
    pub runtime_id: u64,
    pub entity_type: EntityType,
    pub custom_name: Option<String>,
    pub location: PluginLocation,
    pub ageable: Option<AgeState>,
    pub coat_pattern: Option<String>,
    pub tameable: Option<Tameable>,
}

/// An item stack held by a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginItem {
    pub item_type: ItemType,
    pub count: u8,
    /// Custom display name set by renaming the item.
    pub display_name: Option<String>,
}

impl PluginItem {
    pub fn new(item_type: ItemType) -> Self {
        Self {
            item_type,
            count: 1,
            display_name: None,
        }
    }

    pub fn named(item_type: ItemType, display_name: &str) -> Self {
        Self {
            item_type,
            count: 1,
            display_name: Some(display_name.to_string()),
        }
    }

    /// Whether this stack represents an empty hand.
    pub fn is_empty(&self) -> bool {
        self.item_type == ItemType::Air || self.count == 0
    }

    /// The custom display name, if the stack carries a non-empty one.
    pub fn custom_name(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Log level for plugin logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

/// Result of dispatching an event to a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue normal handling.
    Continue,
    /// Event was cancelled by this plugin.
    Cancelled,
}

/// Order in which plugins see an event. Higher tiers are dispatched first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum EventPriority {
    Lowest,
    Low,
    #[default]
    Normal,
    High,
    Highest,
}

// ─── Events ──────────────────────────────────────────────────────────────────

/// All events that plugins can listen to.
#[derive(Debug, Clone)]
pub enum PluginEvent {
    /// A player used (right-clicked) an entity with their main-hand item.
    PlayerInteractEntity {
        player: Option<PluginPlayer>,
        entity: PluginEntity,
        main_hand: Option<PluginItem>,
    },
    /// An entity died, possibly at a player's hand.
    EntityDeath {
        entity: PluginEntity,
        killer: Option<PluginPlayer>,
    },

    ServerStarted,
    ServerStopping,
}

impl PluginEvent {
    /// Whether this event type can be cancelled by a plugin.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, PluginEvent::PlayerInteractEntity { .. })
    }
}

// ─── Plugin trait ────────────────────────────────────────────────────────────

/// Metadata about a plugin.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

/// The Plugin trait, implemented by every plugin the server hosts.
pub trait Plugin: Send {
    /// Return plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Called when the plugin is loaded, after `load_config`.
    fn on_enable(&mut self, api: &mut dyn ServerApi);

    /// Called when the plugin is unloaded.
    fn on_disable(&mut self) {}

    /// Priority this plugin wants for `event`. Defaults to `Normal`.
    fn priority(&self, event: &PluginEvent) -> EventPriority {
        let _ = event;
        EventPriority::Normal
    }

    /// Called for every dispatched event. Return `Cancelled` to cancel cancellable events.
    fn on_event(&mut self, event: &PluginEvent, api: &mut dyn ServerApi) -> EventResult {
        let _ = (event, api);
        EventResult::Continue
    }

    /// Called when a scheduled task fires.
    fn on_task(&mut self, task_id: u32, api: &mut dyn ServerApi) {
        let _ = (task_id, api);
    }

    /// Return a default config as JSON. If `Some`, the plugin gets a config file.
    fn default_config(&self) -> Option<serde_json::Value> {
        None
    }

    /// Called with the loaded config (from `plugins/<name>/config.json`).
    fn load_config(&mut self, _config: serde_json::Value) {}
}

// ─── Server API ──────────────────────────────────────────────────────────────

/// Safe read/write access to server state, passed to plugins during callbacks.
///
/// Read methods return data immediately. Write methods are deferred (applied
/// after the plugin callback returns).
pub trait ServerApi {
    // --- Players ---
    fn send_message(&mut self, player_name: &str, message: &str);

    // --- Entities ---
    fn set_age_lock(&mut self, runtime_id: u64, locked: bool);
    fn set_age(&mut self, runtime_id: u64, age: i32);
    fn set_custom_name(&mut self, runtime_id: u64, name: &str);
    /// Force the growth-stage flag to juvenile. Leaves age and lock alone.
    fn set_baby(&mut self, runtime_id: u64);

    // --- Server ---
    fn get_tick(&self) -> u64;
    fn log(&self, level: LogLevel, message: &str);

    // --- Scheduler ---
    fn schedule_delayed(&mut self, plugin_name: &str, delay_ticks: u64, task_id: u32);
}

// ─── Tests ───────────────────────────────────────────────────────────────────
