//! Age locking through named items, and juvenile restores through feeding.

use keepbaby_plugin_api::{EntityType, LogLevel, PluginEntity, PluginItem, PluginPlayer, ServerApi};
use tracing::debug;

use crate::config::BreedingTable;
use crate::location::format_location;
use crate::restore::DeferredRestores;

/// Chat message sent to the player who locked a creature.
pub const LOCK_MESSAGE: &str = "§6That mob has now been age locked. How adorable!";

/// Age written to locked creatures so they never grow up on their own.
pub const LOCKED_AGE: i32 = i32::MIN;

/// What an interaction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractOutcome {
    Ignored,
    Locked,
    JuvenileRestoreScheduled { task_id: u32 },
}

/// Horse growth is driven by its own mechanism; its numeric age is left alone.
fn forces_locked_age(entity_type: EntityType) -> bool {
    entity_type != EntityType::Horse
}

/// Handles player interactions with ageable creatures.
#[derive(Debug, Default)]
pub struct LockHandler {
    table: BreedingTable,
}

impl LockHandler {
    pub fn new(table: BreedingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BreedingTable {
        &self.table
    }

    /// React to `player` using `main_hand` on `entity`.
    ///
    /// Any hand that is not empty qualifies. A locked creature fed one of its
    /// breeding items is turned back into a juvenile on the next tick. An
    /// unlocked juvenile is locked when the item carries a display name, and
    /// takes that name whatever the item is.
    pub fn on_interact(
        &self,
        player: Option<&PluginPlayer>,
        entity: &PluginEntity,
        main_hand: Option<&PluginItem>,
        restores: &mut DeferredRestores,
        api: &mut dyn ServerApi,
    ) -> InteractOutcome {
        let (Some(player), Some(age)) = (player, entity.ageable) else {
            return InteractOutcome::Ignored;
        };
        let Some(item) = main_hand.filter(|i| !i.is_empty()) else {
            return InteractOutcome::Ignored;
        };

        if age.age_lock {
            if !self
                .table
                .is_breeding_item(entity.entity_type, item.item_type)
            {
                return InteractOutcome::Ignored;
            }
            let task_id = restores.schedule(entity.runtime_id, api);
            debug!(
                "Juvenile restore of {} #{} scheduled as task {task_id} at tick {}",
                entity.entity_type,
                entity.runtime_id,
                api.get_tick()
            );
            return InteractOutcome::JuvenileRestoreScheduled { task_id };
        }

        let Some(name) = item.custom_name() else {
            return InteractOutcome::Ignored;
        };

        if age.adult {
            return InteractOutcome::Ignored;
        }

        api.set_age_lock(entity.runtime_id, true);
        api.set_custom_name(entity.runtime_id, name);
        if forces_locked_age(entity.entity_type) {
            api.set_age(entity.runtime_id, LOCKED_AGE);
        }
        api.send_message(&player.name, LOCK_MESSAGE);
        api.log(
            LogLevel::Info,
            &format!(
                "{} age locked {} named {} at {}",
                player.name,
                entity.entity_type,
                name,
                format_location(&entity.location)
            ),
        );
        InteractOutcome::Locked
    }
}
