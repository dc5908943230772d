//! In-memory mob world: spawning, growth, feeding, and plugin action application.

use std::collections::BTreeMap;

use keepbaby_plugin_api::{
    AgeState, EntityType, ItemType, PluginEntity, PluginItem, PluginLocation, PluginPlayer,
    Tameable,
};
use tracing::{debug, info};

use crate::breeding;
use crate::plugin_manager::PendingAction;

/// Coat pattern given to freshly spawned patterned mobs.
const DEFAULT_COAT_PATTERN: &str = "TABBY";

/// All live mobs of one world, keyed by runtime id.
pub struct MobWorld {
    name: String,
    entities: BTreeMap<u64, PluginEntity>,
    next_runtime_id: u64,
    /// Chat messages delivered to players, oldest first.
    pub chat: Vec<(String, String)>,
}

impl MobWorld {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entities: BTreeMap::new(),
            next_runtime_id: 1,
            chat: Vec::new(),
        }
    }

    /// Take all chat messages delivered since the last call.
    pub fn drain_chat(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.chat)
    }

    pub fn get(&self, runtime_id: u64) -> Option<&PluginEntity> {
        self.entities.get(&runtime_id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &PluginEntity> {
        self.entities.values()
    }

    /// Spawn a mob. Capabilities follow the mob type.
    pub fn spawn(&mut self, entity_type: EntityType, baby: bool, position: (f64, f64, f64)) -> u64 {
        let runtime_id = self.next_runtime_id;
        self.next_runtime_id += 1;

        let ageable = entity_type.is_ageable().then(|| {
            if baby {
                AgeState::baby()
            } else {
                AgeState::adult()
            }
        });
        let entity = PluginEntity {
            runtime_id,
            entity_type,
            custom_name: None,
            location: PluginLocation {
                x: position.0,
                y: position.1,
                z: position.2,
                world: self.name.clone(),
            },
            ageable,
            coat_pattern: entity_type
                .has_coat_pattern()
                .then(|| DEFAULT_COAT_PATTERN.to_string()),
            tameable: entity_type.is_tameable().then(Tameable::default),
        };
        debug!("Spawned {} #{runtime_id}", entity_type.identifier());
        self.entities.insert(runtime_id, entity);
        runtime_id
    }

    /// Make `owner` the owner of a tameable mob. Returns false if it can't be tamed.
    pub fn tame(&mut self, runtime_id: u64, owner: &str) -> bool {
        match self
            .entities
            .get_mut(&runtime_id)
            .and_then(|e| e.tameable.as_mut())
        {
            Some(tameable) => {
                tameable.owner = Some(owner.to_string());
                true
            }
            None => false,
        }
    }

    /// Change the coat pattern of a patterned mob. Returns false if it has none.
    pub fn set_coat_pattern(&mut self, runtime_id: u64, pattern: &str) -> bool {
        match self
            .entities
            .get_mut(&runtime_id)
            .and_then(|e| e.coat_pattern.as_mut())
        {
            Some(coat) => {
                *coat = pattern.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, runtime_id: u64) -> Option<PluginEntity> {
        self.entities.remove(&runtime_id)
    }

    /// Advance natural growth by one tick. Age-locked mobs never grow.
    pub fn tick_growth(&mut self) {
        for entity in self.entities.values_mut() {
            let Some(age) = entity.ageable.as_mut() else {
                continue;
            };
            if age.age_lock || age.adult {
                continue;
            }
            age.age = age.age.saturating_add(1);
            if age.age >= 0 {
                age.adult = true;
                debug!("{} #{} grew up", entity.entity_type, entity.runtime_id);
            }
        }
    }

    /// The game's own reaction to a player using an item on a mob.
    ///
    /// Runs after plugins have seen the interaction and only if none of them
    /// cancelled it. Name tags name the mob; breeding food speeds up a
    /// juvenile's growth. Feeding makes an age-locked juvenile look adult,
    /// which plugins may need to undo on a later tick.
    pub fn default_interaction(
        &mut self,
        player: &PluginPlayer,
        runtime_id: u64,
        item: &PluginItem,
    ) {
        let Some(entity) = self.entities.get_mut(&runtime_id) else {
            return;
        };

        if item.item_type == ItemType::NameTag {
            if let Some(name) = item.custom_name() {
                entity.custom_name = Some(name.to_string());
                debug!(
                    "{} named {} #{runtime_id} {name}",
                    player.name, entity.entity_type
                );
            }
            return;
        }

        if !breeding::is_tempt_item(entity.entity_type, item.item_type) {
            return;
        }
        let Some(age) = entity.ageable.as_mut() else {
            return;
        };
        if age.adult {
            return;
        }
        if age.age_lock {
            age.adult = true;
        } else {
            // feeding takes 10% off the remaining growth time
            age.age += age.age.unsigned_abs().div_ceil(10) as i32;
            if age.age >= 0 {
                age.adult = true;
            }
        }
    }

    /// Apply plugin actions that touch the world.
    pub fn apply_actions(&mut self, actions: Vec<PendingAction>) {
        for action in actions {
            match action {
                PendingAction::SendMessage {
                    player_name,
                    message,
                } => {
                    info!("[chat -> {player_name}] {message}");
                    self.chat.push((player_name, message));
                }
                PendingAction::SetAgeLock { runtime_id, locked } => {
                    if let Some(age) = self.age_mut(runtime_id) {
                        age.age_lock = locked;
                    }
                }
                PendingAction::SetAge { runtime_id, age: value } => {
                    if let Some(age) = self.age_mut(runtime_id) {
                        age.age = value;
                        age.adult = value >= 0;
                    }
                }
                PendingAction::SetCustomName { runtime_id, name } => {
                    match self.entities.get_mut(&runtime_id) {
                        Some(entity) => entity.custom_name = Some(name),
                        None => debug!("Plugin renamed missing entity #{runtime_id}"),
                    }
                }
                PendingAction::SetBaby { runtime_id } => {
                    if let Some(age) = self.age_mut(runtime_id) {
                        age.adult = false;
                    }
                }
                PendingAction::ScheduleTask { task } => {
                    debug!("Ignoring unabsorbed task {} of {}", task.task_id, task.plugin_name);
                }
            }
        }
    }

    fn age_mut(&mut self, runtime_id: u64) -> Option<&mut AgeState> {
        let age = self
            .entities
            .get_mut(&runtime_id)
            .and_then(|e| e.ageable.as_mut());
        if age.is_none() {
            debug!("Plugin action for missing or non-ageable entity #{runtime_id}");
        }
        age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steve() -> PluginPlayer {
        PluginPlayer {
            name: "Steve".into(),
            uuid: "uuid-steve".into(),
            runtime_id: 1000,
            position: (0.0, 64.0, 0.0),
        }
    }

    #[test]
    fn spawn_sets_capabilities() {
        let mut world = MobWorld::new("world");
        let cat = world.spawn(EntityType::Cat, true, (1.0, 2.0, 3.0));
        let zombie = world.spawn(EntityType::Zombie, false, (0.0, 0.0, 0.0));

        let cat = world.get(cat).unwrap();
        assert_eq!(cat.ageable, Some(AgeState::baby()));
        assert_eq!(cat.coat_pattern.as_deref(), Some("TABBY"));
        assert_eq!(cat.tameable, Some(Tameable::default()));
        assert_eq!(cat.location.world, "world");

        let zombie = world.get(zombie).unwrap();
        assert!(zombie.ageable.is_none());
        assert!(zombie.tameable.is_none());
    }

    #[test]
    fn runtime_ids_increase() {
        let mut world = MobWorld::new("world");
        let a = world.spawn(EntityType::Cow, true, (0.0, 0.0, 0.0));
        let b = world.spawn(EntityType::Cow, true, (0.0, 0.0, 0.0));
        assert!(b > a);
    }

    #[test]
    fn tame_only_tameables() {
        let mut world = MobWorld::new("world");
        let wolf = world.spawn(EntityType::Wolf, false, (0.0, 0.0, 0.0));
        let cow = world.spawn(EntityType::Cow, false, (0.0, 0.0, 0.0));
        assert!(world.tame(wolf, "Alex"));
        assert!(!world.tame(cow, "Alex"));
        assert!(!world.tame(999, "Alex"));
        assert_eq!(
            world.get(wolf).unwrap().tameable.as_ref().unwrap().owner.as_deref(),
            Some("Alex")
        );
    }

    #[test]
    fn coat_pattern_only_on_patterned_mobs() {
        let mut world = MobWorld::new("world");
        let cat = world.spawn(EntityType::Cat, true, (0.0, 0.0, 0.0));
        let wolf = world.spawn(EntityType::Wolf, true, (0.0, 0.0, 0.0));
        assert!(world.set_coat_pattern(cat, "CALICO"));
        assert!(!world.set_coat_pattern(wolf, "CALICO"));
        assert_eq!(world.get(cat).unwrap().coat_pattern.as_deref(), Some("CALICO"));
        assert!(world.get(wolf).unwrap().coat_pattern.is_none());
    }

    #[test]
    fn juveniles_grow_up() {
        let mut world = MobWorld::new("world");
        let id = world.spawn(EntityType::Pig, true, (0.0, 0.0, 0.0));
        world.apply_actions(vec![PendingAction::SetAge {
            runtime_id: id,
            age: -2,
        }]);
        world.tick_growth();
        assert!(!world.get(id).unwrap().ageable.unwrap().adult);
        world.tick_growth();
        assert!(world.get(id).unwrap().ageable.unwrap().adult);
    }

    #[test]
    fn locked_juveniles_do_not_grow() {
        let mut world = MobWorld::new("world");
        let id = world.spawn(EntityType::Pig, true, (0.0, 0.0, 0.0));
        world.apply_actions(vec![
            PendingAction::SetAge {
                runtime_id: id,
                age: -1,
            },
            PendingAction::SetAgeLock {
                runtime_id: id,
                locked: true,
            },
        ]);
        for _ in 0..10 {
            world.tick_growth();
        }
        let age = world.get(id).unwrap().ageable.unwrap();
        assert!(!age.adult);
        assert_eq!(age.age, -1);
    }

    #[test]
    fn feeding_locked_juvenile_makes_it_look_adult() {
        let mut world = MobWorld::new("world");
        let id = world.spawn(EntityType::Cow, true, (0.0, 0.0, 0.0));
        world.apply_actions(vec![PendingAction::SetAgeLock {
            runtime_id: id,
            locked: true,
        }]);
        world.default_interaction(&steve(), id, &PluginItem::new(ItemType::Wheat));
        let age = world.get(id).unwrap().ageable.unwrap();
        assert!(age.adult);
        assert!(age.age_lock);
        assert_eq!(age.age, AgeState::BABY_AGE);
    }

    #[test]
    fn feeding_unlocked_juvenile_speeds_growth() {
        let mut world = MobWorld::new("world");
        let id = world.spawn(EntityType::Cow, true, (0.0, 0.0, 0.0));
        world.default_interaction(&steve(), id, &PluginItem::new(ItemType::Wheat));
        let age = world.get(id).unwrap().ageable.unwrap();
        assert_eq!(age.age, AgeState::BABY_AGE + 2400);
        assert!(!age.adult);

        // wrong food does nothing
        world.default_interaction(&steve(), id, &PluginItem::new(ItemType::Carrot));
        assert_eq!(world.get(id).unwrap().ageable.unwrap().age, AgeState::BABY_AGE + 2400);
    }

    #[test]
    fn name_tag_names_mob() {
        let mut world = MobWorld::new("world");
        let id = world.spawn(EntityType::Cow, true, (0.0, 0.0, 0.0));
        world.default_interaction(&steve(), id, &PluginItem::new(ItemType::NameTag));
        assert!(world.get(id).unwrap().custom_name.is_none());
        world.default_interaction(&steve(), id, &PluginItem::named(ItemType::NameTag, "Bessie"));
        assert_eq!(world.get(id).unwrap().custom_name.as_deref(), Some("Bessie"));
    }

    #[test]
    fn plugins_can_rename_mobs() {
        let mut world = MobWorld::new("world");
        let id = world.spawn(EntityType::Pig, true, (0.0, 0.0, 0.0));
        world.apply_actions(vec![
            PendingAction::SetCustomName {
                runtime_id: id,
                name: "Wilbur".into(),
            },
            PendingAction::SetCustomName {
                runtime_id: 99,
                name: "Ghost".into(),
            },
        ]);
        assert_eq!(world.get(id).unwrap().custom_name.as_deref(), Some("Wilbur"));
    }

    #[test]
    fn set_baby_keeps_age_and_lock() {
        let mut world = MobWorld::new("world");
        let id = world.spawn(EntityType::Cow, false, (0.0, 0.0, 0.0));
        world.apply_actions(vec![
            PendingAction::SetAgeLock {
                runtime_id: id,
                locked: true,
            },
            PendingAction::SetBaby { runtime_id: id },
        ]);
        let age = world.get(id).unwrap().ageable.unwrap();
        assert!(!age.adult);
        assert!(age.age_lock);
        assert_eq!(age.age, 0);
    }

    #[test]
    fn actions_for_missing_entities_are_ignored() {
        let mut world = MobWorld::new("world");
        world.apply_actions(vec![
            PendingAction::SetBaby { runtime_id: 77 },
            PendingAction::SetAge {
                runtime_id: 77,
                age: 0,
            },
        ]);
        assert_eq!(world.entities().count(), 0);
    }

    #[test]
    fn messages_are_delivered() {
        let mut world = MobWorld::new("world");
        world.apply_actions(vec![PendingAction::SendMessage {
            player_name: "Steve".into(),
            message: "hello".into(),
        }]);
        assert_eq!(world.chat, vec![("Steve".to_string(), "hello".to_string())]);
    }
}
