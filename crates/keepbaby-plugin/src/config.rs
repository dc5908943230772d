//! Breeding-item configuration: which items each creature type eats to breed.

use std::collections::{HashMap, HashSet};

use keepbaby_plugin_api::{EntityType, ItemType};
use serde_json::{json, Value};
use thiserror::Error;

/// Config section holding the breeding-item lists.
pub const BREEDING_ITEMS_KEY: &str = "breeding-items";

/// A problem found while reading the plugin config. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid entity type {0} specified, skipped.")]
    InvalidEntityType(String),
}

/// Creature type to the set of items that breed it.
///
/// Built once from config and never mutated afterwards. Every stored set is
/// non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedingTable {
    items: HashMap<EntityType, HashSet<ItemType>>,
}

impl BreedingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Breeding items for `entity_type`, if any are configured.
    pub fn get(&self, entity_type: EntityType) -> Option<&HashSet<ItemType>> {
        self.items.get(&entity_type)
    }

    pub fn is_breeding_item(&self, entity_type: EntityType, item: ItemType) -> bool {
        self.get(entity_type).is_some_and(|set| set.contains(&item))
    }

    /// Number of creature types with at least one breeding item.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Outcome of reading the breeding-item section.
#[derive(Debug, Clone, Default)]
pub struct BreedingLoad {
    pub table: BreedingTable,
    /// One entry per skipped creature-type key.
    pub errors: Vec<ConfigError>,
}

/// Build the breeding table from the plugin config.
///
/// Unknown creature-type keys are skipped and reported. Unknown item names
/// are dropped without a report. A missing or malformed section yields an
/// empty table.
pub fn load_breeding_table(config: &Value) -> BreedingLoad {
    let mut load = BreedingLoad::default();
    let Some(section) = config.get(BREEDING_ITEMS_KEY).and_then(Value::as_object) else {
        return load;
    };

    for (key, value) in section {
        let entity_type = match key.parse::<EntityType>() {
            Ok(t) => t,
            Err(_) => {
                load.errors.push(ConfigError::InvalidEntityType(key.clone()));
                continue;
            }
        };

        let food: HashSet<ItemType> = value
            .as_array()
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .filter_map(|name| name.parse::<ItemType>().ok())
                    .collect()
            })
            .unwrap_or_default();

        if !food.is_empty() {
            load.table.items.insert(entity_type, food);
        }
    }

    load
}

/// Vanilla breeding foods, written to `config.json` on first run.
pub fn default_config() -> Value {
    json!({
        BREEDING_ITEMS_KEY: {
            "armadillo": ["spider_eye"],
            "axolotl": ["tropical_fish_bucket"],
            "bee": ["dandelion", "poppy"],
            "camel": ["cactus"],
            "cat": ["cod", "salmon"],
            "chicken": [
                "wheat_seeds",
                "beetroot_seeds",
                "melon_seeds",
                "pumpkin_seeds",
                "torchflower_seeds"
            ],
            "cow": ["wheat"],
            "donkey": ["golden_carrot", "golden_apple"],
            "fox": ["sweet_berries", "glow_berries"],
            "goat": ["wheat"],
            "horse": ["golden_carrot", "golden_apple"],
            "llama": ["hay_block"],
            "mooshroom": ["wheat"],
            "ocelot": ["cod", "salmon"],
            "panda": ["bamboo"],
            "pig": ["carrot", "potato", "beetroot"],
            "rabbit": ["carrot", "golden_carrot", "dandelion"],
            "sheep": ["wheat"],
            "sniffer": ["torchflower_seeds"],
            "strider": ["warped_fungus"],
            "turtle": ["seagrass"],
            "wolf": [
                "beef", "cooked_beef", "chicken", "cooked_chicken", "porkchop",
                "cooked_porkchop", "mutton", "cooked_mutton", "rabbit",
                "cooked_rabbit", "rotten_flesh"
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_valid_entries() {
        let config = json!({
            "breeding-items": {
                "cow": ["wheat"],
                "PIG": ["CARROT", "potato"]
            }
        });
        let load = load_breeding_table(&config);
        assert!(load.errors.is_empty());
        assert_eq!(load.table.len(), 2);
        assert!(load.table.is_breeding_item(EntityType::Cow, ItemType::Wheat));
        assert!(load.table.is_breeding_item(EntityType::Pig, ItemType::Carrot));
        assert!(load.table.is_breeding_item(EntityType::Pig, ItemType::Potato));
        assert!(!load.table.is_breeding_item(EntityType::Pig, ItemType::Wheat));
    }

    #[test]
    fn invalid_entity_key_skipped_with_diagnostic() {
        let config = json!({
            "breeding-items": {
                "cow": ["wheat"],
                "unicorn": ["golden_apple"],
                "sheep": ["wheat"]
            }
        });
        let load = load_breeding_table(&config);
        assert_eq!(
            load.errors,
            vec![ConfigError::InvalidEntityType("unicorn".into())]
        );
        assert_eq!(load.table.len(), 2);
        assert!(load.table.get(EntityType::Cow).is_some());
        assert!(load.table.get(EntityType::Sheep).is_some());
    }

    #[test]
    fn invalid_items_dropped_silently() {
        let config = json!({
            "breeding-items": {
                "rabbit": ["carrot", "moon_cheese", "dandelion", 42, null]
            }
        });
        let load = load_breeding_table(&config);
        assert!(load.errors.is_empty());
        let set = load.table.get(EntityType::Rabbit).unwrap();
        let expected: HashSet<ItemType> = [ItemType::Carrot, ItemType::Dandelion].into();
        assert_eq!(set, &expected);
    }

    #[test]
    fn entry_without_valid_items_is_not_stored() {
        let config = json!({
            "breeding-items": {
                "cow": ["moon_cheese"],
                "pig": [],
                "sheep": "wheat"
            }
        });
        let load = load_breeding_table(&config);
        assert!(load.errors.is_empty());
        assert!(load.table.is_empty());
        assert!(load.table.get(EntityType::Cow).is_none());
    }

    #[test]
    fn missing_section_is_empty() {
        let load = load_breeding_table(&json!({}));
        assert!(load.table.is_empty());
        assert!(load.errors.is_empty());

        let load = load_breeding_table(&json!({ "breeding-items": "nope" }));
        assert!(load.table.is_empty());
        assert!(load.errors.is_empty());
    }

    #[test]
    fn duplicate_items_collapse() {
        let config = json!({ "breeding-items": { "cow": ["wheat", "WHEAT", "minecraft:wheat"] } });
        let load = load_breeding_table(&config);
        assert_eq!(load.table.get(EntityType::Cow).unwrap().len(), 1);
    }

    #[test]
    fn default_config_loads_cleanly() {
        let load = load_breeding_table(&default_config());
        assert!(load.errors.is_empty());
        assert!(load.table.is_breeding_item(EntityType::Cow, ItemType::Wheat));
        assert!(load.table.is_breeding_item(EntityType::Wolf, ItemType::RottenFlesh));
        assert!(load.table.is_breeding_item(EntityType::Chicken, ItemType::PumpkinSeeds));
        assert!(!load.table.is_breeding_item(EntityType::Zombie, ItemType::Wheat));
        // every configured list survived parsing in full
        let raw = default_config();
        let section = raw[BREEDING_ITEMS_KEY].as_object().unwrap();
        assert_eq!(load.table.len(), section.len());
        for (key, list) in section {
            let t: EntityType = key.parse().unwrap();
            assert_eq!(
                load.table.get(t).unwrap().len(),
                list.as_array().unwrap().len(),
                "{key}"
            );
        }
    }

    #[test]
    fn diagnostic_message() {
        let err = ConfigError::InvalidEntityType("unicorn".into());
        assert_eq!(err.to_string(), "Invalid entity type unicorn specified, skipped.");
    }
}
