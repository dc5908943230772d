//! Fixed enumerations of entity and item kinds known to the host.
//!
//! Identifiers follow the host's namespaced form (`minecraft:cow`). Parsing is
//! case-insensitive and the `minecraft:` namespace is optional.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const NAMESPACE: &str = "minecraft:";

/// Failed to map a string onto one of the fixed kind enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKindError {
    #[error("unknown entity type: {0}")]
    UnknownEntity(String),

    #[error("unknown item type: {0}")]
    UnknownItem(String),
}

/// Normalize a user-supplied identifier: trim, lowercase, drop the namespace.
fn normalize(raw: &str) -> String {
    let lower = raw.trim().to_ascii_lowercase();
    match lower.strip_prefix(NAMESPACE) {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}

// ─── EntityType ──────────────────────────────────────────────────────────────

/// Every creature kind the host can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityType {
    Armadillo,
    Axolotl,
    Bee,
    Camel,
    Cat,
    Chicken,
    Cow,
    Donkey,
    Fox,
    Goat,
    Horse,
    Llama,
    Mooshroom,
    Mule,
    Ocelot,
    Panda,
    Parrot,
    Pig,
    PolarBear,
    Rabbit,
    Sheep,
    Sniffer,
    Strider,
    Turtle,
    Villager,
    Wolf,
    Creeper,
    Enderman,
    Skeleton,
    Spider,
    Zombie,
}

impl EntityType {
    pub const ALL: &'static [EntityType] = &[
        EntityType::Armadillo,
        EntityType::Axolotl,
        EntityType::Bee,
        EntityType::Camel,
        EntityType::Cat,
        EntityType::Chicken,
        EntityType::Cow,
        EntityType::Donkey,
        EntityType::Fox,
        EntityType::Goat,
        EntityType::Horse,
        EntityType::Llama,
        EntityType::Mooshroom,
        EntityType::Mule,
        EntityType::Ocelot,
        EntityType::Panda,
        EntityType::Parrot,
        EntityType::Pig,
        EntityType::PolarBear,
        EntityType::Rabbit,
        EntityType::Sheep,
        EntityType::Sniffer,
        EntityType::Strider,
        EntityType::Turtle,
        EntityType::Villager,
        EntityType::Wolf,
        EntityType::Creeper,
        EntityType::Enderman,
        EntityType::Skeleton,
        EntityType::Spider,
        EntityType::Zombie,
    ];

    /// Identifier without namespace, e.g. `"polar_bear"`.
    pub fn name(self) -> &'static str {
        match self {
            EntityType::Armadillo => "armadillo",
            EntityType::Axolotl => "axolotl",
            EntityType::Bee => "bee",
            EntityType::Camel => "camel",
            EntityType::Cat => "cat",
            EntityType::Chicken => "chicken",
            EntityType::Cow => "cow",
            EntityType::Donkey => "donkey",
            EntityType::Fox => "fox",
            EntityType::Goat => "goat",
            EntityType::Horse => "horse",
            EntityType::Llama => "llama",
            EntityType::Mooshroom => "mooshroom",
            EntityType::Mule => "mule",
            EntityType::Ocelot => "ocelot",
            EntityType::Panda => "panda",
            EntityType::Parrot => "parrot",
            EntityType::Pig => "pig",
            EntityType::PolarBear => "polar_bear",
            EntityType::Rabbit => "rabbit",
            EntityType::Sheep => "sheep",
            EntityType::Sniffer => "sniffer",
            EntityType::Strider => "strider",
            EntityType::Turtle => "turtle",
            EntityType::Villager => "villager",
            EntityType::Wolf => "wolf",
            EntityType::Creeper => "creeper",
            EntityType::Enderman => "enderman",
            EntityType::Skeleton => "skeleton",
            EntityType::Spider => "spider",
            EntityType::Zombie => "zombie",
        }
    }

    /// Namespaced identifier, e.g. `"minecraft:cow"`.
    pub fn identifier(self) -> String {
        format!("{NAMESPACE}{}", self.name())
    }

    /// Whether creatures of this kind have a juvenile growth stage.
    pub fn is_ageable(self) -> bool {
        !matches!(
            self,
            EntityType::Creeper
                | EntityType::Enderman
                | EntityType::Skeleton
                | EntityType::Spider
                | EntityType::Zombie
        )
    }

    /// Whether creatures of this kind can be tamed by a player.
    pub fn is_tameable(self) -> bool {
        matches!(
            self,
            EntityType::Cat
                | EntityType::Camel
                | EntityType::Donkey
                | EntityType::Horse
                | EntityType::Llama
                | EntityType::Mule
                | EntityType::Parrot
                | EntityType::Wolf
        )
    }

    /// Whether creatures of this kind carry a coat pattern. Ocelots have had a
    /// single look since cats became their own kind.
    pub fn has_coat_pattern(self) -> bool {
        matches!(self, EntityType::Cat)
    }
}

impl FromStr for EntityType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize(s);
        // Legacy server configs still spell the mooshroom this way.
        if name == "mushroom_cow" {
            return Ok(EntityType::Mooshroom);
        }
        EntityType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| ParseKindError::UnknownEntity(s.to_string()))
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_ascii_uppercase())
    }
}

// ─── ItemType ────────────────────────────────────────────────────────────────

/// Item kinds a player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemType {
    Air,
    NameTag,
    Apple,
    Bamboo,
    Beef,
    Beetroot,
    BeetrootSeeds,
    Bone,
    Bread,
    Cactus,
    Carrot,
    Chicken,
    Cod,
    CookedBeef,
    CookedChicken,
    CookedMutton,
    CookedPorkchop,
    CookedRabbit,
    Dandelion,
    GlowBerries,
    GoldenApple,
    GoldenCarrot,
    HayBlock,
    Lead,
    MelonSeeds,
    Mutton,
    Poppy,
    Porkchop,
    Potato,
    PumpkinSeeds,
    Rabbit,
    RottenFlesh,
    Saddle,
    Salmon,
    Seagrass,
    SpiderEye,
    Stick,
    SweetBerries,
    TorchflowerSeeds,
    TropicalFishBucket,
    WarpedFungus,
    Wheat,
    WheatSeeds,
}

impl ItemType {
    pub const ALL: &'static [ItemType] = &[
        ItemType::Air,
        ItemType::NameTag,
        ItemType::Apple,
        ItemType::Bamboo,
        ItemType::Beef,
        ItemType::Beetroot,
        ItemType::BeetrootSeeds,
        ItemType::Bone,
        ItemType::Bread,
        ItemType::Cactus,
        ItemType::Carrot,
        ItemType::Chicken,
        ItemType::Cod,
        ItemType::CookedBeef,
        ItemType::CookedChicken,
        ItemType::CookedMutton,
        ItemType::CookedPorkchop,
        ItemType::CookedRabbit,
        ItemType::Dandelion,
        ItemType::GlowBerries,
        ItemType::GoldenApple,
        ItemType::GoldenCarrot,
        ItemType::HayBlock,
        ItemType::Lead,
        ItemType::MelonSeeds,
        ItemType::Mutton,
        ItemType::Poppy,
        ItemType::Porkchop,
        ItemType::Potato,
        ItemType::PumpkinSeeds,
        ItemType::Rabbit,
        ItemType::RottenFlesh,
        ItemType::Saddle,
        ItemType::Salmon,
        ItemType::Seagrass,
        ItemType::SpiderEye,
        ItemType::Stick,
        ItemType::SweetBerries,
        ItemType::TorchflowerSeeds,
        ItemType::TropicalFishBucket,
        ItemType::WarpedFungus,
        ItemType::Wheat,
        ItemType::WheatSeeds,
    ];

    /// Identifier without namespace, e.g. `"name_tag"`.
    pub fn name(self) -> &'static str {
        match self {
            ItemType::Air => "air",
            ItemType::NameTag => "name_tag",
            ItemType::Apple => "apple",
            ItemType::Bamboo => "bamboo",
            ItemType::Beef => "beef",
            ItemType::Beetroot => "beetroot",
            ItemType::BeetrootSeeds => "beetroot_seeds",
            ItemType::Bone => "bone",
            ItemType::Bread => "bread",
            ItemType::Cactus => "cactus",
            ItemType::Carrot => "carrot",
            ItemType::Chicken => "chicken",
            ItemType::Cod => "cod",
            ItemType::CookedBeef => "cooked_beef",
            ItemType::CookedChicken => "cooked_chicken",
            ItemType::CookedMutton => "cooked_mutton",
            ItemType::CookedPorkchop => "cooked_porkchop",
            ItemType::CookedRabbit => "cooked_rabbit",
            ItemType::Dandelion => "dandelion",
            ItemType::GlowBerries => "glow_berries",
            ItemType::GoldenApple => "golden_apple",
            ItemType::GoldenCarrot => "golden_carrot",
            ItemType::HayBlock => "hay_block",
            ItemType::Lead => "lead",
            ItemType::MelonSeeds => "melon_seeds",
            ItemType::Mutton => "mutton",
            ItemType::Poppy => "poppy",
            ItemType::Porkchop => "porkchop",
            ItemType::Potato => "potato",
            ItemType::PumpkinSeeds => "pumpkin_seeds",
            ItemType::Rabbit => "rabbit",
            ItemType::RottenFlesh => "rotten_flesh",
            ItemType::Saddle => "saddle",
            ItemType::Salmon => "salmon",
            ItemType::Seagrass => "seagrass",
            ItemType::SpiderEye => "spider_eye",
            ItemType::Stick => "stick",
            ItemType::SweetBerries => "sweet_berries",
            ItemType::TorchflowerSeeds => "torchflower_seeds",
            ItemType::TropicalFishBucket => "tropical_fish_bucket",
            ItemType::WarpedFungus => "warped_fungus",
            ItemType::Wheat => "wheat",
            ItemType::WheatSeeds => "wheat_seeds",
        }
    }

    /// Namespaced identifier, e.g. `"minecraft:wheat"`.
    pub fn identifier(self) -> String {
        format!("{NAMESPACE}{}", self.name())
    }
}

impl FromStr for ItemType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize(s);
        ItemType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| ParseKindError::UnknownItem(s.to_string()))
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_ascii_uppercase())
    }
}
