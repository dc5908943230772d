//! Built-in feeding data for passive mobs.
//!
//! Maps mob types to the food items the game itself reacts to. Plugins keep
//! their own configured copy; this is what the world simulation uses.

use keepbaby_plugin_api::{EntityType, ItemType};

/// Returns the items that feed / breed a given mob type.
///
/// Returns an empty slice for non-breedable mobs.
pub fn tempt_items(mob_type: EntityType) -> &'static [ItemType] {
    use ItemType::*;
    match mob_type {
        EntityType::Cow | EntityType::Mooshroom | EntityType::Sheep | EntityType::Goat => {
            &[Wheat]
        }
        EntityType::Pig => &[Carrot, Potato, Beetroot],
        EntityType::Chicken => &[
            WheatSeeds,
            BeetrootSeeds,
            MelonSeeds,
            PumpkinSeeds,
            TorchflowerSeeds,
        ],
        EntityType::Rabbit => &[Carrot, GoldenCarrot, Dandelion],
        EntityType::Horse | EntityType::Donkey => &[GoldenCarrot, GoldenApple],
        EntityType::Wolf => &[
            Beef,
            CookedBeef,
            Chicken,
            CookedChicken,
            Porkchop,
            CookedPorkchop,
            Mutton,
            CookedMutton,
            Rabbit,
            CookedRabbit,
            RottenFlesh,
        ],
        EntityType::Cat | EntityType::Ocelot => &[Cod, Salmon],
        EntityType::Llama => &[HayBlock],
        EntityType::Fox => &[SweetBerries, GlowBerries],
        EntityType::Panda => &[Bamboo],
        EntityType::Turtle => &[Seagrass],
        EntityType::Bee => &[Dandelion, Poppy],
        EntityType::Camel => &[Cactus],
        EntityType::Sniffer => &[TorchflowerSeeds],
        EntityType::Strider => &[WarpedFungus],
        EntityType::Armadillo => &[SpiderEye],
        EntityType::Axolotl => &[TropicalFishBucket],
        _ => &[],
    }
}

/// Check if a specific item tempts/breeds a specific mob type.
pub fn is_tempt_item(mob_type: EntityType, item: ItemType) -> bool {
    tempt_items(mob_type).contains(&item)
}
