//! Item archetypes - pickups that share one generic spawn path

use bitflags::bitflags;
use serde::Serialize;

use crate::entity::ItemId;

bitflags! {
    /// Item categories
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
    #[serde(transparent)]
    pub struct ItemFlags: u32 {
        const WEAPON    = 1 << 0;
        const AMMO      = 1 << 1;
        const ARMOR     = 1 << 2;
        /// Not removed on pickup in cooperative play
        const STAY_COOP = 1 << 3;
        const KEY       = 1 << 4;
        const POWERUP   = 1 << 5;
    }
}

/// One item archetype
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDef {
    /// Classname that spawns this item; `None` for items that are only given, never placed
    pub classname: Option<String>,
    /// Name shown on pickup
    pub pickup_name: String,
    pub world_model: Option<String>,
    pub flags: ItemFlags,
    /// Amount granted or used per shot, depending on the item
    pub quantity: i32,
}

impl ItemDef {
    /// Create a placeable item
    pub fn new(classname: &str, pickup_name: &str) -> Self {
        Self {
            classname: Some(classname.to_string()),
            pickup_name: pickup_name.to_string(),
            world_model: None,
            flags: ItemFlags::empty(),
            quantity: 0,
        }
    }

    /// Set the model shown in the world
    pub fn with_model(mut self, model: &str) -> Self {
        self.world_model = Some(model.to_string());
        self
    }

    /// Set the category flags
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the quantity
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Ordered item list; ids are positions in the list
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: Vec<ItemDef>,
}

impl ItemRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, returning its id
    pub fn register(&mut self, item: ItemDef) -> ItemId {
        self.items.push(item);
        ItemId(self.items.len() - 1)
    }

    /// Look up an item by id
    pub fn get(&self, id: ItemId) -> Option<&ItemDef> {
        self.items.get(id.0)
    }

    /// Find the item spawned by `classname` (exact, case-sensitive, first match)
    pub fn find(&self, classname: &str) -> Option<(ItemId, &ItemDef)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.classname.as_deref() == Some(classname))
            .map(|(i, item)| (ItemId(i), item))
    }

    /// Find an item by pickup name (case-insensitive)
    pub fn find_by_pickup_name(&self, name: &str) -> Option<(ItemId, &ItemDef)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.pickup_name.eq_ignore_ascii_case(name))
            .map(|(i, item)| (ItemId(i), item))
    }

    /// Iterate items with their ids
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &ItemDef)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The standard item list
    pub fn standard() -> Self {
        use ItemFlags as F;

        let weapon = F::WEAPON | F::STAY_COOP;
        let key = F::STAY_COOP | F::KEY;

        let mut registry = Self::new();
        let items = [
            ItemDef::new("item_armor_body", "Body Armor")
                .with_model("models/items/armor/body/tris.md2")
                .with_flags(F::ARMOR),
            ItemDef::new("item_armor_combat", "Combat Armor")
                .with_model("models/items/armor/combat/tris.md2")
                .with_flags(F::ARMOR),
            ItemDef::new("item_armor_jacket", "Jacket Armor")
                .with_model("models/items/armor/jacket/tris.md2")
                .with_flags(F::ARMOR),
            ItemDef::new("item_armor_shard", "Armor Shard")
                .with_model("models/items/armor/shard/tris.md2")
                .with_flags(F::ARMOR),
            ItemDef::new("item_power_screen", "Power Screen")
                .with_model("models/items/armor/screen/tris.md2")
                .with_flags(F::ARMOR)
                .with_quantity(60),
            ItemDef::new("item_power_shield", "Power Shield")
                .with_model("models/items/armor/shield/tris.md2")
                .with_flags(F::ARMOR)
                .with_quantity(60),
            ItemDef::new("weapon_blaster", "Blaster").with_flags(weapon),
            ItemDef::new("weapon_shotgun", "Shotgun")
                .with_model("models/weapons/g_shotg/tris.md2")
                .with_flags(weapon)
                .with_quantity(1),
            ItemDef::new("weapon_supershotgun", "Super Shotgun")
                .with_model("models/weapons/g_shotg2/tris.md2")
                .with_flags(weapon)
                .with_quantity(2),
            ItemDef::new("weapon_machinegun", "Machinegun")
                .with_model("models/weapons/g_machn/tris.md2")
                .with_flags(weapon)
                .with_quantity(1),
            ItemDef::new("weapon_chaingun", "Chaingun")
                .with_model("models/weapons/g_chain/tris.md2")
                .with_flags(weapon)
                .with_quantity(1),
            ItemDef::new("ammo_grenades", "Grenades")
                .with_model("models/items/ammo/grenades/medium/tris.md2")
                .with_flags(F::AMMO | F::WEAPON)
                .with_quantity(5),
            ItemDef::new("ammo_trap", "Trap")
                .with_model("models/weapons/g_trap/tris.md2")
                .with_flags(F::AMMO | F::WEAPON)
                .with_quantity(1),
            ItemDef::new("weapon_grenadelauncher", "Grenade Launcher")
                .with_model("models/weapons/g_launch/tris.md2")
                .with_flags(weapon)
                .with_quantity(1),
            ItemDef::new("weapon_rocketlauncher", "Rocket Launcher")
                .with_model("models/weapons/g_rocket/tris.md2")
                .with_flags(weapon)
                .with_quantity(1),
            ItemDef::new("weapon_hyperblaster", "HyperBlaster")
                .with_model("models/weapons/g_hyperb/tris.md2")
                .with_flags(weapon)
                .with_quantity(1),
            ItemDef::new("weapon_boomer", "Ionripper")
                .with_model("models/weapons/g_boom/tris.md2")
                .with_flags(weapon)
                .with_quantity(2),
            ItemDef::new("weapon_railgun", "Railgun")
                .with_model("models/weapons/g_rail/tris.md2")
                .with_flags(weapon)
                .with_quantity(1),
            ItemDef::new("weapon_phalanx", "Phalanx")
                .with_model("models/weapons/g_shotx/tris.md2")
                .with_flags(weapon)
                .with_quantity(1),
            ItemDef::new("weapon_bfg", "BFG10K")
                .with_model("models/weapons/g_bfg/tris.md2")
                .with_flags(weapon)
                .with_quantity(50),
            ItemDef::new("ammo_shells", "Shells")
                .with_model("models/items/ammo/shells/medium/tris.md2")
                .with_flags(F::AMMO)
                .with_quantity(10),
            ItemDef::new("ammo_bullets", "Bullets")
                .with_model("models/items/ammo/bullets/medium/tris.md2")
                .with_flags(F::AMMO)
                .with_quantity(50),
            ItemDef::new("ammo_cells", "Cells")
                .with_model("models/items/ammo/cells/medium/tris.md2")
                .with_flags(F::AMMO)
                .with_quantity(50),
            ItemDef::new("ammo_rockets", "Rockets")
                .with_model("models/items/ammo/rockets/medium/tris.md2")
                .with_flags(F::AMMO)
                .with_quantity(5),
            ItemDef::new("ammo_slugs", "Slugs")
                .with_model("models/items/ammo/slugs/medium/tris.md2")
                .with_flags(F::AMMO)
                .with_quantity(10),
            ItemDef::new("ammo_magslug", "Mag Slug")
                .with_model("models/objects/ammo/tris.md2")
                .with_flags(F::AMMO)
                .with_quantity(10),
            ItemDef::new("item_quad", "Quad Damage")
                .with_model("models/items/quaddama/tris.md2")
                .with_flags(F::POWERUP)
                .with_quantity(60),
            ItemDef::new("item_quadfire", "DualFire Damage")
                .with_model("models/items/quadfire/tris.md2")
                .with_flags(F::POWERUP)
                .with_quantity(60),
            ItemDef::new("item_invulnerability", "Invulnerability")
                .with_model("models/items/invulner/tris.md2")
                .with_flags(F::POWERUP)
                .with_quantity(300),
            ItemDef::new("item_silencer", "Silencer")
                .with_model("models/items/silencer/tris.md2")
                .with_flags(F::POWERUP)
                .with_quantity(60),
            ItemDef::new("item_breather", "Rebreather")
                .with_model("models/items/breather/tris.md2")
                .with_flags(F::STAY_COOP | F::POWERUP)
                .with_quantity(60),
            ItemDef::new("item_enviro", "Environment Suit")
                .with_model("models/items/enviro/tris.md2")
                .with_flags(F::STAY_COOP | F::POWERUP)
                .with_quantity(60),
            ItemDef::new("item_ancient_head", "Ancient Head")
                .with_model("models/items/c_head/tris.md2")
                .with_quantity(60),
            ItemDef::new("item_adrenaline", "Adrenaline")
                .with_model("models/items/adrenal/tris.md2")
                .with_quantity(60),
            ItemDef::new("item_bandolier", "Bandolier")
                .with_model("models/items/band/tris.md2")
                .with_quantity(60),
            ItemDef::new("item_pack", "Ammo Pack")
                .with_model("models/items/pack/tris.md2")
                .with_quantity(180),
            ItemDef::new("key_data_cd", "Data CD")
                .with_model("models/items/keys/data_cd/tris.md2")
                .with_flags(key),
            ItemDef::new("key_power_cube", "Power Cube")
                .with_model("models/items/keys/power/tris.md2")
                .with_flags(key),
            ItemDef::new("key_pyramid", "Pyramid Key")
                .with_model("models/items/keys/pyramid/tris.md2")
                .with_flags(key),
            ItemDef::new("key_data_spinner", "Data Spinner")
                .with_model("models/items/keys/spinner/tris.md2")
                .with_flags(key),
            ItemDef::new("key_pass", "Security Pass")
                .with_model("models/items/keys/pass/tris.md2")
                .with_flags(key),
            ItemDef::new("key_blue_key", "Blue Key")
                .with_model("models/items/keys/key/tris.md2")
                .with_flags(key),
            ItemDef::new("key_red_key", "Red Key")
                .with_model("models/items/keys/red_key/tris.md2")
                .with_flags(key),
            ItemDef::new("key_green_key", "Green Key")
                .with_model("models/items/keys/green_key/tris.md2")
                .with_flags(key),
            ItemDef::new("key_commander_head", "Commander's Head")
                .with_model("models/monsters/commandr/head/tris.md2")
                .with_flags(key),
            ItemDef::new("key_airstrike_target", "Airstrike Marker")
                .with_model("models/items/keys/target/tris.md2")
                .with_flags(key),
        ];
        for item in items {
            registry.register(item);
        }

        // Health is granted by the item_health* spawn functions, never placed directly
        registry.register(ItemDef {
            classname: None,
            pickup_name: "Health".to_string(),
            world_model: None,
            flags: ItemFlags::empty(),
            quantity: 0,
        });

        registry
    }
}
