//! Version profiles: the data that distinguishes one release's internals from another

use elementapi_nms_api::NmsVersion;

/// Host symbols an adapter binds, one per capability operation.
///
/// Symbols use `<fully.qualified.Class>#<member>` notation. The anchor is
/// resolved eagerly when the adapter is constructed; everything else is
/// resolved on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolTable {
    /// Class whose presence proves the host matches this profile
    pub anchor: &'static str,
    pub entity_location: &'static str,
    pub set_velocity: &'static str,
    pub damage_entity: &'static str,
    pub block_at: &'static str,
    pub set_block: &'static str,
    pub spawn_particle: &'static str,
    pub read_item_tag: &'static str,
    pub write_item_tag: &'static str,
    pub read_entity_tag: &'static str,
    pub write_entity_tag: &'static str,
    pub action_bar: &'static str,
}

impl SymbolTable {
    /// Every symbol in the table, anchor first
    pub fn all(&self) -> [&'static str; 12] {
        [
            self.anchor,
            self.entity_location,
            self.set_velocity,
            self.damage_entity,
            self.block_at,
            self.set_block,
            self.spawn_particle,
            self.read_item_tag,
            self.write_item_tag,
            self.read_entity_tag,
            self.write_entity_tag,
            self.action_bar,
        ]
    }
}

/// Where plugin-owned item data lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTagLayout {
    /// `PublicBukkitValues` compound inside the item's NBT tag (up to 1.20.4)
    CompoundTag,
    /// `minecraft:custom_data` data component (1.20.5 and later)
    CustomDataComponent,
}

/// How plugin-owned entity data is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityTagLayout {
    /// `BukkitValues` compound in the entity's saved NBT (up to 1.21.5)
    CompoundTag,
    /// `BukkitValues` child of the typed value input/output (1.21.6 and later)
    ValueIo,
}

/// How a damage source is named when hurting an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageLayout {
    /// Static `DamageSource` fields (before 1.19.4)
    StaticSources,
    /// Keys in the damage-type registry (1.19.4 and later)
    SourceRegistry,
}

/// How particle types are named on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleLayout {
    /// Bukkit enum constant names such as `REDSTONE` (up to 1.20.4)
    LegacyConstants,
    /// Namespaced resource ids such as `minecraft:dust` (1.20.5 and later)
    ResourceKeys,
}

/// Compile-time description of one supported release.
pub trait VersionProfile: 'static {
    const VERSION: NmsVersion;
    const SYMBOLS: SymbolTable;
    const ITEM_TAGS: ItemTagLayout;
    const ENTITY_TAGS: EntityTagLayout;
    const DAMAGE: DamageLayout;
    const PARTICLES: ParticleLayout;
}
