//! The capability interface every version adapter implements

use crate::error::{NmsError, NmsResult};
use crate::version::NmsVersion;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Value Types
// ============================================================================

/// Live entity, identified by its UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef(pub Uuid);

/// Item stack handle owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef(pub u64);

/// Loaded world, identified by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldRef(pub String);

impl WorldRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Integer block coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Three-component double vector, used for positions and motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Position of an entity in a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Namespaced block id, e.g. `minecraft:stone`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockState(pub String);

impl BlockState {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Particle emission request. `kind` is a vanilla resource id (`minecraft:flame`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSpec {
    pub kind: String,
    pub count: u32,
    pub speed: f64,
}

impl ParticleSpec {
    pub fn new(kind: impl Into<String>, count: u32) -> Self {
        Self {
            kind: kind.into(),
            count,
            speed: 0.0,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }
}

/// Plugin-owned key for item and entity tags, rendered `namespace:key`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagKey {
    pub namespace: String,
    pub key: String,
}

impl TagKey {
    /// Namespaces and keys are lower-cased, matching Bukkit's `NamespacedKey`.
    pub fn new(namespace: &str, key: &str) -> NmsResult<Self> {
        let valid = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        };
        let namespace = namespace.to_ascii_lowercase();
        let key = key.to_ascii_lowercase();
        if !valid(&namespace) || !valid(&key) {
            return Err(NmsError::invalid_input(format!(
                "invalid tag key '{}:{}'",
                namespace, key
            )));
        }
        Ok(Self { namespace, key })
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

/// Damage causes the capability layer can attribute damage to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageCause {
    Generic,
    Magic,
    Fire,
    Lightning,
    Freeze,
}

impl DamageCause {
    pub const ALL: [DamageCause; 5] = [
        DamageCause::Generic,
        DamageCause::Magic,
        DamageCause::Fire,
        DamageCause::Lightning,
        DamageCause::Freeze,
    ];

    /// Key in the damage-type registry (1.19.4+)
    pub fn registry_key(&self) -> &'static str {
        match self {
            DamageCause::Generic => "minecraft:generic",
            DamageCause::Magic => "minecraft:magic",
            DamageCause::Fire => "minecraft:on_fire",
            DamageCause::Lightning => "minecraft:lightning_bolt",
            DamageCause::Freeze => "minecraft:freeze",
        }
    }

    /// Static `DamageSource` field name (before 1.19.4)
    pub fn legacy_field(&self) -> &'static str {
        match self {
            DamageCause::Generic => "GENERIC",
            DamageCause::Magic => "MAGIC",
            DamageCause::Fire => "ON_FIRE",
            DamageCause::Lightning => "LIGHTNING_BOLT",
            DamageCause::Freeze => "FREEZE",
        }
    }
}

// ============================================================================
// Capability Trait
// ============================================================================

/// Server-internals capabilities, stable across every supported version.
///
/// One implementation exists per supported release. Implementations must be
/// behaviorally equivalent: the same call against equivalent host state gives
/// the same result on every version. Adding an operation means adding it to
/// every adapter or giving it a default here.
pub trait ElementNms: Send + Sync {
    /// Version of the adapter backing this instance
    fn version(&self) -> NmsVersion;

    /// Current location of a live entity
    fn entity_location(&self, entity: EntityRef) -> NmsResult<Location>;

    /// Replace an entity's motion vector
    fn set_velocity(&self, entity: EntityRef, velocity: Vector) -> NmsResult<()>;

    /// Apply damage and return the entity's remaining health
    fn damage_entity(&self, entity: EntityRef, amount: f64, cause: DamageCause)
        -> NmsResult<f64>;

    /// Block at a position
    fn block_at(&self, world: &WorldRef, pos: BlockPos) -> NmsResult<BlockState>;

    /// Replace the block at a position
    fn set_block(&self, world: &WorldRef, pos: BlockPos, block: &BlockState) -> NmsResult<()>;

    /// Emit particles at a position
    fn spawn_particle(
        &self,
        world: &WorldRef,
        position: Vector,
        particle: &ParticleSpec,
    ) -> NmsResult<()>;

    /// Read a plugin-owned string tag from an item stack
    fn read_item_tag(&self, item: ItemRef, key: &TagKey) -> NmsResult<Option<String>>;

    /// Write a plugin-owned string tag onto an item stack
    fn write_item_tag(&self, item: ItemRef, key: &TagKey, value: &str) -> NmsResult<()>;

    /// Read a plugin-owned string tag from a live entity's persistent data
    fn read_entity_tag(&self, entity: EntityRef, key: &TagKey) -> NmsResult<Option<String>>;

    /// Write a plugin-owned string tag into a live entity's persistent data
    fn write_entity_tag(&self, entity: EntityRef, key: &TagKey, value: &str) -> NmsResult<()>;

    /// Show a message above a player's hotbar
    ///
    /// # Default Implementation
    ///
    /// Returns `NotSupported`. Adapters override this when the host can do it.
    fn send_action_bar(&self, _player: EntityRef, _message: &str) -> NmsResult<()> {
        Err(NmsError::not_supported("send_action_bar"))
    }
}
