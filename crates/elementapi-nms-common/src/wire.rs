//! Argument and result shapes for host invocations
//!
//! | Operation | Arguments | Result |
//! |-----------|-----------|--------|
//! | entity_location | `[uuid]` | `{world, x, y, z}` |
//! | set_velocity | `[uuid, x, y, z]` | `null` |
//! | damage_entity (static) | `[uuid, {"source": FIELD}, amount]` | remaining health |
//! | damage_entity (registry) | `[uuid, {"damage_type": key}, amount]` | remaining health |
//! | block_at | `[world, x, y, z]` | block id |
//! | set_block | `[world, x, y, z, block id]` | `null` |
//! | spawn_particle | `[world, particle, x, y, z, count, speed]` | `null` |
//! | read_item_tag (compound) | `[item, "PublicBukkitValues", key]` | string or `null` |
//! | read_item_tag (component) | `[item, "minecraft:custom_data", ["PublicBukkitValues", key]]` | string or `null` |
//! | write_item_tag (compound) | `[item, "PublicBukkitValues", key, value]` | `null` |
//! | write_item_tag (component) | `[item, "minecraft:custom_data", {"PublicBukkitValues": {key: value}}]` | `null` |
//! | read_entity_tag (compound) | `[uuid, "BukkitValues", key]` | string or `null` |
//! | read_entity_tag (value io) | `[uuid, {"child": "BukkitValues", "key": key}]` | string or `null` |
//! | write_entity_tag (compound) | `[uuid, "BukkitValues", key, value]` | `null` |
//! | write_entity_tag (value io) | `[uuid, {"child": "BukkitValues", "key": key, "value": value}]` | `null` |
//! | action_bar | `[uuid, {"text": message}]` | `null` |

use crate::particles;
use crate::profile::{DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout};
use elementapi_nms_api::{
    BlockPos, BlockState, DamageCause, EntityRef, ItemRef, Location, NmsError, NmsResult,
    ParticleSpec, TagKey, Vector, WorldRef,
};
use serde_json::{json, Value};

/// Compound that holds plugin-owned values on Bukkit item stacks
pub const BUKKIT_VALUES: &str = "PublicBukkitValues";

/// Compound that holds plugin-owned values on entities
pub const ENTITY_BUKKIT_VALUES: &str = "BukkitValues";

/// Data component carrying custom item data from 1.20.5 on
pub const CUSTOM_DATA_COMPONENT: &str = "minecraft:custom_data";

pub fn entity(entity: EntityRef) -> Value {
    json!(entity.0.to_string())
}

pub fn velocity_args(target: EntityRef, velocity: Vector) -> Vec<Value> {
    vec![entity(target), json!(velocity.x), json!(velocity.y), json!(velocity.z)]
}

pub fn damage_args(
    layout: DamageLayout,
    target: EntityRef,
    amount: f64,
    cause: DamageCause,
) -> Vec<Value> {
    let source = match layout {
        DamageLayout::StaticSources => json!({ "source": cause.legacy_field() }),
        DamageLayout::SourceRegistry => json!({ "damage_type": cause.registry_key() }),
    };
    vec![entity(target), source, json!(amount)]
}

pub fn block_args(world: &WorldRef, pos: BlockPos) -> Vec<Value> {
    vec![json!(world.name()), json!(pos.x), json!(pos.y), json!(pos.z)]
}

pub fn set_block_args(world: &WorldRef, pos: BlockPos, block: &BlockState) -> Vec<Value> {
    let mut args = block_args(world, pos);
    args.push(json!(block.id()));
    args
}

pub fn particle_args(
    layout: ParticleLayout,
    world: &WorldRef,
    position: Vector,
    particle: &ParticleSpec,
) -> NmsResult<Vec<Value>> {
    let name = match layout {
        ParticleLayout::LegacyConstants => particles::legacy_constant(&particle.kind)?,
        ParticleLayout::ResourceKeys => particles::resource_key(&particle.kind)?,
    };
    Ok(vec![
        json!(world.name()),
        json!(name),
        json!(position.x),
        json!(position.y),
        json!(position.z),
        json!(particle.count),
        json!(particle.speed),
    ])
}

pub fn read_tag_args(layout: ItemTagLayout, item: ItemRef, key: &TagKey) -> Vec<Value> {
    match layout {
        ItemTagLayout::CompoundTag => {
            vec![json!(item.0), json!(BUKKIT_VALUES), json!(key.to_string())]
        }
        ItemTagLayout::CustomDataComponent => vec![
            json!(item.0),
            json!(CUSTOM_DATA_COMPONENT),
            json!([BUKKIT_VALUES, key.to_string()]),
        ],
    }
}

pub fn write_tag_args(
    layout: ItemTagLayout,
    item: ItemRef,
    key: &TagKey,
    value: &str,
) -> Vec<Value> {
    match layout {
        ItemTagLayout::CompoundTag => vec![
            json!(item.0),
            json!(BUKKIT_VALUES),
            json!(key.to_string()),
            json!(value),
        ],
        ItemTagLayout::CustomDataComponent => vec![
            json!(item.0),
            json!(CUSTOM_DATA_COMPONENT),
            json!({ BUKKIT_VALUES: { key.to_string(): value } }),
        ],
    }
}

pub fn read_entity_tag_args(
    layout: EntityTagLayout,
    target: EntityRef,
    key: &TagKey,
) -> Vec<Value> {
    match layout {
        EntityTagLayout::CompoundTag => vec![
            entity(target),
            json!(ENTITY_BUKKIT_VALUES),
            json!(key.to_string()),
        ],
        EntityTagLayout::ValueIo => vec![
            entity(target),
            json!({ "child": ENTITY_BUKKIT_VALUES, "key": key.to_string() }),
        ],
    }
}

pub fn write_entity_tag_args(
    layout: EntityTagLayout,
    target: EntityRef,
    key: &TagKey,
    value: &str,
) -> Vec<Value> {
    match layout {
        EntityTagLayout::CompoundTag => vec![
            entity(target),
            json!(ENTITY_BUKKIT_VALUES),
            json!(key.to_string()),
            json!(value),
        ],
        EntityTagLayout::ValueIo => vec![
            entity(target),
            json!({
                "child": ENTITY_BUKKIT_VALUES,
                "key": key.to_string(),
                "value": value,
            }),
        ],
    }
}

pub fn action_bar_args(player: EntityRef, message: &str) -> Vec<Value> {
    vec![entity(player), json!({ "text": message })]
}

// ============================================================================
// Result Decoding
// ============================================================================

pub fn decode_location(value: Value) -> NmsResult<Location> {
    serde_json::from_value(value).map_err(|e| NmsError::decode("entity_location", e.to_string()))
}

pub fn decode_health(value: Value) -> NmsResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| NmsError::decode("damage_entity", format!("expected number, got {}", value)))
}

pub fn decode_block(value: Value) -> NmsResult<BlockState> {
    match value {
        Value::String(id) => Ok(BlockState(id)),
        other => Err(NmsError::decode(
            "block_at",
            format!("expected block id, got {}", other),
        )),
    }
}

pub fn decode_optional_string(operation: &str, value: Value) -> NmsResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(NmsError::decode(
            operation,
            format!("expected string or null, got {}", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_damage_source_naming_follows_layout() {
        let target = EntityRef(Uuid::nil());
        let legacy = damage_args(DamageLayout::StaticSources, target, 4.0, DamageCause::Magic);
        let modern = damage_args(DamageLayout::SourceRegistry, target, 4.0, DamageCause::Magic);

        assert_eq!(legacy[1], json!({ "source": "MAGIC" }));
        assert_eq!(modern[1], json!({ "damage_type": "minecraft:magic" }));
        assert_eq!(legacy[2], modern[2]);
    }

    #[test]
    fn test_item_tag_layouts() {
        let key = TagKey::new("elementapi", "element_id").unwrap();

        let compound = write_tag_args(ItemTagLayout::CompoundTag, ItemRef(7), &key, "FIRE");
        assert_eq!(
            compound,
            vec![json!(7), json!("PublicBukkitValues"), json!("elementapi:element_id"), json!("FIRE")]
        );

        let component = write_tag_args(ItemTagLayout::CustomDataComponent, ItemRef(7), &key, "FIRE");
        assert_eq!(component[1], json!("minecraft:custom_data"));
        assert_eq!(
            component[2],
            json!({ "PublicBukkitValues": { "elementapi:element_id": "FIRE" } })
        );
    }

    #[test]
    fn test_entity_tag_layouts() {
        let key = TagKey::new("elementapi", "element_id").unwrap();
        let target = EntityRef(Uuid::nil());
        let uuid = json!(Uuid::nil().to_string());

        assert_eq!(
            read_entity_tag_args(EntityTagLayout::CompoundTag, target, &key),
            vec![uuid.clone(), json!("BukkitValues"), json!("elementapi:element_id")]
        );
        assert_eq!(
            write_entity_tag_args(EntityTagLayout::ValueIo, target, &key, "WATER"),
            vec![
                uuid,
                json!({
                    "child": "BukkitValues",
                    "key": "elementapi:element_id",
                    "value": "WATER",
                })
            ]
        );
    }

    #[test]
    fn test_decode_rejects_unexpected_shapes() {
        assert!(decode_health(json!("ten")).is_err());
        assert!(decode_block(json!(3)).is_err());
        assert_eq!(decode_optional_string("read_item_tag", Value::Null).unwrap(), None);
        assert!(decode_optional_string("read_item_tag", json!({})).is_err());
        assert!(decode_location(json!({ "world": "world" })).is_err());
    }
}
