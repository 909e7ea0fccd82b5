//! Particle naming across the 1.20.5 rename

use elementapi_nms_api::{NmsError, NmsResult};

/// Vanilla ids whose pre-1.20.5 Bukkit constant is not simply the upper-cased path.
const LEGACY_RENAMES: &[(&str, &str)] = &[
    ("angry_villager", "VILLAGER_ANGRY"),
    ("bubble", "WATER_BUBBLE"),
    ("dripping_lava", "DRIP_LAVA"),
    ("dripping_water", "DRIP_WATER"),
    ("dust", "REDSTONE"),
    ("effect", "SPELL"),
    ("enchant", "ENCHANTMENT_TABLE"),
    ("enchanted_hit", "CRIT_MAGIC"),
    ("entity_effect", "SPELL_MOB"),
    ("explosion", "EXPLOSION_LARGE"),
    ("explosion_emitter", "EXPLOSION_HUGE"),
    ("firework", "FIREWORKS_SPARK"),
    ("fishing", "WATER_WAKE"),
    ("happy_villager", "VILLAGER_HAPPY"),
    ("instant_effect", "SPELL_INSTANT"),
    ("item_slime", "SLIME"),
    ("item_snowball", "SNOWBALL"),
    ("large_smoke", "SMOKE_LARGE"),
    ("mycelium", "TOWN_AURA"),
    ("poof", "EXPLOSION_NORMAL"),
    ("rain", "WATER_DROP"),
    ("smoke", "SMOKE_NORMAL"),
    ("splash", "WATER_SPLASH"),
    ("totem_of_undying", "TOTEM"),
    ("underwater", "SUSPENDED_DEPTH"),
    ("witch", "SPELL_WITCH"),
];

/// Split a vanilla particle id into its path, rejecting foreign namespaces.
fn vanilla_path(kind: &str) -> NmsResult<&str> {
    let (namespace, path) = kind.split_once(':').unwrap_or(("minecraft", kind));
    if namespace != "minecraft" {
        return Err(NmsError::not_supported(format!(
            "spawn_particle for non-vanilla particle '{}'",
            kind
        )));
    }
    if path.is_empty()
        || !path
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(NmsError::invalid_input(format!(
            "invalid particle id '{}'",
            kind
        )));
    }
    Ok(path)
}

/// Namespaced id used from 1.20.5 on
pub fn resource_key(kind: &str) -> NmsResult<String> {
    vanilla_path(kind).map(|path| format!("minecraft:{}", path))
}

/// Bukkit constant name used up to 1.20.4
pub fn legacy_constant(kind: &str) -> NmsResult<String> {
    let path = vanilla_path(kind)?;
    let renamed = LEGACY_RENAMES
        .binary_search_by(|(id, _)| id.cmp(&path))
        .ok()
        .map(|index| LEGACY_RENAMES[index].1.to_string());
    Ok(renamed.unwrap_or_else(|| path.to_ascii_uppercase()))
}

/// Vanilla id for a pre-1.20.5 Bukkit constant name
pub fn from_legacy_constant(constant: &str) -> String {
    LEGACY_RENAMES
        .iter()
        .find(|(_, legacy)| *legacy == constant)
        .map(|(id, _)| format!("minecraft:{}", id))
        .unwrap_or_else(|| format!("minecraft:{}", constant.to_ascii_lowercase()))
}
