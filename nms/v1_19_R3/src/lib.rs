//! NMS adapter for Minecraft 1.19.4 (`v1_19_R3`)
//!
//! Obfuscated Spigot member names behind relocated CraftBukkit packages.
//! Damage is attributed through the damage-type registry.

use elementapi_nms_api::{nms_adapter, NmsVersion};
use elementapi_nms_common::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, ProfiledAdapter, SymbolTable,
    VersionProfile,
};

/// Internals profile of `v1_19_R3`
pub struct V1_19R3;

impl VersionProfile for V1_19R3 {
    const VERSION: NmsVersion = NmsVersion::new(1, 19, 3);
    const SYMBOLS: SymbolTable = SymbolTable {
        anchor: "org.bukkit.craftbukkit.v1_19_R3.CraftServer",
        entity_location: "net.minecraft.world.entity.Entity#de",
        set_velocity: "net.minecraft.world.entity.Entity#f(Vec3D)",
        damage_entity: "net.minecraft.world.entity.Entity#a(DamageSource,float)",
        block_at: "net.minecraft.world.level.World#a_(BlockPosition)",
        set_block: "net.minecraft.world.level.World#a(BlockPosition,IBlockData,int)",
        spawn_particle: "net.minecraft.server.level.WorldServer#a(ParticleParam,double,double,double,int,double,double,double,double)",
        read_item_tag: "net.minecraft.world.item.ItemStack#v()",
        write_item_tag: "net.minecraft.world.item.ItemStack#w()",
        read_entity_tag: "net.minecraft.world.entity.Entity#f(NBTTagCompound)",
        write_entity_tag: "net.minecraft.world.entity.Entity#g(NBTTagCompound)",
        action_bar: "net.minecraft.server.level.EntityPlayer#a(IChatBaseComponent,boolean)",
    };
    const ITEM_TAGS: ItemTagLayout = ItemTagLayout::CompoundTag;
    const ENTITY_TAGS: EntityTagLayout = EntityTagLayout::CompoundTag;
    const DAMAGE: DamageLayout = DamageLayout::SourceRegistry;
    const PARTICLES: ParticleLayout = ParticleLayout::LegacyConstants;
}

/// Adapter bound to a `v1_19_R3` host
pub type V1_19R3Adapter = ProfiledAdapter<V1_19R3>;

// Self-register the adapter with the bridge.
nms_adapter! {
    version: <V1_19R3 as VersionProfile>::VERSION,
    factory: V1_19R3Adapter::boxed
}

#[cfg(test)]
mod tests {
    use super::*;
    use elementapi_nms_api::{
        DamageCause, ElementNms, EntityRef, HostError, HostRef, ItemRef, NmsError, TagKey,
    };
    use elementapi_test_support::{bukkit_version, SimulatedHost};
    use std::sync::Arc;

    #[test]
    fn test_binds_to_matching_host() {
        let host: HostRef =
            Arc::new(SimulatedHost::for_profile::<V1_19R3>(bukkit_version("1.19.4")));
        let adapter = V1_19R3Adapter::bind(&host).unwrap();
        assert_eq!(adapter.version().to_string(), "1_19_R3");
    }

    #[test]
    fn test_missing_anchor_fails_construction() {
        let host: HostRef = Arc::new(SimulatedHost::bare(bukkit_version("1.19.4")));
        let err = V1_19R3Adapter::boxed(&host).err().expect("construction should fail");
        assert_eq!(err, NmsError::missing_symbol("org.bukkit.craftbukkit.v1_19_R3.CraftServer"));
    }

    #[test]
    fn test_item_tags_use_bukkit_compound() {
        let sim = Arc::new(SimulatedHost::for_profile::<V1_19R3>(bukkit_version("1.19.4")));
        let item = ItemRef(sim.world().create_item());
        let host: HostRef = sim.clone();
        let adapter = V1_19R3Adapter::bind(&host).unwrap();
        let key = TagKey::new("elementapi", "element_id").unwrap();

        adapter.write_item_tag(item, &key, "WATER").unwrap();

        assert_eq!(adapter.read_item_tag(item, &key).unwrap().as_deref(), Some("WATER"));
        assert_eq!(sim.world().items[&item.0]["elementapi:element_id"], "WATER");
    }

    #[test]
    fn test_damage_uses_registry_keys() {
        let legacy_host: HostRef = Arc::new(
            SimulatedHost::builder(bukkit_version("1.19.4"))
                .with_profile::<V1_19R3>()
                .symbol(V1_19R3::SYMBOLS.damage_entity, |args| {
                    // A pre-registry build would only understand static fields.
                    match args[1].get("source") {
                        Some(_) => Ok(serde_json::json!(20.0)),
                        None => Err(HostError::invocation(
                            "damage_entity",
                            "unknown damage source",
                        )),
                    }
                })
                .build(),
        );
        let adapter = V1_19R3Adapter::bind(&legacy_host).unwrap();

        let err = adapter
            .damage_entity(EntityRef(uuid_nil()), 1.0, DamageCause::Magic)
            .unwrap_err();
        assert!(matches!(err, NmsError::Host { .. }));
    }

    fn uuid_nil() -> uuid::Uuid {
        uuid::Uuid::nil()
    }
}
