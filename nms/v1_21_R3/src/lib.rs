//! NMS adapter for Minecraft 1.21.4 (`v1_21_R3`)
//!
//! Mojang-mapped runtime. Entity damage goes through
//! `hurtServer`, which takes the owning level.

use elementapi_nms_api::{nms_adapter, NmsVersion};
use elementapi_nms_common::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, ProfiledAdapter, SymbolTable,
    VersionProfile,
};

/// Internals profile of `v1_21_R3`
pub struct V1_21R3;

impl VersionProfile for V1_21R3 {
    const VERSION: NmsVersion = NmsVersion::new(1, 21, 3);
    const SYMBOLS: SymbolTable = SymbolTable {
        anchor: "org.bukkit.craftbukkit.CraftServer",
        entity_location: "net.minecraft.world.entity.Entity#position()",
        set_velocity: "net.minecraft.world.entity.Entity#setDeltaMovement(Vec3)",
        damage_entity: "net.minecraft.world.entity.Entity#hurtServer(ServerLevel,DamageSource,float)",
        block_at: "net.minecraft.world.level.Level#getBlockState(BlockPos)",
        set_block: "net.minecraft.world.level.Level#setBlock(BlockPos,BlockState,int)",
        spawn_particle: "net.minecraft.server.level.ServerLevel#sendParticles(ParticleOptions,double,double,double,int,double,double,double,double)",
        read_item_tag: "net.minecraft.world.item.ItemStack#get(DataComponentType)",
        write_item_tag: "net.minecraft.world.item.ItemStack#set(DataComponentType,Object)",
        read_entity_tag: "net.minecraft.world.entity.Entity#saveWithoutId(CompoundTag)",
        write_entity_tag: "net.minecraft.world.entity.Entity#load(CompoundTag)",
        action_bar: "net.minecraft.server.level.ServerPlayer#sendSystemMessage(Component,boolean)",
    };
    const ITEM_TAGS: ItemTagLayout = ItemTagLayout::CustomDataComponent;
    const ENTITY_TAGS: EntityTagLayout = EntityTagLayout::CompoundTag;
    const DAMAGE: DamageLayout = DamageLayout::SourceRegistry;
    const PARTICLES: ParticleLayout = ParticleLayout::ResourceKeys;
}

/// Adapter bound to a `v1_21_R3` host
pub type V1_21R3Adapter = ProfiledAdapter<V1_21R3>;

// Self-register the adapter with the bridge.
nms_adapter! {
    version: <V1_21R3 as VersionProfile>::VERSION,
    factory: V1_21R3Adapter::boxed
}

#[cfg(test)]
mod tests {
    use super::*;
    use elementapi_nms_api::{ElementNms, HostRef, ItemRef, NmsError, TagKey};
    use elementapi_test_support::{bukkit_version, SimulatedHost};
    use std::sync::Arc;

    #[test]
    fn test_binds_to_matching_host() {
        let host: HostRef =
            Arc::new(SimulatedHost::for_profile::<V1_21R3>(bukkit_version("1.21.4")));
        let adapter = V1_21R3Adapter::bind(&host).unwrap();
        assert_eq!(adapter.version().to_string(), "1_21_R3");
    }

    #[test]
    fn test_missing_anchor_fails_construction() {
        let host: HostRef = Arc::new(SimulatedHost::bare(bukkit_version("1.21.4")));
        let err = V1_21R3Adapter::boxed(&host).err().expect("construction should fail");
        assert_eq!(err, NmsError::missing_symbol("org.bukkit.craftbukkit.CraftServer"));
    }

    #[test]
    fn test_item_tags_use_custom_data_component() {
        let sim = Arc::new(SimulatedHost::for_profile::<V1_21R3>(bukkit_version("1.21.4")));
        let item = ItemRef(sim.world().create_item());
        let host: HostRef = sim.clone();
        let adapter = V1_21R3Adapter::bind(&host).unwrap();
        let key = TagKey::new("elementapi", "element_id").unwrap();

        assert_eq!(adapter.read_item_tag(item, &key).unwrap(), None);
        adapter.write_item_tag(item, &key, "FIRE").unwrap();
        assert_eq!(adapter.read_item_tag(item, &key).unwrap().as_deref(), Some("FIRE"));
    }
}
