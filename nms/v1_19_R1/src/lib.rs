//! NMS adapter for Minecraft 1.19 through 1.19.2 (`v1_19_R1`)
//!
//! Obfuscated Spigot member names behind relocated CraftBukkit packages.
//! Damage sources are still static `DamageSource` fields.

use elementapi_nms_api::{nms_adapter, NmsVersion};
use elementapi_nms_common::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, ProfiledAdapter, SymbolTable,
    VersionProfile,
};

/// Internals profile of `v1_19_R1`
pub struct V1_19R1;

impl VersionProfile for V1_19R1 {
    const VERSION: NmsVersion = NmsVersion::new(1, 19, 1);
    const SYMBOLS: SymbolTable = SymbolTable {
        anchor: "org.bukkit.craftbukkit.v1_19_R1.CraftServer",
        entity_location: "net.minecraft.world.entity.Entity#dg",
        set_velocity: "net.minecraft.world.entity.Entity#f(Vec3D)",
        damage_entity: "net.minecraft.world.entity.Entity#a(DamageSource,float)",
        block_at: "net.minecraft.world.level.World#a_(BlockPosition)",
        set_block: "net.minecraft.world.level.World#a(BlockPosition,IBlockData,int)",
        spawn_particle: "net.minecraft.server.level.WorldServer#a(ParticleParam,double,double,double,int,double,double,double,double)",
        read_item_tag: "net.minecraft.world.item.ItemStack#u()",
        write_item_tag: "net.minecraft.world.item.ItemStack#v()",
        read_entity_tag: "net.minecraft.world.entity.Entity#f(NBTTagCompound)",
        write_entity_tag: "net.minecraft.world.entity.Entity#g(NBTTagCompound)",
        action_bar: "net.minecraft.server.level.EntityPlayer#a(IChatBaseComponent,boolean)",
    };
    const ITEM_TAGS: ItemTagLayout = ItemTagLayout::CompoundTag;
    const ENTITY_TAGS: EntityTagLayout = EntityTagLayout::CompoundTag;
    const DAMAGE: DamageLayout = DamageLayout::StaticSources;
    const PARTICLES: ParticleLayout = ParticleLayout::LegacyConstants;
}

/// Adapter bound to a `v1_19_R1` host
pub type V1_19R1Adapter = ProfiledAdapter<V1_19R1>;

// Self-register the adapter with the bridge.
nms_adapter! {
    version: <V1_19R1 as VersionProfile>::VERSION,
    factory: V1_19R1Adapter::boxed
}

#[cfg(test)]
mod tests {
    use super::*;
    use elementapi_nms_api::{
        DamageCause, ElementNms, EntityRef, HostRef, ItemRef, NmsError, TagKey, Vector,
    };
    use elementapi_test_support::{bukkit_version, SimulatedHost};
    use std::sync::Arc;

    #[test]
    fn test_binds_to_matching_host() {
        let host: HostRef =
            Arc::new(SimulatedHost::for_profile::<V1_19R1>(bukkit_version("1.19.2")));
        let adapter = V1_19R1Adapter::bind(&host).unwrap();
        assert_eq!(adapter.version().to_string(), "1_19_R1");
    }

    #[test]
    fn test_missing_anchor_fails_construction() {
        let host: HostRef = Arc::new(SimulatedHost::bare(bukkit_version("1.19.2")));
        let err = V1_19R1Adapter::boxed(&host).err().expect("construction should fail");
        assert_eq!(err, NmsError::missing_symbol("org.bukkit.craftbukkit.v1_19_R1.CraftServer"));
    }

    #[test]
    fn test_item_tags_use_bukkit_compound() {
        let sim = Arc::new(SimulatedHost::for_profile::<V1_19R1>(bukkit_version("1.19.2")));
        let item = ItemRef(sim.world().create_item());
        let host: HostRef = sim.clone();
        let adapter = V1_19R1Adapter::bind(&host).unwrap();
        let key = TagKey::new("elementapi", "element_id").unwrap();

        adapter.write_item_tag(item, &key, "WATER").unwrap();

        assert_eq!(adapter.read_item_tag(item, &key).unwrap().as_deref(), Some("WATER"));
        assert_eq!(sim.world().items[&item.0]["elementapi:element_id"], "WATER");
    }

    #[test]
    fn test_damage_uses_static_sources() {
        let sim = Arc::new(SimulatedHost::for_profile::<V1_19R1>(bukkit_version("1.19.2")));
        let target = EntityRef(sim.world().spawn_entity("world", Vector::new(0.0, 64.0, 0.0)));
        let host: HostRef = sim.clone();
        let adapter = V1_19R1Adapter::bind(&host).unwrap();

        let remaining = adapter.damage_entity(target, 6.5, DamageCause::Fire).unwrap();

        assert_eq!(remaining, 13.5);
        assert_eq!(sim.world().damage[0].cause, DamageCause::Fire);
    }
}
