//! NMS adapter for Minecraft 1.17 and 1.17.1 (`v1_17_R1`)
//!
//! Spigot-named internals behind relocated CraftBukkit packages. Item data
//! lives in the NBT `PublicBukkitValues` compound and damage sources are
//! static `DamageSource` fields. Entity data is read and written through the
//! saved entity NBT.

use elementapi_nms_api::{nms_adapter, NmsVersion};
use elementapi_nms_common::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, ProfiledAdapter, SymbolTable,
    VersionProfile,
};

/// Internals profile of `v1_17_R1`
pub struct V1_17R1;

impl VersionProfile for V1_17R1 {
    const VERSION: NmsVersion = NmsVersion::new(1, 17, 1);
    const SYMBOLS: SymbolTable = SymbolTable {
        anchor: "org.bukkit.craftbukkit.v1_17_R1.CraftServer",
        entity_location: "net.minecraft.world.entity.Entity#getPositionVector",
        set_velocity: "net.minecraft.world.entity.Entity#setMot",
        damage_entity: "net.minecraft.world.entity.Entity#damageEntity",
        block_at: "net.minecraft.world.level.World#getType",
        set_block: "net.minecraft.world.level.World#setTypeAndData",
        spawn_particle: "net.minecraft.server.level.WorldServer#sendParticles",
        read_item_tag: "net.minecraft.world.item.ItemStack#getTag",
        write_item_tag: "net.minecraft.world.item.ItemStack#getOrCreateTag",
        read_entity_tag: "net.minecraft.world.entity.Entity#save(NBTTagCompound)",
        write_entity_tag: "net.minecraft.world.entity.Entity#load(NBTTagCompound)",
        action_bar: "net.minecraft.server.level.EntityPlayer#sendMessage",
    };
    const ITEM_TAGS: ItemTagLayout = ItemTagLayout::CompoundTag;
    const ENTITY_TAGS: EntityTagLayout = EntityTagLayout::CompoundTag;
    const DAMAGE: DamageLayout = DamageLayout::StaticSources;
    const PARTICLES: ParticleLayout = ParticleLayout::LegacyConstants;
}

/// Adapter bound to a `v1_17_R1` host
pub type V1_17R1Adapter = ProfiledAdapter<V1_17R1>;

// Self-register the adapter with the bridge.
nms_adapter! {
    version: <V1_17R1 as VersionProfile>::VERSION,
    factory: V1_17R1Adapter::boxed
}

#[cfg(test)]
mod tests {
    use super::*;
    use elementapi_nms_api::{
        ElementNms, EntityRef, HostRef, ItemRef, NmsError, ParticleSpec, TagKey, Vector, WorldRef,
    };
    use elementapi_test_support::{bukkit_version, SimulatedHost};
    use std::sync::Arc;

    #[test]
    fn test_binds_to_matching_host() {
        let host: HostRef =
            Arc::new(SimulatedHost::for_profile::<V1_17R1>(bukkit_version("1.17.1")));
        let adapter = V1_17R1Adapter::bind(&host).unwrap();
        assert_eq!(adapter.version().to_string(), "1_17_R1");
    }

    #[test]
    fn test_missing_anchor_fails_construction() {
        let host: HostRef = Arc::new(SimulatedHost::bare(bukkit_version("1.17.1")));
        let err = V1_17R1Adapter::boxed(&host).err().expect("construction should fail");
        assert_eq!(err, NmsError::missing_symbol("org.bukkit.craftbukkit.v1_17_R1.CraftServer"));
    }

    #[test]
    fn test_item_tags_use_bukkit_compound() {
        let sim = Arc::new(SimulatedHost::for_profile::<V1_17R1>(bukkit_version("1.17.1")));
        let item = ItemRef(sim.world().create_item());
        let host: HostRef = sim.clone();
        let adapter = V1_17R1Adapter::bind(&host).unwrap();
        let key = TagKey::new("elementapi", "element_id").unwrap();

        adapter.write_item_tag(item, &key, "WATER").unwrap();

        assert_eq!(adapter.read_item_tag(item, &key).unwrap().as_deref(), Some("WATER"));
        assert_eq!(sim.world().items[&item.0]["elementapi:element_id"], "WATER");
    }

    #[test]
    fn test_entity_tags_use_saved_nbt() {
        let sim = Arc::new(SimulatedHost::for_profile::<V1_17R1>(bukkit_version("1.17.1")));
        let zombie = EntityRef(sim.world().spawn_entity("world", Vector::new(4.0, 70.0, 4.0)));
        let host: HostRef = sim.clone();
        let adapter = V1_17R1Adapter::bind(&host).unwrap();
        let key = TagKey::new("elementapi", "element_id").unwrap();

        adapter.write_entity_tag(zombie, &key, "FIRE").unwrap();

        assert_eq!(adapter.read_entity_tag(zombie, &key).unwrap().as_deref(), Some("FIRE"));
        assert_eq!(sim.world().entities[&zombie.0].tags["elementapi:element_id"], "FIRE");
    }

    #[test]
    fn test_particles_use_legacy_constants() {
        let sim = Arc::new(SimulatedHost::for_profile::<V1_17R1>(bukkit_version("1.17.1")));
        let host: HostRef = sim.clone();
        let adapter = V1_17R1Adapter::bind(&host).unwrap();

        adapter
            .spawn_particle(
                &WorldRef::new("world"),
                Vector::new(0.5, 64.0, 0.5),
                &ParticleSpec::new("minecraft:dust", 4),
            )
            .unwrap();

        let world = sim.world();
        assert_eq!(world.particles[0].wire_name, "REDSTONE");
        assert_eq!(world.particles[0].kind, "minecraft:dust");
    }
}
