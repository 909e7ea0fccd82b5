//! NMS adapter for Minecraft 1.18.2 (`v1_18_R2`)
//!
//! Obfuscated Spigot member names behind relocated CraftBukkit packages.
//! Damage sources are still static `DamageSource` fields.

use elementapi_nms_api::{nms_adapter, NmsVersion};
use elementapi_nms_common::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, ProfiledAdapter, SymbolTable,
    VersionProfile,
};

/// Internals profile of `v1_18_R2`
pub struct V1_18R2;

impl VersionProfile for V1_18R2 {
    const VERSION: NmsVersion = NmsVersion::new(1, 18, 2);
    const SYMBOLS: SymbolTable = SymbolTable {
        anchor: "org.bukkit.craftbukkit.v1_18_R2.CraftServer",
        entity_location: "net.minecraft.world.entity.Entity#da",
        set_velocity: "net.minecraft.world.entity.Entity#f(Vec3D)",
        damage_entity: "net.minecraft.world.entity.Entity#a(DamageSource,float)",
        block_at: "net.minecraft.world.level.World#a_(BlockPosition)",
        set_block: "net.minecraft.world.level.World#a(BlockPosition,IBlockData,int)",
        spawn_particle: "net.minecraft.server.level.WorldServer#a(ParticleParam,double,double,double,int,double,double,double,double)",
        read_item_tag: "net.minecraft.world.item.ItemStack#s()",
        write_item_tag: "net.minecraft.world.item.ItemStack#t()",
        read_entity_tag: "net.minecraft.world.entity.Entity#f(NBTTagCompound)",
        write_entity_tag: "net.minecraft.world.entity.Entity#g(NBTTagCompound)",
        action_bar: "net.minecraft.server.level.EntityPlayer#a(IChatBaseComponent,ChatMessageType,UUID)",
    };
    const ITEM_TAGS: ItemTagLayout = ItemTagLayout::CompoundTag;
    const ENTITY_TAGS: EntityTagLayout = EntityTagLayout::CompoundTag;
    const DAMAGE: DamageLayout = DamageLayout::StaticSources;
    const PARTICLES: ParticleLayout = ParticleLayout::LegacyConstants;
}

/// Adapter bound to a `v1_18_R2` host
pub type V1_18R2Adapter = ProfiledAdapter<V1_18R2>;

// Self-register the adapter with the bridge.
nms_adapter! {
    version: <V1_18R2 as VersionProfile>::VERSION,
    factory: V1_18R2Adapter::boxed
}
