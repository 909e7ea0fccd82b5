//! NMS adapter for Minecraft 1.21 and 1.21.1 (`v1_21_R1`)
//!
//! Mojang-mapped runtime with unrelocated CraftBukkit packages.

use elementapi_nms_api::{nms_adapter, NmsVersion};
use elementapi_nms_common::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, ProfiledAdapter, SymbolTable,
    VersionProfile,
};

/// Internals profile of `v1_21_R1`
pub struct V1_21R1;

impl VersionProfile for V1_21R1 {
    const VERSION: NmsVersion = NmsVersion::new(1, 21, 1);
    const SYMBOLS: SymbolTable = SymbolTable {
        anchor: "org.bukkit.craftbukkit.CraftServer",
        entity_location: "net.minecraft.world.entity.Entity#position()",
        set_velocity: "net.minecraft.world.entity.Entity#setDeltaMovement(Vec3)",
        damage_entity: "net.minecraft.world.entity.Entity#hurt(DamageSource,float)",
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

/// Adapter bound to a `v1_21_R1` host
pub type V1_21R1Adapter = ProfiledAdapter<V1_21R1>;

// Self-register the adapter with the bridge.
nms_adapter! {
    version: <V1_21R1 as VersionProfile>::VERSION,
    factory: V1_21R1Adapter::boxed
}
