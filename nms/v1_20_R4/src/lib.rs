//! NMS adapter for Minecraft 1.20.5 and 1.20.6 (`v1_20_R4`)
//!
//! First release with a Mojang-mapped runtime and unrelocated CraftBukkit
//! packages. Item data moved to the `minecraft:custom_data` component and
//! particles are addressed by resource key.

use elementapi_nms_api::{nms_adapter, NmsVersion};
use elementapi_nms_common::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, ProfiledAdapter, SymbolTable,
    VersionProfile,
};

/// Internals profile of `v1_20_R4`
pub struct V1_20R4;

impl VersionProfile for V1_20R4 {
    const VERSION: NmsVersion = NmsVersion::new(1, 20, 4);
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

/// Adapter bound to a `v1_20_R4` host
pub type V1_20R4Adapter = ProfiledAdapter<V1_20R4>;

// Self-register the adapter with the bridge.
nms_adapter! {
    version: <V1_20R4 as VersionProfile>::VERSION,
    factory: V1_20R4Adapter::boxed
}
