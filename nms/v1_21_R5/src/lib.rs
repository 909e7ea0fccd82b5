//! NMS adapter for Minecraft 1.21.6 through 1.21.8 (`v1_21_R5`)
//!
//! Mojang-mapped runtime. `sendParticles` gained the force and
//! always-visible flags, and entity persistence moved from raw NBT to typed
//! value input/output.

use elementapi_nms_api::{nms_adapter, NmsVersion};
use elementapi_nms_common::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, ProfiledAdapter, SymbolTable,
    VersionProfile,
};

/// Internals profile of `v1_21_R5`
pub struct V1_21R5;

impl VersionProfile for V1_21R5 {
    const VERSION: NmsVersion = NmsVersion::new(1, 21, 5);
    const SYMBOLS: SymbolTable = SymbolTable {
        anchor: "org.bukkit.craftbukkit.CraftServer",
        entity_location: "net.minecraft.world.entity.Entity#position()",
        set_velocity: "net.minecraft.world.entity.Entity#setDeltaMovement(Vec3)",
        damage_entity: "net.minecraft.world.entity.Entity#hurtServer(ServerLevel,DamageSource,float)",
        block_at: "net.minecraft.world.level.Level#getBlockState(BlockPos)",
        set_block: "net.minecraft.world.level.Level#setBlock(BlockPos,BlockState,int)",
        spawn_particle: "net.minecraft.server.level.ServerLevel#sendParticles(ParticleOptions,boolean,boolean,double,double,double,int,double,double,double,double)",
        read_item_tag: "net.minecraft.world.item.ItemStack#get(DataComponentType)",
        write_item_tag: "net.minecraft.world.item.ItemStack#set(DataComponentType,Object)",
        read_entity_tag: "net.minecraft.world.entity.Entity#saveWithoutId(ValueOutput)",
        write_entity_tag: "net.minecraft.world.entity.Entity#load(ValueInput)",
        action_bar: "net.minecraft.server.level.ServerPlayer#sendSystemMessage(Component,boolean)",
    };
    const ITEM_TAGS: ItemTagLayout = ItemTagLayout::CustomDataComponent;
    const ENTITY_TAGS: EntityTagLayout = EntityTagLayout::ValueIo;
    const DAMAGE: DamageLayout = DamageLayout::SourceRegistry;
    const PARTICLES: ParticleLayout = ParticleLayout::ResourceKeys;
}

/// Adapter bound to a `v1_21_R5` host
pub type V1_21R5Adapter = ProfiledAdapter<V1_21R5>;

// Self-register the adapter with the bridge.
nms_adapter! {
    version: <V1_21R5 as VersionProfile>::VERSION,
    factory: V1_21R5Adapter::boxed
}
