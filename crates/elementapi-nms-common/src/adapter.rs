//! Reflective adapter driven by a [`VersionProfile`]

use crate::profile::VersionProfile;
use crate::wire;
use elementapi_nms_api::{
    BlockPos, BlockState, DamageCause, ElementNms, EntityRef, HandleCache, HostRef, ItemRef,
    Location, NmsError, NmsResult, NmsVersion, ParticleSpec, TagKey, Vector, WorldRef,
};
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// `ElementNms` implementation for the release described by `P`.
///
/// Holds no game state of its own: only the host reference and the cache of
/// resolved symbol handles.
pub struct ProfiledAdapter<P: VersionProfile> {
    host: HostRef,
    handles: HandleCache,
    _profile: PhantomData<fn() -> P>,
}

impl<P: VersionProfile> ProfiledAdapter<P> {
    /// Bind to `host`, failing if the profile's anchor symbol is absent.
    pub fn bind(host: &HostRef) -> NmsResult<Self> {
        let adapter = Self {
            host: HostRef::clone(host),
            handles: HandleCache::new(),
            _profile: PhantomData,
        };
        adapter
            .handles
            .get_or_resolve(adapter.host.as_ref(), "anchor", P::SYMBOLS.anchor)?;

        debug!(
            version = %P::VERSION,
            anchor = P::SYMBOLS.anchor,
            "Bound NMS adapter to host"
        );
        Ok(adapter)
    }

    /// Factory entry point used by `nms_adapter!`
    pub fn boxed(host: &HostRef) -> NmsResult<Box<dyn ElementNms>> {
        Ok(Box::new(Self::bind(host)?))
    }

    /// Number of symbol handles resolved so far, including the anchor
    pub fn resolved_handles(&self) -> usize {
        self.handles.resolved_count()
    }

    fn call(
        &self,
        operation: &'static str,
        symbol: &'static str,
        args: &[Value],
    ) -> NmsResult<Value> {
        let handle = self
            .handles
            .get_or_resolve(self.host.as_ref(), operation, symbol)?;
        trace!(version = %P::VERSION, operation, handle = %handle, "Invoking host symbol");
        Ok(self.host.invoke(&handle, args)?)
    }
}

fn require_finite(operation: &str, vector: &Vector) -> NmsResult<()> {
    if vector.is_finite() {
        Ok(())
    } else {
        Err(NmsError::invalid_input(format!(
            "{} requires finite coordinates",
            operation
        )))
    }
}

impl<P: VersionProfile> ElementNms for ProfiledAdapter<P> {
    fn version(&self) -> NmsVersion {
        P::VERSION
    }

    fn entity_location(&self, entity: EntityRef) -> NmsResult<Location> {
        let result = self.call(
            "entity_location",
            P::SYMBOLS.entity_location,
            &[wire::entity(entity)],
        )?;
        wire::decode_location(result)
    }

    fn set_velocity(&self, entity: EntityRef, velocity: Vector) -> NmsResult<()> {
        require_finite("set_velocity", &velocity)?;
        self.call(
            "set_velocity",
            P::SYMBOLS.set_velocity,
            &wire::velocity_args(entity, velocity),
        )?;
        Ok(())
    }

    fn damage_entity(&self, entity: EntityRef, amount: f64, cause: DamageCause) -> NmsResult<f64> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(NmsError::invalid_input(format!(
                "damage amount must be finite and non-negative, got {}",
                amount
            )));
        }
        let result = self.call(
            "damage_entity",
            P::SYMBOLS.damage_entity,
            &wire::damage_args(P::DAMAGE, entity, amount, cause),
        )?;
        wire::decode_health(result)
    }

    fn block_at(&self, world: &WorldRef, pos: BlockPos) -> NmsResult<BlockState> {
        let result = self.call("block_at", P::SYMBOLS.block_at, &wire::block_args(world, pos))?;
        wire::decode_block(result)
    }

    fn set_block(&self, world: &WorldRef, pos: BlockPos, block: &BlockState) -> NmsResult<()> {
        if !block.id().contains(':') {
            return Err(NmsError::invalid_input(format!(
                "block id '{}' must be namespaced",
                block.id()
            )));
        }
        self.call(
            "set_block",
            P::SYMBOLS.set_block,
            &wire::set_block_args(world, pos, block),
        )?;
        Ok(())
    }

    fn spawn_particle(
        &self,
        world: &WorldRef,
        position: Vector,
        particle: &ParticleSpec,
    ) -> NmsResult<()> {
        require_finite("spawn_particle", &position)?;
        if particle.count == 0 {
            return Err(NmsError::invalid_input("particle count must be at least 1"));
        }
        let args = wire::particle_args(P::PARTICLES, world, position, particle)?;
        self.call("spawn_particle", P::SYMBOLS.spawn_particle, &args)?;
        Ok(())
    }

    fn read_item_tag(&self, item: ItemRef, key: &TagKey) -> NmsResult<Option<String>> {
        let result = self.call(
            "read_item_tag",
            P::SYMBOLS.read_item_tag,
            &wire::read_tag_args(P::ITEM_TAGS, item, key),
        )?;
        wire::decode_optional_string("read_item_tag", result)
    }

    fn write_item_tag(&self, item: ItemRef, key: &TagKey, value: &str) -> NmsResult<()> {
        self.call(
            "write_item_tag",
            P::SYMBOLS.write_item_tag,
            &wire::write_tag_args(P::ITEM_TAGS, item, key, value),
        )?;
        Ok(())
    }

    fn read_entity_tag(&self, entity: EntityRef, key: &TagKey) -> NmsResult<Option<String>> {
        let result = self.call(
            "read_entity_tag",
            P::SYMBOLS.read_entity_tag,
            &wire::read_entity_tag_args(P::ENTITY_TAGS, entity, key),
        )?;
        wire::decode_optional_string("read_entity_tag", result)
    }

    fn write_entity_tag(&self, entity: EntityRef, key: &TagKey, value: &str) -> NmsResult<()> {
        self.call(
            "write_entity_tag",
            P::SYMBOLS.write_entity_tag,
            &wire::write_entity_tag_args(P::ENTITY_TAGS, entity, key, value),
        )?;
        Ok(())
    }

    fn send_action_bar(&self, player: EntityRef, message: &str) -> NmsResult<()> {
        self.call(
            "send_action_bar",
            P::SYMBOLS.action_bar,
            &wire::action_bar_args(player, message),
        )?;
        Ok(())
    }
}
