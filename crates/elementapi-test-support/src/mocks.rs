//! Mock implementations for testing

use elementapi_nms_api::{
    BlockPos, BlockState, DamageCause, ElementNms, EntityRef, ItemRef, Location, NmsResult,
    NmsVersion, ParticleSpec, TagKey, Vector, WorldRef,
};
use mockall::mock;

mock! {
    pub ElementNms {}

    impl ElementNms for ElementNms {
        fn version(&self) -> NmsVersion;
        fn entity_location(&self, entity: EntityRef) -> NmsResult<Location>;
        fn set_velocity(&self, entity: EntityRef, velocity: Vector) -> NmsResult<()>;
        fn damage_entity(&self, entity: EntityRef, amount: f64, cause: DamageCause) -> NmsResult<f64>;
        fn block_at(&self, world: &WorldRef, pos: BlockPos) -> NmsResult<BlockState>;
        fn set_block(&self, world: &WorldRef, pos: BlockPos, block: &BlockState) -> NmsResult<()>;
        fn spawn_particle(&self, world: &WorldRef, position: Vector, particle: &ParticleSpec) -> NmsResult<()>;
        fn read_item_tag(&self, item: ItemRef, key: &TagKey) -> NmsResult<Option<String>>;
        fn write_item_tag(&self, item: ItemRef, key: &TagKey, value: &str) -> NmsResult<()>;
        fn read_entity_tag(&self, entity: EntityRef, key: &TagKey) -> NmsResult<Option<String>>;
        fn write_entity_tag(&self, entity: EntityRef, key: &TagKey, value: &str) -> NmsResult<()>;
        fn send_action_bar(&self, player: EntityRef, message: &str) -> NmsResult<()>;
    }
}

/// Create a mock capability reporting `version`
pub fn mock_nms(version: NmsVersion) -> MockElementNms {
    let mut mock = MockElementNms::new();
    mock.expect_version().return_const(version);
    mock
}
