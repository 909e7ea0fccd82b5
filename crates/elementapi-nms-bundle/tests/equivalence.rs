//! Every bundled adapter must behave identically against equivalent host state.

// Link the adapter crates so their registrations are visible here.
extern crate elementapi_nms_v1_17_r1;
extern crate elementapi_nms_v1_18_r1;
extern crate elementapi_nms_v1_18_r2;
extern crate elementapi_nms_v1_19_r1;
extern crate elementapi_nms_v1_19_r2;
extern crate elementapi_nms_v1_19_r3;
extern crate elementapi_nms_v1_20_r1;
extern crate elementapi_nms_v1_20_r2;
extern crate elementapi_nms_v1_20_r3;
extern crate elementapi_nms_v1_20_r4;
extern crate elementapi_nms_v1_21_r1;
extern crate elementapi_nms_v1_21_r2;
extern crate elementapi_nms_v1_21_r3;
extern crate elementapi_nms_v1_21_r4;
extern crate elementapi_nms_v1_21_r5;

use elementapi_nms_api::{
    BlockPos, BlockState, DamageCause, EntityRef, HostRef, ItemRef, Location, NmsResult,
    NmsVersion, ParticleSpec, TagKey, Vector, WorldRef,
};
use elementapi_nms_bundle::bundled_registry;
use elementapi_nms_common::VersionProfile;
use elementapi_test_support::{bukkit_version, SimulatedHost};
use std::sync::Arc;
use uuid::Uuid;

/// Everything a plugin could observe from one scripted session
#[derive(Debug, PartialEq)]
struct Observation {
    location: Location,
    remaining_health: Vec<f64>,
    velocity: Vector,
    block_before: BlockState,
    block_after: BlockState,
    tag_before: Option<String>,
    tag_after: Option<String>,
    entity_tag_before: Option<String>,
    entity_tag_after: Option<String>,
    action_bars: Vec<String>,
    particle_kinds: Vec<String>,
    missing_entity: NmsResult<Location>,
    missing_item: NmsResult<Option<String>>,
    untagged_missing_entity: NmsResult<Option<String>>,
    rejected_velocity: NmsResult<()>,
    rejected_damage: NmsResult<f64>,
    foreign_particle: NmsResult<()>,
}

fn script<P: VersionProfile>(release: &str) -> Observation {
    let sim = Arc::new(SimulatedHost::for_profile::<P>(bukkit_version(release)));
    let host: HostRef = sim.clone();

    let registry = bundled_registry().unwrap();
    let factory = registry
        .lookup(&P::VERSION)
        .unwrap_or_else(|| panic!("no adapter registered for {}", P::VERSION));
    let nms = factory(&host).unwrap();
    assert_eq!(nms.version(), P::VERSION);

    let entity = EntityRef(sim.world().spawn_entity("world", Vector::new(10.5, 64.0, -3.25)));
    let item = ItemRef(sim.world().create_item());
    let world = WorldRef::new("world");
    let pos = BlockPos::new(4, 70, -12);
    let key = TagKey::new("elementapi", "element_id").unwrap();

    let location = nms.entity_location(entity).unwrap();

    nms.set_velocity(entity, Vector::new(0.0, 1.5, 0.25)).unwrap();
    let velocity = sim.world().entities[&entity.0].velocity;

    let remaining_health = DamageCause::ALL
        .iter()
        .map(|cause| nms.damage_entity(entity, 1.5, *cause).unwrap())
        .collect();

    let block_before = nms.block_at(&world, pos).unwrap();
    nms.set_block(&world, pos, &BlockState::new("minecraft:magma_block"))
        .unwrap();
    let block_after = nms.block_at(&world, pos).unwrap();

    let tag_before = nms.read_item_tag(item, &key).unwrap();
    nms.write_item_tag(item, &key, "FIRE").unwrap();
    let tag_after = nms.read_item_tag(item, &key).unwrap();

    let entity_tag_before = nms.read_entity_tag(entity, &key).unwrap();
    nms.write_entity_tag(entity, &key, "WATER").unwrap();
    let entity_tag_after = nms.read_entity_tag(entity, &key).unwrap();

    nms.send_action_bar(entity, "Water").unwrap();
    let action_bars = sim
        .world()
        .action_bars
        .iter()
        .map(|(_, text)| text.clone())
        .collect();

    for kind in ["minecraft:flame", "minecraft:dust", "poof", "totem_of_undying"] {
        nms.spawn_particle(&world, Vector::new(0.0, 65.0, 0.0), &ParticleSpec::new(kind, 8))
            .unwrap();
    }
    let particle_kinds = sim
        .world()
        .particles
        .iter()
        .map(|record| record.kind.clone())
        .collect();

    let observation = Observation {
        location,
        remaining_health,
        velocity,
        block_before,
        block_after,
        tag_before,
        tag_after,
        entity_tag_before,
        entity_tag_after,
        action_bars,
        particle_kinds,
        missing_entity: nms.entity_location(EntityRef(Uuid::nil())),
        missing_item: nms.read_item_tag(ItemRef(9_999), &key),
        untagged_missing_entity: nms.read_entity_tag(EntityRef(Uuid::nil()), &key),
        rejected_velocity: nms.set_velocity(entity, Vector::new(f64::NAN, 0.0, 0.0)),
        rejected_damage: nms.damage_entity(entity, -1.0, DamageCause::Generic),
        foreign_particle: nms.spawn_particle(
            &world,
            Vector::new(0.0, 65.0, 0.0),
            &ParticleSpec::new("myplugin:sparkle", 1),
        ),
    };

    // Handles are resolved on first use and reused afterwards.
    for symbol in P::SYMBOLS.all() {
        assert_eq!(sim.lookups(symbol), 1, "{} resolved {} times", symbol, sim.lookups(symbol));
    }
    observation
}

macro_rules! observe_all {
    ($($krate:ident :: $profile:ident => $release:literal),+ $(,)?) => {
        vec![$((
            <$krate::$profile as VersionProfile>::VERSION,
            script::<$krate::$profile>($release),
        )),+]
    };
}

fn observations() -> Vec<(NmsVersion, Observation)> {
    observe_all![
        elementapi_nms_v1_17_r1::V1_17R1 => "1.17.1",
        elementapi_nms_v1_18_r1::V1_18R1 => "1.18.1",
        elementapi_nms_v1_18_r2::V1_18R2 => "1.18.2",
        elementapi_nms_v1_19_r1::V1_19R1 => "1.19.2",
        elementapi_nms_v1_19_r2::V1_19R2 => "1.19.3",
        elementapi_nms_v1_19_r3::V1_19R3 => "1.19.4",
        elementapi_nms_v1_20_r1::V1_20R1 => "1.20.1",
        elementapi_nms_v1_20_r2::V1_20R2 => "1.20.2",
        elementapi_nms_v1_20_r3::V1_20R3 => "1.20.4",
        elementapi_nms_v1_20_r4::V1_20R4 => "1.20.6",
        elementapi_nms_v1_21_r1::V1_21R1 => "1.21.1",
        elementapi_nms_v1_21_r2::V1_21R2 => "1.21.3",
        elementapi_nms_v1_21_r3::V1_21R3 => "1.21.4",
        elementapi_nms_v1_21_r4::V1_21R4 => "1.21.5",
        elementapi_nms_v1_21_r5::V1_21R5 => "1.21.8",
    ]
}

#[test]
fn test_all_adapters_observe_the_same_session() {
    let observations = observations();
    assert_eq!(observations.len(), 15);

    let (baseline_version, baseline) = &observations[0];
    for (version, observation) in &observations[1..] {
        assert_eq!(
            observation, baseline,
            "{} diverged from {}",
            version, baseline_version
        );
    }
}

#[test]
fn test_session_results_are_correct() {
    let (_, observation) = observations().remove(0);

    assert_eq!(observation.location.world, "world");
    assert_eq!(observation.location.x, 10.5);
    assert_eq!(observation.remaining_health, vec![18.5, 17.0, 15.5, 14.0, 12.5]);
    assert_eq!(observation.velocity, Vector::new(0.0, 1.5, 0.25));
    assert_eq!(observation.block_before, BlockState::new("minecraft:air"));
    assert_eq!(observation.block_after, BlockState::new("minecraft:magma_block"));
    assert_eq!(observation.tag_before, None);
    assert_eq!(observation.tag_after.as_deref(), Some("FIRE"));
    assert_eq!(observation.entity_tag_before, None);
    assert_eq!(observation.entity_tag_after.as_deref(), Some("WATER"));
    assert_eq!(observation.action_bars, vec!["Water"]);
    assert_eq!(
        observation.particle_kinds,
        vec![
            "minecraft:flame",
            "minecraft:dust",
            "minecraft:poof",
            "minecraft:totem_of_undying",
        ]
    );
    assert!(observation.missing_entity.is_err());
    assert!(observation.missing_item.is_err());
    assert!(observation.untagged_missing_entity.is_err());
    assert!(observation.rejected_velocity.is_err());
    assert!(observation.rejected_damage.is_err());
    assert!(observation.foreign_particle.is_err());
}
