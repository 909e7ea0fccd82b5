//! In-memory host that speaks the wire shapes of any version profile

use elementapi_nms_api::{
    BlockPos, DamageCause, HostError, HostInternals, HostRef, SymbolHandle, Vector,
};
use elementapi_nms_common::particles::from_legacy_constant;
use elementapi_nms_common::wire::{BUKKIT_VALUES, CUSTOM_DATA_COMPONENT, ENTITY_BUKKIT_VALUES};
use elementapi_nms_common::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, VersionProfile,
};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

type Handler = Arc<dyn Fn(&[Value]) -> Result<Value, HostError> + Send + Sync>;
type World = Arc<Mutex<WorldState>>;

#[derive(Debug, Clone, PartialEq)]
pub struct EntityState {
    pub world: String,
    pub position: Vector,
    pub velocity: Vector,
    pub health: f64,
    /// Plugin-owned persistent data
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleRecord {
    pub world: String,
    /// Vanilla id, regardless of how the adapter named it
    pub kind: String,
    /// Name exactly as sent by the adapter
    pub wire_name: String,
    pub position: Vector,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DamageRecord {
    pub entity: Uuid,
    pub cause: DamageCause,
    pub amount: f64,
}

/// Game state mutated by the simulated internals
#[derive(Debug, Default)]
pub struct WorldState {
    pub entities: HashMap<Uuid, EntityState>,
    pub blocks: HashMap<(String, BlockPos), String>,
    pub items: HashMap<u64, BTreeMap<String, String>>,
    pub particles: Vec<ParticleRecord>,
    pub damage: Vec<DamageRecord>,
    pub action_bars: Vec<(Uuid, String)>,
    next_item: u64,
}

impl WorldState {
    /// Add an entity with 20 health at rest
    pub fn spawn_entity(&mut self, world: &str, position: Vector) -> Uuid {
        let id = Uuid::new_v4();
        self.entities.insert(
            id,
            EntityState {
                world: world.to_string(),
                position,
                velocity: Vector::new(0.0, 0.0, 0.0),
                health: 20.0,
                tags: BTreeMap::new(),
            },
        );
        id
    }

    /// Create an item stack without tags
    pub fn create_item(&mut self) -> u64 {
        self.next_item += 1;
        self.items.insert(self.next_item, BTreeMap::new());
        self.next_item
    }
}

/// `HostInternals` backed by closures over an in-memory [`WorldState`]
pub struct SimulatedHost {
    version: String,
    symbols: HashMap<String, u64>,
    handlers: Vec<(String, Handler)>,
    lookups: Mutex<HashMap<String, usize>>,
    world: World,
}

impl SimulatedHost {
    pub fn builder(server_version: impl Into<String>) -> SimulatedHostBuilder {
        SimulatedHostBuilder {
            version: server_version.into(),
            handlers: Vec::new(),
            world: World::default(),
        }
    }

    /// Host that reports a version but exposes no internals
    pub fn bare(server_version: impl Into<String>) -> Self {
        Self::builder(server_version).build()
    }

    /// Host exposing every symbol of profile `P` with working semantics
    pub fn for_profile<P: VersionProfile>(server_version: impl Into<String>) -> Self {
        Self::builder(server_version).with_profile::<P>().build()
    }

    pub fn world(&self) -> MutexGuard<'_, WorldState> {
        self.world.lock().expect("world state poisoned")
    }

    /// How often `symbol` was looked up
    pub fn lookups(&self, symbol: &str) -> usize {
        self.lookups
            .lock()
            .expect("lookup counter poisoned")
            .get(symbol)
            .copied()
            .unwrap_or(0)
    }

    pub fn into_ref(self) -> HostRef {
        Arc::new(self)
    }
}

impl HostInternals for SimulatedHost {
    fn server_version(&self) -> String {
        self.version.clone()
    }

    fn resolve_symbol(&self, symbol: &str) -> Option<SymbolHandle> {
        *self
            .lookups
            .lock()
            .expect("lookup counter poisoned")
            .entry(symbol.to_string())
            .or_default() += 1;
        self.symbols
            .get(symbol)
            .map(|slot| SymbolHandle::new(symbol, *slot))
    }

    fn invoke(&self, handle: &SymbolHandle, args: &[Value]) -> Result<Value, HostError> {
        match self.handlers.get(handle.slot() as usize) {
            Some((symbol, handler)) if symbol == handle.symbol() => handler(args),
            _ => Err(HostError::UnknownHandle {
                symbol: handle.symbol().to_string(),
            }),
        }
    }
}

pub struct SimulatedHostBuilder {
    version: String,
    handlers: Vec<(String, Handler)>,
    world: World,
}

impl SimulatedHostBuilder {
    /// Expose a symbol with a custom handler
    pub fn symbol<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, HostError> + Send + Sync + 'static,
    {
        self.handlers.retain(|(existing, _)| existing != name);
        self.handlers.push((name.to_string(), Arc::new(handler)));
        self
    }

    /// Hide a symbol, as a host build missing that member would
    pub fn without(mut self, name: &str) -> Self {
        self.handlers.retain(|(existing, _)| existing != name);
        self
    }

    /// Install the symbols and wire shapes of profile `P`
    pub fn with_profile<P: VersionProfile>(self) -> Self {
        let symbols = P::SYMBOLS;
        let w = self.world.clone();
        let b = self.symbol(symbols.anchor, |_| Ok(Value::Null));

        let world = w.clone();
        let b = b.symbol(symbols.entity_location, move |args| {
            let symbol = "entity_location";
            expect_len(symbol, args, 1)?;
            let world = lock(&world);
            let entity = world
                .entities
                .get(&uuid_arg(symbol, &args[0])?)
                .ok_or_else(|| no_entity(symbol))?;
            Ok(json!({
                "world": entity.world,
                "x": entity.position.x,
                "y": entity.position.y,
                "z": entity.position.z,
            }))
        });

        let world = w.clone();
        let b = b.symbol(symbols.set_velocity, move |args| {
            let symbol = "set_velocity";
            expect_len(symbol, args, 4)?;
            let id = uuid_arg(symbol, &args[0])?;
            let velocity = Vector::new(
                f64_arg(symbol, &args[1])?,
                f64_arg(symbol, &args[2])?,
                f64_arg(symbol, &args[3])?,
            );
            let mut world = lock(&world);
            let entity = world.entities.get_mut(&id).ok_or_else(|| no_entity(symbol))?;
            entity.velocity = velocity;
            Ok(Value::Null)
        });

        let world = w.clone();
        let b = b.symbol(symbols.damage_entity, move |args| {
            let symbol = "damage_entity";
            expect_len(symbol, args, 3)?;
            let id = uuid_arg(symbol, &args[0])?;
            let cause = match P::DAMAGE {
                DamageLayout::StaticSources => args[1]
                    .get("source")
                    .and_then(Value::as_str)
                    .and_then(|field| {
                        DamageCause::ALL.into_iter().find(|c| c.legacy_field() == field)
                    }),
                DamageLayout::SourceRegistry => args[1]
                    .get("damage_type")
                    .and_then(Value::as_str)
                    .and_then(|key| DamageCause::ALL.into_iter().find(|c| c.registry_key() == key)),
            }
            .ok_or_else(|| bad_args(symbol))?;
            let amount = f64_arg(symbol, &args[2])?;

            let mut world = lock(&world);
            let entity = world.entities.get_mut(&id).ok_or_else(|| no_entity(symbol))?;
            entity.health = (entity.health - amount).max(0.0);
            let remaining = entity.health;
            world.damage.push(DamageRecord { entity: id, cause, amount });
            Ok(json!(remaining))
        });

        let world = w.clone();
        let b = b.symbol(symbols.block_at, move |args| {
            let symbol = "block_at";
            expect_len(symbol, args, 4)?;
            let key = block_key(symbol, args)?;
            let world = lock(&world);
            Ok(json!(world
                .blocks
                .get(&key)
                .cloned()
                .unwrap_or_else(|| "minecraft:air".to_string())))
        });

        let world = w.clone();
        let b = b.symbol(symbols.set_block, move |args| {
            let symbol = "set_block";
            expect_len(symbol, args, 5)?;
            let key = block_key(symbol, args)?;
            let id = str_arg(symbol, &args[4])?.to_string();
            lock(&world).blocks.insert(key, id);
            Ok(Value::Null)
        });

        let world = w.clone();
        let b = b.symbol(symbols.spawn_particle, move |args| {
            let symbol = "spawn_particle";
            expect_len(symbol, args, 7)?;
            let wire_name = str_arg(symbol, &args[1])?.to_string();
            let kind = match P::PARTICLES {
                ParticleLayout::LegacyConstants if !wire_name.contains(':') => {
                    from_legacy_constant(&wire_name)
                }
                ParticleLayout::ResourceKeys if wire_name.starts_with("minecraft:") => {
                    wire_name.clone()
                }
                _ => return Err(bad_args(symbol)),
            };
            let record = ParticleRecord {
                world: str_arg(symbol, &args[0])?.to_string(),
                kind,
                wire_name,
                position: Vector::new(
                    f64_arg(symbol, &args[2])?,
                    f64_arg(symbol, &args[3])?,
                    f64_arg(symbol, &args[4])?,
                ),
                count: args[5].as_u64().ok_or_else(|| bad_args(symbol))? as u32,
            };
            lock(&world).particles.push(record);
            Ok(Value::Null)
        });

        let world = w.clone();
        let b = b.symbol(symbols.read_item_tag, move |args| {
            let symbol = "read_item_tag";
            expect_len(symbol, args, 3)?;
            let key = match P::ITEM_TAGS {
                ItemTagLayout::CompoundTag if args[1] == json!(BUKKIT_VALUES) => {
                    str_arg(symbol, &args[2])?.to_string()
                }
                ItemTagLayout::CustomDataComponent if args[1] == json!(CUSTOM_DATA_COMPONENT) => {
                    match args[2].as_array().map(Vec::as_slice) {
                        Some([Value::String(compound), Value::String(key)])
                            if compound == BUKKIT_VALUES =>
                        {
                            key.clone()
                        }
                        _ => return Err(bad_args(symbol)),
                    }
                }
                _ => return Err(bad_args(symbol)),
            };
            let world = lock(&world);
            let tags = world
                .items
                .get(&item_arg(symbol, &args[0])?)
                .ok_or_else(|| no_item(symbol))?;
            Ok(tags.get(&key).map(|v| json!(v)).unwrap_or(Value::Null))
        });

        let world = w.clone();
        let b = b.symbol(symbols.write_item_tag, move |args| {
            let symbol = "write_item_tag";
            let entries: Vec<(String, String)> = match P::ITEM_TAGS {
                ItemTagLayout::CompoundTag
                    if args.len() == 4 && args[1] == json!(BUKKIT_VALUES) =>
                {
                    vec![(
                        str_arg(symbol, &args[2])?.to_string(),
                        str_arg(symbol, &args[3])?.to_string(),
                    )]
                }
                ItemTagLayout::CustomDataComponent
                    if args.len() == 3 && args[1] == json!(CUSTOM_DATA_COMPONENT) =>
                {
                    let patch = args[2]
                        .get(BUKKIT_VALUES)
                        .and_then(Value::as_object)
                        .ok_or_else(|| bad_args(symbol))?;
                    patch
                        .iter()
                        .map(|(k, v)| -> Result<(String, String), HostError> {
                            Ok((k.clone(), str_arg(symbol, v)?.to_string()))
                        })
                        .collect::<Result<Vec<_>, HostError>>()?
                }
                _ => return Err(bad_args(symbol)),
            };
            let id = item_arg(symbol, &args[0])?;
            let mut world = lock(&world);
            let tags = world.items.get_mut(&id).ok_or_else(|| no_item(symbol))?;
            tags.extend(entries);
            Ok(Value::Null)
        });

        let world = w.clone();
        let b = b.symbol(symbols.read_entity_tag, move |args| {
            let symbol = "read_entity_tag";
            let key = match P::ENTITY_TAGS {
                EntityTagLayout::CompoundTag
                    if args.len() == 3 && args[1] == json!(ENTITY_BUKKIT_VALUES) =>
                {
                    str_arg(symbol, &args[2])?.to_string()
                }
                EntityTagLayout::ValueIo
                    if args.len() == 2
                        && args[1].get("child") == Some(&json!(ENTITY_BUKKIT_VALUES)) =>
                {
                    let key = args[1].get("key").ok_or_else(|| bad_args(symbol))?;
                    str_arg(symbol, key)?.to_string()
                }
                _ => return Err(bad_args(symbol)),
            };
            let world = lock(&world);
            let entity = world
                .entities
                .get(&uuid_arg(symbol, &args[0])?)
                .ok_or_else(|| no_entity(symbol))?;
            Ok(entity.tags.get(&key).map(|v| json!(v)).unwrap_or(Value::Null))
        });

        let world = w.clone();
        let b = b.symbol(symbols.write_entity_tag, move |args| {
            let symbol = "write_entity_tag";
            let (key, value) = match P::ENTITY_TAGS {
                EntityTagLayout::CompoundTag
                    if args.len() == 4 && args[1] == json!(ENTITY_BUKKIT_VALUES) =>
                {
                    (str_arg(symbol, &args[2])?, str_arg(symbol, &args[3])?)
                }
                EntityTagLayout::ValueIo
                    if args.len() == 2
                        && args[1].get("child") == Some(&json!(ENTITY_BUKKIT_VALUES)) =>
                {
                    let key = args[1].get("key").ok_or_else(|| bad_args(symbol))?;
                    let value = args[1].get("value").ok_or_else(|| bad_args(symbol))?;
                    (str_arg(symbol, key)?, str_arg(symbol, value)?)
                }
                _ => return Err(bad_args(symbol)),
            };
            let id = uuid_arg(symbol, &args[0])?;
            let mut world = lock(&world);
            let entity = world.entities.get_mut(&id).ok_or_else(|| no_entity(symbol))?;
            entity.tags.insert(key.to_string(), value.to_string());
            Ok(Value::Null)
        });

        let world = w;
        b.symbol(symbols.action_bar, move |args| {
            let symbol = "send_action_bar";
            expect_len(symbol, args, 2)?;
            let id = uuid_arg(symbol, &args[0])?;
            let text = args[1]
                .get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| bad_args(symbol))?
                .to_string();
            let mut world = lock(&world);
            if !world.entities.contains_key(&id) {
                return Err(no_entity(symbol));
            }
            world.action_bars.push((id, text));
            Ok(Value::Null)
        })
    }

    pub fn build(self) -> SimulatedHost {
        let symbols = self
            .handlers
            .iter()
            .enumerate()
            .map(|(slot, (name, _))| (name.clone(), slot as u64))
            .collect();
        SimulatedHost {
            version: self.version,
            symbols,
            handlers: self.handlers,
            lookups: Mutex::new(HashMap::new()),
            world: self.world,
        }
    }
}

// ============================================================================
// Argument Helpers
// ============================================================================

fn lock(world: &World) -> MutexGuard<'_, WorldState> {
    world.lock().expect("world state poisoned")
}

fn bad_args(symbol: &str) -> HostError {
    HostError::invocation(symbol, "argument mismatch")
}

fn no_entity(symbol: &str) -> HostError {
    HostError::invocation(symbol, "no such entity")
}

fn no_item(symbol: &str) -> HostError {
    HostError::invocation(symbol, "no such item")
}

fn expect_len(symbol: &str, args: &[Value], len: usize) -> Result<(), HostError> {
    if args.len() == len {
        Ok(())
    } else {
        Err(bad_args(symbol))
    }
}

fn str_arg<'a>(symbol: &str, value: &'a Value) -> Result<&'a str, HostError> {
    value.as_str().ok_or_else(|| bad_args(symbol))
}

fn f64_arg(symbol: &str, value: &Value) -> Result<f64, HostError> {
    value.as_f64().ok_or_else(|| bad_args(symbol))
}

fn uuid_arg(symbol: &str, value: &Value) -> Result<Uuid, HostError> {
    str_arg(symbol, value)?
        .parse()
        .map_err(|_| bad_args(symbol))
}

fn item_arg(symbol: &str, value: &Value) -> Result<u64, HostError> {
    value.as_u64().ok_or_else(|| bad_args(symbol))
}

fn block_key(symbol: &str, args: &[Value]) -> Result<(String, BlockPos), HostError> {
    let coord = |value: &Value| {
        value
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| bad_args(symbol))
    };
    Ok((
        str_arg(symbol, &args[0])?.to_string(),
        BlockPos::new(coord(&args[1])?, coord(&args[2])?, coord(&args[3])?),
    ))
}
