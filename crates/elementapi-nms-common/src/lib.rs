//! Common building blocks for ElementAPI version adapters
//!
//! Adapters differ in *which* host symbols they bind and *how* a few values
//! are laid out on the wire. Both are captured by a [`VersionProfile`]; the
//! shared [`ProfiledAdapter`] turns any profile into a full `ElementNms`
//! implementation, so behavior stays identical across releases.
//!
//! A version crate typically contains:
//!
//! ```ignore
//! pub struct V1_21R3;
//!
//! impl VersionProfile for V1_21R3 { /* consts */ }
//!
//! pub type V1_21R3Adapter = ProfiledAdapter<V1_21R3>;
//!
//! nms_adapter! {
//!     version: V1_21R3::VERSION,
//!     factory: V1_21R3Adapter::boxed
//! }
//! ```

pub mod adapter;
pub mod particles;
pub mod profile;
pub mod wire;

pub use adapter::ProfiledAdapter;
pub use profile::{
    DamageLayout, EntityTagLayout, ItemTagLayout, ParticleLayout, SymbolTable, VersionProfile,
};
