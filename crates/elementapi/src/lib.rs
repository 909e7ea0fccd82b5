//! ElementAPI
//!
//! Element registry and relations for Minecraft server plugins, on top of a
//! capability layer that hides the server's version-specific internals.
//!
//! ```no_run
//! use elementapi::{Element, ElementApiPlugin, ElementRelation};
//! # fn run(host: elementapi::HostRef) -> Result<(), Box<dyn std::error::Error>> {
//! let api = ElementApiPlugin::enable(host, &Default::default())?;
//!
//! let fire = Element::new("fire")?;
//! let water = Element::new("water")?;
//! api.register_element(fire.clone());
//! api.register_element(water.clone());
//! api.set_relation(&water, &fire, ElementRelation::Strong);
//!
//! assert_eq!(api.multiplier(&fire, &water), 0.5);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod element;
pub mod error;
pub mod plugin;
pub mod relation;

pub use api::{ElementApi, ELEMENT_TAG};
pub use element::Element;
pub use error::{ActivationError, ElementError, ElementResult};
pub use plugin::ElementApiPlugin;
pub use relation::ElementRelation;

pub use elementapi_bridge::NmsBinding;
pub use elementapi_config::ElementApiConfig;
pub use elementapi_nms_api::{ElementNms, EntityRef, HostInternals, HostRef, ItemRef};
