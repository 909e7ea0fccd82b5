//! Element registry, relation table, item tagging and entity assignment
//!
//! [`ElementApi`] is constructed once during activation with the bound
//! capability layer and then shared. All methods take `&self` and may be
//! called from any host thread.

use crate::element::Element;
use crate::error::{ElementError, ElementResult};
use crate::relation::ElementRelation;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use elementapi_bridge::NmsBinding;
use elementapi_nms_api::{EntityRef, ItemRef, NmsVersion, TagKey};
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

/// Key of the tag holding an item's or entity's element, under the configured namespace
pub const ELEMENT_TAG: &str = "element_id";

pub struct ElementApi {
    nms: NmsBinding,
    tag_key: TagKey,
    elements: DashMap<String, Element>,
    default_element: OnceCell<Element>,
    /// One entry per unordered pair, keyed `(lesser, greater)`
    relations: DashMap<(Element, Element), ElementRelation>,
}

impl ElementApi {
    /// Create the element layer over a resolved capability binding.
    ///
    /// `namespace` scopes the item tag, e.g. `elementapi:element_id`.
    pub fn new(nms: NmsBinding, namespace: &str) -> ElementResult<Self> {
        let tag_key = TagKey::new(namespace, ELEMENT_TAG)?;
        debug!(version = %nms.version(), tag = %tag_key, "Element API ready");
        Ok(Self {
            nms,
            tag_key,
            elements: DashMap::new(),
            default_element: OnceCell::new(),
            relations: DashMap::new(),
        })
    }

    /// The bound capability layer
    pub fn nms(&self) -> &NmsBinding {
        &self.nms
    }

    pub fn version(&self) -> NmsVersion {
        self.nms.version()
    }

    pub fn tag_key(&self) -> &TagKey {
        &self.tag_key
    }

    /// Register an element. Returns `false` if its ID is already taken.
    ///
    /// The first element ever registered becomes the default element.
    pub fn register_element(&self, element: Element) -> bool {
        match self.elements.entry(element.id().to_string()) {
            Entry::Occupied(_) => {
                debug!(element = %element, "Element already registered");
                false
            }
            Entry::Vacant(slot) => {
                let _ = self.default_element.set(element.clone());
                debug!(element = %element, "Registered element");
                slot.insert(element);
                true
            }
        }
    }

    /// Register an element and assign it to `entity`.
    ///
    /// The entity is only tagged when registration succeeds; a duplicate ID
    /// returns `Ok(false)` and leaves the entity untouched.
    pub fn register_element_for(&self, element: Element, entity: EntityRef) -> ElementResult<bool> {
        let id = element.id().to_string();
        if !self.register_element(element) {
            return Ok(false);
        }
        self.nms.write_entity_tag(entity, &self.tag_key, &id)?;
        debug!(element = %id, entity = %entity.0, "Assigned element to entity");
        Ok(true)
    }

    /// Look an element up by ID, ignoring case
    pub fn element(&self, id: &str) -> Option<Element> {
        self.elements
            .get(&id.to_uppercase())
            .map(|entry| entry.value().clone())
    }

    pub fn default_element(&self) -> Option<Element> {
        self.default_element.get().cloned()
    }

    /// Every registered element, ordered by ID
    pub fn elements(&self) -> Vec<Element> {
        let mut elements: Vec<Element> = self
            .elements
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        elements.sort();
        elements
    }

    /// Set how `from` acts against `to`; the opposite direction gets the inverse.
    pub fn set_relation(&self, from: &Element, to: &Element, relation: ElementRelation) {
        if from <= to {
            self.relations.insert((from.clone(), to.clone()), relation);
        } else {
            self.relations
                .insert((to.clone(), from.clone()), relation.inverse());
        }
        debug!(from = %from, to = %to, relation = %relation, "Set element relation");
    }

    /// Relation from `from` to `to`, `General` when none was set
    pub fn relation(&self, from: &Element, to: &Element) -> ElementRelation {
        self.relation_or(from, to, ElementRelation::General)
    }

    pub fn relation_or(
        &self,
        from: &Element,
        to: &Element,
        default: ElementRelation,
    ) -> ElementRelation {
        let stored = if from <= to {
            self.relations
                .get(&(from.clone(), to.clone()))
                .map(|entry| *entry.value())
        } else {
            self.relations
                .get(&(to.clone(), from.clone()))
                .map(|entry| entry.value().inverse())
        };
        stored.unwrap_or(default)
    }

    /// Shorthand for `relation(from, to).multiplier()`
    pub fn multiplier(&self, from: &Element, to: &Element) -> f64 {
        self.relation(from, to).multiplier()
    }

    /// Store `element` on an item stack.
    ///
    /// # Errors
    ///
    /// `UnknownElement` if `element` is not registered, or the capability
    /// error if the write fails.
    pub fn tag_item(&self, element: &Element, item: ItemRef) -> ElementResult<()> {
        if !self.elements.contains_key(element.id()) {
            return Err(ElementError::unknown(element.id()));
        }
        self.nms
            .write_item_tag(item, &self.tag_key, element.id())?;
        Ok(())
    }

    /// Element stored on an item stack, if any.
    ///
    /// Tags naming an element that is no longer registered read as `None`.
    pub fn element_from_item(&self, item: ItemRef) -> ElementResult<Option<Element>> {
        let Some(id) = self.nms.read_item_tag(item, &self.tag_key)? else {
            return Ok(None);
        };
        let element = self.element(&id);
        if element.is_none() {
            warn!(item = item.0, element = %id, "Item tagged with unregistered element");
        }
        Ok(element)
    }

    /// Element assigned to an entity, if any.
    ///
    /// Like items, entities tagged with an unregistered element read as `None`.
    pub fn element_of(&self, entity: EntityRef) -> ElementResult<Option<Element>> {
        let Some(id) = self.nms.read_entity_tag(entity, &self.tag_key)? else {
            return Ok(None);
        };
        let element = self.element(&id);
        if element.is_none() {
            warn!(entity = %entity.0, element = %id, "Entity tagged with unregistered element");
        }
        Ok(element)
    }
}
