//! Breadcrumb items and the registry that builds them.
//!
//! An [`Item`] is the leaf unit of a trail: a title, a link, and the
//! bookkeeping the trail needs to order and render it. Items are not built
//! directly by locators — they go through the [`ItemRegistry`], a string-keyed
//! factory mapping canonical type identifiers to constructors.
//!
//! ## Type names and canonical identifiers
//!
//! Item types are requested by snake_case (or space-separated) name and looked
//! up under a CamelCase identifier derived from it:
//!
//! ```text
//! "custom"        → Custom
//! "date_archive"  → DateArchive
//! "post type"     → PostType
//! ```
//!
//! The built item keeps the *original* requested name in its `item_type`
//! field, so a consumer that registered under `DateArchive` still sees
//! `"date_archive"` on every item it produced.
//!
//! ## Variants
//!
//! Concrete item kinds implement [`ItemVariant`]: they own an embedded
//! [`Item`] and expose a `setup()` hook that populates title/link from
//! whatever context the variant derives them from. The registry constructs a
//! variant and stamps its type, but never calls `setup()` — that is the
//! creator's job, after any further configuration (a subtype, say).
//!
//! The crate ships one built-in variant, [`CustomItem`], whose `setup()` is a
//! no-op: its creator assigns title and link directly. The registry is open;
//! an embedding application registers its own variants at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Priority assigned to items when the caller doesn't pick one.
/// Lower priorities sort earlier in the finished trail.
pub const DEFAULT_PRIORITY: u32 = 1000;

#[derive(Error, Debug)]
pub enum ItemError {
    #[error("unknown breadcrumb item type: \"{0}\"")]
    UnknownType(String),
}

/// A single entry in a breadcrumb trail.
///
/// `link` may be empty for the current/terminal page — the renderer shows
/// such items as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Shown label.
    pub title: String,
    /// Link URL; empty for unlinked entries.
    pub link: String,
    /// Link target attribute.
    pub target: String,
    /// Sort key; lower sorts earlier.
    pub priority: u32,
    /// Type name this item was requested under.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Secondary discriminator, used by multi-flavor variants.
    pub subtype: String,
}

impl Item {
    pub fn new(priority: u32) -> Self {
        Self {
            priority,
            ..Self::default()
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self {
            title: String::new(),
            link: String::new(),
            target: "_self".to_string(),
            priority: DEFAULT_PRIORITY,
            item_type: String::new(),
            subtype: String::new(),
        }
    }
}

/// Capability implemented by every concrete item kind.
///
/// A variant owns its [`Item`] data and knows how to populate it. The
/// lifecycle is fixed: the registry constructs the variant, the creator
/// configures it and calls [`setup()`](ItemVariant::setup) exactly once, then
/// [`into_item()`](ItemVariant::into_item) finalizes it for the trail.
pub trait ItemVariant {
    /// Populate title, link, and any other fields this variant derives
    /// from its own context. Called exactly once, after construction.
    fn setup(&mut self);

    /// The embedded item data.
    fn item(&self) -> &Item;

    /// Mutable access to the embedded item data.
    fn item_mut(&mut self) -> &mut Item;

    /// Finalize the variant into its plain item data.
    fn into_item(self: Box<Self>) -> Item;
}

/// Built-in variant for items whose creator assigns title and link directly.
///
/// This is the workhorse type: locators that already know what the item
/// should say (the date locator, the trail's home item) build a `custom`
/// item rather than defining a variant of their own.
pub struct CustomItem {
    item: Item,
}

impl CustomItem {
    pub fn new(priority: u32) -> Self {
        Self {
            item: Item::new(priority),
        }
    }
}

impl ItemVariant for CustomItem {
    /// No-op: custom items are populated by their creator.
    fn setup(&mut self) {}

    fn item(&self) -> &Item {
        &self.item
    }

    fn item_mut(&mut self) -> &mut Item {
        &mut self.item
    }

    fn into_item(self: Box<Self>) -> Item {
        self.item
    }
}

/// Derive the canonical registry identifier for an item type name.
///
/// Words are split on underscores and spaces, their first letter uppercased
/// (the rest unchanged), and the results concatenated:
/// `"date_archive"` → `"DateArchive"`.
pub fn canonical_type_name(type_name: &str) -> String {
    type_name
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

type Constructor = Box<dyn Fn(u32) -> Box<dyn ItemVariant>>;

/// String-keyed factory for breadcrumb item variants.
///
/// A fresh registry knows the built-in `Custom` variant. Applications
/// register their own variants under their canonical identifier before
/// building trails; requesting an unregistered type is a configuration
/// error and fails with [`ItemError::UnknownType`].
pub struct ItemRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            constructors: HashMap::new(),
        };
        registry.register("Custom", |priority| Box::new(CustomItem::new(priority)));
        registry
    }

    /// Register a variant constructor under its canonical identifier.
    /// Re-registering an identifier replaces the previous constructor.
    pub fn register(
        &mut self,
        canonical_id: impl Into<String>,
        constructor: impl Fn(u32) -> Box<dyn ItemVariant> + 'static,
    ) {
        self.constructors
            .insert(canonical_id.into(), Box::new(constructor));
    }

    /// Build a new item variant of the requested type.
    ///
    /// The variant is constructed with `priority` and stamped with the
    /// original `item_type` string. `setup()` has *not* been called on the
    /// returned variant — configure it first, then call `setup()` yourself.
    pub fn create(
        &self,
        item_type: &str,
        priority: u32,
    ) -> Result<Box<dyn ItemVariant>, ItemError> {
        let canonical = canonical_type_name(item_type);
        let constructor = self
            .constructors
            .get(&canonical)
            .ok_or_else(|| ItemError::UnknownType(item_type.to_string()))?;

        let mut variant = constructor(priority);
        variant.item_mut().item_type = item_type.to_string();
        Ok(variant)
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Variant whose setup() leaves a visible trace, so tests can tell
    /// whether and when the hook ran.
    struct TracedItem {
        item: Item,
    }

    impl ItemVariant for TracedItem {
        fn setup(&mut self) {
            self.item.title = "populated by setup".to_string();
        }

        fn item(&self) -> &Item {
            &self.item
        }

        fn item_mut(&mut self) -> &mut Item {
            &mut self.item
        }

        fn into_item(self: Box<Self>) -> Item {
            self.item
        }
    }

    #[test]
    fn new_item_defaults() {
        let item = Item::new(DEFAULT_PRIORITY);
        assert_eq!(item.title, "");
        assert_eq!(item.link, "");
        assert_eq!(item.target, "_self");
        assert_eq!(item.priority, 1000);
        assert_eq!(item.item_type, "");
        assert_eq!(item.subtype, "");
    }

    #[test]
    fn new_item_keeps_requested_priority() {
        assert_eq!(Item::new(25).priority, 25);
    }

    #[test]
    fn canonical_name_snake_case() {
        assert_eq!(canonical_type_name("date_archive"), "DateArchive");
        assert_eq!(canonical_type_name("custom"), "Custom");
    }

    #[test]
    fn canonical_name_space_separated() {
        assert_eq!(canonical_type_name("post type"), "PostType");
    }

    #[test]
    fn canonical_name_collapses_repeated_separators() {
        assert_eq!(canonical_type_name("date__archive"), "DateArchive");
        assert_eq!(canonical_type_name("date _archive"), "DateArchive");
    }

    #[test]
    fn canonical_name_preserves_inner_casing() {
        assert_eq!(canonical_type_name("dateARCHIVE"), "DateARCHIVE");
    }

    #[test]
    fn create_stamps_original_type_name() {
        let registry = ItemRegistry::new();
        let variant = registry.create("custom", 500).unwrap();
        assert_eq!(variant.item().item_type, "custom");
        assert_eq!(variant.item().priority, 500);
    }

    #[test]
    fn create_unknown_type_fails() {
        let registry = ItemRegistry::new();
        let Err(err) = registry.create("does_not_exist", DEFAULT_PRIORITY) else {
            panic!("expected an unknown type error");
        };
        assert!(matches!(err, ItemError::UnknownType(ref t) if t == "does_not_exist"));
        assert_eq!(
            err.to_string(),
            "unknown breadcrumb item type: \"does_not_exist\""
        );
    }

    #[test]
    fn create_resolves_registered_variant() {
        let mut registry = ItemRegistry::new();
        registry.register("DateArchive", |priority| {
            Box::new(TracedItem {
                item: Item::new(priority),
            })
        });

        let mut variant = registry.create("date_archive", 200).unwrap();
        assert_eq!(variant.item().item_type, "date_archive");

        // The traced setup proves the DateArchive constructor was chosen.
        variant.setup();
        assert_eq!(variant.item().title, "populated by setup");
    }

    #[test]
    fn create_does_not_call_setup() {
        let mut registry = ItemRegistry::new();
        registry.register("Traced", |priority| {
            Box::new(TracedItem {
                item: Item::new(priority),
            })
        });

        let variant = registry.create("traced", DEFAULT_PRIORITY).unwrap();
        assert_eq!(variant.item().title, "");
    }

    #[test]
    fn custom_setup_is_a_no_op() {
        let registry = ItemRegistry::new();
        let mut variant = registry.create("custom", DEFAULT_PRIORITY).unwrap();
        variant.item_mut().title = "March".to_string();
        variant.item_mut().link = "https://example.com/2024/03/".to_string();
        variant.setup();

        let item = variant.into_item();
        assert_eq!(item.title, "March");
        assert_eq!(item.link, "https://example.com/2024/03/");
    }

    #[test]
    fn register_replaces_existing_constructor() {
        let mut registry = ItemRegistry::new();
        registry.register("Custom", |priority| {
            Box::new(TracedItem {
                item: Item::new(priority),
            })
        });

        let mut variant = registry.create("custom", DEFAULT_PRIORITY).unwrap();
        variant.setup();
        assert_eq!(variant.item().title, "populated by setup");
    }

    #[test]
    fn item_serializes_type_under_wire_name() {
        let mut item = Item::new(10);
        item.title = "Home".to_string();
        item.item_type = "custom".to_string();

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "custom");
        assert_eq!(json["target"], "_self");
        assert_eq!(json["priority"], 10);
    }
}
