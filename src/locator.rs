//! The locator capability.
//!
//! A locator is one strategy in the trail builder's list: it detects one
//! kind of page context and emits the breadcrumb item(s) appropriate to it.
//! The builder calls every registered locator uniformly; a locator whose
//! context doesn't apply contributes nothing.
//!
//! Locators are stateless relative to the request — everything they need
//! arrives in the [`TrailContext`], so one locator instance serves every
//! build.

use crate::context::TrailContext;
use crate::item::{DEFAULT_PRIORITY, Item, ItemError};

pub trait Locator {
    /// Whether this locator's items belong in the trail for the current
    /// request. Cheap and side-effect-free.
    fn is_included(&self, ctx: &TrailContext) -> bool;

    /// Build the ordered items for this locator's slice of the trail,
    /// each carrying `priority`. Only meaningful when
    /// [`is_included`](Locator::is_included) holds.
    fn get_items(&self, ctx: &TrailContext, priority: u32) -> Result<Vec<Item>, ItemError>;

    /// Items for the current request: empty when the locator doesn't
    /// apply, otherwise [`get_items`](Locator::get_items) at the default
    /// priority. No item construction is attempted on the empty path.
    fn generate_items(&self, ctx: &TrailContext) -> Result<Vec<Item>, ItemError> {
        if !self.is_included(ctx) {
            return Ok(Vec::new());
        }
        self.get_items(ctx, DEFAULT_PRIORITY)
    }
}
