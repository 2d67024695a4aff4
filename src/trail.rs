//! Trail assembly and rendering.
//!
//! The [`TrailBuilder`] owns the pieces that outlive a single request: the
//! item registry and the locator list (the date locator is registered out of
//! the box). [`build`](TrailBuilder::build) runs every locator over the
//! current request, concatenates their items, prepends the configured home
//! item, and priority-sorts the result into an immutable [`Trail`].
//!
//! Sorting is stable: items sharing a priority keep the order their locators
//! emitted them in, and locators run in registration order.
//!
//! ## Rendering
//!
//! [`Trail::render`] produces [maud](https://maud.lambda.xyz/) markup —
//! type-safe, auto-escaped HTML with no template files:
//!
//! ```text
//! <nav class="breadcrumb-trail">
//!   <a href="/">Home</a>
//!   <span class="crumb-glue"> › </span>
//!   <a href="https://example.com/2024/">2024</a>
//!   <span class="crumb-glue"> › </span>
//!   <span class="crumb-current">March</span>
//! </nav>
//! ```
//!
//! Trails shorter than `min_items` render nothing at all — a lone home item
//! on a regular page is noise, not navigation.

use crate::config::TrailConfig;
use crate::context::{DateFormatter, LinkResolver, RequestContext, TrailContext};
use crate::date::DateLocator;
use crate::item::{Item, ItemError, ItemRegistry};
use crate::locator::Locator;
use maud::{Markup, html};

/// A finished, priority-ordered breadcrumb trail.
#[derive(Debug)]
pub struct Trail {
    items: Vec<Item>,
}

impl Trail {
    /// Stable-sort a finished item list by priority and wrap it.
    pub fn from_items(mut items: Vec<Item>) -> Self {
        items.sort_by_key(|item| item.priority);
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the trail as HTML.
    ///
    /// Items link to their URL; items with no URL — and the terminal item,
    /// unless `last_item_link` — render as plain text. Below `min_items`
    /// the markup is empty.
    pub fn render(&self, config: &TrailConfig) -> Markup {
        if self.items.is_empty() || self.items.len() < config.min_items {
            return html! {};
        }

        let last = self.items.len() - 1;
        html! {
            nav.breadcrumb-trail {
                @for (idx, item) in self.items.iter().enumerate() {
                    @if idx > 0 {
                        span.crumb-glue { (config.glue) }
                    }
                    @if item.link.is_empty() || (idx == last && !config.last_item_link) {
                        span.crumb-current { (item.title) }
                    } @else {
                        a href=(item.link) target=[explicit_target(item)] { (item.title) }
                    }
                }
            }
        }
    }
}

/// Target attribute value, omitted for the default `_self`.
fn explicit_target(item: &Item) -> Option<&str> {
    (item.target != "_self").then_some(item.target.as_str())
}

/// Assembles breadcrumb trails for incoming requests.
pub struct TrailBuilder {
    registry: ItemRegistry,
    locators: Vec<Box<dyn Locator>>,
}

impl TrailBuilder {
    /// Builder with the stock registry and the date locator.
    pub fn new() -> Self {
        Self {
            registry: ItemRegistry::new(),
            locators: vec![Box::new(DateLocator::new())],
        }
    }

    /// Builder with no locators, for assembling a fully custom strategy list.
    pub fn without_locators() -> Self {
        Self {
            registry: ItemRegistry::new(),
            locators: Vec::new(),
        }
    }

    /// Append a locator; it runs after everything already registered.
    pub fn add_locator(&mut self, locator: Box<dyn Locator>) {
        self.locators.push(locator);
    }

    /// The item registry, for registering application variants.
    pub fn registry_mut(&mut self) -> &mut ItemRegistry {
        &mut self.registry
    }

    /// Run every locator over the current request and assemble the trail.
    ///
    /// The first registry failure aborts the build — an unknown item type is
    /// a misconfiguration, not a condition to render around.
    pub fn build(
        &self,
        request: &dyn RequestContext,
        dates: &dyn DateFormatter,
        links: &dyn LinkResolver,
        config: &TrailConfig,
    ) -> Result<Trail, ItemError> {
        let ctx = TrailContext {
            request,
            dates,
            links,
            registry: &self.registry,
        };

        let mut items = Vec::new();
        if config.display_home_item {
            let mut home = self.registry.create("custom", config.home_priority)?;
            home.item_mut().title = config.home_title.clone();
            home.item_mut().link = config.home_link.clone();
            home.setup();
            items.push(home.into_item());
        }

        for locator in &self.locators {
            items.extend(locator.generate_items(&ctx)?);
        }

        Ok(Trail::from_items(items))
    }
}

impl Default for TrailBuilder {
    fn default() -> Self {
        Self::new()
    }
}
