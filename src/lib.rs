//! # Crumb Trail
//!
//! A breadcrumb trail builder for content-driven websites: given the current
//! page/request context, it determines the sequence of clickable trail items
//! (e.g. Home > 2024 > March > 07), orders them by priority, and renders
//! them as HTML.
//!
//! # Architecture: Locators Feed a Trail
//!
//! Trail building is a pipeline of independent strategies:
//!
//! ```text
//! 1. Locate    request context  →  items       (each locator emits its slice)
//! 2. Assemble  items            →  Trail       (concatenate + priority sort)
//! 3. Render    Trail            →  HTML        (maud markup)
//! ```
//!
//! Every *locator* detects one kind of page — the crate ships the date
//! archive locator (year/month/day) — and emits zero or more items for it.
//! The builder calls each locator uniformly, so adding a page kind to an
//! application means writing one locator, not touching the pipeline.
//!
//! Items themselves are built through a string-keyed *registry*: locators ask
//! for a type by name (`"custom"`, `"date_archive"`, …) and the registry
//! instantiates whatever variant the application registered under it. An
//! unregistered name is a configuration error and aborts the build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`item`] | Item data, the variant capability, and the registry factory |
//! | [`context`] | Capabilities the embedding application provides (request flags, date formatting, archive URLs) |
//! | [`locator`] | The locator capability every strategy implements |
//! | [`date`] | Date archive locator — year/month/day items |
//! | [`trail`] | Trail assembly, priority sorting, and HTML rendering |
//! | [`config`] | `trail.toml` loading, validation, and stock defaults |
//!
//! # Design Decisions
//!
//! ## Registry Over a Closed Enum
//!
//! Item types could have been a closed enum with a `match` in the factory.
//! The registry exists because the variant set is *not* closed: embedding
//! applications bring their own page kinds (posts, terms, users) and register
//! variants for them at startup. The unknown-type error path only makes
//! sense for an open set.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Malformed markup is a
//! build error, template variables are Rust expressions, and all
//! interpolation is auto-escaped — a trail title of `Fish & Chips` can never
//! break the page.
//!
//! ## Capability Traits at the Framework Seam
//!
//! The crate never talks to a web framework. What kind of page is being
//! rendered, what its date is, and what an archive URL looks like all arrive
//! through three small traits ([`context::RequestContext`],
//! [`context::DateFormatter`], [`context::LinkResolver`]). That keeps trail
//! logic a pure function of its inputs, and lets the test suite drive every
//! path with fixture implementations.
//!
//! # Execution Model
//!
//! Single-threaded, synchronous, request-scoped: one trail is built once per
//! page render and discarded afterwards. Locators hold no per-request state,
//! so one [`trail::TrailBuilder`] serves an application's whole lifetime.

pub mod config;
pub mod context;
pub mod date;
pub mod item;
pub mod locator;
pub mod trail;

#[cfg(test)]
pub(crate) mod test_helpers;
