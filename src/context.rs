//! Capabilities the embedding application provides.
//!
//! Trail building is driven entirely by the page being rendered, and the
//! crate never talks to a web framework directly. Instead the application
//! hands every locator call a [`TrailContext`] bundling three capabilities:
//!
//! - [`RequestContext`] — what kind of page is this, and what query
//!   variables came with the request.
//! - [`DateFormatter`] — the current item's date, rendered one part at
//!   a time.
//! - [`LinkResolver`] — archive URLs for a given granularity.
//!
//! All three are implemented by the consumer (the test suite ships fixture
//! implementations in `test_helpers`). Locators treat them as opaque: a
//! missing or non-numeric query variable reads as `0`, and whatever the
//! resolver returns for it is used verbatim.

use crate::item::ItemRegistry;

/// The current request, as the web framework classified it.
///
/// The granularity flags are exclusive: a month archive answers true to
/// `is_month()` and `is_date()` only.
pub trait RequestContext {
    /// Is this any date-archive page (year, month, or day)?
    fn is_date(&self) -> bool;
    /// Is this a year archive?
    fn is_year(&self) -> bool;
    /// Is this a month archive?
    fn is_month(&self) -> bool;
    /// Is this a day archive?
    fn is_day(&self) -> bool;
    /// Raw value of a request query variable (`"year"`, `"monthnum"`,
    /// `"day"`), if the request carried one.
    fn query_var(&self, name: &str) -> Option<String>;
}

/// One part of a formatted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    /// 4-digit year, e.g. `2024`.
    Year,
    /// Full month name, e.g. `March`.
    MonthName,
    /// Zero-padded day of month, e.g. `07`.
    Day,
}

/// Formats the current item's date.
pub trait DateFormatter {
    fn format(&self, part: DatePart) -> String;
}

/// Maps an archive granularity plus date parts to a URL.
pub trait LinkResolver {
    fn year_link(&self, year: u32) -> String;
    fn month_link(&self, year: u32, month: u32) -> String;
    fn day_link(&self, year: u32, month: u32, day: u32) -> String;
}

/// Everything a locator needs to inspect the request and build items.
///
/// Borrowed and request-scoped: the trail builder assembles one per build
/// and discards it afterwards.
pub struct TrailContext<'a> {
    pub request: &'a dyn RequestContext,
    pub dates: &'a dyn DateFormatter,
    pub links: &'a dyn LinkResolver,
    pub registry: &'a ItemRegistry,
}
