//! Date archive locator.
//!
//! Emits the year/month/day slice of the trail. Each granularity is gated by
//! its own condition against the request:
//!
//! | Item  | Included when                 | Title           | Link                        |
//! |-------|-------------------------------|-----------------|-----------------------------|
//! | year  | year, month, or day archive   | `2024`          | `year_link(year)`           |
//! | month | month or day archive          | `March`         | `month_link(year, month)`   |
//! | day   | day archive                   | `07`            | `day_link(year, month, day)`|
//!
//! So a day archive yields three items, a month archive two, a year archive
//! one, and anything else nothing. The order is always year → month → day and
//! the result is never sparse.
//!
//! Items are built as the generic `custom` type with title and link assigned
//! here; `setup()` is still invoked on each, keeping the lifecycle uniform
//! with variants that do populate themselves.

use crate::context::{DatePart, RequestContext, TrailContext};
use crate::item::{Item, ItemError};
use crate::locator::Locator;

/// Locates breadcrumb items for date archive pages.
///
/// Stateless: every call re-derives everything from the live request.
#[derive(Debug, Default)]
pub struct DateLocator;

impl DateLocator {
    pub fn new() -> Self {
        Self
    }
}

/// Read a numeric query variable. A missing or non-numeric value reads as
/// `0`; the link resolver decides what a zero part falls back to.
fn query_num(request: &dyn RequestContext, name: &str) -> u32 {
    request
        .query_var(name)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

impl Locator for DateLocator {
    fn is_included(&self, ctx: &TrailContext) -> bool {
        ctx.request.is_date()
    }

    fn get_items(&self, ctx: &TrailContext, priority: u32) -> Result<Vec<Item>, ItemError> {
        let request = ctx.request;
        let year = query_num(request, "year");
        let month = query_num(request, "monthnum");
        let day = query_num(request, "day");

        // Widest granularity first, so the trail reads Home > 2024 > March > 07.
        let archives = [
            (
                request.is_year() || request.is_month() || request.is_day(),
                DatePart::Year,
                ctx.links.year_link(year),
            ),
            (
                request.is_month() || request.is_day(),
                DatePart::MonthName,
                ctx.links.month_link(year, month),
            ),
            (
                request.is_day(),
                DatePart::Day,
                ctx.links.day_link(year, month, day),
            ),
        ];

        let mut items = Vec::new();
        for (condition, part, link) in archives {
            if !condition {
                continue;
            }
            let mut variant = ctx.registry.create("custom", priority)?;
            variant.item_mut().title = ctx.dates.format(part);
            variant.item_mut().link = link;
            variant.setup();
            items.push(variant.into_item());
        }

        Ok(items)
    }
}
