use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::api::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort applied to the currently loaded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Options offered by the sort selector, in display order.
    /// `None` stands for "Sort by" (fetch order).
    pub const OPTIONS: [Option<SortOrder>; 5] = [
        None,
        Some(SortOrder::new(SortKey::Title, SortDirection::Asc)),
        Some(SortOrder::new(SortKey::Title, SortDirection::Desc)),
        Some(SortOrder::new(SortKey::Price, SortDirection::Asc)),
        Some(SortOrder::new(SortKey::Price, SortDirection::Desc)),
    ];

    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn label(&self) -> &'static str {
        match (self.key, self.direction) {
            (SortKey::Title, SortDirection::Asc) => "Name (A-Z)",
            (SortKey::Title, SortDirection::Desc) => "Name (Z-A)",
            (SortKey::Price, SortDirection::Asc) => "Price ↑",
            (SortKey::Price, SortDirection::Desc) => "Price ↓",
        }
    }

    /// Next entry of [`SortOrder::OPTIONS`], wrapping around.
    pub fn cycle(current: Option<SortOrder>) -> Option<SortOrder> {
        let index = Self::OPTIONS
            .iter()
            .position(|option| *option == current)
            .unwrap_or(0);
        Self::OPTIONS[(index + 1) % Self::OPTIONS.len()]
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            SortKey::Title => "title",
            SortKey::Price => "price",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}-{}", key, direction)
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, direction) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid sort '{}'", s))?;
        let key = match key {
            "title" => SortKey::Title,
            "price" => SortKey::Price,
            other => return Err(format!("unknown sort key '{}'", other)),
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => return Err(format!("unknown sort direction '{}'", other)),
        };
        Ok(SortOrder::new(key, direction))
    }
}

/// Sort `products` in place. Stable: equal keys keep fetch order.
///
/// Only the slice given is reordered, so sorting a single page does not
/// produce a global order across pages.
pub fn sort_products(products: &mut [Product], order: Option<SortOrder>) {
    let Some(order) = order else {
        return;
    };
    products.sort_by(|a, b| {
        let ordering = compare(a, b, order.key);
        match order.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Price => a.price.total_cmp(&b.price),
    }
}
