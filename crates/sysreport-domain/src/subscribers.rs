use crate::registries::SubscriberRegistry;
use sysreport_types::EventCategory;

/// Current subscribers for one event category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySubscribers {
    pub category: EventCategory,
    pub subscribers: Vec<String>,
}

/// Query the registry for each category, in the caller's order.
///
/// Categories are never reordered and empty categories are kept: the
/// whitelist is a fixed operator choice, so every entry is always shown,
/// unlike the plugin summary's empty-group suppression.
pub fn inspect(
    registry: &dyn SubscriberRegistry,
    categories: &[EventCategory],
) -> Vec<CategorySubscribers> {
    categories
        .iter()
        .map(|category| CategorySubscribers {
            category: category.clone(),
            subscribers: registry.subscribers_for(category),
        })
        .collect()
}
