//! Named boolean escape hatches external code can use to veto interception.

use std::collections::HashMap;

use crate::context::RequestContext;

/// Decides whether the home view query is rewritten (latest-posts mode).
pub const MODIFY_MAIN_QUERY: &str = "homepages_modify_main_query";

/// Decides whether the front page results are replaced (static-page mode).
pub const MODIFY_POST_RESULTS: &str = "homepages_modify_post_results";

/// Priority used when none is given.
pub const DEFAULT_PRIORITY: i32 = 10;

type BoolFilter = Box<dyn Fn(bool, &RequestContext) -> bool + Send + Sync>;

struct Registered {
    priority: i32,
    callback: BoolFilter,
}

/// Registry of boolean filters, applied in ascending priority order.
///
/// Callbacks registered with the same priority run in registration order.
/// Each callback receives the value returned by the previous one.
#[derive(Default)]
pub struct Filters {
    by_name: HashMap<&'static str, Vec<Registered>>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&mut self, name: &'static str, priority: i32, callback: F)
    where
        F: Fn(bool, &RequestContext) -> bool + Send + Sync + 'static,
    {
        let entries = self.by_name.entry(name).or_default();
        let at = entries.partition_point(|r| r.priority <= priority);
        entries.insert(
            at,
            Registered {
                priority,
                callback: Box::new(callback),
            },
        );
    }

    /// Convenience for a filter that always returns `value`.
    pub fn force(&mut self, name: &'static str, value: bool) {
        self.add(name, DEFAULT_PRIORITY, move |_, _| value);
    }

    pub fn apply(&self, name: &str, value: bool, ctx: &RequestContext) -> bool {
        self.by_name
            .get(name)
            .map(|entries| {
                entries
                    .iter()
                    .fold(value, |acc, entry| (entry.callback)(acc, ctx))
            })
            .unwrap_or(value)
    }
}

impl std::fmt::Debug for Filters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> =
            self.by_name.iter().map(|(k, v)| (*k, v.len())).collect();
        f.debug_struct("Filters").field("registered", &counts).finish()
    }
}
