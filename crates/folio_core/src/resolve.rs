//! Resolve-or-skip element lookup
//!
//! Every behavior resolves its elements through these helpers. A missing
//! element or an unparseable selector logs a warning and yields nothing, and
//! the caller skips the behavior. Nothing here panics: a page with half its
//! markup absent still runs everything that can run.

use tracing::warn;

use crate::dom::{Document, NodeId};
use crate::selector::SelectorList;

/// Look up an element by id, warning when it is absent.
pub fn by_id(doc: &Document, id: &str) -> Option<NodeId> {
    let found = doc.element_by_id(id);
    if found.is_none() {
        warn!("element with id '{id}' not found");
    }
    found
}

/// First match for a selector, warning on parse failure or no match.
pub fn first_match(doc: &Document, selector: &str) -> Option<NodeId> {
    let list: SelectorList = match selector.parse() {
        Ok(list) => list,
        Err(error) => {
            warn!("invalid selector '{selector}': {error}");
            return None;
        }
    };
    let found = doc.query_first(&list);
    if found.is_none() {
        warn!("no element matches selector '{selector}'");
    }
    found
}

/// All matches for a selector. An empty result is ordinary here (a page may
/// simply have no counters), so only parse failures warn.
pub fn all_matches(doc: &Document, selector: &str) -> Vec<NodeId> {
    let list: SelectorList = match selector.parse() {
        Ok(list) => list,
        Err(error) => {
            warn!("invalid selector '{selector}': {error}");
            return Vec::new();
        }
    };
    doc.query_all(&list)
}
