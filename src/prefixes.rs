//! Block prefix tracking.
//!
//! Every element sees the block names declared by its ancestors plus the
//! leading block classes of its own class list.

use crate::separators::{ELEMENT, MODIFIER};
use std::collections::BTreeSet;

/// Compute the prefix set visible to an element.
///
/// Starts from a copy of `inherited` and adds classes in order until the
/// first element or modifier class; everything after it is ignored.
pub fn compute_prefixes<S: AsRef<str>>(
    class_names: &[S],
    inherited: &BTreeSet<String>,
) -> BTreeSet<String> {
    let mut prefixes = inherited.clone();
    for name in class_names.iter().map(AsRef::as_ref) {
        if name.contains(ELEMENT) || name.contains(MODIFIER) {
            break;
        }
        prefixes.insert(name.to_string());
    }
    prefixes
}
