//! BEM naming rules applied to a single element.
//!
//! Three independent passes run over the class list:
//! - separator shape (`block_el`, `block--mod__value`)
//! - element nesting and block containment (`block__el__sub`, stray elements)
//! - modifiers that lack their unmodified base class
//!
//! Each pass only runs when its separator occurs somewhere in the list.
//! Every occurrence bumps the shared counter; the returned set keeps each
//! message once.

use crate::markup::Element;
use crate::models::violation::record;
use crate::models::{Violation, ViolationCount, Violations};
use crate::separators::{ELEMENT, MODIFIER, MODIFIER_VALUE};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn single_underscore() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^_]_[^_]").expect("valid regex"))
}

fn double_modifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"--.*(__|--)").expect("valid regex"))
}

/// Run every rule against `element` with the prefixes visible to it.
pub fn check_element(
    element: &Element,
    prefixes: &BTreeSet<String>,
    count: &mut ViolationCount,
) -> Violations {
    let mut violations = Violations::default();
    check_separators(&element.classes, &mut violations, count);
    check_element_classes(element, prefixes, &mut violations, count);
    check_modifiers(&element.classes, &mut violations, count);
    violations
}

fn any_contains(classes: &[String], needle: &str) -> bool {
    classes.iter().any(|c| c.contains(needle))
}

/// Single `_` used where `__` was meant, or a modifier value chained with
/// another separator.
pub fn check_separators(
    classes: &[String],
    violations: &mut Violations,
    count: &mut ViolationCount,
) {
    if !any_contains(classes, MODIFIER_VALUE) {
        return;
    }
    for class in classes {
        if !class.contains(MODIFIER) && single_underscore().is_match(class) {
            record(violations, count, Violation::WrongElementSeparator);
        }
        if double_modifier().is_match(class) {
            record(violations, count, Violation::WrongModifierValueSeparator);
        }
    }
}

/// Elements of elements, elements outside their block, and elements that
/// also carry their block class.
pub fn check_element_classes(
    element: &Element,
    prefixes: &BTreeSet<String>,
    violations: &mut Violations,
    count: &mut ViolationCount,
) {
    if !any_contains(&element.classes, ELEMENT) {
        return;
    }
    for class in &element.classes {
        let parts: Vec<&str> = class.split(ELEMENT).collect();
        // A modifier segment in the first two parts exempts deeper nesting.
        if parts.len() > 2 && !parts[0].contains(MODIFIER) && !parts[1].contains(MODIFIER) {
            record(violations, count, Violation::ElementOfElement);
        } else if parts.len() > 1 && !parts[0].contains(MODIFIER) {
            let prefix = parts[0];
            if !prefixes.contains(prefix) {
                record(violations, count, Violation::ElementOutsideBlock);
            } else if element.has_class(prefix) {
                record(violations, count, Violation::ElementMixedWithBlock);
            }
        }
    }
}

/// `x--mod` requires `x` on the same element.
pub fn check_modifiers(
    classes: &[String],
    violations: &mut Violations,
    count: &mut ViolationCount,
) {
    if !any_contains(classes, MODIFIER) {
        return;
    }
    for class in classes {
        if let Some((base, _)) = class.split_once(MODIFIER) {
            if !classes.iter().any(|c| c == base) {
                record(violations, count, Violation::ModifierWithoutModifiable);
            }
        }
    }
}
