//! BEM rule violations and their bookkeeping.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A broken BEM naming rule. `Display` yields the fixed report message.
pub enum Violation {
    WrongElementSeparator,
    WrongModifierValueSeparator,
    ElementOfElement,
    ElementOutsideBlock,
    ElementMixedWithBlock,
    ModifierWithoutModifiable,
}

impl Violation {
    pub fn message(self) -> &'static str {
        match self {
            Violation::WrongElementSeparator => "Wrong element separator!",
            Violation::WrongModifierValueSeparator => "Wrong modifier value separator!",
            Violation::ElementOfElement => "Element of element!",
            Violation::ElementOutsideBlock => "Element outside its block!",
            Violation::ElementMixedWithBlock => "Element mixed with its block!",
            Violation::ModifierWithoutModifiable => "Modifier without modifiable!",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Insertion-ordered set of distinct violations attached to one element.
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Adds `violation` unless it is already present. Returns whether it was new.
    pub fn insert(&mut self, violation: Violation) -> bool {
        if self.0.contains(&violation) {
            return false;
        }
        self.0.push(violation);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Violation> + '_ {
        self.0.iter().copied()
    }

    /// Messages joined by a single space, in insertion order.
    pub fn joined(&self) -> String {
        self.iter().map(Violation::message).collect::<Vec<_>>().join(" ")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Counts every violation occurrence within one lint invocation.
pub struct ViolationCount(usize);

impl ViolationCount {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Records one occurrence: always counted, shown once per element.
pub fn record(violations: &mut Violations, count: &mut ViolationCount, violation: Violation) {
    count.increment();
    violations.insert(violation);
}
