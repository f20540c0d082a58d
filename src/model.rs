use std::rc::Rc;

use crate::param::SwitchRef;

/// Whether a parameter must carry a non-empty value by the end of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The parameter must be bound (or carry a non-empty default).
    Required,
    /// The parameter may be left unbound.
    Optional,
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An enablement predicate: decides whether a parameter participates in
/// parsing, validation, and help rendering.
///
/// Predicates are evaluated on demand, unmemoized, at the moment a parameter
/// is inspected.  `SwitchOn` holds a handle rather than a reference, so it is
/// resolved against the parser's registry at evaluation time.
#[derive(Clone)]
pub enum Enable {
    /// Always enabled.
    Always,
    /// Enabled while the referenced switch is set.
    SwitchOn(SwitchRef),
    /// Enabled while the supplied predicate returns true.
    Custom(Rc<dyn Fn() -> bool>),
}

impl Enable {
    /// Enabled while `switch` is set.
    pub fn when_switch(switch: SwitchRef) -> Self {
        Enable::SwitchOn(switch)
    }

    /// Enabled while `predicate` returns true.
    pub fn custom(predicate: impl Fn() -> bool + 'static) -> Self {
        Enable::Custom(Rc::new(predicate))
    }
}

impl Default for Enable {
    fn default() -> Self {
        Enable::Always
    }
}

impl std::fmt::Debug for Enable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Enable::Always => write!(f, "Always"),
            Enable::SwitchOn(switch) => write!(f, "SwitchOn({switch:?})"),
            Enable::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
