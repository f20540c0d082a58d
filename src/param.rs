use crate::model::{Enable, Requirement};

/// Handle to a registered positional argument.
///
/// Handles are plain indices resolved through the [`Parser`](crate::Parser)
/// on each access, so later registrations never invalidate them.  A handle
/// is only valid on the parser that issued it; resolving it elsewhere
/// panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentRef(pub(crate) usize);

/// Handle to a registered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRef(pub(crate) usize);

/// Handle to a registered switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchRef(pub(crate) usize);

/// Handle to a registered help section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpSectionRef(pub(crate) usize);

/// A named grouping hint for help rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    name: String,
    description: String,
}

impl HelpSection {
    /// Create a help section.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The section description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The kind of a registered parameter.
///
/// All three kinds share the common [`Param`] header; the tag carries only
/// what differs (the single-character abbreviation of named parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Bound by position in the token stream.
    Argument,
    /// Named parameter taking a string value (`--name`, `-a`).
    Option {
        /// Single-character alias, if any.
        abbr: Option<char>,
    },
    /// Named boolean parameter; presence means on.
    Switch {
        /// Single-character alias, if any.
        abbr: Option<char>,
    },
}

/// A registered parameter record, owned by the parser.
///
/// Parsing mutates `value` in place; everything else is mutated only by the
/// caller through the `set_*` accessors.
#[derive(Debug, Clone)]
pub struct Param {
    name: String,
    value: String,
    requirement: Requirement,
    enable: Enable,
    description: String,
    help_section: Option<HelpSectionRef>,
    help_index: usize,
    kind: ParamKind,
}

impl Param {
    fn new(
        name: String,
        value: String,
        requirement: Requirement,
        description: String,
        enable: Enable,
        kind: ParamKind,
    ) -> Self {
        debug_assert!(!name.is_empty(), "parameter name must be non-empty");
        Self {
            name,
            value,
            requirement,
            enable,
            description,
            help_section: None,
            help_index: 0,
            kind,
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current bound value (the default until a parse binds the token).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Overwrite the bound value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the parameter is required or optional.
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// Change the requirement.
    pub fn set_requirement(&mut self, requirement: Requirement) {
        self.requirement = requirement;
    }

    /// The enablement predicate.
    pub fn enable(&self) -> &Enable {
        &self.enable
    }

    /// Replace the enablement predicate.
    pub fn set_enable(&mut self, enable: Enable) {
        self.enable = enable;
    }

    /// The descriptive text shown in help output.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// The help section this parameter belongs to, if any.
    pub fn help_section(&self) -> Option<HelpSectionRef> {
        self.help_section
    }

    /// Assign or clear the help section.
    pub fn set_help_section(&mut self, section: Option<HelpSectionRef>) {
        self.help_section = section;
    }

    /// The ordering hint within its help section.
    pub fn help_index(&self) -> usize {
        self.help_index
    }

    /// Change the ordering hint.
    pub fn set_help_index(&mut self, index: usize) {
        self.help_index = index;
    }

    /// The kind tag.
    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Whether this parameter consumes a value token (options yes,
    /// arguments and switches no).
    pub fn expects_value(&self) -> bool {
        matches!(self.kind, ParamKind::Option { .. })
    }

    /// The single-character abbreviation of a named parameter.
    pub fn abbr(&self) -> Option<char> {
        match self.kind {
            ParamKind::Argument => None,
            ParamKind::Option { abbr } | ParamKind::Switch { abbr } => abbr,
        }
    }

    /// Whether a switch is set.  A switch is on iff its value is non-empty;
    /// no other meaning is assigned to the value.
    pub fn is_on(&self) -> bool {
        !self.value.is_empty()
    }

    /// Set a switch on (stores `"1"`) or off (stores `""`).
    pub fn set_on(&mut self, on: bool) {
        self.value = if on { "1".to_string() } else { String::new() };
    }
}

/// Declares a positional argument, consumed by
/// [`Parser::add_argument`](crate::Parser::add_argument).
///
/// Defaults: empty value, [`Requirement::Required`], no description, always
/// enabled.
#[derive(Debug, Clone)]
pub struct Argument {
    name: String,
    value: String,
    requirement: Requirement,
    description: String,
    enable: Enable,
}

impl Argument {
    /// Declare an argument.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            requirement: Requirement::Required,
            description: String::new(),
            enable: Enable::Always,
        }
    }

    /// Set the default value, used when no token binds the argument.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the requirement.
    pub fn requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Mark the argument optional.
    pub fn optional(self) -> Self {
        self.requirement(Requirement::Optional)
    }

    /// Set the help description.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the enablement predicate.
    pub fn enable(mut self, enable: Enable) -> Self {
        self.enable = enable;
        self
    }

    pub(crate) fn into_param(self) -> Param {
        let Argument {
            name,
            value,
            requirement,
            description,
            enable,
        } = self;
        Param::new(
            name,
            value,
            requirement,
            description,
            enable,
            ParamKind::Argument,
        )
    }
}

/// Declares a named option, consumed by
/// [`Parser::add_option`](crate::Parser::add_option).
///
/// Matched by `--name` or by its abbreviation `-a`; always expects a string
/// value.  Defaults: no abbreviation, empty value,
/// [`Requirement::Optional`], no description, always enabled.
#[derive(Debug, Clone)]
pub struct Opt {
    name: String,
    abbr: Option<char>,
    value: String,
    requirement: Requirement,
    description: String,
    enable: Enable,
}

impl Opt {
    /// Declare an option.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbr: None,
            value: String::new(),
            requirement: Requirement::Optional,
            description: String::new(),
            enable: Enable::Always,
        }
    }

    /// Set the single-character abbreviation.
    pub fn abbr(mut self, abbr: char) -> Self {
        self.abbr = Some(abbr);
        self
    }

    /// Set the default value, used when no token binds the option.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the requirement.
    pub fn requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Mark the option required.
    pub fn required(self) -> Self {
        self.requirement(Requirement::Required)
    }

    /// Set the help description.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the enablement predicate.
    pub fn enable(mut self, enable: Enable) -> Self {
        self.enable = enable;
        self
    }

    pub(crate) fn into_param(self) -> Param {
        let Opt {
            name,
            abbr,
            value,
            requirement,
            description,
            enable,
        } = self;
        Param::new(
            name,
            value,
            requirement,
            description,
            enable,
            ParamKind::Option { abbr },
        )
    }
}

/// Declares a switch, consumed by
/// [`Parser::add_switch`](crate::Parser::add_switch).
///
/// A switch is a named parameter whose presence alone is meaningful: it takes
/// no value and is always optional.
#[derive(Debug, Clone)]
pub struct Switch {
    name: String,
    abbr: Option<char>,
    description: String,
    enable: Enable,
}

impl Switch {
    /// Declare a switch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbr: None,
            description: String::new(),
            enable: Enable::Always,
        }
    }

    /// Set the single-character abbreviation.
    pub fn abbr(mut self, abbr: char) -> Self {
        self.abbr = Some(abbr);
        self
    }

    /// Set the help description.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the enablement predicate.
    pub fn enable(mut self, enable: Enable) -> Self {
        self.enable = enable;
        self
    }

    pub(crate) fn into_param(self) -> Param {
        let Switch {
            name,
            abbr,
            description,
            enable,
        } = self;
        Param::new(
            name,
            String::new(),
            Requirement::Optional,
            description,
            enable,
            ParamKind::Switch { abbr },
        )
    }
}
