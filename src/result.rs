use thiserror::Error;

/// A diagnostic produced while validating a command definition or parsing an
/// argument vector.
///
/// The rendered messages are part of the external contract and must stay
/// byte-stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A positional token arrived with no slot left to fill.  Reports the
    /// current 1-based slot number, not the overflowing count.
    #[error("This command does not accept {slot} positional arguments")]
    ExcessPositional {
        /// 1-based index of the unfillable slot.
        slot: usize,
    },

    /// An option-shaped token matched no registered, enabled option.
    #[error("This command does not accept \"{token}\" option")]
    UnknownOption {
        /// The offending token, verbatim.
        token: String,
    },

    /// A short cluster contained a character that is not a registered,
    /// enabled switch.
    #[error("This command does not accept \"{token}\" switch")]
    UnknownSwitch {
        /// The offending token, verbatim.
        token: String,
    },

    /// A required positional argument was left with an empty value.
    #[error("Positional argument {name} is required")]
    MissingArgument {
        /// Name of the unbound argument.
        name: String,
    },

    /// A required option was left with an empty value.
    #[error("Option {name} is required")]
    MissingOption {
        /// Name of the unbound option.
        name: String,
    },

    /// A required positional argument was registered after an optional one.
    /// A programmer error in the command definition, not a user error.
    #[error("Positional argument \"{name}\" cannot be optional")]
    RequiredAfterOptional {
        /// Name of the misplaced argument.
        name: String,
    },
}

/// The accumulated outcome of a parse or validation pass.
///
/// Ok iff no error was accumulated.  Errors are preserved in arrival order;
/// parsing never aborts on the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    errors: Vec<ParseError>,
}

impl ParseResult {
    /// An empty (ok) result.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Append the other result's errors, returning whether it was ok.
    pub fn merge(&mut self, other: ParseResult) -> bool {
        let ok = other.is_ok();
        self.errors.extend(other.errors);
        ok
    }

    /// True iff no error was accumulated.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The accumulated errors, in arrival order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// All diagnostics joined, each line terminated with a newline.
    pub fn error_str(&self) -> String {
        let mut out = String::new();
        for error in &self.errors {
            out.push_str(&error.to_string());
            out.push('\n');
        }
        out
    }
}

impl From<TokenResult> for ParseResult {
    fn from(outcome: TokenResult) -> Self {
        Self {
            errors: outcome.errors,
        }
    }
}

/// The outcome of offering a single token to the dispatch branches.
///
/// *Accepted* and *error-free* are independent axes: a branch may reject a
/// token without an error (another branch will handle it), and a rejecting
/// branch may still attach a diagnostic that is discarded when a later branch
/// accepts the token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenResult {
    accepted: bool,
    errors: Vec<ParseError>,
}

impl TokenResult {
    /// The token was consumed by a branch.
    pub fn accept() -> Self {
        Self {
            accepted: true,
            errors: Vec::default(),
        }
    }

    /// The token was not consumed; no diagnostic.
    pub fn reject() -> Self {
        Self::default()
    }

    /// The token was not consumed; `error` explains why.
    pub fn reject_with(error: ParseError) -> Self {
        Self {
            accepted: false,
            errors: vec![error],
        }
    }

    /// True iff some branch consumed the token, independent of errors.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// The diagnostics attached so far, in arrival order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Fold a branch outcome into this one, returning whether that branch
    /// accepted the token.
    pub(crate) fn absorb(&mut self, other: TokenResult) -> bool {
        let accepted = other.accepted;
        self.errors.extend(other.errors);
        self.accepted |= accepted;
        accepted
    }
}
