use crate::model::{Enable, Requirement};
use crate::param::{
    Argument, ArgumentRef, HelpSection, HelpSectionRef, Opt, OptionRef, Param, Switch, SwitchRef,
};
use crate::result::{ParseError, ParseResult, TokenResult};
use crate::tokens;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

mod help;

const DEFAULT_HELP_MAX_WIDTH: usize = 250;
const DEFAULT_HELP_MAX_ARG_WIDTH: usize = 50;

/// The command line parser: a registry of positional arguments, options, and
/// switches, plus the dispatch machinery that binds an argument vector to
/// them.
///
/// Registration returns copyable handles ([`ArgumentRef`], [`OptionRef`],
/// [`SwitchRef`]) that are resolved through the parser on each access and
/// stay valid for its lifetime.  [`Parser::parse`] may be called repeatedly;
/// values are never reset between calls, so a parameter absent from the
/// latest argv retains whatever value it previously held.
pub struct Parser {
    cmdname: String,
    args: Vec<Param>,
    options: Vec<Param>,
    switches: Vec<Param>,
    help_sections: Vec<HelpSection>,
    help_max_width: usize,
    help_max_arg_width: usize,
    help_producer: Option<Box<dyn Fn() -> String>>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the standard `--help` / `-?` switch
    /// pre-registered.
    pub fn new() -> Self {
        let mut parser = Self::without_help();
        parser.add_help_switch();
        parser
    }

    /// Create a parser without the standard help switch.
    pub fn without_help() -> Self {
        Self {
            cmdname: String::new(),
            args: Vec::default(),
            options: Vec::default(),
            switches: Vec::default(),
            help_sections: Vec::default(),
            help_max_width: DEFAULT_HELP_MAX_WIDTH,
            help_max_arg_width: DEFAULT_HELP_MAX_ARG_WIDTH,
            help_producer: None,
        }
    }

    /// Register the standard `--help` / `-?` switch.
    pub fn add_help_switch(&mut self) -> SwitchRef {
        self.add_switch(Switch::new("help").abbr('?').help("Show help message"))
    }

    /// Register a positional argument.
    pub fn add_argument(&mut self, declaration: Argument) -> ArgumentRef {
        self.args.push(declaration.into_param());
        ArgumentRef(self.args.len() - 1)
    }

    /// Register a named option.
    pub fn add_option(&mut self, declaration: Opt) -> OptionRef {
        self.options.push(declaration.into_param());
        OptionRef(self.options.len() - 1)
    }

    /// Register a switch.
    pub fn add_switch(&mut self, declaration: Switch) -> SwitchRef {
        self.switches.push(declaration.into_param());
        SwitchRef(self.switches.len() - 1)
    }

    /// Register a help section.
    pub fn add_help_section(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> HelpSectionRef {
        self.help_sections.push(HelpSection::new(name, description));
        HelpSectionRef(self.help_sections.len() - 1)
    }

    /// Access a positional argument by handle.
    pub fn argument(&self, argument: ArgumentRef) -> &Param {
        &self.args[argument.0]
    }

    /// Mutably access a positional argument by handle.
    pub fn argument_mut(&mut self, argument: ArgumentRef) -> &mut Param {
        &mut self.args[argument.0]
    }

    /// Access an option by handle.
    pub fn option(&self, option: OptionRef) -> &Param {
        &self.options[option.0]
    }

    /// Mutably access an option by handle.
    pub fn option_mut(&mut self, option: OptionRef) -> &mut Param {
        &mut self.options[option.0]
    }

    /// Access a switch by handle.
    pub fn switch(&self, switch: SwitchRef) -> &Param {
        &self.switches[switch.0]
    }

    /// Mutably access a switch by handle.
    pub fn switch_mut(&mut self, switch: SwitchRef) -> &mut Param {
        &mut self.switches[switch.0]
    }

    /// Access a help section by handle.
    pub fn help_section(&self, section: HelpSectionRef) -> &HelpSection {
        &self.help_sections[section.0]
    }

    /// Find a positional argument by name (first match).
    pub fn find_argument(&self, name: &str) -> Option<ArgumentRef> {
        self.args
            .iter()
            .position(|param| param.name() == name)
            .map(ArgumentRef)
    }

    /// The positional argument at `pos`, in registration order.
    pub fn argument_at(&self, pos: usize) -> Option<ArgumentRef> {
        (pos < self.args.len()).then_some(ArgumentRef(pos))
    }

    /// Find an option by name (first match).
    pub fn find_option(&self, name: &str) -> Option<OptionRef> {
        self.options
            .iter()
            .position(|param| param.name() == name)
            .map(OptionRef)
    }

    /// Find an option by abbreviation (first match).
    pub fn find_option_abbr(&self, abbr: char) -> Option<OptionRef> {
        self.options
            .iter()
            .position(|param| param.abbr() == Some(abbr))
            .map(OptionRef)
    }

    /// Find a switch by name (first match).
    pub fn find_switch(&self, name: &str) -> Option<SwitchRef> {
        self.switches
            .iter()
            .position(|param| param.name() == name)
            .map(SwitchRef)
    }

    /// Find a switch by abbreviation (first match).
    pub fn find_switch_abbr(&self, abbr: char) -> Option<SwitchRef> {
        self.switches
            .iter()
            .position(|param| param.abbr() == Some(abbr))
            .map(SwitchRef)
    }

    /// The enabled positional arguments, in registration order.
    pub fn arguments(&self) -> impl Iterator<Item = &Param> {
        self.args.iter().filter(|param| self.enabled(param))
    }

    /// The enabled options, in registration order.
    pub fn options(&self) -> impl Iterator<Item = &Param> {
        self.options.iter().filter(|param| self.enabled(param))
    }

    /// The enabled switches, in registration order.
    pub fn switches(&self) -> impl Iterator<Item = &Param> {
        self.switches.iter().filter(|param| self.enabled(param))
    }

    /// Evaluate a parameter's enablement predicate against this parser's
    /// registry.  Evaluation is on-demand and never memoized.
    pub fn enabled(&self, param: &Param) -> bool {
        match param.enable() {
            Enable::Always => true,
            Enable::SwitchOn(switch) => self.switch(*switch).is_on(),
            Enable::Custom(predicate) => predicate(),
        }
    }

    /// The program name captured from token 0 of the last parse.
    pub fn cmdname(&self) -> &str {
        &self.cmdname
    }

    /// Whether the standard help switch was registered and set by the last
    /// parse.
    pub fn help_requested(&self) -> bool {
        self.find_switch("help")
            .map(|switch| self.switch(switch).is_on())
            .unwrap_or(false)
    }

    /// Check that the command definition itself is well-formed: required
    /// positional arguments must not follow optional ones.
    ///
    /// A violation is a defect in the declaring program, not in user input;
    /// [`Parser::parse`] additionally guards on this with a debug assertion.
    pub fn validate_command(&self) -> ParseResult {
        let mut result = ParseResult::new();

        let mut has_optional = false;
        for param in &self.args {
            if param.requirement() == Requirement::Optional {
                has_optional = true;
            } else if has_optional {
                result.push(ParseError::RequiredAfterOptional {
                    name: param.name().to_string(),
                });
            }
        }

        result
    }

    /// Parse an argument vector.  Token 0 is the program name; tokens 1..N
    /// are dispatched in order.
    ///
    /// Dispatch per token: a pending option (from the two-token
    /// `--opt value` form) consumes the token unconditionally, even one that
    /// looks like another option; otherwise the positional, option, and
    /// switch branches are tried in that fixed order, so an option shadows a
    /// switch of the same name.  Errors accumulate; parsing never aborts
    /// early.  Values bound by earlier parses are not reset.
    pub fn parse<I, T>(&mut self, argv: I) -> ParseResult
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        debug_assert!(
            self.validate_command().is_ok(),
            "command is ill-formed: {}",
            self.validate_command().error_str()
        );

        let mut result = ParseResult::new();
        let mut tokens = argv.into_iter();

        if let Some(cmdname) = tokens.next() {
            self.cmdname = cmdname.as_ref().to_string();
        }

        let mut pos = 0;
        let mut active: Option<OptionRef> = None;

        for token in tokens {
            let token = token.as_ref();

            if let Some(option) = active.take() {
                self.option_mut(option).set_value(token);
                continue;
            }

            #[cfg(feature = "tracing_debug")]
            debug!("dispatching token '{token}'");

            let mut outcome = TokenResult::reject();
            if outcome.absorb(self.parse_positional(token, &mut pos)) {
                continue;
            }
            if outcome.absorb(self.parse_option(token, &mut active)) {
                continue;
            }
            if outcome.absorb(self.parse_switch(token)) {
                continue;
            }

            result.merge(outcome.into());
        }

        result.merge(self.validate_arguments());
        result.merge(self.validate_options());

        result
    }

    fn parse_positional(&mut self, token: &str, pos: &mut usize) -> TokenResult {
        if tokens::is_long_option(token) || tokens::is_short_option(token) {
            return TokenResult::reject();
        }

        let slot = match self.argument_at(*pos) {
            Some(slot) if self.enabled(self.argument(slot)) => slot,
            _ => {
                return TokenResult::reject_with(ParseError::ExcessPositional { slot: *pos + 1 });
            }
        };

        self.argument_mut(slot).set_value(token);
        *pos += 1;

        TokenResult::accept()
    }

    fn parse_option(&mut self, token: &str, active: &mut Option<OptionRef>) -> TokenResult {
        let (option, abbreviated) = if tokens::is_long_option(token) {
            (self.find_option(tokens::long_option_name(token)), false)
        } else if tokens::is_short_option(token) {
            let first = tokens::short_cluster(token).chars().next();
            (first.and_then(|abbr| self.find_option_abbr(abbr)), true)
        } else {
            return TokenResult::reject();
        };

        let option = match option {
            Some(option) if self.enabled(self.option(option)) => option,
            _ => {
                return TokenResult::reject_with(ParseError::UnknownOption {
                    token: token.to_string(),
                });
            }
        };

        if abbreviated {
            let cluster = tokens::short_cluster(token);
            // The cluster starts with the matched abbreviation; the rest is
            // an attached value, as in -x42.
            let attached = cluster
                .char_indices()
                .nth(1)
                .map(|(index, _)| &cluster[index..])
                .unwrap_or("");

            match tokens::split_name_equals(token) {
                Some((_, value)) if !value.is_empty() => {
                    let value = value.to_string();
                    self.option_mut(option).set_value(value);
                }
                _ if !attached.is_empty() => {
                    let value = attached.to_string();
                    self.option_mut(option).set_value(value);
                }
                _ => *active = Some(option),
            }
            return TokenResult::accept();
        }

        match tokens::split_name_equals(token) {
            Some((_, value)) => {
                let value = value.to_string();
                self.option_mut(option).set_value(value);
            }
            None => *active = Some(option),
        }

        TokenResult::accept()
    }

    fn parse_switch(&mut self, token: &str) -> TokenResult {
        if tokens::is_short_option(token) {
            // Each character names a distinct switch.  Application is not
            // atomic: on the first unknown character the earlier switches
            // stay set.
            for abbr in tokens::short_cluster(token).chars() {
                let switch = match self.find_switch_abbr(abbr) {
                    Some(switch) if self.enabled(self.switch(switch)) => switch,
                    _ => {
                        return TokenResult::reject_with(ParseError::UnknownSwitch {
                            token: token.to_string(),
                        });
                    }
                };
                self.switch_mut(switch).set_on(true);
            }
            return TokenResult::accept();
        }

        if tokens::is_long_option(token) {
            let switch = match self.find_switch(tokens::long_option_name(token)) {
                Some(switch) if self.enabled(self.switch(switch)) => switch,
                _ => return TokenResult::reject(),
            };
            self.switch_mut(switch).set_on(true);
            return TokenResult::accept();
        }

        TokenResult::reject()
    }

    /// Report every enabled, required positional argument left with an empty
    /// value.
    pub fn validate_arguments(&self) -> ParseResult {
        let mut result = ParseResult::new();

        for param in &self.args {
            if !self.enabled(param) {
                continue;
            }
            if param.requirement() == Requirement::Required && param.value().is_empty() {
                result.push(ParseError::MissingArgument {
                    name: param.name().to_string(),
                });
            }
        }

        result
    }

    /// Report every enabled, required option left with an empty value.
    pub fn validate_options(&self) -> ParseResult {
        let mut result = ParseResult::new();

        for param in &self.options {
            if !self.enabled(param) {
                continue;
            }
            if param.requirement() == Requirement::Required && param.value().is_empty() {
                result.push(ParseError::MissingOption {
                    name: param.name().to_string(),
                });
            }
        }

        result
    }

    /// The overall help width advisory.
    pub fn help_max_width(&self) -> usize {
        self.help_max_width
    }

    /// Set the overall help width advisory.  The renderer treats this as an
    /// upper display bound; it does not re-wrap descriptions.
    pub fn set_help_max_width(&mut self, width: usize) {
        self.help_max_width = width;
    }

    /// The per-entry cap used for column alignment.
    pub fn help_max_arg_width(&self) -> usize {
        self.help_max_arg_width
    }

    /// Set the per-entry cap used for column alignment: entries rendering
    /// wider than this do not contribute to the shared column width and are
    /// printed on their own line.
    pub fn set_help_max_arg_width(&mut self, width: usize) {
        self.help_max_arg_width = width;
    }

    /// Refresh the help width advisory from the attached terminal, when
    /// there is one.  Without a terminal the current value is kept.
    pub fn help_width_from_terminal(&mut self) {
        if let Some((terminal_size::Width(width), _)) = terminal_size::terminal_size() {
            self.help_max_width = width as usize;
        }
    }

    /// Set a static help preamble, rendered above the usage line.
    pub fn set_help(&mut self, preamble: impl Into<String>) {
        let preamble = preamble.into();
        self.set_help_with(move || preamble.clone());
    }

    /// Set a help preamble producer, invoked at render time.
    pub fn set_help_with(&mut self, producer: impl Fn() -> String + 'static) {
        self.help_producer = Some(Box::new(producer));
    }

    /// Render the help text from the current registry: preamble (if any),
    /// usage line, then `Arguments:` and `Options:` sections over the
    /// enabled parameters.  Deterministic for a given registry and
    /// configuration.
    pub fn help(&self) -> String {
        help::render(self)
    }
}
