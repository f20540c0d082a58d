//! Help rendering: a deterministic multi-section text derived from the
//! parser's registry of enabled parameters.

use super::Parser;
use crate::param::{Param, ParamKind};

pub(super) fn render(parser: &Parser) -> String {
    let mut out = String::new();

    if let Some(producer) = &parser.help_producer {
        out.push_str(&producer());
        out.push_str("\n\n");
    }

    out.push_str("Usage:\n\n");

    let arguments: Vec<&Param> = parser.arguments().collect();
    let options: Vec<&Param> = parser.options().collect();
    let switches: Vec<&Param> = parser.switches().collect();

    out.push_str(&format!("  {} [Options]", parser.cmdname));
    for param in &arguments {
        out.push_str(&format!(" <{}>", param.name()));
    }
    out.push('\n');

    if !arguments.is_empty() {
        out.push('\n');
        out.push_str(&section(&arguments, "Arguments", parser.help_max_arg_width));
    }

    // Options and switches share one section, options first.
    let mut named: Vec<&Param> = Vec::with_capacity(options.len() + switches.len());
    named.extend(options);
    named.extend(switches);

    if !named.is_empty() {
        out.push('\n');
        out.push_str(&section(&named, "Options", parser.help_max_arg_width));
    }

    out
}

/// The rendered form of a parameter: `--<name>[, -<abbr>][ [value]]` for
/// named parameters, the bare name for positional arguments.
pub(super) fn representation(param: &Param) -> String {
    match param.kind() {
        ParamKind::Argument => param.name().to_string(),
        ParamKind::Option { .. } | ParamKind::Switch { .. } => {
            let mut repr = format!("--{}", param.name());
            if let Some(abbr) = param.abbr() {
                repr.push_str(", -");
                repr.push(abbr);
            }
            if param.expects_value() {
                repr.push_str(" [value]");
            }
            repr
        }
    }
}

/// The shared column width: the longest rendered form not exceeding
/// `max_arg_width`.  Wider entries get their own line instead.
fn widest(params: &[&Param], max_arg_width: usize) -> usize {
    params
        .iter()
        .map(|param| representation(param).len())
        .filter(|width| *width <= max_arg_width)
        .max()
        .unwrap_or(0)
}

fn section(params: &[&Param], heading: &str, max_arg_width: usize) -> String {
    let width = widest(params, max_arg_width);
    let mut out = format!("{heading}:\n");

    for param in params {
        let repr = representation(param);
        if repr.len() > width {
            // Over-wide entry: own line, then a blank column to host the
            // description.
            out.push_str(&format!("  {repr}\n"));
            out.push_str(&format!("  {:width$}", " "));
        } else {
            out.push_str(&format!("  {repr:width$}"));
        }

        if param.description().is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!(" = {}\n", param.description()));
        }
    }

    out
}
