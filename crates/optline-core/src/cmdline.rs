//! Option registry and the argument-vector parser

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{DefinitionError, ParseError};
use crate::options::{
    MultiValueHandle, MultiValueOption, ToggleHandle, ToggleOption, ValueHandle, ValueOption,
};
use crate::spec::CommandOption;

type SharedOption = Rc<RefCell<dyn CommandOption>>;

/// A declared set of options plus the parser that applies an argument
/// vector to them.
///
/// Options are declared up front with the `add_*` methods, each returning a
/// read-handle. [`parse`](CommandLine::parse) then walks an argument
/// vector, sets the matched options and returns the remaining positional
/// arguments. Parsing always starts by resetting every option, so the same
/// `CommandLine` can be reused across argument vectors.
pub struct CommandLine {
    usage: String,
    by_short: HashMap<char, SharedOption>,
    by_long: HashMap<String, SharedOption>,
    declared: Vec<SharedOption>,
}

impl CommandLine {
    /// Create an empty option set. `usage` becomes the first line of
    /// [`help_text`](CommandLine::help_text).
    pub fn new(usage: &str) -> Self {
        CommandLine {
            usage: usage.to_string(),
            by_short: HashMap::new(),
            by_long: HashMap::new(),
            declared: Vec::new(),
        }
    }

    /// Declare a boolean toggle option.
    pub fn add_toggle(
        &mut self,
        short: Option<&str>,
        long: Option<&str>,
        help: &str,
    ) -> Result<ToggleHandle, DefinitionError> {
        let option = Rc::new(RefCell::new(ToggleOption::new(short, long, help)?));
        self.register(option.clone())?;
        Ok(ToggleHandle(option))
    }

    /// Declare a single-value option. `var_name` is the placeholder shown
    /// in the help text; `default` is the value reported when the option is
    /// absent from the argument vector.
    pub fn add_value(
        &mut self,
        short: Option<&str>,
        long: Option<&str>,
        var_name: &str,
        help: &str,
        default: Option<&str>,
    ) -> Result<ValueHandle, DefinitionError> {
        let option = Rc::new(RefCell::new(ValueOption::new(
            short, long, var_name, help, default,
        )?));
        self.register(option.clone())?;
        Ok(ValueHandle(option))
    }

    /// Declare a multi-value option whose value token is split on commas.
    pub fn add_multi_value(
        &mut self,
        short: Option<&str>,
        long: Option<&str>,
        var_name: &str,
        help: &str,
        defaults: Option<&[&str]>,
    ) -> Result<MultiValueHandle, DefinitionError> {
        let option = Rc::new(RefCell::new(MultiValueOption::new(
            short, long, var_name, help, defaults,
        )?));
        self.register(option.clone())?;
        Ok(MultiValueHandle(option))
    }

    /// Index an option under whichever names it declares. Short and long
    /// namespaces are checked for duplicates independently.
    fn register(&mut self, option: SharedOption) -> Result<(), DefinitionError> {
        let (short, long) = {
            let opt = option.borrow();
            let spec = opt.spec();
            (spec.short(), spec.long().map(str::to_string))
        };

        if let Some(s) = short {
            if self.by_short.contains_key(&s) {
                return Err(DefinitionError::DuplicateShort(s));
            }
        }
        if let Some(l) = &long {
            if self.by_long.contains_key(l) {
                return Err(DefinitionError::DuplicateLong(l.clone()));
            }
        }

        if let Some(s) = short {
            self.by_short.insert(s, option.clone());
        }
        if let Some(l) = long {
            self.by_long.insert(l, option.clone());
        }
        self.declared.push(option);
        Ok(())
    }

    /// Restore every declared option to its default state, in declaration
    /// order.
    pub fn reset(&self) {
        for option in &self.declared {
            option.borrow_mut().reset();
        }
    }

    /// Parse an argument vector. Tokens matching declared options set those
    /// options; everything from the first non-option token onward is
    /// returned as positional arguments, in order.
    ///
    /// The first token that does not start with `-` ends option scanning
    /// for good: later tokens are never re-examined for option shape.
    pub fn parse<I, S>(&self, args: I) -> Result<Vec<String>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        // state from any earlier parse must not leak into this one
        self.reset();

        let mut idx = 0;
        while idx < args.len() {
            let tok = &args[idx];
            if !tok.starts_with('-') {
                break;
            }

            idx = if let Some(rest) = tok.strip_prefix("--") {
                if rest.is_empty() {
                    return Err(ParseError::MalformedOption(tok.clone()));
                }
                self.parse_long(rest, &args, idx)?
            } else {
                let names = &tok[1..];
                let mut chars = names.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => return Err(ParseError::MalformedOption(tok.clone())),
                    (Some(name), None) => self.parse_short(name, &args, idx)?,
                    (Some(_), Some(_)) => {
                        self.parse_packed(names, tok)?;
                        idx + 1
                    }
                }
            };
        }

        Ok(args[idx..].to_vec())
    }

    /// Handle a `--name` or `--name=value` token. `rest` is the token with
    /// the leading `--` stripped.
    fn parse_long(&self, rest: &str, args: &[String], idx: usize) -> Result<usize, ParseError> {
        let (name, attached) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (rest, None),
        };

        let option = self
            .by_long
            .get(name)
            .ok_or_else(|| ParseError::UnknownOption(name.to_string()))?;

        if !option.borrow().takes_value() {
            if attached.is_some() {
                return Err(ParseError::UnexpectedValue(name.to_string()));
            }
            option.borrow_mut().apply(None);
            return Ok(idx + 1);
        }

        // attached values may be empty ("--color=" is a valid empty string)
        if let Some(value) = attached {
            option.borrow_mut().apply(Some(value));
            Ok(idx + 1)
        } else {
            let value = next_value(args, idx)
                .ok_or_else(|| ParseError::MissingValue(name.to_string()))?;
            option.borrow_mut().apply(Some(value));
            Ok(idx + 2)
        }
    }

    /// Handle a two-character `-x` token. Short options take their value
    /// from the following token; there is no `=` form.
    fn parse_short(&self, name: char, args: &[String], idx: usize) -> Result<usize, ParseError> {
        let option = self
            .by_short
            .get(&name)
            .ok_or_else(|| ParseError::UnknownOption(name.to_string()))?;

        if !option.borrow().takes_value() {
            option.borrow_mut().apply(None);
            return Ok(idx + 1);
        }

        let value =
            next_value(args, idx).ok_or_else(|| ParseError::MissingValue(name.to_string()))?;
        option.borrow_mut().apply(Some(value));
        Ok(idx + 2)
    }

    /// Handle a packed group like `-bvu`: each character after the hyphen
    /// is a separate short option and all of them must be toggles.
    /// Processing is left to right, so toggles before a failing character
    /// stay applied.
    fn parse_packed(&self, names: &str, tok: &str) -> Result<(), ParseError> {
        for name in names.chars() {
            let option = self
                .by_short
                .get(&name)
                .ok_or_else(|| ParseError::UnknownOption(name.to_string()))?;
            if option.borrow().takes_value() {
                return Err(ParseError::CombinedValueOption {
                    name,
                    group: tok.to_string(),
                });
            }
            option.borrow_mut().apply(None);
        }
        Ok(())
    }

    /// Usage line plus one indented help line per declared option, in
    /// declaration order.
    pub fn help_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.usage);
        out.push('\n');
        for option in &self.declared {
            out.push_str("    ");
            out.push_str(&option.borrow().help_line());
            out.push('\n');
        }
        out
    }

    /// The usage line passed to [`new`](CommandLine::new).
    pub fn usage(&self) -> &str {
        &self.usage
    }
}

/// The value token following `idx`, unless it is missing or itself looks
/// like an option.
fn next_value(args: &[String], idx: usize) -> Option<&str> {
    match args.get(idx + 1) {
        Some(next) if !next.starts_with('-') => Some(next.as_str()),
        _ => None,
    }
}
