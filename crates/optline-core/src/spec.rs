//! Option identity and the capability trait shared by all option variants

use crate::error::DefinitionError;

/// Identity common to every option: an optional short name, an optional
/// long name and a help string. At least one name is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    short: Option<char>,
    long: Option<String>,
    help: String,
}

impl OptionSpec {
    /// Validate and build an option identity. An empty string is treated
    /// the same as an absent name.
    pub fn new(
        short: Option<&str>,
        long: Option<&str>,
        help: &str,
    ) -> Result<Self, DefinitionError> {
        let short = short.filter(|s| !s.is_empty());
        let long = long.filter(|s| !s.is_empty());

        if short.is_none() && long.is_none() {
            return Err(DefinitionError::NoName);
        }
        if help.is_empty() {
            return Err(DefinitionError::EmptyHelp);
        }

        let short = match short {
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => return Err(DefinitionError::ShortNameLength(s.to_string())),
                }
            }
            None => None,
        };
        let long = match long {
            Some(s) if s.chars().count() < 2 => {
                return Err(DefinitionError::LongNameLength(s.to_string()));
            }
            Some(s) => Some(s.to_string()),
            None => None,
        };

        Ok(OptionSpec {
            short,
            long,
            help: help.to_string(),
        })
    }

    /// Short name, if one was declared.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Long name, if one was declared.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Help string for this option.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Help line for options that take no value: `-v --verbose : help`.
    pub(crate) fn flag_help_line(&self) -> String {
        match (self.short, self.long.as_deref()) {
            (Some(s), Some(l)) => format!("-{} --{} : {}", s, l, self.help),
            (Some(s), None) => format!("-{} : {}", s, self.help),
            (None, Some(l)) => format!("--{} : {}", l, self.help),
            // a spec with no names cannot be constructed
            (None, None) => String::new(),
        }
    }

    /// Help line for value-taking options, with a `<VAR>` placeholder and
    /// the default value (if any) appended.
    pub(crate) fn value_help_line(&self, var_name: &str, default: Option<&str>) -> String {
        let mut line = match (self.short, self.long.as_deref()) {
            (Some(s), Some(l)) => format!(
                "-{} <{}>, --{}=<{}> : {}",
                s, var_name, l, var_name, self.help
            ),
            (Some(s), None) => format!("-{} <{}> : {}", s, var_name, self.help),
            (None, Some(l)) => format!("--{}=<{}> : {}", l, var_name, self.help),
            (None, None) => String::new(),
        };
        if let Some(default) = default {
            line.push_str(&format!(" (default to {})", default));
        }
        line
    }
}

/// Behavior shared by every option variant. The parser only interacts with
/// options through this trait.
pub trait CommandOption {
    /// The option's declared identity.
    fn spec(&self) -> &OptionSpec;

    /// Whether the option consumes a value token. Toggles return `false`.
    fn takes_value(&self) -> bool;

    /// Record an occurrence of the option. `value` is `None` for toggles
    /// and always `Some` for value-taking options.
    fn apply(&mut self, value: Option<&str>);

    /// Restore the option to its pre-parse state.
    fn reset(&mut self);

    /// One rendered help line for this option.
    fn help_line(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_specs() {
        let spec = OptionSpec::new(Some("v"), Some("verbose"), "verbose output").unwrap();
        assert_eq!(spec.short(), Some('v'));
        assert_eq!(spec.long(), Some("verbose"));
        assert_eq!(spec.help(), "verbose output");

        let short_only = OptionSpec::new(Some("v"), None, "verbose output").unwrap();
        assert_eq!(short_only.long(), None);

        let long_only = OptionSpec::new(None, Some("verbose"), "verbose output").unwrap();
        assert_eq!(long_only.short(), None);
    }

    #[test]
    fn test_empty_string_names_are_absent() {
        let spec = OptionSpec::new(Some(""), Some("verbose"), "verbose output").unwrap();
        assert_eq!(spec.short(), None);

        assert_eq!(
            OptionSpec::new(Some(""), Some(""), "help"),
            Err(DefinitionError::NoName)
        );
    }

    #[test]
    fn test_missing_names() {
        assert_eq!(
            OptionSpec::new(None, None, "help"),
            Err(DefinitionError::NoName)
        );
    }

    #[test]
    fn test_empty_help() {
        assert_eq!(
            OptionSpec::new(Some("v"), Some("verbose"), ""),
            Err(DefinitionError::EmptyHelp)
        );
    }

    #[test]
    fn test_short_name_must_be_one_char() {
        assert_eq!(
            OptionSpec::new(Some("ve"), Some("verbose"), "help"),
            Err(DefinitionError::ShortNameLength("ve".to_string()))
        );
    }

    #[test]
    fn test_long_name_must_be_two_chars() {
        assert_eq!(
            OptionSpec::new(Some("v"), Some("w"), "help"),
            Err(DefinitionError::LongNameLength("w".to_string()))
        );
    }
}
