//! The three option variants and the read-handles returned at declaration

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::DefinitionError;
use crate::spec::{CommandOption, OptionSpec};

/// Boolean flag: present or absent on the command line, never carries a
/// value.
#[derive(Debug)]
pub struct ToggleOption {
    spec: OptionSpec,
    set: bool,
}

impl ToggleOption {
    pub(crate) fn new(
        short: Option<&str>,
        long: Option<&str>,
        help: &str,
    ) -> Result<Self, DefinitionError> {
        Ok(ToggleOption {
            spec: OptionSpec::new(short, long, help)?,
            set: false,
        })
    }

    /// True if the option appeared in the last parsed argument vector.
    pub fn is_set(&self) -> bool {
        self.set
    }
}

impl CommandOption for ToggleOption {
    fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    fn takes_value(&self) -> bool {
        false
    }

    fn apply(&mut self, _value: Option<&str>) {
        self.set = true;
    }

    fn reset(&mut self) {
        self.set = false;
    }

    fn help_line(&self) -> String {
        self.spec.flag_help_line()
    }
}

/// Single string value with an optional default.
#[derive(Debug)]
pub struct ValueOption {
    spec: OptionSpec,
    var_name: String,
    default: Option<String>,
    value: Option<String>,
}

impl ValueOption {
    pub(crate) fn new(
        short: Option<&str>,
        long: Option<&str>,
        var_name: &str,
        help: &str,
        default: Option<&str>,
    ) -> Result<Self, DefinitionError> {
        let default = default.map(str::to_string);
        Ok(ValueOption {
            spec: OptionSpec::new(short, long, help)?,
            var_name: var_name.to_string(),
            value: default.clone(),
            default,
        })
    }

    /// The current value: parsed, or the default, or `None`.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// True if a value is available, either parsed or defaulted.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl CommandOption for ValueOption {
    fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    fn takes_value(&self) -> bool {
        true
    }

    fn apply(&mut self, value: Option<&str>) {
        if let Some(raw) = value {
            self.value = Some(raw.to_string());
        }
    }

    fn reset(&mut self) {
        self.value = self.default.clone();
    }

    fn help_line(&self) -> String {
        self.spec
            .value_help_line(&self.var_name, self.default.as_deref())
    }
}

/// Comma-separated list of string values with optional defaults.
#[derive(Debug)]
pub struct MultiValueOption {
    spec: OptionSpec,
    var_name: String,
    defaults: Option<Vec<String>>,
    values: Option<Vec<String>>,
}

impl MultiValueOption {
    pub(crate) fn new(
        short: Option<&str>,
        long: Option<&str>,
        var_name: &str,
        help: &str,
        defaults: Option<&[&str]>,
    ) -> Result<Self, DefinitionError> {
        let defaults = defaults.map(|d| d.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        Ok(MultiValueOption {
            spec: OptionSpec::new(short, long, help)?,
            var_name: var_name.to_string(),
            values: defaults.clone(),
            defaults,
        })
    }

    /// The current values: parsed, or the defaults, or `None`.
    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    /// True if values are available, either parsed or defaulted.
    pub fn is_set(&self) -> bool {
        self.values.is_some()
    }
}

impl CommandOption for MultiValueOption {
    fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    fn takes_value(&self) -> bool {
        true
    }

    fn apply(&mut self, value: Option<&str>) {
        if let Some(raw) = value {
            // empty segments are kept: "a,,b" yields ["a", "", "b"]
            self.values = Some(raw.split(',').map(str::to_string).collect());
        }
    }

    fn reset(&mut self) {
        self.values = self.defaults.clone();
    }

    fn help_line(&self) -> String {
        let var = format!("{},...", self.var_name);
        let default = self.defaults.as_ref().map(|d| d.join(","));
        self.spec.value_help_line(&var, default.as_deref())
    }
}

/// Read access to a declared toggle, shared with the owning
/// [`CommandLine`](crate::CommandLine). Handles never mutate option state;
/// only the parser does that.
#[derive(Clone, Debug)]
pub struct ToggleHandle(pub(crate) Rc<RefCell<ToggleOption>>);

impl ToggleHandle {
    /// True if the option appeared in the last parsed argument vector.
    pub fn is_set(&self) -> bool {
        self.0.borrow().is_set()
    }
}

/// Read access to a declared single-value option.
#[derive(Clone)]
pub struct ValueHandle(pub(crate) Rc<RefCell<ValueOption>>);

impl ValueHandle {
    /// True if a value is available, either parsed or defaulted.
    pub fn is_set(&self) -> bool {
        self.0.borrow().is_set()
    }

    /// The current value: parsed, or the default, or `None`.
    pub fn value(&self) -> Option<String> {
        self.0.borrow().value().map(str::to_string)
    }
}

/// Read access to a declared multi-value option.
#[derive(Clone)]
pub struct MultiValueHandle(pub(crate) Rc<RefCell<MultiValueOption>>);

impl MultiValueHandle {
    /// True if values are available, either parsed or defaulted.
    pub fn is_set(&self) -> bool {
        self.0.borrow().is_set()
    }

    /// The current values: parsed, or the defaults, or `None`.
    pub fn values(&self) -> Option<Vec<String>> {
        self.0.borrow().values().map(|v| v.to_vec())
    }
}
