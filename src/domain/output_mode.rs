//! Output mode of the site build.

use std::fmt;

/// How the framework emits the built site. Exactly one mode holds per build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Fully static export, servable from any file host.
    Export,
    /// The framework's standard server build.
    #[default]
    ServerDefault,
}

impl OutputMode {
    pub const ALL: [OutputMode; 2] = [OutputMode::Export, OutputMode::ServerDefault];

    /// Flag value that selects [`OutputMode::Export`], compared exactly.
    pub const EXPORT_FLAG: &'static str = "1";

    /// Interpret the static-export flag. Anything other than the exact
    /// literal `"1"` (including `"true"`, `"01"`, or a padded `"1 "`) keeps
    /// the server default.
    pub fn from_flag(flag: Option<&str>) -> Self {
        if flag == Some(Self::EXPORT_FLAG) {
            OutputMode::Export
        } else {
            OutputMode::ServerDefault
        }
    }

    /// Value of the framework's `output` field. `None` means the field is
    /// omitted entirely rather than set to an empty value.
    pub fn framework_value(&self) -> Option<&'static str> {
        match self {
            OutputMode::Export => Some("export"),
            OutputMode::ServerDefault => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OutputMode::Export => "static export",
            OutputMode::ServerDefault => "server default",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn only_the_exact_literal_selects_export() {
        assert_eq!(OutputMode::from_flag(Some("1")), OutputMode::Export);

        for other in [Some("true"), Some("0"), Some("01"), Some("1 "), Some(" 1"), Some(""), None]
        {
            assert_eq!(OutputMode::from_flag(other), OutputMode::ServerDefault, "{other:?}");
        }
    }

    #[test]
    fn framework_value_is_export_or_omitted() {
        assert_eq!(OutputMode::Export.framework_value(), Some("export"));
        assert_eq!(OutputMode::ServerDefault.framework_value(), None);
    }

    #[test]
    fn display_names_are_non_empty() {
        for mode in OutputMode::ALL {
            assert!(!mode.display_name().is_empty());
        }
    }

    proptest! {
        #[test]
        fn every_other_flag_value_keeps_the_server_default(flag in any::<String>()) {
            prop_assume!(flag != "1");
            prop_assert_eq!(OutputMode::from_flag(Some(&flag)), OutputMode::ServerDefault);
        }
    }
}
