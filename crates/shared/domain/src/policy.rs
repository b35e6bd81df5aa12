use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Failure-tolerance policy applied to the initialization step's outcome.
///
/// The legacy deployment shipped two startup scripts with divergent policies;
/// both survive here as explicit, selectable variants of one contract.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitPolicy {
    /// Tolerate success and the documented "already initialized" skip code only.
    #[default]
    Strict,
    /// Tolerate any initialization outcome; real failures surface at first use.
    Lenient,
}

impl FromStr for InitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown init policy '{other}' (expected 'strict' or 'lenient')")),
        }
    }
}

impl fmt::Display for InitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lenient => f.write_str("lenient"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Strict".parse::<InitPolicy>().unwrap(), InitPolicy::Strict);
        assert_eq!("LENIENT".parse::<InitPolicy>().unwrap(), InitPolicy::Lenient);
        assert!("tolerant".parse::<InitPolicy>().is_err());
    }

    #[test]
    fn default_is_strict() {
        assert_eq!(InitPolicy::default(), InitPolicy::Strict);
    }
}
