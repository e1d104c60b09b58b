use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[default]
    #[serde(rename = "mr")]
    Marathi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Marathi];

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Marathi => "mr",
        }
    }

    /// Name shown in the language selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Marathi => "मराठी",
        }
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" | "English" | "english" => Ok(Self::English),
            "mr" | "Marathi" | "marathi" | "मराठी" => Ok(Self::Marathi),
            other => Err(DomainError::validation(format!("unknown language: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("मराठी".parse::<Language>().unwrap(), Language::Marathi);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Marathi).unwrap(), "\"mr\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
