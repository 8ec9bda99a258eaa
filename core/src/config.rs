
use crate::error::ConfigError;

pub const PAIRING_PARAM: &str = "pairing";

/// How two visible dice report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pairing {
    /// One trigger rolls both; the total is reported.
    #[default]
    Combined,
    /// Each die rolls and reports on its own.
    Independent,
}

impl Pairing {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "combined" => Ok(Pairing::Combined),
            "independent" => Ok(Pairing::Independent),
            _ => Err(ConfigError::UnknownPairing(value.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pairing::Combined => "combined",
            Pairing::Independent => "independent",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    pub pairing: Pairing,
}

impl WidgetConfig {
    /// Builds a config from URL query pairs. Bad values keep the default
    /// and are returned alongside so the caller can report them.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();
        for (key, value) in pairs {
            if key.as_ref() != PAIRING_PARAM {
                continue;
            }
            match Pairing::parse(value.as_ref()) {
                Ok(pairing) => config.pairing = pairing,
                Err(err) => errors.push(err),
            }
        }
        (config, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_pairing_from_query() {
        let (config, errors) =
            WidgetConfig::from_query_pairs([("lang", "en"), ("pairing", "Independent")]);
        assert!(errors.is_empty());
        assert_eq!(config.pairing, Pairing::Independent);
    }

    #[test]
    fn unknown_pairing_keeps_default() {
        let (config, errors) = WidgetConfig::from_query_pairs([("pairing", "both")]);
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(errors, vec![ConfigError::UnknownPairing("both".to_string())]);
    }

    #[test]
    fn empty_query_is_default() {
        let (config, errors) =
            WidgetConfig::from_query_pairs(Vec::<(String, String)>::new());
        assert_eq!(config.pairing, Pairing::Combined);
        assert!(errors.is_empty());
    }
}
