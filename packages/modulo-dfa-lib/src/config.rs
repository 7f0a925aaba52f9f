use modulo_dfa_macros::config;
use serde::{Deserialize, Serialize};

pub trait IntoOr<T> {
    fn into_or(self, or: T) -> T;
}

impl<T> IntoOr<Option<T>> for Option<T> {
    fn into_or(self, or: Option<T>) -> Option<T> {
        match self {
            Some(t) => Some(t),
            None => or,
        }
    }
}

impl<T> IntoOr<T> for Option<T> {
    fn into_or(self, or: T) -> T {
        self.unwrap_or(or)
    }
}

/// How the transition function is checked against the allowed states when an
/// automaton is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionPolicy {
    /// Every allowed state must be complete. States outside the allowed set
    /// are only caught by a final count check after the per-state checks.
    Lenient,
    /// The number of states with transitions must equal the number of
    /// allowed states before any per-state check runs.
    Strict,
}

config! {
    pub struct AutomatonConfig {
        transition_policy: TransitionPolicy = TransitionPolicy::Lenient,
        trace_execution: bool = false,
    }
}

config! {
    pub struct RemainderConfig {
        modulus: i64 = 3,
        automaton: AutomatonConfig (Option<PartialAutomatonConfig> = AutomatonConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RemainderConfig::default();
        assert_eq!(*config.get_modulus(), 3);
        assert_eq!(
            *config.get_automaton().get_transition_policy(),
            TransitionPolicy::Lenient
        );
        assert!(!*config.get_automaton().get_trace_execution());
    }

    #[test]
    fn test_partial_toml() {
        let config = RemainderConfig::from_toml(
            r#"
            modulus = 7

            [automaton]
            transition_policy = "Strict"
            "#,
        )
        .unwrap();

        assert_eq!(*config.get_modulus(), 7);
        assert_eq!(
            *config.get_automaton().get_transition_policy(),
            TransitionPolicy::Strict
        );
        assert!(!*config.get_automaton().get_trace_execution());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AutomatonConfig::from_toml("").unwrap();
        assert_eq!(config, AutomatonConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(AutomatonConfig::from_toml("policy = \"Strict\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "modulo_dfa_remainder_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "modulus = 5\n\n[automaton]\ntrace_execution = true\n").unwrap();

        let config = RemainderConfig::from_file(&path);
        let from_optional = RemainderConfig::from_optional_file(Some(&path));
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(*config.get_modulus(), 5);
        assert!(*config.get_automaton().get_trace_execution());
        assert_eq!(
            *config.get_automaton().get_transition_policy(),
            TransitionPolicy::Lenient
        );
        assert_eq!(from_optional.unwrap(), config);
    }

    #[test]
    fn test_from_optional_file() {
        let config = RemainderConfig::from_optional_file(None::<&str>).unwrap();
        assert_eq!(config, RemainderConfig::default());

        let missing = std::env::temp_dir().join("modulo_dfa_missing_config.toml");
        assert!(RemainderConfig::from_file(&missing).is_err());
    }
}
