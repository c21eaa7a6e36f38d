/// A trait to abstract over environment variable access.
///
/// Color detection consults a dozen or so environment variables. Tests use a
/// fake environment.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable is defined.
    fn is_defined(&self, key: &str) -> bool {
        self.read_os(key).is_some()
    }

    /// Determine whether the environment variable is defined with a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }

    /// Determine whether the environment variable has one of the given values.
    fn has_value(&self, key: &str, expected_values: &[&str]) -> bool {
        self.read_os(key)
            .is_some_and(|v| expected_values.iter().any(|e| v == *e))
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;

    /// An environment backed by a hash map.
    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        pub(crate) fn set<K: AsRef<str>, V: AsRef<str>>(&mut self, key: K, value: V) -> &mut Self {
            self.bindings
                .insert(key.as_ref().to_string(), value.as_ref().to_string());
            self
        }

        pub(crate) fn unset(&mut self, key: &str) -> &mut Self {
            self.bindings.remove(key);
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    #[test]
    fn test_fake_env() {
        let env = &mut FakeEnv::new();
        assert!(!env.is_defined("TERM"));
        env.set("TERM", "");
        assert!(env.is_defined("TERM"));
        assert!(!env.is_non_empty("TERM"));
        env.set("TERM", "xterm");
        assert!(env.has_value("TERM", &["vt100", "xterm"]));
        assert_eq!(env.read("TERM").ok().as_deref(), Some("xterm"));
        env.unset("TERM");
        assert!(env.read("TERM").is_err());
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
