use std::io::IsTerminal;

use crate::termco::Colorant;
use crate::util::{Env, Environment};

/// The targeted display layer: Foreground or background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Determine the offset for this layer.
    ///
    /// The offset is added to the SGR parameter values for foreground colors
    /// and therefore zero for [`Layer::Foreground`].
    pub const fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

/// The color support of a terminal.
///
/// The levels are ordered by richness. [`Fidelity::Plain`] denotes output
/// without any ANSI escape sequences, which is the right choice for files,
/// pipes, and terminals that do not support color. The other three levels
/// support the 16 ANSI colors, additionally the 8-bit indexed colors, and
/// additionally 24-bit colors, respectively.
///
/// ```
/// # use tout::style::Fidelity;
/// # use tout::termco::{AnsiColor, Rgb};
/// assert!(Fidelity::Plain < Fidelity::Ansi);
/// assert!(Fidelity::EightBit.meets(Fidelity::Ansi));
/// assert!(Fidelity::EightBit.covers(AnsiColor::RED));
/// assert!(!Fidelity::EightBit.covers(Rgb::new(255, 0, 0)));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fidelity {
    /// Plain text, no ANSI escape codes
    #[default]
    Plain,
    /// ANSI and default colors only
    Ansi,
    /// 8-bit indexed colors including ANSI and default colors
    EightBit,
    /// 24-bit RGB color.
    TwentyFourBit,
}

impl Fidelity {
    /// Determine the fidelity level for terminal output based on environment
    /// variables.
    ///
    /// This method determines fidelity based on heuristics about environment
    /// variables. Its primary sources are [NO_COLOR](https://no-color.org) and
    /// [FORCE_COLOR](https://force-color.org). Its secondary source is Chalk's
    /// [supports-color](https://github.com/chalk/supports-color/blob/main/index.js).
    pub fn from_environment(has_tty: bool) -> Self {
        fidelity_from_environment(&Env::default(), has_tty)
    }

    /// Determine the fidelity level for output to the given stream.
    ///
    /// A stream that is not a terminal gets [`Fidelity::Plain`], unless the
    /// environment forces a color level.
    pub fn detect<T: IsTerminal>(stream: &T) -> Self {
        let has_tty = stream.is_terminal();
        let fidelity = Self::from_environment(has_tty);
        tracing::debug!(has_tty, ?fidelity, "detected color fidelity");
        fidelity
    }

    /// Determine whether this fidelity level is at least the required level.
    pub fn meets(&self, required: Fidelity) -> bool {
        required <= *self
    }

    /// Determine whether this fidelity level suffices for rendering the
    /// colorant as is.
    pub fn covers<C: Into<Colorant>>(&self, colorant: C) -> bool {
        self.meets(Fidelity::from(colorant.into()))
    }
}

impl From<&Colorant> for Fidelity {
    fn from(value: &Colorant) -> Self {
        match value {
            Colorant::Default() | Colorant::Ansi(_) => Self::Ansi,
            Colorant::EightBit(_) => Self::EightBit,
            Colorant::Rgb(_) => Self::TwentyFourBit,
        }
    }
}

impl From<Colorant> for Fidelity {
    fn from(value: Colorant) -> Self {
        Fidelity::from(&value)
    }
}

/// Parse the value of `FORCE_COLOR`.
///
/// An empty value or `true` forces ANSI colors, `0` or `false` disables color,
/// and `1` through `3` select the corresponding level. Unrecognized values
/// count as not forced.
fn forced_fidelity(value: &str) -> Option<Fidelity> {
    match value.trim() {
        "" | "1" | "true" => Some(Fidelity::Ansi),
        "0" | "false" => Some(Fidelity::Plain),
        "2" => Some(Fidelity::EightBit),
        "3" => Some(Fidelity::TwentyFourBit),
        _ => None,
    }
}

/// Determine the fidelity from the given environment.
pub(crate) fn fidelity_from_environment<E: Environment>(env: &E, has_tty: bool) -> Fidelity {
    if env.is_non_empty("NO_COLOR") {
        return Fidelity::Plain;
    } else if let Ok(value) = env.read("FORCE_COLOR") {
        if let Some(fidelity) = forced_fidelity(&value) {
            return fidelity;
        }
    }

    if env.is_defined("TF_BUILD") || env.is_defined("AGENT_NAME") {
        // Azure pipelines have no TTY but render ANSI colors.
        return Fidelity::Ansi;
    } else if !has_tty {
        return Fidelity::Plain;
    } else if env.has_value("TERM", &["dumb"]) {
        return Fidelity::Plain;
    } else if env.is_defined("CI") {
        if env.is_defined("GITHUB_ACTIONS") || env.is_defined("GITEA_ACTIONS") {
            return Fidelity::TwentyFourBit;
        }

        for ci in [
            "TRAVIS",
            "CIRCLECI",
            "APPVEYOR",
            "GITLAB_CI",
            "BUILDKITE",
            "DRONE",
        ] {
            if env.is_defined(ci) {
                return Fidelity::Ansi;
            }
        }

        if env.has_value("CI_NAME", &["codeship"]) {
            return Fidelity::Ansi;
        }

        return Fidelity::Plain;
    }

    if let Ok(teamcity) = env.read("TEAMCITY_VERSION") {
        // TeamCity 9.x and later support ANSI colors.
        let major = teamcity
            .split('.')
            .next()
            .and_then(|m| m.parse::<u32>().ok());
        return if major.is_some_and(|m| 9 <= m) {
            Fidelity::Ansi
        } else {
            Fidelity::Plain
        };
    } else if env.has_value("COLORTERM", &["truecolor", "24bit"])
        || env.has_value("TERM", &["xterm-kitty"])
    {
        return Fidelity::TwentyFourBit;
    } else if env.has_value("TERM_PROGRAM", &["Apple_Terminal"]) {
        return Fidelity::EightBit;
    } else if env.has_value("TERM_PROGRAM", &["iTerm.app"]) {
        let version = env.read("TERM_PROGRAM_VERSION").unwrap_or_default();
        return if version.starts_with("3.") {
            Fidelity::TwentyFourBit
        } else {
            Fidelity::EightBit
        };
    }

    if let Ok(mut term) = env.read("TERM") {
        term.make_ascii_lowercase();

        if term.ends_with("-256") || term.ends_with("-256color") {
            return Fidelity::EightBit;
        } else if term.starts_with("screen")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term == "color"
            || term == "ansi"
            || term == "cygwin"
            || term == "linux"
        {
            return Fidelity::Ansi;
        }
    } else if env.is_defined("COLORTERM") {
        return Fidelity::Ansi;
    }

    Fidelity::Plain
}

#[cfg(test)]
mod test {
    use super::{fidelity_from_environment, Fidelity};
    use crate::termco::{AnsiColor, Colorant, Rgb};
    use crate::util::FakeEnv;

    #[test]
    fn test_ordering() {
        use Fidelity::*;

        assert!(Plain < Ansi && Ansi < EightBit && EightBit < TwentyFourBit);
        for (required, actual, expected) in [
            (Plain, Plain, true),
            (Ansi, Plain, false),
            (Ansi, Ansi, true),
            (EightBit, Ansi, false),
            (EightBit, TwentyFourBit, true),
            (TwentyFourBit, EightBit, false),
        ] {
            assert_eq!(actual.meets(required), expected);
        }

        assert!(Ansi.covers(Colorant::Default()));
        assert!(Ansi.covers(AnsiColor::new(99)));
        assert!(!Ansi.covers(Colorant::EightBit(100)));
        assert!(!Plain.covers(AnsiColor::RED));
        assert!(TwentyFourBit.covers(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_fidelity() {
        let env = &mut FakeEnv::new();
        assert_eq!(fidelity_from_environment(env, true), Fidelity::Plain);
        env.set("TERM", "cygwin");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::Ansi);
        assert_eq!(fidelity_from_environment(env, false), Fidelity::Plain);
        env.set("TERM", "xterm-256color");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::EightBit);
        env.set("TERM_PROGRAM", "iTerm.app");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::EightBit);
        env.set("TERM_PROGRAM_VERSION", "3.5");
        assert_eq!(
            fidelity_from_environment(env, true),
            Fidelity::TwentyFourBit
        );
        env.set("COLORTERM", "truecolor");
        assert_eq!(
            fidelity_from_environment(env, true),
            Fidelity::TwentyFourBit
        );
        env.set("CI", "");
        env.set("APPVEYOR", "");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::Ansi);
        env.set("TF_BUILD", "");
        assert_eq!(fidelity_from_environment(env, false), Fidelity::Ansi);
        env.set("NO_COLOR", "");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::Ansi);
        env.set("NO_COLOR", "1");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::Plain);
    }

    #[test]
    fn test_forced_fidelity() {
        let env = &mut FakeEnv::new();
        env.set("FORCE_COLOR", "");
        assert_eq!(fidelity_from_environment(env, false), Fidelity::Ansi);
        env.set("FORCE_COLOR", "2");
        assert_eq!(fidelity_from_environment(env, false), Fidelity::EightBit);
        env.set("FORCE_COLOR", "3");
        assert_eq!(
            fidelity_from_environment(env, false),
            Fidelity::TwentyFourBit
        );
        env.set("TERM", "xterm-kitty");
        env.set("FORCE_COLOR", "0");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::Plain);
        env.set("FORCE_COLOR", "bogus");
        assert_eq!(
            fidelity_from_environment(env, true),
            Fidelity::TwentyFourBit
        );
        env.set("NO_COLOR", "1");
        env.set("FORCE_COLOR", "3");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::Plain);
    }

    #[test]
    fn test_teamcity() {
        let env = &mut FakeEnv::new();
        env.set("TEAMCITY_VERSION", "8.1");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::Plain);
        env.set("TEAMCITY_VERSION", "2023.05");
        assert_eq!(fidelity_from_environment(env, true), Fidelity::Ansi);
    }
}
