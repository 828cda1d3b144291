use std::fmt::{Debug, Formatter};

/// The specific ko rules used. Suicide is never allowed and the game always ends after two consecutive passes.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rules {
    /// Forbid any placement that recreates a board position that occurred earlier in the game.
    /// The simple ko rule is always enforced.
    pub positional_superko: bool,
}

impl Rules {
    const NAMED_RULES: &'static [(&'static str, Rules)] = &[
        ("SimpleKo", Rules::simple_ko()),
        ("PositionalSuperko", Rules::positional_superko()),
    ];

    /// Only the immediate single-stone recapture is forbidden.
    pub const fn simple_ko() -> Self {
        Rules {
            positional_superko: false,
        }
    }

    /// See <https://senseis.xmp.net/?SuperKo>.
    pub const fn positional_superko() -> Self {
        Rules {
            positional_superko: true,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::simple_ko()
    }
}

impl Debug for Rules {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = Rules::NAMED_RULES.iter().find(|(_, r)| r == self).map(|(n, _)| n);
        if let Some(name) = name {
            write!(f, "Rules({:?})", name)
        } else {
            f.debug_struct("Rules")
                .field("positional_superko", &self.positional_superko)
                .finish()
        }
    }
}
