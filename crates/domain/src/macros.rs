//! Macro for implementing Display and FromStr for closed wire-name enums
//!
//! Several domain enums (saved item kinds, report reasons, session states)
//! travel as lowercase strings. This macro keeps the string table in one
//! place for both directions and parses case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use rizzmaster_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Vibe {
//!     Flirty,
//!     Dry,
//! }
//!
//! impl_wire_name_conversions!(Vibe {
//!     Flirty => "flirty",
//!     Dry => "dry",
//! });
//!
//! assert_eq!(Vibe::Dry.to_string(), "dry");
//! assert_eq!("FLIRTY".parse::<Vibe>(), Ok(Vibe::Flirty));
//! ```

/// Implements Display and FromStr for enums with a fixed wire name per
/// variant.
///
/// Parsing is case-insensitive; failures carry the enum name and the
/// rejected input.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Wire name of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tone {
        Tease,
        LowEffort,
    }

    impl_wire_name_conversions!(Tone {
        Tease => "tease",
        LowEffort => "low_effort",
    });

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(Tone::Tease.to_string(), "tease");
        assert_eq!(Tone::LowEffort.to_string(), "low_effort");
        assert_eq!(Tone::LowEffort.as_str(), "low_effort");
    }

    #[test]
    fn parse_ignores_case_and_surrounding_space() {
        assert_eq!(Tone::from_str("TEASE").unwrap(), Tone::Tease);
        assert_eq!(Tone::from_str(" Low_Effort ").unwrap(), Tone::LowEffort);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = Tone::from_str("smooth").unwrap_err();
        assert_eq!(err, "Invalid Tone: smooth");
        assert!(Tone::from_str("").is_err());
    }
}
