//! Macro for implementing Display and FromStr for tag-like domain enums
//!
//! Eliminates boilerplate for enums that travel as plain strings (check
//! scopes, time brackets). Parsing is case-insensitive; output is the
//! canonical tag spelling.

/// Implements Display and FromStr traits for tag-like enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical tags
#[macro_export]
macro_rules! impl_domain_tag_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($str => ::core::result::Result::Ok(Self::$variant),)+
                    _ => ::core::result::Result::Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Sample {
        One,
        Two,
    }

    impl_domain_tag_conversions!(Sample {
        One => "ONE",
        Two => "TWO",
    });

    #[test]
    fn display_uses_canonical_tag() {
        assert_eq!(Sample::One.to_string(), "ONE");
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("two".parse::<Sample>(), Ok(Sample::Two));
        assert!("three".parse::<Sample>().is_err());
    }
}
