//! Macros and helpers

/// Creates a [crate::technology::Technology] from given string
/// description, which must be valid.
#[macro_export]
macro_rules! tech {
    ($desc: expr) => {
        <$crate::technology::Technology as std::str::FromStr>::from_str($desc).unwrap()
    };
}

/// Parses a [crate::record::Record] from given survey line,
/// which must be valid.
#[macro_export]
macro_rules! record {
    ($line: expr) => {
        <$crate::record::Record as std::str::FromStr>::from_str($line).unwrap()
    };
}
