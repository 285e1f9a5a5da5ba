use thiserror::Error;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}";

pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    #[error("at least one character class must be enabled")]
    NoCharsetSelected,

    #[error("password length must be between 1 and 128, got {0}")]
    LengthOutOfRange(usize),
}

/// Which character classes may appear in a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetSpec {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharsetSpec {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetSpec {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn any_enabled(&self) -> bool {
        self.lowercase || self.uppercase || self.digits || self.symbols
    }

    /// Concatenates the canonical class strings for every enabled flag.
    /// The classes are disjoint and appended in a fixed order, so the
    /// resulting pool is duplicate-free and deterministic.
    pub fn build(&self) -> Result<Pool, InvalidConfiguration> {
        if !self.any_enabled() {
            return Err(InvalidConfiguration::NoCharsetSelected);
        }

        let mut chars = Vec::new();
        if self.lowercase {
            chars.extend_from_slice(LOWERCASE);
        }
        if self.uppercase {
            chars.extend_from_slice(UPPERCASE);
        }
        if self.digits {
            chars.extend_from_slice(DIGITS);
        }
        if self.symbols {
            chars.extend_from_slice(SYMBOLS);
        }

        Ok(Pool { chars })
    }
}

/// The ordered, non-empty set of characters eligible for random selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    chars: Vec<u8>,
}

impl Pool {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.chars.contains(&byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_class_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 18);
    }

    #[test]
    fn test_classes_disjoint() {
        let all: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len(), "Character classes overlap");
    }

    #[test]
    fn test_build_all_flags() {
        let pool = CharsetSpec::all().build().unwrap();
        assert_eq!(pool.len(), 80);

        let expected: HashSet<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS]
            .concat()
            .into_iter()
            .collect();
        let actual: HashSet<u8> = pool.as_bytes().iter().copied().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_build_single_class() {
        let spec = CharsetSpec {
            lowercase: false,
            uppercase: false,
            digits: true,
            symbols: false,
        };
        let pool = spec.build().unwrap();
        assert_eq!(pool.as_bytes(), DIGITS);
    }

    #[test]
    fn test_build_is_union_of_enabled_classes() {
        let spec = CharsetSpec {
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: true,
        };
        let pool = spec.build().unwrap();
        assert_eq!(pool.len(), LOWERCASE.len() + SYMBOLS.len());

        let expected: HashSet<u8> = [LOWERCASE, SYMBOLS].concat().into_iter().collect();
        let actual: HashSet<u8> = pool.as_bytes().iter().copied().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_build_no_duplicates() {
        let pool = CharsetSpec::all().build().unwrap();
        let unique: HashSet<_> = pool.as_bytes().iter().collect();
        assert_eq!(unique.len(), pool.len());
    }

    #[test]
    fn test_build_deterministic_order() {
        let pool1 = CharsetSpec::all().build().unwrap();
        let pool2 = CharsetSpec::all().build().unwrap();
        assert_eq!(pool1, pool2);

        // Fixed concatenation order: lowercase, uppercase, digits, symbols.
        assert_eq!(pool1.as_bytes()[0], b'a');
        assert_eq!(pool1.as_bytes()[26], b'A');
        assert_eq!(pool1.as_bytes()[52], b'0');
        assert_eq!(pool1.as_bytes()[62], b'!');
    }

    #[test]
    fn test_build_all_flags_false() {
        let spec = CharsetSpec {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        };
        let result = spec.build();
        assert_eq!(result, Err(InvalidConfiguration::NoCharsetSelected));
    }

    #[test]
    fn test_contains() {
        let pool = CharsetSpec::all().build().unwrap();
        assert!(pool.contains(b'a'));
        assert!(pool.contains(b'Z'));
        assert!(pool.contains(b'7'));
        assert!(pool.contains(b'#'));
        assert!(!pool.contains(b' '));
        assert!(!pool.contains(b'~'));
    }
}
