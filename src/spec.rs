//! TOML language levels and extensions.
//!
//! The serializer targets a *specification level*: a TOML version plus a set
//! of opt-in extensions. The level decides which escape sequences exist,
//! whether `null` is a value, which characters may appear in a bare key, and
//! a few other syntax details.
//!
//! [`TomlSpec::default`] is plain TOML 1.0.0 with every extension off, which
//! is what almost every consumer of the output understands. Opting into
//! 1.1.0 turns on the `\e` and `\x` escape sequences and the wider bare-key
//! alphabet; the remaining extensions are individually gated because no
//! released TOML version includes them.
//!
//! ## Examples
//!
//! ```rust
//! use toml_fmt::{TomlSpec, TomlVersion};
//!
//! let spec = TomlSpec::v1_1_0();
//! assert_eq!(spec.version, TomlVersion::V1_1_0);
//! assert!(spec.v1_1_0_add_escape_sequence_e);
//!
//! let strict = TomlSpec::default();
//! assert_eq!(strict.version, TomlVersion::V1_0_0);
//! assert!(!strict.ext_null_value);
//! ```

/// A released (or drafted) TOML language version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TomlVersion {
    #[default]
    V1_0_0,
    V1_1_0,
}

/// The specification level the serializer writes for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TomlSpec {
    pub version: TomlVersion,
    /// Accept the `Empty` value kind and render it as `null`.
    pub ext_null_value: bool,
    /// Append `_<suffix>` unit suffixes to decimal numbers.
    pub ext_num_suffix: bool,
    /// Render floats with the `Hex` form as C-style hex floats.
    pub ext_hex_float: bool,
    /// Escape `0x1B` as `\e` in basic strings.
    pub v1_1_0_add_escape_sequence_e: bool,
    /// Escape control characters as `\xHH` rather than `\u00HH`.
    pub v1_1_0_add_escape_sequence_x: bool,
}

impl TomlSpec {
    /// TOML 1.0.0, all extensions disabled.
    #[must_use]
    pub fn v1_0_0() -> Self {
        TomlSpec {
            version: TomlVersion::V1_0_0,
            ext_null_value: false,
            ext_num_suffix: false,
            ext_hex_float: false,
            v1_1_0_add_escape_sequence_e: false,
            v1_1_0_add_escape_sequence_x: false,
        }
    }

    /// TOML 1.1.0: the 1.1 escape sequences are on, other extensions stay
    /// off.
    #[must_use]
    pub fn v1_1_0() -> Self {
        TomlSpec {
            version: TomlVersion::V1_1_0,
            v1_1_0_add_escape_sequence_e: true,
            v1_1_0_add_escape_sequence_x: true,
            ..Self::v1_0_0()
        }
    }
}

impl Default for TomlSpec {
    fn default() -> Self {
        Self::v1_0_0()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict_v1_0_0() {
        let spec = TomlSpec::default();
        assert_eq!(spec, TomlSpec::v1_0_0());
        assert!(!spec.ext_null_value);
        assert!(!spec.ext_num_suffix);
        assert!(!spec.ext_hex_float);
        assert!(!spec.v1_1_0_add_escape_sequence_e);
        assert!(!spec.v1_1_0_add_escape_sequence_x);
    }

    #[test]
    fn versions_are_ordered() {
        assert!(TomlVersion::V1_0_0 < TomlVersion::V1_1_0);
    }
}
