//! Key Codec
//!
//! Deterministic, reversible encoding of keys into filesystem-safe names.
//!
//! ## Responsibilities
//! - Produce a stable canonical string form for every key type
//! - Encode that form so path separators and arbitrary bytes cannot
//!   corrupt the table directory or escape it
//! - Decode a filename back into the typed key it was written for
//!
//! ## Encoding Choice
//! URL-safe, unpadded base64. Reversible by construction, so distinct
//! canonical strings can never collide (no truncation, no hashing).

use std::borrow::Cow;
use std::hash::Hash;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::error::{Result, ShelfError};

// =============================================================================
// StorageKey Trait
// =============================================================================

/// A key's contract with the storage layer.
///
/// Key uniqueness is defined by equality of the canonical string form:
/// `as_key_str` must be stable and injective, and `from_key_str` must be
/// its exact inverse. Carrying the typed parse-back on the key type keeps
/// `keys()` returning real `K`s instead of bare strings.
pub trait StorageKey: Clone + Eq + Hash + Send + Sync {
    /// Canonical string form of this key
    fn as_key_str(&self) -> Cow<'_, str>;

    /// Reconstruct a typed key from its canonical string form
    fn from_key_str(s: &str) -> Result<Self>
    where
        Self: Sized;
}

impl StorageKey for String {
    fn as_key_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn from_key_str(s: &str) -> Result<Self> {
        Ok(s.to_string())
    }
}

macro_rules! impl_storage_key_for_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StorageKey for $ty {
                fn as_key_str(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }

                fn from_key_str(s: &str) -> Result<Self> {
                    s.parse().map_err(|e| {
                        ShelfError::KeyCodec(format!(
                            "invalid {} key '{}': {}",
                            stringify!($ty),
                            s,
                            e
                        ))
                    })
                }
            }
        )*
    };
}

impl_storage_key_for_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// =============================================================================
// Encode/Decode
// =============================================================================

/// Encode a canonical key string into a filesystem-safe filename
pub fn encode_key(canonical: &str) -> String {
    URL_SAFE_NO_PAD.encode(canonical.as_bytes())
}

/// Decode a filename back into the canonical key string
///
/// Fails with `KeyCodec` if the filename is not valid base64 or does not
/// decode to UTF-8 (e.g. a foreign file dropped into a table directory).
pub fn decode_key(encoded: &str) -> Result<String> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).map_err(|e| {
        ShelfError::KeyCodec(format!("invalid encoded key '{}': {}", encoded, e))
    })?;

    String::from_utf8(bytes)
        .map_err(|e| ShelfError::KeyCodec(format!("encoded key is not valid UTF-8: {}", e)))
}
