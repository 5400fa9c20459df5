use crate::assets::pool::UserAssets;
use crate::foundation::error::{ReelError, ReelResult};
use crate::template::model::Template;
use std::fmt;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5f1a_2c4e_9b7d_3e81;

/// Stable 128-bit digest of a `(template, assets)` pair.
///
/// Compilation is a pure function of these inputs, so callers that recompile on every reactive
/// update can key a memo on this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash the canonical JSON encoding of both inputs.
pub fn fingerprint(template: &Template, assets: &UserAssets) -> ReelResult<Fingerprint> {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    write_json(&mut h, template)?;
    write_json(&mut h, assets)?;
    let v = h.digest128();
    Ok(Fingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    })
}

fn write_json<T: serde::Serialize>(h: &mut Xxh3, value: &T) -> ReelResult<()> {
    let bytes =
        serde_json::to_vec(value).map_err(|e| ReelError::serde(format!("fingerprint: {e}")))?;
    // Length prefix keeps the two documents from aliasing.
    h.update(&(bytes.len() as u64).to_le_bytes());
    h.update(&bytes);
    Ok(())
}
