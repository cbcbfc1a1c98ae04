use crate::{Artifact, ArtifactError};
use sha2::{Digest, Sha256};

/// Consumer-side commitment over the artifact's data columns.
///
/// The evaluator that checks the exported threshold also intakes a single
/// digest binding it to the exact `x` and `y` columns: each column is
/// hashed on its own, then the two column hashes are hashed together. The
/// hash runs over the decoded integers, not the JSON text, so any encoding
/// that decodes to the same values commits identically.
///
/// Evaluators whose proof system prescribes its own hash (e.g. an
/// algebraic hash over a prime field) derive this digest in that domain
/// instead; the two-level column structure is the part both sides share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCommitment {
    pub x_hash: [u8; 32],
    pub y_hash: [u8; 32],
    /// `H(x_hash || y_hash)`.
    pub commitment: [u8; 32],
}

impl DataCommitment {
    /// Decode the artifact and derive the column commitment.
    ///
    /// Fails only if a field does not parse back as a decimal integer;
    /// no arithmetic is involved.
    pub fn of(artifact: &Artifact) -> Result<Self, ArtifactError> {
        let decoded = artifact.decode()?;
        let x_hash = hash_column(decoded.x.iter().map(|&v| i128::from(v)));
        let y_hash = hash_column(decoded.y.iter().copied());

        let mut hasher = Sha256::new();
        hasher.update(x_hash);
        hasher.update(y_hash);

        Ok(Self {
            x_hash,
            y_hash,
            commitment: hasher.finalize().into(),
        })
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.commitment)
    }
}

// Fixed-width little-endian encoding: column length is implied by the
// byte count, so [1, 2] and [1, 2, 0] hash differently.
fn hash_column(values: impl Iterator<Item = i128>) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for value in values {
        hasher.update(value.to_le_bytes());
    }
    hasher.finalize().into()
}
