use sha2::{Digest, Sha256};

/// The editor password, held only as a SHA-256 digest.
///
/// Candidates are hashed before comparison so the check runs over fixed
/// 32-byte values regardless of input length.
#[derive(Clone)]
pub struct EditorCredentials {
    digest: [u8; 32],
}

impl EditorCredentials {
    pub fn new(password: &str) -> Self {
        Self {
            digest: Self::hash(password),
        }
    }

    fn hash(password: &str) -> [u8; 32] {
        Sha256::digest(password.as_bytes()).into()
    }

    /// Check a login attempt. Empty passwords never match.
    pub fn verify(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        let candidate = Self::hash(candidate);
        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for EditorCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorCredentials")
            .field("digest", &hex::encode(&self.digest[..4]))
            .finish_non_exhaustive()
    }
}
