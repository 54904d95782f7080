// Copyright 2026 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::{
    encryption::{self, Iv, Key, BLOCK_SIZE, IV_SIZE, KEY_SIZE},
    error::{Error, Result},
    pad::{pad, unpad},
    serialise::Plaintext,
};
use bytes::Bytes;
use rand::{rngs::ThreadRng, CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// The ciphertexts produced by one [`Cipher::encode`] call, together with
/// the IV they were produced under.
///
/// Both parts must be stored and retrieved byte exact: decryption requires
/// the very same IV, and nothing in the ciphertext detects a mismatch.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Encoded {
    /// One ciphertext per encoded value, in input order.
    pub ciphertexts: Vec<Bytes>,
    /// The random IV shared by every ciphertext in this batch.
    pub iv: [u8; IV_SIZE],
}

/// En-/decodes values under a shared 256 bit key.
///
/// Constructed once with the key, then used for any number of [`encode`] and
/// [`decode`] calls. Each call stands alone: `encode` returns only the
/// ciphertexts it produced, and the key is zeroed when the instance is
/// dropped.
///
/// [`encode`]: Self::encode
/// [`decode`]: Self::decode
pub struct Cipher<R = ThreadRng> {
    key: Key,
    rng: R,
}

impl Cipher<ThreadRng> {
    /// Creates a cipher drawing IVs from the thread-local CSPRNG.
    ///
    /// # Errors
    ///
    /// [`Error::KeyLength`] unless `key` is exactly [`KEY_SIZE`] bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::with_rng(key, rand::thread_rng())
    }
}

impl<R: RngCore + CryptoRng> Cipher<R> {
    /// Creates a cipher drawing IVs from the supplied random source.
    ///
    /// The `CryptoRng` bound keeps non-cryptographic generators out; tests
    /// can still inject a seeded `ChaCha20Rng` for reproducible output.
    ///
    /// # Errors
    ///
    /// [`Error::KeyLength`] unless `key` is exactly [`KEY_SIZE`] bytes.
    pub fn with_rng(key: &[u8], rng: R) -> Result<Self> {
        if key.len() != KEY_SIZE {
            return Err(Error::KeyLength(key.len()));
        }
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(key);
        Ok(Self {
            key: Key(bytes),
            rng,
        })
    }

    /// Encrypts each of `values` under one fresh IV.
    ///
    /// Every value is flattened to its form-urlencoded string, padded to the
    /// cipher block size and encrypted with (key, IV). Ciphertexts are
    /// returned in input order alongside the IV they all share; nothing is
    /// retained on the instance between calls.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `values` is empty. [`Error::Encryption`]
    /// if the cipher primitive rejects its inputs.
    pub fn encode<I>(&mut self, values: I) -> Result<Encoded>
    where
        I: IntoIterator,
        I::Item: Into<Plaintext>,
    {
        let values: Vec<Plaintext> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(Error::InvalidInput("nothing to encode".to_string()));
        }

        let mut iv = [0u8; IV_SIZE];
        self.rng.fill_bytes(&mut iv);
        let iv = Iv(iv);

        let mut ciphertexts = Vec::with_capacity(values.len());
        for value in &values {
            let padded = pad(value.serialise().as_bytes(), BLOCK_SIZE);
            ciphertexts.push(encryption::encrypt(&padded, &self.key, &iv)?);
        }

        Ok(Encoded {
            ciphertexts,
            iv: iv.0,
        })
    }

    /// Decrypts one ciphertext produced by [`encode`](Self::encode).
    ///
    /// Returns the flat serialised string: a scalar comes back
    /// percent-encoded, named fields come back as a query string for the
    /// caller to parse.
    ///
    /// # Errors
    ///
    /// [`Error::Decryption`] if the IV is not [`IV_SIZE`] bytes, the
    /// ciphertext is empty or not block aligned, or the plaintext is not
    /// UTF-8 (a symptom of the wrong key or IV). [`Error::Padding`] if the
    /// decrypted buffer does not end in a valid pad length.
    pub fn decode(&self, ciphertext: &[u8], iv: &[u8]) -> Result<String> {
        if iv.len() != IV_SIZE {
            return Err(Error::Decryption(format!(
                "IV must be {} bytes, got {}",
                IV_SIZE,
                iv.len()
            )));
        }
        let mut bytes = [0u8; IV_SIZE];
        bytes.copy_from_slice(iv);

        let decrypted = encryption::decrypt(ciphertext, &self.key, &Iv(bytes))?;
        let plaintext = unpad(&decrypted)?;
        String::from_utf8(plaintext.to_vec())
            .map_err(|_| Error::Decryption("plaintext is not valid UTF-8".to_string()))
    }
}
