// Copyright 2026 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::encryption::KEY_SIZE;
use thiserror::Error;

/// Specialisation of `std::Result` for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors which can arise while encoding or decoding values.
///
/// None of these are retried internally: a failed cryptographic operation
/// cannot succeed on a second attempt with the same inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// The input to `encode` was empty or otherwise unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The supplied encryption key is not the length AES-256 requires.
    #[error("key must be {KEY_SIZE} bytes, got {0}")]
    KeyLength(usize),
    /// The cipher primitive rejected the encryption inputs.
    #[error("an error during encryption")]
    Encryption,
    /// The cipher primitive rejected the ciphertext or IV.
    #[error("an error during decryption: {0}")]
    Decryption(String),
    /// The final decrypted byte is not a valid pad length. Raised instead of
    /// silently truncating, since a corrupted ciphertext can otherwise slice
    /// out of range.
    #[error("invalid padding length: {0}")]
    Padding(usize),
}
