// Copyright 2026 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Raw AES-256-CBC over block-aligned buffers. Padding is applied and
//! stripped by the `pad` module, so the cipher runs with padding disabled
//! and only ever sees whole blocks.

use crate::error::{Error, Result};
use aes::{
    cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit},
    Aes256,
};
use bytes::Bytes;
use zeroize::{Zeroize, ZeroizeOnDrop};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Byte length of an AES-256 key.
pub const KEY_SIZE: usize = 32;
/// Byte length of an initialisation vector, one cipher block.
pub const IV_SIZE: usize = 16;
/// The AES block size which plaintext is padded to before encryption.
pub const BLOCK_SIZE: usize = 16;

// Zeroed on drop so key material does not outlive the owning `Cipher`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Key(pub(crate) [u8; KEY_SIZE]);

pub(crate) struct Iv(pub(crate) [u8; IV_SIZE]);

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Iv {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

pub(crate) fn encrypt(padded: &[u8], key: &Key, iv: &Iv) -> Result<Bytes> {
    if padded.is_empty() || padded.len() % BLOCK_SIZE != 0 {
        return Err(Error::Encryption);
    }
    let cipher = Aes256CbcEnc::new(key.as_ref().into(), iv.as_ref().into());
    Ok(Bytes::from(cipher.encrypt_padded_vec_mut::<NoPadding>(padded)))
}

pub(crate) fn decrypt(ciphertext: &[u8], key: &Key, iv: &Iv) -> Result<Bytes> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::Decryption(format!(
            "ciphertext length {} is not a positive multiple of the block size",
            ciphertext.len()
        )));
    }
    let cipher = Aes256CbcDec::new(key.as_ref().into(), iv.as_ref().into());
    cipher
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map(Bytes::from)
        .map_err(|e| Error::Decryption(format!("decrypt failed with {}", e)))
}
