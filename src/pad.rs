// Copyright 2026 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! PKCS#7 style block padding.

use crate::error::{Error, Result};

/// Pads `data` to a multiple of `block_size` bytes.
///
/// Between 1 and `block_size` bytes are appended, each holding the pad
/// length. Data already on a block boundary gains a full extra block, so the
/// pad length is never 0. `block_size` must fit in a byte.
pub(crate) fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!(block_size >= 1 && block_size <= u8::MAX as usize);
    let pad_len = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strips the padding appended by [`pad`].
///
/// The pad length is read from the final byte and must lie within
/// `1..=data.len()` before any slicing happens; anything else means the
/// buffer was corrupted or decrypted under the wrong key or IV.
pub(crate) fn unpad(data: &[u8]) -> Result<&[u8]> {
    let pad_len = *data.last().ok_or(Error::Padding(0))? as usize;
    if pad_len == 0 || pad_len > data.len() {
        return Err(Error::Padding(pad_len));
    }
    Ok(&data[..data.len() - pad_len])
}
