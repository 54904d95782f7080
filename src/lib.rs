// Copyright 2026 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Symmetric encryption of individual stored values.
//!
//! Given a shared secret key, a [`Cipher`] encrypts one or more values into
//! binary ciphertexts plus a random initialisation vector (IV), and later
//! decrypts a ciphertext/IV pair back into the original value. The intended
//! consumer stores both parts externally, e.g. in a pair of database
//! columns, and fetches them again to recover the value.
//!
//! Values are flattened to a form-urlencoded string before encryption, so a
//! decoded scalar comes back percent-encoded (`"Value 1"` decodes to
//! `"Value+1"`) and named fields come back as a query string, to be parsed
//! by the caller. Ciphertext carries no integrity protection: tampering is
//! only caught when it happens to break the padding or the UTF-8 decoding,
//! never guaranteed. Callers needing tamper evidence should layer an
//! authenticated mode on top.
//!
//! # Encode
//!
//! ```
//! use field_encryption::Cipher;
//!
//! # fn main() -> field_encryption::Result<()> {
//! let key = hex::decode("56aa54fa11be8b46afcc9042059d06c630844a77965ed7152c13faedf30ad0a6")
//!     .expect("valid hex");
//! let mut cipher = Cipher::new(&key)?;
//!
//! let encoded = cipher.encode(vec!["Value 1", "Value 2"])?;
//! assert_eq!(encoded.ciphertexts.len(), 2);
//!
//! // Store each ciphertext and the shared `encoded.iv`, e.g. in a database.
//! // Without the IV the values cannot be decoded.
//! # Ok(())
//! # }
//! ```
//!
//! # Decode
//!
//! ```
//! use field_encryption::{Cipher, Plaintext};
//!
//! # fn main() -> field_encryption::Result<()> {
//! let mut cipher = Cipher::new(&[7u8; 32])?;
//! let encoded = cipher.encode(vec![Plaintext::fields(vec![
//!     ("name", "Alice"),
//!     ("age", "30"),
//! ])])?;
//!
//! // Fetch the ciphertext and IV back from storage.
//! let decoded = cipher.decode(&encoded.ciphertexts[0], &encoded.iv)?;
//! assert_eq!(decoded, "name=Alice&age=30");
//! # Ok(())
//! # }
//! ```

#![doc(
    html_logo_url = "https://raw.githubusercontent.com/maidsafe/QA/master/Images/maidsafe_logo.png",
    html_favicon_url = "https://maidsafe.net/img/favicon.ico"
)]
// For explanation of lint checks, run `rustc -W help` or see
// https://github.com/maidsafe/QA/blob/master/Documentation/Rust%20Lint%20Checks.md
#![forbid(
    arithmetic_overflow,
    mutable_transmutes,
    no_mangle_const_items,
    unknown_crate_types
)]
#![deny(
    bad_style,
    deprecated,
    improper_ctypes,
    missing_docs,
    non_shorthand_field_patterns,
    overflowing_literals,
    stable_features,
    unconditional_recursion,
    unknown_lints,
    unsafe_code,
    unused,
    unused_allocation,
    unused_attributes,
    unused_comparisons,
    unused_features,
    unused_parens,
    while_true
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

mod cipher;
mod encryption;
mod error;
mod pad;
mod serialise;
pub mod test_helpers;

pub use self::{
    cipher::{Cipher, Encoded},
    encryption::{BLOCK_SIZE, IV_SIZE, KEY_SIZE},
    error::{Error, Result},
    serialise::Plaintext,
};
