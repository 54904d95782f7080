// Copyright 2026 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

//! Input values and their deterministic wire form.
//!
//! Every value is flattened to a single `application/x-www-form-urlencoded`
//! string before padding and encryption. Decoding returns that flat string,
//! which callers holding named fields parse back with a query string parser.

use url::form_urlencoded;

/// A single value accepted by [`Cipher::encode`](crate::Cipher::encode).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Plaintext {
    /// A scalar, percent-encoded as one token (`"Value 1"` → `"Value+1"`).
    Value(String),
    /// Named fields, encoded as `k1=v1&k2=v2` in insertion order.
    Fields(Vec<(String, String)>),
}

impl Plaintext {
    /// Convenience constructor for named fields.
    pub fn fields<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Plaintext::Fields(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Flattens the value to its canonical form-urlencoded string.
    ///
    /// Field order is insertion order, so equal input always yields a byte
    /// identical string.
    pub(crate) fn serialise(&self) -> String {
        match self {
            Plaintext::Value(value) => {
                form_urlencoded::byte_serialize(value.as_bytes()).collect()
            }
            Plaintext::Fields(pairs) => {
                let mut serialiser = form_urlencoded::Serializer::new(String::new());
                let _ =
                    serialiser.extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                serialiser.finish()
            }
        }
    }
}

impl From<&str> for Plaintext {
    fn from(value: &str) -> Self {
        Plaintext::Value(value.to_string())
    }
}

impl From<String> for Plaintext {
    fn from(value: String) -> Self {
        Plaintext::Value(value)
    }
}

impl From<Vec<(String, String)>> for Plaintext {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Plaintext::Fields(pairs)
    }
}
