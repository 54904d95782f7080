// Copyright 2026 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use field_encryption::{test_helpers::random_key, Cipher, Encoded, Error, Plaintext, IV_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// A shared secret as deployments usually hand it around: 64 hex chars,
// decoding to the 32 bytes AES-256 requires.
const KEY_HEX: &str = "56aa54fa11be8b46afcc9042059d06c630844a77965ed7152c13faedf30ad0a6";

fn hex_key() -> Vec<u8> {
    hex::decode(KEY_HEX).expect("valid hex")
}

#[test]
fn round_trip_scalar() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");

    let encoded = cipher.encode(vec!["hello-world"]).expect("non-empty input");
    assert_eq!(encoded.ciphertexts.len(), 1);
    assert_eq!(encoded.iv.len(), IV_SIZE);

    let decoded = cipher
        .decode(&encoded.ciphertexts[0], &encoded.iv)
        .expect("matching key and IV");
    assert_eq!(decoded, "hello-world");
}

#[test]
fn scalars_come_back_percent_encoded() {
    let mut cipher = Cipher::new(&hex_key()).expect("key is the right length");

    let encoded = cipher
        .encode(vec!["Value 1", "Value 2"])
        .expect("non-empty input");
    assert_eq!(encoded.ciphertexts.len(), 2);

    let value_1 = cipher
        .decode(&encoded.ciphertexts[0], &encoded.iv)
        .expect("matching key and IV");
    let value_2 = cipher
        .decode(&encoded.ciphertexts[1], &encoded.iv)
        .expect("matching key and IV");
    assert_eq!(value_1, "Value+1");
    assert_eq!(value_2, "Value+2");
}

#[test]
fn fields_round_trip_as_a_query_string() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");

    let encoded = cipher
        .encode(vec![Plaintext::fields(vec![
            ("name", "Alice"),
            ("age", "30"),
        ])])
        .expect("non-empty input");

    let decoded = cipher
        .decode(&encoded.ciphertexts[0], &encoded.iv)
        .expect("matching key and IV");
    assert_eq!(decoded, "name=Alice&age=30");
}

#[test]
fn mixed_batches_share_one_iv() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");

    let encoded = cipher
        .encode(vec![
            Plaintext::from("scalar value"),
            Plaintext::fields(vec![("city", "Troon")]),
        ])
        .expect("non-empty input");
    assert_eq!(encoded.ciphertexts.len(), 2);

    assert_eq!(
        cipher
            .decode(&encoded.ciphertexts[0], &encoded.iv)
            .expect("matching key and IV"),
        "scalar+value"
    );
    assert_eq!(
        cipher
            .decode(&encoded.ciphertexts[1], &encoded.iv)
            .expect("matching key and IV"),
        "city=Troon"
    );
}

#[test]
fn values_longer_than_one_block_round_trip() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");

    let long = "0123456789".repeat(25);
    let encoded = cipher.encode(vec![long.as_str()]).expect("non-empty input");
    assert!(encoded.ciphertexts[0].len() > long.len());

    let decoded = cipher
        .decode(&encoded.ciphertexts[0], &encoded.iv)
        .expect("matching key and IV");
    assert_eq!(decoded, long);
}

#[test]
fn non_ascii_values_come_back_in_their_encoded_form() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");

    let encoded = cipher.encode(vec!["café"]).expect("non-empty input");
    let decoded = cipher
        .decode(&encoded.ciphertexts[0], &encoded.iv)
        .expect("matching key and IV");
    // The caller parses this back with a query string parser.
    assert_eq!(decoded, "caf%C3%A9");
}

#[test]
fn successive_encodes_use_fresh_ivs() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");

    let first = cipher.encode(vec!["same value"]).expect("non-empty input");
    let second = cipher.encode(vec!["same value"]).expect("non-empty input");

    assert_ne!(first.iv, second.iv);
    assert_ne!(first.ciphertexts[0], second.ciphertexts[0]);
}

#[test]
fn encode_returns_only_the_current_calls_ciphertexts() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");

    let first = cipher.encode(vec!["one", "two"]).expect("non-empty input");
    assert_eq!(first.ciphertexts.len(), 2);

    // Nothing accumulates on the instance between calls.
    let second = cipher.encode(vec!["three"]).expect("non-empty input");
    assert_eq!(second.ciphertexts.len(), 1);
}

#[test]
fn construction_rejects_bad_key_lengths() {
    for &len in &[0usize, 16, 31, 33, 64] {
        let key = vec![0u8; len];
        assert!(matches!(
            Cipher::new(&key),
            Err(Error::KeyLength(actual)) if actual == len
        ));
    }
}

#[test]
fn encode_rejects_empty_input() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");
    assert!(matches!(
        cipher.encode(Vec::<String>::new()),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn decode_rejects_a_wrong_length_iv() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");
    let encoded = cipher.encode(vec!["value"]).expect("non-empty input");

    assert!(matches!(
        cipher.decode(&encoded.ciphertexts[0], &encoded.iv[..8]),
        Err(Error::Decryption(_))
    ));
}

#[test]
fn decode_rejects_unaligned_ciphertext() {
    let key = random_key();
    let cipher = Cipher::new(&key).expect("key is the right length");

    assert!(matches!(
        cipher.decode(&[1u8, 2, 3], &[0u8; 16]),
        Err(Error::Decryption(_))
    ));
}

#[test]
fn the_wrong_key_never_yields_the_original_value() {
    let mut cipher = Cipher::new(&random_key()).expect("key is the right length");
    let other = Cipher::new(&random_key()).expect("key is the right length");

    let encoded = cipher.encode(vec!["secret value"]).expect("non-empty input");

    // Without integrity protection the failure mode is unspecified: usually
    // a padding or UTF-8 error, occasionally a garbage string.
    match other.decode(&encoded.ciphertexts[0], &encoded.iv) {
        Ok(garbled) => assert_ne!(garbled, "secret+value"),
        Err(_) => (),
    }
}

#[test]
fn the_wrong_iv_never_yields_the_original_value() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");

    let encoded = cipher.encode(vec!["secret value"]).expect("non-empty input");
    let mut wrong_iv = encoded.iv;
    wrong_iv[0] ^= 0xff;

    match cipher.decode(&encoded.ciphertexts[0], &wrong_iv) {
        Ok(garbled) => assert_ne!(garbled, "secret+value"),
        Err(_) => (),
    }
}

#[test]
fn a_seeded_rng_reproduces_the_same_output() {
    let key = [5u8; 32];
    let mut first =
        Cipher::with_rng(&key, ChaCha20Rng::seed_from_u64(11)).expect("key is the right length");
    let mut second =
        Cipher::with_rng(&key, ChaCha20Rng::seed_from_u64(11)).expect("key is the right length");

    let a = first.encode(vec!["Value 1"]).expect("non-empty input");
    let b = second.encode(vec!["Value 1"]).expect("non-empty input");
    assert_eq!(a, b);
}

#[test]
fn encoded_results_survive_binary_storage() {
    let key = random_key();
    let mut cipher = Cipher::new(&key).expect("key is the right length");

    let encoded = cipher
        .encode(vec!["Value 1", "Value 2"])
        .expect("non-empty input");

    let stored = bincode::serialize(&encoded).expect("serialisable");
    let fetched: Encoded = bincode::deserialize(&stored).expect("deserialisable");
    assert_eq!(fetched, encoded);

    let decoded = cipher
        .decode(&fetched.ciphertexts[1], &fetched.iv)
        .expect("matching key and IV");
    assert_eq!(decoded, "Value+2");
}
