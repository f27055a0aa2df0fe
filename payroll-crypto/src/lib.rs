//! Field-level encryption for stored compensation values.
//!
//! Compensation figures are encrypted column by column before they reach
//! the database, so a leaked table dump exposes no salaries. Each column
//! gets its own key, derived from the master key and a fixed column label;
//! a value copied from one column into another therefore fails to decrypt
//! instead of silently reading as a different field.
//!
//! Payloads are `base64(nonce ‖ ciphertext ‖ tag)` with AES-256-GCM and a
//! fresh random 96-bit nonce per value. Encrypting the same plaintext twice
//! yields different payloads.
//!
//! The calculation engine never sees ciphertext; encryption and decryption
//! happen only in the persistence layer.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Length of the random nonce prefixed to every payload.
const NONCE_LEN: usize = 12;

/// Errors that can occur while encrypting or decrypting a field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// The payload is not valid base64.
    #[error("payload is not valid base64: {0}")]
    Encoding(String),

    /// The payload is too short to carry a nonce and an auth tag.
    #[error("payload of {0} bytes is too short")]
    Truncated(usize),

    /// Authenticated decryption failed: the payload was tampered with or
    /// was encrypted under a different column key.
    #[error("decryption failed for column '{0}'")]
    Decrypt(String),

    /// The decrypted bytes are not valid UTF-8.
    #[error("decrypted value is not valid UTF-8")]
    NotUtf8,

    /// Encryption itself failed.
    #[error("encryption failed for column '{0}'")]
    Encrypt(String),
}

/// Well-known column labels. Keys are derived from the label rather than
/// the raw column name so a schema rename does not orphan stored values.
fn column_label(column: &str) -> &str {
    match column {
        "account_number_enc" => "account-number",
        "bank_account_enc" => "bank-account",
        "basic_salary_enc" => "basic-salary",
        "transport_allow_enc" => "transport-allowance",
        "housing_allow_enc" => "housing-allowance",
        "variable_allow_enc" => "variable-allowance",
        "performance_allow_enc" => "performance-allowance",
        "net_paid_enc" => "net-paid",
        "payroll_snapshot_enc" => "payroll-snapshot",
        other => other,
    }
}

/// Encrypts and decrypts individual database fields.
///
/// Cheap to clone and safe to share across threads; it holds only derived
/// key material.
#[derive(Clone)]
pub struct FieldCipher {
    master: [u8; 32],
}

impl FieldCipher {
    /// Derives the cipher from a master passphrase.
    pub fn new(master_key: &str) -> Self {
        Self {
            master: Sha256::digest(master_key.as_bytes()).into(),
        }
    }

    fn column_key(&self, column: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(column_label(column).as_bytes());
        hasher.update(b"-");
        hasher.update(hex(&self.master).as_bytes());
        hasher.finalize().into()
    }

    /// Encrypts one field value for the given column.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Encrypt`] if the underlying cipher rejects
    /// the operation.
    pub fn encrypt_field(
        &self,
        column: &str,
        plaintext: &str,
    ) -> Result<String, CipherError> {
        let key_bytes = self.column_key(column);
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key_bytes));

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| CipherError::Encrypt(column.to_string()))?;

        let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(&nonce_bytes);
        payload.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(payload))
    }

    /// Decrypts one field value for the given column.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError`] when the payload is malformed, was tampered
    /// with, or was encrypted under a different column key.
    pub fn decrypt_field(
        &self,
        column: &str,
        payload: &str,
    ) -> Result<String, CipherError> {
        let raw = STANDARD
            .decode(payload)
            .map_err(|e| CipherError::Encoding(e.to_string()))?;

        if raw.len() <= NONCE_LEN {
            return Err(CipherError::Truncated(raw.len()));
        }
        let (nonce_bytes, ciphertext) = raw.split_at(NONCE_LEN);

        let key_bytes = self.column_key(column);
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key_bytes));

        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| CipherError::Decrypt(column.to_string()))?;

        String::from_utf8(plaintext).map_err(|_| CipherError::NotUtf8)
    }
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
