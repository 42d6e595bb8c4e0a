use openssl::encrypt::{Decrypter, Encrypter};
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private, Public};
use openssl::rand::rand_bytes;
use openssl::rsa::Padding;
use openssl::symm::{Cipher, decrypt, encrypt};

use crate::common::constants::{FILE_KEY_LEN, IV_LEN, MIN_ENVELOPE_LEN, SEALED_KEY_LEN};

/// Defines errors that can occur while encoding or decoding one envelope.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The blob is shorter than a sealed key plus an IV, so it cannot be
    /// an envelope at all.
    #[error("Envelope too short: {len} bytes, need at least {MIN_ENVELOPE_LEN}")]
    MalformedEnvelope { len: usize },

    /// RSA-OAEP unsealing of the file key failed. This means a wrong
    /// private key or corrupted sealed-key bytes, never recoverable data.
    #[error("Failed to unseal the file key (wrong private key or corrupted envelope)")]
    KeyUnseal,

    /// The recovered plaintext did not carry valid PKCS#7 padding. This
    /// strongly indicates ciphertext corruption or a wrong key.
    #[error("Invalid padding in decrypted data (corrupted ciphertext or wrong key)")]
    Padding,

    /// The recipient key does not produce the fixed 256-byte sealed-key
    /// field the envelope layout requires.
    #[error("Recipient key is {bits} bits; the envelope layout requires a 2048-bit key")]
    UnsupportedKey { bits: u32 },

    /// An error occurred inside the OpenSSL cryptographic library.
    #[error("OpenSSL error stack: {0}")]
    OpenSsl(#[from] openssl::error::ErrorStack),
}

/// Seals a plaintext blob into one envelope.
///
/// A fresh 32-byte AES key and 16-byte IV are drawn for every call; the
/// plaintext is AES-256-CBC encrypted (PKCS#7 padded, so even aligned
/// input gains a full block), and the AES key is sealed under
/// `public_key` with RSA-OAEP using SHA-256 for both the hash and the
/// MGF1 mask, empty label.
///
/// The envelope is the plain concatenation
/// `sealed_key(256) || iv(16) || ciphertext`: no magic number, no
/// version byte, no length prefix.
pub fn seal_bytes(plaintext: &[u8], public_key: &PKey<Public>) -> Result<Vec<u8>, EnvelopeError> {
    let mut file_key = [0u8; FILE_KEY_LEN];
    rand_bytes(&mut file_key)?;
    let mut iv = [0u8; IV_LEN];
    rand_bytes(&mut iv)?;

    let ciphertext = encrypt(Cipher::aes_256_cbc(), &file_key, Some(&iv), plaintext)?;

    let mut encrypter = Encrypter::new(public_key)?;
    encrypter.set_rsa_padding(Padding::PKCS1_OAEP)?;
    encrypter.set_rsa_oaep_md(MessageDigest::sha256())?;
    encrypter.set_rsa_mgf1_md(MessageDigest::sha256())?;

    let sealed_len = encrypter.encrypt_len(&file_key)?;
    if sealed_len != SEALED_KEY_LEN {
        return Err(EnvelopeError::UnsupportedKey {
            bits: public_key.bits(),
        });
    }

    let mut sealed_key = vec![0u8; sealed_len];
    let written = encrypter.encrypt(&file_key, &mut sealed_key)?;
    sealed_key.truncate(written);

    let mut envelope = Vec::with_capacity(SEALED_KEY_LEN + IV_LEN + ciphertext.len());
    envelope.extend_from_slice(&sealed_key);
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// Unseals one envelope back into its plaintext.
///
/// The envelope is split at fixed offsets (sealed key at 0..256, IV at
/// 256..272, ciphertext after that), the file key is recovered with
/// RSA-OAEP/SHA-256, and the ciphertext is AES-256-CBC decrypted with the
/// padding stripped.
pub fn unseal_bytes(
    envelope: &[u8],
    private_key: &PKey<Private>,
) -> Result<Vec<u8>, EnvelopeError> {
    if envelope.len() < MIN_ENVELOPE_LEN {
        return Err(EnvelopeError::MalformedEnvelope {
            len: envelope.len(),
        });
    }

    let sealed_key = &envelope[..SEALED_KEY_LEN];
    let iv = &envelope[SEALED_KEY_LEN..MIN_ENVELOPE_LEN];
    let ciphertext = &envelope[MIN_ENVELOPE_LEN..];

    let mut decrypter = Decrypter::new(private_key)?;
    decrypter.set_rsa_padding(Padding::PKCS1_OAEP)?;
    decrypter.set_rsa_oaep_md(MessageDigest::sha256())?;
    decrypter.set_rsa_mgf1_md(MessageDigest::sha256())?;

    let mut file_key = vec![0u8; decrypter.decrypt_len(sealed_key)?];
    let recovered = decrypter
        .decrypt(sealed_key, &mut file_key)
        .map_err(|_| EnvelopeError::KeyUnseal)?;
    // An OAEP success that does not yield exactly 32 key bytes is still a
    // key mismatch as far as the caller is concerned.
    if recovered != FILE_KEY_LEN {
        return Err(EnvelopeError::KeyUnseal);
    }
    file_key.truncate(recovered);

    decrypt(Cipher::aes_256_cbc(), &file_key, Some(iv), ciphertext)
        .map_err(|_| EnvelopeError::Padding)
}
