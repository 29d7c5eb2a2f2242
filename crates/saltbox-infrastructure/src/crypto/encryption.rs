//! Encryption/decryption service using AES-256-CBC
//!
//! With `create_iv` enabled every encryption draws a fresh IV and prepends it
//! to the ciphertext; otherwise an all-zero IV is used and nothing is
//! prepended. Padding is PKCS#7.

use std::io::{self, Read, Write};

use aes::Aes256;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cbc::cipher::generic_array::GenericArray;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use saltbox_domain::constants::{AES_BLOCK_SIZE, AES_KEY_SIZE};
use saltbox_domain::error::{Error, Result};
use saltbox_domain::ports::providers::CipherProvider;
use tracing::trace;
use zeroize::Zeroizing;

use super::random::RandomGenerator;
use crate::constants::STREAM_CHUNK_SIZE;
use crate::error_ext::ErrorContext;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

const ZERO_IV: [u8; AES_BLOCK_SIZE] = [0u8; AES_BLOCK_SIZE];

/// AES-256-CBC cipher
///
/// Implements the CipherProvider port from saltbox-domain.
#[derive(Clone)]
pub struct AesCipher {
    /// 256-bit key
    key: Zeroizing<Vec<u8>>,
    /// Whether a random IV is generated and carried with each ciphertext
    create_iv: bool,
}

impl AesCipher {
    /// Create a cipher with the provided key and per-message random IVs
    pub fn new(key: Vec<u8>) -> Result<Self> {
        if key.len() != AES_KEY_SIZE {
            return Err(Error::Configuration {
                message: format!(
                    "Invalid AES key size: expected {} bytes, got {}",
                    AES_KEY_SIZE,
                    key.len()
                ),
                source: None,
            });
        }

        Ok(Self {
            key: Zeroizing::new(key),
            create_iv: true,
        })
    }

    /// Create a cipher with a freshly generated key
    pub fn generate() -> Result<Self> {
        Self::new(Self::generate_key()?)
    }

    /// Generate a random 256-bit key
    pub fn generate_key() -> Result<Vec<u8>> {
        RandomGenerator::generate_random(AES_KEY_SIZE)
    }

    /// Enable or disable per-message IVs
    pub fn with_create_iv(mut self, create_iv: bool) -> Self {
        self.create_iv = create_iv;
        self
    }

    /// Whether ciphertexts carry a random IV prefix
    pub fn create_iv(&self) -> bool {
        self.create_iv
    }

    /// Encrypt data; the IV (if enabled) is prepended to the output
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let iv = self.next_iv()?;
        let ciphertext = self.encryptor(&iv)?.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        trace!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "AES-CBC encrypt"
        );

        if !self.create_iv {
            return Ok(ciphertext);
        }
        let mut output = Vec::with_capacity(AES_BLOCK_SIZE + ciphertext.len());
        output.extend_from_slice(&iv);
        output.extend_from_slice(&ciphertext);
        Ok(output)
    }

    /// Decrypt data produced by [`encrypt`](Self::encrypt)
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let (iv, body) = if self.create_iv {
            if data.len() < AES_BLOCK_SIZE {
                return Err(Error::cryptography(
                    "Decryption failed: ciphertext is shorter than the IV",
                ));
            }
            data.split_at(AES_BLOCK_SIZE)
        } else {
            (ZERO_IV.as_slice(), data)
        };

        self.decryptor(iv)?
            .decrypt_padded_vec_mut::<Pkcs7>(body)
            .map_err(|_| Error::cryptography("Decryption failed: invalid padding or length"))
    }

    /// Encrypt text into base64 ciphertext
    pub fn encrypt_string(&self, plaintext: &str) -> Result<String> {
        if plaintext.is_empty() {
            return Err(Error::invalid_argument("Plain text is empty"));
        }
        Ok(STANDARD.encode(self.encrypt(plaintext.as_bytes())?))
    }

    /// Decrypt base64 ciphertext produced by [`encrypt_string`](Self::encrypt_string)
    pub fn decrypt_string(&self, ciphertext: &str) -> Result<String> {
        if ciphertext.trim().is_empty() {
            return Err(Error::invalid_argument("Cipher text is empty"));
        }

        let data = STANDARD.decode(ciphertext)?;
        let plaintext = String::from_utf8(self.decrypt(&data)?)?;
        if plaintext.is_empty() {
            return Err(Error::cryptography("Decryption produced empty plain text"));
        }
        Ok(plaintext)
    }

    /// Encrypt everything read from `input` into `output`
    ///
    /// The IV (if enabled) is written first, followed by the ciphertext.
    pub fn encrypt_stream<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let iv = self.next_iv()?;
        if self.create_iv {
            output
                .write_all(&iv)
                .io_context("Failed to write IV to stream")?;
        }

        let mut encryptor = self.encryptor(&iv)?;
        let mut chunk = Zeroizing::new(vec![0u8; STREAM_CHUNK_SIZE]);
        loop {
            let read = read_full(&mut input, &mut chunk)
                .io_context("Failed to read plain text from stream")?;

            let (len, last) = if read == STREAM_CHUNK_SIZE {
                (read, false)
            } else {
                (pad_final_block(&mut chunk, read), true)
            };

            for block in chunk[..len].chunks_exact_mut(AES_BLOCK_SIZE) {
                encryptor.encrypt_block_mut(GenericArray::from_mut_slice(block));
            }
            output
                .write_all(&chunk[..len])
                .io_context("Failed to write cipher text to stream")?;

            if last {
                break;
            }
        }

        output.flush().io_context("Failed to flush output stream")
    }

    /// Decrypt a stream produced by [`encrypt_stream`](Self::encrypt_stream)
    pub fn decrypt_stream<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut iv = ZERO_IV;
        if self.create_iv {
            input
                .read_exact(&mut iv)
                .io_context("Failed to read IV from stream")?;
        }

        let mut decryptor = self.decryptor(&iv)?;
        let mut chunk = Zeroizing::new(vec![0u8; STREAM_CHUNK_SIZE]);
        // Last decrypted block, held back until we know whether it carries padding
        let mut held = Zeroizing::new(Vec::with_capacity(AES_BLOCK_SIZE));
        loop {
            let read = read_full(&mut input, &mut chunk)
                .io_context("Failed to read cipher text from stream")?;
            if read % AES_BLOCK_SIZE != 0 {
                return Err(Error::cryptography(
                    "Decryption failed: cipher text is not a whole number of blocks",
                ));
            }
            if read == 0 {
                break;
            }

            for block in chunk[..read].chunks_exact_mut(AES_BLOCK_SIZE) {
                decryptor.decrypt_block_mut(GenericArray::from_mut_slice(block));
            }
            output
                .write_all(&held)
                .io_context("Failed to write plain text to stream")?;
            output
                .write_all(&chunk[..read - AES_BLOCK_SIZE])
                .io_context("Failed to write plain text to stream")?;
            held.clear();
            held.extend_from_slice(&chunk[read - AES_BLOCK_SIZE..read]);

            if read < STREAM_CHUNK_SIZE {
                break;
            }
        }

        let unpadded = strip_padding(&held)?;
        output
            .write_all(unpadded)
            .io_context("Failed to write plain text to stream")?;
        output.flush().io_context("Failed to flush output stream")
    }

    fn next_iv(&self) -> Result<[u8; AES_BLOCK_SIZE]> {
        let mut iv = ZERO_IV;
        if self.create_iv {
            iv.copy_from_slice(&RandomGenerator::generate_random(AES_BLOCK_SIZE)?);
        }
        Ok(iv)
    }

    fn encryptor(&self, iv: &[u8]) -> Result<Aes256CbcEnc> {
        Aes256CbcEnc::new_from_slices(&self.key, iv)
            .map_err(|_| Error::cryptography("Encryptor initialization failed"))
    }

    fn decryptor(&self, iv: &[u8]) -> Result<Aes256CbcDec> {
        Aes256CbcDec::new_from_slices(&self.key, iv)
            .map_err(|_| Error::cryptography("Decryptor initialization failed"))
    }
}

// Implement the CipherProvider port from saltbox-domain
impl CipherProvider for AesCipher {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        AesCipher::encrypt(self, plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        AesCipher::decrypt(self, ciphertext)
    }

    fn encrypt_string(&self, plaintext: &str) -> Result<String> {
        AesCipher::encrypt_string(self, plaintext)
    }

    fn decrypt_string(&self, ciphertext: &str) -> Result<String> {
        AesCipher::decrypt_string(self, ciphertext)
    }

    fn provider_name(&self) -> &str {
        "aes-256-cbc"
    }
}

impl std::fmt::Debug for AesCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCipher")
            .field("key", &"[REDACTED]")
            .field("create_iv", &self.create_iv)
            .finish()
    }
}

/// Read until `buf` is full or the reader is exhausted
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Apply PKCS#7 padding after `len` bytes; returns the padded length
#[allow(clippy::cast_possible_truncation)]
fn pad_final_block(buf: &mut [u8], len: usize) -> usize {
    let pad = AES_BLOCK_SIZE - len % AES_BLOCK_SIZE;
    // pad is in 1..=16
    buf[len..len + pad].fill(pad as u8);
    len + pad
}

/// Validate and strip PKCS#7 padding from the final block
fn strip_padding(block: &[u8]) -> Result<&[u8]> {
    let invalid = || Error::cryptography("Decryption failed: invalid padding or length");

    let &pad = block.last().ok_or_else(invalid)?;
    let pad = usize::from(pad);
    if block.len() != AES_BLOCK_SIZE || pad == 0 || pad > AES_BLOCK_SIZE {
        return Err(invalid());
    }
    let (data, padding) = block.split_at(AES_BLOCK_SIZE - pad);
    if padding.iter().any(|&b| usize::from(b) != pad) {
        return Err(invalid());
    }
    Ok(data)
}
