//! AES-256-CBC Cipher Tests

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use saltbox_domain::error::Error;
use saltbox_domain::ports::providers::CipherProvider;
use saltbox_infrastructure::crypto::AesCipher;

fn cipher() -> AesCipher {
    AesCipher::new(vec![7u8; 32]).unwrap()
}

fn encrypt_stream(cipher: &AesCipher, plaintext: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    cipher
        .encrypt_stream(Cursor::new(plaintext), &mut output)
        .unwrap();
    output
}

fn decrypt_stream(cipher: &AesCipher, ciphertext: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    cipher
        .decrypt_stream(Cursor::new(ciphertext), &mut output)
        .unwrap();
    output
}

#[test]
fn test_key_size_validation() {
    assert!(AesCipher::new(vec![0u8; 32]).is_ok());
    for size in [0, 16, 24, 31, 33] {
        assert!(matches!(
            AesCipher::new(vec![0u8; size]),
            Err(Error::Configuration { .. })
        ));
    }
    assert_eq!(AesCipher::generate_key().unwrap().len(), 32);
}

#[test]
fn test_bytes_round_trip_with_iv() {
    let cipher = cipher();
    let plaintext = b"attack at dawn";
    let ciphertext = cipher.encrypt(plaintext).unwrap();

    // 16-byte IV plus one padded block
    assert_eq!(ciphertext.len(), 32);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_random_iv_changes_ciphertext() {
    let cipher = cipher();
    let first = cipher.encrypt(b"same input").unwrap();
    let second = cipher.encrypt(b"same input").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_zero_iv_is_deterministic() {
    let cipher = cipher().with_create_iv(false);
    assert!(!cipher.create_iv());

    let first = cipher.encrypt(b"same input").unwrap();
    let second = cipher.encrypt(b"same input").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 16);
    assert_eq!(cipher.decrypt(&first).unwrap(), b"same input");
}

#[test]
fn test_full_block_gets_extra_padding_block() {
    let cipher = cipher().with_create_iv(false);
    assert_eq!(cipher.encrypt(&[1u8; 16]).unwrap().len(), 32);
    assert_eq!(cipher.encrypt(&[]).unwrap().len(), 16);
}

#[test]
fn test_wrong_key_fails_or_differs() {
    let ciphertext = cipher().encrypt(b"secret message").unwrap();
    let other = AesCipher::new(vec![8u8; 32]).unwrap();
    match other.decrypt(&ciphertext) {
        Ok(plaintext) => assert_ne!(plaintext, b"secret message"),
        Err(e) => assert!(matches!(e, Error::Cryptography { .. })),
    }
}

#[test]
fn test_truncated_ciphertext_rejected() {
    let cipher = cipher();
    assert!(matches!(
        cipher.decrypt(&[0u8; 8]),
        Err(Error::Cryptography { .. })
    ));

    let ciphertext = cipher.encrypt(b"attack at dawn").unwrap();
    assert!(cipher.decrypt(&ciphertext[..ciphertext.len() - 1]).is_err());
}

#[test]
fn test_string_round_trip() {
    let cipher = cipher();
    let encrypted = cipher.encrypt_string("héllo wörld").unwrap();
    assert!(STANDARD.decode(&encrypted).is_ok());
    assert_eq!(cipher.decrypt_string(&encrypted).unwrap(), "héllo wörld");
}

#[test]
fn test_string_empty_inputs_rejected() {
    let cipher = cipher();
    assert!(matches!(
        cipher.encrypt_string(""),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        cipher.decrypt_string("  "),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        cipher.decrypt_string("%%%"),
        Err(Error::Decode(_))
    ));
}

#[test]
fn test_decrypt_string_of_empty_plaintext_is_an_error() {
    let cipher = cipher();
    let encrypted = STANDARD.encode(cipher.encrypt(&[]).unwrap());
    assert!(matches!(
        cipher.decrypt_string(&encrypted),
        Err(Error::Cryptography { .. })
    ));
}

#[test]
fn test_stream_matches_buffer_format() {
    let cipher = cipher().with_create_iv(false);
    let plaintext = b"stream and buffer agree".repeat(10);
    assert_eq!(
        encrypt_stream(&cipher, &plaintext),
        cipher.encrypt(&plaintext).unwrap()
    );
}

#[test]
fn test_stream_round_trip_sizes() {
    let cipher = cipher();
    // Around block and chunk boundaries
    for size in [0, 1, 15, 16, 17, 8 * 1024 - 1, 8 * 1024, 8 * 1024 + 1, 20_000] {
        let plaintext: Vec<u8> = (0..size)
            .map(|i| u8::try_from(i % 251).unwrap())
            .collect();
        let ciphertext = encrypt_stream(&cipher, &plaintext);
        assert_eq!(ciphertext.len(), 16 + (size / 16 + 1) * 16, "size {size}");
        assert_eq!(decrypt_stream(&cipher, &ciphertext), plaintext, "size {size}");
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext, "size {size}");
    }
}

#[test]
fn test_stream_short_iv_is_io_error() {
    let cipher = cipher();
    let mut output = Vec::new();
    let result = cipher.decrypt_stream(Cursor::new(vec![0u8; 10]), &mut output);
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_stream_partial_block_rejected() {
    let cipher = cipher();
    let mut ciphertext = encrypt_stream(&cipher, b"some plain text");
    ciphertext.pop();
    let mut output = Vec::new();
    assert!(matches!(
        cipher.decrypt_stream(Cursor::new(ciphertext), &mut output),
        Err(Error::Cryptography { .. })
    ));
}

#[test]
fn test_through_cipher_port() {
    let provider: Box<dyn CipherProvider> = Box::new(cipher());
    assert_eq!(provider.provider_name(), "aes-256-cbc");
    let encrypted = provider.encrypt_string("via port").unwrap();
    assert_eq!(provider.decrypt_string(&encrypted).unwrap(), "via port");
}

#[test]
fn test_debug_hides_key() {
    let debug = format!("{:?}", cipher());
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("[7, 7"));
}
