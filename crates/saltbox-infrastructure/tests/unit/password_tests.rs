//! Password Service Tests
//!
//! Known-answer records were computed independently with salt bytes
//! `00 01 .. 0f` and the password `start`.

use std::sync::Arc;
use std::thread;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use saltbox_domain::error::{Error, Result};
use saltbox_domain::ports::providers::{PasswordHasher, RandomSource};
use saltbox_domain::value_objects::{HashScheme, HasherConfig, TextEncoding};
use saltbox_infrastructure::crypto::PasswordService;

const SHA512_SALTED_START: &str = "AAECAwQFBgcICQoLDA0OD8Qa26hJhBZPBfQ7h9ejx8cPC40TCIs/rroKUyh1ktysa8IlrZd5qyyKDhZEwRot1tjtiL9xTgxNbPEeYoGDVus=";
const SHA512_UNSALTED_START: &str = "zTylMMruGqusDrvS6kXFaL3RRC2lck0irVxRRh/Ms/MEgGZYSGwHkAU2g8+HWl67YlFEBACK7MzpvMP3v1re6A==";
const SHA512_SALTED_UTF16_START: &str = "AAECAwQFBgcICQoLDA0OD34j1wF/7pqh2dKNPusjwCMbHHP7SaFBQr6ngSy/On2BBsyUEfoWxddwiuosWsSrLDNCmv0NOlE+d3alo/KhSnY=";
const PBKDF2_START: &str = "AAABAgMEBQYHCAkKCwwNDg9tJ4SBcSgNbdCvd+dvNM20Mhy5VDSHVPtXcvTiFQYAXA==";

/// Random source that yields 0, 1, 2, ... for every request
struct SequentialSource;

impl RandomSource for SequentialSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        for (byte, value) in dest.iter_mut().zip(0u8..) {
            *byte = value;
        }
        Ok(())
    }
}

/// Random source that always fails
struct BrokenSource;

impl RandomSource for BrokenSource {
    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
        Err(Error::cryptography("entropy unavailable"))
    }
}

fn fixed(config: HasherConfig) -> PasswordService {
    PasswordService::new(config, Arc::new(SequentialSource)).unwrap()
}

fn os(config: HasherConfig) -> PasswordService {
    PasswordService::with_os_random(config).unwrap()
}

fn all_configs() -> Vec<HasherConfig> {
    vec![
        HasherConfig::sha512_salted(16),
        HasherConfig::sha512_salted(32),
        HasherConfig::sha512_unsalted(),
        HasherConfig::pbkdf2(),
        HasherConfig::sha512_salted(16).with_text_encoding(TextEncoding::Utf16Le),
    ]
}

/// Flip one bit of the decoded record at `index` and re-encode
fn flip_bit(hashed: &str, index: usize) -> String {
    let mut record = STANDARD.decode(hashed).unwrap();
    record[index] ^= 0x01;
    STANDARD.encode(record)
}

#[test]
fn test_known_answer_sha512_salted() {
    let hasher = fixed(HasherConfig::sha512_salted(16));
    assert_eq!(hasher.hash_password("start").unwrap(), SHA512_SALTED_START);
}

#[test]
fn test_known_answer_sha512_unsalted() {
    let hasher = fixed(HasherConfig::sha512_unsalted());
    assert_eq!(hasher.hash_password("start").unwrap(), SHA512_UNSALTED_START);
}

#[test]
fn test_known_answer_sha512_utf16() {
    let config = HasherConfig::sha512_salted(16).with_text_encoding(TextEncoding::Utf16Le);
    let hasher = fixed(config);
    assert_eq!(
        hasher.hash_password("start").unwrap(),
        SHA512_SALTED_UTF16_START
    );
}

#[test]
fn test_known_answer_pbkdf2() {
    let hasher = fixed(HasherConfig::pbkdf2());
    assert_eq!(hasher.hash_password("start").unwrap(), PBKDF2_START);
}

#[test]
fn test_known_answers_verify_with_os_random() {
    assert!(
        os(HasherConfig::sha512_salted(16))
            .verify_hashed_password(SHA512_SALTED_START, "start")
            .unwrap()
    );
    assert!(
        os(HasherConfig::sha512_unsalted())
            .verify_hashed_password(SHA512_UNSALTED_START, "start")
            .unwrap()
    );
    assert!(
        os(HasherConfig::pbkdf2())
            .verify_hashed_password(PBKDF2_START, "start")
            .unwrap()
    );
}

#[test]
fn test_round_trip_every_config() {
    for config in all_configs() {
        let hasher = os(config);
        let hashed = hasher.hash_password("correct horse").unwrap();
        assert!(
            hasher.verify_hashed_password(&hashed, "correct horse").unwrap(),
            "{config} should verify its own hash"
        );
        assert!(
            !hasher.verify_hashed_password(&hashed, "correct horsE").unwrap(),
            "{config} should reject a different password"
        );
    }
}

#[test]
fn test_record_lengths() {
    let cases = [
        (HasherConfig::sha512_salted(16), 80, 108),
        (HasherConfig::sha512_salted(32), 96, 128),
        (HasherConfig::sha512_unsalted(), 64, 88),
        (HasherConfig::pbkdf2(), 49, 68),
    ];
    for (config, bytes, chars) in cases {
        let hashed = os(config).hash_password("start").unwrap();
        assert_eq!(hashed.len(), chars, "{config}");
        assert_eq!(STANDARD.decode(&hashed).unwrap().len(), bytes, "{config}");
    }
}

#[test]
fn test_salted_hashes_differ() {
    for config in [HasherConfig::sha512_salted(16), HasherConfig::pbkdf2()] {
        let hasher = os(config);
        let first = hasher.hash_password("start").unwrap();
        let second = hasher.hash_password("start").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify_hashed_password(&first, "start").unwrap());
        assert!(hasher.verify_hashed_password(&second, "start").unwrap());
    }
}

#[test]
fn test_unsalted_hashes_are_deterministic() {
    let hasher = os(HasherConfig::sha512_unsalted());
    assert_eq!(
        hasher.hash_password("start").unwrap(),
        hasher.hash_password("start").unwrap()
    );
}

#[test]
fn test_any_bit_flip_fails_verification() {
    for config in all_configs() {
        let hasher = os(config);
        let hashed = hasher.hash_password("start").unwrap();
        let len = STANDARD.decode(&hashed).unwrap().len();
        for index in 0..len {
            let tampered = flip_bit(&hashed, index);
            assert!(
                !hasher.verify_hashed_password(&tampered, "start").unwrap(),
                "{config}: flipping byte {index} should not verify"
            );
        }
    }
}

#[test]
fn test_wrong_length_is_a_mismatch() {
    let hasher = os(HasherConfig::sha512_salted(16));
    let short = STANDARD.encode([0u8; 79]);
    let long = STANDARD.encode([0u8; 81]);
    assert!(!hasher.verify_hashed_password(&short, "start").unwrap());
    assert!(!hasher.verify_hashed_password(&long, "start").unwrap());

    // A record from another configuration does not fit
    let unsalted = os(HasherConfig::sha512_unsalted());
    assert!(
        !unsalted
            .verify_hashed_password(SHA512_SALTED_START, "start")
            .unwrap()
    );
    assert!(!hasher.verify_hashed_password(PBKDF2_START, "start").unwrap());
}

#[test]
fn test_unknown_pbkdf2_version_is_a_mismatch() {
    let hasher = os(HasherConfig::pbkdf2());
    let mut record = STANDARD.decode(PBKDF2_START).unwrap();
    record[0] = 0x01;
    let tampered = STANDARD.encode(record);
    assert!(!hasher.verify_hashed_password(&tampered, "start").unwrap());
}

#[test]
fn test_invalid_base64_is_a_decode_error() {
    let hasher = os(HasherConfig::sha512_salted(16));
    let result = hasher.verify_hashed_password("not*base64!", "start");
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[test]
fn test_empty_inputs_rejected() {
    let hasher = os(HasherConfig::sha512_salted(16));
    for blank in ["", "   ", "\t\n"] {
        assert!(matches!(
            hasher.hash_password(blank),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            hasher.verify_hashed_password(blank, "start"),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            hasher.verify_hashed_password(SHA512_SALTED_START, blank),
            Err(Error::InvalidArgument { .. })
        ));
    }
}

#[test]
fn test_password_with_surrounding_whitespace_is_hashed_verbatim() {
    let hasher = os(HasherConfig::sha512_salted(16));
    let hashed = hasher.hash_password(" start ").unwrap();
    assert!(hasher.verify_hashed_password(&hashed, " start ").unwrap());
    assert!(!hasher.verify_hashed_password(&hashed, "start").unwrap());
}

#[test]
fn test_hash_with_explicit_salt() {
    let salt = STANDARD.encode((0u8..16).collect::<Vec<_>>());

    let sha = os(HasherConfig::sha512_salted(16));
    assert_eq!(
        sha.hash_password_with_salt("start", &salt).unwrap(),
        SHA512_SALTED_START
    );

    let pbkdf2 = os(HasherConfig::pbkdf2());
    let hashed = pbkdf2.hash_password_with_salt("start", &salt).unwrap();
    assert_eq!(hashed, PBKDF2_START);
    assert!(pbkdf2.verify_hashed_password(&hashed, "start").unwrap());
}

#[test]
fn test_hash_with_explicit_salt_rejections() {
    let hasher = os(HasherConfig::sha512_salted(16));
    let short_salt = STANDARD.encode([1u8; 8]);
    assert!(matches!(
        hasher.hash_password_with_salt("start", &short_salt),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        hasher.hash_password_with_salt("start", "***"),
        Err(Error::Decode(_))
    ));
    assert!(matches!(
        hasher.hash_password_with_salt("start", ""),
        Err(Error::InvalidArgument { .. })
    ));

    let unsalted = os(HasherConfig::sha512_unsalted());
    let salt = STANDARD.encode([1u8; 16]);
    assert!(matches!(
        unsalted.hash_password_with_salt("start", &salt),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_random_failure_propagates() {
    let hasher = PasswordService::new(HasherConfig::pbkdf2(), Arc::new(BrokenSource)).unwrap();
    assert!(matches!(
        hasher.hash_password("start"),
        Err(Error::Cryptography { .. })
    ));
}

#[test]
fn test_invalid_configs_rejected() {
    for config in [
        HasherConfig::sha512_salted(0),
        HasherConfig::sha512_salted(usize::MAX - 8),
        HasherConfig {
            scheme: HashScheme::Pbkdf2,
            salt_size: Some(8),
            text_encoding: TextEncoding::Utf8,
        },
    ] {
        assert!(matches!(
            PasswordService::with_os_random(config),
            Err(Error::InvalidArgument { .. })
        ));
    }
}

#[test]
fn test_concurrent_use_through_port() {
    let hasher: Arc<dyn PasswordHasher> = Arc::new(os(HasherConfig::pbkdf2()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let hasher = Arc::clone(&hasher);
            thread::spawn(move || {
                let password = format!("password-{i}");
                let hashed = hasher.hash_password(&password).unwrap();
                assert!(hasher.verify_hashed_password(&hashed, &password).unwrap());
                assert!(!hasher.verify_hashed_password(&hashed, "other").unwrap());
                hashed
            })
        })
        .collect();

    let hashes: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(hasher.config().scheme, HashScheme::Pbkdf2);
    assert_eq!(hashes.len(), 8);
}
