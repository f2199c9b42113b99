#![allow(missing_docs)]
use cipher_core::{Cipher, CipherError, Ciphertext, Direction, Input, Method};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(1234)
}

#[test]
fn test_method_names_round_trip() {
    for method in Method::ALL {
        assert_eq!(method.name().parse::<Method>().unwrap(), method);
        assert_eq!(method.to_string(), method.name());
    }
}

#[test]
fn test_unknown_method() {
    assert_eq!(
        "enigma".parse::<Method>(),
        Err(CipherError::UnsupportedMethod {
            name: "enigma".to_string(),
        })
    );
    assert!(matches!(
        Cipher::parse("Caesar", "B"),
        Err(CipherError::UnsupportedMethod { .. })
    ));
}

#[test]
fn test_method_serializes_by_name() {
    let json = serde_json::to_string(&Method::RailFence).unwrap();
    assert_eq!(json, "\"railfence\"");
    let method: Method = serde_json::from_str("\"columnar\"").unwrap();
    assert_eq!(method, Method::Columnar);
}

#[test]
fn test_key_parsing() {
    assert_eq!(Cipher::parse("caesar", "B\n").unwrap(), Cipher::Caesar(b'B'));
    assert_eq!(
        Cipher::parse("vigenere", "LEMON").unwrap(),
        Cipher::Vigenere(b"LEMON".to_vec())
    );
    assert_eq!(Cipher::parse("railfence", "3").unwrap(), Cipher::RailFence(3));
    assert_eq!(Cipher::parse("scytale", "9 ").unwrap(), Cipher::Scytale(9));
    assert_eq!(
        Cipher::parse("columnar", "ZEBRAS").unwrap(),
        Cipher::Columnar(b"ZEBRAS".to_vec())
    );
}

#[test]
fn test_key_trailing_whitespace_is_ignored() {
    for (method, key) in [
        ("caesar", "B"),
        ("vigenere", "LEMON"),
        ("railfence", "3"),
        ("scytale", "5"),
        ("columnar", "ZEBRAS"),
    ] {
        assert_eq!(
            Cipher::parse(method, &format!("{key} \t\r\n")).unwrap(),
            Cipher::parse(method, key).unwrap(),
            "{method}"
        );
    }
    assert!(Cipher::parse("caesar", " B").is_err());
}

#[test]
fn test_invalid_keys() {
    for (method, key) in [
        (Method::Caesar, "BC"),
        (Method::Caesar, ""),
        (Method::Vigenere, ""),
        (Method::RailFence, "0"),
        (Method::RailFence, "10"),
        (Method::RailFence, "x"),
        (Method::Scytale, "0"),
        (Method::Scytale, ""),
        (Method::Columnar, "  "),
    ] {
        assert!(
            matches!(Cipher::from_key(method, key), Err(CipherError::InvalidKey { .. })),
            "{method} key {key:?} should be rejected"
        );
    }
    assert_eq!(
        Cipher::from_key(Method::Vigenere, "LEM0N"),
        Err(CipherError::NonAlphaCharacter {
            input: Input::Key,
            byte: b'0',
        })
    );
    assert_eq!(
        Cipher::from_key(Method::Caesar, "b"),
        Err(CipherError::NonAlphaCharacter {
            input: Input::Key,
            byte: b'b',
        })
    );
}

#[test]
fn test_round_trip_every_method() {
    let plaintext = b"WEAREDISCOVEREDFLEEATONCE";
    for (method, key) in [
        (Method::Caesar, "K"),
        (Method::Vigenere, "LEMON"),
        (Method::RailFence, "4"),
        (Method::Scytale, "6"),
        (Method::Columnar, "ZEBRAS"),
    ] {
        let cipher = Cipher::from_key(method, key).unwrap();
        assert_eq!(cipher.method(), method);

        let ciphertext = cipher.encrypt(plaintext, &mut rng()).unwrap();
        let decrypted = cipher
            .decrypt_unpadded(&ciphertext.text, ciphertext.padding)
            .unwrap();
        assert_eq!(decrypted, plaintext, "{method}");
    }
}

#[test]
fn test_only_columnar_pads() {
    let plaintext = b"HELLO";
    for (method, key) in [
        (Method::Caesar, "K"),
        (Method::Vigenere, "LEMON"),
        (Method::RailFence, "2"),
        (Method::Scytale, "2"),
    ] {
        let ciphertext = Cipher::from_key(method, key)
            .unwrap()
            .encrypt(plaintext, &mut rng())
            .unwrap();
        assert_eq!(ciphertext.padding, 0);
        assert_eq!(ciphertext.text.len(), plaintext.len());
    }

    let ciphertext = Cipher::Columnar(b"KEY".to_vec())
        .encrypt(plaintext, &mut rng())
        .unwrap();
    assert_eq!(ciphertext.padding, 1);
    assert_eq!(ciphertext.text.len(), 6);
}

#[test]
fn test_errors_carry_context() {
    let err = Cipher::Vigenere(b"KEY".to_vec())
        .encrypt(b"HELLO WORLD", &mut rng())
        .unwrap_err();
    assert_eq!(
        err,
        CipherError::Operation {
            method: Method::Vigenere,
            direction: Direction::Encrypt,
            source: Box::new(CipherError::NonAlphaCharacter {
                input: Input::Plaintext,
                byte: b' ',
            }),
        }
    );
    assert_eq!(
        err.to_string(),
        "encryption with vigenere failed: non alphabet character 0x20 found in plaintext"
    );

    let err = Cipher::RailFence(3).decrypt(b"abc").unwrap_err();
    assert!(matches!(
        err.root(),
        CipherError::NonAlphaCharacter {
            input: Input::Ciphertext,
            ..
        }
    ));
}

#[test]
fn test_strip_padding() {
    assert_eq!(Ciphertext::strip_padding(b"HELLOXY".to_vec(), 2).unwrap(), b"HELLO");
    assert_eq!(
        Ciphertext::strip_padding(b"HI".to_vec(), 3),
        Err(CipherError::InvalidPadding {
            padding: 3,
            length: 2,
        })
    );
    assert!(matches!(
        Cipher::Scytale(2).decrypt_unpadded(b"HI", 3),
        Err(CipherError::Operation { .. })
    ));
}
