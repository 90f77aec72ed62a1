//! End to end derivation of the worked example from the Bitcoin wiki:
//! private key -> public key -> hash160 -> Base58Check address, and WIF text both ways.

use btc_keyderive::prelude::*;
use btc_keyderive::hash;

const PRIVATE_KEY_HEX: &str = "18E14A7B6A307F426A94F8114701E7C8E774E7F9A47E2C2035DB29A206321725";

#[test]
fn private_key_to_addresses() {
    let private_key = PrivKey::from_hex_str(PRIVATE_KEY_HEX).unwrap();
    let public_key = private_key.pub_key().unwrap();

    assert_eq!(
        public_key.to_hex_string(),
        "(50863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352,\
         2cd470243453a299fa9e77237716103abc11a1df38855ed6f2ee187e9c582ba6)"
    );

    let sec = public_key.to_bytes(false);
    assert_eq!(
        hex::encode(hash::sha256(&sec)),
        "0b7c28c9b7290c98d7438e70b3d3f7c848fbd7d1dc194ff83f4f7cc9b1378e98"
    );
    assert_eq!(
        hex::encode(Ripemd160::digest(hash::sha256(&sec))),
        "f54a5851e9372b87810a8e60cdd2e7cfd80b6e31"
    );

    assert_eq!(public_key.to_address(false).to_string(), "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs");
    assert_eq!(public_key.to_address(true).to_string(), "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
}

#[test]
fn explicit_curve_parameters_match_the_global() {
    let params = CurveParams::secp256k1();
    let private_key = PrivKey::from_hex_str(PRIVATE_KEY_HEX).unwrap();

    assert_eq!(private_key.pub_key_with(&params).unwrap(), private_key.pub_key().unwrap());
    assert_eq!(&params, &*SECP256K1);
}

#[test]
fn wif_variants_recover_the_key() {
    let private_key = PrivKey::from_hex_str(PRIVATE_KEY_HEX).unwrap();

    for network in [Network::Bitcoin, Network::Testnet] {
        for compressed in [true, false] {
            let wif = private_key.to_wif(compressed, network);
            let imported = PrivKey::from_wif(&wif).unwrap();
            assert_eq!(imported, private_key);
            assert_eq!(imported.pub_key().unwrap().to_address(false), private_key.pub_key().unwrap().to_address(false));
        }
    }

    let from_wif = PrivKey::from_wif("5J1F7GHadZG3sCCKHCwg8Jvys9xUbFsjLnGec4H125Ny1V9nR6V").unwrap();
    assert_eq!(from_wif.to_hex_string(), PRIVATE_KEY_HEX.to_lowercase());
}

#[test]
fn errors_surface_as_typed_values() {
    assert!(matches!(PrivKey::from_hex_str("not hex"), Err(Error::MalformedNumber(_))));
    assert!(matches!(PrivKey::from_wif("xprv9s21ZrQH143K"), Err(Error::InvalidWifFormat(_))));
    assert_eq!(PrivKey::from_wif("5J1F7GHadZG3sCCKHCwg8Jvys9xUbFsjLnGec4H125Ny1V9nR60"), Err(Error::InvalidBase58Character('0')));
    assert_eq!(Address::from_base58("1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAt"), Err(Error::ChecksumMismatch));
}

#[test]
fn digest_engines_are_independent() {
    let handles: Vec<_> = (0..4u8)
        .map(|i| std::thread::spawn(move || {
            let mut r = Ripemd160::new();
            r.update(vec![i; 1000]);
            r.finalize()
        }))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ripemd160::digest(vec![i as u8; 1000]));
    }
}
