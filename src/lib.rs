/*
    Library to derive Bitcoin keys and addresses from a private scalar.

    private key --(secp256k1 scalar multiplication)--> public key
    public key  --(sha256 then ripemd160)------------> address hash
    and Base58Check for every textual form (WIF, addresses).

    The curve arithmetic and RIPEMD-160 are implemented here on top of
    arbitrary precision integers. Nothing is constant time, so this is
    not for use with keys that hold real funds.

    References:
        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
            most of the general concepts come from here

        - Bitcoin wiki, Technical background of version 1 Bitcoin addresses
            (https://en.bitcoin.it/wiki/Technical_background_of_version_1_Bitcoin_addresses)
            for the worked derivation used in the tests
*/

//Outward facing modules
pub mod key;
pub mod address;
pub mod curve;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod util;

//Modules for internal use
mod impls;

//Dependencies
use num_bigint::{BigUint, RandBigInt};
use num_traits::{Num, Zero};
use rand::rngs::OsRng;
use sha2::{Sha256, Digest};
