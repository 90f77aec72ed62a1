/*
    Hash module include hash functions necessary to hash
    a public key into an address and to checksum Base58 payloads.

    SHA-256 comes from the sha2 crate. RIPEMD-160 is implemented
    in this crate (see ripemd160.rs).
*/

pub mod ripemd160;

pub use self::ripemd160::Ripemd160;

use crate::{
    Sha256, Digest
};

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    r.finalize().into()
}

/*
    Double sha256, used for Base58Check checksums
*/
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/*
    Takes in a byte array and returns the ripemd160 hash of it
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    Ripemd160::digest(input)
}

/*
    Ripemd160( Sha256( input ) )
*/
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vectors() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256d_is_two_rounds() {
        let data = b"hello";
        assert_eq!(sha256d(data), sha256(sha256(data)));
        assert_eq!(
            hex::encode(sha256d(data)),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn hash160_of_conformance_public_key() {
        //Uncompressed public key of private key 18E14A7B...
        let pubkey = hex::decode(
            "0450863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352\
             2cd470243453a299fa9e77237716103abc11a1df38855ed6f2ee187e9c582ba6"
        ).unwrap();
        assert_eq!(hex::encode(hash160(&pubkey)), "010966776006953d5567439e5e39f86a0d273bee");
    }
}
