/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_keyderive::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::{
        PubKey,
        PrivKey
    },

    address::Address,

    curve::{
        Curve,
        CurveParams,
        Point,
        SECP256K1
    },

    hash::Ripemd160,

    encoding::{
        Base58,
        VersionPrefix
    },

    error::{
        Error,
        Result
    },

    util::Network

};
