/*
    Streaming RIPEMD-160 message digest.

    Input is consumed a byte at a time into a 4 byte carry buffer. Every
    complete word is decoded little-endian into the 16 word message block,
    and every complete block is compressed into the five chaining values.
    Finalizing pads the message, compresses the last block and resets the
    engine so the same instance can hash another message.

    Reference:
        https://homes.esat.kuleuven.be/~bosselae/ripemd160.html
*/

use log::trace;

pub const DIGEST_LEN: usize = 20;

const IV: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

//Message word selection, left line
const R_LEFT: [usize; 80] = [
     0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15,
     7,  4, 13,  1, 10,  6, 15,  3, 12,  0,  9,  5,  2, 14, 11,  8,
     3, 10, 14,  4,  9, 15,  8,  1,  2,  7,  0,  6, 13, 11,  5, 12,
     1,  9, 11, 10,  0,  8, 12,  4, 13,  3,  7, 15, 14,  5,  6,  2,
     4,  0,  5,  9,  7, 12,  2, 10, 14,  1,  3,  8, 11,  6, 15, 13
];

//Message word selection, right line
const R_RIGHT: [usize; 80] = [
     5, 14,  7,  0,  9,  2, 11,  4, 13,  6, 15,  8,  1, 10,  3, 12,
     6, 11,  3,  7,  0, 13,  5, 10, 14, 15,  8, 12,  4,  9,  1,  2,
    15,  5,  1,  3,  7, 14,  6,  9, 11,  8, 12,  2, 10,  0,  4, 13,
     8,  6,  4,  1,  3, 11, 15,  0,  5, 12,  2, 13,  9,  7, 10, 14,
    12, 15, 10,  4,  1,  5,  8,  7,  6,  2, 13, 14,  0,  3,  9, 11
];

//Rotation amounts, left line
const S_LEFT: [u32; 80] = [
    11, 14, 15, 12,  5,  8,  7,  9, 11, 13, 14, 15,  6,  7,  9,  8,
     7,  6,  8, 13, 11,  9,  7, 15,  7, 12, 15,  9, 11,  7, 13, 12,
    11, 13,  6,  7, 14,  9, 13, 15, 14,  8, 13,  6,  5, 12,  7,  5,
    11, 12, 14, 15, 14, 15,  9,  8,  9, 14,  5,  6,  8,  6,  5, 12,
     9, 15,  5, 11,  6,  8, 13, 12,  5, 12, 13, 14, 11,  8,  5,  6
];

//Rotation amounts, right line
const S_RIGHT: [u32; 80] = [
     8,  9,  9, 11, 13, 15, 15,  5,  7,  7,  8, 11, 14, 14, 12,  6,
     9, 13, 15,  7, 12,  8,  9, 11,  7,  7, 12,  7,  6, 15, 13, 11,
     9,  7, 15, 11,  8,  6,  6, 14, 12, 13,  5, 14, 13, 13,  7,  5,
    15,  5,  8, 11, 14, 14,  6, 14,  6,  9, 12,  9, 12,  5, 15,  8,
     8,  5, 12,  9, 12,  5, 14,  6,  8, 13,  6,  5, 15, 13, 11, 11
];

const K_LEFT: [u32; 5] = [0x00000000, 0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xA953FD4E];
const K_RIGHT: [u32; 5] = [0x50A28BE6, 0x5C4DD124, 0x6D703EF3, 0x7A6D76E9, 0x00000000];

#[inline]
fn f1(x: u32, y: u32, z: u32) -> u32 { x ^ y ^ z }

#[inline]
fn f2(x: u32, y: u32, z: u32) -> u32 { (x & y) | (!x & z) }

#[inline]
fn f3(x: u32, y: u32, z: u32) -> u32 { (x | !y) ^ z }

#[inline]
fn f4(x: u32, y: u32, z: u32) -> u32 { (x & z) | (y & !z) }

#[inline]
fn f5(x: u32, y: u32, z: u32) -> u32 { x ^ (y | !z) }

/**
    Non-linear function for a given round (0..5).
    The right line runs the same functions in reverse order.
*/
#[inline]
fn f(round: usize, x: u32, y: u32, z: u32) -> u32 {
    match round {
        0 => f1(x, y, z),
        1 => f2(x, y, z),
        2 => f3(x, y, z),
        3 => f4(x, y, z),
        _ => f5(x, y, z)
    }
}

/**
    Observable position of the engine in its lifecycle.
    Finalizing returns the engine to Empty.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Empty,
    Accumulating
}

#[derive(Debug, Clone)]
pub struct Ripemd160 {
    h: [u32; 5],
    x: [u32; 16],
    x_off: usize,
    x_buf: [u8; 4],
    x_buf_off: usize,
    byte_count: u64
}

impl Ripemd160 {
    pub fn new() -> Self {
        Self {
            h: IV,
            x: [0; 16],
            x_off: 0,
            x_buf: [0; 4],
            x_buf_off: 0,
            byte_count: 0
        }
    }

    /**
        Hashes a complete message in one call.
    */
    pub fn digest<T>(input: T) -> [u8; DIGEST_LEN]
    where T: AsRef<[u8]>
    {
        let mut r = Self::new();
        r.update(input);
        r.finalize()
    }

    pub fn state(&self) -> State {
        if self.byte_count == 0 { State::Empty } else { State::Accumulating }
    }

    /**
        Feeds more message bytes into the engine.
        The digest depends only on the concatenated byte sequence, not on how it was split.
    */
    pub fn update<T>(&mut self, input: T)
    where T: AsRef<[u8]>
    {
        let input = input.as_ref();
        for byte in input {
            self.push_byte(*byte);
        }
        self.byte_count = self.byte_count.wrapping_add(input.len() as u64);
    }

    /**
        Pads the message, compresses the final block and returns the digest.
        The engine is reset to its initial state afterwards.
    */
    pub fn finalize(&mut self) -> [u8; DIGEST_LEN] {
        let bit_length = self.byte_count.wrapping_mul(8);

        //Padding: a single 1 bit, then zeros up to a word boundary
        self.push_byte(0x80);
        while self.x_buf_off != 0 {
            self.push_byte(0x00);
        }

        //No room left for the length words, so pad out this block first
        if self.x_off > 14 {
            self.process_block();
        }
        for word in self.x[self.x_off..14].iter_mut() {
            *word = 0;
        }

        //Length in bits, low word first
        self.x[14] = bit_length as u32;
        self.x[15] = (bit_length >> 32) as u32;
        self.process_block();

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, h) in out.chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&h.to_le_bytes());
        }
        trace!("ripemd160 finalized {} bytes", bit_length / 8);

        self.reset();
        out
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn push_byte(&mut self, byte: u8) {
        self.x_buf[self.x_buf_off] = byte;
        self.x_buf_off += 1;

        if self.x_buf_off == self.x_buf.len() {
            self.process_word();
            self.x_buf_off = 0;
        }
    }

    fn process_word(&mut self) {
        self.x[self.x_off] = u32::from_le_bytes(self.x_buf);
        self.x_off += 1;

        if self.x_off == self.x.len() {
            self.process_block();
        }
    }

    /**
        Runs the compression function over the 16 buffered words.
    */
    fn process_block(&mut self) {
        let [h0, h1, h2, h3, h4] = self.h;

        let (mut al, mut bl, mut cl, mut dl, mut el) = (h0, h1, h2, h3, h4);
        let (mut ar, mut br, mut cr, mut dr, mut er) = (h0, h1, h2, h3, h4);

        for j in 0..80 {
            let round = j / 16;

            let t = al
                .wrapping_add(f(round, bl, cl, dl))
                .wrapping_add(self.x[R_LEFT[j]])
                .wrapping_add(K_LEFT[round])
                .rotate_left(S_LEFT[j])
                .wrapping_add(el);
            al = el;
            el = dl;
            dl = cl.rotate_left(10);
            cl = bl;
            bl = t;

            let t = ar
                .wrapping_add(f(4 - round, br, cr, dr))
                .wrapping_add(self.x[R_RIGHT[j]])
                .wrapping_add(K_RIGHT[round])
                .rotate_left(S_RIGHT[j])
                .wrapping_add(er);
            ar = er;
            er = dr;
            dr = cr.rotate_left(10);
            cr = br;
            br = t;
        }

        let t = h1.wrapping_add(cl).wrapping_add(dr);
        self.h[1] = h2.wrapping_add(dl).wrapping_add(er);
        self.h[2] = h3.wrapping_add(el).wrapping_add(ar);
        self.h[3] = h4.wrapping_add(al).wrapping_add(br);
        self.h[4] = h0.wrapping_add(bl).wrapping_add(cr);
        self.h[0] = t;

        self.x_off = 0;
        self.x = [0; 16];
    }
}

impl Default for Ripemd160 {
    fn default() -> Self {
        Self::new()
    }
}
