// Copyright (c) 2026 The sipkdf developers
// SPDX-License-Identifier: MIT
// See LICENSE in the repository root for full license text.

// Tags a short message and derives a key from it, hexdumping every buffer.
// Usage: cargo run --example hexdump

use sipkdf::{KdfError, TAG_LEN, TagOrder, kdf, prf, prf_with_order};

fn hexdump(label: &str, bytes: &[u8]) {
    println!("{label}:");
    for (row, chunk) in bytes.chunks(16).enumerate() {
        print!("{:08x} ", row * 16);
        for i in 0..16 {
            if i % 8 == 0 {
                print!(" ");
            }
            match chunk.get(i) {
                Some(byte) => print!("{byte:02x} "),
                None => print!("   "),
            }
        }
        print!(" |");
        for &byte in chunk {
            let shown = if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '.'
            };
            print!("{shown}");
        }
        println!("|");
    }
}

fn main() -> Result<(), KdfError> {
    let key = *b"1234567890123456";
    let message = b"Hello world!";

    let mut tag = [0u8; TAG_LEN];
    prf(&key, message, &mut tag);

    hexdump("Data", message);
    hexdump("Key", &key);
    hexdump("Tag (little-endian)", &tag);

    prf_with_order(&key, message, &mut tag, TagOrder::BigEndian);
    hexdump("Tag (big-endian)", &tag);

    let mut derived = [0u8; 32];
    kdf(&key, b"hexdump example", &mut derived)?;
    hexdump("Derived key", &derived);

    Ok(())
}
