#![no_main]

use beta_protocol::{Direction, Packet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic; anything that decodes must re-encode and
    // decode to the same value.
    for direction in [Direction::Clientbound, Direction::Serverbound] {
        if let Ok(packet) = Packet::from_bytes(data, direction) {
            if let Ok(bytes) = packet.to_bytes() {
                if let Ok(again) = Packet::from_bytes(&bytes, direction) {
                    // NaN floats compare unequal, so compare the encodings
                    assert_eq!(again.to_bytes().ok(), Some(bytes));
                }
            }
        }
    }
});
