//! Message key computation
//!
//! Every message is identified by the keccak256 hash of its contents. String
//! fields are length-prefixed so that adjacent fields cannot be re-split into a
//! colliding encoding.
//!
//! # Byte Layout (L1 -> L2)
//! - direction tag (1 byte, `0x01`)
//! - from: u32 big-endian length + UTF-8 bytes
//! - to: u32 big-endian length + UTF-8 bytes
//! - nonce: u64 big-endian
//! - payload: u32 big-endian length + bytes
//!
//! L2 -> L1 keys use tag `0x02` and carry no nonce; identical messages share a
//! key and are counted.

use tiny_keccak::{Hasher, Keccak};

const L1_TO_L2_TAG: u8 = 0x01;
const L2_TO_L1_TAG: u8 = 0x02;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

fn push_field(data: &mut Vec<u8>, field: &[u8]) {
    data.extend_from_slice(&(field.len() as u32).to_be_bytes());
    data.extend_from_slice(field);
}

/// Key of an L1 -> L2 message
pub fn l1_to_l2_message_key(from: &str, to: &str, nonce: u64, payload: &[u8]) -> [u8; 32] {
    let mut data = Vec::with_capacity(1 + 12 + from.len() + to.len() + 8 + payload.len());
    data.push(L1_TO_L2_TAG);
    push_field(&mut data, from.as_bytes());
    push_field(&mut data, to.as_bytes());
    data.extend_from_slice(&nonce.to_be_bytes());
    push_field(&mut data, payload);
    keccak256(&data)
}

/// Key of an L2 -> L1 message
pub fn l2_to_l1_message_key(from: &str, to: &str, payload: &[u8]) -> [u8; 32] {
    let mut data = Vec::with_capacity(1 + 12 + from.len() + to.len() + payload.len());
    data.push(L2_TO_L1_TAG);
    push_field(&mut data, from.as_bytes());
    push_field(&mut data, to.as_bytes());
    push_field(&mut data, payload);
    keccak256(&data)
}

/// Convert bytes32 to hex string with 0x prefix
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_empty_input() {
        assert_eq!(
            bytes32_to_hex(&keccak256(&[])),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_l1_to_l2_key_is_deterministic() {
        let a = l1_to_l2_message_key("l1bridge", "l2bridge", 7, b"{}");
        let b = l1_to_l2_message_key("l1bridge", "l2bridge", 7, b"{}");
        assert_eq!(a, b);
    }

    #[test]
    fn test_l1_to_l2_key_depends_on_nonce() {
        let a = l1_to_l2_message_key("l1bridge", "l2bridge", 0, b"{}");
        let b = l1_to_l2_message_key("l1bridge", "l2bridge", 1, b"{}");
        assert_ne!(a, b);
    }

    #[test]
    fn test_field_boundaries_do_not_collide() {
        let a = l2_to_l1_message_key("ab", "c", b"x");
        let b = l2_to_l1_message_key("a", "bc", b"x");
        assert_ne!(a, b);
    }

    #[test]
    fn test_directions_do_not_collide() {
        let a = l2_to_l1_message_key("x", "y", b"p");
        let b = l1_to_l2_message_key("x", "y", 0, b"p");
        assert_ne!(a, b);
    }

    #[test]
    fn test_bytes32_to_hex() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xab;
        let hex = bytes32_to_hex(&bytes);
        assert_eq!(hex.len(), 66);
        assert!(hex.starts_with("0x"));
        assert!(hex.ends_with("ab"));
    }
}
