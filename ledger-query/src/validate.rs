//! Input validation
//!
//! Runs before any remote call is made; every failure is an
//! [`Error::Validation`].

use crate::{types::TrustlinesOptions, Error, Result};
use regex::Regex;
use sha2::{Digest, Sha256};

/// Base58 alphabet used by ledger account addresses
const ALPHABET: &[u8; 58] = b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Version byte of classic account addresses
const ACCOUNT_ID_VERSION: u8 = 0;

/// Version byte + 20-byte account id + 4-byte checksum
const ADDRESS_PAYLOAD_LEN: usize = 25;

lazy_static::lazy_static! {
    static ref CURRENCY_CODE: Regex =
        Regex::new(r"^([a-zA-Z0-9<>(){}\[\]|?!@#$%^&*]{3}|[A-F0-9]{40})$").unwrap();
}

fn decode_base58(encoded: &str) -> Option<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::with_capacity(encoded.len());
    for c in encoded.bytes() {
        let mut carry = ALPHABET.iter().position(|&a| a == c)? as u32;
        for byte in bytes.iter_mut().rev() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.insert(0, (carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    let leading_zeros = encoded.bytes().take_while(|&c| c == ALPHABET[0]).count();
    let mut decoded = vec![0u8; leading_zeros];
    decoded.extend(bytes);
    Some(decoded)
}

/// Whether `address` is a well-formed classic account address
pub fn is_valid_address(address: &str) -> bool {
    if !address.starts_with('r') || address.len() < 25 || address.len() > 35 {
        return false;
    }
    let Some(payload) = decode_base58(address) else {
        return false;
    };
    if payload.len() != ADDRESS_PAYLOAD_LEN || payload[0] != ACCOUNT_ID_VERSION {
        return false;
    }
    let (body, checksum) = payload.split_at(ADDRESS_PAYLOAD_LEN - 4);
    let digest = Sha256::digest(Sha256::digest(body));
    &digest[..4] == checksum
}

/// Validate an account address
pub fn address(address: &str) -> Result<()> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(Error::Validation(format!("Invalid address: {}", address)))
    }
}

/// Validate a currency code (3-character or 160-bit hex)
pub fn currency(code: &str) -> Result<()> {
    if CURRENCY_CODE.is_match(code) {
        Ok(())
    } else {
        Err(Error::Validation(format!("Invalid currency: {}", code)))
    }
}

/// Validate trust line query options
pub fn trustlines_options(options: &TrustlinesOptions) -> Result<()> {
    if let Some(code) = &options.currency {
        currency(code)?;
    }
    if let Some(counterparty) = &options.counterparty {
        address(counterparty)
            .map_err(|_| Error::Validation(format!("Invalid counterparty: {}", counterparty)))?;
    }
    if options.limit == Some(0) {
        return Err(Error::Validation(
            "limit must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// Validate balance query options
pub fn balances_options(options: &TrustlinesOptions) -> Result<()> {
    trustlines_options(options)
}
