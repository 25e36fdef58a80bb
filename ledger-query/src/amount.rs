//! Native currency unit conversion and amount shapes

use crate::{Error, Result, NATIVE_CURRENCY};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Drops per XRP
const DROPS_PER_XRP: u64 = 1_000_000;

fn parse_decimal(value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim())
        .map_err(|e| Error::Validation(format!("Invalid amount {:?}: {}", value, e)))
}

/// Convert a drops amount to XRP display units (exact)
pub fn drops_to_xrp(drops: &str) -> Result<String> {
    let drops = parse_decimal(drops)?;
    let xrp = drops
        .checked_div(Decimal::from(DROPS_PER_XRP))
        .ok_or_else(|| Error::Validation(format!("Amount out of range: {}", drops)))?;
    Ok(xrp.normalize().to_string())
}

/// Convert XRP display units to drops, rounding down
pub fn xrp_to_drops(xrp: &str) -> Result<String> {
    let xrp = parse_decimal(xrp)?;
    let drops = xrp
        .checked_mul(Decimal::from(DROPS_PER_XRP))
        .ok_or_else(|| Error::Validation(format!("Amount out of range: {}", xrp)))?;
    Ok(drops.floor().normalize().to_string())
}

/// Amount as callers express it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Currency code
    pub currency: String,
    /// Decimal value in display units
    pub value: String,
    /// Issuer, preferred over `issuer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
    /// Issuer, node spelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

/// Amount as the node expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RippledAmount {
    /// Native amount in drops
    Drops(String),
    /// Issued currency amount
    Issued {
        /// Currency code
        currency: String,
        /// Issuer account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        issuer: Option<String>,
        /// Decimal value
        value: String,
    },
}

/// Convert a caller amount to the node's representation
pub fn to_rippled_amount(amount: &Amount) -> Result<RippledAmount> {
    if amount.currency == NATIVE_CURRENCY {
        return Ok(RippledAmount::Drops(xrp_to_drops(&amount.value)?));
    }
    Ok(RippledAmount::Issued {
        currency: amount.currency.clone(),
        issuer: amount
            .counterparty
            .clone()
            .or_else(|| amount.issuer.clone()),
        value: amount.value.clone(),
    })
}
