//! Wire record parsing

use crate::types::*;
use rust_decimal::Decimal;

/// Qualities are sent as integer billionths
const QUALITY_SCALE: u32 = 9;

/// Zero means "not set"
fn parse_quality(quality: u32) -> Option<Decimal> {
    if quality == 0 {
        return None;
    }
    Some(Decimal::new(i64::from(quality), QUALITY_SCALE).normalize())
}

/// Flags are only reported when set
fn flag(value: Option<bool>) -> Option<bool> {
    value.filter(|&set| set)
}

/// Convert a wire `account_lines` entry into a [`Trustline`]
pub fn parse_account_trustline(line: &AccountLine) -> Trustline {
    Trustline {
        specification: TrustlineSpecification {
            limit: line.limit.clone(),
            currency: line.currency.clone(),
            counterparty: line.account.clone(),
            quality_in: parse_quality(line.quality_in),
            quality_out: parse_quality(line.quality_out),
            rippling_disabled: flag(line.no_ripple),
            frozen: flag(line.freeze),
            authorized: flag(line.authorized),
        },
        counterparty: TrustlineCounterparty {
            limit: line.limit_peer.clone(),
            rippling_disabled: flag(line.no_ripple_peer),
            frozen: flag(line.freeze_peer),
            authorized: flag(line.peer_authorized),
        },
        state: TrustlineState {
            balance: line.balance.clone(),
        },
    }
}
