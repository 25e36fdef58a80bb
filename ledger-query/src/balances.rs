//! Account balance query
//!
//! Balances combine two sub-queries run concurrently against the same ledger
//! version: the native balance from the account root, and the trust lines.

use crate::{
    amount::drops_to_xrp,
    compose::{join_fail_fast, CompositionFailure},
    error::{normalize, Failure, PartialData},
    remote::{RemoteError, RemoteQueryPort},
    trustlines::fetch_trustlines,
    types::*,
    Result, NATIVE_CURRENCY,
};
use tracing::{debug, warn};

fn trustline_balance(trustline: &Trustline) -> Balance {
    Balance {
        currency: trustline.specification.currency.clone(),
        value: trustline.state.balance.clone(),
        counterparty: Some(trustline.specification.counterparty.clone()),
    }
}

/// Shape the raw sub-query outputs into the public balance list.
///
/// The native balance comes first unless the caller filtered by counterparty
/// or by a non-native currency. `limit` keeps a prefix of the list.
pub fn format_balances(options: &BalancesOptions, composed: ComposedBalances) -> Vec<Balance> {
    let mut result: Vec<Balance> = composed.trustlines.iter().map(trustline_balance).collect();

    let filtered = options.counterparty.is_some()
        || options
            .currency
            .as_deref()
            .is_some_and(|currency| currency != NATIVE_CURRENCY);
    if !filtered {
        result.insert(0, Balance::native(composed.xrp));
    }

    if let Some(limit) = options.limit {
        result.truncate(limit as usize);
    }
    result
}

/// Native balance of `account` at `ledger_version`, in display units
pub async fn fetch_native_balance(
    port: &dyn RemoteQueryPort,
    account: &str,
    ledger_version: LedgerVersion,
) -> std::result::Result<String, Failure> {
    let info = port.request_account_info(account, ledger_version).await?;
    drops_to_xrp(&info.balance).map_err(|e| {
        Failure::Remote(RemoteError::Malformed(format!(
            "Invalid account balance: {}",
            e.message()
        )))
    })
}

/// Run both balance sub-queries at `ledger_version` and format the result
pub async fn fetch_balances(
    port: &dyn RemoteQueryPort,
    account: &str,
    ledger_version: LedgerVersion,
    options: &BalancesOptions,
) -> Result<Vec<Balance>> {
    let native = fetch_native_balance(port, account, ledger_version);
    let lines = async {
        fetch_trustlines(port, account, ledger_version, options)
            .await
            .map(|page| page.results)
            .map_err(Failure::Domain)
    };

    match join_fail_fast(native, lines).await {
        Ok((xrp, trustlines)) => {
            debug!(
                "Composed balances for {} at ledger {}: {} trust lines",
                account,
                ledger_version,
                trustlines.len()
            );
            Ok(format_balances(options, ComposedBalances { xrp, trustlines }))
        }
        Err(CompositionFailure {
            failure,
            left,
            right,
        }) => {
            warn!("Balance query for {} failed: {:?}", account, failure);
            // A failed walk already carries the lines it collected
            let trustlines = right.or_else(|| match &failure {
                Failure::Domain(e) => match e.data() {
                    Some(PartialData::Trustlines(lines)) => Some(lines.clone()),
                    _ => None,
                },
                Failure::Remote(_) => None,
            });
            Err(normalize(
                failure,
                Some(PartialData::Balances {
                    xrp: left,
                    trustlines,
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "rMwjYedjc7qqtKYVLiAccJSmCwih4LnE2q";

    fn trustline(currency: &str, balance: &str) -> Trustline {
        Trustline {
            specification: TrustlineSpecification {
                limit: "100".to_string(),
                currency: currency.to_string(),
                counterparty: ISSUER.to_string(),
                quality_in: None,
                quality_out: None,
                rippling_disabled: None,
                frozen: None,
                authorized: None,
            },
            counterparty: TrustlineCounterparty {
                limit: "0".to_string(),
                rippling_disabled: None,
                frozen: None,
                authorized: None,
            },
            state: TrustlineState {
                balance: balance.to_string(),
            },
        }
    }

    fn composed() -> ComposedBalances {
        ComposedBalances {
            xrp: "922.913243".to_string(),
            trustlines: vec![trustline("USD", "0"), trustline("EUR", "2.5")],
        }
    }

    #[test]
    fn test_native_balance_first() {
        let balances = format_balances(&BalancesOptions::default(), composed());
        assert_eq!(balances.len(), 3);
        assert_eq!(balances[0], Balance::native("922.913243"));
        assert_eq!(
            balances[2],
            Balance {
                currency: "EUR".to_string(),
                value: "2.5".to_string(),
                counterparty: Some(ISSUER.to_string()),
            }
        );
    }

    #[test]
    fn test_non_native_currency_filter_drops_native() {
        let options = BalancesOptions {
            currency: Some("USD".to_string()),
            ..Default::default()
        };
        let balances = format_balances(&options, composed());
        assert!(balances.iter().all(|b| !b.is_native()));
    }

    #[test]
    fn test_native_currency_filter_keeps_native() {
        let options = BalancesOptions {
            currency: Some("XRP".to_string()),
            ..Default::default()
        };
        let balances = format_balances(&options, composed());
        assert!(balances[0].is_native());
    }

    #[test]
    fn test_counterparty_filter_drops_native() {
        let options = BalancesOptions {
            counterparty: Some(ISSUER.to_string()),
            ..Default::default()
        };
        let balances = format_balances(&options, composed());
        assert_eq!(balances.len(), 2);
        assert!(!balances[0].is_native());
    }

    #[test]
    fn test_limit_keeps_prefix() {
        let options = BalancesOptions {
            limit: Some(2),
            ..Default::default()
        };
        let balances = format_balances(&options, composed());
        assert_eq!(balances.len(), 2);
        assert!(balances[0].is_native());
        assert_eq!(balances[1].currency, "USD");
    }
}
