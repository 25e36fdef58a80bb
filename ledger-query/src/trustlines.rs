//! Account trust line query

use crate::{
    error::{normalize, Failure, PartialData},
    pager::{page_all, Page, PageFailure},
    parse::parse_account_trustline,
    remote::RemoteQueryPort,
    types::*,
    Result,
};
use tracing::{debug, warn};

fn matches_currency(currency: Option<&str>, trustline: &Trustline) -> bool {
    currency.map_or(true, |c| trustline.specification.currency == c)
}

/// Parse one node page and keep the lines in the requested currency
pub fn format_page(currency: Option<&str>, page: AccountLinesPage) -> Page<Trustline> {
    Page {
        marker: page.marker,
        results: page
            .lines
            .iter()
            .map(parse_account_trustline)
            .filter(|trustline| matches_currency(currency, trustline))
            .collect(),
    }
}

/// Walk every `account_lines` page of `account` at `ledger_version`.
///
/// A failing page fails the whole walk; lines collected so far travel with the
/// error as [`PartialData::Trustlines`].
pub async fn fetch_trustlines(
    port: &dyn RemoteQueryPort,
    account: &str,
    ledger_version: LedgerVersion,
    options: &TrustlinesOptions,
) -> Result<TrustlinesPage> {
    let currency = options.currency.as_deref();

    let walk = page_all(
        |marker, limit| {
            let request = AccountLinesRequest {
                account: account.to_string(),
                ledger_version,
                marker,
                limit,
                peer: options.counterparty.clone(),
            };
            async move {
                let page = port
                    .request_account_lines(&request)
                    .await
                    .map_err(Failure::Remote)?;
                Ok::<_, Failure>(format_page(currency, page))
            }
        },
        options.limit,
    )
    .await;

    match walk {
        Ok(page) => {
            debug!(
                "Fetched {} trust lines for {} at ledger {}",
                page.results.len(),
                account,
                ledger_version
            );
            Ok(TrustlinesPage {
                marker: page.marker,
                results: page.results,
            })
        }
        Err(PageFailure {
            failure,
            accumulated,
        }) => {
            warn!(
                "Trust line walk for {} failed after {} lines",
                account,
                accumulated.len()
            );
            Err(normalize(failure, Some(PartialData::Trustlines(accumulated))))
        }
    }
}
