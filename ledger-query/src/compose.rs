//! Fail-fast composition of two independent sub-queries
//!
//! Both branches are started immediately and polled concurrently on the
//! calling task. The first failure ends the composition; the other branch is
//! dropped, which abandons its in-flight request. When both branches fail in
//! the same poll, the left one wins.

use crate::error::Failure;
use std::future::Future;

/// A composition that stopped on a failing branch
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionFailure<A, B> {
    /// The first failure observed
    pub failure: Failure,
    /// Left output, if it finished before the failure
    pub left: Option<A>,
    /// Right output, if it finished before the failure
    pub right: Option<B>,
}

/// Run `left` and `right` concurrently; both outputs or the first failure
pub async fn join_fail_fast<A, B, FA, FB>(
    left: FA,
    right: FB,
) -> std::result::Result<(A, B), CompositionFailure<A, B>>
where
    FA: Future<Output = std::result::Result<A, Failure>>,
    FB: Future<Output = std::result::Result<B, Failure>>,
{
    tokio::pin!(left);
    tokio::pin!(right);

    let mut left_out: Option<A> = None;
    let mut right_out: Option<B> = None;

    loop {
        tokio::select! {
            biased;

            result = &mut left, if left_out.is_none() => match result {
                Ok(value) => left_out = Some(value),
                Err(failure) => {
                    return Err(CompositionFailure {
                        failure,
                        left: None,
                        right: right_out,
                    })
                }
            },

            result = &mut right, if right_out.is_none() => match result {
                Ok(value) => right_out = Some(value),
                Err(failure) => {
                    return Err(CompositionFailure {
                        failure,
                        left: left_out,
                        right: None,
                    })
                }
            },
        }

        match (left_out, right_out) {
            (Some(a), Some(b)) => return Ok((a, b)),
            (a, b) => {
                left_out = a;
                right_out = b;
            }
        }
    }
}
