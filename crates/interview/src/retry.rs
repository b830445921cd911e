//! The bounded attempt loop shared by all retrying questions.

use crate::error::Result;

/// What a single attempt came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Attempt<T> {
    /// The input was acceptable; the ask cycle ends with this answer.
    Answered(T),
    /// The input was rejected for the given reason; try again if the budget
    /// allows.
    Rejected(&'static str),
}

/// How an attempt loop ended without a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome<T> {
    Answered(T),
    Exhausted { attempts: u32 },
}

/// Number of attempts allowed for `retries_max` retries.
pub(crate) fn budget(retries_max: u32) -> u32 {
    retries_max.saturating_add(1)
}

/// Run `attempt` until it answers, fails, or the budget is used up.
///
/// `attempt` receives the 1-based attempt number. An `Err` from it is fatal
/// and returned immediately without consuming further attempts.
pub(crate) fn run<T>(
    retries_max: u32,
    mut attempt: impl FnMut(u32) -> Result<Attempt<T>>,
) -> Result<Outcome<T>> {
    let budget = budget(retries_max);

    for number in 1..=budget {
        match attempt(number)? {
            Attempt::Answered(value) => return Ok(Outcome::Answered(value)),
            Attempt::Rejected(reason) => {
                tracing::debug!(attempt = number, budget, reason, "answer rejected");
            }
        }
    }

    tracing::debug!(attempts = budget, "retry budget exhausted");
    Ok(Outcome::Exhausted { attempts: budget })
}
