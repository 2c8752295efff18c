//! What a report measured and what theory says it should look like.

pub mod asymptotic;
pub mod classify;
