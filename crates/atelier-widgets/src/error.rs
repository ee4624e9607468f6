//! Error types for widget construction.

use thiserror::Error;

/// Errors surfaced when building a widget with an invalid configuration.
///
/// The machines themselves cannot fail once constructed; the only failure
/// class is programmer error at the call site, caught up front.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WidgetError {
    /// A typewriter was given no lines to replay.
    #[error("script has no lines")]
    EmptyScript,

    /// A cadence was started with a zero period.
    #[error("cadence period must be non-zero")]
    ZeroPeriod,
}
