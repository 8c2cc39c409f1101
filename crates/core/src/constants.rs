//! Named constants shared across the engine.

/// Currency all aggregated totals are reported in.
pub const REPORTING_CURRENCY: &str = "JPY";

/// Currencies selectable on the subscription form.
pub const SUPPORTED_CURRENCIES: [&str; 2] = ["JPY", "USD"];

/// Calendar months the upcoming-payment views cover by default.
pub const UPCOMING_MONTHS: u32 = 4;

/// Global cap on emitted upcoming payments, across all subscriptions.
pub const MAX_UPCOMING_EVENTS: usize = 24;

/// Upper bound on cycle steps when catching a schedule up to a
/// reference date. Only the drift branch with a day-29..31 anchor
/// iterates at all (every other case is closed-form), and 120 monthly
/// steps is ten years: an anchor that far in the past is treated as
/// having no resolvable next occurrence rather than looping further.
pub const MAX_CATCH_UP_STEPS: u32 = 120;

/// The enumerator's tighter catch-up bound for skipping occurrences
/// that fall before the requested window (five years of monthly
/// cycles).
pub const MAX_SCHEDULE_CATCH_UP_STEPS: u32 = 60;

/// Shortest possible month length. Anchor days at or below this value
/// can never be clamped, which makes their stepping memoryless and
/// eligible for the closed-form catch-up.
pub const MIN_DAYS_IN_MONTH: u32 = 28;

/// How long a fetched exchange-rate table stays valid.
pub const RATES_CACHE_TTL_SECS: i64 = 60 * 60;
