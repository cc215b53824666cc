//! Labor-hour policy models.
//!
//! This module defines the [`Policy`] value object passed into every
//! computation, the [`PartialWeekRules`] flag set selecting how weeks clipped
//! by the query range are scored, and [`PolicyOverrides`], the untrusted raw
//! form in which configuration files, environment variables and API callers
//! supply policy values.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Default ordinary hours per day.
pub const DEFAULT_DAILY_BASE_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default lunch break length in minutes.
pub const DEFAULT_LUNCH_MINUTES: u32 = 60;

/// Default weekly target hours for a complete week.
pub const DEFAULT_WEEKLY_TARGET_HOURS: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// Default bonus granted by the partial-week bonus variants.
pub const DEFAULT_BONUS_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Upper bound accepted for any policy hour value.
pub const MAX_POLICY_HOURS: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Optional refinements of the partial-week daily rule.
///
/// With every flag off (the default) a partial week is scored by the plain
/// daily rule: each date in the clipped window contributes
/// `max(0, worked - base)` to extra and `max(0, base - worked)` to owed.
/// Each flag can be enabled independently.
///
/// # Example
///
/// ```
/// use overtime_engine::models::PartialWeekRules;
///
/// let rules = PartialWeekRules {
///     sunday_bonus: true,
///     ..PartialWeekRules::default()
/// };
/// assert!(!rules.no_rest_day_bonus);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialWeekRules {
    /// A worked Sunday adds `bonus_hours` to extra instead of being scored
    /// by the daily rule.
    pub sunday_bonus: bool,
    /// A worked Sunday in a partial week that also holds another rest day
    /// contributes nothing. Takes precedence over `sunday_bonus`.
    pub sunday_exempt_with_rest_day: bool,
    /// A partial week without any rest day earns an extra `bonus_hours`.
    pub no_rest_day_bonus: bool,
    /// Hours granted by the bonus variants.
    pub bonus_hours: Decimal,
}

impl Default for PartialWeekRules {
    fn default() -> Self {
        Self {
            sunday_bonus: false,
            sunday_exempt_with_rest_day: false,
            no_rest_day_bonus: false,
            bonus_hours: DEFAULT_BONUS_HOURS,
        }
    }
}

/// The effective policy for one computation.
///
/// # Example
///
/// ```
/// use overtime_engine::models::Policy;
/// use rust_decimal::Decimal;
///
/// let policy = Policy::default();
/// assert_eq!(policy.daily_base_hours, Decimal::new(8, 0));
/// assert_eq!(policy.default_lunch_minutes, 60);
/// assert_eq!(policy.weekly_target_hours, Decimal::new(48, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Ordinary hours per day; the daily overtime threshold.
    pub daily_base_hours: Decimal,
    /// Lunch minutes deducted when a session records a lunch without override.
    pub default_lunch_minutes: u32,
    /// Target hours for a complete Monday-to-Sunday week.
    pub weekly_target_hours: Decimal,
    /// Rule variants applied to range-clipped weeks.
    #[serde(default)]
    pub partial_week: PartialWeekRules,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            daily_base_hours: DEFAULT_DAILY_BASE_HOURS,
            default_lunch_minutes: DEFAULT_LUNCH_MINUTES,
            weekly_target_hours: DEFAULT_WEEKLY_TARGET_HOURS,
            partial_week: PartialWeekRules::default(),
        }
    }
}

impl Policy {
    /// Replaces negative hour values, and values above [`MAX_POLICY_HOURS`],
    /// with their documented defaults.
    ///
    /// Each replacement is logged as an [`EngineError::InvalidPolicy`] at
    /// `warn` level; the computation itself never aborts on policy values.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_engine::models::Policy;
    /// use rust_decimal::Decimal;
    ///
    /// let policy = Policy {
    ///     daily_base_hours: Decimal::new(-1, 0),
    ///     ..Policy::default()
    /// }
    /// .sanitized();
    /// assert_eq!(policy.daily_base_hours, Decimal::new(8, 0));
    /// ```
    pub fn sanitized(mut self) -> Self {
        self.daily_base_hours = within_bounds_or(
            "daily_base_hours",
            self.daily_base_hours,
            DEFAULT_DAILY_BASE_HOURS,
        );
        self.weekly_target_hours = within_bounds_or(
            "weekly_target_hours",
            self.weekly_target_hours,
            DEFAULT_WEEKLY_TARGET_HOURS,
        );
        self.partial_week.bonus_hours = within_bounds_or(
            "partial_week.bonus_hours",
            self.partial_week.bonus_hours,
            DEFAULT_BONUS_HOURS,
        );
        self
    }
}

fn within_bounds_or(field: &str, value: Decimal, default: Decimal) -> Decimal {
    let message = if value.is_sign_negative() && !value.is_zero() {
        format!("{} is negative", value)
    } else if value > MAX_POLICY_HOURS {
        format!("{} exceeds {}", value, MAX_POLICY_HOURS)
    } else {
        return value;
    };

    let err = EngineError::InvalidPolicy {
        field: field.to_string(),
        message,
    };
    warn!(error = %err, fallback = %default, "Falling back to default policy value");
    default
}

/// Raw policy values as supplied from outside the engine.
///
/// Numbers arrive as `f64` so that non-finite values from YAML (`.nan`,
/// `.inf`) or environment variables can be detected and rejected. Absent
/// fields keep the value of the policy they are resolved against.
///
/// # Example
///
/// ```
/// use overtime_engine::models::{Policy, PolicyOverrides};
/// use rust_decimal::Decimal;
///
/// let overrides = PolicyOverrides {
///     daily_base_hours: Some(7.5),
///     weekly_target_hours: Some(f64::NAN),
///     ..PolicyOverrides::default()
/// };
///
/// let policy = overrides.resolve(&Policy::default());
/// assert_eq!(policy.daily_base_hours, Decimal::new(75, 1));
/// assert_eq!(policy.weekly_target_hours, Decimal::new(48, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyOverrides {
    /// Override for [`Policy::daily_base_hours`].
    pub daily_base_hours: Option<f64>,
    /// Override for [`Policy::default_lunch_minutes`].
    pub default_lunch_minutes: Option<f64>,
    /// Override for [`Policy::weekly_target_hours`].
    pub weekly_target_hours: Option<f64>,
    /// Replacement rule set for partial weeks.
    pub partial_week: Option<PartialWeekRules>,
}

impl PolicyOverrides {
    /// Applies these overrides on top of `base`.
    ///
    /// Invalid values (non-finite or negative) are logged and leave the
    /// corresponding `base` value in place.
    pub fn resolve(&self, base: &Policy) -> Policy {
        let daily_base_hours = resolve_field(
            "daily_base_hours",
            self.daily_base_hours,
            base.daily_base_hours,
            validate_hours,
        );
        let weekly_target_hours = resolve_field(
            "weekly_target_hours",
            self.weekly_target_hours,
            base.weekly_target_hours,
            validate_hours,
        );
        let default_lunch_minutes = resolve_field(
            "default_lunch_minutes",
            self.default_lunch_minutes,
            base.default_lunch_minutes,
            validate_minutes,
        );
        let partial_week = self
            .partial_week
            .clone()
            .unwrap_or_else(|| base.partial_week.clone());

        Policy {
            daily_base_hours,
            default_lunch_minutes,
            weekly_target_hours,
            partial_week,
        }
        .sanitized()
    }
}

fn resolve_field<T: Copy + std::fmt::Display>(
    field: &str,
    raw: Option<f64>,
    fallback: T,
    validate: fn(&str, f64) -> EngineResult<T>,
) -> T {
    let Some(raw) = raw else {
        return fallback;
    };
    match validate(field, raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, fallback = %fallback, "Ignoring invalid policy override");
            fallback
        }
    }
}

/// Validates a raw hour quantity: it must be finite, non-negative and at
/// most [`MAX_POLICY_HOURS`].
pub fn validate_hours(field: &str, raw: f64) -> EngineResult<Decimal> {
    if !raw.is_finite() {
        return Err(EngineError::InvalidPolicy {
            field: field.to_string(),
            message: format!("{} is not a finite number", raw),
        });
    }
    if raw < 0.0 {
        return Err(EngineError::InvalidPolicy {
            field: field.to_string(),
            message: format!("{} is negative", raw),
        });
    }
    Decimal::from_f64(raw)
        .map(|d| d.round_dp(4).normalize())
        .filter(|d| *d <= MAX_POLICY_HOURS)
        .ok_or_else(|| EngineError::InvalidPolicy {
            field: field.to_string(),
            message: format!("{} exceeds {} hours", raw, MAX_POLICY_HOURS),
        })
}

/// Validates a raw minute count, rounding to the nearest whole minute.
pub fn validate_minutes(field: &str, raw: f64) -> EngineResult<u32> {
    validate_hours(field, raw)?
        .round()
        .to_u32()
        .ok_or_else(|| EngineError::InvalidPolicy {
            field: field.to_string(),
            message: format!("{} is out of range for minutes", raw),
        })
}
