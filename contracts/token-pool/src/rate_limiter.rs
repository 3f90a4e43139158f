//! Token bucket rate limiter.
//!
//! Every remote chain carries two buckets, one per direction. A bucket refills
//! continuously at `rate` tokens per second up to `capacity`; transfers
//! consume from it. Refill is lazy: the level is recomputed from the elapsed
//! time whenever the bucket is read or consumed.
//!
//! A disabled bucket does not track anything: its level is frozen and every
//! consume succeeds.

use std::cmp::min;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use thiserror::Error;

/// Admin-facing bucket parameters
#[cw_serde]
pub struct RateLimiterConfig {
    /// Whether the limit is enforced
    pub is_enabled: bool,
    /// Maximum bucket level, and the largest single transfer allowed
    pub capacity: Uint128,
    /// Refill speed in tokens per second
    pub rate: Uint128,
}

impl RateLimiterConfig {
    /// A config with no limit; the only valid shape for a disabled bucket.
    pub fn disabled() -> Self {
        Self {
            is_enabled: false,
            capacity: Uint128::zero(),
            rate: Uint128::zero(),
        }
    }

    /// Check the config can be applied to a bucket.
    pub fn validate(&self) -> Result<(), RateLimitError> {
        if self.is_enabled {
            // rate must stay strictly below capacity
            if self.rate >= self.capacity {
                return Err(RateLimitError::InvalidRateLimitRate {
                    config: self.clone(),
                });
            }
        } else if !self.rate.is_zero() || !self.capacity.is_zero() {
            return Err(RateLimitError::DisabledNonZeroRateLimit {
                config: self.clone(),
            });
        }
        Ok(())
    }
}

/// Stored bucket state
#[cw_serde]
pub struct TokenBucket {
    /// Level at `last_updated`
    pub tokens: Uint128,
    /// Block time (seconds) of the last refill
    pub last_updated: u64,
    pub is_enabled: bool,
    pub capacity: Uint128,
    pub rate: Uint128,
}

#[derive(Error, Debug, PartialEq)]
pub enum RateLimitError {
    #[error("Token max capacity exceeded: capacity {capacity}, requested {requested}, token {token}")]
    TokenMaxCapacityExceeded {
        capacity: Uint128,
        requested: Uint128,
        token: Addr,
    },

    #[error("Token rate limit reached: wait at least {min_wait_in_seconds} seconds, {available} available, token {token}")]
    TokenRateLimitReached {
        min_wait_in_seconds: Uint128,
        available: Uint128,
        token: Addr,
    },

    #[error("Aggregate value max capacity exceeded: capacity {capacity}, requested {requested}")]
    AggregateValueMaxCapacityExceeded {
        capacity: Uint128,
        requested: Uint128,
    },

    #[error("Aggregate value rate limit reached: wait at least {min_wait_in_seconds} seconds, {available} available")]
    AggregateValueRateLimitReached {
        min_wait_in_seconds: Uint128,
        available: Uint128,
    },

    #[error("Disabled rate limit must have zero capacity and rate: {config:?}")]
    DisabledNonZeroRateLimit { config: RateLimiterConfig },

    #[error("Invalid rate limit rate: rate must be lower than capacity: {config:?}")]
    InvalidRateLimitRate { config: RateLimiterConfig },

    #[error("Bucket overfilled")]
    BucketOverfilled,
}

impl TokenBucket {
    /// Build a bucket for a newly registered chain. It starts full.
    pub fn new(config: &RateLimiterConfig, now: u64) -> Result<Self, RateLimitError> {
        config.validate()?;
        Ok(Self {
            tokens: config.capacity,
            last_updated: now,
            is_enabled: config.is_enabled,
            capacity: config.capacity,
            rate: config.rate,
        })
    }

    pub fn config(&self) -> RateLimiterConfig {
        RateLimiterConfig {
            is_enabled: self.is_enabled,
            capacity: self.capacity,
            rate: self.rate,
        }
    }

    /// Level of the bucket at `now`. Pure.
    pub fn current_level(&self, now: u64) -> Uint128 {
        if !self.is_enabled {
            return self.tokens;
        }
        let elapsed = Uint128::from(now.saturating_sub(self.last_updated));
        let refill = self.rate.saturating_mul(elapsed);
        min(self.capacity, self.tokens.saturating_add(refill))
    }

    /// Copy of the bucket as seen at `now`, used for state queries.
    pub fn current_state(&self, now: u64) -> TokenBucket {
        TokenBucket {
            tokens: self.current_level(now),
            last_updated: now,
            ..self.clone()
        }
    }

    /// Take `amount` tokens out of the bucket.
    ///
    /// Returns the level left in the bucket, or `None` when nothing was
    /// tracked (disabled bucket or zero amount). `token` selects the error
    /// family: `None` reports aggregate-value errors. On error the bucket is
    /// left untouched.
    pub fn consume(
        &mut self,
        now: u64,
        amount: Uint128,
        token: Option<&Addr>,
    ) -> Result<Option<Uint128>, RateLimitError> {
        if !self.is_enabled || amount.is_zero() {
            return Ok(None);
        }
        if self.tokens > self.capacity {
            return Err(RateLimitError::BucketOverfilled);
        }

        if amount > self.capacity {
            return Err(match token {
                Some(token) => RateLimitError::TokenMaxCapacityExceeded {
                    capacity: self.capacity,
                    requested: amount,
                    token: token.clone(),
                },
                None => RateLimitError::AggregateValueMaxCapacityExceeded {
                    capacity: self.capacity,
                    requested: amount,
                },
            });
        }

        let level = self.current_level(now);
        if amount > level {
            let min_wait_in_seconds = min_wait(amount - level, self.rate);
            return Err(match token {
                Some(token) => RateLimitError::TokenRateLimitReached {
                    min_wait_in_seconds,
                    available: level,
                    token: token.clone(),
                },
                None => RateLimitError::AggregateValueRateLimitReached {
                    min_wait_in_seconds,
                    available: level,
                },
            });
        }

        self.tokens = level - amount;
        self.last_updated = now;
        Ok(Some(self.tokens))
    }

    /// Apply new parameters, keeping the fill accumulated under the old ones.
    pub fn set_config(
        &mut self,
        config: &RateLimiterConfig,
        now: u64,
    ) -> Result<(), RateLimitError> {
        config.validate()?;

        let level = self.current_level(now);
        self.tokens = min(config.capacity, level);
        self.last_updated = now;
        self.is_enabled = config.is_enabled;
        self.capacity = config.capacity;
        self.rate = config.rate;

        if self.tokens > self.capacity {
            return Err(RateLimitError::BucketOverfilled);
        }
        Ok(())
    }
}

/// Seconds until `deficit` tokens have refilled, rounded up.
fn min_wait(deficit: Uint128, rate: Uint128) -> Uint128 {
    if rate.is_zero() {
        return Uint128::MAX;
    }
    let whole = deficit / rate;
    if (deficit % rate).is_zero() {
        whole
    } else {
        whole + Uint128::one()
    }
}
