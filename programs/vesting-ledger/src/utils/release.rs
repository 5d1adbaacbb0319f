//! Release curves. Pure functions of a schedule and a timestamp.
//!
//! - vested(now) = 0 before `start_time`, `total_amount` at or after `end_time`
//! - LINEAR: floor(total * elapsed / duration)
//! - STEP_BASED: completed_intervals * floor(total / total_intervals)
//! - division residue is only ever paid by the end-time guard

use crate::error::VestingError;
use crate::state::{ReleaseType, VestingSchedule};

/// Cumulative amount unlocked by `now`, independent of what has been paid.
pub fn vested_amount(schedule: &VestingSchedule, now: i64) -> Result<u64, VestingError> {
    if now < schedule.start_time {
        return Ok(0);
    }
    if now >= schedule.end_time {
        return Ok(schedule.total_amount);
    }

    let elapsed = now
        .checked_sub(schedule.start_time)
        .ok_or(VestingError::MathOverflow)?;
    let duration = schedule
        .end_time
        .checked_sub(schedule.start_time)
        .ok_or(VestingError::MathOverflow)?;

    match schedule.release_type {
        ReleaseType::Linear => linear_vested(schedule.total_amount, elapsed, duration),
        ReleaseType::StepBased => step_vested(
            schedule.total_amount,
            elapsed,
            duration,
            schedule.release_frequency.interval_seconds(),
        ),
    }
}

/// Vested minus already released. Zero for a schedule that is no longer active.
pub fn claimable_amount(schedule: &VestingSchedule, now: i64) -> Result<u64, VestingError> {
    if !schedule.is_active() {
        return Ok(0);
    }
    vested_amount(schedule, now)?
        .checked_sub(schedule.amount_released)
        .ok_or(VestingError::MathOverflow)
}

fn linear_vested(total: u64, elapsed: i64, duration: i64) -> Result<u64, VestingError> {
    let elapsed = u128::try_from(elapsed).map_err(|_| VestingError::MathOverflow)?;
    let duration = u128::try_from(duration).map_err(|_| VestingError::MathOverflow)?;
    let v = (total as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

fn step_vested(total: u64, elapsed: i64, duration: i64, interval: i64) -> Result<u64, VestingError> {
    // A schedule shorter than one interval still has one unlock point.
    let total_intervals = duration
        .checked_div(interval)
        .ok_or(VestingError::MathOverflow)?
        .max(1);
    let completed = elapsed
        .checked_div(interval)
        .ok_or(VestingError::MathOverflow)?;
    if completed >= total_intervals {
        return Ok(total);
    }

    let per_interval = total / total_intervals as u64;
    let v = (per_interval as u128)
        .checked_mul(completed as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}
