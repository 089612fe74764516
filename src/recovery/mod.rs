//! Training load and recovery scoring
//!
//! Turns the trailing 28 days of logged sessions into today's strain, the
//! acute:chronic workload ratio, a 0-100 recovery score, an
//! overtraining-risk classification and a one-day forecast.
//!
//! # Sports Science Background
//!
//! - **Session load**: RPE x duration in minutes (Foster's session-RPE)
//! - **Strain**: load mapped onto a bounded 0-21 logarithmic scale
//! - **AC ratio**: 7-day load against the average week of the last 4;
//!   values above 1.3-1.5 mark a load spike
//!
//! Every function here is pure: "today" is passed in rather than read from
//! the clock, so identical inputs always give identical metrics.

use crate::models::{AllMetrics, SessionRow};
use chrono::{Local, NaiveDate};
use tracing::debug;

pub mod load;
pub mod scoring;
pub mod window;

pub use load::{daily_strain, strain_from_load};
pub use scoring::{overtraining_risk, recovery_score};
pub use window::{acute_chronic_ratio, TrainingWindow};

/// Compute every dashboard metric for `today` from 28 days of sessions
pub fn compute_all_metrics(sessions: &[SessionRow], today: NaiveDate) -> AllMetrics {
    let stats = TrainingWindow::new(sessions, today);

    let ac_ratio = stats.acute_chronic_ratio();
    let consecutive_high_days = stats.consecutive_high_strain_days();
    let latest_sleep_hours = stats.latest_sleep();
    let latest_soreness = stats.latest_soreness();
    let weekly_session_count = stats.weekly_session_count();
    let high_rpe_count = stats.high_rpe_count();
    let soreness_trend = stats.soreness_trend();

    debug!(
        %today,
        sessions = sessions.len(),
        ac_ratio,
        consecutive_high_days,
        weekly_session_count,
        high_rpe_count,
        soreness_trend,
        "Computed training window statistics"
    );

    AllMetrics {
        strain: stats.strain_on(0),
        recovery_score: recovery_score(
            latest_sleep_hours,
            f64::from(latest_soreness),
            ac_ratio,
            consecutive_high_days,
        ),
        ac_ratio,
        overtraining_risk: overtraining_risk(
            ac_ratio,
            weekly_session_count,
            high_rpe_count,
            soreness_trend,
        ),
        weekly_session_count,
        avg_sleep_hours: window::average_sleep(sessions),
        latest_sleep_hours,
        latest_soreness,
        consecutive_high_days,
        daily_load: stats.load_on(0),
        acute_load: stats.acute_load(),
        chronic_load: stats.chronic_load(),
        strain_history: stats.strain_history(),
        recent_sessions: stats.recent_sessions(),
        forecast: stats.forecast(),
    }
}

/// [`compute_all_metrics`] anchored on the local calendar date
pub fn compute_all_metrics_now(sessions: &[SessionRow]) -> AllMetrics {
    compute_all_metrics(sessions, Local::now().date_naive())
}
