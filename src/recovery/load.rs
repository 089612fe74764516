//! Daily training load and the 0-21 strain scale

use crate::constants::strain;
use crate::models::SessionRow;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sessions grouped by calendar day, in input order within a day
pub type SessionsByDate<'a> = BTreeMap<NaiveDate, Vec<&'a SessionRow>>;

/// Group sessions by their calendar day
pub fn group_by_date(sessions: &[SessionRow]) -> SessionsByDate<'_> {
    let mut grouped: SessionsByDate<'_> = BTreeMap::new();
    for session in sessions {
        grouped.entry(session.date).or_default().push(session);
    }
    grouped
}

/// RPE x minutes for one session
pub fn session_load(session: &SessionRow) -> f64 {
    f64::from(session.rpe) * f64::from(session.duration_minutes)
}

/// Sum of session loads; multiple sessions on a day simply add up
pub fn raw_load(sessions: &[&SessionRow]) -> f64 {
    sessions.iter().map(|s| session_load(s)).sum()
}

/// Map a raw load onto the logarithmic 0-21 strain scale
///
/// strain = 7 * log2(1 + load / 100), so doubling volume adds a roughly
/// constant amount of strain rather than doubling it.
pub fn strain_from_load(load: f64) -> f64 {
    let value = strain::LOG_SCALE * (1.0 + load / strain::LOAD_DIVISOR).log2();
    value.clamp(strain::MIN, strain::MAX)
}

/// Strain for one day's sessions (0 when there are none)
pub fn daily_strain(sessions: &[&SessionRow]) -> f64 {
    if sessions.is_empty() {
        return 0.0;
    }
    strain_from_load(raw_load(sessions))
}
