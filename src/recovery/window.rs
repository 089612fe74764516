//! Rolling-window statistics over the trailing 28 days
//!
//! All windows are anchored on an explicit `today`; offset 0 is today,
//! offset 1 yesterday and so on. Sessions outside the window are ignored.

use super::load::{daily_strain, group_by_date, raw_load, strain_from_load, SessionsByDate};
use crate::constants::{overtraining, strain, window};
use crate::models::{DailyStrainEntry, Forecast, SessionRow};
use chrono::{Days, NaiveDate};

/// A 28-day view of session history ending on `today`
pub struct TrainingWindow<'a> {
    today: NaiveDate,
    by_date: SessionsByDate<'a>,
}

impl<'a> TrainingWindow<'a> {
    pub fn new(sessions: &'a [SessionRow], today: NaiveDate) -> Self {
        TrainingWindow {
            today,
            by_date: group_by_date(sessions),
        }
    }

    /// Calendar day `offset` days before today
    fn day(&self, offset: usize) -> Option<NaiveDate> {
        self.today.checked_sub_days(Days::new(offset as u64))
    }

    /// Sessions logged `offset` days before today, in input order
    pub fn sessions_on(&self, offset: usize) -> &[&'a SessionRow] {
        self.day(offset)
            .and_then(|date| self.by_date.get(&date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All sessions in the last `days` days, newest day first
    fn sessions_in_last(&self, days: usize) -> impl Iterator<Item = &'a SessionRow> + '_ {
        (0..days).flat_map(move |offset| self.sessions_on(offset).iter().copied())
    }

    pub fn load_on(&self, offset: usize) -> f64 {
        raw_load(self.sessions_on(offset))
    }

    pub fn strain_on(&self, offset: usize) -> f64 {
        daily_strain(self.sessions_on(offset))
    }

    /// 28 daily loads, oldest first, missing days as zero
    pub fn daily_loads(&self) -> Vec<f64> {
        (0..window::CHRONIC_DAYS)
            .rev()
            .map(|offset| self.load_on(offset))
            .collect()
    }

    /// Sum of the last 7 daily loads
    pub fn acute_load(&self) -> f64 {
        (0..window::ACUTE_DAYS).map(|offset| self.load_on(offset)).sum()
    }

    /// Average weekly load over the last 4 weeks
    pub fn chronic_load(&self) -> f64 {
        self.daily_loads().iter().sum::<f64>() / window::CHRONIC_WEEKS
    }

    /// Acute load over chronic load, or 1.0 with no chronic load
    pub fn acute_chronic_ratio(&self) -> f64 {
        let chronic = self.chronic_load();
        if chronic > 0.0 {
            self.acute_load() / chronic
        } else {
            window::DEFAULT_AC_RATIO
        }
    }

    /// Tomorrow's strain and AC ratio if the last 3 days' average load repeats
    ///
    /// The window slides forward one day: the oldest day drops out of both
    /// the acute and chronic sums and the predicted load is added to each.
    pub fn forecast(&self) -> Forecast {
        let predicted_load = (0..window::FORECAST_AVERAGE_DAYS)
            .map(|offset| self.load_on(offset))
            .sum::<f64>()
            / window::FORECAST_AVERAGE_DAYS as f64;

        let acute: f64 = (0..window::ACUTE_DAYS - 1).map(|offset| self.load_on(offset)).sum();
        let chronic: f64 = (0..window::CHRONIC_DAYS - 1).map(|offset| self.load_on(offset)).sum();
        let predicted_chronic = (chronic + predicted_load) / window::CHRONIC_WEEKS;

        let predicted_ac_ratio = if predicted_chronic > 0.0 {
            (acute + predicted_load) / predicted_chronic
        } else {
            window::DEFAULT_AC_RATIO
        };

        Forecast {
            predicted_strain: strain_from_load(predicted_load),
            predicted_ac_ratio,
        }
    }

    /// Run of days ending today with strain above the high threshold
    pub fn consecutive_high_strain_days(&self) -> usize {
        (0..window::CHRONIC_DAYS)
            .take_while(|&offset| self.strain_on(offset) > strain::HIGH_THRESHOLD)
            .count()
    }

    /// First recorded value found looking back from today
    fn latest_recorded<T>(&self, pick: impl Fn(&SessionRow) -> Option<T>) -> Option<T> {
        (0..window::LOOKBACK_DAYS)
            .find_map(|offset| self.sessions_on(offset).iter().find_map(|s| pick(*s)))
    }

    /// Most recent non-zero sleep within 3 days, else 8h
    pub fn latest_sleep(&self) -> f64 {
        self.latest_recorded(|s| (s.sleep_hours > 0.0).then_some(s.sleep_hours))
            .unwrap_or(window::DEFAULT_SLEEP_HOURS)
    }

    /// Most recent non-zero soreness within 3 days, else 0
    pub fn latest_soreness(&self) -> u8 {
        self.latest_recorded(|s| (s.soreness_level > 0).then_some(s.soreness_level))
            .unwrap_or(0)
    }

    /// Mean reported soreness over the last 7 days, ignoring unreported rows
    pub fn soreness_trend(&self) -> f64 {
        let reported: Vec<f64> = self
            .sessions_in_last(window::ACUTE_DAYS)
            .filter(|s| s.soreness_level > 0)
            .map(|s| f64::from(s.soreness_level))
            .collect();

        if reported.is_empty() {
            return 0.0;
        }
        reported.iter().sum::<f64>() / reported.len() as f64
    }

    /// Sessions at RPE 8+ in the last 7 days
    pub fn high_rpe_count(&self) -> usize {
        self.sessions_in_last(window::ACUTE_DAYS)
            .filter(|s| s.rpe >= overtraining::HIGH_RPE)
            .count()
    }

    /// Every session in the last 7 days, several per day counted separately
    pub fn weekly_session_count(&self) -> usize {
        self.sessions_in_last(window::ACUTE_DAYS).count()
    }

    /// Last 7 days of sessions, newest first, capped for the AI payload
    pub fn recent_sessions(&self) -> Vec<SessionRow> {
        self.sessions_in_last(window::ACUTE_DAYS)
            .take(window::RECENT_SESSION_LIMIT)
            .cloned()
            .collect()
    }

    /// Daily strain for the last 7 days, oldest first
    pub fn strain_history(&self) -> Vec<DailyStrainEntry> {
        (0..window::ACUTE_DAYS)
            .rev()
            .filter_map(|offset| {
                let date = self.day(offset)?;
                let sessions = self.sessions_on(offset);
                Some(DailyStrainEntry {
                    date,
                    strain: daily_strain(sessions),
                    load: raw_load(sessions),
                    session_count: sessions.len(),
                })
            })
            .collect()
    }
}

/// Mean sleep over every session with sleep logged, 0 when none
pub fn average_sleep(sessions: &[SessionRow]) -> f64 {
    let logged: Vec<f64> = sessions
        .iter()
        .filter(|s| s.sleep_hours > 0.0)
        .map(|s| s.sleep_hours)
        .collect();

    if logged.is_empty() {
        return 0.0;
    }
    logged.iter().sum::<f64>() / logged.len() as f64
}

/// Acute:chronic workload ratio for a session history ending on `today`
pub fn acute_chronic_ratio(sessions: &[SessionRow], today: NaiveDate) -> f64 {
    TrainingWindow::new(sessions, today).acute_chronic_ratio()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intensity;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
    }

    fn session(id: &str, days_ago: u64, rpe: u8, minutes: u32) -> SessionRow {
        SessionRow {
            id: id.to_string(),
            date: today() - Days::new(days_ago),
            session_type: "Sparring".to_string(),
            duration_minutes: minutes,
            rpe,
            intensity: Intensity::High,
            soreness_level: 0,
            sleep_hours: 0.0,
        }
    }

    #[test]
    fn test_empty_history_defaults() {
        let sessions: Vec<SessionRow> = Vec::new();
        let window = TrainingWindow::new(&sessions, today());

        assert_eq!(window.acute_chronic_ratio(), 1.0);
        assert_eq!(window.consecutive_high_strain_days(), 0);
        assert_eq!(window.latest_sleep(), 8.0);
        assert_eq!(window.latest_soreness(), 0);
        assert_eq!(window.soreness_trend(), 0.0);
        assert_eq!(window.weekly_session_count(), 0);
        assert_eq!(window.daily_loads(), vec![0.0; 28]);
        assert_eq!(acute_chronic_ratio(&sessions, today()), 1.0);
    }

    #[test]
    fn test_daily_loads_oldest_first() {
        let sessions = vec![session("old", 27, 5, 10), session("new", 0, 5, 20)];
        let loads = TrainingWindow::new(&sessions, today()).daily_loads();

        assert_eq!(loads.len(), 28);
        assert_eq!(loads[0], 50.0);
        assert_eq!(loads[27], 100.0);
    }

    #[test]
    fn test_ac_ratio_steady_training() {
        // Same load every day for 28 days -> acute equals the average week
        let sessions: Vec<SessionRow> = (0..28)
            .map(|d| session(&format!("s{}", d), d, 5, 60))
            .collect();
        let window = TrainingWindow::new(&sessions, today());

        assert!((window.acute_load() - 7.0 * 300.0).abs() < 1e-9);
        assert!((window.chronic_load() - 7.0 * 300.0).abs() < 1e-9);
        assert!((window.acute_chronic_ratio() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sessions_outside_window_are_ignored() {
        let mut future = session("future", 0, 9, 90);
        future.date = today() + Days::new(1);
        let sessions = vec![session("ancient", 40, 9, 90), future];
        let window = TrainingWindow::new(&sessions, today());

        assert_eq!(window.acute_chronic_ratio(), 1.0);
        assert_eq!(window.weekly_session_count(), 0);
    }

    #[test]
    fn test_consecutive_high_strain_days() {
        // load 500 -> strain 7*log2(6) ~ 18.1; load 200 -> ~11.1
        let sessions = vec![
            session("t0", 0, 10, 50),
            session("t1", 1, 10, 50),
            session("t2", 2, 5, 40),
            session("t3", 3, 10, 50),
        ];
        let window = TrainingWindow::new(&sessions, today());
        assert_eq!(window.consecutive_high_strain_days(), 2);

        let rest_today = vec![session("t1", 1, 10, 50)];
        let window = TrainingWindow::new(&rest_today, today());
        assert_eq!(window.consecutive_high_strain_days(), 0);
    }

    #[test]
    fn test_latest_sleep_and_soreness_lookback() {
        let mut yesterday = session("y", 1, 6, 60);
        yesterday.sleep_hours = 6.5;
        yesterday.soreness_level = 4;
        let mut too_old = session("old", 3, 6, 60);
        too_old.sleep_hours = 9.0;
        too_old.soreness_level = 7;

        let sessions = vec![session("today", 0, 6, 60), yesterday, too_old.clone()];
        let window = TrainingWindow::new(&sessions, today());
        assert_eq!(window.latest_sleep(), 6.5);
        assert_eq!(window.latest_soreness(), 4);

        let only_old = vec![too_old];
        let window = TrainingWindow::new(&only_old, today());
        assert_eq!(window.latest_sleep(), 8.0);
        assert_eq!(window.latest_soreness(), 0);
    }

    #[test]
    fn test_weekly_counts() {
        let mut sore = session("a", 0, 8, 60);
        sore.soreness_level = 6;
        let mut mild = session("b", 0, 9, 30);
        mild.soreness_level = 2;
        let sessions = vec![
            sore,
            mild,
            session("c", 3, 4, 60),
            session("d", 6, 8, 60),
            session("e", 7, 10, 60),
        ];
        let window = TrainingWindow::new(&sessions, today());

        assert_eq!(window.weekly_session_count(), 4);
        assert_eq!(window.high_rpe_count(), 3);
        assert!((window.soreness_trend() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_recent_sessions_newest_first_and_capped() {
        let sessions: Vec<SessionRow> = (0..20)
            .map(|i| session(&format!("s{}", i), (i % 7) as u64, 5, 30))
            .collect();
        let recent = TrainingWindow::new(&sessions, today()).recent_sessions();

        assert_eq!(recent.len(), 15);
        assert_eq!(recent[0].id, "s0");
        assert_eq!(recent[1].id, "s7");
        assert_eq!(recent[2].id, "s14");
        assert!(recent.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_forecast_without_history() {
        let sessions: Vec<SessionRow> = Vec::new();
        let forecast = TrainingWindow::new(&sessions, today()).forecast();

        assert_eq!(forecast.predicted_strain, 0.0);
        assert_eq!(forecast.predicted_ac_ratio, 1.0);
    }

    #[test]
    fn test_forecast_repeats_recent_average() {
        // 720 today, nothing before -> 240 predicted for tomorrow
        let sessions = vec![session("today", 0, 8, 90)];
        let forecast = TrainingWindow::new(&sessions, today()).forecast();

        assert!((forecast.predicted_strain - 7.0 * 3.4f64.log2()).abs() < 1e-9);
        // (720 + 240) acute over (720 + 240) / 4 chronic
        assert!((forecast.predicted_ac_ratio - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_drops_oldest_day() {
        // a session 6 days ago leaves the acute window tomorrow,
        // one 27 days ago leaves the chronic window
        let sessions = vec![session("acute", 6, 5, 60), session("chronic", 27, 5, 60)];
        let forecast = TrainingWindow::new(&sessions, today()).forecast();

        assert_eq!(forecast.predicted_strain, 0.0);
        // chronic keeps the 300 from 6 days ago, acute has nothing left
        assert_eq!(forecast.predicted_ac_ratio, 0.0);

        let steady: Vec<SessionRow> = (0..28)
            .map(|d| session(&format!("s{}", d), d, 5, 60))
            .collect();
        let forecast = TrainingWindow::new(&steady, today()).forecast();
        assert!((forecast.predicted_ac_ratio - 1.0).abs() < 1e-9);
        assert!((forecast.predicted_strain - strain_from_load(300.0)).abs() < 1e-9);
    }

    #[test]
    fn test_strain_history() {
        let sessions = vec![session("a", 0, 5, 20), session("b", 0, 5, 20), session("c", 6, 5, 20)];
        let history = TrainingWindow::new(&sessions, today()).strain_history();

        assert_eq!(history.len(), 7);
        assert_eq!(history[0].date, today() - Days::new(6));
        assert_eq!(history[0].session_count, 1);
        assert_eq!(history[6].date, today());
        assert_eq!(history[6].load, 200.0);
        assert_eq!(history[6].session_count, 2);
        assert!((history[6].strain - 7.0 * 3f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_average_sleep() {
        assert_eq!(average_sleep(&[]), 0.0);

        let mut a = session("a", 0, 5, 20);
        a.sleep_hours = 7.0;
        let mut b = session("b", 10, 5, 20);
        b.sleep_hours = 8.0;
        let c = session("c", 2, 5, 20);
        assert!((average_sleep(&[a, b, c]) - 7.5).abs() < 1e-9);
    }
}
