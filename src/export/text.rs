use crate::models::{AllMetrics, DayProjection, ProjectionResult, RecoveryZone, RiskLevel, SafetyZone};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct TimelineRow {
    #[tabled(rename = "Day")]
    label: String,
    #[tabled(rename = "Weight (kg)")]
    weight: String,
    #[tabled(rename = "Carbs (g)")]
    carbs: String,
    #[tabled(rename = "Fibre (g)")]
    fibre: String,
    #[tabled(rename = "Sodium (mg)")]
    sodium: String,
    #[tabled(rename = "Fluid (ml)")]
    fluid: String,
    #[tabled(rename = "Actions")]
    actions: String,
}

impl From<&DayProjection> for TimelineRow {
    fn from(day: &DayProjection) -> Self {
        TimelineRow {
            label: day.label.clone(),
            weight: format!("{:.1}", day.projected_weight_kg),
            carbs: format!("{:.0}", day.carb_target_g),
            fibre: format!("{:.0}", day.fibre_target_g),
            sodium: format!("{:.0}", day.sodium_target_mg),
            fluid: format!("{:.0}", day.fluid_target_ml),
            actions: day.actions.join("\n"),
        }
    }
}

#[derive(Tabled)]
struct StrainRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Strain")]
    strain: String,
    #[tabled(rename = "Load")]
    load: String,
    #[tabled(rename = "Sessions")]
    sessions: usize,
}

fn paint(text: String, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).bold().to_string()
    } else {
        text
    }
}

fn safety_label(zone: SafetyZone, enabled: bool) -> String {
    let color = match zone {
        SafetyZone::Green => Color::Green,
        SafetyZone::Orange => Color::Yellow,
        SafetyZone::Red => Color::Red,
    };
    paint(zone.to_string().to_uppercase(), color, enabled)
}

fn recovery_label(zone: RecoveryZone, enabled: bool) -> String {
    let color = match zone {
        RecoveryZone::Green => Color::Green,
        RecoveryZone::Yellow => Color::Yellow,
        RecoveryZone::Red => Color::Red,
    };
    paint(zone.to_string().to_uppercase(), color, enabled)
}

fn risk_label(level: RiskLevel, enabled: bool) -> String {
    let color = match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::High => Color::Red,
    };
    paint(level.to_string().to_uppercase(), color, enabled)
}

/// Terminal report for a fight-week plan
pub fn render_plan(result: &ProjectionResult, athlete: Option<&str>, color: bool) -> String {
    let mut lines = Vec::new();

    let title = match athlete {
        Some(name) => format!("FIGHT WEEK PLAN: {}", name),
        None => "FIGHT WEEK PLAN".to_string(),
    };
    lines.push(paint(title, Color::Cyan, color));
    lines.push(String::new());

    lines.push(format!(
        "Total to cut:      {:.2} kg ({:.1}% BW)  {}",
        result.total_to_cut_kg,
        result.percent_bw,
        safety_label(result.overall_safety, color)
    ));
    lines.push(format!(
        "Diet mechanisms:   {:.2} kg (glycogen {:.2}, fibre {:.2}, sodium {:.2}, water loading {:.2})",
        result.diet_total_kg,
        result.glycogen_loss_kg,
        result.fibre_loss_kg,
        result.sodium_loss_kg,
        result.water_loading_loss_kg
    ));
    lines.push(format!(
        "Dehydration:       {:.2} kg ({:.1}% BW)  {}",
        result.dehydration_needed_kg,
        result.dehydration_percent_bw,
        safety_label(result.dehydration_safety, color)
    ));
    lines.push(format!("Max safe AWL:      {:.1} kg", result.max_safe_awl_kg));
    if result.sauna_sessions > 0 {
        lines.push(format!("Sauna sessions:    ~{}", result.sauna_sessions));
    }
    lines.push(String::new());

    let rows: Vec<TimelineRow> = result.timeline.iter().map(TimelineRow::from).collect();
    lines.push(Table::new(rows).with(Style::rounded()).to_string());

    lines.join("\n")
}

/// Terminal report for the recovery dashboard
pub fn render_metrics(metrics: &AllMetrics, color: bool) -> String {
    let mut lines = Vec::new();

    lines.push(paint("RECOVERY STATUS".to_string(), Color::Cyan, color));
    lines.push(String::new());

    lines.push(format!(
        "Recovery:          {:.0}/100  {}",
        metrics.recovery_score.score,
        recovery_label(metrics.recovery_score.status, color)
    ));
    lines.push(format!("Strain today:      {:.1} / 21", metrics.strain));
    lines.push(format!(
        "AC ratio:          {:.2} (acute {:.0}, chronic {:.0})",
        metrics.ac_ratio, metrics.acute_load, metrics.chronic_load
    ));
    lines.push(format!(
        "Overtraining risk: {}",
        risk_label(metrics.overtraining_risk.level, color)
    ));
    for factor in &metrics.overtraining_risk.factors {
        lines.push(format!("  - {}", factor));
    }
    lines.push(format!(
        "Sessions (7d):     {}   high-strain streak: {} days",
        metrics.weekly_session_count, metrics.consecutive_high_days
    ));
    lines.push(format!(
        "Sleep:             {:.1} h last, {:.1} h average",
        metrics.latest_sleep_hours, metrics.avg_sleep_hours
    ));
    lines.push(format!("Soreness:          {}/10", metrics.latest_soreness));
    lines.push(format!(
        "Tomorrow:          strain {:.1}, AC ratio {:.2}",
        metrics.forecast.predicted_strain, metrics.forecast.predicted_ac_ratio
    ));
    lines.push(String::new());

    let rows: Vec<StrainRow> = metrics
        .strain_history
        .iter()
        .map(|entry| StrainRow {
            date: entry.date.format("%a %d %b").to_string(),
            strain: format!("{:.1}", entry.strain),
            load: format!("{:.0}", entry.load),
            sessions: entry.session_count,
        })
        .collect();
    lines.push(Table::new(rows).with(Style::rounded()).to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fight_week::compute_fight_week_plan;
    use crate::models::{ProjectionInput, Sex};
    use crate::recovery::compute_all_metrics;
    use chrono::NaiveDate;

    #[test]
    fn test_plan_report_without_color() {
        let result = compute_fight_week_plan(&ProjectionInput {
            current_weight_kg: 80.0,
            target_weight_kg: 70.3,
            days_until_weigh_in: 7,
            sex: Sex::Male,
        });
        let report = render_plan(&result, Some("Jo"), false);

        assert!(report.starts_with("FIGHT WEEK PLAN: Jo"));
        assert!(report.contains("9.70 kg (12.1% BW)  RED"));
        assert!(report.contains("Sauna sessions:    ~11"));
        assert!(report.contains("6 Days Out"));
        assert!(report.contains("Weigh-In Day"));
        assert!(!report.contains('\u{1b}'));
    }

    #[test]
    fn test_metrics_report_lists_history() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let metrics = compute_all_metrics(&[], today);
        let report = render_metrics(&metrics, false);

        assert!(report.contains("Recovery:          100/100  GREEN"));
        assert!(report.contains("Overtraining risk: LOW"));
        assert!(report.contains("Tomorrow:          strain 0.0, AC ratio 1.00"));
        assert!(report.contains("Sun 10 Mar"));
    }
}
