use chrono::{Days, NaiveDate};
use fightcamp::fight_week::components;
use fightcamp::recovery::{recovery_score, strain_from_load};
use fightcamp::{
    compute_all_metrics, compute_fight_week_plan, Intensity, ProjectionInput, SessionRow, Sex,
};
use proptest::prelude::*;

fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

fn input_strategy() -> impl Strategy<Value = ProjectionInput> {
    (45.0..130.0f64, 0.0..15.0f64, 1u32..=14, sex_strategy()).prop_map(
        |(current, cut, days, sex)| ProjectionInput {
            current_weight_kg: current,
            target_weight_kg: current - cut,
            days_until_weigh_in: days,
            sex,
        },
    )
}

fn session_strategy() -> impl Strategy<Value = SessionRow> {
    (0u64..35, 10u32..180, 1u8..=10, 0u8..=10, 0.0..10.0f64).prop_map(
        |(days_ago, minutes, rpe, soreness, sleep)| SessionRow {
            id: format!("{}-{}-{}", days_ago, minutes, rpe),
            date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap() - Days::new(days_ago),
            session_type: "Boxing".to_string(),
            duration_minutes: minutes,
            rpe,
            intensity: Intensity::High,
            soreness_level: soreness,
            sleep_hours: sleep,
        },
    )
}

proptest! {
    #[test]
    fn timeline_never_increases_and_ends_on_target(input in input_strategy()) {
        let result = compute_fight_week_plan(&input);
        let timeline = &result.timeline;

        prop_assert_eq!(timeline.len(), input.days_until_weigh_in as usize);
        for pair in timeline.windows(2) {
            prop_assert!(pair[0].projected_weight_kg >= pair[1].projected_weight_kg);
        }
        prop_assert_eq!(
            timeline.last().map(|d| d.projected_weight_kg),
            Some(input.target_weight_kg)
        );
    }

    #[test]
    fn component_losses_respect_caps(bodyweight in 30.0..250.0f64, days in 0u32..30) {
        prop_assert!(components::glycogen_depletion(bodyweight, days) <= 2.5);
        prop_assert!(components::fibre_reduction(bodyweight, days) <= 1.0);
        prop_assert!(components::sodium_manipulation(bodyweight, days) <= 1.0);
        prop_assert!(components::water_loading_benefit(bodyweight, days) >= 0.0);
    }

    #[test]
    fn dehydration_covers_what_diet_cannot(input in input_strategy()) {
        let result = compute_fight_week_plan(&input);

        prop_assert!(result.dehydration_needed_kg >= 0.0);
        prop_assert!(result.dehydration_needed_kg <= result.total_to_cut_kg + 0.01);
        if result.total_to_cut_kg == 0.0 {
            prop_assert_eq!(result.sauna_sessions, 0);
        }
    }

    #[test]
    fn recovery_score_stays_in_bounds(
        sleep in 0.0..14.0f64,
        soreness in 0.0..=10.0f64,
        ratio in 0.0..6.0f64,
        streak in 0usize..40,
    ) {
        let status = recovery_score(sleep, soreness, ratio, streak);
        prop_assert!((0.0..=100.0).contains(&status.score));
    }

    #[test]
    fn strain_stays_in_bounds(load in 0.0..100_000.0f64) {
        let strain = strain_from_load(load);
        prop_assert!((0.0..=21.0).contains(&strain));
    }

    #[test]
    fn engines_are_idempotent(
        input in input_strategy(),
        sessions in prop::collection::vec(session_strategy(), 0..40),
    ) {
        prop_assert_eq!(compute_fight_week_plan(&input), compute_fight_week_plan(&input));

        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let metrics = compute_all_metrics(&sessions, today);
        prop_assert_eq!(&metrics, &compute_all_metrics(&sessions, today));

        prop_assert!((0.0..=21.0).contains(&metrics.strain));
        prop_assert!((0.0..=100.0).contains(&metrics.recovery_score.score));
        prop_assert!(metrics.recent_sessions.len() <= 15);
        prop_assert!((0.0..=21.0).contains(&metrics.forecast.predicted_strain));
        prop_assert!(metrics.forecast.predicted_ac_ratio >= 0.0);
    }
}
