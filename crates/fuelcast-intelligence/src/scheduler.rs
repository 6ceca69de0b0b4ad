// ABOUTME: Fueling scheduler slicing a session into slots and matching foods to slot targets
// ABOUTME: Slot 0 is the pre-start meal; later slots take the closest catalog item or a macro mix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, FixedOffset};
use fuelcast_core::models::{FoodItem, FuelingAction, SessionContext, StrategyRecommendation};

use crate::config::ScheduleConfig;
use crate::numeric::round_to;

/// Label of the slot-0 action
pub const PRE_START_MEAL: &str = "Pre-start carb meal";
/// Label of the placeholder used when no foods are available
pub const MACRO_MIX: &str = "Carb mix + drink";

/// Per-slot share of the balanced hourly targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTargets {
    /// Carbohydrate (g)
    pub carbs_g: f64,
    /// Fluid (ml)
    pub fluid_ml: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
}

impl SlotTargets {
    /// Split hourly rates into one slot's share
    #[must_use]
    pub fn from_hourly(balanced: &StrategyRecommendation, config: &ScheduleConfig) -> Self {
        let slots_per_hour = config.slots_per_hour();
        Self {
            carbs_g: balanced.carbs_g_per_hour / slots_per_hour,
            fluid_ml: balanced.hydration_ml_per_hour / slots_per_hour,
            sodium_mg: balanced.sodium_mg_per_hour / slots_per_hour,
        }
    }
}

/// Slot offsets: 0, every `slot_minutes` up to the duration, and the duration itself
#[must_use]
pub fn slot_offsets(duration_minutes: u32, slot_minutes: u32) -> Vec<u32> {
    let step = usize::try_from(slot_minutes.max(1)).unwrap_or(usize::MAX);
    let mut offsets: Vec<u32> = (0..=duration_minutes).step_by(step).collect();
    if offsets.last() != Some(&duration_minutes) {
        offsets.push(duration_minutes);
    }
    offsets
}

/// Clock time for a slot: `HH:MM` from the planned start, otherwise `T+{m}m`
#[must_use]
pub fn format_clock(planned_start: Option<&DateTime<FixedOffset>>, offset_minutes: u32) -> String {
    planned_start
        .and_then(|start| start.checked_add_signed(Duration::minutes(i64::from(offset_minutes))))
        .map_or_else(
            || format!("T+{offset_minutes}m"),
            |time| time.format("%H:%M").to_string(),
        )
}

/// Food closest to the slot targets; the first item wins ties
#[must_use]
pub fn best_food<'a>(
    foods: &'a [FoodItem],
    targets: &SlotTargets,
    config: &ScheduleConfig,
) -> Option<&'a FoodItem> {
    let mut best: Option<(&FoodItem, f64)> = None;
    for food in foods {
        let score = (food.carbs_g - targets.carbs_g).abs() * config.carb_weight
            + (food.fluid_ml - targets.fluid_ml).abs() * config.fluid_weight
            + (food.sodium_mg - targets.sodium_mg).abs() * config.sodium_weight;
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((food, score));
        }
    }
    best.map(|(food, _)| food)
}

/// Build the fueling schedule from the balanced recommendation
#[must_use]
pub fn build_schedule(
    session: &SessionContext,
    balanced: &StrategyRecommendation,
    foods: &[FoodItem],
    config: &ScheduleConfig,
) -> Vec<FuelingAction> {
    let targets = SlotTargets::from_hourly(balanced, config);
    let planned_start = session.planned_start.as_ref();

    slot_offsets(session.duration_minutes, config.slot_minutes)
        .into_iter()
        .map(|minute| {
            let display_time = format_clock(planned_start, minute);
            if minute == 0 {
                return FuelingAction {
                    minute_offset: 0,
                    display_time,
                    food_name: PRE_START_MEAL.to_owned(),
                    serving: format!("{:.0} g carbs total", balanced.pre_workout_carbs_g),
                    carbs_g: round_to(balanced.pre_workout_carbs_g, 1),
                    sodium_mg: round_to(targets.sodium_mg, 0),
                    fluid_ml: round_to(targets.fluid_ml, 0),
                    notes: "Finish 25-40 min before start.".to_owned(),
                };
            }
            match best_food(foods, &targets, config) {
                Some(food) => FuelingAction {
                    minute_offset: minute,
                    display_time,
                    food_name: food.name.clone(),
                    serving: food.serving_desc.clone(),
                    carbs_g: round_to(food.carbs_g, 1),
                    sodium_mg: round_to(food.sodium_mg, 0),
                    fluid_ml: round_to(food.fluid_ml, 0),
                    notes: format!(
                        "Target this around every {} min. Slot target: {:.1} g carbs.",
                        config.slot_minutes, targets.carbs_g
                    ),
                },
                None => FuelingAction {
                    minute_offset: minute,
                    display_time,
                    food_name: MACRO_MIX.to_owned(),
                    serving: "Custom".to_owned(),
                    carbs_g: round_to(targets.carbs_g, 1),
                    sodium_mg: round_to(targets.sodium_mg, 0),
                    fluid_ml: round_to(targets.fluid_ml, 0),
                    notes: "No foods selected; using macro slot targets.".to_owned(),
                },
            }
        })
        .collect()
}
