// ABOUTME: Food catalog item and scheduled fueling action models
// ABOUTME: FoodItem is read-only reference data; FuelingAction is one schedule slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A food or drink that can be assigned to a fueling slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Catalog identifier
    #[serde(default)]
    pub id: u64,
    /// Display name
    pub name: String,
    /// Category (gel, drink, chews, food, supplement, ...)
    pub category: String,
    /// Serving description ("1 gel", "500 ml bottle")
    pub serving_desc: String,
    /// Carbohydrate per serving (g)
    pub carbs_g: f64,
    /// Sodium per serving (mg)
    pub sodium_mg: f64,
    /// Fluid per serving (ml)
    pub fluid_ml: f64,
    /// Caffeine per serving (mg)
    #[serde(default)]
    pub caffeine_mg: f64,
    /// Built-in catalog item (as opposed to athlete-defined)
    #[serde(default)]
    pub is_builtin: bool,
}

/// One scheduled fueling slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelingAction {
    /// Minutes from session start
    pub minute_offset: u32,
    /// Clock time (`HH:MM`) or relative marker (`T+15m`)
    pub display_time: String,
    /// Assigned food, or a generic placeholder
    pub food_name: String,
    /// Serving description
    pub serving: String,
    /// Carbohydrate (g)
    pub carbs_g: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
    /// Fluid (ml)
    pub fluid_ml: f64,
    /// Free-text guidance
    pub notes: String,
}
