// ABOUTME: Food catalog collaborator with built-in endurance foods and per-athlete custom items
// ABOUTME: Resolves the foods handed to the scheduler, falling back to a preferred endurance list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food catalog.
//!
//! Built-in items are shared by every athlete and cannot be deleted. Custom
//! items belong to the athlete that created them.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::FoodItem;

/// Names used when a plan selects no resolvable foods, in priority order
pub const PREFERRED_FALLBACK: [&str; 8] = [
    "Isotonic Drink 500ml",
    "Energy Gel 25",
    "Chews Serving",
    "Banana Medium",
    "Rice Cake Sports",
    "Coke Can 330ml",
    "Gummy Bears 40g",
    "Energy Gel Caffeine",
];

/// (name, category, serving, carbs g, sodium mg, fluid ml, caffeine mg)
type BuiltinRow = (&'static str, &'static str, &'static str, f64, f64, f64, f64);

const BUILTIN_ROWS: [BuiltinRow; 10] = [
    ("Energy Gel 25", "gel", "1 gel", 25.0, 120.0, 0.0, 0.0),
    ("Energy Gel Caffeine", "gel", "1 gel", 23.0, 90.0, 0.0, 50.0),
    ("Isotonic Drink 500ml", "drink", "500 ml bottle", 32.0, 420.0, 500.0, 0.0),
    ("Chews Serving", "chews", "1 pack", 30.0, 70.0, 0.0, 0.0),
    ("Gummy Bears 40g", "food", "40 g", 31.0, 10.0, 0.0, 0.0),
    ("Coke Can 330ml", "drink", "1 can", 35.0, 20.0, 330.0, 32.0),
    ("Banana Medium", "food", "1 banana", 27.0, 1.0, 0.0, 0.0),
    ("Rice Cake Sports", "food", "1 cake", 22.0, 110.0, 0.0, 0.0),
    ("Pizza Slice", "food", "1 slice", 36.0, 620.0, 0.0, 0.0),
    ("Salt Capsule", "supplement", "1 capsule", 0.0, 215.0, 0.0, 0.0),
];

/// Built-in catalog items with ids `1..=10`
#[must_use]
pub fn builtin_foods() -> Vec<FoodItem> {
    BUILTIN_ROWS
        .iter()
        .zip(1_u64..)
        .map(
            |(&(name, category, serving, carbs, sodium, fluid, caffeine), id)| FoodItem {
                id,
                name: name.to_owned(),
                category: category.to_owned(),
                serving_desc: serving.to_owned(),
                carbs_g: carbs,
                sodium_mg: sodium,
                fluid_ml: fluid,
                caffeine_mg: caffeine,
                is_builtin: true,
            },
        )
        .collect()
}

/// A custom food submitted by an athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFoodItem {
    /// Display name
    pub name: String,
    /// Category (gel, drink, chews, food, supplement, ...)
    pub category: String,
    /// Serving description
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
}

/// Which part of the catalog a listing covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodScope {
    /// Built-in items followed by the caller's custom items
    #[default]
    All,
    /// Built-in items only
    Builtin,
    /// The caller's custom items only
    Custom,
}

/// Catalog of foods available to the scheduler
#[async_trait]
pub trait FoodCatalog: Send + Sync {
    /// List foods visible to `athlete_id`; builtin first, then by name
    async fn list(&self, athlete_id: &str, scope: FoodScope) -> Vec<FoodItem>;

    /// Add a custom food owned by `athlete_id`
    ///
    /// # Errors
    ///
    /// Implementations may reject the item; the in-memory catalog never does
    async fn add_custom(&self, athlete_id: &str, food: NewFoodItem) -> AppResult<FoodItem>;

    /// Delete a custom food owned by `athlete_id`
    ///
    /// # Errors
    ///
    /// `PermissionDenied` for built-in items, `ResourceNotFound` for unknown ids
    /// or foods owned by another athlete
    async fn delete_custom(&self, athlete_id: &str, food_id: u64) -> AppResult<()>;

    /// Foods for a plan: the selected ids visible to the athlete in catalog
    /// order, or the preferred endurance fallback when none resolve
    async fn resolve_for_plan(&self, athlete_id: &str, selected_ids: &[u64]) -> Vec<FoodItem>;
}

struct CustomFood {
    owner: String,
    item: FoodItem,
}

/// Catalog holding custom foods in memory
pub struct InMemoryFoodCatalog {
    builtin: Vec<FoodItem>,
    custom: DashMap<u64, CustomFood>,
    next_id: AtomicU64,
}

impl Default for InMemoryFoodCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFoodCatalog {
    /// Catalog seeded with the built-in foods
    #[must_use]
    pub fn new() -> Self {
        let builtin = builtin_foods();
        let next_id = builtin.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            builtin,
            custom: DashMap::new(),
            next_id: AtomicU64::new(next_id),
        }
    }

    fn custom_for(&self, athlete_id: &str) -> Vec<FoodItem> {
        self.custom
            .iter()
            .filter(|entry| entry.owner == athlete_id)
            .map(|entry| entry.item.clone())
            .collect()
    }
}

/// Preferred endurance foods from `builtin`, or the first items by name if none match
#[must_use]
pub fn preferred_fallback(builtin: &[FoodItem]) -> Vec<FoodItem> {
    let preferred: Vec<FoodItem> = PREFERRED_FALLBACK
        .iter()
        .filter_map(|name| builtin.iter().find(|f| f.name == *name).cloned())
        .collect();
    if !preferred.is_empty() {
        return preferred;
    }
    let mut by_name = builtin.to_vec();
    sort_by_name(&mut by_name);
    by_name.truncate(PREFERRED_FALLBACK.len());
    by_name
}

fn sort_by_name(items: &mut [FoodItem]) {
    items.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl FoodCatalog for InMemoryFoodCatalog {
    async fn list(&self, athlete_id: &str, scope: FoodScope) -> Vec<FoodItem> {
        let mut builtin = match scope {
            FoodScope::All | FoodScope::Builtin => self.builtin.clone(),
            FoodScope::Custom => Vec::new(),
        };
        let mut custom = match scope {
            FoodScope::All | FoodScope::Custom => self.custom_for(athlete_id),
            FoodScope::Builtin => Vec::new(),
        };
        sort_by_name(&mut builtin);
        sort_by_name(&mut custom);
        builtin.extend(custom);
        builtin
    }

    async fn add_custom(&self, athlete_id: &str, food: NewFoodItem) -> AppResult<FoodItem> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let item = FoodItem {
            id,
            name: food.name.trim().to_owned(),
            category: food.category.trim().to_owned(),
            serving_desc: food.serving_desc.trim().to_owned(),
            carbs_g: food.carbs_g,
            sodium_mg: food.sodium_mg,
            fluid_ml: food.fluid_ml,
            caffeine_mg: food.caffeine_mg,
            is_builtin: false,
        };
        self.custom.insert(
            id,
            CustomFood {
                owner: athlete_id.to_owned(),
                item: item.clone(),
            },
        );
        debug!(athlete.id = %athlete_id, food.id = id, "Custom food added");
        Ok(item)
    }

    async fn delete_custom(&self, athlete_id: &str, food_id: u64) -> AppResult<()> {
        if self.builtin.iter().any(|f| f.id == food_id) {
            return Err(AppError::permission_denied(format!(
                "Food {food_id} is built in and cannot be deleted"
            )));
        }
        self.custom
            .remove_if(&food_id, |_, food| food.owner == athlete_id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Food {food_id}")))
    }

    async fn resolve_for_plan(&self, athlete_id: &str, selected_ids: &[u64]) -> Vec<FoodItem> {
        if !selected_ids.is_empty() {
            let mut resolved: Vec<FoodItem> = self
                .builtin
                .iter()
                .filter(|f| selected_ids.contains(&f.id))
                .cloned()
                .chain(
                    self.custom_for(athlete_id)
                        .into_iter()
                        .filter(|f| selected_ids.contains(&f.id)),
                )
                .collect();
            if !resolved.is_empty() {
                resolved.sort_by_key(|f| f.id);
                return resolved;
            }
        }
        preferred_fallback(&self.builtin)
    }
}
