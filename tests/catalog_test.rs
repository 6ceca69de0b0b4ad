// ABOUTME: Integration tests for the in-memory food catalog
// ABOUTME: Listing scopes, custom food ownership, deletion rules, and plan resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fuelcast::catalog::{
    FoodCatalog, FoodScope, InMemoryFoodCatalog, NewFoodItem, PREFERRED_FALLBACK,
};
use fuelcast::errors::ErrorCode;

fn custom(name: &str, carbs_g: f64) -> NewFoodItem {
    NewFoodItem {
        name: format!("  {name} "),
        category: "food".to_owned(),
        serving_desc: "1 bar".to_owned(),
        carbs_g,
        sodium_mg: 80.0,
        fluid_ml: 0.0,
        caffeine_mg: 0.0,
    }
}

#[tokio::test]
async fn test_builtin_listing_sorted_by_name() {
    let catalog = InMemoryFoodCatalog::new();
    let names: Vec<String> = catalog
        .list("alice", FoodScope::Builtin)
        .await
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names.len(), 10);
    assert_eq!(names.first().map(String::as_str), Some("Banana Medium"));
    assert_eq!(names.last().map(String::as_str), Some("Salt Capsule"));
}

#[tokio::test]
async fn test_custom_food_is_private_to_owner() {
    let catalog = InMemoryFoodCatalog::new();
    let bar = catalog.add_custom("alice", custom("Oat Bar", 42.0)).await.unwrap();
    assert_eq!(bar.id, 11);
    assert_eq!(bar.name, "Oat Bar");
    assert!(!bar.is_builtin);

    let alice = catalog.list("alice", FoodScope::All).await;
    assert_eq!(alice.len(), 11);
    assert_eq!(alice.last().unwrap().id, bar.id);

    assert!(catalog.list("bob", FoodScope::Custom).await.is_empty());
    assert_eq!(catalog.list("alice", FoodScope::Custom).await.len(), 1);
}

#[tokio::test]
async fn test_ids_keep_increasing() {
    let catalog = InMemoryFoodCatalog::new();
    let first = catalog.add_custom("alice", custom("Oat Bar", 42.0)).await.unwrap();
    catalog.delete_custom("alice", first.id).await.unwrap();
    let second = catalog.add_custom("alice", custom("Date Bar", 38.0)).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_delete_rules() {
    let catalog = InMemoryFoodCatalog::new();
    let bar = catalog.add_custom("alice", custom("Oat Bar", 42.0)).await.unwrap();

    let builtin = catalog.delete_custom("alice", 1).await.unwrap_err();
    assert_eq!(builtin.code, ErrorCode::PermissionDenied);

    let foreign = catalog.delete_custom("bob", bar.id).await.unwrap_err();
    assert_eq!(foreign.code, ErrorCode::ResourceNotFound);

    catalog.delete_custom("alice", bar.id).await.unwrap();
    let gone = catalog.delete_custom("alice", bar.id).await.unwrap_err();
    assert_eq!(gone.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_resolve_selected_foods_in_id_order() {
    let catalog = InMemoryFoodCatalog::new();
    let bar = catalog.add_custom("alice", custom("Oat Bar", 42.0)).await.unwrap();
    let resolved = catalog.resolve_for_plan("alice", &[bar.id, 3, 1]).await;
    let ids: Vec<u64> = resolved.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 3, bar.id]);
}

#[tokio::test]
async fn test_resolve_falls_back_when_nothing_matches() {
    let catalog = InMemoryFoodCatalog::new();
    let bar = catalog.add_custom("alice", custom("Oat Bar", 42.0)).await.unwrap();

    // bob cannot select alice's food
    let resolved = catalog.resolve_for_plan("bob", &[bar.id, 999]).await;
    let names: Vec<&str> = resolved.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, PREFERRED_FALLBACK.to_vec());

    let empty = catalog.resolve_for_plan("bob", &[]).await;
    assert_eq!(empty.len(), PREFERRED_FALLBACK.len());
}
