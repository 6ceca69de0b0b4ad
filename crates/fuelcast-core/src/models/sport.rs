// ABOUTME: Sport type enumeration for fueling sessions
// ABOUTME: Closed set of supported sports with category predicates and threshold discipline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Enumeration of supported sport types
///
/// Every sport-gated branch in the engine matches on this enum exhaustively,
/// so adding a sport is a compile error until every table covers it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Road or track running
    Running,
    /// Road, gravel, or indoor cycling
    Cycling,
    /// Pool or open-water swimming
    Swimming,
    /// Hiking
    Hiking,
    /// Off-road running
    TrailRunning,
    /// Gym / strength session
    Gym,
    /// High-intensity interval training
    Hiit,
    /// Hyrox fitness race
    Hyrox,
}

/// Which set of profile thresholds (FTP, LT1/LT2) applies to a sport
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Bike thresholds (`bike_ftp_w`, `bike_lt1_hr_bpm`, `bike_lt2_hr_bpm`)
    Bike,
    /// Run thresholds (`run_ftp_w`, `run_lt1_hr_bpm`, `run_lt2_hr_bpm`, threshold pace)
    Run,
}

impl SportType {
    /// All supported sports, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Running,
        Self::Cycling,
        Self::Swimming,
        Self::Hiking,
        Self::TrailRunning,
        Self::Gym,
        Self::Hiit,
        Self::Hyrox,
    ];

    /// Wire name of the sport
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Hiking => "hiking",
            Self::TrailRunning => "trail_running",
            Self::Gym => "gym",
            Self::Hiit => "hiit",
            Self::Hyrox => "hyrox",
        }
    }

    /// Sports that get the flat endurance hydration bonus
    #[must_use]
    pub const fn is_endurance(&self) -> bool {
        match self {
            Self::Running | Self::Cycling | Self::TrailRunning | Self::Hyrox => true,
            Self::Swimming | Self::Hiking | Self::Gym | Self::Hiit => false,
        }
    }

    /// Sports with jostling or high core load that raise GI distress risk
    #[must_use]
    pub const fn is_gi_sensitive(&self) -> bool {
        match self {
            Self::Running | Self::TrailRunning | Self::Hyrox | Self::Hiit => true,
            Self::Cycling | Self::Swimming | Self::Hiking | Self::Gym => false,
        }
    }

    /// Threshold discipline used for heart-rate landmarks and pace
    ///
    /// Swimming, gym, and HIIT have no profile landmarks and fall back to
    /// max-HR ratios or raw perceived exertion.
    #[must_use]
    pub const fn threshold_discipline(&self) -> Option<Discipline> {
        match self {
            Self::Cycling => Some(Discipline::Bike),
            Self::Running | Self::TrailRunning | Self::Hiking | Self::Hyrox => {
                Some(Discipline::Run)
            }
            Self::Swimming | Self::Gym | Self::Hiit => None,
        }
    }

    /// Discipline whose FTP applies to power targets and power telemetry
    ///
    /// Hyrox is raced on ergometers and sleds, so it reads bike FTP.
    #[must_use]
    pub const fn power_discipline(&self) -> Option<Discipline> {
        match self {
            Self::Cycling | Self::Hyrox => Some(Discipline::Bike),
            Self::Running | Self::TrailRunning => Some(Discipline::Run),
            Self::Swimming | Self::Hiking | Self::Gym | Self::Hiit => None,
        }
    }

    /// Whether a pace target is meaningful for this sport
    #[must_use]
    pub const fn supports_pace(&self) -> bool {
        match self {
            Self::Running | Self::TrailRunning | Self::Hiking => true,
            Self::Cycling | Self::Swimming | Self::Gym | Self::Hiit | Self::Hyrox => false,
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sport| sport.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| AppError::invalid_input(format!("Unsupported sport: {s}")))
    }
}
