// ABOUTME: Inclusive validation ranges for profile, session, environment, food, and workout inputs
// ABOUTME: Shared by the HTTP boundary and the CLI before a request reaches the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// An inclusive `(min, max)` range
pub type Range = (f64, f64);

/// Athlete profile limits
pub mod profile {
    use super::Range;

    /// Body mass (kg); both ends are exclusive
    pub const BODY_MASS_KG: Range = (30.0, 180.0);
    /// Body fat (%)
    pub const BODY_FAT_PERCENT: Range = (3.0, 60.0);
    /// `VO2max` (ml/kg/min)
    pub const VO2MAX: Range = (20.0, 95.0);
    /// Lactate threshold (% of max)
    pub const LACTATE_THRESHOLD_PCT: Range = (60.0, 100.0);
    /// GI tolerance score
    pub const GI_TOLERANCE: Range = (0.0, 10.0);
    /// Sleep (hours)
    pub const SLEEP_HOURS: Range = (0.0, 14.0);
    /// HRV score
    pub const HRV_SCORE: Range = (0.0, 100.0);
    /// Sweat rate (L/h)
    pub const SWEAT_RATE_L_H: Range = (0.1, 4.0);
    /// Sodium concentration of sweat (mg/L)
    pub const SODIUM_LOSS_MG_L: Range = (200.0, 3000.0);
    /// Functional threshold power (W)
    pub const FTP_W: Range = (80.0, 600.0);
    /// Run threshold pace (s/km)
    pub const THRESHOLD_PACE_SEC_PER_KM: Range = (120.0, 600.0);
    /// First lactate threshold heart rate (bpm)
    pub const LT1_HR_BPM: Range = (80.0, 210.0);
    /// Second lactate threshold heart rate (bpm)
    pub const LT2_HR_BPM: Range = (90.0, 220.0);
    /// Maximum carbohydrate absorption (g/h)
    pub const MAX_CARB_ABSORPTION_G_H: Range = (40.0, 160.0);
    /// Gut training level
    pub const GUT_TRAINING_LEVEL: Range = (0.0, 10.0);
}

/// Session limits
pub mod session {
    use super::Range;

    /// Duration (minutes)
    pub const DURATION_MINUTES: (u32, u32) = (10, 1200);
    /// Perceived exertion
    pub const INTENSITY_RPE: Range = (1.0, 10.0);
    /// Average heart rate (bpm)
    pub const AVG_HEART_RATE_BPM: Range = (50.0, 230.0);
    /// Maximum heart rate (bpm)
    pub const MAX_HEART_RATE_BPM: Range = (80.0, 240.0);
    /// Average or normalized power (W)
    pub const POWER_WATTS: Range = (40.0, 700.0);
    /// Cadence (rpm or spm)
    pub const CADENCE: Range = (20.0, 250.0);
    /// Target heart rate (bpm)
    pub const TARGET_HEART_RATE_BPM: Range = (80.0, 230.0);
    /// Target pace (s/km)
    pub const TARGET_PACE_SEC_PER_KM: Range = (120.0, 900.0);
}

/// Environment limits
pub mod environment {
    use super::Range;

    /// Air temperature (°C)
    pub const TEMPERATURE_C: Range = (-20.0, 55.0);
    /// Relative humidity (%)
    pub const HUMIDITY_PCT: Range = (0.0, 100.0);
    /// Altitude (m)
    pub const ALTITUDE_M: Range = (-200.0, 6000.0);
    /// Terrain difficulty multiplier
    pub const TERRAIN_FACTOR: Range = (0.7, 1.8);
}

/// Custom food limits
pub mod food {
    use super::Range;

    /// Name length (characters)
    pub const NAME_LEN: (usize, usize) = (2, 80);
    /// Category length (characters)
    pub const CATEGORY_LEN: (usize, usize) = (2, 30);
    /// Serving description length (characters)
    pub const SERVING_LEN: (usize, usize) = (1, 60);
    /// Carbohydrate per serving (g)
    pub const CARBS_G: Range = (0.0, 200.0);
    /// Sodium per serving (mg)
    pub const SODIUM_MG: Range = (0.0, 5000.0);
    /// Fluid per serving (ml)
    pub const FLUID_ML: Range = (0.0, 1500.0);
    /// Caffeine per serving (mg)
    pub const CAFFEINE_MG: Range = (0.0, 500.0);
}

/// Logged workout limits
pub mod workout {
    use super::Range;

    /// Source label length (characters)
    pub const SOURCE_LEN: (usize, usize) = (1, 40);
    /// External id length (characters)
    pub const EXTERNAL_ID_LEN: (usize, usize) = (1, 128);
    /// Notes length (characters)
    pub const NOTES_LEN: (usize, usize) = (0, 2000);
    /// Perceived exertion
    pub const INTENSITY_RPE: Range = super::session::INTENSITY_RPE;
    /// Average heart rate (bpm)
    pub const AVG_HEART_RATE_BPM: Range = super::session::AVG_HEART_RATE_BPM;
    /// Maximum heart rate (bpm)
    pub const MAX_HEART_RATE_BPM: Range = super::session::MAX_HEART_RATE_BPM;
    /// Average or normalized power (W)
    pub const POWER_WATTS: Range = super::session::POWER_WATTS;
    /// Cadence (rpm or spm)
    pub const CADENCE: Range = super::session::CADENCE;
    /// Air temperature (°C)
    pub const TEMPERATURE_C: Range = super::environment::TEMPERATURE_C;
    /// Relative humidity (%)
    pub const HUMIDITY_PCT: Range = super::environment::HUMIDITY_PCT;
}

/// Per-workout fueling event limits
pub mod fueling_event {
    use super::Range;

    /// Minutes after the workout start
    pub const MINUTE_OFFSET: (u32, u32) = (0, 3000);
    /// Food name length (characters)
    pub const FOOD_NAME_LEN: (usize, usize) = (0, 80);
    /// Carbohydrate taken (g)
    pub const CARBS_G: Range = (0.0, 300.0);
    /// Fluid taken (ml)
    pub const FLUID_ML: Range = (0.0, 2000.0);
    /// Sodium taken (mg)
    pub const SODIUM_MG: Range = (0.0, 6000.0);
    /// Notes length (characters)
    pub const NOTES_LEN: (usize, usize) = (0, 2000);
}
