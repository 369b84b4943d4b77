//! Core domain types for the Caltrack system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Biometrics and BMI categories
//! - Daily goals and logged intake entries
//! - Aggregated totals and per-dimension remaining budgets
//! - Progress records for trend display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

// ============================================================================
// Biometric Types
// ============================================================================

/// Self-reported gender (informational only, never used in calculations)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(label)
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "o" => Ok(Gender::Other),
            _ => Err(Error::Parse(format!("unknown gender: {}", s))),
        }
    }
}

/// Personal measurements entered by the user
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Biometrics {
    pub age: u8,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// BMI classification bands
///
/// Lean: bmi < 18.5, Healthy: 18.5 <= bmi < 25, Fat: bmi >= 25
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Lean,
    Healthy,
    Fat,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Lean => "Lean",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Fat => "Fat",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Goals and Intake
// ============================================================================

/// Daily calorie and macro goals
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goals {
    pub calories: u32,
    pub carbs_g: u32,
    pub protein_g: u32,
    pub fat_g: u32,
}

/// Whether a logged item was eaten or drunk
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakeKind {
    Food,
    Drink,
}

impl fmt::Display for IntakeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeKind::Food => f.write_str("Food"),
            IntakeKind::Drink => f.write_str("Drink"),
        }
    }
}

impl FromStr for IntakeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(IntakeKind::Food),
            "drink" => Ok(IntakeKind::Drink),
            _ => Err(Error::Parse(format!("unknown intake type: {}", s))),
        }
    }
}

/// A single logged food or drink item
///
/// Entries are immutable once added to a ledger. The item name may be empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IntakeEntry {
    pub kind: IntakeKind,
    pub item: String,
    pub calories: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

/// Sum of calories and macros across a set of intake entries
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl MacroTotals {
    /// All-zero totals
    pub fn zero() -> Self {
        Self::default()
    }

    /// Consumed amount for one tracked dimension
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Calories => self.calories,
            Dimension::Carbohydrates => self.carbs_g,
            Dimension::Protein => self.protein_g,
            Dimension::Fat => self.fat_g,
        }
    }
}

impl From<&IntakeEntry> for MacroTotals {
    fn from(entry: &IntakeEntry) -> Self {
        MacroTotals {
            calories: entry.calories,
            carbs_g: entry.carbs_g,
            protein_g: entry.protein_g,
            fat_g: entry.fat_g,
        }
    }
}

impl std::ops::Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, other: MacroTotals) -> MacroTotals {
        MacroTotals {
            calories: self.calories + other.calories,
            carbs_g: self.carbs_g + other.carbs_g,
            protein_g: self.protein_g + other.protein_g,
            fat_g: self.fat_g + other.fat_g,
        }
    }
}

impl std::iter::Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroTotals::zero(), |acc, t| acc + t)
    }
}

// ============================================================================
// Goal Evaluation Types
// ============================================================================

/// A tracked dimension, in the fixed evaluation order
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Calories,
    Carbohydrates,
    Protein,
    Fat,
}

impl Dimension {
    /// All dimensions in evaluation order
    pub const ALL: [Dimension; 4] = [
        Dimension::Calories,
        Dimension::Carbohydrates,
        Dimension::Protein,
        Dimension::Fat,
    ];

    pub fn unit(&self) -> &'static str {
        match self {
            Dimension::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dimension::Calories => "Calories",
            Dimension::Carbohydrates => "Carbohydrates",
            Dimension::Protein => "Protein",
            Dimension::Fat => "Fat",
        };
        f.write_str(label)
    }
}

/// Goal, consumption and what is left for one dimension
///
/// `remaining` is always `goal_value - consumed` and may be negative.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct RemainingBudget {
    pub dimension: Dimension,
    pub goal_value: u32,
    pub consumed: f64,
    pub remaining: f64,
}

// ============================================================================
// Progress Types
// ============================================================================

/// One appended day of calorie progress
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressRecord {
    /// 1-based, assigned in append order
    pub day: u32,
    pub total_calories: f64,
    pub goal_calories: u32,
    pub recorded_at: DateTime<Utc>,
}
