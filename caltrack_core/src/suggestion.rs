//! Suggestion engine for closing the gap between intake and goals.
//!
//! The Calories budget selects the branch:
//! - Over the calorie goal: one exercise suggestion (minutes of running)
//! - Otherwise: one food suggestion per macro that is still short of its goal

use crate::goals::budget_for;
use crate::{Dimension, RemainingBudget};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many running minutes burn a block of calories
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRate {
    pub kcal_per_block: f64,
    pub minutes_per_block: u32,
}

impl Default for ExerciseRate {
    fn default() -> Self {
        Self {
            kcal_per_block: 500.0,
            minutes_per_block: 10,
        }
    }
}

impl ExerciseRate {
    /// Whole blocks of excess only: 499 kcal over is 0 minutes
    ///
    /// Saturates at `u32::MAX` for absurdly large excesses.
    pub fn minutes_for(&self, excess_kcal: f64) -> u32 {
        let blocks = (excess_kcal.abs() / self.kcal_per_block).floor();
        // float-to-int `as` saturates; the multiply must too
        (blocks as u32).saturating_mul(self.minutes_per_block)
    }
}

/// A macronutrient that can receive a food suggestion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
    Carbohydrates,
    Protein,
    Fat,
}

/// One way of covering a deficit: `deficit / divisor` units of some food
#[derive(Clone, Copy, Debug)]
struct FoodEquivalent {
    divisor: f64,
    unit: &'static str,
}

impl Macro {
    pub const ALL: [Macro; 3] = [Macro::Carbohydrates, Macro::Protein, Macro::Fat];

    /// Lenient name lookup; unknown names yield `None`
    pub fn parse(name: &str) -> Option<Macro> {
        match name.trim().to_lowercase().as_str() {
            "carbohydrates" | "carbohydrate" | "carbs" => Some(Macro::Carbohydrates),
            "protein" => Some(Macro::Protein),
            "fat" => Some(Macro::Fat),
            _ => None,
        }
    }

    pub fn from_dimension(dimension: Dimension) -> Option<Macro> {
        match dimension {
            Dimension::Carbohydrates => Some(Macro::Carbohydrates),
            Dimension::Protein => Some(Macro::Protein),
            Dimension::Fat => Some(Macro::Fat),
            Dimension::Calories => None,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Macro::Carbohydrates => Dimension::Carbohydrates,
            Macro::Protein => Dimension::Protein,
            Macro::Fat => Dimension::Fat,
        }
    }

    fn goal_label(&self) -> &'static str {
        match self {
            Macro::Carbohydrates => "carbohydrate",
            Macro::Protein => "protein",
            Macro::Fat => "fat",
        }
    }

    fn equivalents(&self) -> [FoodEquivalent; 2] {
        match self {
            Macro::Protein => [
                FoodEquivalent { divisor: 6.0, unit: "eggs" },
                FoodEquivalent { divisor: 31.0, unit: "grams of chicken" },
            ],
            Macro::Carbohydrates => [
                FoodEquivalent { divisor: 30.0, unit: "grams of rice" },
                FoodEquivalent { divisor: 12.0, unit: "grams of bread" },
            ],
            Macro::Fat => [
                FoodEquivalent { divisor: 9.0, unit: "grams of avocado" },
                FoodEquivalent { divisor: 14.0, unit: "nuts" },
            ],
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dimension(), f)
    }
}

/// An actionable suggestion derived from a remaining budget
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    /// Burn off calories eaten beyond the goal
    Exercise { excess_kcal: f64, minutes: u32 },
    /// Eat more of something to reach a macro goal
    Food { nutrient: Macro, deficit: f64 },
}

impl Suggestion {
    /// Serving amounts for a food suggestion, in (amount, unit) pairs
    pub fn servings(&self) -> Vec<(f64, &'static str)> {
        match self {
            Suggestion::Exercise { .. } => Vec::new(),
            Suggestion::Food { nutrient, deficit } => nutrient
                .equivalents()
                .iter()
                .map(|eq| (deficit / eq.divisor, eq.unit))
                .collect(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::Exercise {
                excess_kcal,
                minutes,
            } => write!(
                f,
                "To burn {} kcal, consider: {} minutes of running",
                excess_kcal, minutes
            ),
            Suggestion::Food { nutrient, .. } => {
                let servings = self.servings();
                write!(f, "Consider eating ")?;
                for (i, (amount, unit)) in servings.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{:.1} extra {}", amount, unit)?;
                }
                write!(f, " to reach your {} goal.", nutrient.goal_label())
            }
        }
    }
}

/// Exercise suggestion for a negative calorie remaining value
pub fn exercise_suggestion(remaining: f64, rate: &ExerciseRate) -> Suggestion {
    let excess_kcal = remaining.abs();
    Suggestion::Exercise {
        excess_kcal,
        minutes: rate.minutes_for(excess_kcal),
    }
}

/// Food suggestion for a macro deficit; nothing when the goal is met
pub fn food_suggestion(nutrient: Macro, deficit: f64) -> Option<Suggestion> {
    if deficit > 0.0 {
        Some(Suggestion::Food { nutrient, deficit })
    } else {
        None
    }
}

/// Same as [`food_suggestion`] but keyed by a free-form macro name
///
/// Unrecognized names produce no suggestion rather than an error.
pub fn food_suggestion_by_name(name: &str, deficit: f64) -> Option<Suggestion> {
    match Macro::parse(name) {
        Some(nutrient) => food_suggestion(nutrient, deficit),
        None => {
            tracing::warn!("No food suggestion for unknown macro '{}'", name);
            None
        }
    }
}

/// Produce suggestions for an evaluated budget list
pub fn suggest(budgets: &[RemainingBudget], rate: &ExerciseRate) -> Vec<Suggestion> {
    if let Some(calories) = budget_for(budgets, Dimension::Calories) {
        if calories.is_over() {
            tracing::debug!("Calories over goal by {}", -calories.remaining);
            return vec![exercise_suggestion(calories.remaining, rate)];
        }
    }

    budgets
        .iter()
        .filter_map(|budget| {
            let nutrient = Macro::from_dimension(budget.dimension)?;
            food_suggestion(nutrient, budget.remaining)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::evaluate;
    use crate::{Goals, MacroTotals};

    fn rate() -> ExerciseRate {
        ExerciseRate::default()
    }

    fn budgets(goals: Goals, totals: MacroTotals) -> Vec<RemainingBudget> {
        evaluate(&goals, &totals)
    }

    #[test]
    fn test_exercise_boundaries() {
        let at_500 = exercise_suggestion(-500.0, &rate()).to_string();
        assert!(at_500.ends_with("10 minutes of running"), "{}", at_500);

        let at_499 = exercise_suggestion(-499.0, &rate()).to_string();
        assert!(at_499.ends_with("0 minutes of running"), "{}", at_499);
        assert!(!at_499.ends_with("10 minutes of running"));

        let at_1000 = exercise_suggestion(-1000.0, &rate()).to_string();
        assert!(at_1000.ends_with("20 minutes of running"), "{}", at_1000);
    }

    #[test]
    fn test_exercise_message() {
        assert_eq!(
            exercise_suggestion(-750.0, &rate()).to_string(),
            "To burn 750 kcal, consider: 10 minutes of running"
        );
    }

    #[test]
    fn test_protein_example() {
        let suggestion = food_suggestion(Macro::Protein, 12.0).unwrap();
        let text = suggestion.to_string();
        assert!(
            text.contains("2.0 extra eggs or 0.4 extra grams of chicken"),
            "{}",
            text
        );
        assert!(text.ends_with("to reach your protein goal."));
    }

    #[test]
    fn test_carbohydrate_and_fat_messages() {
        let carbs = food_suggestion(Macro::Carbohydrates, 60.0).unwrap();
        assert_eq!(
            carbs.to_string(),
            "Consider eating 2.0 extra grams of rice or 5.0 extra grams of bread to reach your carbohydrate goal."
        );

        let fat = food_suggestion(Macro::Fat, 28.0).unwrap();
        assert_eq!(
            fat.to_string(),
            "Consider eating 3.1 extra grams of avocado or 2.0 extra nuts to reach your fat goal."
        );
    }

    #[test]
    fn test_no_food_suggestion_when_goal_met() {
        assert!(food_suggestion(Macro::Protein, 0.0).is_none());
        assert!(food_suggestion(Macro::Fat, -3.0).is_none());
    }

    #[test]
    fn test_unknown_macro_name_is_noop() {
        assert!(food_suggestion_by_name("Fiber", 20.0).is_none());
        assert!(food_suggestion_by_name("", 20.0).is_none());
        assert_eq!(
            food_suggestion_by_name("carbs", 30.0),
            Some(Suggestion::Food {
                nutrient: Macro::Carbohydrates,
                deficit: 30.0
            })
        );
    }

    #[test]
    fn test_over_calories_yields_single_exercise() {
        let goals = Goals {
            calories: 2000,
            carbs_g: 250,
            protein_g: 50,
            fat_g: 70,
        };
        let totals = MacroTotals {
            calories: 2500.0,
            ..MacroTotals::zero()
        };

        let suggestions = suggest(&budgets(goals, totals), &rate());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(
            suggestions[0],
            Suggestion::Exercise {
                excess_kcal: 500.0,
                minutes: 10
            }
        );
    }

    #[test]
    fn test_under_calories_yields_food_for_short_macros() {
        let goals = Goals {
            calories: 2000,
            carbs_g: 250,
            protein_g: 50,
            fat_g: 70,
        };
        let totals = MacroTotals {
            calories: 1500.0,
            carbs_g: 260.0,
            protein_g: 38.0,
            fat_g: 70.0,
        };

        let suggestions = suggest(&budgets(goals, totals), &rate());
        assert_eq!(
            suggestions,
            vec![Suggestion::Food {
                nutrient: Macro::Protein,
                deficit: 12.0
            }]
        );
    }

    #[test]
    fn test_exactly_at_calorie_goal_uses_food_branch() {
        let goals = Goals {
            calories: 2000,
            carbs_g: 250,
            protein_g: 50,
            fat_g: 70,
        };
        let totals = MacroTotals {
            calories: 2000.0,
            ..MacroTotals::zero()
        };

        let suggestions = suggest(&budgets(goals, totals), &rate());
        let nutrients: Vec<_> = suggestions
            .iter()
            .filter_map(|s| match s {
                Suggestion::Food { nutrient, .. } => Some(*nutrient),
                Suggestion::Exercise { .. } => None,
            })
            .collect();
        assert_eq!(nutrients, Macro::ALL.to_vec());
    }

    #[test]
    fn test_custom_rate() {
        let brisk = ExerciseRate {
            kcal_per_block: 250.0,
            minutes_per_block: 15,
        };
        assert_eq!(brisk.minutes_for(-600.0), 30);
    }

    #[test]
    fn test_huge_excess_saturates_minutes() {
        let suggestion = exercise_suggestion(-1.0e12, &rate());
        assert_eq!(
            suggestion,
            Suggestion::Exercise {
                excess_kcal: 1.0e12,
                minutes: u32::MAX
            }
        );

        let slow = ExerciseRate {
            kcal_per_block: 500.0,
            minutes_per_block: u32::MAX,
        };
        assert_eq!(slow.minutes_for(1000.0), u32::MAX);
        assert_eq!(slow.minutes_for(499.0), 0);
    }
}
