//! Goal evaluation: remaining budget per tracked dimension.

use crate::{Dimension, Goals, MacroTotals, RemainingBudget};

impl Goals {
    /// Goal value for one dimension
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Calories => self.calories,
            Dimension::Carbohydrates => self.carbs_g,
            Dimension::Protein => self.protein_g,
            Dimension::Fat => self.fat_g,
        }
    }
}

impl RemainingBudget {
    /// Build a budget record; `remaining` is not clamped
    pub fn new(dimension: Dimension, goal_value: u32, consumed: f64) -> Self {
        Self {
            dimension,
            goal_value,
            consumed,
            remaining: f64::from(goal_value) - consumed,
        }
    }

    /// Consumed as a fraction of the goal, `None` when the goal is zero
    pub fn fraction_of_goal(&self) -> Option<f64> {
        if self.goal_value == 0 {
            None
        } else {
            Some(self.consumed / f64::from(self.goal_value))
        }
    }

    pub fn is_over(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Compare totals against goals
///
/// Always returns four records in the order Calories, Carbohydrates,
/// Protein, Fat.
pub fn evaluate(goals: &Goals, totals: &MacroTotals) -> Vec<RemainingBudget> {
    Dimension::ALL
        .iter()
        .map(|&dimension| {
            RemainingBudget::new(dimension, goals.get(dimension), totals.get(dimension))
        })
        .collect()
}

/// Find the record for a dimension in an evaluated budget list
pub fn budget_for(budgets: &[RemainingBudget], dimension: Dimension) -> Option<&RemainingBudget> {
    budgets.iter().find(|b| b.dimension == dimension)
}
