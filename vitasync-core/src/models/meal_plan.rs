use std::fmt;

use super::meal::Meal;

/// An ordered list of meals with derived macronutrient totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlan {
    meals: Vec<Meal>,
}

/// Summed macronutrients for a meal plan, in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacroTotals {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_meal(&mut self, meal: Meal) {
        self.meals.push(meal);
    }

    pub fn meals(&self) -> Vec<Meal> {
        self.meals.clone()
    }

    pub fn total_protein(&self) -> i64 {
        self.meals.iter().map(|m| i64::from(m.protein())).sum()
    }

    pub fn total_carbs(&self) -> i64 {
        self.meals.iter().map(|m| i64::from(m.carbs())).sum()
    }

    pub fn total_fat(&self) -> i64 {
        self.meals.iter().map(|m| i64::from(m.fat())).sum()
    }

    pub fn totals(&self) -> MacroTotals {
        MacroTotals {
            protein: self.total_protein(),
            carbs: self.total_carbs(),
            fat: self.total_fat(),
        }
    }
}

impl fmt::Display for MacroTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Protein: {}g", self.protein)?;
        writeln!(f, "Total Carbs: {}g", self.carbs)?;
        writeln!(f, "Total Fat: {}g", self.fat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan_totals_are_zero() {
        let plan = MealPlan::new();
        assert!(plan.meals().is_empty());
        assert_eq!(plan.totals(), MacroTotals::default());
    }

    #[test]
    fn test_totals_sum_each_macro() {
        let mut plan = MealPlan::new();
        plan.add_meal(Meal::new("Oatmeal", 10, 30, 5).unwrap());
        plan.add_meal(Meal::new("Chicken", 40, 0, 8).unwrap());
        plan.add_meal(Meal::new("Rice", 4, 45, 1).unwrap());

        assert_eq!(plan.total_protein(), 54);
        assert_eq!(plan.total_carbs(), 75);
        assert_eq!(plan.total_fat(), 14);
    }

    #[test]
    fn test_totals_do_not_overflow() {
        let mut plan = MealPlan::new();
        plan.add_meal(Meal::new("Big", i32::MAX, 0, 0).unwrap());
        plan.add_meal(Meal::new("Bigger", i32::MAX, 0, 0).unwrap());
        assert_eq!(plan.total_protein(), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_meals_preserve_order() {
        let mut plan = MealPlan::new();
        plan.add_meal(Meal::new("Breakfast", 1, 1, 1).unwrap());
        plan.add_meal(Meal::new("Lunch", 2, 2, 2).unwrap());

        let names: Vec<String> = plan.meals().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(names, vec!["Breakfast", "Lunch"]);
    }

    #[test]
    fn test_totals_display() {
        let mut plan = MealPlan::new();
        plan.add_meal(Meal::new("Oatmeal", 10, 30, 5).unwrap());

        let output = format!("{}", plan.totals());
        assert!(output.contains("Total Protein: 10g"));
        assert!(output.contains("Total Carbs: 30g"));
        assert!(output.contains("Total Fat: 5g"));
    }
}
