use super::recipe::Recipe;

/// An insertion-ordered collection of recipes, looked up by name
/// without regard to case.
///
/// Adding does not enforce unique names. When several recipes share a
/// name up to case, the earliest one is the only one reachable through
/// [`get_recipe_by_name`](Self::get_recipe_by_name),
/// [`delete_recipe`](Self::delete_recipe) and
/// [`edit_recipe`](Self::edit_recipe).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeLibrary {
    recipes: Vec<Recipe>,
}

impl RecipeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a recipe. Returns false, leaving the library untouched, when
    /// no recipe is given.
    pub fn add_recipe(&mut self, recipe: impl Into<Option<Recipe>>) -> bool {
        match recipe.into() {
            Some(recipe) => {
                self.recipes.push(recipe);
                true
            }
            None => false,
        }
    }

    pub fn all_recipes(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// First recipe whose name matches ignoring case. An empty name never matches.
    pub fn get_recipe_by_name(&self, name: &str) -> Option<Recipe> {
        self.position_of(name).map(|i| self.recipes[i].clone())
    }

    /// Recipes listing `ingredient` verbatim (case-sensitive). An empty
    /// ingredient never matches.
    pub fn filter_recipes_by_ingredient(&self, ingredient: &str) -> Vec<Recipe> {
        if ingredient.is_empty() {
            return Vec::new();
        }
        self.recipes
            .iter()
            .filter(|r| r.has_ingredient(ingredient))
            .cloned()
            .collect()
    }

    /// Removes the first recipe matching `name`. Returns false if none matched.
    pub fn delete_recipe(&mut self, name: &str) -> bool {
        match self.position_of(name) {
            Some(index) => {
                self.recipes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the ingredients and instructions of the recipe matching `name`.
    ///
    /// The matched recipe is taken out and a replacement named `name` is
    /// built from the new parts. On success the replacement is appended and
    /// `true` is returned. If the replacement cannot be built, the original
    /// goes back to its old position and `false` is returned, so a failed
    /// edit leaves the library exactly as it was.
    pub fn edit_recipe(
        &mut self,
        name: &str,
        new_ingredients: Option<Vec<String>>,
        new_instructions: Option<String>,
    ) -> bool {
        let Some(index) = self.position_of(name) else {
            return false;
        };

        let original = self.recipes.remove(index);
        match Recipe::from_parts(name, new_ingredients, new_instructions) {
            Ok(updated) => {
                self.recipes.push(updated);
                true
            }
            Err(_) => {
                self.recipes.insert(index, original);
                false
            }
        }
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        let wanted = name.to_lowercase();
        self.recipes
            .iter()
            .position(|r| r.name().to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn alfredo_pasta() -> Recipe {
        Recipe::new(
            "Alfredo Pasta",
            strings(&["pasta", "cream", "parmesan cheese"]),
            "Boil pasta. Make sauce with cream and cheese. Combine.",
        )
        .unwrap()
    }

    fn chicken_salad() -> Recipe {
        Recipe::new(
            "Chicken Salad",
            strings(&["chicken", "lettuce", "tomato", "dressing"]),
            "Cook chicken. Mix with veggies and dressing.",
        )
        .unwrap()
    }

    fn library() -> RecipeLibrary {
        let mut library = RecipeLibrary::new();
        library.add_recipe(alfredo_pasta());
        library.add_recipe(chicken_salad());
        library
    }

    #[test]
    fn test_add_recipe() {
        let mut library = RecipeLibrary::new();
        assert!(library.is_empty());
        assert!(library.add_recipe(alfredo_pasta()));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_add_missing_recipe_returns_false() {
        let mut library = RecipeLibrary::new();
        assert!(!library.add_recipe(None::<Recipe>));
        assert!(library.all_recipes().is_empty());
    }

    #[test]
    fn test_get_recipe_by_name_ignores_case() {
        let library = library();

        let found = library.get_recipe_by_name("alfredo PASTA").unwrap();
        assert_eq!(found.name(), "Alfredo Pasta");
        assert!(library.get_recipe_by_name("Not Real").is_none());
        assert!(library.get_recipe_by_name("").is_none());
    }

    #[test]
    fn test_first_insertion_wins_lookup() {
        let mut library = RecipeLibrary::new();
        library.add_recipe(Recipe::new("Soup", strings(&["water"]), "first").unwrap());
        library.add_recipe(Recipe::new("SOUP", strings(&["broth"]), "second").unwrap());

        assert_eq!(library.len(), 2);
        assert_eq!(library.get_recipe_by_name("soup").unwrap().instructions(), "first");

        assert!(library.delete_recipe("soup"));
        assert_eq!(library.get_recipe_by_name("soup").unwrap().instructions(), "second");
    }

    #[test]
    fn test_filter_recipes_by_ingredient() {
        let library = library();

        let filtered = library.filter_recipes_by_ingredient("pasta");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name(), "Alfredo Pasta");

        assert!(library.filter_recipes_by_ingredient("Pasta").is_empty());
        assert!(library.filter_recipes_by_ingredient("").is_empty());
    }

    #[test]
    fn test_delete_recipe() {
        let mut library = library();

        assert!(library.delete_recipe("Alfredo Pasta"));
        assert_eq!(library.len(), 1);

        assert!(!library.delete_recipe("Not Real"));
        assert!(!library.delete_recipe(""));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_edit_recipe_success() {
        let mut library = library();

        let edited = library.edit_recipe(
            "Alfredo Pasta",
            Some(strings(&["pasta", "cream", "garlic"])),
            Some("Updated instructions here.".into()),
        );
        assert!(edited);
        assert_eq!(library.len(), 2);

        let updated = library.get_recipe_by_name("Alfredo Pasta").unwrap();
        assert_eq!(updated.ingredients(), strings(&["pasta", "cream", "garlic"]));
        assert_eq!(updated.instructions(), "Updated instructions here.");
    }

    #[test]
    fn test_edit_recipe_nonexistent_or_empty_name() {
        let mut library = library();
        let before = library.clone();

        assert!(!library.edit_recipe("Nonexistent", Some(strings(&["ing"])), Some("Steps".into())));
        assert!(!library.edit_recipe("", Some(strings(&["ing"])), Some("Steps".into())));
        assert_eq!(library, before);
    }

    #[test]
    fn test_edit_recipe_rolls_back_on_missing_parts() {
        let mut library = library();
        let before = library.clone();

        assert!(!library.edit_recipe("Alfredo Pasta", None, Some("Steps".into())));
        assert_eq!(library, before);

        assert!(!library.edit_recipe("Alfredo Pasta", Some(strings(&["ing"])), None));
        assert_eq!(library, before);

        let still_old = library.get_recipe_by_name("Alfredo Pasta").unwrap();
        assert!(still_old.has_ingredient("cream"));
        assert_eq!(still_old, alfredo_pasta());
    }

    #[test]
    fn test_all_recipes_returns_snapshot() {
        let library = library();
        let mut snapshot = library.all_recipes();
        snapshot.clear();
        assert_eq!(library.len(), 2);
    }
}
