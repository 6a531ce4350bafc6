//! Drink recipes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A drink and what goes into it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    /// Drink name
    pub name: String,
    /// Scoops of chocolate
    pub chocolate: u32,
    /// Scoops of coffee
    pub coffee: u32,
    /// Parts of milk
    pub milk: u32,
    /// Spoons of sugar
    pub sugar: u32,
    /// Price
    pub price: f64,
}

impl Recipe {
    /// An empty recipe with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// Build a recipe in one call
pub fn create_recipe(
    name: impl Into<String>,
    chocolate: u32,
    coffee: u32,
    milk: u32,
    sugar: u32,
    price: f64,
) -> Recipe {
    Recipe {
        chocolate,
        coffee,
        milk,
        sugar,
        price,
        ..Recipe::new(name)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: chocolate={}, coffee={}, milk={}, sugar={}, price={:?}",
            self.name, self.chocolate, self.coffee, self.milk, self.sugar, self.price
        )
    }
}

/// A list of recipes, as stored in a TOML menu file
///
/// ```toml
/// [[recipes]]
/// name = "Latte"
/// coffee = 2
/// milk = 1
/// sugar = 2
/// price = 40.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Menu {
    /// Recipes in menu order
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Menu {
    /// The three drinks of the classic exercise
    pub fn sample() -> Self {
        Self {
            recipes: vec![
                create_recipe("Coffee with sugar", 0, 4, 0, 2, 30.0),
                create_recipe("Latte", 0, 2, 1, 2, 40.0),
                create_recipe("Hot Chocolate", 3, 0, 4, 2, 30.0),
            ],
        }
    }

    /// Parse a TOML menu
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Look a recipe up by name
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }
}
