use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub target_name: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub unit_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub requirements: Vec<Requirement>,
}

/// A catalog record. Ingredients and recipes share one namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }
}

/// Entry creation request as submitted by a client.
///
/// Fields stay raw JSON so that admission can tell "missing" apart from
/// "wrong type" and report each one precisely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryCandidate {
    #[serde(rename = "type", alias = "kind", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(rename = "requiredItems", alias = "requirements", default)]
    pub requirements: Option<Value>,
    #[serde(rename = "cookTime", alias = "unitCost", default)]
    pub unit_cost: Option<Value>,
}

impl EntryCandidate {
    pub fn ingredient(name: &str, unit_cost: f64) -> Self {
        Self {
            kind: Some(Value::from("ingredient")),
            name: Some(Value::from(name)),
            requirements: None,
            unit_cost: Some(Value::from(unit_cost)),
        }
    }

    pub fn recipe(name: &str, requirements: &[(&str, f64)]) -> Self {
        let items = requirements
            .iter()
            .map(|(target, quantity)| serde_json::json!({ "name": target, "quantity": quantity }))
            .collect();

        Self {
            kind: Some(Value::from("recipe")),
            name: Some(Value::from(name)),
            requirements: Some(Value::Array(items)),
            unit_cost: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub recipe_name: String,
    pub total_cost: f64,
    pub flattened_ingredients: BTreeMap<String, f64>,
}
