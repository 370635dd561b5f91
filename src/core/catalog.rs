use crate::domain::model::{Entry, EntryCandidate, Ingredient, Recipe, Requirement};
use crate::domain::ports::EntryLookup;
use crate::utils::error::AdmissionError;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Insert-only store of cookbook entries keyed by exact name.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, Entry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `candidate` and inserts it. Nothing is stored on failure.
    ///
    /// Required items may name entries that do not exist yet; they are only
    /// checked when a summary is requested.
    pub fn admit(&mut self, candidate: EntryCandidate) -> Result<(), AdmissionError> {
        let (kind, name) = check_header(&candidate)?;

        if self.entries.contains_key(name) {
            return Err(AdmissionError::DuplicateName(name.to_string()));
        }

        let entry = match kind {
            Kind::Recipe => Entry::Recipe(Recipe {
                name: name.to_string(),
                requirements: check_requirements(candidate.requirements.as_ref())?,
            }),
            Kind::Ingredient => Entry::Ingredient(Ingredient {
                name: name.to_string(),
                unit_cost: check_unit_cost(candidate.unit_cost.as_ref())?,
            }),
        };

        tracing::debug!("Admitted {:?} '{}'", kind, name);
        self.entries.insert(name.to_string(), entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryLookup for Catalog {
    fn lookup(&self, name: &str) -> Option<&Entry> {
        self.get(name)
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Ingredient,
    Recipe,
}

fn check_header(candidate: &EntryCandidate) -> Result<(Kind, &str), AdmissionError> {
    let malformed = |reason: &str| AdmissionError::MalformedCandidate {
        reason: reason.to_string(),
    };

    let kind = candidate
        .kind
        .as_ref()
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("'type' must be a string"))?;
    let name = candidate
        .name
        .as_ref()
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("'name' must be a string"))?;

    let kind = match kind {
        "ingredient" => Kind::Ingredient,
        "recipe" => Kind::Recipe,
        other => {
            return Err(malformed(&format!(
                "'type' must be 'ingredient' or 'recipe', got '{}'",
                other
            )))
        }
    };

    Ok((kind, name))
}

fn check_requirements(raw: Option<&Value>) -> Result<Vec<Requirement>, AdmissionError> {
    let invalid = |reason: String| AdmissionError::InvalidRequirementList { reason };

    let items = raw
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("'requiredItems' must be a list".to_string()))?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut requirements = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let target_name = item
            .get("name")
            .or_else(|| item.get("targetName"))
            .and_then(Value::as_str)
            .ok_or_else(|| invalid(format!("item {} has no string 'name'", index)))?;

        let quantity = item
            .get("quantity")
            .and_then(Value::as_f64)
            .ok_or_else(|| invalid(format!("item {} has no numeric 'quantity'", index)))?;

        if quantity <= 0.0 {
            return Err(invalid(format!(
                "item '{}' has quantity {}, must be greater than zero",
                target_name, quantity
            )));
        }

        if !seen.insert(target_name) {
            return Err(AdmissionError::DuplicateRequirementTarget(
                target_name.to_string(),
            ));
        }

        requirements.push(Requirement {
            target_name: target_name.to_string(),
            quantity,
        });
    }

    Ok(requirements)
}

fn check_unit_cost(raw: Option<&Value>) -> Result<f64, AdmissionError> {
    let unit_cost = raw
        .and_then(Value::as_f64)
        .ok_or_else(|| AdmissionError::InvalidCost {
            reason: "'cookTime' must be a number".to_string(),
        })?;

    if unit_cost < 0.0 {
        return Err(AdmissionError::InvalidCost {
            reason: format!("'cookTime' is {}, must not be negative", unit_cost),
        });
    }

    Ok(unit_cost)
}
