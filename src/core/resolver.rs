use crate::domain::model::{Entry, Recipe, SummaryResult};
use crate::domain::ports::EntryLookup;
use crate::utils::error::ResolutionError;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Default)]
struct Expansion {
    cost: f64,
    ingredients: BTreeMap<String, f64>,
}

impl Expansion {
    fn is_finite(&self) -> bool {
        self.cost.is_finite() && self.ingredients.values().all(|q| q.is_finite())
    }
}

/// One recipe on the active expansion path.
struct Frame<'a> {
    recipe: &'a Recipe,
    multiplier: f64,
    next: usize,
}

/// Expands the recipe `root` into its total cost and base ingredient counts.
///
/// Fails if `root` is missing or is an ingredient, if any required item
/// anywhere below it is missing, if a recipe requires itself through any
/// chain, or if the totals overflow. A total cost of zero is a valid result.
pub fn summarize<L: EntryLookup + ?Sized>(
    catalog: &L,
    root: &str,
) -> Result<SummaryResult, ResolutionError> {
    let recipe = match catalog.lookup(root) {
        Some(Entry::Recipe(recipe)) => recipe,
        Some(Entry::Ingredient(_)) | None => {
            return Err(ResolutionError::NotFound(root.to_string()))
        }
    };

    let expansion = expand(catalog, recipe)?;
    if !expansion.is_finite() {
        return Err(ResolutionError::CostOverflow(root.to_string()));
    }

    Ok(SummaryResult {
        recipe_name: root.to_string(),
        total_cost: expansion.cost,
        flattened_ingredients: expansion.ingredients,
    })
}

/// Depth-first walk with an explicit stack, so nesting depth is limited by
/// memory rather than by the thread's stack.
fn expand<'a, L: EntryLookup + ?Sized>(
    catalog: &'a L,
    root: &'a Recipe,
) -> Result<Expansion, ResolutionError> {
    let mut expansion = Expansion::default();
    let mut active_path: HashSet<&'a str> = HashSet::from([root.name.as_str()]);
    let mut stack = vec![Frame {
        recipe: root,
        multiplier: 1.0,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let recipe = frame.recipe;
        let Some(requirement) = recipe.requirements.get(frame.next) else {
            // 離開此路徑：共用的子食譜可在其他分支再次展開
            active_path.remove(recipe.name.as_str());
            stack.pop();
            continue;
        };
        frame.next += 1;
        let quantity = requirement.quantity * frame.multiplier;

        match catalog.lookup(&requirement.target_name) {
            None => {
                return Err(ResolutionError::UnresolvedRequirement(
                    requirement.target_name.clone(),
                ))
            }
            Some(Entry::Ingredient(ingredient)) => {
                expansion.cost += quantity * ingredient.unit_cost;
                *expansion
                    .ingredients
                    .entry(ingredient.name.clone())
                    .or_insert(0.0) += quantity;
            }
            Some(Entry::Recipe(sub_recipe)) => {
                if !active_path.insert(sub_recipe.name.as_str()) {
                    return Err(ResolutionError::CyclicReference(sub_recipe.name.clone()));
                }
                tracing::debug!(
                    "Expanding '{}' x{} inside '{}'",
                    sub_recipe.name,
                    quantity,
                    recipe.name
                );
                stack.push(Frame {
                    recipe: sub_recipe,
                    multiplier: quantity,
                    next: 0,
                });
            }
        }
    }

    Ok(expansion)
}
