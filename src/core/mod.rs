pub mod catalog;
pub mod cookbook;
pub mod normalize;
pub mod resolver;

pub use crate::domain::model::{Entry, EntryCandidate, Ingredient, Recipe, Requirement, SummaryResult};
pub use crate::domain::ports::{ConfigProvider, EntryLookup};
pub use crate::utils::error::Result;
