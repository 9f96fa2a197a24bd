//! The pancake value type and its validated builder.
//!
//! A pancake is immutable once built: an ordered list of base ingredients
//! (batter, non-empty) and an ordered list of custom toppings (possibly
//! empty). Construction goes through [`PancakeBuilder`], which checks every
//! ingredient against a [`Catalog`] so that a frozen pancake only ever
//! references orderable ingredients.

use crate::Ingredient;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Read-only contract of the ingredient catalog.
///
/// Implemented by the menu crate; the builder and pricing logic only depend
/// on this trait so tests can supply their own lookup tables.
pub trait Catalog {
	/// Price of the ingredient, or `None` when it is not on the menu.
	fn price_of(&self, ingredient: Ingredient) -> Option<Decimal>;

	/// Whether the ingredient is currently orderable.
	fn is_valid(&self, ingredient: Ingredient) -> bool;

	/// Whether the ingredient is orderable as a recipe base.
	fn is_base_ingredient(&self, ingredient: Ingredient) -> bool {
		self.is_valid(ingredient) && ingredient.is_base()
	}
}

/// Errors raised while composing a pancake recipe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecipeError {
	/// The ingredient is not listed in the catalog.
	#[error("ingredient {0} is not on the menu")]
	OffMenu(Ingredient),
	/// A topping was used through the base-ingredient path.
	#[error("only base ingredients can form the batter, got {0}")]
	NotABaseIngredient(Ingredient),
	/// The recipe was built without any base ingredient.
	#[error("a pancake must have at least one base ingredient")]
	MissingBase,
}

/// An immutable pancake recipe.
///
/// Deliberately only serializable: values exist exclusively through the
/// builder, so every frozen recipe passed catalog validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pancake {
	base: Vec<Ingredient>,
	custom: Vec<Ingredient>,
}

impl Pancake {
	/// Starts a new recipe validated against `catalog`.
	pub fn builder<C: Catalog>(catalog: &C) -> PancakeBuilder<'_, C> {
		PancakeBuilder {
			catalog,
			base: Vec::new(),
			custom: Vec::new(),
		}
	}

	/// Base ingredients in the order they were added.
	pub fn base_ingredients(&self) -> &[Ingredient] {
		&self.base
	}

	/// Custom toppings in the order they were added.
	pub fn custom_ingredients(&self) -> &[Ingredient] {
		&self.custom
	}

	/// Total price: the sum of catalog prices over both ingredient lists.
	pub fn price<C: Catalog>(&self, catalog: &C) -> Decimal {
		self.base
			.iter()
			.chain(self.custom.iter())
			.filter_map(|ingredient| catalog.price_of(*ingredient))
			.sum()
	}
}

impl fmt::Display for Pancake {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, ingredient) in self.base.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{ingredient}")?;
		}
		for ingredient in &self.custom {
			write!(f, " + {ingredient}")?;
		}
		Ok(())
	}
}

/// Builder producing immutable [`Pancake`] values.
///
/// Methods consume and return the builder so recipes compose with `?`:
///
/// ```ignore
/// let pancake = Pancake::builder(&menu)
/// 	.base(Ingredient::Flour)?
/// 	.base(Ingredient::Milk)?
/// 	.custom(Ingredient::DarkChocolate)?
/// 	.build()?;
/// ```
#[derive(Debug)]
pub struct PancakeBuilder<'a, C: Catalog> {
	catalog: &'a C,
	base: Vec<Ingredient>,
	custom: Vec<Ingredient>,
}

impl<'a, C: Catalog> PancakeBuilder<'a, C> {
	/// The standard recipe: flour, egg, and milk.
	pub fn standard(catalog: &'a C) -> Result<Self, RecipeError> {
		Pancake::builder(catalog)
			.base(Ingredient::Flour)?
			.base(Ingredient::Egg)?
			.base(Ingredient::Milk)
	}

	/// The vegan recipe: flour and soy milk.
	pub fn vegan(catalog: &'a C) -> Result<Self, RecipeError> {
		Pancake::builder(catalog)
			.base(Ingredient::Flour)?
			.base(Ingredient::SoyMilk)
	}

	/// Adds a base ingredient.
	///
	/// Only catalog-listed base ingredients are accepted here; toppings must
	/// go through [`custom`](Self::custom).
	pub fn base(mut self, ingredient: Ingredient) -> Result<Self, RecipeError> {
		if !self.catalog.is_valid(ingredient) {
			return Err(RecipeError::OffMenu(ingredient));
		}
		if !self.catalog.is_base_ingredient(ingredient) {
			return Err(RecipeError::NotABaseIngredient(ingredient));
		}
		self.base.push(ingredient);
		Ok(self)
	}

	/// Adds a custom topping. Any catalog-listed ingredient is accepted.
	pub fn custom(mut self, ingredient: Ingredient) -> Result<Self, RecipeError> {
		if !self.catalog.is_valid(ingredient) {
			return Err(RecipeError::OffMenu(ingredient));
		}
		self.custom.push(ingredient);
		Ok(self)
	}

	/// Freezes the recipe into an immutable pancake.
	pub fn build(self) -> Result<Pancake, RecipeError> {
		if self.base.is_empty() {
			return Err(RecipeError::MissingBase);
		}
		Ok(Pancake {
			base: self.base,
			custom: self.custom,
		})
	}
}
