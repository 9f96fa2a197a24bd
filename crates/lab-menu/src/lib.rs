//! Ingredient catalog for the Pancake Lab order system.
//!
//! The menu maps each ingredient to a price and, together with the intrinsic
//! base/custom classification, decides what recipes are orderable. It is
//! read-mostly at runtime but supports administrative additions and
//! config-driven price overrides, so the price table lives in a concurrent
//! map and lookups never require external locking.

use dashmap::DashMap;
use lab_types::{Catalog, Ingredient};
use rust_decimal::Decimal;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur when updating the menu.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
	/// A price update carried a negative amount.
	#[error("price for {ingredient} must not be negative, got {price}")]
	NegativePrice {
		ingredient: Ingredient,
		price: Decimal,
	},
}

/// The ingredient catalog: price and validity lookups by ingredient.
pub struct Menu {
	prices: DashMap<Ingredient, Decimal>,
}

impl Menu {
	/// An empty menu with no orderable ingredients. Every lookup fails until
	/// prices are added; mainly useful for tests.
	pub fn empty() -> Self {
		Self {
			prices: DashMap::new(),
		}
	}

	/// The standard menu with all eight ingredients at their usual prices.
	pub fn with_defaults() -> Self {
		let menu = Self::empty();
		let defaults = [
			(Ingredient::DarkChocolate, Decimal::new(150, 2)),
			(Ingredient::MilkChocolate, Decimal::new(100, 2)),
			(Ingredient::Hazelnut, Decimal::new(200, 2)),
			(Ingredient::WhippedCream, Decimal::new(25, 2)),
			(Ingredient::Milk, Decimal::new(100, 2)),
			(Ingredient::SoyMilk, Decimal::new(100, 2)),
			(Ingredient::Flour, Decimal::new(50, 2)),
			(Ingredient::Egg, Decimal::new(75, 2)),
		];
		for (ingredient, price) in defaults {
			menu.prices.insert(ingredient, price);
		}
		menu
	}

	/// Inserts or updates the price of an ingredient.
	pub fn set_price(&self, ingredient: Ingredient, price: Decimal) -> Result<(), MenuError> {
		if price.is_sign_negative() {
			return Err(MenuError::NegativePrice { ingredient, price });
		}
		self.prices.insert(ingredient, price);
		Ok(())
	}

	/// Applies a batch of price overrides, typically loaded from config.
	///
	/// Overrides are validated entry by entry; the first invalid entry aborts
	/// the batch with entries applied so far left in place.
	pub fn apply_overrides(
		&self,
		overrides: &HashMap<Ingredient, Decimal>,
	) -> Result<(), MenuError> {
		for (&ingredient, &price) in overrides {
			self.set_price(ingredient, price)?;
		}
		Ok(())
	}

	/// Snapshot of the full price table.
	pub fn prices(&self) -> HashMap<Ingredient, Decimal> {
		self.prices
			.iter()
			.map(|entry| (*entry.key(), *entry.value()))
			.collect()
	}
}

impl Default for Menu {
	fn default() -> Self {
		Self::with_defaults()
	}
}

impl Catalog for Menu {
	fn price_of(&self, ingredient: Ingredient) -> Option<Decimal> {
		self.prices.get(&ingredient).map(|entry| *entry.value())
	}

	fn is_valid(&self, ingredient: Ingredient) -> bool {
		self.prices.contains_key(&ingredient)
	}
}
