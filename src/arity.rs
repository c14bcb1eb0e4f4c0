/*!
# Argmatch: Value Arity.
*/

use crate::RegisterError;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Value Arity.
///
/// The number of values a flag consumes, as an inclusive `min..=max` range.
/// The range is checked at construction so `min <= max` always holds.
///
/// ## Examples
///
/// ```
/// use argmatch::Arity;
///
/// // Switches take nothing.
/// assert!(Arity::NONE.is_switch());
///
/// // Options take one thing.
/// assert_eq!(Arity::ONE.min(), 1);
/// assert_eq!(Arity::ONE.max(), 1);
///
/// // Variadic flags take a range.
/// let arity = Arity::new(1, 3).unwrap();
/// assert!(! arity.is_satisfied(0));
/// assert!(arity.is_satisfied(1));
/// assert!(arity.is_full(3));
///
/// // But not a backwards one.
/// assert!(Arity::new(3, 1).is_err());
/// ```
pub struct Arity {
	/// # Minimum Values.
	min: usize,

	/// # Maximum Values.
	max: usize,
}

impl Arity {
	/// # No Values.
	pub const NONE: Self = Self { min: 0, max: 0 };

	/// # Exactly One Value.
	pub const ONE: Self = Self { min: 1, max: 1 };

	/// # New (Checked).
	///
	/// ## Errors
	///
	/// This will return an error if `min` is greater than `max`.
	pub const fn new(min: usize, max: usize) -> Result<Self, RegisterError> {
		if min <= max { Ok(Self { min, max }) }
		else { Err(RegisterError::InvalidArity { min, max }) }
	}

	#[must_use]
	/// # At Least.
	///
	/// An open-ended range: the flag keeps taking values until it hits
	/// another flag or the end of the line.
	pub const fn at_least(min: usize) -> Self {
		Self { min, max: usize::MAX }
	}
}

impl Arity {
	#[must_use]
	/// # Minimum.
	pub const fn min(self) -> usize { self.min }

	#[must_use]
	/// # Maximum.
	pub const fn max(self) -> usize { self.max }

	#[must_use]
	/// # Is Switch?
	///
	/// True for flags that take no values at all.
	pub const fn is_switch(self) -> bool { self.max == 0 }

	#[must_use]
	/// # Is Satisfied?
	///
	/// True if `count` values meet the minimum.
	pub const fn is_satisfied(self, count: usize) -> bool { self.min <= count }

	#[must_use]
	/// # Is Full?
	///
	/// True if `count` values reach the maximum.
	pub const fn is_full(self, count: usize) -> bool { self.max <= count }
}
