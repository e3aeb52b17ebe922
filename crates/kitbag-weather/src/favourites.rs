use crate::error::FavouritesError;

/// Default number of favourite slots.
pub const DEFAULT_CAPACITY: usize = 3;

/// Bounded, ordered list of favourite city names.
///
/// Names are trimmed on insert and compared exactly. The list never evicts
/// on its own: callers must [`remove`](Self::remove) to make room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favourites {
    cities: Vec<String>,
    capacity: usize,
}

impl Default for Favourites {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Favourites {
    pub fn new(capacity: usize) -> Self {
        Self {
            cities: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add `city` to the end of the list.
    ///
    /// # Errors
    ///
    /// Blank names, duplicates and a full list are rejected without
    /// modifying the list.
    pub fn add(&mut self, city: &str) -> Result<(), FavouritesError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FavouritesError::EmptyName);
        }
        if self.contains(city) {
            return Err(FavouritesError::Duplicate(city.to_string()));
        }
        if self.is_full() {
            return Err(FavouritesError::Full {
                capacity: self.capacity,
            });
        }

        self.cities.push(city.to_string());
        tracing::debug!(city, count = self.cities.len(), "added favourite");
        Ok(())
    }

    /// Remove the favourite at 1-based `index` and return its name.
    ///
    /// # Errors
    ///
    /// Returns [`FavouritesError::Empty`] when there is nothing to remove and
    /// [`FavouritesError::OutOfRange`] for an index outside `1..=len`.
    pub fn remove(&mut self, index: usize) -> Result<String, FavouritesError> {
        if self.cities.is_empty() {
            return Err(FavouritesError::Empty);
        }
        if index == 0 || index > self.cities.len() {
            return Err(FavouritesError::OutOfRange {
                index,
                len: self.cities.len(),
            });
        }

        let removed = self.cities.remove(index - 1);
        tracing::debug!(city = %removed, "removed favourite");
        Ok(removed)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cities.len() >= self.capacity
    }
}
