// src/models/collection.rs
// DOCUMENTATION: The user's ordered favourites
// PURPOSE: Ordered, id-unique sequence of places owned by PlaceStore

use super::Place;

/// Ordered sequence of places, unique by id
/// DOCUMENTATION: Insertion order is preserved and no id appears twice.
/// Cloning yields the immutable snapshot used for rollback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceCollection {
    places: Vec<Place>,
}

impl PlaceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.places.iter().any(|p| p.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.places.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn as_slice(&self) -> &[Place] {
        &self.places
    }

    /// Append `place` unless its id is already present.
    /// Returns whether the collection changed.
    pub(crate) fn append(&mut self, place: Place) -> bool {
        if self.contains(&place.id) {
            return false;
        }
        self.places.push(place);
        true
    }

    /// Drop every entry with the given id.
    /// Returns whether the collection changed.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.places.len();
        self.places.retain(|p| p.id != id);
        self.places.len() != before
    }
}

impl From<Vec<Place>> for PlaceCollection {
    /// First occurrence of an id wins; later duplicates are dropped.
    fn from(places: Vec<Place>) -> Self {
        let mut collection = PlaceCollection::new();
        for place in places {
            if !collection.append(place) {
                log::warn!("Dropping duplicate place in fetched list");
            }
        }
        collection
    }
}

impl<'a> IntoIterator for &'a PlaceCollection {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.places.iter()
    }
}
