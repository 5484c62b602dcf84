// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item providers: the data a renderer reads by index.

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// Index-addressed access to the items a grid shows.
///
/// Renderers read through this on every call, so a node recycled for an
/// index always shows the provider's current data for it.
pub trait ItemProvider {
    /// Item type.
    type Item;

    /// Number of items.
    fn len(&self) -> usize;

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The item at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&Self::Item>;
}

impl<T> ItemProvider for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// An entry that can live in a [`Catalog`].
pub trait CatalogEntry {
    /// Stable identifier, such as a stream or series id.
    type Id: Clone + Eq + Hash;

    /// Returns the identifier.
    fn id(&self) -> Self::Id;

    /// Text matched by [`Catalog::apply_filter`].
    fn title(&self) -> &str;
}

/// A list of entries with a filtered view and an id lookup.
///
/// Indices handed to the grid are positions in the filtered view. With no
/// filter applied, the view is the whole list.
#[derive(Clone, Debug)]
pub struct Catalog<T: CatalogEntry> {
    entries: Vec<T>,
    /// Positions in `entries`, ascending.
    view: Vec<usize>,
    by_id: HashMap<T::Id, usize>,
    query: String,
}

impl<T: CatalogEntry> Default for Catalog<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: CatalogEntry> Catalog<T> {
    /// Creates an unfiltered catalog.
    ///
    /// If two entries share an id, lookups resolve to the first.
    #[must_use]
    pub fn new(entries: Vec<T>) -> Self {
        let mut catalog = Self {
            entries: Vec::new(),
            view: Vec::new(),
            by_id: HashMap::new(),
            query: String::new(),
        };
        catalog.replace(entries);
        catalog
    }

    /// Replaces every entry and drops the filter. Returns the new count.
    pub fn replace(&mut self, entries: Vec<T>) -> usize {
        self.by_id.clear();
        self.by_id.reserve(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            self.by_id.entry(entry.id()).or_insert(position);
        }
        self.entries = entries;
        self.clear_filter()
    }

    /// Keeps only entries whose title contains `query`, ignoring case and
    /// surrounding whitespace. A blank query shows everything.
    ///
    /// Returns the number of entries in the new view, ready for
    /// [`GridEngine::set_item_count`](tvgrid_engine::GridEngine::set_item_count).
    pub fn apply_filter(&mut self, query: &str) -> usize {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.clear_filter();
        }
        self.view.clear();
        self.view.extend(
            self.entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.title().to_lowercase().contains(needle.as_str()))
                .map(|(position, _)| position),
        );
        self.query = needle;
        self.view.len()
    }

    /// Shows every entry again. Returns the number of entries.
    pub fn clear_filter(&mut self) -> usize {
        self.query.clear();
        self.view.clear();
        self.view.extend(0..self.entries.len());
        self.view.len()
    }

    /// The normalized query in effect; empty when unfiltered.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Every entry, ignoring the filter.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Looks an entry up by id, ignoring the filter.
    #[must_use]
    pub fn by_id(&self, id: &T::Id) -> Option<&T> {
        self.by_id
            .get(id)
            .and_then(|&position| self.entries.get(position))
    }

    /// Position of the entry with `id` in the filtered view.
    ///
    /// Use this to restore focus to an item after the view changed.
    #[must_use]
    pub fn index_of(&self, id: &T::Id) -> Option<usize> {
        let position = *self.by_id.get(id)?;
        self.view.binary_search(&position).ok()
    }
}

impl<T: CatalogEntry> ItemProvider for Catalog<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.view.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.view
            .get(index)
            .and_then(|&position| self.entries.get(position))
    }
}
