//! Presentation handle registry.
//!
//! # Responsibility
//! - Let the presentation layer map item/column ids to its own handles so it
//!   can resolve an `Outcome` into elements to highlight or focus.
//!
//! # Invariants
//! - The engine never reads this registry.
//! - Dropping a [`Disposer`] removes only the registration it was issued for;
//!   a newer registration under the same id survives.

use crate::model::board::{ColumnId, ItemId};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug)]
struct Entry<H> {
    generation: u64,
    handle: H,
}

#[derive(Debug)]
struct Slots<H> {
    next_generation: u64,
    items: HashMap<ItemId, Entry<H>>,
    columns: HashMap<ColumnId, Entry<H>>,
}

impl<H> Default for Slots<H> {
    fn default() -> Self {
        Self {
            next_generation: 0,
            items: HashMap::new(),
            columns: HashMap::new(),
        }
    }
}

impl<H> Slots<H> {
    fn issue(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

/// Id-to-handle registry owned by the presentation layer.
#[derive(Debug)]
pub struct Registry<H> {
    slots: Arc<Mutex<Slots<H>>>,
}

impl<H> Clone for Registry<H> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self {
            slots: Arc::new(Mutex::new(Slots::default())),
        }
    }
}

impl<H: Clone + Send + 'static> Registry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the handle for one item.
    pub fn register_item(&self, id: ItemId, handle: H) -> Disposer {
        let mut slots = lock(&self.slots);
        let generation = slots.issue();
        slots.items.insert(id.clone(), Entry { generation, handle });
        drop(slots);
        self.disposer(move |slots| remove_if_current(&mut slots.items, &id, generation))
    }

    /// Registers (or replaces) the handle for one column.
    pub fn register_column(&self, id: ColumnId, handle: H) -> Disposer {
        let mut slots = lock(&self.slots);
        let generation = slots.issue();
        slots.columns.insert(id.clone(), Entry { generation, handle });
        drop(slots);
        self.disposer(move |slots| remove_if_current(&mut slots.columns, &id, generation))
    }

    pub fn lookup_item(&self, id: &ItemId) -> Option<H> {
        lock(&self.slots).items.get(id).map(|entry| entry.handle.clone())
    }

    pub fn lookup_column(&self, id: &ColumnId) -> Option<H> {
        lock(&self.slots)
            .columns
            .get(id)
            .map(|entry| entry.handle.clone())
    }

    pub fn item_count(&self) -> usize {
        lock(&self.slots).items.len()
    }

    pub fn column_count(&self) -> usize {
        lock(&self.slots).columns.len()
    }

    fn disposer(&self, remove: impl FnOnce(&mut Slots<H>) + Send + 'static) -> Disposer {
        let slots = Arc::clone(&self.slots);
        Disposer {
            cleanup: Some(Box::new(move || remove(&mut lock(&slots)))),
        }
    }
}

/// Unregisters its entry when dropped or disposed.
#[must_use = "dropping a Disposer immediately unregisters the handle"]
pub struct Disposer {
    cleanup: Option<Box<dyn FnOnce() + Send>>,
}

impl Disposer {
    pub fn dispose(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposer")
            .field("armed", &self.cleanup.is_some())
            .finish()
    }
}

fn lock<H>(slots: &Mutex<Slots<H>>) -> MutexGuard<'_, Slots<H>> {
    match slots.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn remove_if_current<K: Eq + Hash, H>(map: &mut HashMap<K, Entry<H>>, id: &K, generation: u64) {
    if map.get(id).is_some_and(|entry| entry.generation == generation) {
        map.remove(id);
    }
}
