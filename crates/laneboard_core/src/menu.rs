//! Single open-menu slot.
//!
//! At most one card or column menu is open at a time. `close` is
//! compare-and-set so a late close from a menu that was already replaced
//! cannot shut the newer one.

/// Owner-held slot naming the menu that is currently open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSlot<K> {
    open: Option<K>,
}

impl<K> Default for MenuSlot<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq> MenuSlot<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&K> {
        self.open.as_ref()
    }

    pub fn is_open(&self, id: &K) -> bool {
        self.open.as_ref() == Some(id)
    }

    /// Opens `id`, replacing whatever was open.
    pub fn open(&mut self, id: K) {
        self.open = Some(id);
    }

    /// Closes `id` only if it is still the open menu.
    pub fn close(&mut self, id: &K) -> bool {
        if self.is_open(id) {
            self.open = None;
            return true;
        }
        false
    }

    /// Trigger press: closes `id` when open, opens it otherwise.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.close(&id) {
            return false;
        }
        self.open(id);
        true
    }

    /// Closes the open menu unless `contains_click` reports the click landed
    /// inside it.
    pub fn close_on_outside_click(&mut self, contains_click: impl FnOnce(&K) -> bool) -> bool {
        match self.open.as_ref() {
            Some(id) if !contains_click(id) => {
                self.open = None;
                true
            }
            _ => false,
        }
    }
}
