use crate::{
    catalog::Catalog,
    model::{Category, MenuEntry, OrderType, OptionEntry},
};


// Option overlay contents while an entry is being configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSelection {
    pub menu: MenuEntry,
    pub option: OptionEntry,
}

impl PendingSelection {
    // Live price on the confirm button
    pub fn price(&self) -> u32 {
        self.menu.price_with(Some(&self.option))
    }
}

// What selecting a tile did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuPick {
    // Sold out, nothing happened
    Unavailable,
    // No options, goes straight into the cart
    AddDirectly,
    // Option overlay opened
    Configuring,
}

// Transient browsing state of one kiosk session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub order_type: Option<OrderType>,
    pub active_category: Category,
    pub pending: Option<PendingSelection>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: Category) {
        self.active_category = category;
    }

    pub fn visible_menus<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MenuEntry> {
        catalog.visible(self.active_category).collect()
    }

    // Open the overlay for entries with options, defaulting to the first one
    pub fn select_menu(&mut self, entry: &MenuEntry) -> MenuPick {
        if entry.sold_out {
            return MenuPick::Unavailable;
        }
        match entry.options.first() {
            None => MenuPick::AddDirectly,
            Some(first) => {
                self.pending = Some(PendingSelection {
                    menu: entry.clone(),
                    option: first.clone(),
                });
                MenuPick::Configuring
            }
        }
    }

    // Returns false when no overlay is open or the option is not offered
    pub fn choose_option(&mut self, name: &str) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        match pending.menu.option(name) {
            Some(option) if *option != pending.option => {
                pending.option = option.clone();
                true
            }
            _ => false,
        }
    }

    // Closes the overlay, handing back what was chosen
    pub fn take_pending(&mut self) -> Option<PendingSelection> {
        self.pending.take()
    }

    pub fn cancel_selection(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_configuring(&self) -> bool {
        self.pending.is_some()
    }

    // Back to the start screen
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
