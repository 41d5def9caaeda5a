use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    cart::Cart,
    catalog::Catalog,
    checkout::Receipt,
    model::{Category, MenuEntry, MenuId, OrderType},
    random::ReceiptNumbers,
    selection::{MenuPick, SelectionState},
};


// Coarse screen of the kiosk, derived from state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Browsing,
    ConfiguringOption,
    Receipt,
}

// User interactions the kiosk understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ChooseOrderType(OrderType),
    SetCategory(Category),
    SelectMenu(MenuId),
    // 1-based position among the visible tiles
    PressTile(usize),
    ChooseOption(String),
    // 1-based position in the option overlay
    PressOption(usize),
    ConfirmSelection,
    CancelSelection,
    ClearCart,
    BeginCheckout,
    CompleteCheckout,
}

// Cloned view of the kiosk handed to subscribers
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub catalog: Arc<Catalog>,
    pub selection: SelectionState,
    pub cart: Cart,
    pub receipt: Option<Receipt>,
}

impl Snapshot {
    pub fn screen(&self) -> Screen {
        screen_of(&self.selection, self.receipt.as_ref())
    }

    pub fn visible_menus(&self) -> Vec<&MenuEntry> {
        self.selection.visible_menus(&self.catalog)
    }
}

// Events sent from the kiosk to its subscribers
#[derive(Debug, Clone)]
pub enum KioskEvent {
    Changed(Snapshot),
}

// State store of one kiosk session
#[derive(Debug)]
pub struct Kiosk {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    cart: Cart,
    receipt: Option<Receipt>,
    numbers: ReceiptNumbers,
    subscribers: Vec<mpsc::UnboundedSender<KioskEvent>>,
}

impl Kiosk {
    pub fn new(catalog: Arc<Catalog>, numbers: ReceiptNumbers) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            cart: Cart::new(),
            receipt: None,
            numbers,
            subscribers: Vec::new(),
        }
    }

    // Receive a snapshot after every state change
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<KioskEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            catalog: Arc::clone(&self.catalog),
            selection: self.selection.clone(),
            cart: self.cart.clone(),
            receipt: self.receipt.clone(),
        }
    }

    pub fn screen(&self) -> Screen {
        screen_of(&self.selection, self.receipt.as_ref())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn total_amount(&self) -> u64 {
        self.cart.total()
    }

    pub fn visible_menus(&self) -> Vec<&MenuEntry> {
        self.selection.visible_menus(&self.catalog)
    }

    // Apply an action if the current screen offers it; returns whether state changed
    pub fn dispatch(&mut self, action: Action) -> bool {
        let screen = self.screen();
        let changed = match (screen, action.clone()) {
            (Screen::Start | Screen::Browsing, Action::ChooseOrderType(order_type)) => {
                let changed = self.selection.order_type != Some(order_type);
                self.selection.order_type = Some(order_type);
                changed
            }
            (Screen::Browsing, Action::SetCategory(category)) => {
                let changed = self.selection.active_category != category;
                self.selection.set_category(category);
                changed
            }
            (Screen::Browsing, Action::SelectMenu(id)) => self.select_menu(id),
            (Screen::Browsing, Action::PressTile(position)) => {
                let id = position
                    .checked_sub(1)
                    .and_then(|i| self.visible_menus().get(i).map(|e| e.id));
                match id {
                    Some(id) => self.select_menu(id),
                    None => false,
                }
            }
            (Screen::Browsing, Action::ClearCart) => {
                let changed = !self.cart.is_empty();
                self.cart.clear();
                changed
            }
            (Screen::Browsing, Action::BeginCheckout) if !self.cart.is_empty() => {
                self.begin_checkout();
                true
            }
            (Screen::ConfiguringOption, Action::ChooseOption(name)) => {
                self.selection.choose_option(&name)
            }
            (Screen::ConfiguringOption, Action::PressOption(position)) => {
                let name = self.selection.pending.as_ref().and_then(|p| {
                    position
                        .checked_sub(1)
                        .and_then(|i| p.menu.options.get(i))
                        .map(|o| o.name.clone())
                });
                match name {
                    Some(name) => self.selection.choose_option(&name),
                    None => false,
                }
            }
            (Screen::ConfiguringOption, Action::ConfirmSelection) => {
                if let Some(pending) = self.selection.take_pending() {
                    self.cart.add(&pending.menu, Some(&pending.option));
                }
                true
            }
            (Screen::ConfiguringOption, Action::CancelSelection) => {
                self.selection.cancel_selection()
            }
            (Screen::Receipt, Action::CompleteCheckout) => {
                self.complete_checkout();
                true
            }
            _ => false,
        };

        if changed {
            debug!(?action, "applied");
            self.notify();
        } else {
            debug!(?action, ?screen, "ignored");
        }
        changed
    }

    fn select_menu(&mut self, id: MenuId) -> bool {
        let Some(entry) = self.catalog.get(id) else {
            return false;
        };
        match self.selection.select_menu(entry) {
            MenuPick::Unavailable => false,
            MenuPick::AddDirectly => {
                self.cart.add(entry, None);
                true
            }
            MenuPick::Configuring => true,
        }
    }

    fn begin_checkout(&mut self) {
        let receipt = Receipt::issue(
            &self.cart,
            self.selection.order_type,
            Local::now(),
            &mut self.numbers,
        );
        info!(number = receipt.number, total = receipt.total, "checkout");
        self.receipt = Some(receipt);
    }

    fn complete_checkout(&mut self) {
        self.receipt = None;
        self.cart.clear();
        self.selection.reset();
    }

    // Publish the new state; closed subscribers are dropped
    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.subscribers
            .retain(|tx| tx.send(KioskEvent::Changed(snapshot.clone())).is_ok());
    }
}

fn screen_of(selection: &SelectionState, receipt: Option<&Receipt>) -> Screen {
    if receipt.is_some() {
        Screen::Receipt
    } else if selection.order_type.is_none() {
        Screen::Start
    } else if selection.is_configuring() {
        Screen::ConfiguringOption
    } else {
        Screen::Browsing
    }
}
