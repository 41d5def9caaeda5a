use tracing::debug;

use crate::model::{CartLine, MenuEntry, MergeKey, OptionEntry};


// Ordered cart lines, at most one per merge key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    // Add one unit of `entry` with `option`, merging into an existing line
    pub fn add(&mut self, entry: &MenuEntry, option: Option<&OptionEntry>) {
        let key = MergeKey::new(entry.id, option);

        if let Some(line) = self.lines.iter_mut().find(|l| l.merge_key == key) {
            line.quantity += 1;
            debug!(key = %key, quantity = line.quantity, "incremented cart line");
            return;
        }

        debug!(key = %key, "appended cart line");
        self.lines.push(CartLine {
            merge_key: key,
            menu_id: entry.id,
            name: entry.name.clone(),
            image: entry.image.clone(),
            quantity: 1,
            chosen_option: option.cloned(),
            unit_price: entry.price_with(option),
        });
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, MenuId};

    fn burger() -> MenuEntry {
        MenuEntry::new(1, "더블 치즈버거", 6800, Category::Burger, "🍔")
            .with_options(vec![OptionEntry::new("단품", 0), OptionEntry::new("세트", 2500)])
    }

    #[test]
    fn same_option_merges_into_one_line() {
        let entry = burger();
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(&entry, entry.option("세트"));
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.lines()[0].unit_price, 9300);
        assert_eq!(cart.total(), 27900);
    }

    #[test]
    fn different_options_make_separate_lines() {
        let entry = burger();
        let mut cart = Cart::new();
        cart.add(&entry, entry.option("단품"));
        cart.add(&entry, entry.option("세트"));
        cart.add(&entry, None);

        assert_eq!(cart.len(), 3);
        assert!(cart.lines().iter().all(|l| l.quantity == 1));
        assert_eq!(cart.total(), 6800 + 9300 + 6800);
    }

    #[test]
    fn unit_price_is_fixed_at_first_insert() {
        let mut entry = MenuEntry::new(101, "감자튀김 (M)", 2000, Category::Side, "🍟");
        let mut cart = Cart::new();
        cart.add(&entry, None);

        entry.base_price = 3000;
        cart.add(&entry, None);

        assert_eq!(cart.lines()[0].unit_price, 2000);
        assert_eq!(cart.total(), 4000);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let fries = MenuEntry::new(101, "감자튀김 (M)", 2000, Category::Side, "🍟");
        let entry = burger();
        let mut cart = Cart::new();
        cart.add(&fries, None);
        cart.add(&entry, entry.option("세트"));
        cart.add(&fries, None);

        let ids: Vec<MenuId> = cart.lines().iter().map(|l| l.menu_id).collect();
        assert_eq!(ids, vec![MenuId(101), MenuId(1)]);
    }

    #[test]
    fn clear_empties_any_cart() {
        let mut cart = Cart::new();
        cart.clear();
        assert_eq!(cart.total(), 0);

        cart.add(&burger(), None);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }
}
