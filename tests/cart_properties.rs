use burger_kiosk::{Cart, Category, MenuEntry, OptionEntry};
use proptest::prelude::*;
use std::collections::HashSet;


fn menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(1, "더블 치즈버거", 6800, Category::Burger, "🍔")
            .with_options(vec![OptionEntry::new("단품", 0), OptionEntry::new("세트", 2500)]),
        MenuEntry::new(3, "새우버거", 5200, Category::Burger, "🍤")
            .with_options(vec![OptionEntry::new("단품", 0), OptionEntry::new("세트", 2500)]),
        MenuEntry::new(101, "감자튀김 (M)", 2000, Category::Side, "🍟"),
        MenuEntry::new(202, "아이스 아메리카노", 2500, Category::Drink, "☕️"),
    ]
}

// (entry index, option index or none)
fn picks() -> impl Strategy<Value = Vec<(usize, Option<usize>)>> {
    prop::collection::vec((0usize..4, prop::option::of(0usize..2)), 0..60)
}

fn apply(cart: &mut Cart, entries: &[MenuEntry], (entry, option): (usize, Option<usize>)) {
    let entry = &entries[entry];
    cart.add(entry, option.and_then(|i| entry.options.get(i)));
}

proptest! {
    #[test]
    fn total_is_sum_of_lines(seq in picks()) {
        let entries = menu();
        let mut cart = Cart::new();
        for pick in seq {
            apply(&mut cart, &entries, pick);
        }
        let expected: u64 = cart
            .lines()
            .iter()
            .map(|l| u64::from(l.unit_price) * u64::from(l.quantity))
            .sum();
        prop_assert_eq!(cart.total(), expected);
    }

    #[test]
    fn total_never_decreases_while_adding(seq in picks()) {
        let entries = menu();
        let mut cart = Cart::new();
        let mut last = 0;
        for pick in seq {
            apply(&mut cart, &entries, pick);
            prop_assert!(cart.total() >= last);
            last = cart.total();
        }
        cart.clear();
        prop_assert_eq!(cart.total(), 0);
    }

    #[test]
    fn one_line_per_merge_key(seq in picks()) {
        let entries = menu();
        let mut cart = Cart::new();
        for pick in &seq {
            apply(&mut cart, &entries, *pick);
        }
        let keys: HashSet<_> = cart.lines().iter().map(|l| l.merge_key.clone()).collect();
        prop_assert_eq!(keys.len(), cart.len());
        let units: u32 = cart.lines().iter().map(|l| l.quantity).sum();
        prop_assert_eq!(units as usize, seq.len());
    }

    #[test]
    fn same_pick_k_times_is_one_line(k in 1usize..50, with_set in any::<bool>()) {
        let entries = menu();
        let pick = (0, if with_set { Some(1) } else { None });
        let mut cart = Cart::new();
        for _ in 0..k {
            apply(&mut cart, &entries, pick);
        }
        prop_assert_eq!(cart.len(), 1);
        prop_assert_eq!(cart.lines()[0].quantity as usize, k);
    }
}
