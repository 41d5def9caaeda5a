use crate::model::{CartLine, Category};


// Format an amount the way the kiosk prints prices, e.g. 18,600원
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('원');
    out
}

// Map a tab to its position in the tab bar
pub fn tab_index(category: Category) -> usize {
    match category {
        Category::All => 0,
        Category::Burger => 1,
        Category::Side => 2,
        Category::Drink => 3,
    }
}

// Name plus chosen option, as printed on cart previews and receipts
pub fn line_label(line: &CartLine) -> String {
    match &line.chosen_option {
        Some(option) => format!("{} ({})", line.name, option.name),
        None => line.name.clone(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_won(0), "0원");
        assert_eq!(format_won(900), "900원");
        assert_eq!(format_won(6800), "6,800원");
        assert_eq!(format_won(18600), "18,600원");
        assert_eq!(format_won(1_234_567), "1,234,567원");
    }

    #[test]
    fn tab_indices_follow_tab_order() {
        for (i, cat) in Category::TABS.into_iter().enumerate() {
            assert_eq!(tab_index(cat), i);
        }
    }
}
