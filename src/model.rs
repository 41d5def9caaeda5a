use std::fmt;

use serde::{Deserialize, Serialize};


// Catalog identifier of a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub u32);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Menu categories, doubling as the tab filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(alias = "all", alias = "전체")]
    All,
    #[serde(alias = "burger", alias = "버거")]
    Burger,
    #[serde(alias = "side", alias = "사이드")]
    Side,
    #[serde(alias = "drink", alias = "음료")]
    Drink,
}

impl Category {
    // Tab order on screen
    pub const TABS: [Category; 4] = [
        Category::All,
        Category::Burger,
        Category::Side,
        Category::Drink,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "전체",
            Category::Burger => "버거",
            Category::Side => "사이드",
            Category::Drink => "음료",
        }
    }

    // Whether an entry of category `other` shows up under this tab
    pub fn admits(&self, other: Category) -> bool {
        *self == Category::All || *self == other
    }
}

// Dine-in or takeaway, chosen on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    DineIn,
    Takeaway,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::DineIn => "매장",
            OrderType::Takeaway => "포장",
        }
    }
}

// A priced modifier of a menu entry, e.g. a combo upgrade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionEntry {
    pub name: String,
    #[serde(alias = "price")]
    pub price_delta: u32,
}

impl OptionEntry {
    pub fn new(name: impl Into<String>, price_delta: u32) -> Self {
        Self {
            name: name.into(),
            price_delta,
        }
    }
}

// One purchasable item of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: MenuId,
    pub name: String,
    pub base_price: u32,
    pub category: Category,
    #[serde(alias = "img")]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionEntry>,
}

impl MenuEntry {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        base_price: u32,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: MenuId(id),
            name: name.into(),
            base_price,
            category,
            image: image.into(),
            tag: None,
            sold_out: false,
            options: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_options(mut self, options: Vec<OptionEntry>) -> Self {
        self.options = options;
        self
    }

    pub fn sold_out(mut self) -> Self {
        self.sold_out = true;
        self
    }

    pub fn option(&self, name: &str) -> Option<&OptionEntry> {
        self.options.iter().find(|o| o.name == name)
    }

    // Price of this entry with the given option applied; catalog validation rules out overflow
    pub fn price_with(&self, option: Option<&OptionEntry>) -> u32 {
        self.base_price + option.map_or(0, |o| o.price_delta)
    }
}

// Identity of a cart line: same entry with the same option merges
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeKey {
    pub menu_id: MenuId,
    // None is the no-option sentinel, distinct from every option name
    pub option: Option<String>,
}

impl MergeKey {
    pub fn new(menu_id: MenuId, option: Option<&OptionEntry>) -> Self {
        Self {
            menu_id,
            option: option.map(|o| o.name.clone()),
        }
    }
}

impl fmt::Display for MergeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.option {
            Some(name) => write!(f, "{}-{}", self.menu_id, name),
            None => write!(f, "{}-default", self.menu_id),
        }
    }
}

// A line of the cart; carries copies of the entry fields it displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub merge_key: MergeKey,
    pub menu_id: MenuId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub chosen_option: Option<OptionEntry>,
    // Fixed when the line is first added
    pub unit_price: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        u64::from(self.unit_price) * u64::from(self.quantity)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_key_separates_options_from_sentinel() {
        let plain = MergeKey::new(MenuId(1), None);
        let named_default = OptionEntry::new("default", 0);
        let with_option = MergeKey::new(MenuId(1), Some(&named_default));

        assert_ne!(plain, with_option);
        assert_eq!(plain.to_string(), "1-default");
    }

    #[test]
    fn price_with_adds_option_delta() {
        let entry = MenuEntry::new(1, "더블 치즈버거", 6800, Category::Burger, "🍔")
            .with_options(vec![OptionEntry::new("단품", 0), OptionEntry::new("세트", 2500)]);

        assert_eq!(entry.price_with(None), 6800);
        assert_eq!(entry.price_with(entry.option("세트")), 9300);
        assert!(entry.option("라지").is_none());
    }

    #[test]
    fn all_tab_admits_every_category() {
        for cat in Category::TABS {
            assert!(Category::All.admits(cat));
        }
        assert!(Category::Side.admits(Category::Side));
        assert!(!Category::Side.admits(Category::Drink));
    }

    #[test]
    fn entry_deserializes_from_camel_case_json() {
        let json = r#"{
            "id": 1, "name": "새우버거", "basePrice": 5200, "category": "버거", "img": "🍤",
            "options": [{ "name": "단품", "price": 0 }, { "name": "세트", "priceDelta": 2500 }]
        }"#;
        let entry: MenuEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, MenuId(1));
        assert_eq!(entry.category, Category::Burger);
        assert!(!entry.sold_out);
        assert_eq!(entry.options[1].price_delta, 2500);
    }
}
