use std::{collections::HashSet, fs, path::Path};

use tracing::info;

use crate::{
    error::{CatalogError, KioskError},
    model::{Category, MenuEntry, MenuId, OptionEntry},
};


// Immutable list of menu entries, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, CatalogError> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    // The menu the kiosk ships with
    pub fn builtin() -> Self {
        let combo = || {
            vec![
                OptionEntry::new("단품", 0),
                OptionEntry::new("세트 (감자튀김+콜라)", 2500),
            ]
        };

        Self {
            entries: vec![
                MenuEntry::new(1, "더블 치즈버거", 6800, Category::Burger, "🍔")
                    .with_tag("BEST")
                    .with_options(combo()),
                MenuEntry::new(2, "베이컨 토마토 디럭스", 7500, Category::Burger, "🥓")
                    .with_options(combo()),
                MenuEntry::new(3, "새우버거", 5200, Category::Burger, "🍤")
                    .with_options(combo()),
                MenuEntry::new(101, "감자튀김 (M)", 2000, Category::Side, "🍟"),
                MenuEntry::new(102, "치즈스틱", 2500, Category::Side, "🧀").sold_out(),
                MenuEntry::new(201, "코카콜라 제로", 2000, Category::Drink, "🥤"),
                MenuEntry::new(202, "아이스 아메리카노", 2500, Category::Drink, "☕️"),
            ],
        }
    }

    // Load a JSON array of menu entries
    pub fn from_json_file(path: &Path) -> Result<Self, KioskError> {
        let raw = fs::read_to_string(path).map_err(|source| KioskError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<MenuEntry> =
            serde_json::from_str(&raw).map_err(|source| KioskError::CatalogDecode {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::new(entries)?;
        info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn get(&self, id: MenuId) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    // Entries shown under the given tab, in catalog order
    pub fn visible(&self, category: Category) -> impl Iterator<Item = &MenuEntry> + '_ {
        self.entries.iter().filter(move |e| category.admits(e.category))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(entries: &[MenuEntry]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    for entry in entries {
        if !ids.insert(entry.id) {
            return Err(CatalogError::DuplicateId(entry.id));
        }
        if entry.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(entry.id));
        }
        if entry.category == Category::All {
            return Err(CatalogError::UncategorizedEntry(entry.id));
        }

        let max_delta = entry.options.iter().map(|o| o.price_delta).max().unwrap_or(0);
        if entry.base_price.checked_add(max_delta).is_none() {
            return Err(CatalogError::PriceOverflow(entry.id));
        }

        let mut names = HashSet::new();
        for option in &entry.options {
            if option.name.trim().is_empty() {
                return Err(CatalogError::EmptyOptionName(entry.id));
            }
            if !names.insert(option.name.as_str()) {
                return Err(CatalogError::DuplicateOption {
                    menu: entry.id,
                    option: option.name.clone(),
                });
            }
        }
    }
    Ok(())
}
