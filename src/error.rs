use std::{io, path::PathBuf};

use thiserror::Error;

use crate::model::MenuId;


// Failures at the process boundary; the kiosk core itself never fails
#[derive(Debug, Error)]
pub enum KioskError {
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode catalog {path}: {source}")]
    CatalogDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),

    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
}

// Catalog validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate menu id {0}")]
    DuplicateId(MenuId),

    #[error("menu {menu} lists option {option:?} twice")]
    DuplicateOption { menu: MenuId, option: String },

    #[error("menu {0} has an empty name")]
    EmptyName(MenuId),

    #[error("menu {0} has an empty option name")]
    EmptyOptionName(MenuId),

    #[error("menu {0} costs more than a price can hold with its options")]
    PriceOverflow(MenuId),

    #[error("menu {0} is filed under the All tab instead of a real category")]
    UncategorizedEntry(MenuId),
}
