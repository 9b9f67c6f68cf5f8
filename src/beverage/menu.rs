//! Menu configuration: the base drink plus the add-on table, as JSON.
//!
//! Menu files are checked against `schema/menu.schema.json` before they are
//! deserialized, so structural mistakes surface with every violation listed.
//! Key uniqueness is enforced later, when the add-ons are registered.

use crate::beverage::{
    AddOnSpec, BaseBeverage, DynBeverage, builtin_add_ons, composer_from_specs,
};
use crate::composer::ChainComposer;
use crate::schema_loader::load_json_schema;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a menu file to load instead of the built-in one.
pub const MENU_ENV: &str = "CAPWEAVE_MENU";

const MENU_SCHEMA: &str = include_str!("../../schema/menu.schema.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub schema_version: String,
    pub base: BaseBeverage,
    pub add_ons: Vec<AddOnSpec>,
}

impl MenuConfig {
    /// The menu shipped as `schema/menu.json`.
    pub fn builtin() -> Self {
        Self {
            schema_version: "menu_v1".to_string(),
            base: BaseBeverage::simple_coffee(),
            add_ons: builtin_add_ons(),
        }
    }

    /// Read, validate, and parse a menu file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading menu {}", path.display()))?;
        let value: Value = serde_json::from_str(&data)
            .with_context(|| format!("parsing menu {}", path.display()))?;
        let menu = Self::from_value(value, &path.display().to_string())?;
        debug!(path = %path.display(), add_ons = menu.add_ons.len(), "loaded menu");
        Ok(menu)
    }

    /// Validate an already-parsed menu document; `origin` names it in errors.
    pub fn from_value(value: Value, origin: &str) -> Result<Self> {
        let schema = load_json_schema("menu.schema.json", MENU_SCHEMA)?;
        schema.validate(&value, origin)?;
        let menu: MenuConfig = serde_json::from_value(value)
            .with_context(|| format!("decoding menu {origin}"))?;
        if menu.schema_version != schema.schema_version {
            bail!(
                "{origin}: schema_version '{}' does not match '{}'",
                menu.schema_version,
                schema.schema_version
            );
        }
        Ok(menu)
    }

    /// Composer with one layer per configured add-on.
    pub fn composer(&self) -> Result<ChainComposer<DynBeverage>> {
        composer_from_specs(&self.add_ons).context("registering menu add-ons")
    }

    /// Fresh base drink for a new order.
    pub fn base(&self) -> Box<DynBeverage> {
        Box::new(self.base.clone())
    }
}

/// Menu path named by `CAPWEAVE_MENU`, if set and non-empty.
pub fn menu_path_from_env() -> Option<PathBuf> {
    env::var_os(MENU_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Pick the menu to use: an explicit path wins, then `CAPWEAVE_MENU`, then
/// the built-in menu.
pub fn resolve_menu(explicit: Option<&Path>) -> Result<MenuConfig> {
    if let Some(path) = explicit {
        return MenuConfig::load(path);
    }
    if let Some(path) = menu_path_from_env() {
        return MenuConfig::load(&path);
    }
    Ok(MenuConfig::builtin())
}
