//! 菜单模型和商品名归一化
//!
//! 菜单在启动时构建，之后不可变。所有别名都是小写，
//! 并且每个别名只映射到一个规范名。

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Canonical name, unique across the menu (cart/menu join key)
    pub name: String,
    /// Price in Rupiah (no minor unit)
    pub price: i64,
    /// Accepted surface forms, lowercase
    pub aliases: Vec<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: i64, aliases: &[&str]) -> Self {
        Self {
            name: name.into(),
            price,
            aliases: aliases.iter().map(|a| a.to_lowercase()).collect(),
        }
    }
}

/// The full menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// 默认菜单 - 3 个商品的小吃摊菜单
    pub fn warung() -> Self {
        Self::new(vec![
            MenuItem::new("Ayam Bakar", 15000, &["ayam", "ayam bakar", "ayam panggang"]),
            MenuItem::new(
                "Es Teh Manis",
                5000,
                &["es teh", "teh", "es teh manis", "esteh", "teh manis"],
            ),
            MenuItem::new("Nasi Putih", 4000, &["nasi", "nasi putih"]),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up a menu item by canonical name
    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Resolve a (possibly noisy) model-supplied product name
    ///
    /// Lookup priority: case-insensitive exact name, exact alias,
    /// bidirectional substring containment against aliases, then a
    /// last-resort keyword heuristic. When nothing matches, the raw
    /// string is returned unchanged and callers must treat it as an
    /// unknown product.
    pub fn normalize(&self, name: &str) -> String {
        let lower = name.to_lowercase();
        let lower = lower.trim();
        if lower.is_empty() {
            return name.to_string();
        }

        for item in &self.items {
            // Exact match on canonical name
            if item.name.to_lowercase() == lower {
                return item.name.clone();
            }
            // Exact alias match
            if item.aliases.iter().any(|a| a == lower) {
                return item.name.clone();
            }
            // Partial match against aliases, both directions
            if item
                .aliases
                .iter()
                .any(|a| lower.contains(a.as_str()) || a.contains(lower))
            {
                return item.name.clone();
            }
        }

        // Keyword fallback. "teh"/"es" both hit Es Teh Manis; only safe
        // while the menu has exactly these three items - revisit before
        // any menu extension.
        if lower.contains("ayam") {
            return "Ayam Bakar".to_string();
        }
        if lower.contains("teh") || lower.contains("es") {
            return "Es Teh Manis".to_string();
        }
        if lower.contains("nasi") {
            return "Nasi Putih".to_string();
        }

        name.to_string()
    }

    /// Resolve a model-supplied name to a known menu item
    ///
    /// Returns `None` when normalization falls through to pass-through,
    /// i.e. the name does not denote any product on the menu.
    pub fn resolve(&self, name: &str) -> Option<&MenuItem> {
        self.get(&self.normalize(name))
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::warung()
    }
}
