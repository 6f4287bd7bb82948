use std::collections::HashSet;
use std::fmt;

use anyhow::{Context, bail, ensure};
use serde::{Deserialize, Serialize};

const BUILTIN_MENU: &str = include_str!("../data/menu.json");

/// Text form of the "show everything" selector.
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: String, // already formatted, e.g. "$18"
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub tag: String,
    pub label: String,
}

/// Which slice of the catalog is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => item.category == *tag,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(s.to_owned())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Tag(tag) => f.write_str(tag),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    pub fn from_json(src: &str) -> anyhow::Result<Self> {
        let catalog: Catalog = serde_json::from_str(src).context("parse menu catalog")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The menu shipped with the site (`data/menu.json`).
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_MENU)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filter(&self, selector: &CategoryFilter) -> Vec<MenuItem> {
        filter(&self.items, selector).into_iter().cloned().collect()
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.categories.is_empty(), "catalog declares no categories");

        let mut tags = HashSet::new();
        for c in &self.categories {
            ensure!(c.tag != ALL, "category tag `{ALL}` is reserved");
            ensure!(tags.insert(c.tag.as_str()), "duplicate category tag `{}`", c.tag);
        }

        let mut ids = HashSet::new();
        for item in &self.items {
            if !ids.insert(item.id) {
                bail!("duplicate menu item id {}", item.id);
            }
            ensure!(!item.name.trim().is_empty(), "menu item {} has no name", item.id);
            ensure!(
                tags.contains(item.category.as_str()),
                "menu item {} uses undeclared category `{}`",
                item.id,
                item.category
            );
        }

        Ok(())
    }
}

/// Items matching `selector`, in catalog order. Unknown tags give an empty list.
pub fn filter<'a>(items: &'a [MenuItem], selector: &CategoryFilter) -> Vec<&'a MenuItem> {
    items.iter().filter(|item| selector.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.items().len(), 6);
        let tags: Vec<_> = catalog.categories().iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, ["pizza", "sides", "drinks"]);
        assert_eq!(catalog.items().iter().filter(|i| i.popular).count(), 2);
    }

    #[test]
    fn every_category_filters_to_its_own_items_in_order() {
        let catalog = Catalog::builtin().unwrap();
        for c in catalog.categories() {
            let got = catalog.filter(&CategoryFilter::Tag(c.tag.clone()));
            let want: Vec<_> = catalog
                .items()
                .iter()
                .filter(|i| i.category == c.tag)
                .cloned()
                .collect();
            assert!(!got.is_empty());
            assert_eq!(got, want);
        }
    }

    #[test]
    fn all_returns_whole_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.filter(&CategoryFilter::All), catalog.items());
    }

    #[test]
    fn unknown_tag_is_empty() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.filter(&"desserts".into()).is_empty());
    }

    #[test]
    fn sides_keep_declared_order() {
        let catalog = Catalog::builtin().unwrap();
        let sides = catalog.filter(&"sides".into());
        assert_eq!(names(&sides), ["Garlic Knot Stack", "Arugula Burrata Salad"]);
    }

    #[test]
    fn selector_text_form() {
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from("pizza"), CategoryFilter::Tag("pizza".into()));
        assert_eq!(CategoryFilter::All.to_string(), "all");
        assert_eq!(CategoryFilter::Tag("drinks".into()).to_string(), "drinks");
    }

    fn doc(items: &str) -> String {
        format!(r#"{{ "categories": [{{ "tag": "pizza", "label": "Pizza" }}], "items": [{items}] }}"#)
    }

    fn item(id: u32, name: &str, category: &str) -> String {
        format!(
            r#"{{ "id": {id}, "name": "{name}", "category": "{category}", "price": "$1",
                 "description": "", "image": "x.jpg" }}"#
        )
    }

    #[test]
    fn rejects_duplicate_ids() {
        let src = doc(&format!("{},{}", item(1, "a", "pizza"), item(1, "b", "pizza")));
        let err = Catalog::from_json(&src).unwrap_err();
        assert!(err.to_string().contains("duplicate menu item id 1"));
    }

    #[test]
    fn rejects_blank_names() {
        let err = Catalog::from_json(&doc(&item(3, "  ", "pizza"))).unwrap_err();
        assert!(err.to_string().contains("no name"));
    }

    #[test]
    fn rejects_undeclared_category() {
        let err = Catalog::from_json(&doc(&item(2, "Cannoli", "desserts"))).unwrap_err();
        assert!(err.to_string().contains("`desserts`"));
    }

    #[test]
    fn rejects_reserved_tag() {
        let src = r#"{ "categories": [{ "tag": "all", "label": "All" }], "items": [] }"#;
        assert!(Catalog::from_json(src).is_err());
    }

    #[test]
    fn popular_defaults_to_false() {
        let catalog = Catalog::from_json(&doc(&item(9, "Calzone", "pizza"))).unwrap();
        assert!(!catalog.items()[0].popular);
    }
}
