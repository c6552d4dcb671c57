//! QR menu shown to guests
//!
//! The published menu is grouped by category for display. Unavailable
//! items are hidden, and so is any category left without items.

use pos_client::{HttpClient, PosClient};
use shared::models::{MenuCategory, MenuItem, PublicMenu};

use crate::BackofficeResult;

/// Category with the items displayed under it
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection<'a> {
    pub category: &'a MenuCategory,
    pub items: Vec<&'a MenuItem>,
}

/// Guest-facing menu state
#[derive(Debug, Clone, Default)]
pub struct QrMenu {
    menu: PublicMenu,
    search: String,
    error: Option<String>,
}

impl QrMenu {
    pub fn new(menu: PublicMenu) -> Self {
        Self {
            menu,
            ..Default::default()
        }
    }

    /// Fetch the menu of a venue
    pub async fn load<H: HttpClient>(client: &PosClient<H>, venue_slug: &str) -> BackofficeResult<Self> {
        let menu = client.public_menu(venue_slug).await?;
        tracing::debug!(venue = venue_slug, items = menu.items.len(), "Menu loaded");
        Ok(Self::new(menu))
    }

    /// Reload in place, keeping the search text
    pub async fn refresh<H: HttpClient>(&mut self, client: &PosClient<H>, venue_slug: &str) -> BackofficeResult<()> {
        match client.public_menu(venue_slug).await {
            Ok(menu) => {
                self.menu = menu;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    pub fn venue_name(&self) -> &str {
        &self.menu.venue_name
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn matches(&self, item: &MenuItem) -> bool {
        let query = self.search.trim().to_lowercase();
        query.is_empty()
            || item.name.to_lowercase().contains(&query)
            || item
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }

    /// Categories in display order with their available, matching items
    pub fn sections(&self) -> Vec<MenuSection<'_>> {
        let mut categories: Vec<&MenuCategory> = self.menu.categories.iter().collect();
        categories.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        categories
            .into_iter()
            .filter_map(|category| {
                let items: Vec<&MenuItem> = self
                    .menu
                    .items
                    .iter()
                    .filter(|i| i.category_id == category.id && i.is_available && self.matches(i))
                    .collect();
                (!items.is_empty()).then_some(MenuSection { category, items })
            })
            .collect()
    }

    /// Number of items currently displayed
    pub fn visible_count(&self) -> usize {
        self.sections().iter().map(|s| s.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, sort_order: i32) -> MenuCategory {
        MenuCategory {
            id,
            name: name.into(),
            sort_order,
        }
    }

    fn item(id: i64, category_id: i64, name: &str, description: Option<&str>, available: bool) -> MenuItem {
        MenuItem {
            id,
            category_id,
            name: name.into(),
            description: description.map(Into::into),
            price: 100.0,
            portion: None,
            image_url: None,
            is_available: available,
        }
    }

    fn menu() -> QrMenu {
        QrMenu::new(PublicMenu {
            venue_name: "Пельменная №1".into(),
            categories: vec![
                category(1, "Супы", 2),
                category(2, "Напитки", 3),
                category(3, "Закуски", 2),
                category(4, "Десерты", 1),
            ],
            items: vec![
                item(1, 1, "Борщ", Some("Со сметаной и чесночными пампушками"), true),
                item(2, 1, "Солянка", None, true),
                item(3, 2, "Морс", Some("Клюквенный"), true),
                item(4, 3, "Сельдь под шубой", None, true),
                item(5, 4, "Медовик", None, false),
            ],
        })
    }

    fn names(menu: &QrMenu) -> Vec<&str> {
        menu.sections().iter().map(|s| s.category.name.as_str()).collect()
    }

    #[test]
    fn test_sections_ordered_and_pruned() {
        let menu = menu();
        // Десерты has only an unavailable item
        assert_eq!(names(&menu), ["Закуски", "Супы", "Напитки"]);
        assert_eq!(menu.visible_count(), 4);
    }

    #[test]
    fn test_search_name_and_description() {
        let mut menu = menu();
        menu.set_search("СМЕТАН");
        assert_eq!(names(&menu), ["Супы"]);
        assert_eq!(menu.sections()[0].items[0].name, "Борщ");

        menu.set_search("морс");
        assert_eq!(names(&menu), ["Напитки"]);

        menu.set_search("медовик");
        assert!(menu.sections().is_empty());

        menu.set_search("  ");
        assert_eq!(menu.visible_count(), 4);
    }
}
