//! Sidebar navigation
//!
//! The sidebar is a fixed two-level tree. Which item is highlighted, and
//! which section is unfolded, follows from the current route alone.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Route prefix owned by this item; nested routes (`/…/5/edit`) stay on it
    pub route: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    pub items: &'static [NavItem],
}

const fn item(label: &'static str, route: &'static str) -> NavItem {
    NavItem { label, route }
}

/// Admin panel navigation tree
pub const NAVIGATION: &[NavSection] = &[
    NavSection {
        id: "pos",
        label: "Касса",
        items: &[
            item("Смена", "/pos/shift"),
            item("Залы и столы", "/pos/floor"),
        ],
    },
    NavSection {
        id: "catalog",
        label: "Меню",
        items: &[
            item("Техкарты", "/catalog/technical-cards"),
            item("Ингредиенты", "/catalog/ingredients"),
        ],
    },
    NavSection {
        id: "inventory",
        label: "Склад",
        items: &[
            item("Склады", "/inventory/warehouses"),
            item("Поставщики", "/inventory/suppliers"),
            item("Остатки", "/inventory"),
        ],
    },
    NavSection {
        id: "marketing",
        label: "Маркетинг",
        items: &[
            item("Клиенты", "/marketing/customers"),
            item("Группы клиентов", "/marketing/customer-groups"),
            item("Программы лояльности", "/marketing/loyalty"),
            item("Акции", "/marketing/promotions"),
        ],
    },
    NavSection {
        id: "finance",
        label: "Финансы",
        items: &[
            item("Транзакции", "/finance/transactions"),
            item("Смены", "/finance/shifts"),
        ],
    },
    NavSection {
        id: "reports",
        label: "Отчёты",
        items: &[item("Движение товаров", "/reports/movements")],
    },
];

/// Path without query, fragment or trailing slash
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether `prefix` owns `path`, comparing whole segments only
fn route_matches(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Sidebar state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    /// (section index, item index) of the highlighted item
    active: Option<(usize, usize)>,
    expanded: BTreeSet<&'static str>,
}

impl Sidebar {
    /// Sidebar for a freshly loaded route
    pub fn for_route(path: &str) -> Self {
        let mut sidebar = Self::default();
        sidebar.navigate(path);
        sidebar
    }

    /// Follow a route change. The active item is the one with the longest
    /// matching prefix; its section unfolds, other sections keep their state.
    pub fn navigate(&mut self, path: &str) {
        let path = normalize(path);
        self.active = NAVIGATION
            .iter()
            .enumerate()
            .flat_map(|(s, section)| section.items.iter().enumerate().map(move |(i, item)| (s, i, item)))
            .filter(|(_, _, item)| route_matches(path, item.route))
            .max_by_key(|(_, _, item)| item.route.len())
            .map(|(s, i, _)| (s, i));
        if let Some(section) = self.active_section() {
            self.expanded.insert(section.id);
        }
    }

    /// Fold or unfold a section by id
    pub fn toggle(&mut self, section_id: &str) {
        let Some(section) = NAVIGATION.iter().find(|s| s.id == section_id) else {
            return;
        };
        if !self.expanded.remove(section.id) {
            self.expanded.insert(section.id);
        }
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expanded.contains(section_id)
    }

    pub fn active_section(&self) -> Option<&'static NavSection> {
        self.active.map(|(s, _)| &NAVIGATION[s])
    }

    pub fn active_item(&self) -> Option<&'static NavItem> {
        self.active.map(|(s, i)| &NAVIGATION[s].items[i])
    }

    pub fn is_active(&self, route: &str) -> bool {
        self.active_item().is_some_and(|item| item.route == route)
    }

    pub fn sections(&self) -> &'static [NavSection] {
        NAVIGATION
    }
}
