use pos_client::{HttpClient, PosClient};
use shared::models::{Order, Room, Table, TableStatus};

use crate::BackofficeResult;

/// Floor plan: rooms, their tables, and the orders of the selected table
#[derive(Debug, Clone, Default)]
pub struct FloorView {
    rooms: Vec<Room>,
    room_id: Option<i64>,
    table_id: Option<i64>,
    orders: Vec<Order>,
    error: Option<String>,
}

impl FloorView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        let mut view = Self::default();
        view.set_rooms(rooms);
        view
    }

    fn set_rooms(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
        // Keep the selection when the room still exists
        if !self.room_id.is_some_and(|id| self.rooms.iter().any(|r| r.id == id)) {
            self.room_id = self.rooms.first().map(|r| r.id);
        }
        if self.table_id.is_some_and(|id| self.table(id).is_none()) {
            self.table_id = None;
            self.orders.clear();
        }
    }

    pub async fn load<H: HttpClient>(&mut self, client: &PosClient<H>) -> BackofficeResult<()> {
        match client.rooms().await {
            Ok(rooms) => {
                self.set_rooms(rooms);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self) -> Option<&Room> {
        self.room_id
            .and_then(|id| self.rooms.iter().find(|r| r.id == id))
    }

    /// Switch the visible room; unknown ids are ignored
    pub fn select_room(&mut self, room_id: i64) {
        if self.rooms.iter().any(|r| r.id == room_id) {
            self.room_id = Some(room_id);
        }
    }

    /// Tables of the visible room
    pub fn tables(&self) -> &[Table] {
        self.room().map(|r| r.tables.as_slice()).unwrap_or_default()
    }

    fn table(&self, table_id: i64) -> Option<&Table> {
        self.rooms
            .iter()
            .flat_map(|r| &r.tables)
            .find(|t| t.id == table_id)
    }

    pub fn selected_table(&self) -> Option<&Table> {
        self.table_id.and_then(|id| self.table(id))
    }

    /// Orders of the selected table
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Select a table and load its orders
    pub async fn select_table<H: HttpClient>(&mut self, client: &PosClient<H>, table_id: i64) -> BackofficeResult<&[Order]> {
        self.table_id = Some(table_id);
        self.orders.clear();
        match client.orders_for_table(table_id).await {
            Ok(orders) => {
                tracing::debug!(table_id, count = orders.len(), "Table orders loaded");
                self.orders = orders;
                self.error = None;
                Ok(&self.orders)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Start a new order at the selected table
    pub async fn open_order<H: HttpClient>(&mut self, client: &PosClient<H>) -> BackofficeResult<&Order> {
        match client.create_order(self.table_id).await {
            Ok(order) => {
                tracing::info!(order_id = order.id, table_id = ?self.table_id, "Order opened");
                self.error = None;
                self.orders.push(order);
                let last = self.orders.len() - 1;
                Ok(&self.orders[last])
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    fn count(&self, status: TableStatus) -> usize {
        self.tables().iter().filter(|t| t.status == status).count()
    }

    /// Free tables in the visible room
    pub fn free_count(&self) -> usize {
        self.count(TableStatus::Free)
    }

    pub fn occupied_count(&self) -> usize {
        self.count(TableStatus::Occupied)
    }

    pub fn reserved_count(&self) -> usize {
        self.count(TableStatus::Reserved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: i64, status: TableStatus) -> Table {
        Table {
            id,
            name: format!("Стол {id}"),
            seats: 4,
            status,
            current_order_id: None,
        }
    }

    fn rooms() -> Vec<Room> {
        vec![
            Room {
                id: 1,
                name: "Основной зал".into(),
                tables: vec![
                    table(1, TableStatus::Free),
                    table(2, TableStatus::Occupied),
                    table(3, TableStatus::Occupied),
                    table(4, TableStatus::Reserved),
                ],
            },
            Room {
                id: 2,
                name: "Веранда".into(),
                tables: vec![table(10, TableStatus::Free), table(11, TableStatus::Free)],
            },
        ]
    }

    #[test]
    fn test_counts_per_room() {
        let mut floor = FloorView::with_rooms(rooms());
        assert_eq!(floor.room().unwrap().name, "Основной зал");
        assert_eq!(floor.free_count(), 1);
        assert_eq!(floor.occupied_count(), 2);
        assert_eq!(floor.reserved_count(), 1);

        floor.select_room(2);
        assert_eq!(floor.tables().len(), 2);
        assert_eq!(floor.free_count(), 2);
        assert_eq!(floor.occupied_count(), 0);

        floor.select_room(99);
        assert_eq!(floor.room().unwrap().id, 2);
    }

    #[test]
    fn test_empty_floor() {
        let floor = FloorView::new();
        assert!(floor.tables().is_empty());
        assert_eq!(floor.free_count(), 0);
        assert!(floor.selected_table().is_none());
    }

    #[test]
    fn test_reload_keeps_selection() {
        let mut floor = FloorView::with_rooms(rooms());
        floor.select_room(2);
        floor.set_rooms(rooms());
        assert_eq!(floor.room().unwrap().id, 2);

        floor.set_rooms(rooms().into_iter().take(1).collect());
        assert_eq!(floor.room().unwrap().id, 1);
    }
}
