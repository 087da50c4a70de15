use crate::models::{CustomerRef, Order};

/// Append-only record of every booking made since the process started.
pub struct OrderLog {
    orders: Vec<Order>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    pub fn append(&mut self, customer: CustomerRef, movie: String, seats: Vec<String>) -> Order {
        let order = Order::new(customer, movie, seats);
        self.orders.push(order.clone());
        order
    }

    /// Orders in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderLog {
    fn default() -> Self {
        Self::new()
    }
}
