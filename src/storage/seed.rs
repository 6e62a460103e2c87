//! Fixture data the mock starts from

use crate::core::{Collection, Customer, Order, OrderItem, Store};

/// Build the sample database: 4 customers and 10 orders
pub fn seed_store() -> Store {
    Store::new()
        .with_collection("customers", Collection::Customers(customers()))
        .with_collection("orders", Collection::Orders(orders()))
}

fn customers() -> Vec<Customer> {
    vec![
        Customer::new(1, "Ted James", "Phoenix", 40.99),
        Customer::new(2, "Michelle Thompson", "Los Angeles", 89.99),
        Customer::new(3, "James Thomas", "Las Vegas", 29.99),
        Customer::new(4, "Tina Adams", "Seattle", 15.99),
    ]
}

fn orders() -> Vec<Order> {
    vec![
        Order::new(
            1,
            1,
            vec![
                OrderItem::new(1, "Baseball", 9.99),
                OrderItem::new(2, "Bat", 19.99),
            ],
        ),
        Order::new(
            2,
            2,
            vec![
                OrderItem::new(3, "Basketball", 7.99),
                OrderItem::new(4, "Shoes", 199.99),
            ],
        ),
        Order::new(
            3,
            3,
            vec![
                OrderItem::new(5, "Frisbee", 2.99),
                OrderItem::new(6, "Hat", 5.99),
            ],
        ),
        Order::new(
            4,
            4,
            vec![
                OrderItem::new(7, "Boomerang", 29.99),
                OrderItem::new(8, "Helmet", 19.99),
                OrderItem::new(9, "Kangaroo Saddle", 179.99),
            ],
        ),
        Order::new(
            5,
            5,
            vec![
                OrderItem::new(10, "Budgie Smugglers", 19.99),
                OrderItem::new(11, "Swimming Cap", 5.49),
            ],
        ),
        Order::new(
            6,
            6,
            vec![
                OrderItem::new(12, "Bow", 399.99),
                OrderItem::new(13, "Arrows", 69.99),
            ],
        ),
        Order::new(
            7,
            7,
            vec![
                OrderItem::new(14, "Baseball", 9.99),
                OrderItem::new(15, "Bat", 19.99),
            ],
        ),
        Order::new(
            8,
            8,
            vec![
                OrderItem::new(16, "Surfboard", 299.99),
                OrderItem::new(17, "Wax", 5.99),
                OrderItem::new(18, "Shark Repellent", 15.99),
            ],
        ),
        Order::new(
            9,
            9,
            vec![
                OrderItem::new(19, "Saddle", 599.99),
                OrderItem::new(20, "Riding cap", 79.99),
            ],
        ),
        Order::new(
            10,
            10,
            vec![
                OrderItem::new(21, "Baseball", 9.99),
                OrderItem::new(22, "Bat", 19.99),
            ],
        ),
    ]
}
