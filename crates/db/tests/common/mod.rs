#![allow(dead_code)]

use portal_db::models::customer::Customer;
use sqlx::PgPool;

pub fn customer(id: i64, name: &str, address: &str, salary: f64, active: i32) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        address: address.to_string(),
        salary,
        active,
    }
}

/// Rows shared by the store tests.
pub fn fixture() -> Vec<Customer> {
    vec![
        customer(1, "Alice", "100 Main St", 50000.0, 1),
        customer(2, "Bob", "200 Oak Ave", 60000.0, 0),
        customer(3, "Carol", "300 Pine Rd", 70000.0, 1),
        customer(4, "alice", "12 Oakwood Ln", 45000.0, 1),
        customer(5, "Dan_50%", "5 Elm St", 60000.0, 1),
    ]
}

/// Insert `customers` with their explicit ids.
pub async fn seed(pool: &PgPool, customers: &[Customer]) {
    for c in customers {
        sqlx::query(
            "INSERT INTO customers (id, name, address, salary, active) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(c.id)
        .bind(&c.name)
        .bind(&c.address)
        .bind(c.salary)
        .bind(c.active)
        .execute(pool)
        .await
        .unwrap();
    }
}

pub fn ids(customers: &[Customer]) -> Vec<i64> {
    let mut ids: Vec<i64> = customers.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids
}
