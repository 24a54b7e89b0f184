//! Fixture records shared by the integration tests.
//!
//! Loaded from `tests/data/*.json` so expected values in the tests can be
//! written out by hand against a fixed source.

#![allow(dead_code)]

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub cost: i64,
    pub price: i64,
    pub supplier: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Engineer,
    Manager,
    Operator,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: Role,
    pub month_salary: i64,
    pub age: u32,
    pub working_year: f64,
}

pub fn products() -> Vec<Product> {
    serde_json::from_str(include_str!("../data/products.json")).expect("products fixture")
}

pub fn employees() -> Vec<Employee> {
    serde_json::from_str(include_str!("../data/employees.json")).expect("employees fixture")
}

pub fn urls() -> Vec<String> {
    serde_json::from_str(include_str!("../data/urls.json")).expect("urls fixture")
}

/// Look up fixture employees by name, in the order given.
pub fn employees_named(names: &[&str]) -> Vec<Employee> {
    let all = employees();
    names
        .iter()
        .map(|n| {
            all.iter()
                .find(|e| e.name == *n)
                .cloned()
                .unwrap_or_else(|| panic!("no fixture employee named {n}"))
        })
        .collect()
}

pub fn products_with_ids(ids: &[u32]) -> Vec<Product> {
    let all = products();
    ids.iter()
        .map(|id| {
            all.iter()
                .find(|p| p.id == *id)
                .cloned()
                .unwrap_or_else(|| panic!("no fixture product with id {id}"))
        })
        .collect()
}

pub fn names(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(|e| e.name.as_str()).collect()
}
