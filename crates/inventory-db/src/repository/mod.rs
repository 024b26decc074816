//! # Repository Module
//!
//! Database repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Command Handler                                                       │
//! │       │                                                                 │
//! │       │  db.items().list(&filter)                                      │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── list(&self, filter)                                               │
//! │  ├── insert(&self, fields)                                             │
//! │  ├── update(&self, id, fields)                                         │
//! │  ├── delete(&self, id)                                                 │
//! │  └── distinct_categories(&self)                                        │
//! │       │                                                                 │
//! │       │  SQL statement                                                  │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Inventory item CRUD and
//!   category lookup

pub mod item;
