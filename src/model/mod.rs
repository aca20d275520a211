// File: ./src/model/mod.rs
pub mod item;
pub mod snapshot;

pub use item::{IdGenerator, Item, ItemId};
