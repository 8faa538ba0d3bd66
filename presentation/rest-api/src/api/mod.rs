pub mod birth_list;
pub mod cart;
pub mod error;
pub mod health;
pub mod invoice;
pub mod order;
pub mod product;
pub mod security;
pub mod tags;
