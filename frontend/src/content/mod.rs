//! Fixed page copy. Nothing here is computed at runtime besides the
//! derived pricing and purchase links in [`products`].

pub mod catalog;
pub mod products;
