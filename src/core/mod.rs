pub mod categories;
pub mod reporter;
pub mod resolver;
