mod category;

pub use category::{Category, CreateCategory, DEFAULT_CATEGORIES};
