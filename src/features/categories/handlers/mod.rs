pub mod category_handler;

pub use category_handler::{
    __path_create_category, __path_list_categories, create_category, list_categories,
};
