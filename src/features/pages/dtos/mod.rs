pub mod page_dtos;

pub use page_dtos::FormBannerQuery;
