pub mod admin;
pub mod categories;
pub mod dashboard;
pub mod documents;
pub mod pages;
pub mod reports;
