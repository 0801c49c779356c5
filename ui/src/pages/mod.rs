//! Pages of the application. There is a single page today.

mod home_page;

pub use home_page::home_page;
