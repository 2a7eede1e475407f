mod home;
pub use home::Home;

mod catalog;
pub use catalog::Catalog;
