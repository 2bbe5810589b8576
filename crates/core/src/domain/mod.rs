pub mod attribute;
pub mod package;
pub mod product;
