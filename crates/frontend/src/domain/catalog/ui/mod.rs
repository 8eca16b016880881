pub mod landing;
pub mod subcategories;
