pub mod chat;
pub mod landing;
