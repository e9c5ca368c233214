pub mod admin;
pub mod blog_posts;
pub mod catalog;
pub mod home;
pub mod json_error;
pub mod search;
pub mod showcase;
pub mod system;
