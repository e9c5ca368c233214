pub mod asset;
pub mod blog_post;
pub mod course;
pub mod entity;
pub mod project;
pub mod showcase;
pub mod validation;
