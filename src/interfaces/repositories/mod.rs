pub mod gateway;
pub mod image_resolver;
pub mod store;
pub mod supabase;
