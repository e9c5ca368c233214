pub mod content;
pub mod entities;
pub mod use_cases;
