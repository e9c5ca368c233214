pub mod blog;
pub mod carousel;
pub mod catalog;
pub mod form_flow;
pub mod pages;
pub mod search;
pub mod submission;
pub mod typewriter;
pub mod view_switcher;
