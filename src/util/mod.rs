//! Display helpers shared by list, detail and form views.

pub mod color;
pub mod date;
