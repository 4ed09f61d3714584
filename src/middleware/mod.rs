pub mod cors;
pub mod json_body;
pub mod page;

pub use cors::cors;
pub use json_body::JsonBody;
pub use page::Page;
