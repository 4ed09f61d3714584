pub mod pagination;
pub mod quiz;
pub mod search;

pub use pagination::{QUESTIONS_PER_PAGE, paginate, parse_page};
pub use quiz::{QuizSelector, draw_question};
pub use search::search_questions;
