use crate::db::Question;

/// Questions whose text contains `term`, ignoring case. Input order is kept.
pub fn search_questions(questions: Vec<Question>, term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}
