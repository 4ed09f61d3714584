use serde::Deserialize;

use crate::db::NewQuestion;
use crate::error::TriviaError;

/// A JSON number or a numeric string; the front end sends both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

impl IntOrString {
    /// Integer value; numeric strings are accepted.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IntOrString::Int(n) => Some(*n),
            // integral floats only, e.g. `2.0`
            IntOrString::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Some(*f as i64)
            }
            IntOrString::Float(_) => None,
            IntOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<IntOrString>,
    pub category: Option<IntOrString>,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = TriviaError;

    /// Every field must be present and truthy: non-empty text, positive integers.
    /// Whitespace-only text counts as present.
    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let text = |field: &str, v: Option<String>| match v {
            Some(s) if !s.is_empty() => Ok(s),
            _ => Err(TriviaError::unprocessable(format!("missing `{field}`"))),
        };
        let positive = |field: &str, v: Option<IntOrString>| match v.and_then(|v| v.as_i64()) {
            Some(n) if n > 0 => Ok(n),
            _ => Err(TriviaError::unprocessable(format!(
                "`{field}` must be a positive integer"
            ))),
        };

        Ok(NewQuestion {
            question: text("question", req.question)?,
            answer: text("answer", req.answer)?,
            difficulty: positive("difficulty", req.difficulty)?,
            category: positive("category", req.category)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(alias = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: Option<IntOrString>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> CreateQuestionRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn accepts_numeric_strings() {
        let new = NewQuestion::try_from(request(
            r#"{"question":"Q?","answer":"A","difficulty":"2","category":3}"#,
        ))
        .unwrap();
        assert_eq!(new.difficulty, 2);
        assert_eq!(new.category, 3);
    }

    #[test]
    fn whitespace_text_and_integral_floats_are_truthy() {
        let new = NewQuestion::try_from(request(
            r#"{"question":" ","answer":"A","difficulty":2.0,"category":"4"}"#,
        ))
        .unwrap();
        assert_eq!(new.question, " ");
        assert_eq!(new.difficulty, 2);
        assert_eq!(new.category, 4);
    }

    #[test]
    fn fractional_difficulty_is_rejected() {
        assert!(matches!(
            NewQuestion::try_from(request(
                r#"{"question":"Q","answer":"A","difficulty":2.5,"category":1}"#
            )),
            Err(TriviaError::Unprocessable(_))
        ));
    }

    #[test]
    fn falsy_fields_are_rejected() {
        let bodies = [
            r#"{"answer":"A","difficulty":1,"category":1}"#,
            r#"{"question":"","answer":"A","difficulty":1,"category":1}"#,
            r#"{"question":"Q","answer":null,"difficulty":1,"category":1}"#,
            r#"{"question":"Q","answer":"A","difficulty":0,"category":1}"#,
            r#"{"question":"Q","answer":"A","difficulty":0.0,"category":1}"#,
            r#"{"question":"Q","answer":"A","difficulty":1,"category":""}"#,
            r#"{"question":"Q","answer":"A","difficulty":1}"#,
        ];
        for body in bodies {
            assert!(
                matches!(
                    NewQuestion::try_from(request(body)),
                    Err(TriviaError::Unprocessable(_))
                ),
                "{body} should be rejected"
            );
        }
    }

    #[test]
    fn quiz_category_reads_type_field() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"quiz_category":{"id":"0","type":"click"},"previous_questions":[4,9]}"#,
        )
        .unwrap();
        let category = req.quiz_category.unwrap();
        assert_eq!(category.kind.as_deref(), Some("click"));
        assert_eq!(category.id.and_then(|id| id.as_i64()), Some(0));
        assert_eq!(req.previous_questions, Some(vec![4, 9]));
    }
}
