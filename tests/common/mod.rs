use quiz_balancer::{Id, QuestionRecord};

/// Builds `n` questions with `k` options whose correct answer is always the
/// first option — the worst-case skew the balancer exists to fix.
pub fn biased_questions(n: usize, k: usize) -> Vec<QuestionRecord> {
    (0..n)
        .map(|i| QuestionRecord {
            id: Id::from(i as i64),
            text: format!("Question {}", i),
            options: biased_options(k),
            correct: 0,
            section: Some("General".to_string()),
            passage: None,
        })
        .collect()
}

pub fn biased_options(k: usize) -> Vec<String> {
    (0..k)
        .map(|slot| {
            if slot == 0 {
                "Correct".to_string()
            } else {
                format!("Wrong {}", char::from(b'A' + slot as u8 - 1))
            }
        })
        .collect()
}
