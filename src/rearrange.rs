use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::BalanceError;
use crate::models::QuestionRecord;

/// Rebuilds one question so its correct option text sits at `target_slot`.
///
/// The input record is left untouched: a new record is returned with the
/// same option texts, the correct one moved to `target_slot`, the
/// distractors shuffled into the remaining slots, and `correct` updated to
/// match. A `target_slot` past the end of this record's options wraps
/// around, which keeps sets with uneven option counts usable.
pub fn rearrange_question<R: Rng + ?Sized>(
    rng: &mut R,
    record: &QuestionRecord,
    target_slot: usize,
) -> Result<QuestionRecord, BalanceError> {
    let len = record.options.len();
    if len == 0 {
        return Err(BalanceError::EmptyOptions {
            id: record.id.clone(),
        });
    }
    if record.correct >= len {
        return Err(BalanceError::CorrectOutOfRange {
            id: record.id.clone(),
            correct: record.correct,
            len,
        });
    }

    let target_slot = target_slot % len;

    let correct_text = record.options[record.correct].clone();
    let mut distractors: Vec<String> = record
        .options
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != record.correct)
        .map(|(_, text)| text.clone())
        .collect();
    distractors.shuffle(rng);

    // Cannot happen while the invariants above hold; surfaced instead of
    // padded so a short pool never produces a half-filled question.
    if distractors.len() + 1 < len {
        return Err(BalanceError::MissingDistractors {
            id: record.id.clone(),
            missing: len - 1 - distractors.len(),
        });
    }

    let mut options = vec![String::new(); len];
    options[target_slot] = correct_text;
    let open_slots = (0..len).filter(|slot| *slot != target_slot);
    for (slot, text) in open_slots.zip(distractors) {
        options[slot] = text;
    }

    Ok(QuestionRecord {
        id: record.id.clone(),
        text: record.text.clone(),
        options,
        correct: target_slot,
        section: record.section.clone(),
        passage: record.passage.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_record() -> QuestionRecord {
        QuestionRecord {
            id: Id::from(3),
            text: "Choose the correct form.".to_string(),
            options: vec![
                "went".to_string(),
                "goed".to_string(),
                "gone".to_string(),
                "going".to_string(),
            ],
            correct: 0,
            section: Some("Grammar".to_string()),
            passage: None,
        }
    }

    #[test]
    fn correct_text_lands_on_the_target_slot() {
        let record = sample_record();
        let mut rng = StdRng::seed_from_u64(42);

        let rearranged = rearrange_question(&mut rng, &record, 2).unwrap();

        assert_eq!(rearranged.correct, 2);
        assert_eq!(rearranged.options[2], "went");
    }

    #[test]
    fn option_texts_are_a_permutation_of_the_input() {
        let record = sample_record();
        let mut rng = StdRng::seed_from_u64(42);

        let rearranged = rearrange_question(&mut rng, &record, 3).unwrap();

        let mut before = record.options.clone();
        let mut after = rearranged.options.clone();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn untouched_fields_carry_over() {
        let record = sample_record();
        let mut rng = StdRng::seed_from_u64(42);

        let rearranged = rearrange_question(&mut rng, &record, 1).unwrap();

        assert_eq!(rearranged.id, record.id);
        assert_eq!(rearranged.text, record.text);
        assert_eq!(rearranged.section, record.section);
        assert_eq!(rearranged.passage, record.passage);
    }

    #[test]
    fn oversized_target_wraps_around() {
        let record = sample_record();
        let mut rng = StdRng::seed_from_u64(42);

        // Slot 6 against 4 options wraps to slot 2.
        let rearranged = rearrange_question(&mut rng, &record, 6).unwrap();

        assert_eq!(rearranged.correct, 2);
        assert_eq!(rearranged.options[2], "went");
    }

    #[test]
    fn single_option_question_is_a_no_op() {
        let record = QuestionRecord {
            id: Id::from("only"),
            text: "Trivial".to_string(),
            options: vec!["yes".to_string()],
            correct: 0,
            section: None,
            passage: None,
        };
        let mut rng = StdRng::seed_from_u64(42);

        let rearranged = rearrange_question(&mut rng, &record, 5).unwrap();

        assert_eq!(rearranged.correct, 0);
        assert_eq!(rearranged.options, vec!["yes".to_string()]);
    }

    #[test]
    fn empty_options_are_rejected() {
        let record = QuestionRecord {
            id: Id::from(9),
            text: "Broken".to_string(),
            options: vec![],
            correct: 0,
            section: None,
            passage: None,
        };
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(
            rearrange_question(&mut rng, &record, 0),
            Err(BalanceError::EmptyOptions { id: Id::from(9) })
        );
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        let mut record = sample_record();
        record.correct = 4;
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(
            rearrange_question(&mut rng, &record, 0),
            Err(BalanceError::CorrectOutOfRange {
                id: record.id.clone(),
                correct: 4,
                len: 4,
            })
        );
    }

    #[test]
    fn input_record_is_not_mutated() {
        let record = sample_record();
        let snapshot = record.clone();
        let mut rng = StdRng::seed_from_u64(42);

        let _ = rearrange_question(&mut rng, &record, 3).unwrap();

        assert_eq!(record, snapshot);
    }
}
