use super::*;
use crate::model::{
    CardId, CardStatus, FINISH_LABEL, FeedbackTone, NEXT_LABEL, OptionId, SELECT_PROMPT, Verdict,
};

/// Lo que provocó un click en el botón de envío.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Tarjeta inexistente o sin botón de envío.
    Ignored,
    /// No había opción seleccionada; se muestra el aviso.
    NoSelection,
    Graded { is_correct: bool },
    Advanced(CardId),
    /// Última tarjeta: se muestra "Good Job!" y se espera un click más.
    AwaitingReset,
    Reset,
}

/// La corrección sólo depende de las dos letras.
pub fn is_correct_choice(selected_letter: &str, correct_letter: &str) -> bool {
    selected_letter == correct_letter
}

impl QuizController {
    pub fn on_option_activated(&mut self, card_id: CardId, option_id: OptionId) {
        self.select_option(card_id, option_id);
    }

    pub fn on_submit_activated(&mut self, card_id: CardId) -> SubmitOutcome {
        self.submit(card_id)
    }

    /// Marca una opción como seleccionada mientras la tarjeta no esté respondida.
    pub fn select_option(&mut self, card_id: CardId, option_id: OptionId) {
        let Some(card) = self.cards.get_mut(card_id.0) else {
            log::debug!("Click en opción de una tarjeta inexistente: {card_id:?}");
            return;
        };

        if card.is_answered() {
            return;
        }

        if option_id.0 >= card.options.len() {
            log::debug!("Opción inexistente {option_id:?} en la tarjeta {card_id:?}");
            return;
        }

        for opt in &mut card.options {
            opt.clear_marks();
        }
        card.options[option_id.0].selected = true;
        card.selected = Some(option_id);

        if let Some(feedback) = card.feedback.as_mut() {
            feedback.clear();
        }

        if let Some(submit) = card.submit.as_mut() {
            submit.disabled = false;
        }

        log::debug!("Tarjeta {}: seleccionada la opción {}", card_id.0, option_id.0);
    }

    /// Primer click corrige; los siguientes navegan o terminan el quiz.
    pub fn submit(&mut self, card_id: CardId) -> SubmitOutcome {
        let total = self.cards.len();
        let Some(card) = self.cards.get_mut(card_id.0) else {
            log::debug!("Envío en una tarjeta inexistente: {card_id:?}");
            return SubmitOutcome::Ignored;
        };

        if card.submit.is_none() {
            return SubmitOutcome::Ignored;
        }

        let Some(selected) = card.selected else {
            if let Some(feedback) = card.feedback.as_mut() {
                feedback.show(SELECT_PROMPT, FeedbackTone::Neutral);
            }
            return SubmitOutcome::NoSelection;
        };

        if !card.is_answered() {
            let is_correct = grade_card(card, selected);
            log::debug!(
                "Tarjeta {} corregida: {}",
                card_id.0,
                if is_correct { "correcta" } else { "incorrecta" }
            );
            return SubmitOutcome::Graded { is_correct };
        }

        let next = card_id.0 + 1;
        if next < total {
            self.activate_card(next);
            return SubmitOutcome::Advanced(CardId(next));
        }

        self.finish_quiz(card_id)
    }
}

/// Corrige la tarjeta con la opción elegida y la bloquea. Devuelve si acertó.
fn grade_card(card: &mut crate::model::Card, selected: OptionId) -> bool {
    card.status = CardStatus::Answered;

    let is_correct = card
        .option(selected)
        .is_some_and(|opt| is_correct_choice(&opt.letter, &card.correct_letter));

    if let Some(opt) = card.options.get_mut(selected.0) {
        opt.verdict = if is_correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
    }

    if !is_correct {
        // Resalta la correcta aunque no la eligiera
        match card.correct_option() {
            Some(correct) => {
                let opt = &mut card.options[correct.0];
                opt.selected = true;
                opt.verdict = Verdict::Correct;
            }
            None => log::warn!(
                "La letra correcta {:?} no coincide con ninguna opción de la tarjeta {}",
                card.correct_letter,
                card.id.0
            ),
        }
    }

    let message = card.message_for(is_correct).to_string();
    if let Some(feedback) = card.feedback.as_mut() {
        feedback.show(message, FeedbackTone::from_outcome(is_correct));
    }

    for opt in &mut card.options {
        opt.locked = true;
    }

    let is_last = card.is_last;
    if let Some(submit) = card.submit.as_mut() {
        submit.label = if is_last { FINISH_LABEL } else { NEXT_LABEL }.to_string();
    }

    is_correct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures::{letter, quiz_from, three_card_quiz};
    use crate::model::{SUBMIT_LABEL, Verdict};

    #[test]
    fn selecting_does_not_answer_or_lock() {
        let mut quiz = three_card_quiz();
        let b = letter(&quiz, 0, "B");
        quiz.on_option_activated(CardId(0), b);

        let card = quiz.card(CardId(0)).unwrap();
        assert_eq!(card.status, CardStatus::Unanswered);
        assert_eq!(card.selected, Some(b));
        assert!(card.options[b.0].selected);
        assert!(card.options.iter().all(|o| !o.locked));
    }

    #[test]
    fn reselecting_moves_the_selection() {
        let mut quiz = three_card_quiz();
        quiz.on_option_activated(CardId(0), OptionId(0));
        quiz.on_option_activated(CardId(0), OptionId(2));

        let card = quiz.card(CardId(0)).unwrap();
        let selected: Vec<bool> = card.options.iter().map(|o| o.selected).collect();
        assert_eq!(selected, vec![false, false, true]);
        assert_eq!(card.selected, Some(OptionId(2)));
    }

    #[test]
    fn selecting_clears_the_prompt_message() {
        let mut quiz = three_card_quiz();
        quiz.on_submit_activated(CardId(0));
        quiz.on_option_activated(CardId(0), OptionId(0));

        let feedback = quiz.card(CardId(0)).unwrap().feedback.clone().unwrap();
        assert!(feedback.text.is_empty());
        assert_eq!(feedback.tone, FeedbackTone::Neutral);
    }

    #[test]
    fn submit_without_selection_prompts() {
        let mut quiz = three_card_quiz();
        let outcome = quiz.on_submit_activated(CardId(0));

        assert_eq!(outcome, SubmitOutcome::NoSelection);
        let card = quiz.card(CardId(0)).unwrap();
        assert_eq!(card.status, CardStatus::Unanswered);
        let feedback = card.feedback.as_ref().unwrap();
        assert_eq!(feedback.text, SELECT_PROMPT);
        assert_eq!(feedback.tone, FeedbackTone::Neutral);
        assert_eq!(card.submit.as_ref().unwrap().label, SUBMIT_LABEL);
    }

    #[test]
    fn correct_answer_marks_only_the_choice() {
        let mut quiz = three_card_quiz();
        let b = letter(&quiz, 0, "B");
        quiz.on_option_activated(CardId(0), b);
        let outcome = quiz.on_submit_activated(CardId(0));

        assert_eq!(outcome, SubmitOutcome::Graded { is_correct: true });
        let card = quiz.card(CardId(0)).unwrap();
        let correct: Vec<_> = card
            .options
            .iter()
            .filter(|o| o.verdict == Verdict::Correct)
            .collect();
        assert_eq!(correct.len(), 1);
        assert_eq!(correct[0].letter, "B");
        let feedback = card.feedback.as_ref().unwrap();
        assert_eq!(feedback.text, "Yes, B.");
        assert_eq!(feedback.tone, FeedbackTone::Correct);
    }

    #[test]
    fn wrong_answer_reveals_the_correct_option() {
        let mut quiz = three_card_quiz();
        let a = letter(&quiz, 0, "A");
        let b = letter(&quiz, 0, "B");
        quiz.on_option_activated(CardId(0), a);
        let outcome = quiz.on_submit_activated(CardId(0));

        assert_eq!(outcome, SubmitOutcome::Graded { is_correct: false });
        let card = quiz.card(CardId(0)).unwrap();
        assert_eq!(card.options[a.0].verdict, Verdict::Incorrect);
        assert!(card.options[a.0].selected);
        assert_eq!(card.options[b.0].verdict, Verdict::Correct);
        assert!(card.options[b.0].selected);
        assert_eq!(card.options[2].verdict, Verdict::None);
        let feedback = card.feedback.as_ref().unwrap();
        assert_eq!(feedback.text, "No, it was B.");
        assert_eq!(feedback.tone, FeedbackTone::Incorrect);
    }

    #[test]
    fn grading_locks_every_option() {
        for choice in ["A", "B", "C"] {
            let mut quiz = three_card_quiz();
            let id = letter(&quiz, 0, choice);
            quiz.on_option_activated(CardId(0), id);
            quiz.on_submit_activated(CardId(0));
            let card = quiz.card(CardId(0)).unwrap();
            assert!(card.options.iter().all(|o| o.locked), "choice {choice}");
        }
    }

    #[test]
    fn answered_card_ignores_new_selections() {
        let mut quiz = three_card_quiz();
        quiz.on_option_activated(CardId(0), OptionId(0));
        quiz.on_submit_activated(CardId(0));
        let before = quiz.card(CardId(0)).unwrap().clone();

        quiz.on_option_activated(CardId(0), OptionId(2));
        assert_eq!(quiz.card(CardId(0)).unwrap(), &before);
    }

    #[test]
    fn answered_card_is_not_graded_twice() {
        let mut quiz = three_card_quiz();
        quiz.on_option_activated(CardId(0), OptionId(0));
        quiz.on_submit_activated(CardId(0));
        let outcome = quiz.on_submit_activated(CardId(0));
        assert_eq!(outcome, SubmitOutcome::Advanced(CardId(1)));
        assert_eq!(
            quiz.card(CardId(0)).unwrap().options[0].verdict,
            Verdict::Incorrect
        );
    }

    #[test]
    fn grading_is_a_letter_comparison() {
        assert!(is_correct_choice("B", "B"));
        assert!(!is_correct_choice("A", "B"));
        assert!(!is_correct_choice("b", "B"));
    }

    #[test]
    fn unmatched_correct_letter_skips_the_highlight() {
        let mut quiz = quiz_from(
            r#"
cards:
  - correct: "Z"
    wrong_message: "nope"
    options:
      - { letter: "A" }
      - { letter: "B" }
"#,
        );
        quiz.on_option_activated(CardId(0), OptionId(1));
        let outcome = quiz.on_submit_activated(CardId(0));

        assert_eq!(outcome, SubmitOutcome::Graded { is_correct: false });
        let card = quiz.card(CardId(0)).unwrap();
        assert_eq!(card.options[0].verdict, Verdict::None);
        assert!(!card.options[0].selected);
        assert_eq!(card.options[1].verdict, Verdict::Incorrect);
        assert!(card.options.iter().all(|o| o.locked));
    }

    #[test]
    fn grading_works_without_feedback_region() {
        let mut quiz = quiz_from(
            r#"
cards:
  - correct: "A"
    feedback: false
    options:
      - { letter: "A" }
"#,
        );
        assert_eq!(
            quiz.on_submit_activated(CardId(0)),
            SubmitOutcome::NoSelection
        );
        quiz.on_option_activated(CardId(0), OptionId(0));
        assert_eq!(
            quiz.on_submit_activated(CardId(0)),
            SubmitOutcome::Graded { is_correct: true }
        );
        assert!(quiz.card(CardId(0)).unwrap().feedback.is_none());
    }

    #[test]
    fn card_without_submit_control_ignores_submit() {
        let mut quiz = quiz_from(
            r#"
cards:
  - correct: "A"
    submit: false
    options:
      - { letter: "A" }
"#,
        );
        quiz.on_option_activated(CardId(0), OptionId(0));
        assert_eq!(quiz.on_submit_activated(CardId(0)), SubmitOutcome::Ignored);
        assert_eq!(
            quiz.card(CardId(0)).unwrap().status,
            CardStatus::Unanswered
        );
    }

    #[test]
    fn out_of_range_ids_are_ignored() {
        let mut quiz = three_card_quiz();
        let before = quiz.cards().to_vec();
        quiz.on_option_activated(CardId(9), OptionId(0));
        quiz.on_option_activated(CardId(0), OptionId(9));
        assert_eq!(quiz.on_submit_activated(CardId(9)), SubmitOutcome::Ignored);
        assert_eq!(quiz.cards(), before.as_slice());
    }

    #[test]
    fn labels_follow_card_position() {
        let mut quiz = three_card_quiz();
        quiz.on_option_activated(CardId(1), OptionId(0));
        quiz.on_submit_activated(CardId(1));
        quiz.on_option_activated(CardId(2), OptionId(0));
        quiz.on_submit_activated(CardId(2));

        assert_eq!(quiz.submit_label(CardId(1)), Some(NEXT_LABEL));
        assert_eq!(quiz.submit_label(CardId(2)), Some(FINISH_LABEL));
    }
}
