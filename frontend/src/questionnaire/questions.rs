/// Fixed, ordered list of interview questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionSet {
    questions: &'static [&'static str],
}

impl QuestionSet {
    pub const fn new(questions: &'static [&'static str]) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.questions.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        let questions = self.questions;
        questions.iter().copied()
    }
}

// Export-readiness interview asked to every new company.
pub const EXPORT_READINESS: QuestionSet = QuestionSet::new(&[
    "Come si chiama la tua azienda?",
    "Quale é la tua Ragione Sociale (P.IVA)?",
    "In che settore operi?",
    "Da quanti anni è aperta e attiva la azienda?",
    "Su quali piattaforme social media è attualmente presente la vostra azienda?",
    "Avete già condotto campagne di marketing sui social media per mercati internazionali? Se sì, quali?",
    "Quali sono le vostre maggiori preoccupazioni riguardo l'esportazione in nuovi mercati?",
    "Quale prodotto e/o prodotti vorresti esportare?",
    "Vuoi spostare la produzione all'estero? Perché?",
    "Vuoi trovare nuovi fornitori per il tuo mercato? Perché?",
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_readiness_has_ten_questions_in_interview_order() {
        assert_eq!(EXPORT_READINESS.len(), 10);
        assert_eq!(EXPORT_READINESS.get(0), Some("Come si chiama la tua azienda?"));
        assert_eq!(
            EXPORT_READINESS.get(9),
            Some("Vuoi trovare nuovi fornitori per il tuo mercato? Perché?")
        );
        assert_eq!(EXPORT_READINESS.get(10), None);
    }

    #[test]
    fn no_question_is_blank() {
        assert!(EXPORT_READINESS.iter().all(|q| !q.trim().is_empty()));
    }
}
