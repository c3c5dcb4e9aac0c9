use crate::core::phrases::PhraseBank;
use crate::domain::ports::IndexSource;
use rand::Rng;

/// Index supply backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadIndexSource;

impl IndexSource for ThreadIndexSource {
    fn pick(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

type Template = fn(&PhraseBank, &mut dyn IndexSource) -> String;

fn pick<'a>(rng: &mut dyn IndexSource, pool: &'a [&'a str]) -> &'a str {
    pool[rng.pick(pool.len())]
}

fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// 評論模板：先抽模板形狀，再逐格抽片語
fn opinion_with_question(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{}, {}. {}",
        pick(rng, bank.starters),
        pick(rng, bank.opinions),
        pick(rng, bank.questions)
    )
}

fn concern_with_action(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{}, {}. {}",
        pick(rng, bank.starters),
        pick(rng, bank.concerns),
        pick(rng, bank.actions)
    )
}

fn question_burst(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{} {} {}",
        pick(rng, bank.questions),
        pick(rng, bank.questions),
        pick(rng, bank.actions)
    )
}

fn technical_focus(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "Regarding the {}, {}. {}",
        pick(rng, bank.topics),
        pick(rng, bank.concerns),
        pick(rng, bank.questions)
    )
}

fn opinion_with_reservation(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{}, but {}. {}",
        capitalize(pick(rng, bank.opinions)),
        pick(rng, bank.concerns),
        pick(rng, bank.actions)
    )
}

fn mixed_feedback(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{}, {} overall. However, {}.",
        pick(rng, bank.starters),
        pick(rng, bank.opinions),
        pick(rng, bank.concerns)
    )
}

fn short_and_direct(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{}. {}",
        capitalize(pick(rng, bank.opinions)),
        pick(rng, bank.questions)
    )
}

fn detailed_review(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{}, {}. The {} aspect looks good, but {}. {}",
        pick(rng, bank.starters),
        pick(rng, bank.opinions),
        pick(rng, bank.topics),
        pick(rng, bank.concerns),
        pick(rng, bank.actions)
    )
}

// 回覆模板
fn acknowledge_and_respond(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{} {}. {}",
        pick(rng, bank.acknowledgments),
        pick(rng, bank.responses),
        pick(rng, bank.follow_ups)
    )
}

fn topical_response(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{} regarding {}. {}",
        pick(rng, bank.responses),
        pick(rng, bank.topics),
        pick(rng, bank.follow_ups)
    )
}

fn short_acknowledgment(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{} {}.",
        pick(rng, bank.acknowledgments),
        pick(rng, bank.responses)
    )
}

fn detailed_response(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{} {} and also addressed the {}. {}",
        pick(rng, bank.acknowledgments),
        pick(rng, bank.responses),
        pick(rng, bank.topics),
        pick(rng, bank.follow_ups)
    )
}

fn action_oriented(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "{} {}. I'll also look into the {}. {}",
        pick(rng, bank.acknowledgments),
        pick(rng, bank.responses),
        pick(rng, bank.topics),
        pick(rng, bank.follow_ups)
    )
}

fn clarification(bank: &PhraseBank, rng: &mut dyn IndexSource) -> String {
    format!(
        "To clarify, {} in the previous version. {}",
        pick(rng, bank.responses),
        pick(rng, bank.follow_ups)
    )
}

const COMMENT_TEMPLATES: &[Template] = &[
    opinion_with_question,
    concern_with_action,
    question_burst,
    technical_focus,
    opinion_with_reservation,
    mixed_feedback,
    short_and_direct,
    detailed_review,
];

const REPLY_TEMPLATES: &[Template] = &[
    acknowledge_and_respond,
    topical_response,
    short_acknowledgment,
    detailed_response,
    action_oriented,
    clarification,
];

/// Produces comment and reply text with natural variation. Every call draws
/// a template shape, then fills each slot with an independent pool draw, so
/// exact duplicates stay rare across hundreds of calls without any dedup
/// bookkeeping.
pub struct TextSynthesizer<'a, R: IndexSource> {
    bank: &'a PhraseBank,
    rng: R,
}

impl<'a, R: IndexSource> TextSynthesizer<'a, R> {
    pub fn new(bank: &'a PhraseBank, rng: R) -> Self {
        Self { bank, rng }
    }

    pub fn comment(&mut self) -> String {
        let template = COMMENT_TEMPLATES[self.rng.pick(COMMENT_TEMPLATES.len())];
        template(self.bank, &mut self.rng)
    }

    pub fn reply(&mut self) -> String {
        let template = REPLY_TEMPLATES[self.rng.pick(REPLY_TEMPLATES.len())];
        template(self.bank, &mut self.rng)
    }
}
