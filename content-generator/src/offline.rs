//! Deterministic content used when no live provider is available.
//!
//! Output is a pure function of the topic hash and the depth, so the same
//! topic always produces byte-identical content.

use dailyconcept_core::{Depth, GeneratedContent, MAX_TEASER_CHARS};

const METAPHORS: [&str; 10] = [
    "like a bridge connecting two distant islands",
    "similar to how a seed grows into a tree",
    "like pieces of a puzzle fitting together",
    "comparable to a recipe that creates something new",
    "like a key unlocking a door",
    "similar to how water finds its path downhill",
    "like layers of an onion revealing deeper truth",
    "comparable to how roots anchor a tree",
    "like a lens focusing scattered light",
    "similar to how gears work together in a clock",
];

const EXAMPLES: [&str; 10] = [
    "streaming services using recommendation algorithms",
    "smartphone features we use daily without thinking",
    "how coffee shops design their spaces",
    "the way social networks grow and spread",
    "modern architecture in cities",
    "how online shopping changed retail",
    "educational apps for children",
    "renewable energy in communities",
    "food delivery logistics",
    "remote work collaboration tools",
];

const IMPACTS: [&str; 10] = [
    "reshaping how we make decisions",
    "influencing our daily choices",
    "changing professional landscapes",
    "affecting future generations",
    "transforming industries",
    "creating new opportunities",
    "solving longstanding challenges",
    "connecting people globally",
    "improving quality of life",
    "driving innovation forward",
];

// `{}` is replaced with the topic.
const QUESTIONS: [&str; 10] = [
    "How might {} affect your daily life in the next five years?",
    "What would change if more people understood {}?",
    "How does {} connect to other things you care about?",
    "What surprised you most about {}?",
    "How could you apply {} to a current challenge?",
    "What assumptions about {} might be worth questioning?",
    "How has {} evolved over time?",
    "What makes {} relevant right now?",
    "How might {} look different in another culture?",
    "What's one way you could explore {} further?",
];

const TEASERS: [&str; 8] = [
    "Understanding {} changes how you see the world",
    "Why {} matters more than you think",
    "The surprising truth about {}",
    "How {} shapes our daily lives",
    "{} explained simply",
    "What everyone should know about {}",
    "The key to understanding {}",
    "{} and why it's relevant today",
];

const FILLER: &str = "This concept is fundamental to understanding how different systems interact and influence each other in complex ways. When we examine it closely, we find patterns that repeat across various domains. These patterns help us make predictions and informed decisions. ";

const ELI7_CLOSING: &str = "It's something that once you understand it, you'll start noticing it everywhere. The key idea is that it works by connecting different elements in a way that creates something more powerful than the individual parts alone.";
const DEEPER_CLOSING: &str = "The underlying mechanism involves specific patterns and relationships that emerge when certain conditions are met. Understanding these patterns helps us see why it works the way it does and predict how it might behave in different contexts.";
const WHY_CLOSING: &str = "Beyond immediate applications, understanding this concept equips us to navigate a changing world more effectively. It influences decisions at personal, professional, and societal levels.";

/// Minimum paragraph lengths, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Targets {
    eli7: usize,
    deeper: usize,
    example: usize,
    why_it_matters: usize,
}

impl Targets {
    fn for_depth(depth: Depth) -> Self {
        match depth {
            Depth::Light => Self {
                eli7: 400,
                deeper: 500,
                example: 400,
                why_it_matters: 350,
            },
            Depth::Normal => Self {
                eli7: 700,
                deeper: 900,
                example: 700,
                why_it_matters: 600,
            },
        }
    }
}

/// Polynomial string hash (`h * 31 + unit`) over UTF-16 code units with
/// 32-bit wraparound, returned as an absolute value.
pub fn topic_hash(topic: &str) -> u32 {
    let hash = topic.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

fn pick<'a>(table: &[&'a str], hash: u32) -> &'a str {
    table[hash as usize % table.len()]
}

fn fill(template: &str, topic: &str) -> String {
    template.replace("{}", topic)
}

fn paragraph(opening: String, target: usize, closing: &str) -> String {
    let closing_len = closing.chars().count();
    let filler_len = FILLER.chars().count();
    let mut length = opening.chars().count();
    let mut content = opening;

    while length + closing_len < target {
        content.push_str(FILLER);
        length += filler_len;
    }
    content.push_str(closing);
    content
}

pub fn offline_teaser(topic: &str) -> String {
    let teaser = fill(pick(&TEASERS, topic_hash(topic)), topic);
    if teaser.chars().count() <= MAX_TEASER_CHARS {
        teaser
    } else {
        let mut truncated: String = teaser.chars().take(MAX_TEASER_CHARS - 3).collect();
        truncated.push_str("...");
        truncated
    }
}

pub fn offline_generate(topic: &str, depth: Depth) -> GeneratedContent {
    let hash = topic_hash(topic);
    let targets = Targets::for_depth(depth);

    GeneratedContent {
        topic: topic.to_string(),
        teaser: offline_teaser(topic),
        eli7: paragraph(
            format!("Think of {} {}. ", topic, pick(&METAPHORS, hash)),
            targets.eli7,
            ELI7_CLOSING,
        ),
        deeper: paragraph(
            format!("{} operates through several interconnected principles. ", topic),
            targets.deeper,
            DEEPER_CLOSING,
        ),
        example: paragraph(
            format!("Consider {}. ", pick(&EXAMPLES, hash)),
            targets.example,
            &format!(
                "This demonstrates {} in action. The practical application shows how theoretical concepts translate into real-world outcomes that affect people's lives. This example is particularly relevant because it's something many of us encounter regularly.",
                topic
            ),
        ),
        why_it_matters: paragraph(
            format!(
                "{} matters today because it's actively {}. ",
                topic,
                pick(&IMPACTS, hash)
            ),
            targets.why_it_matters,
            WHY_CLOSING,
        ),
        reflection_question: fill(pick(&QUESTIONS, hash), topic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate_content;

    #[test]
    fn test_hash_matches_reference_values() {
        assert_eq!(topic_hash(""), 0);
        assert_eq!(topic_hash("Entropy"), 73_086_033);
        assert_eq!(topic_hash("Test Topic"), 2_063_475_679);
        assert_eq!(topic_hash("Quantum Computing"), 1_632_625_711);
    }

    #[test]
    fn test_same_input_same_bytes() {
        for topic in ["Entropy", "Quantum Computing", "Maslow's Hierarchy", "Wabi-sabi 侘寂"] {
            for depth in [Depth::Light, Depth::Normal] {
                assert_eq!(offline_generate(topic, depth), offline_generate(topic, depth));
            }
        }
    }

    #[test]
    fn test_phrases_follow_hash() {
        let content = offline_generate("Entropy", Depth::Normal);
        assert_eq!(content.teaser, "Why Entropy matters more than you think");
        assert_eq!(content.reflection_question, "What surprised you most about Entropy?");
        assert!(content
            .eli7
            .starts_with("Think of Entropy comparable to a recipe that creates something new. "));
        assert!(content.example.starts_with("Consider the way social networks grow and spread. "));

        let content = offline_generate("Quantum Computing", Depth::Light);
        assert_eq!(content.teaser, "Quantum Computing and why it's relevant today");
    }

    #[test]
    fn test_depth_changes_length() {
        let light = offline_generate("Test Topic", Depth::Light);
        let normal = offline_generate("Test Topic", Depth::Normal);
        assert!(normal.deeper.len() > light.deeper.len());
        assert!(normal.eli7.len() > light.eli7.len());
        assert!(light.eli7.chars().count() >= 400);
        assert_eq!(light.topic, normal.topic);
        assert_eq!(light.teaser, normal.teaser);
    }

    #[test]
    fn test_long_topic_teaser_is_truncated() {
        let topic = "x".repeat(200);
        let teaser = offline_teaser(&topic);
        assert_eq!(teaser.chars().count(), MAX_TEASER_CHARS);
        assert!(teaser.ends_with("..."));
    }

    #[test]
    fn test_offline_output_passes_contract() {
        for topic in ["Entropy", "Test Topic", "GDP", "Stoicism"] {
            for depth in [Depth::Light, Depth::Normal] {
                let content = offline_generate(topic, depth);
                assert!(validate_content(&content).is_ok(), "{topic} {depth}");
                assert!(content.reflection_question.trim().ends_with('?'));
            }
        }
    }
}
