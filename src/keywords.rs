//! Static keyword tables for the dimension scorers
//!
//! Each table is an ordered set of lowercase strings checked as
//! case-insensitive substrings of the prompt. Substring matching is
//! deliberately permissive: keywords inside longer words still match,
//! and no overlap resolution is attempted ("step-by-step" and
//! "step by step" are counted as separate hits when both appear).

/// Keywords that signal a detailed, well-scoped request.
pub const SPECIFICITY_KEYWORDS: &[&str] = &[
    "specifically",
    "exactly",
    "precise",
    "detailed",
    "particular",
    "step-by-step",
    "step by step",
    "specific",
    "details",
    "explain",
    "example",
    "concrete",
    "explicitly",
    "clearly",
];

/// Verbs associated with directive, task-oriented prompts.
pub const ACTIONABILITY_KEYWORDS: &[&str] = &[
    "create",
    "write",
    "generate",
    "develop",
    "build",
    "design",
    "make",
    "analyze",
    "explain",
    "describe",
    "summarize",
    "compare",
    "outline",
    "list",
    "provide",
    "suggest",
    "recommend",
];

/// Hedging phrases that reduce the clarity score.
pub const HEDGING_PHRASES: &[&str] = &[
    "i think",
    "maybe",
    "perhaps",
    "possibly",
    "kind of",
    "sort of",
    "a bit",
    "somewhat",
    "i guess",
    "not sure",
    "might be",
];

/// Phrases that signal audience or situational context.
pub const CONTEXT_INDICATORS: &[&str] = &[
    "for a",
    "for an",
    "targeted at",
    "audience",
    "context",
    "background",
    "purpose is",
    "intended for",
    "scenario",
    "setting",
    "environment",
];

/// Phrases that signal an output format request.
pub const FORMAT_INDICATORS: &[&str] = &[
    "bullet points",
    "numbered list",
    "paragraphs",
    "sections",
    "table",
    "format",
    "structure",
    "organize",
    "layout",
    "outline",
    "formatted as",
];

/// Phrases that signal explicit constraints or bounds.
pub const CONSTRAINT_INDICATORS: &[&str] = &[
    "limit",
    "maximum",
    "minimum",
    "at least",
    "at most",
    "no more than",
    "within",
    "between",
    "range",
    "constraint",
    "restriction",
    "boundary",
];

/// Count distinct table entries present as substrings of `lower`.
///
/// `lower` must already be lowercased; the tables are lowercase by
/// construction, so matching is case-insensitive overall.
pub fn count_matches(lower: &str, table: &[&str]) -> usize {
    table.iter().filter(|kw| lower.contains(*kw)).count()
}

/// True if any table entry is a substring of `lower`.
pub fn any_match(lower: &str, table: &[&str]) -> bool {
    table.iter().any(|kw| lower.contains(*kw))
}

/// True if `lower` begins with a table entry as its first word.
///
/// A direct prefix test followed by a word-boundary check, not a
/// tokenizer: the entry must not be continued by a word character.
pub fn starts_with_entry(lower: &str, table: &[&str]) -> bool {
    table.iter().any(|kw| {
        lower.strip_prefix(*kw).is_some_and(|rest| {
            !rest
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
        })
    })
}
