//! Hinglish Language Utilities
//!
//! Shared vocabulary for the extractors: copulas and connectives that end a
//! self-introduction, words that are never part of a person's name, and the
//! name clean-up built on top of them.

/// Words that close a self-introduction ("main Rohan hoon", "I am Rohan from ...")
const NAME_TERMINATORS: &[&str] = &[
    "hoon", "hun", "hu", "hai", "h", "hain", "and", "aur", "se", "from", "here", "mein", "ka",
    "ki", "ke",
];

/// Words that show the phrase after "main" / "I am" is not a name
const NOT_NAME_WORDS: &[&str] = &[
    // Business vocabulary
    "ecommerce", "commerce", "brand", "business", "company", "startup", "agency", "store",
    "shop", "clinic", "restaurant", "cafe", "marketing", "campaign", "budget", "online",
    // Intent and state
    "interested", "ready", "looking", "planning", "trying", "thinking", "confused", "sure",
    "not", "just", "also", "very", "so", "still", "new", "good", "fine", "okay", "ok",
    "urgent", "important", "great", "calling", "call", "about", "regarding",
    // English function words
    "a", "an", "the", "it", "my", "our", "your", "to", "in", "on", "at", "for", "with", "of",
    // Introduction words
    "main", "mai", "mera", "naam", "name",
    // Hinglish verbs and fillers
    "karta", "karti", "karte", "kar", "karunga", "karungi", "karenge", "run", "chala",
    "chalata", "chalati", "chahta", "chahti", "chahte", "soch", "sochta", "sochti", "dekh",
    "bata", "samajh", "bhi", "toh", "abhi", "kal", "bas", "sirf", "ek", "apna", "apni",
    "apne", "hamara", "hamari", "humara", "humari", "aap", "aapko", "aapse", "aapka",
    "mujhe", "hum", "ye", "yeh", "wo", "woh", "kya", "kaise", "agar", "kuch", "bahut",
    "kaafi", "yahan", "wahan",
];

/// Maximum number of tokens accepted as a person's name
pub const MAX_NAME_TOKENS: usize = 3;

/// Title-case a single word: first letter upper, rest lower
///
/// # Examples
/// ```
/// use lead_agent_text_processing::hinglish::title_case;
/// assert_eq!(title_case("sHARMA"), "Sharma");
/// assert_eq!(title_case(""), "");
/// ```
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Strip everything but ASCII letters and whitespace, then title-case each
/// token and rejoin with single spaces. `None` when nothing is left.
///
/// # Examples
/// ```
/// use lead_agent_text_processing::hinglish::sanitize_name;
/// assert_eq!(sanitize_name("  rohan   SHARMA!! ").as_deref(), Some("Rohan Sharma"));
/// assert_eq!(sanitize_name("123 ..."), None);
/// ```
pub fn sanitize_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    let tokens: Vec<String> = cleaned.split_whitespace().map(title_case).collect();
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

/// Turn the text following an introduction phrase into a person's name.
///
/// Reading stops at the first copula or connective ("hoon", "hai", "from",
/// ...). The remaining phrase is rejected if it carries a word that cannot
/// be part of a name, or is longer than [`MAX_NAME_TOKENS`].
pub fn normalize_person_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    let tokens: Vec<&str> = cleaned
        .split_whitespace()
        .take_while(|t| !is_name_terminator(t))
        .collect();

    if tokens.is_empty() || tokens.len() > MAX_NAME_TOKENS {
        return None;
    }

    if let Some(word) = tokens.iter().find(|t| is_not_name_word(t)) {
        tracing::trace!(word = %word, "Rejecting name candidate");
        return None;
    }

    sanitize_name(&tokens.join(" "))
}

fn is_name_terminator(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    NAME_TERMINATORS.contains(&lower.as_str())
}

fn is_not_name_word(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    NOT_NAME_WORDS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("rohan"), "Rohan");
        assert_eq!(title_case("ROHAN"), "Rohan");
        assert_eq!(title_case("r"), "R");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(
            sanitize_name("priya \t  mehta").as_deref(),
            Some("Priya Mehta")
        );
        assert_eq!(sanitize_name("   "), None);
    }

    #[test]
    fn test_normalize_stops_at_copula() {
        assert_eq!(
            normalize_person_name("Rohan sharma hoon").as_deref(),
            Some("Rohan Sharma")
        );
        assert_eq!(
            normalize_person_name("Asha from Pune").as_deref(),
            Some("Asha")
        );
        assert_eq!(normalize_person_name("anita hai").as_deref(), Some("Anita"));
    }

    #[test]
    fn test_normalize_rejects_non_names() {
        assert_eq!(normalize_person_name("ecommerce brand run karta hoon"), None);
        assert_eq!(normalize_person_name("interested"), None);
        assert_eq!(normalize_person_name("not sure yet"), None);
        assert_eq!(normalize_person_name("hoon"), None);
        assert_eq!(normalize_person_name("main main"), None);
    }

    #[test]
    fn test_normalize_rejects_long_phrases() {
        assert_eq!(normalize_person_name("a b c d"), None);
        assert_eq!(
            normalize_person_name("Ravi Kumar Verma").as_deref(),
            Some("Ravi Kumar Verma")
        );
    }
}
