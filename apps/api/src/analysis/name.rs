use crate::models::profile::DEFAULT_CANDIDATE_NAME;

const MAX_NAME_WORDS: usize = 4;
const MIN_NAME_CHARS: usize = 3;

/// Guesses the candidate's name: the first line (top to bottom) that, once
/// trimmed, has at most four words and more than two characters.
///
/// This is a layout heuristic, not NLP. It will happily return a short header
/// such as "Contact Info" if that comes before the name.
pub fn extract_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| {
            line.split_whitespace().count() <= MAX_NAME_WORDS
                && line.chars().count() >= MIN_NAME_CHARS
        })
        .map(title_case)
        .unwrap_or_else(|| DEFAULT_CANDIDATE_NAME.to_string())
}

/// Upper-cases a letter that follows a non-letter, lower-cases every other letter.
fn title_case(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev_is_letter = false;

    for c in line.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_name() {
        let text = "John Smith\nSoftware Engineer\nPython, SQL, Docker";
        assert_eq!(extract_name(text), "John Smith");
    }

    #[test]
    fn test_long_header_is_skipped() {
        let text = "CURRICULUM VITAE OF A VERY LONG HEADER LINE\njane DOE\nData Analyst";
        assert_eq!(extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_no_qualifying_line_returns_sentinel() {
        let text = "CURRICULUM VITAE OF A VERY LONG HEADER LINE\nab\n\n";
        assert_eq!(extract_name(text), "Candidate");
    }

    #[test]
    fn test_empty_text_returns_sentinel() {
        assert_eq!(extract_name(""), "Candidate");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let text = "\n\n   maria garcia lopez   \r\nBackend Developer";
        assert_eq!(extract_name(text), "Maria Garcia Lopez");
    }

    #[test]
    fn test_short_header_false_positive_is_kept() {
        // Known limitation: a short header before the name wins.
        let text = "CONTACT INFO\nJohn Smith";
        assert_eq!(extract_name(text), "Contact Info");
    }

    #[test]
    fn test_single_line_without_newline() {
        assert_eq!(extract_name("ada lovelace"), "Ada Lovelace");
    }

    #[test]
    fn test_title_case_after_punctuation() {
        assert_eq!(title_case("o'neil mary-jane"), "O'Neil Mary-Jane");
        assert_eq!(title_case("JOHN SMITH"), "John Smith");
    }

    #[test]
    fn test_five_words_rejected() {
        let text = "one two three four five\nAlan Turing";
        assert_eq!(extract_name(text), "Alan Turing");
    }
}
