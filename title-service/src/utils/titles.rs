pub const MAX_TITLES: usize = 5;

pub fn parse_titles(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .take(MAX_TITLES)
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_titles, MAX_TITLES};

    #[test]
    fn blank_lines_are_dropped_and_order_preserved() {
        assert_eq!(parse_titles("A\n\nB\nC\n"), vec!["A", "B", "C"]);
    }

    #[test]
    fn lines_are_trimmed() {
        assert_eq!(parse_titles("  First Title  \n\tSecond Title\n"), vec![
            "First Title",
            "Second Title"
        ]);
    }

    #[test]
    fn whitespace_only_lines_are_dropped() {
        assert_eq!(parse_titles("A\n   \n\t\nB"), vec!["A", "B"]);
    }

    #[test]
    fn output_is_capped_at_five() {
        let content = "one\ntwo\nthree\nfour\nfive\nsix\nseven";
        let titles = parse_titles(content);
        assert_eq!(titles.len(), MAX_TITLES);
        assert_eq!(titles, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn fewer_than_five_lines_returns_what_exists() {
        assert_eq!(parse_titles("only one"), vec!["only one"]);
        assert!(parse_titles("").is_empty());
    }
}
