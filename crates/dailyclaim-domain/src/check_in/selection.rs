/// Split a space-separated game list into lower-cased tokens
pub fn split_game_list(line: &str) -> Vec<String> {
    line.split_whitespace().map(|s| s.to_lowercase()).collect()
}

/// Effective game list of an account
///
/// An account without games inherits `previous_non_empty`, the list of the
/// closest earlier account that named its games. Tokens are not validated
/// here: unknown games are rejected one by one during the check-in loop.
pub fn resolve_game_list(current: &str, previous_non_empty: &[String]) -> Vec<String> {
    let games = split_game_list(current);
    if games.is_empty() {
        previous_non_empty.to_vec()
    } else {
        games
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_explicit_list_wins() {
        let previous = owned(&["gi"]);
        assert_eq!(resolve_game_list("hsr zzz", &previous), owned(&["hsr", "zzz"]));
    }

    #[test]
    fn test_empty_list_inherits_previous() {
        let previous = owned(&["gi", "hsr"]);
        assert_eq!(resolve_game_list("", &previous), previous);
        assert_eq!(resolve_game_list("   ", &previous), previous);
    }

    #[test]
    fn test_first_account_without_games_gets_nothing() {
        assert!(resolve_game_list("", &[]).is_empty());
    }

    #[test]
    fn test_tokens_are_lowercased_and_whitespace_collapsed() {
        assert_eq!(split_game_list("  GI   Hsr "), owned(&["gi", "hsr"]));
    }

    #[test]
    fn test_unknown_tokens_are_kept() {
        assert_eq!(resolve_game_list("gi xyz", &[]), owned(&["gi", "xyz"]));
    }
}
