//! Expansion of encoded names into individual codes.
//!
//! An encoding is one or more top-level groups joined by `-`. A group is a
//! bare code, a `(a|b|c)` alternation, or a bracketed fork half that may
//! itself hold several `-`-joined groups:
//!
//! ```text
//! (ilsnk|xilsnk)-(vanilsnk|fanilsnk)  =>  [["ilsnk", "xilsnk"], ["vanilsnk", "fanilsnk"]]
//! (dir-birk)-(van|fan)                =>  [["dir", "birk"], ["van", "fan"]]
//! ```

/// Split an encoding at the `-` separators outside any parentheses.
///
/// Empty groups are skipped.
pub fn groups(encoded: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in encoded.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '-' if depth == 0 => {
                result.push(&encoded[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    result.push(&encoded[start..]);
    result.retain(|group| !group.is_empty());
    result
}

/// Split an encoding into its top-level groups and list every code of each.
///
/// Codes nested in a bracketed fork half are flattened into that half's
/// group. Empty alternatives render as `(|a)` but are not codes, so they
/// are skipped, and the empty encoding yields no groups.
pub fn tokens(encoded: &str) -> Vec<Vec<String>> {
    groups(encoded)
        .into_iter()
        .map(|group| {
            let mut codes: Vec<String> = Vec::new();
            for code in group.split(['(', ')', '|', '-']) {
                if !code.is_empty() && !codes.iter().any(|known| known == code) {
                    codes.push(code.to_string());
                }
            }
            codes
        })
        .filter(|group| !group.is_empty())
        .collect()
}

/// Every code of an encoding, in order, without duplicates.
///
/// Empty alternatives are dropped, as in [`tokens`].
pub fn flat_tokens(encoded: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for code in tokens(encoded).into_iter().flatten() {
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups() {
        assert_eq!(
            tokens("(ilsnk|xilsnk)-(vanilsnk|fanilsnk)"),
            vec![
                vec!["ilsnk".to_string(), "xilsnk".to_string()],
                vec!["vanilsnk".to_string(), "fanilsnk".to_string()],
            ]
        );
    }

    #[test]
    fn test_bracketed_halves_stay_two_groups() {
        assert_eq!(groups("(dir-birk)-(vandir-birk)"), vec!["(dir-birk)", "(vandir-birk)"]);
        assert_eq!(
            tokens("(dir-birk)-(vandir-birk)"),
            vec![
                vec!["dir".to_string(), "birk".to_string()],
                vec!["vandir".to_string(), "birk".to_string()],
            ]
        );
        assert_eq!(groups("(a|b)-c-(d-(e|f))").len(), 3);
    }

    #[test]
    fn test_empty() {
        assert!(tokens("").is_empty());
        assert!(flat_tokens("").is_empty());
        assert_eq!(tokens("-rino"), vec![vec!["rino".to_string()]]);
    }

    #[test]
    fn test_empty_alternative_is_not_a_code() {
        assert_eq!(tokens("(|nil)"), vec![vec!["nil".to_string()]]);
        assert_eq!(flat_tokens("(|a)-(a|)"), vec!["a"]);
    }

    #[test]
    fn test_flat_dedup() {
        assert_eq!(flat_tokens("(nil|nal)-nil"), vec!["nil", "nal"]);
    }
}
