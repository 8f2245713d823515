// src/resolve/names.rs
//! Vendor field names → target identifiers.
//!
//! `championId` → `ChampionID`, `match_id` → `MatchID`, `item_1_2` → `Item1_2`.

/// Initialisms rewritten to all-caps wherever they form a whole word.
/// Only entries that are very unlikely to be ordinary words.
pub const INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XSRF", "XSS",
];

/// Exported identifier for an original field name.
pub fn field_name(orig: &str) -> String {
    if orig.is_empty() {
        return s!();
    }
    lint_name(&upper_first(orig))
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

/// Split at lower→upper transitions and underscores, canonicalize initialisms.
///
/// An initialism leading an otherwise lowercase-started name stays lowercase
/// (`idList` keeps `id`). Underscore runs are dropped, except one underscore
/// between two digits.
pub fn lint_name(name: &str) -> String {
    if name == "_" || name.chars().all(char::is_lowercase) {
        return s!(name);
    }

    let mut runes: Vec<char> = name.chars().collect();
    let (mut w, mut i) = (0usize, 0usize);
    while i < runes.len() {
        let mut eow = false;
        if i + 1 == runes.len() {
            eow = true;
        } else if runes[i + 1] == '_' {
            eow = true;
            let mut n = 1;
            while i + n + 1 < runes.len() && runes[i + n + 1] == '_' {
                n += 1;
            }
            if i + n + 1 < runes.len() && runes[i].is_ascii_digit() && runes[i + n + 1].is_ascii_digit() {
                n -= 1;
            }
            runes.drain(i + 1..i + 1 + n);
        } else if runes[i].is_lowercase() && !runes[i + 1].is_lowercase() {
            eow = true;
        }
        i += 1;
        if !eow {
            continue;
        }

        let word: String = runes[w..i].iter().collect();
        let upper = word.to_uppercase();
        if INITIALISMS.contains(&upper.as_str()) {
            let canon = if w == 0 && runes[w].is_lowercase() { word.to_lowercase() } else { upper };
            for (k, c) in canon.chars().enumerate() {
                runes[w + k] = c;
            }
        } else if w > 0 && word.to_lowercase() == word {
            if let Some(c) = runes[w].to_uppercase().next() {
                runes[w] = c;
            }
        }
        w = i;
    }
    runes.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_initialism_is_uppercased() {
        assert_eq!(field_name("championId"), "ChampionID");
        assert_eq!(field_name("profileIconId"), "ProfileIconID");
        assert_eq!(field_name("imageUrl"), "ImageURL");
    }

    #[test]
    fn lone_initialism_is_exported_uppercase() {
        assert_eq!(field_name("id"), "ID");
        assert_eq!(field_name("api"), "API");
    }

    #[test]
    fn leading_initialism_stays_lowercase_only_when_name_starts_lowercase() {
        assert_eq!(lint_name("idList"), "idList");
        assert_eq!(lint_name("IdList"), "IDList");
        assert_eq!(lint_name("userId"), "userID");
    }

    #[test]
    fn underscores_collapse_except_between_digits() {
        assert_eq!(field_name("match_id"), "MatchID");
        assert_eq!(field_name("summoner__level"), "SummonerLevel");
        assert_eq!(field_name("item_1_2"), "Item1_2");
        assert_eq!(lint_name("_"), "_");
    }

    #[test]
    fn plain_words_pass_through() {
        assert_eq!(field_name("name"), "Name");
        assert_eq!(field_name("revisionDate"), "RevisionDate");
        assert_eq!(field_name(""), "");
    }
}
