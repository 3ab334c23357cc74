use regex::{Captures, NoExpand, Regex};
use std::sync::OnceLock;

/// Regex token substituted for every run of whitespace in a query
pub const WHITESPACE_TOKEN: &str = r"\s*";

/// Characters with a meaning in regex syntax: `- [ ] / { } ( ) * + ? . \ ^ $ |`
static METACHARACTER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Runs of tab, newline, form feed, carriage return and space
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn metacharacter_regex() -> &'static Regex {
    METACHARACTER_REGEX.get_or_init(|| {
        Regex::new(r"[\-\[\]/{}()*+?.\\^$|]").expect("metacharacter class is a valid regex")
    })
}

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX
        .get_or_init(|| Regex::new(r"[\t\n\x0C\r ]+").expect("whitespace class is a valid regex"))
}

/// Turn literal GraphQL query text into a regex pattern that tolerates
/// whitespace differences.
///
/// Every regex metacharacter is escaped first, then each whitespace run is
/// replaced with [`WHITESPACE_TOKEN`]. Escaping has to come first, otherwise
/// the backslash of the inserted token would itself be escaped.
///
/// The token matches zero characters too, so `a b` also accepts `ab`.
///
/// ```rust
/// use graphql_interaction_contract::use_cases::normalize_query;
///
/// assert_eq!(normalize_query("query { users }"), r"query\s*\{\s*users\s*\}");
/// assert_eq!(normalize_query(""), "");
/// ```
pub fn normalize_query(query: &str) -> String {
    let escaped =
        metacharacter_regex().replace_all(query, |caps: &Captures| format!(r"\{}", &caps[0]));
    let pattern = whitespace_regex()
        .replace_all(&escaped, NoExpand(WHITESPACE_TOKEN))
        .into_owned();

    tracing::trace!(
        query_len = query.len(),
        pattern_len = pattern.len(),
        "normalized GraphQL query"
    );
    pattern
}
