//! Merge pass results into the final response.

use super::types::{SearchItem, SearchResponse};

/// Order by data set name, then member name (no member sorts first).
pub fn sort_matches(items: &mut [SearchItem]) {
    items.sort_by(|a, b| {
        a.dsn.cmp(&b.dsn).then_with(|| {
            a.member
                .as_deref()
                .unwrap_or("")
                .cmp(b.member.as_deref().unwrap_or(""))
        })
    });
}

/// Build the response for a finished search.
///
/// `success` is true when at least one target failed. This is the
/// established contract for this response and callers depend on it.
pub fn build_response(
    search_string: &str,
    mut matches: Vec<SearchItem>,
    failures: Vec<String>,
    timed_out: bool,
) -> SearchResponse {
    sort_matches(&mut matches);

    let mut command_response = format!(
        "Found \"{search_string}\" in {} data sets and PDS members",
        matches.len()
    );
    if matches.is_empty() {
        command_response.push('.');
    } else {
        command_response.push_str(":\n");
        for entry in &matches {
            command_response.push_str(&format!("\nData Set \"{}\"", entry.dsn));
            match &entry.member {
                Some(member) => command_response.push_str(&format!(" | Member \"{member}\":\n")),
                None => command_response.push_str(":\n"),
            }
            for location in &entry.match_list {
                command_response.push_str(&format!(
                    "Line: {}, Column: {}, Contents: {}\n",
                    location.line, location.column, location.contents
                ));
            }
        }
    }

    let error_message = (!failures.is_empty()).then(|| {
        let mut message = String::from("The following data set(s) failed to be searched: \n");
        for failure in &failures {
            message.push_str(failure);
            message.push('\n');
        }
        message
    });

    SearchResponse {
        success: !failures.is_empty(),
        command_response,
        matches,
        error_message,
        failures,
        timed_out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MatchLocation;

    fn matched(item: SearchItem, line: usize, column: usize, contents: &str) -> SearchItem {
        SearchItem {
            match_list: vec![MatchLocation {
                line,
                column,
                contents: contents.into(),
            }],
            ..item
        }
    }

    #[test]
    fn sorts_by_data_set_then_member() {
        let mut items = vec![
            SearchItem::data_set("B"),
            SearchItem::member("A", "Y"),
            SearchItem::member("A", "X"),
        ];
        sort_matches(&mut items);
        let order: Vec<String> = items.iter().map(SearchItem::target).collect();
        assert_eq!(order, vec!["A(X)", "A(Y)", "B"]);
    }

    #[test]
    fn data_set_without_member_sorts_first() {
        let mut items = vec![SearchItem::member("A", "M"), SearchItem::data_set("A")];
        sort_matches(&mut items);
        assert_eq!(items[0].member, None);
    }

    #[test]
    fn no_matches_ends_with_period() {
        let response = build_response("needle", Vec::new(), Vec::new(), false);
        assert_eq!(
            response.command_response,
            "Found \"needle\" in 0 data sets and PDS members."
        );
        assert!(response.matches.is_empty());
        assert_eq!(response.error_message, None);
    }

    #[test]
    fn lists_every_match() {
        let response = build_response(
            "dd",
            vec![
                matched(SearchItem::data_set("B.SEQ"), 2, 7, "//SYSIN DD *"),
                matched(SearchItem::member("A.PDS", "MEM"), 0, 10, "//STEP1   DD DUMMY"),
            ],
            Vec::new(),
            false,
        );
        assert_eq!(
            response.command_response,
            "Found \"dd\" in 2 data sets and PDS members:\n\
             \n\
             Data Set \"A.PDS\" | Member \"MEM\":\n\
             Line: 0, Column: 10, Contents: //STEP1   DD DUMMY\n\
             \n\
             Data Set \"B.SEQ\":\n\
             Line: 2, Column: 7, Contents: //SYSIN DD *\n"
        );
    }

    #[test]
    fn success_is_true_only_when_something_failed() {
        let response = build_response("x", Vec::new(), Vec::new(), false);
        assert!(!response.success);

        let response = build_response("x", Vec::new(), vec!["A.PDS".into()], false);
        assert!(response.success);
    }

    #[test]
    fn failures_are_listed_one_per_line() {
        let response = build_response(
            "x",
            Vec::new(),
            vec!["A.PDS".into(), "B.PDS(MEM)".into()],
            true,
        );
        assert_eq!(
            response.error_message.as_deref(),
            Some("The following data set(s) failed to be searched: \nA.PDS\nB.PDS(MEM)\n")
        );
        assert!(response.timed_out);
        assert_eq!(response.failures.len(), 2);
    }
}
