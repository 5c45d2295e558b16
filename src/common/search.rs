//! Case-insensitive narrowing of already-fetched people lists.

/// A record that can be matched against a search query.
pub trait Searchable {
    /// The `name`, `interest`, `school` and `major` text of the record.
    fn search_fields(&self) -> [&str; 4];
}

/// Keeps the items where any searchable field, lower-cased, contains the
/// lower-cased `query`. An empty query keeps everything.
pub fn filter<T: Searchable>(items: Vec<T>, query: &str) -> Vec<T> {
    if query.is_empty() {
        return items;
    }
    let query = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| matches(item, &query))
        .collect()
}

fn matches<T: Searchable>(item: &T, lowered_query: &str) -> bool {
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(lowered_query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        interest: &'static str,
        school: &'static str,
        major: &'static str,
    }

    impl Searchable for Person {
        fn search_fields(&self) -> [&str; 4] {
            [self.name, self.interest, self.school, self.major]
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                name: "Ada",
                interest: "Chess",
                school: "MIT",
                major: "CS",
            },
            Person {
                name: "Grace",
                interest: "sailing",
                school: "Yale",
                major: "Mathematics",
            },
            Person {
                name: "Linus",
                interest: "kernels",
                school: "Helsinki",
                major: "CS",
            },
        ]
    }

    #[test]
    fn empty_query_keeps_everything() {
        assert_eq!(filter(people(), ""), people());
        assert!(filter(Vec::<Person>::new(), "").is_empty());
    }

    #[test]
    fn query_is_case_insensitive() {
        let names: Vec<_> = filter(people(), "cHeSs").iter().map(|p| p.name).collect();
        assert_eq!(names, ["Ada"]);
    }

    #[test]
    fn any_field_can_match() {
        let names: Vec<_> = filter(people(), "cs").iter().map(|p| p.name).collect();
        // "cs" hits the major of Ada and Linus and the "Mathematics" major of Grace.
        assert_eq!(names, ["Ada", "Grace", "Linus"]);

        let names: Vec<_> = filter(people(), "hel").iter().map(|p| p.name).collect();
        assert_eq!(names, ["Linus"]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter(people(), "quantum").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        for query in ["", "a", "CS", "yale", "zzz"] {
            let once = filter(people(), query);
            let twice = filter(once.clone(), query);
            assert_eq!(once, twice, "query {query:?}");
        }
    }
}
