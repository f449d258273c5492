use crate::models::{FilterField, FilterState};

/// Path of the directory collection endpoint, relative to the API base.
pub const COOPS_PATH: &str = "/coops/";

/// Build the search URL for a set of filters.
///
/// Produces `{base_path}/coops/` followed by `?name=..&enabled=..`, where each
/// parameter is only present when it carries a value. Never fails.
pub fn build_search_url(filters: &FilterState, base_path: &str) -> String {
    let mut url = format!("{}{COOPS_PATH}", base_path.trim_end_matches('/'));

    let params = [
        (FilterField::Name, filters.name_param()),
        (FilterField::Enabled, filters.enabled_param()),
    ];
    let mut separator = '?';
    for (field, value) in params {
        let Some(value) = value else {
            continue;
        };
        url.push(separator);
        url.push_str(field.as_str());
        url.push('=');
        url.push_str(&urlencoding::encode(value));
        separator = '&';
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "http://api.example.com";

    fn filters(name: Option<&str>, enabled: Option<&str>) -> FilterState {
        FilterState {
            name: name.map(ToString::to_string),
            enabled: enabled.map(ToString::to_string),
        }
    }

    #[test]
    fn no_filters_yields_bare_collection_path() {
        let cases = [
            filters(None, None),
            filters(Some(""), None),
            filters(None, Some("none")),
            filters(Some(""), Some("none")),
        ];
        for case in cases {
            assert_eq!(build_search_url(&case, BASE), "http://api.example.com/coops/");
        }
    }

    #[test]
    fn name_precedes_enabled_and_is_encoded() {
        assert_eq!(
            build_search_url(&filters(Some("Main St"), Some("true")), BASE),
            "http://api.example.com/coops/?name=Main%20St&enabled=true"
        );
    }

    #[test]
    fn enabled_alone_has_no_stray_ampersand() {
        assert_eq!(
            build_search_url(&filters(None, Some("true")), BASE),
            "http://api.example.com/coops/?enabled=true"
        );
        assert_eq!(
            build_search_url(&filters(Some(""), Some("False")), BASE),
            "http://api.example.com/coops/?enabled=False"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            build_search_url(&filters(Some("A&B=C/D?"), None), BASE),
            "http://api.example.com/coops/?name=A%26B%3DC%2FD%3F"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_not_doubled() {
        assert_eq!(
            build_search_url(&filters(Some("x"), None), "http://api.example.com/"),
            "http://api.example.com/coops/?name=x"
        );
    }

    #[test]
    fn empty_base_yields_relative_path() {
        assert_eq!(build_search_url(&FilterState::default(), ""), "/coops/");
    }
}
