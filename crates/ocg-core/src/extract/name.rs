/// Derive an operation name from a path template.
///
/// Leading and trailing `/` are stripped and interior `/` become `_`. An `_`
/// is inserted before every run of upper-case letters that follows a
/// lower-case letter or a digit, and everything is lower-cased. The result is
/// then forced into a bare identifier: template braces are dropped, other
/// characters outside `[a-z0-9_]` become `_`, repeated `_` collapse, and a
/// leading digit is prefixed with `_`.
///
/// - `/users` → `users`
/// - `/items/{itemId}` → `items_item_id`
/// - `/users/{userId}/profilePhotos` → `users_user_id_profile_photos`
/// - `/` → `root`
pub fn path_to_name(path: &str) -> String {
    let joined = path.trim_matches('/').replace('/', "_");
    sanitize_identifier(&fold_case(&joined))
}

fn fold_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for ch in input.chars() {
        if ch.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }

    out
}

fn sanitize_identifier(folded: &str) -> String {
    let mut out = String::with_capacity(folded.len());

    for ch in folded.chars().filter(|c| !matches!(c, '{' | '}')) {
        let ch = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            ch
        } else {
            '_'
        };
        if ch == '_' && (out.is_empty() || out.ends_with('_')) {
            continue;
        }
        out.push(ch);
    }

    let trimmed = out.trim_end_matches('_');
    if trimmed.is_empty() {
        return "root".to_string();
    }
    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{trimmed}");
    }
    trimmed.to_string()
}

/// True if `name` is a bare identifier: ASCII letters, digits and `_`, not
/// starting with a digit.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_path() {
        assert_eq!(path_to_name("/users"), "users");
        assert_eq!(path_to_name("/store/inventory/"), "store_inventory");
    }

    #[test]
    fn test_template_segment() {
        assert_eq!(path_to_name("/items/{itemId}"), "items_item_id");
        assert_eq!(
            path_to_name("/users/{userId}/profilePhotos"),
            "users_user_id_profile_photos"
        );
    }

    #[test]
    fn test_uppercase_runs() {
        assert_eq!(path_to_name("/getHTTPStatus"), "get_httpstatus");
        assert_eq!(path_to_name("/HTTPStatus"), "httpstatus");
        assert_eq!(path_to_name("/api2Go"), "api2_go");
    }

    #[test]
    fn test_non_identifier_characters() {
        assert_eq!(path_to_name("/pets.json"), "pets_json");
        assert_eq!(path_to_name("/pet-store/{pet_id}"), "pet_store_pet_id");
        assert_eq!(path_to_name("/a//b"), "a_b");
        assert_eq!(path_to_name("/{id}"), "id");
    }

    #[test]
    fn test_degenerate_paths() {
        assert_eq!(path_to_name("/"), "root");
        assert_eq!(path_to_name(""), "root");
        assert_eq!(path_to_name("/{}"), "root");
        assert_eq!(path_to_name("/2fa/setup"), "_2fa_setup");
    }

    #[test]
    fn test_results_are_identifiers() {
        for path in [
            "/",
            "/items/{itemId}",
            "/2fa",
            "/ümlaut/Path",
            "/a-b/c.d/{E}",
            "/v1/users/{user-id}/ListAll",
        ] {
            let name = path_to_name(path);
            assert!(is_identifier(&name), "{path} -> {name}");
        }
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("items_item_id"));
        assert!(is_identifier("_2fa"));
        assert!(!is_identifier("2fa"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a-b"));
    }
}
