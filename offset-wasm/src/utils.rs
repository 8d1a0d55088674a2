use wasm_bindgen::JsValue;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let decoded = percent_encoding::percent_decode_str(&s)
        .decode_utf8()
        .map(|c| c.into_owned());
    decoded.unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_language_param() {
        assert_eq!(get_query_param("?lang=en", "lang").as_deref(), Some("en"));
        assert_eq!(get_query_param("?x=1&lang=de-DE", "lang").as_deref(), Some("de-DE"));
        assert_eq!(get_query_param("?x=1", "lang"), None);
        assert_eq!(get_query_param("", "lang"), None);
    }

    #[test]
    fn decodes_values() {
        assert_eq!(get_query_param("?lang=en%2DUS", "lang").as_deref(), Some("en-US"));
        assert_eq!(get_query_param("?q=a+b", "q").as_deref(), Some("a b"));
        assert_eq!(get_query_param("?flag", "flag").as_deref(), Some(""));
    }
}
