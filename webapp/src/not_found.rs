use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::Route;

// the requested path, without the empty segments left by doubled or trailing slashes
fn missing_path(segments: &[String]) -> String {
    let parts: Vec<&str> = segments
        .iter()
        .map(String::as_str)
        .filter(|segment| !segment.is_empty())
        .collect();

    format!("/{}", parts.join("/"))
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = missing_path(&segments);
    debug!(path = %path, "no page at path");

    rsx! {
        main { class: "page theme-dark",
            section { class: "page-section not-found",
                h2 { class: "section-title", "Page not found" }
                p { "There is nothing at {path}." }
                Link { to: Route::Portfolio {}, class: "btn-primary", "Back to the portfolio" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn test_missing_path() {
        assert_eq!(missing_path(&segments(&["blog", "post"])), "/blog/post");
        assert_eq!(missing_path(&segments(&["blog", "", "post", ""])), "/blog/post");
        assert_eq!(missing_path(&[]), "/");
    }
}
