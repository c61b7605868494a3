//! Navigation capability for the storefront chrome.
//!
//! The navbar never talks to the router directly. A platform shell registers
//! a [`Navigator`] once at startup and the component dispatches through it,
//! so this crate does not need to know the shell's `Route` enum and the
//! navbar renders (and is tested) without a live routing environment.

use once_cell::sync::OnceCell;

/// Path targeted by the logo.
pub const ROOT_PATH: &str = "/";

/// Single-operation navigation capability. `shallow` asks the shell to
/// replace the current location instead of pushing a new history entry.
pub struct Navigator {
    pub navigate: fn(path: &str, shallow: bool),
}

static NAVIGATOR: OnceCell<Navigator> = OnceCell::new();

/// Register the platform navigator. First writer wins; later registrations
/// are ignored.
pub fn register_navigator(navigator: Navigator) {
    let _ = NAVIGATOR.set(navigator);
}

/// Dispatch through the registered navigator. Without one (unit tests,
/// headless renders) the request is dropped.
pub fn navigate(path: &str, shallow: bool) {
    match NAVIGATOR.get() {
        Some(nav) => (nav.navigate)(path, shallow),
        None => {
            #[cfg(debug_assertions)]
            eprintln!("[nav] no navigator registered; dropping navigation to {path}");
        }
    }
}

/// Shallow navigation target for a category selection. The category value is
/// percent-encoded.
pub fn category_path(category: &str) -> String {
    format!("/?category={}", urlencoding::encode(category))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn category_path_is_percent_encoded() {
        assert_eq!(category_path("electronics"), "/?category=electronics");
        assert_eq!(
            category_path("home & garden"),
            "/?category=home%20%26%20garden"
        );
        assert_eq!(
            category_path("men's clothing"),
            "/?category=men%27s%20clothing"
        );
    }

    #[test]
    fn logo_targets_the_root_path() {
        assert_eq!(ROOT_PATH, "/");
    }

    // Registration is process-global, so the unregistered and registered
    // behaviors are exercised in one test to keep ordering deterministic.
    #[test]
    fn navigate_dispatches_only_once_registered() {
        static RECORDED: Mutex<Vec<(String, bool)>> = Mutex::new(Vec::new());

        fn record(path: &str, shallow: bool) {
            RECORDED.lock().unwrap().push((path.to_string(), shallow));
        }

        navigate("/?category=dropped", true);
        assert!(RECORDED.lock().unwrap().is_empty());

        register_navigator(Navigator { navigate: record });
        navigate("/?category=electronics", true);

        let recorded = RECORDED.lock().unwrap();
        assert_eq!(
            recorded.as_slice(),
            &[("/?category=electronics".to_string(), true)]
        );
    }
}
