/// Static path → screen mapping. Holds no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Register,
    Verify,
    Masking,
}

impl Route {
    pub const ALL: &[Route] = &[Route::Register, Route::Verify, Route::Masking];

    pub fn path(self) -> &'static str {
        match self {
            Route::Register => "/",
            Route::Verify => "/verify",
            Route::Masking => "/masking",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Register => "Face Registration",
            Route::Verify => "Face Verification",
            Route::Masking => "Face Masking",
        }
    }

    /// Trailing slashes are ignored; unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.trim();
        let normalized = path.trim_end_matches('/');
        match normalized {
            "" => Some(Route::Register),
            "/verify" => Some(Route::Verify),
            "/masking" => Some(Route::Masking),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Register)]
    #[case("", Route::Register)]
    #[case("/verify", Route::Verify)]
    #[case("/verify/", Route::Verify)]
    #[case("/masking", Route::Masking)]
    fn test_from_path(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::from_path(path), Some(expected));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/admin"), None);
        assert_eq!(Route::from_path("verify"), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for &route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
