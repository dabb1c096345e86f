//! HTTP span helpers.

use uuid::Uuid;

/// Replace UUID path segments so spans for the same route group together.
pub(super) fn route_for_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut route = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            route.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            route.push_str("{uuid}");
        } else {
            route.push_str(segment);
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_replaced() {
        let user = Uuid::now_v7();
        let order = Uuid::now_v7();

        assert_eq!(
            route_for_path(&format!("/users/{user}/orders/{order}")),
            "/users/{uuid}/orders/{uuid}"
        );
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_for_path("/"), "/");
        assert_eq!(route_for_path("/products/discounts"), "/products/discounts");
    }
}
