use std::collections::BTreeSet;

use client::routes::{declared_paths, normalize_path};
use leptos_axum::generate_route_list;

fn rendered_paths() -> BTreeSet<String> {
    generate_route_list(client::app::App)
        .iter()
        .map(|listing| normalize_path(listing.path()).to_owned())
        .collect()
}

#[test]
fn leptos_routes_match_route_table() {
    let table: BTreeSet<String> = declared_paths().map(str::to_owned).collect();
    assert_eq!(rendered_paths(), table);
}

#[test]
fn leptos_routes_cover_login_and_root_only() {
    let expected: BTreeSet<String> = ["/", "/login"].into_iter().map(str::to_owned).collect();
    assert_eq!(rendered_paths(), expected);
}
