use super::*;
use std::cell::RefCell;

#[test]
fn page_paths_match_routes() {
    assert_eq!(Page::Landing.path(), "/");
    assert_eq!(Page::Register.path(), "/register");
    assert_eq!(Page::Dashboard.path(), "/dashboard");
}

#[test]
fn closures_navigate_with_page_path() {
    let visited = RefCell::new(Vec::new());
    let navigator = |path: &str| visited.borrow_mut().push(path.to_owned());

    navigator.navigate(Page::Dashboard);
    navigator.navigate(Page::Landing);

    assert_eq!(*visited.borrow(), vec!["/dashboard", "/"]);
}
