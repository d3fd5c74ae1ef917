use super::*;

fn banner(id: &str) -> Banner {
    Banner { id: id.to_owned(), title: format!("Banner {id}"), ..Banner::default() }
}

fn loaded(banners: Vec<Banner>) -> BannerState {
    let mut state = BannerState::default();
    let ticket = state.begin_load();
    assert!(state.finish_load(ticket, Ok(banners)));
    state
}

#[test]
fn loading_without_banner_shows_spinner() {
    let mut state = BannerState::default();
    state.begin_load();
    assert_eq!(state.view(), BannerView::Loading);
}

#[test]
fn no_banner_offers_create() {
    let state = loaded(Vec::new());
    assert_eq!(state.view(), BannerView::Create);
    assert_eq!(state.status, LoadStatus::Empty);
}

#[test]
fn first_banner_wins_and_duplicates_are_counted() {
    let state = loaded(vec![banner("a"), banner("b"), banner("c")]);
    assert_eq!(state.view(), BannerView::Preview(banner("a")));
    assert_eq!(state.duplicates, 2);
}

#[test]
fn edit_switches_view_and_save_returns_to_preview() {
    let mut state = loaded(vec![banner("a")]);
    state.start_edit();
    assert_eq!(state.view(), BannerView::Edit(banner("a")));
    state.finish_save();
    assert_eq!(state.view(), BannerView::Preview(banner("a")));
}

#[test]
fn start_edit_without_banner_is_noop() {
    let mut state = loaded(Vec::new());
    state.start_edit();
    assert!(!state.editing);
}

#[test]
fn delete_reverts_to_create() {
    let mut state = loaded(vec![banner("a")]);
    assert_eq!(state.begin_delete().as_deref(), Some("a"));
    assert_eq!(state.begin_delete(), None);
    state.finish_delete(Ok(()));
    assert_eq!(state.view(), BannerView::Create);
    assert!(!state.deleting);
}

#[test]
fn failed_delete_keeps_banner() {
    let mut state = loaded(vec![banner("a")]);
    state.begin_delete();
    state.finish_delete(Err(ApiError::Status(500)));
    assert_eq!(state.view(), BannerView::Preview(banner("a")));
    assert!(state.error.is_some());
}

#[test]
fn stale_load_is_ignored() {
    let mut state = BannerState::default();
    let old = state.begin_load();
    let new = state.begin_load();
    assert!(state.finish_load(new, Ok(vec![banner("fresh")])));
    assert!(!state.finish_load(old, Ok(Vec::new())));
    assert_eq!(state.banner.as_ref().map(|b| b.id.as_str()), Some("fresh"));
}

#[test]
fn load_failure_falls_back_to_create_with_error() {
    let mut state = BannerState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.view(), BannerView::Create);
    assert!(state.error.is_some());
}

#[test]
fn kinds_map_to_their_resources() {
    assert_eq!(BannerKind::Home.spec().base_path, "/api/home-banners");
    assert_eq!(BannerKind::Cleaning.spec().base_path, "/api/cleaning-banners");
}
