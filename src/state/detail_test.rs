use super::*;
use crate::net::types::NoticeStatus;
use crate::state::test_helpers::{notice, server_error};

#[test]
fn closed_modal_is_hidden() {
    let state = NoticeDetailState::default();
    assert_eq!(state.view(), DetailView::Hidden);
}

#[test]
fn open_shows_loading_immediately() {
    let mut state = NoticeDetailState::default();
    state.open("n1");
    assert!(state.open);
    assert_eq!(state.notice_id.as_deref(), Some("n1"));
    assert_eq!(state.view(), DetailView::Loading);
}

#[test]
fn successful_fetch_renders_notice() {
    let mut state = NoticeDetailState::default();
    let request = state.open("n1");
    let fetched = notice("n1", "Office closed", NoticeStatus::Published);
    assert!(state.finish(request, Ok(fetched.clone())));
    assert_eq!(state.view(), DetailView::Loaded(&fetched));
}

#[test]
fn failed_fetch_leaves_open_empty_modal() {
    let mut state = NoticeDetailState::default();
    let request = state.open("n1");
    state.finish(request, Err(server_error()));
    assert!(state.open);
    assert!(!state.loading);
    assert!(state.notice.is_none());
    assert!(matches!(state.view(), DetailView::Empty { error: Some(msg) } if msg.contains("500")));
}

#[test]
fn close_is_idempotent() {
    let mut state = NoticeDetailState::default();
    let request = state.open("n1");
    state.finish(request, Ok(notice("n1", "t", NoticeStatus::Draft)));
    state.close();
    state.close();
    assert!(!state.open);
    assert!(state.notice_id.is_none());
    assert!(state.notice.is_none());
    assert!(!state.loading);
    assert_eq!(state.view(), DetailView::Hidden);
}

#[test]
fn late_response_after_close_is_dropped() {
    let mut state = NoticeDetailState::default();
    let request = state.open("n1");
    state.close();
    assert!(!state.finish(request, Ok(notice("n1", "t", NoticeStatus::Draft))));
    assert_eq!(state.view(), DetailView::Hidden);
}

#[test]
fn late_response_for_previous_row_is_dropped() {
    let mut state = NoticeDetailState::default();
    let first = state.open("n1");
    let second = state.open("n2");
    assert!(!state.finish(first, Ok(notice("n1", "first", NoticeStatus::Draft))));
    assert_eq!(state.view(), DetailView::Loading);
    assert!(state.finish(second, Ok(notice("n2", "second", NoticeStatus::Draft))));
    assert!(matches!(state.view(), DetailView::Loaded(n) if n.id == "n2"));
}
