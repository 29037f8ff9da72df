//! Shared fixtures for state tests: notice builders and an in-memory
//! `NoticeApi` that records every call.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::net::api::NoticeApi;
use crate::net::error::ApiError;
use crate::net::types::{Notice, NoticeFilters, NoticeListResponse, NoticePayload, NoticeStatus, Pagination};

pub const SERVER_PUBLISHED_AT: &str = "2025-01-01T08:00:00Z";

pub fn notice(id: &str, title: &str, status: NoticeStatus) -> Notice {
    Notice {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("{title} body"),
        notice_type: "General".to_owned(),
        target_department_or_individual: Some("HR".to_owned()),
        employee_id: None,
        employee_name: None,
        position: None,
        publishing_date: Some("2025-03-05".to_owned()),
        status,
        published_at: (status == NoticeStatus::Published).then(|| SERVER_PUBLISHED_AT.to_owned()),
        attachment: None,
        file_url: None,
    }
}

pub fn list_response(data: Vec<Notice>, pages: u32, published_count: u64, draft_count: u64) -> NoticeListResponse {
    NoticeListResponse { data, pagination: Pagination { pages, published_count, draft_count } }
}

pub fn server_error() -> ApiError {
    ApiError::Response { status: 500, body: "boom".to_owned() }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    Create(NoticePayload),
    List { page: u32, filters: NoticeFilters },
    Get(String),
    UpdateStatus(String, NoticeStatus),
    Update(String, NoticePayload),
    Delete(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Create,
    List,
    Get,
    UpdateStatus,
    Update,
    Delete,
}

/// In-memory notice service. Lists are filtered by status and search text
/// and paginated by `page_size`; counters cover the whole filtered set.
pub struct FakeNoticeApi {
    pub notices: Mutex<Vec<Notice>>,
    pub calls: Mutex<Vec<ApiCall>>,
    failing: Mutex<HashSet<Op>>,
    next_id: Mutex<u32>,
    page_size: usize,
}

impl FakeNoticeApi {
    pub fn new(notices: Vec<Notice>) -> Self {
        Self::with_page_size(notices, 10)
    }

    pub fn with_page_size(notices: Vec<Notice>, page_size: usize) -> Self {
        Self {
            notices: Mutex::new(notices),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            next_id: Mutex::new(100),
            page_size,
        }
    }

    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn stored(&self, id: &str) -> Option<Notice> {
        self.notices.lock().unwrap().iter().find(|n| n.id == id).cloned()
    }

    fn record(&self, call: ApiCall, op: Op) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(server_error());
        }
        Ok(())
    }

    fn not_found() -> ApiError {
        ApiError::Response { status: 404, body: "not found".to_owned() }
    }

    fn apply_payload(notice: &mut Notice, payload: &NoticePayload) {
        notice.title.clone_from(&payload.title);
        notice.description.clone_from(&payload.description);
        notice.notice_type = payload.notice_type.as_str().to_owned();
        notice.target_department_or_individual =
            payload.target_department_or_individual.map(|t| t.as_str().to_owned());
        notice.employee_id.clone_from(&payload.employee_id);
        notice.employee_name.clone_from(&payload.employee_name);
        notice.position.clone_from(&payload.position);
        notice.publishing_date = Some(payload.publishing_date.clone()).filter(|d| !d.is_empty());
        notice.attachment.clone_from(&payload.attachment);
        notice.status = payload.status;
        notice.published_at = (payload.status == NoticeStatus::Published).then(|| SERVER_PUBLISHED_AT.to_owned());
    }
}

#[async_trait::async_trait]
impl NoticeApi for FakeNoticeApi {
    async fn create(&self, payload: &NoticePayload) -> Result<Notice, ApiError> {
        self.record(ApiCall::Create(payload.clone()), Op::Create)?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            format!("n{}", *next_id)
        };
        let mut created = notice(&id, &payload.title, payload.status);
        Self::apply_payload(&mut created, payload);
        self.notices.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list(&self, page: u32, filters: &NoticeFilters) -> Result<NoticeListResponse, ApiError> {
        self.record(ApiCall::List { page, filters: filters.clone() }, Op::List)?;
        let notices = self.notices.lock().unwrap();
        let search = filters.search.to_lowercase();
        let filtered: Vec<&Notice> = notices
            .iter()
            .filter(|n| filters.status.is_none_or(|status| n.status == status))
            .filter(|n| search.is_empty() || n.title.to_lowercase().contains(&search))
            .collect();
        let published_count = filtered.iter().filter(|n| n.status == NoticeStatus::Published).count();
        let draft_count = filtered.iter().filter(|n| n.status == NoticeStatus::Draft).count();
        let pages = filtered.len().div_ceil(self.page_size).max(1);
        let skip = (page as usize - 1) * self.page_size;
        let data = filtered.into_iter().skip(skip).take(self.page_size).cloned().collect();
        Ok(list_response(
            data,
            u32::try_from(pages).unwrap(),
            published_count as u64,
            draft_count as u64,
        ))
    }

    async fn get_by_id(&self, id: &str) -> Result<Notice, ApiError> {
        self.record(ApiCall::Get(id.to_owned()), Op::Get)?;
        self.stored(id).ok_or_else(Self::not_found)
    }

    async fn update_status(&self, id: &str, status: NoticeStatus) -> Result<Notice, ApiError> {
        self.record(ApiCall::UpdateStatus(id.to_owned(), status), Op::UpdateStatus)?;
        let mut notices = self.notices.lock().unwrap();
        let stored = notices.iter_mut().find(|n| n.id == id).ok_or_else(Self::not_found)?;
        stored.status = status;
        stored.published_at = (status == NoticeStatus::Published).then(|| SERVER_PUBLISHED_AT.to_owned());
        Ok(stored.clone())
    }

    async fn update(&self, id: &str, payload: &NoticePayload) -> Result<Notice, ApiError> {
        self.record(ApiCall::Update(id.to_owned(), payload.clone()), Op::Update)?;
        let mut notices = self.notices.lock().unwrap();
        let stored = notices.iter_mut().find(|n| n.id == id).ok_or_else(Self::not_found)?;
        Self::apply_payload(stored, payload);
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.record(ApiCall::Delete(id.to_owned()), Op::Delete)?;
        let mut notices = self.notices.lock().unwrap();
        let index = notices.iter().position(|n| n.id == id).ok_or_else(Self::not_found)?;
        notices.remove(index);
        Ok(serde_json::json!({ "message": "Notice deleted" }))
    }
}
