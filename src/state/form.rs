//! Create/edit notice form.
//!
//! DESIGN
//! ======
//! Both flows share one field shape and one payload builder. Validation runs
//! synchronously before any request: a non-empty error map blocks the submit
//! entirely. "Save as draft" and "publish" differ only in the status sent.
//! Every submit settles to an explicit `SubmitOutcome`, and failures keep the
//! user's input and record the reason in `error`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use time::Date;

use crate::net::api::NoticeApi;
use crate::net::error::ApiError;
use crate::net::types::{Notice, NoticePayload, NoticeStatus, NoticeType, TargetAudience};
use crate::util::date::{date_part, iso_date};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Description,
    NoticeType,
    Target,
    EmployeeId,
    EmployeeName,
    Position,
}

impl FormField {
    /// Wire name of the field, as used in the payload.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::NoticeType => "noticeType",
            Self::Target => "targetDepartmentOrIndividual",
            Self::EmployeeId => "employeeId",
            Self::EmployeeName => "employeeName",
            Self::Position => "position",
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Self::Title => "Title is required",
            Self::Description => "Description is required",
            Self::NoticeType => "Notice type is required",
            Self::Target => "Target Department(s) or Individual is required",
            Self::EmployeeId => "Employee ID is required",
            Self::EmployeeName => "Employee Name is required",
            Self::Position => "Position is required",
        }
    }
}

pub type FieldErrors = BTreeMap<FormField, &'static str>;

/// Which flow the form belongs to. The edit flow addresses a specific
/// employee and requires the extended field set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    Create,
    Edit,
}

impl FormVariant {
    #[must_use]
    pub fn required_fields(self) -> &'static [FormField] {
        match self {
            Self::Create => &[FormField::Title, FormField::Description, FormField::NoticeType],
            Self::Edit => &[
                FormField::Title,
                FormField::Description,
                FormField::NoticeType,
                FormField::Target,
                FormField::EmployeeId,
                FormField::EmployeeName,
                FormField::Position,
            ],
        }
    }
}

/// The two (three, on edit) submit buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    SaveDraft,
    Publish,
    /// Edit only: keep the notice's current status.
    Save,
}

impl SubmitAction {
    #[must_use]
    pub fn status(self, existing: Option<NoticeStatus>) -> NoticeStatus {
        match self {
            Self::SaveDraft => NoticeStatus::Draft,
            Self::Publish => NoticeStatus::Published,
            Self::Save => existing.unwrap_or(NoticeStatus::Draft),
        }
    }

    /// Button label while the request is in flight.
    #[must_use]
    pub fn pending_label(self) -> &'static str {
        match self {
            Self::SaveDraft => "Saving Draft...",
            Self::Publish => "Publishing...",
            Self::Save => "Saving...",
        }
    }
}

/// Field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeForm {
    pub title: String,
    pub description: String,
    pub notice_type: Option<NoticeType>,
    pub target: Option<TargetAudience>,
    pub employee_id: String,
    pub employee_name: String,
    pub position: String,
    pub publishing_date: Option<Date>,
    pub attachment: Option<String>,
}

impl NoticeForm {
    /// Prefill from a stored notice. Labels outside the canonical
    /// enumerations are left unselected so the user must pick one.
    #[must_use]
    pub fn from_notice(notice: &Notice) -> Self {
        Self {
            title: notice.title.clone(),
            description: notice.description.clone(),
            notice_type: notice.notice_type.parse().ok(),
            target: notice
                .target_department_or_individual
                .as_deref()
                .and_then(|label| label.parse().ok()),
            employee_id: notice.employee_id.clone().unwrap_or_default(),
            employee_name: notice.employee_name.clone().unwrap_or_default(),
            position: notice.position.clone().unwrap_or_default(),
            publishing_date: notice.publishing_date.as_deref().and_then(date_part),
            attachment: notice.attachment.clone(),
        }
    }

    #[must_use]
    pub fn validate(&self, variant: FormVariant) -> FieldErrors {
        variant
            .required_fields()
            .iter()
            .copied()
            .filter(|field| !self.has_value(*field))
            .map(|field| (field, field.required_message()))
            .collect()
    }

    fn has_value(&self, field: FormField) -> bool {
        match field {
            FormField::Title => !self.title.trim().is_empty(),
            FormField::Description => !self.description.trim().is_empty(),
            FormField::NoticeType => self.notice_type.is_some(),
            FormField::Target => self.target.is_some(),
            FormField::EmployeeId => !self.employee_id.trim().is_empty(),
            FormField::EmployeeName => !self.employee_name.trim().is_empty(),
            FormField::Position => !self.position.trim().is_empty(),
        }
    }

    /// Build the request body. `None` until a notice type is chosen;
    /// callers validate first.
    #[must_use]
    pub fn to_payload(&self, status: NoticeStatus) -> Option<NoticePayload> {
        Some(NoticePayload {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            notice_type: self.notice_type?,
            target_department_or_individual: self.target,
            employee_id: non_empty(&self.employee_id),
            employee_name: non_empty(&self.employee_name),
            position: non_empty(&self.position),
            publishing_date: self.publishing_date.map(iso_date).unwrap_or_default(),
            attachment: self.attachment.clone().filter(|a| !a.is_empty()),
            status,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// How a submit attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Saved(Notice),
    /// Validation failed; nothing was sent.
    Invalid,
    /// The form is still loading or another submit is in flight.
    Busy,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct NoticeFormState {
    pub variant: FormVariant,
    /// Notice being edited; `None` on create.
    pub notice_id: Option<String>,
    pub form: NoticeForm,
    pub errors: FieldErrors,
    pub submitting: Option<SubmitAction>,
    pub success: bool,
    pub error: Option<String>,
    /// Edit only: prefill fetch outstanding, the form is not interactive.
    pub prefill_loading: bool,
    pub existing_status: Option<NoticeStatus>,
}

impl NoticeFormState {
    #[must_use]
    pub fn create() -> Self {
        Self {
            variant: FormVariant::Create,
            notice_id: None,
            form: NoticeForm::default(),
            errors: FieldErrors::new(),
            submitting: None,
            success: false,
            error: None,
            prefill_loading: false,
            existing_status: None,
        }
    }

    #[must_use]
    pub fn edit(id: &str) -> Self {
        Self {
            variant: FormVariant::Edit,
            notice_id: Some(id.to_owned()),
            prefill_loading: true,
            ..Self::create()
        }
    }

    #[must_use]
    pub fn interactive(&self) -> bool {
        !self.prefill_loading && self.submitting.is_none()
    }

    pub fn finish_prefill(&mut self, result: Result<Notice, ApiError>) {
        self.prefill_loading = false;
        match result {
            Ok(notice) => {
                self.form = NoticeForm::from_notice(&notice);
                self.existing_status = Some(notice.status);
            }
            Err(e) => {
                tracing::warn!(notice_id = ?self.notice_id, error = %e, "failed to load notice for editing");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Validate and mark the action in flight. On `Err` nothing may be sent.
    ///
    /// # Errors
    ///
    /// Returns `SubmitOutcome::Busy` when the form is not interactive and
    /// `SubmitOutcome::Invalid` when a required field is missing.
    pub fn begin_submit(&mut self, action: SubmitAction) -> Result<NoticePayload, SubmitOutcome> {
        if !self.interactive() {
            return Err(SubmitOutcome::Busy);
        }
        self.errors = self.form.validate(self.variant);
        let status = action.status(self.existing_status);
        let payload = match self.form.to_payload(status) {
            Some(payload) if self.errors.is_empty() => payload,
            _ => return Err(SubmitOutcome::Invalid),
        };
        self.submitting = Some(action);
        self.success = false;
        self.error = None;
        Ok(payload)
    }

    pub fn finish_submit(&mut self, result: Result<Notice, ApiError>) -> SubmitOutcome {
        self.submitting = None;
        match result {
            Ok(notice) => {
                tracing::info!(notice_id = %notice.id, status = %notice.status, "notice saved");
                self.success = true;
                match self.variant {
                    FormVariant::Create => self.form = NoticeForm::default(),
                    FormVariant::Edit => self.existing_status = Some(notice.status),
                }
                SubmitOutcome::Saved(notice)
            }
            Err(e) => {
                tracing::warn!(notice_id = ?self.notice_id, error = %e, "notice submit failed");
                let message = e.to_string();
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Close the success confirmation.
    pub fn dismiss_success(&mut self) {
        self.success = false;
    }
}

// =============================================================================
// ASYNC FLOWS
// =============================================================================

/// Edit flow entry: fetch the notice and prefill the form.
pub async fn load_for_edit<A: NoticeApi + ?Sized>(api: &A, id: &str) -> NoticeFormState {
    let mut state = NoticeFormState::edit(id);
    let result = api.get_by_id(id).await;
    state.finish_prefill(result);
    state
}

/// Validate, then create or update depending on the form's variant.
pub async fn submit<A: NoticeApi + ?Sized>(
    state: &mut NoticeFormState,
    api: &A,
    action: SubmitAction,
) -> SubmitOutcome {
    let payload = match state.begin_submit(action) {
        Ok(payload) => payload,
        Err(outcome) => return outcome,
    };
    let result = match state.notice_id.clone() {
        Some(id) => api.update(&id, &payload).await,
        None => api.create(&payload).await,
    };
    state.finish_submit(result)
}
