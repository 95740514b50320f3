//! Event-driven controller between a form surface and the validation engine

use tracing::debug;

use signup_validation::{
    check_password_checklist, validate_confirm_password, validate_email, validate_form,
    validate_zipcode, FormState, ValidationConfig,
};

use crate::presentation::{ChecklistPresentation, FieldId, FieldPresentation};

/// What a surface must expose to the controller
///
/// The surface owns the real controls; the controller only reads current
/// values and pushes presentation state back through this trait.
pub trait SignupSurface {
    /// Current content of one field
    fn field_value(&self, field: FieldId) -> String;

    /// Apply an error-visible or cleared state to one field
    fn set_field_presentation(&mut self, field: FieldId, presentation: FieldPresentation);

    /// Show or hide the password checklist
    fn set_checklist_visible(&mut self, visible: bool);

    /// Update the three checklist rows
    fn set_checklist(&mut self, checklist: ChecklistPresentation);
}

/// Field-level events the surface forwards to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Field content changed
    Input(FieldId),
    /// Field gained focus
    Focus(FieldId),
    /// Field lost focus; `to_submit` is true when focus moved to the
    /// submit control (the checklist stays open through a submit click)
    Blur { field: FieldId, to_submit: bool },
    /// The user tried to submit the form
    SubmitAttempt,
}

/// Sequences validation over surface events
///
/// Live validation re-runs a single field on each of its input events; a
/// submit attempt validates every field before reporting, so all errors
/// become visible at once.
pub struct FormController<S: SignupSurface> {
    surface: S,
    config: ValidationConfig,
}

impl<S: SignupSurface> FormController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, ValidationConfig::default())
    }

    pub fn with_config(surface: S, config: ValidationConfig) -> Self {
        Self { surface, config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Dispatch one surface event
    pub fn handle_event(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::Input(field) => self.revalidate_field(field),
            FieldEvent::Focus(FieldId::Password) => {
                self.surface.set_checklist_visible(true);
                self.refresh_checklist();
            }
            FieldEvent::Focus(_) => {}
            FieldEvent::Blur {
                field: FieldId::Password,
                to_submit,
            } => {
                if !to_submit {
                    self.surface.set_checklist_visible(false);
                }
            }
            FieldEvent::Blur { .. } => {}
            FieldEvent::SubmitAttempt => {
                self.submit();
            }
        }
    }

    /// Re-validate a single field and push its presentation
    pub fn revalidate_field(&mut self, field: FieldId) {
        let value = self.surface.field_value(field);
        match field {
            FieldId::Email => {
                let verdict = validate_email(&value);
                debug!(?field, valid = verdict.is_valid(), "field revalidated");
                self.surface
                    .set_field_presentation(field, FieldPresentation::from(&verdict));
            }
            FieldId::Zipcode => {
                let verdict = validate_zipcode(&value, &self.config);
                debug!(?field, valid = verdict.is_valid(), "field revalidated");
                self.surface
                    .set_field_presentation(field, FieldPresentation::from(&verdict));
            }
            FieldId::Password => {
                // Live password feedback goes through the checklist rows,
                // not an error message.
                self.refresh_checklist();
            }
            FieldId::ConfirmPassword => {
                let password = self.surface.field_value(FieldId::Password);
                let verdict = validate_confirm_password(&value, &password);
                debug!(?field, valid = verdict.is_valid(), "field revalidated");
                self.surface
                    .set_field_presentation(field, FieldPresentation::from(&verdict));
            }
        }
    }

    /// Full-form validation on submit intent
    ///
    /// Every field is validated and presented before the outcome is
    /// returned; there is no early exit on the first invalid field. The
    /// checklist is shown when the password is invalid and hidden when it
    /// is valid. Returns whether submission may proceed.
    pub fn submit(&mut self) -> bool {
        let state = self.capture_state();
        let report = validate_form(&state, &self.config);

        self.surface
            .set_field_presentation(FieldId::Email, FieldPresentation::from(&report.email));
        self.surface
            .set_field_presentation(FieldId::Zipcode, FieldPresentation::from(&report.zipcode));
        self.surface.set_field_presentation(
            FieldId::Password,
            FieldPresentation::from(&report.password),
        );
        self.surface.set_checklist(report.password_checklist.into());
        self.surface
            .set_checklist_visible(!report.password.is_valid());
        self.surface.set_field_presentation(
            FieldId::ConfirmPassword,
            FieldPresentation::from(&report.confirm_password),
        );

        debug!(overall_valid = report.overall_valid, "submit validation pass");
        report.overall_valid
    }

    /// Snapshot the surface's current field values
    pub fn capture_state(&self) -> FormState {
        FormState {
            email: self.surface.field_value(FieldId::Email),
            zipcode: self.surface.field_value(FieldId::Zipcode),
            password: self.surface.field_value(FieldId::Password),
            confirm_password: self.surface.field_value(FieldId::ConfirmPassword),
        }
    }

    fn refresh_checklist(&mut self) {
        let value = self.surface.field_value(FieldId::Password);
        let checklist = check_password_checklist(&value, &self.config);
        debug!(all_satisfied = checklist.all_satisfied(), "checklist refreshed");
        self.surface.set_checklist(checklist.into());
    }
}
