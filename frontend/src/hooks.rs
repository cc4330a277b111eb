use std::{ops::Deref, rc::Rc};

use podnet_shared::{
    api::ApiError,
    forms::{to_form_state, to_submission_payload},
    models::Entity,
};
use yew::prelude::*;

use crate::api;

/// State of a create/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Closed,
    Create,
    /// Editing the record with this id.
    Edit(String),
}

impl DialogMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogMode::Closed)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, DialogMode::Edit(_))
    }
}

/// What an entity section needs from the dashboard around it.
#[derive(Clone, PartialEq)]
pub struct SectionActions {
    pub token: AttrValue,
    /// Called with a success message after any write; the dashboard reloads.
    pub on_changed: Callback<String>,
    pub on_error: Callback<ApiError>,
}

/// Form record held in a reducer, so every edit lands on the latest state
/// even when it arrives after an await.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<F>(pub F);

impl<F> Deref for FormState<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.0
    }
}

pub enum FormAction<F> {
    Replace(F),
    /// Writes one text field.
    Set(fn(&mut F, String), String),
}

impl<F: Clone + 'static> Reducible for FormState<F> {
    type Action = FormAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Replace(form) => Rc::new(FormState(form)),
            FormAction::Set(apply, value) => {
                let mut next = self.0.clone();
                apply(&mut next, value);
                Rc::new(FormState(next))
            },
        }
    }
}

pub type FormHandle<F> = UseReducerHandle<FormState<F>>;

pub struct EntityEditor<E: Entity> {
    pub form: FormHandle<E::Form>,
    pub mode: UseStateHandle<DialogMode>,
    pub saving: bool,
    pub open_create: Callback<MouseEvent>,
    pub open_edit: Callback<E>,
    pub close: Callback<()>,
    pub submit: Callback<SubmitEvent>,
    pub remove: Callback<E>,
}

pub fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Callback that writes one text field of the form held in `form`.
pub fn field_setter<F: Clone + 'static>(
    form: &FormHandle<F>,
    apply: fn(&mut F, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| form.dispatch(FormAction::Set(apply, value)))
}

/// Dialog state plus create/update/delete round trips for one entity kind.
///
/// Every successful write is reported through `actions.on_changed`; failures
/// go to `actions.on_error` untouched so a 401 can end the session.
#[hook]
pub fn use_entity_editor<E: Entity>(actions: SectionActions) -> EntityEditor<E> {
    let form = use_reducer(FormState::<E::Form>::default);
    let mode = use_state(|| DialogMode::Closed);
    let saving = use_state(|| false);

    let open_create = {
        let form = form.clone();
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| {
            form.dispatch(FormAction::Replace(Default::default()));
            mode.set(DialogMode::Create);
        })
    };

    let open_edit = {
        let form = form.clone();
        let mode = mode.clone();
        Callback::from(move |entity: E| {
            form.dispatch(FormAction::Replace(to_form_state(&entity)));
            mode.set(DialogMode::Edit(entity.id().to_string()));
        })
    };

    let close = {
        let form = form.clone();
        let mode = mode.clone();
        Callback::from(move |_: ()| {
            mode.set(DialogMode::Closed);
            form.dispatch(FormAction::Replace(Default::default()));
        })
    };

    let submit = {
        let form = form.clone();
        let mode = mode.clone();
        let saving = saving.clone();
        let actions = actions.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);

            let values = form.0.clone();
            let target = (*mode).clone();
            let form = form.clone();
            let mode = mode.clone();
            let saving = saving.clone();
            let actions = actions.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let payload = to_submission_payload(&values);
                let (result, verb) = match &target {
                    DialogMode::Edit(id) => {
                        (api::update::<E>(&actions.token, id, &payload).await, "updated")
                    },
                    _ => (api::create::<E>(&actions.token, &payload).await, "created"),
                };
                saving.set(false);
                match result {
                    Ok(_) => {
                        mode.set(DialogMode::Closed);
                        form.dispatch(FormAction::Replace(Default::default()));
                        actions.on_changed.emit(format!(
                            "{} {verb} successfully",
                            capitalized(E::KIND.singular())
                        ));
                    },
                    Err(err) => actions.on_error.emit(err),
                }
            });
        })
    };

    let remove = {
        let actions = actions.clone();
        Callback::from(move |entity: E| {
            let noun = E::KIND.singular();
            let confirmed = web_sys::window()
                .and_then(|win| {
                    win.confirm_with_message(&format!(
                        "Are you sure you want to delete this {noun}?"
                    ))
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let actions = actions.clone();
            let id = entity.id().to_string();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete(&actions.token, E::KIND, &id).await {
                    Ok(_) => actions
                        .on_changed
                        .emit(format!("{} deleted successfully", capitalized(noun))),
                    Err(err) => actions.on_error.emit(err),
                }
            });
        })
    };

    EntityEditor {
        form,
        mode,
        saving: *saving,
        open_create,
        open_edit,
        close,
        submit,
        remove,
    }
}

#[cfg(test)]
mod tests {
    use podnet_shared::forms::HostForm;

    use super::*;

    #[test]
    fn capitalized_handles_empty_and_unicode() {
        assert_eq!(capitalized("host"), "Host");
        assert_eq!(capitalized(""), "");
        assert_eq!(capitalized("épisode"), "Épisode");
    }

    fn apply(form: FormState<HostForm>, action: FormAction<HostForm>) -> FormState<HostForm> {
        (*Rc::new(form).reduce(action)).clone()
    }

    #[test]
    fn late_field_writes_keep_earlier_edits() {
        let form = apply(
            FormState::default(),
            FormAction::Set(|f, v| f.name = v, "Ranveer Allahbadia".to_string()),
        );
        let form = apply(form, FormAction::Set(|f, v| f.bio = v, "Host of TRS".to_string()));
        // An upload finishing after the typing above only touches the image.
        let form = apply(
            form,
            FormAction::Set(|f, v| f.image_url = v, "http://h/uploads/hosts/a.png".to_string()),
        );

        assert_eq!(form.name, "Ranveer Allahbadia");
        assert_eq!(form.bio, "Host of TRS");
        assert_eq!(form.image_url, "http://h/uploads/hosts/a.png");
    }

    #[test]
    fn replace_resets_the_record() {
        let form = apply(
            FormState::default(),
            FormAction::Set(|f, v| f.email = v, "a@b.c".to_string()),
        );
        let form = apply(form, FormAction::Replace(HostForm::default()));
        assert_eq!(form.0, HostForm::default());
    }

    #[test]
    fn dialog_mode_flags() {
        assert!(!DialogMode::Closed.is_open());
        assert!(DialogMode::Create.is_open());
        assert!(!DialogMode::Create.is_edit());
        assert!(DialogMode::Edit("h-1".to_string()).is_edit());
    }
}
