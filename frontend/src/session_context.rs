use std::rc::Rc;

use podnet_shared::{api::AuthResponse, session::Session};
use yew::prelude::*;

use crate::storage::LocalStore;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Session,
    /// One-shot message carried across a route change, e.g. "Welcome back!".
    pub notice: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: Session::load(&LocalStore),
            notice: None,
        }
    }
}

pub enum SessionAction {
    SignIn(AuthResponse),
    /// Drops token and user; the theme preference stays.
    SignOut,
    ToggleDarkMode,
    /// Sets or clears the pending notice.
    Notify(Option<String>),
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let mut store = LocalStore;
        match action {
            SessionAction::SignIn(auth) => next.session.sign_in(&mut store, auth),
            SessionAction::SignOut => next.session.sign_out(&mut store),
            SessionAction::ToggleDarkMode => {
                next.session.toggle_dark_mode(&mut store);
            },
            SessionAction::Notify(notice) => next.notice = notice,
        }
        apply_theme(next.session.dark_mode);
        Rc::new(next)
    }
}

/// Mirrors the theme flag onto the `dark` class of `<html>`.
pub fn apply_theme(dark_mode: bool) {
    let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let _ = root.class_list().toggle_with_force("dark", dark_mode);
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::default);

    {
        let dark_mode = state.session.dark_mode;
        use_effect_with(dark_mode, move |dark_mode| {
            apply_theme(*dark_mode);
            || ()
        });
    }

    html! {
        <ContextProvider<SessionContext> context={state}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

/// Session of the surrounding [`SessionProvider`]. Outside a provider a
/// component-local session restored from `localStorage` is used instead.
#[hook]
pub fn use_session() -> SessionContext {
    let detached = use_reducer(SessionState::default);
    use_context::<SessionContext>().unwrap_or(detached)
}
