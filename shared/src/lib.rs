//! Platform-neutral core of the PodNet admin dashboard.
//!
//! Entity shapes, the REST contract of the podcast-network API, typed form
//! records, the explicit session context, and the small pure helpers every
//! view relies on: YouTube link validation and avatar initials.

pub mod api;
pub mod coerce;
pub mod forms;
pub mod initials;
pub mod models;
pub mod overview;
pub mod session;
pub mod youtube;

pub use api::{ApiConfig, ApiError, EntityKind};
pub use forms::{to_form_state, to_submission_payload, EntityForm};
pub use initials::derive_initials;
pub use models::{Advertiser, Entity, Episode, Host, Show, User};
pub use session::{Session, SessionStore};
pub use youtube::{extract_watch_url, is_valid_reference};
