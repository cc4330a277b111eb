pub mod advertisers;
pub mod episodes;
pub mod error_banner;
pub mod form_fields;
pub mod host_avatar;
pub mod hosts;
pub mod loading_spinner;
pub mod modal;
pub mod overview;
pub mod section;
pub mod shows;
pub mod stats_card;
pub mod theme_toggle;
pub mod video_button;
