//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use podnet_shared::api::EntityKind;

/// Backend used when neither `--api-base` nor `PODNET_API_BASE` is given.
pub const DEFAULT_API_BASE: &str = "http://localhost:8001";

/// Session file used when neither `--session-file` nor `PODNET_SESSION_FILE`
/// is given.
pub const DEFAULT_SESSION_FILE: &str = "./.podnet/session.json";

/// Parsed command line.
#[derive(Debug, Parser)]
#[command(name = "pn-cli", version, about = "PodNet podcast network admin client")]
pub struct Cli {
    /// Backend origin; the REST API lives under `<origin>/api`.
    #[arg(long, env = "PODNET_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,
    /// Where the bearer token and user are remembered between runs.
    #[arg(long, env = "PODNET_SESSION_FILE", default_value = DEFAULT_SESSION_FILE, global = true)]
    pub session_file: PathBuf,
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in with email and password.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Forget the stored token. The theme preference is kept.
    Logout,
    /// Show the signed-in user as reported by the API.
    Whoami,
    /// Manage hosts.
    Hosts {
        /// Host operation.
        #[command(subcommand)]
        command: HostCommands,
    },
    /// Manage shows.
    Shows {
        /// Show operation.
        #[command(subcommand)]
        command: ShowCommands,
    },
    /// Manage episodes.
    Episodes {
        /// Episode operation.
        #[command(subcommand)]
        command: EpisodeCommands,
    },
    /// Manage advertisers.
    Advertisers {
        /// Advertiser operation.
        #[command(subcommand)]
        command: AdvertiserCommands,
    },
    /// Print the popular lists ranked by the API.
    Popular {
        /// Only this collection (default: all four).
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Print overview counters and the limited popular sections.
    Overview,
    /// Upload a host portrait and print the stored URL.
    UploadImage {
        /// Image file (at most 5 MB).
        file: PathBuf,
    },
    /// Delete every host, show, episode and advertiser of the account.
    ClearAll {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Load the default catalogue of hosts, shows and advertisers.
    InitDefaults {
        /// Seed even when the account already has data.
        #[arg(long)]
        force: bool,
    },
    /// Check whether a link is a playable YouTube reference (offline).
    CheckVideo {
        /// Link to inspect.
        url: String,
    },
    /// Print the avatar initials derived from a name (offline).
    Initials {
        /// Display name.
        name: String,
    },
}

/// Collection selector for `popular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Hosts.
    Hosts,
    /// Shows.
    Shows,
    /// Episodes.
    Episodes,
    /// Advertisers.
    Advertisers,
}

impl From<KindArg> for EntityKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Hosts => EntityKind::Hosts,
            KindArg::Shows => EntityKind::Shows,
            KindArg::Episodes => EntityKind::Episodes,
            KindArg::Advertisers => EntityKind::Advertisers,
        }
    }
}

/// Host operations.
#[derive(Debug, Subcommand)]
pub enum HostCommands {
    /// List all hosts.
    List,
    /// Show one host.
    Get {
        /// Host id.
        id: String,
    },
    /// Create a host.
    Create {
        /// Field values.
        #[command(flatten)]
        fields: HostFields,
    },
    /// Change fields of a host; omitted flags keep their value.
    Update {
        /// Host id.
        id: String,
        /// Field values.
        #[command(flatten)]
        fields: HostFields,
    },
    /// Delete a host.
    Delete {
        /// Host id.
        id: String,
    },
}

/// Host field flags.
#[derive(Debug, Clone, Default, Args)]
pub struct HostFields {
    /// Display name.
    #[arg(long)]
    pub name: Option<String>,
    /// Biography.
    #[arg(long)]
    pub bio: Option<String>,
    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,
    /// Portrait URL.
    #[arg(long, conflicts_with = "image_file")]
    pub image_url: Option<String>,
    /// Portrait file to upload; its stored URL replaces `--image-url`.
    #[arg(long)]
    pub image_file: Option<PathBuf>,
}

/// Show operations.
#[derive(Debug, Subcommand)]
pub enum ShowCommands {
    /// List all shows.
    List,
    /// Show one show.
    Get {
        /// Show id.
        id: String,
    },
    /// Create a show.
    Create {
        /// Field values.
        #[command(flatten)]
        fields: ShowFields,
    },
    /// Change fields of a show; omitted flags keep their value.
    Update {
        /// Show id.
        id: String,
        /// Field values.
        #[command(flatten)]
        fields: ShowFields,
    },
    /// Delete a show.
    Delete {
        /// Show id.
        id: String,
    },
}

/// Show field flags.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowFields {
    /// Show title.
    #[arg(long)]
    pub title: Option<String>,
    /// Description.
    #[arg(long)]
    pub description: Option<String>,
    /// Presenting host id.
    #[arg(long)]
    pub host_id: Option<String>,
    /// Category.
    #[arg(long)]
    pub category: Option<String>,
    /// Cover art URL.
    #[arg(long)]
    pub cover_image_url: Option<String>,
    /// Status: active, paused or completed.
    #[arg(long)]
    pub status: Option<String>,
}

/// Episode operations.
#[derive(Debug, Subcommand)]
pub enum EpisodeCommands {
    /// List episodes.
    List {
        /// Only episodes of this show.
        #[arg(long)]
        show_id: Option<String>,
    },
    /// Show one episode.
    Get {
        /// Episode id.
        id: String,
    },
    /// Create an episode.
    Create {
        /// Field values.
        #[command(flatten)]
        fields: EpisodeFields,
    },
    /// Change fields of an episode; omitted flags keep their value.
    Update {
        /// Episode id.
        id: String,
        /// Field values.
        #[command(flatten)]
        fields: EpisodeFields,
    },
    /// Delete an episode.
    Delete {
        /// Episode id.
        id: String,
    },
}

/// Episode field flags. Numbers are taken as typed and coerced the way the
/// dashboard does.
#[derive(Debug, Clone, Default, Args)]
pub struct EpisodeFields {
    /// Parent show id.
    #[arg(long)]
    pub show_id: Option<String>,
    /// Episode title.
    #[arg(long)]
    pub title: Option<String>,
    /// Description.
    #[arg(long)]
    pub description: Option<String>,
    /// Episode number.
    #[arg(long, allow_hyphen_values = true)]
    pub episode_number: Option<String>,
    /// Duration in minutes.
    #[arg(long, allow_hyphen_values = true)]
    pub duration_minutes: Option<String>,
    /// Audio URL.
    #[arg(long)]
    pub audio_url: Option<String>,
    /// YouTube link.
    #[arg(long)]
    pub video_url: Option<String>,
    /// Thumbnail URL.
    #[arg(long)]
    pub thumbnail_url: Option<String>,
    /// Status: draft, published or archived.
    #[arg(long)]
    pub status: Option<String>,
}

/// Advertiser operations.
#[derive(Debug, Subcommand)]
pub enum AdvertiserCommands {
    /// List all advertisers.
    List,
    /// Show one advertiser.
    Get {
        /// Advertiser id.
        id: String,
    },
    /// Create an advertiser.
    Create {
        /// Field values.
        #[command(flatten)]
        fields: AdvertiserFields,
    },
    /// Change fields of an advertiser; omitted flags keep their value.
    Update {
        /// Advertiser id.
        id: String,
        /// Field values.
        #[command(flatten)]
        fields: AdvertiserFields,
    },
    /// Delete an advertiser.
    Delete {
        /// Advertiser id.
        id: String,
    },
}

/// Advertiser field flags.
#[derive(Debug, Clone, Default, Args)]
pub struct AdvertiserFields {
    /// Company name.
    #[arg(long)]
    pub company_name: Option<String>,
    /// Contact person.
    #[arg(long)]
    pub contact_person: Option<String>,
    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,
    /// Contact phone.
    #[arg(long)]
    pub phone: Option<String>,
    /// Budget.
    #[arg(long, allow_hyphen_values = true)]
    pub budget: Option<String>,
    /// Status: active, inactive or pending.
    #[arg(long)]
    pub status: Option<String>,
}
