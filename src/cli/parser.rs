use clap::{Parser, Subcommand};

/// Command-line interface definition for calevent
/// CLI calendar of tagged events, stored in SQLite
#[derive(Parser)]
#[command(
    name = "calevent",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small calendar CLI: tagged events, month views and generic CRUD routes over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create an event
    Add {
        /// Title of the event (up to 255 characters)
        title: String,

        #[arg(long = "begin", help = "Start (YYYY-MM-DD HH:MM, RFC 3339, or YYYY-MM-DD)")]
        begin: String,

        #[arg(long = "duration", help = "Duration in minutes")]
        duration: Option<i64>,

        #[arg(long = "text", help = "Description")]
        text: Option<String>,

        #[arg(long = "tags", help = "Tags separated by whitespace")]
        tags: Option<String>,
    },

    /// Update an event; fields not given keep their value
    Edit {
        id: i64,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "begin")]
        begin: Option<String>,

        #[arg(long = "duration", conflicts_with = "clear_duration")]
        duration: Option<i64>,

        #[arg(long = "clear-duration", help = "Remove the duration of the event")]
        clear_duration: bool,

        #[arg(long = "text")]
        text: Option<String>,

        #[arg(long = "tags", help = "Replace the tags (whitespace separated, \"\" removes all)")]
        tags: Option<String>,
    },

    /// Show one event
    Show { id: i64 },

    /// List events
    List {
        #[arg(long, short, help = "Filter by year, month or day (YYYY, YYYY-MM, YYYY-MM-DD)")]
        period: Option<String>,

        #[arg(long, short, help = "Only events carrying this tag")]
        tag: Option<String>,

        #[arg(long = "json", help = "Print the events as JSON")]
        json: bool,
    },

    /// Delete an event
    Del {
        id: i64,

        #[arg(long, short, help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Month view (defaults to the current month)
    Calendar {
        #[arg(value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// List tags with their number of events
    Tags,

    /// Build the URL of a generic operation (list, create, detail, update, delete)
    Url {
        operation: String,

        #[arg(long = "id", help = "Event id, for detail/update/delete")]
        id: Option<i64>,
    },

    /// Find the route serving a path
    Resolve { path: String },
}
