use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and store the session user
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Show the stored current user
    Whoami,

    /// Show the home summary for the current user
    Home,

    /// Clear the stored session
    Logout,
}
