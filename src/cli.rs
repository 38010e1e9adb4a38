use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "picklist", version, about = "Gallery of stateless picker widgets")]
pub struct Args {
    /// Theme name (e.g., "Catppuccin Latte"), overrides the config file
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Print the built-in theme names and exit
    #[arg(long)]
    pub list_themes: bool,
}
