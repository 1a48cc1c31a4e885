use clap::Parser;
use contact_form::config::FormConfig;
use contact_form::error::Result;
use contact_form::logging;
use contact_form::runtime::Runtime;
use contact_form::terminal::{RenderMode, Terminal};
use contact_form::ui::renderer::Renderer;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "contact-form", about = "Fill in and submit a contact form in the terminal")]
struct Cli {
    /// YAML file with render settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Draw below the prompt instead of on the alternate screen.
    #[arg(long)]
    inline: bool,

    /// Print the last submitted values as JSON on exit.
    #[arg(long)]
    json: bool,

    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Filter directive, e.g. `debug` or `contact_form=trace`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.log_level.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };
    if cli.inline {
        config.render_mode = RenderMode::Inline;
    }

    let terminal = Terminal::new()?.with_mode(config.render_mode);
    let mut runtime = Runtime::new(config.build_form(), terminal)
        .with_renderer(Renderer::new(config.theme()));
    runtime.run()?;

    if cli.json {
        let state = runtime.into_state();
        println!("{}", serde_json::to_string_pretty(&state.submitted())?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from(["contact-form", "--inline", "--json", "--log-level", "debug"]);
        assert!(cli.inline);
        assert!(cli.json);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.config.is_none());
    }
}
