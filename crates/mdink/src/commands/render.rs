//! `mdink render` command implementation.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use mdink_config::{CliSettings, Config};
use mdink_convert::{markdown_to_html, wrap_document};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to convert (`-` reads stdin).
    input: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdink.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in theme name (overrides config).
    #[arg(short, long)]
    theme: Option<String>,

    /// Custom theme TOML file (overrides config).
    #[arg(long, conflicts_with = "theme")]
    theme_file: Option<PathBuf>,

    /// Primary color, e.g. "#0F4C81".
    #[arg(long)]
    primary_color: Option<String>,

    /// Base font size in px, e.g. "15px".
    #[arg(long)]
    font_size: Option<String>,

    /// Font family applied to the whole article.
    #[arg(long)]
    font_family: Option<String>,

    /// Code highlighting theme name or stylesheet URL.
    #[arg(long)]
    code_theme: Option<String>,

    /// Turn external links into numbered citations.
    #[arg(long)]
    cite: bool,

    /// Prepend a word count and reading time banner.
    #[arg(long)]
    count: bool,

    /// Decorate code blocks with window buttons.
    #[arg(long)]
    mac: bool,

    /// Indent the first line of paragraphs.
    #[arg(long)]
    indent: bool,

    /// Image caption source, e.g. "alt", "title-alt", "none".
    #[arg(long)]
    legend: Option<String>,

    /// Emit a standalone HTML page.
    #[arg(long)]
    document: bool,

    /// Write the headings as JSON to this file.
    #[arg(long)]
    toc: Option<PathBuf>,

    /// Enable verbose output (conversion logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, reading the input, conversion or
    /// writing the output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        let options = config.render_options()?;

        let markdown = self.read_input()?;
        let result = markdown_to_html(&markdown, &options)?;
        let html = if config.output.document {
            wrap_document(&result)
        } else {
            result.html.clone()
        };

        if let Some(toc) = &self.toc {
            let json = serde_json::to_string_pretty(&result.headings)?;
            std::fs::write(toc, json)?;
            output.toc_written(toc, result.headings.len());
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.rendered(path, &result);
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            theme_name: self.theme.clone(),
            theme_file: self.theme_file.clone(),
            primary_color: self.primary_color.clone(),
            font_size: self.font_size.clone(),
            font_family: self.font_family.clone(),
            code_theme: self.code_theme.clone(),
            legend: self.legend.clone(),
            cite: self.cite.then_some(true),
            count_words: self.count.then_some(true),
            mac_code_block: self.mac.then_some(true),
            use_indent: self.indent.then_some(true),
            document: self.document.then_some(true),
        }
    }

    fn read_input(&self) -> Result<String, CliError> {
        if self.input.as_os_str() == "-" {
            let mut markdown = String::new();
            std::io::stdin().read_to_string(&mut markdown)?;
            return Ok(markdown);
        }
        Ok(std::fs::read_to_string(&self.input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: RenderArgs,
    }

    fn parse(args: &[&str]) -> RenderArgs {
        TestCli::try_parse_from(std::iter::once("mdink").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_unset_flags_leave_config_alone() {
        let settings = parse(&["post.md"]).cli_settings();
        assert_eq!(settings.theme_name, None);
        assert_eq!(settings.cite, None);
        assert_eq!(settings.count_words, None);
        assert_eq!(settings.document, None);
    }

    #[test]
    fn test_flags_map_to_settings() {
        let settings = parse(&[
            "post.md",
            "--theme",
            "grace",
            "--font-size",
            "15px",
            "--cite",
            "--count",
            "--mac",
            "--legend",
            "title-alt",
        ])
        .cli_settings();
        assert_eq!(settings.theme_name.as_deref(), Some("grace"));
        assert_eq!(settings.font_size.as_deref(), Some("15px"));
        assert_eq!(settings.cite, Some(true));
        assert_eq!(settings.count_words, Some(true));
        assert_eq!(settings.mac_code_block, Some(true));
        assert_eq!(settings.use_indent, None);
        assert_eq!(settings.legend.as_deref(), Some("title-alt"));
    }

    #[test]
    fn test_theme_conflicts_with_theme_file() {
        let result = TestCli::try_parse_from([
            "mdink",
            "post.md",
            "--theme",
            "grace",
            "--theme-file",
            "brand.toml",
        ]);
        assert!(result.is_err());
    }
}
