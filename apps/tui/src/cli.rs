use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "statradar", version, about = "Compare creature base stats on a radar chart")]
pub struct CliArgs {
    /// Subject to compare; pass 2 or 3 times to compare without the UI
    #[arg(long = "compare", value_name = "NAME")]
    pub compare: Vec<String>,

    /// Print results and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the comparison chart as an SVG file
    #[arg(long, value_name = "PATH")]
    pub svg: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override dataset path
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Stat value drawn on the outer ring
    #[arg(long = "max-stat", value_name = "VALUE")]
    pub max_stat: Option<f64>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("STATRADAR_DATA", data);
        }
        if let Some(max_stat) = self.max_stat {
            std::env::set_var("STATRADAR_MAX_STAT", max_stat.to_string());
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Whether the run produces output without starting the terminal UI.
    pub fn wants_headless(&self) -> bool {
        self.headless || self.json || self.svg.is_some() || !self.compare.is_empty()
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
