use crate::catalog::{CatalogStore, ProviderChain};
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::render::Painter;

const DEFAULT_WIDTH: usize = 80;
const MAX_WIDTH: usize = 100;

/// Everything a command needs: configuration plus the loaded catalog.
pub struct AppContext {
    pub config: Config,
    pub store: CatalogStore,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;
        apply_cli_overrides(&mut config, cli);

        let chain = ProviderChain::from_config(&config.source)?;
        let store = CatalogStore::load(&chain)?;

        let output_format = if config.output.robot {
            OutputFormat::Json
        } else {
            cli.output_format()
        };

        Ok(Self {
            config,
            store,
            output_format,
        })
    }

    pub fn painter(&self) -> Painter {
        Painter::new(self.config.output.color && self.output_format == OutputFormat::Human)
    }

    /// Wrap width for cards: configured, else terminal width, capped.
    pub fn width(&self) -> usize {
        self.config.output.wrap_width.unwrap_or_else(|| {
            crossterm::terminal::size()
                .map(|(w, _)| usize::from(w))
                .unwrap_or(DEFAULT_WIDTH)
                .min(MAX_WIDTH)
        })
    }
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.robot {
        config.output.robot = true;
    }
    if let Some(url) = &cli.source_url {
        config.source.base_url = Some(url.clone());
    }
    if let Some(path) = &cli.data_file {
        config.source.data_file = Some(path.clone());
    }
    if cli.offline {
        config.source.base_url = None;
        config.source.data_file = None;
        config.source.use_embedded = true;
    }
}
