use crate::{
    config::RouletteConfig,
    engine::RouletteEngine,
    model::{
        network::{network_ops, StationId},
        RouletteError,
    },
};
use clap::Subcommand;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Debug, Clone, Subcommand)]
pub enum RouletteOperation {
    /// print the shortest travel time and hop count from a station to every other station
    Distances {
        /// CSV edge list with header from,to,minutes
        #[arg(long)]
        edges_file: String,
        #[arg(long)]
        source: String,
    },
    /// print the number of stations between two stations along the fastest path
    Remaining {
        #[arg(long)]
        edges_file: String,
        #[arg(long)]
        source: String,
        #[arg(long)]
        destination: String,
    },
    /// draw a weighted destination for a team
    Spin {
        #[arg(long)]
        edges_file: String,
        /// current station of the team
        #[arg(long)]
        start: String,
        /// comma-delimited list of stations currently occupied by teams
        #[arg(long, default_value_t = String::new())]
        occupied: String,
        /// .toml or .json file with roulette rules
        #[arg(long)]
        configuration_file: Option<String>,
        /// overrides min_minutes from the configuration
        #[arg(long)]
        min_minutes: Option<f64>,
        /// seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// draw a destination uniformly among all stations but the start
    Uniform {
        /// stations are taken from the edge list when no station file is given
        #[arg(long)]
        edges_file: Option<String>,
        /// CSV station list with header station
        #[arg(long)]
        stations_file: Option<String>,
        #[arg(long)]
        start: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// repeat a weighted spin and print how often each destination was drawn
    Simulate {
        #[arg(long)]
        edges_file: String,
        #[arg(long)]
        start: String,
        #[arg(long, default_value_t = String::new())]
        occupied: String,
        #[arg(long)]
        configuration_file: Option<String>,
        #[arg(long)]
        min_minutes: Option<f64>,
        #[arg(long, default_value_t = 200)]
        runs: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl RouletteOperation {
    /// runs the operation, returning the text to print on stdout
    pub fn run(&self) -> Result<String, RouletteError> {
        match self {
            RouletteOperation::Distances { edges_file, source } => {
                let edges = network_ops::read_edges_csv(edges_file)?;
                let engine = RouletteEngine::default();
                let distances = engine.distances(&edges, &StationId::from(source.as_str()));
                Ok(serde_json::to_string_pretty(&distances)?)
            }
            RouletteOperation::Remaining {
                edges_file,
                source,
                destination,
            } => {
                let edges = network_ops::read_edges_csv(edges_file)?;
                let engine = RouletteEngine::default();
                let hops = engine.remaining_stations(
                    &edges,
                    &StationId::from(source.as_str()),
                    &StationId::from(destination.as_str()),
                )?;
                Ok(hops.to_string())
            }
            RouletteOperation::Spin {
                edges_file,
                start,
                occupied,
                configuration_file,
                min_minutes,
                seed,
            } => {
                let conf = read_config(configuration_file, *min_minutes)?;
                let edges = network_ops::read_edges_csv(edges_file)?;
                let engine = RouletteEngine::new(conf);
                let mut rng = build_rng(*seed);
                let selected = engine.spin(
                    &edges,
                    &StationId::from(start.as_str()),
                    &parse_station_list(occupied),
                    &mut rng,
                )?;
                Ok(selected.to_string())
            }
            RouletteOperation::Uniform {
                edges_file,
                stations_file,
                start,
                seed,
            } => {
                let stations = match (stations_file, edges_file) {
                    (Some(f), _) => network_ops::read_stations_csv(f)?,
                    (None, Some(f)) => {
                        network_ops::stations_from_edges(&network_ops::read_edges_csv(f)?)
                    }
                    (None, None) => {
                        return Err(RouletteError::ConfigurationError(String::from(
                            "uniform requires one of --stations-file or --edges-file",
                        )))
                    }
                };
                let engine = RouletteEngine::default();
                let mut rng = build_rng(*seed);
                let selected =
                    engine.spin_uniform(&stations, &StationId::from(start.as_str()), &mut rng)?;
                Ok(selected.to_string())
            }
            RouletteOperation::Simulate {
                edges_file,
                start,
                occupied,
                configuration_file,
                min_minutes,
                runs,
                seed,
            } => {
                let conf = read_config(configuration_file, *min_minutes)?;
                let edges = network_ops::read_edges_csv(edges_file)?;
                let engine = RouletteEngine::new(conf);
                let mut rng = build_rng(*seed);
                let histogram = engine.simulate(
                    &edges,
                    &StationId::from(start.as_str()),
                    &parse_station_list(occupied),
                    *runs,
                    &mut rng,
                )?;
                log::info!(
                    "{} spins from '{}' reached {} distinct stations",
                    runs,
                    start,
                    histogram.len()
                );
                Ok(serde_json::to_string_pretty(&histogram)?)
            }
        }
    }
}

fn read_config(
    configuration_file: &Option<String>,
    min_minutes: Option<f64>,
) -> Result<RouletteConfig, RouletteError> {
    let mut conf = match configuration_file {
        None => RouletteConfig::from_env()?,
        Some(f) => {
            log::info!("reading roulette configuration from {f}");
            RouletteConfig::try_from(f)?
        }
    };
    if let Some(m) = min_minutes {
        conf.min_minutes = m;
    }
    conf.validate()?;
    Ok(conf)
}

fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// splits a comma-delimited station list, ignoring blank entries
fn parse_station_list(s: &str) -> Vec<StationId> {
    s.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(StationId::from)
        .collect()
}
