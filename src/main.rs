use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use eventcast::planner::{EventWeatherPlanner, NearbyCityTable};
use eventcast::{EventcastConfig, OpenMeteoForecastProvider, OpenMeteoGeocoder, web};

fn init_logging(config: &EventcastConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = EventcastConfig::load().with_context(|| "Failed to load configuration")?;
    init_logging(&config);

    let geocoder = OpenMeteoGeocoder::new(&config.weather)
        .with_context(|| "Failed to create geocoding client")?;
    let forecast = OpenMeteoForecastProvider::new(&config.weather)
        .with_context(|| "Failed to create forecast client")?;

    let planner = Arc::new(EventWeatherPlanner::new(
        Arc::new(geocoder),
        Arc::new(forecast),
        config.search.clone(),
        NearbyCityTable::well_known(),
    ));

    web::run(planner, config.server.port).await
}
