//! Terminal client: queries the proxy and prints the grouped day cards

use anyhow::{Result, bail};
use weathercast::presenter::{ForecastPresenter, HttpForecastSource, QueryState};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(city) = args.next() else {
        bail!("Usage: forecast <city> [server-url]");
    };
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:5000".to_string());

    let presenter = ForecastPresenter::new(HttpForecastSource::new(base_url));
    presenter.submit_query(&city).await;

    match presenter.state() {
        QueryState::Data(view) => {
            println!("{}", view.heading());
            for card in &view.cards {
                println!(
                    "{} ({}): {} {}°C / {}°C",
                    card.day, card.date_label, card.condition, card.temp_max, card.temp_min
                );
                println!(
                    "   feels like {}°C, humidity {}%, wind {} km/h",
                    card.feels_like, card.humidity, card.wind_kmh
                );
                for hour in &card.hourly {
                    println!("   {} {}°C", hour.hour_label, hour.temp);
                }
            }
            Ok(())
        }
        QueryState::Error(message) => bail!(message),
        QueryState::Idle | QueryState::Loading => bail!("No query was issued"),
    }
}
