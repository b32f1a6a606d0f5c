use clap::{Parser, Subcommand};

use almanac_core::{Engine, EngineConfig, SolarModelKind};
use almanac_time::UtcTime;

#[derive(Parser)]
#[command(name = "almanac", about = "Almanac astronomical computation CLI")]
struct Cli {
    /// Use the low-precision solar model
    #[arg(long)]
    approximate: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise, sunset, and twilight boundaries for a date and location
    Sun {
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Civil UTC offset in hours (east positive)
        #[arg(long, default_value = "0")]
        offset: f64,
    },
    /// Equinox and solstice instants for a year
    Seasons {
        /// Calendar year
        year: i32,
    },
    /// Named lunar phases around a month
    Phases {
        /// Calendar year
        year: i32,
        /// Calendar month (1-12)
        month: u32,
    },
    /// Lunar phase window at a UTC instant
    PhaseAt {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Daylight percentile of a date within its year
    Percentile {
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Civil UTC offset in hours (east positive)
        #[arg(long, default_value = "0")]
        offset: f64,
    },
}

fn parse_date(s: &str) -> (i32, u32, u32) {
    let parts: Vec<&str> = s.split('-').collect();
    let parsed = (|| {
        if parts.len() != 3 {
            return None;
        }
        Some((
            parts[0].parse().ok()?,
            parts[1].parse().ok()?,
            parts[2].parse().ok()?,
        ))
    })();
    parsed.unwrap_or_else(|| {
        eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
        std::process::exit(1);
    })
}

fn parse_utc(s: &str) -> UtcTime {
    let trimmed = s.trim_end_matches('Z');
    let parsed = (|| {
        let (date, time) = trimmed.split_once('T')?;
        let (y, m, d) = {
            let parts: Vec<&str> = date.split('-').collect();
            if parts.len() != 3 {
                return None;
            }
            (
                parts[0].parse().ok()?,
                parts[1].parse().ok()?,
                parts[2].parse().ok()?,
            )
        };
        let parts: Vec<&str> = time.split(':').collect();
        if parts.len() != 3 {
            return None;
        }
        Some(UtcTime::new(
            y,
            m,
            d,
            parts[0].parse().ok()?,
            parts[1].parse().ok()?,
            parts[2].parse().ok()?,
        ))
    })();
    parsed.unwrap_or_else(|| {
        eprintln!("Invalid datetime: {s} (expected YYYY-MM-DDThh:mm:ssZ)");
        std::process::exit(1);
    })
}

/// Render a civil-day fraction as local hh:mm:ss.
fn frac_to_hms(frac: f64) -> String {
    let total_seconds = (frac * 86_400.0).round() as i64;
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

fn main() {
    let cli = Cli::parse();

    let config = EngineConfig {
        solar_model: if cli.approximate {
            SolarModelKind::Approximate
        } else {
            SolarModelKind::Auto
        },
        ..Default::default()
    };
    let mut engine = Engine::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to build engine: {e}");
        std::process::exit(1);
    });

    match cli.command {
        Commands::Sun {
            date,
            lat,
            lon,
            offset,
        } => {
            let (year, month, day) = parse_date(&date);
            let p = engine.sun_times(year, month, day, lat, lon, offset);
            if p.is_polar_day() {
                println!("Polar day: the sun does not set (daylength 24h00m)");
            } else if p.is_polar_night() {
                println!("Polar night: the sun does not rise (daylength 0h00m)");
            } else {
                println!("Astronomical dawn  {}", frac_to_hms(p.astro_begin_frac));
                println!("Nautical dawn      {}", frac_to_hms(p.nautical_begin_frac));
                println!("Civil dawn         {}", frac_to_hms(p.civil_begin_frac));
                println!("Sunrise            {}", frac_to_hms(p.sunrise_frac));
                println!("Solar noon         {}", frac_to_hms(p.solar_noon_frac));
                println!("Sunset             {}", frac_to_hms(p.sunset_frac));
                println!("Civil dusk         {}", frac_to_hms(p.civil_end_frac));
                println!("Nautical dusk      {}", frac_to_hms(p.nautical_end_frac));
                println!("Astronomical dusk  {}", frac_to_hms(p.astro_end_frac));
                let minutes = (p.daylength_h * 60.0).round() as i64;
                println!(
                    "Daylength          {}h{:02}m",
                    minutes / 60,
                    minutes % 60
                );
            }
            println!(
                "Declination {:.4} deg, equation of time {:+.2} min",
                p.declination_deg, p.equation_of_time_min
            );
        }

        Commands::Seasons { year } => {
            let set = engine.equinoxes_solstices(year);
            println!("March equinox      {}", UtcTime::from_unix(set.march_equinox));
            println!("June solstice      {}", UtcTime::from_unix(set.june_solstice));
            println!(
                "September equinox  {}",
                UtcTime::from_unix(set.september_equinox)
            );
            println!(
                "December solstice  {}",
                UtcTime::from_unix(set.december_solstice)
            );
        }

        Commands::Phases { year, month } => {
            for event in engine.phases_for_month(year, month) {
                println!(
                    "{:14}  {}  (lunation {:.2})",
                    event.kind.to_string(),
                    UtcTime::from_unix(event.unix),
                    event.lunation
                );
            }
        }

        Commands::PhaseAt { date } => {
            let unix = parse_utc(&date).to_unix();
            let window = engine.phase_at(unix);
            println!("Phase         {}", window.label);
            println!("Illumination  {:.1}%", window.illumination_pct);
            println!(
                "Previous      {} at {}",
                window.prev.kind,
                UtcTime::from_unix(window.prev.unix)
            );
            println!(
                "Next          {} at {}",
                window.next.kind,
                UtcTime::from_unix(window.next.unix)
            );
        }

        Commands::Percentile {
            date,
            lat,
            lon,
            offset,
        } => {
            let (year, month, day) = parse_date(&date);
            let profile = engine.sun_times(year, month, day, lat, lon, offset);
            let p = engine.percentile(profile.daylength_h, lat, lon, year, offset);
            println!(
                "{date}: daylength {:.3} h, percentile {p:.1} within {year}",
                profile.daylength_h
            );
        }
    }
}
