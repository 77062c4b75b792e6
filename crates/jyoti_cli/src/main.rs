use std::fmt::Display;

use chrono::{DateTime, FixedOffset, Utc};
use clap::{Args, Parser, Subcommand};
use jyoti_ephem::{Body, Ephemeris, EphemerisConfig, LuminaryTheory, NodeMode};
use jyoti_frames::AyanamshaSystem;
use jyoti_search::{
    BoundaryEvent, ElementKind, PanchangConfig, TransitConfig, daily_panchang, element_spans,
    find_element_boundary,
};
use jyoti_time::{CivilDateTime, Instant, Ut, delta_t_seconds, gmst_deg};
use jyoti_vedic_base::{
    GeoLocation, RiseSetConfig, RiseSetResult, kundali, moonrise_moonset,
    nakshatra_from_longitude, rashi_from_longitude, sunrise_sunset, vaar_from_jd,
};

#[derive(Parser)]
#[command(name = "jyoti", about = "Jyoti panchanga CLI")]
struct Cli {
    /// Log verbosity: -v debug, -vv trace (RUST_LOG also honoured)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Sun/Moon model: surya-siddhanta or classical
    #[arg(long, global = true, default_value = "surya-siddhanta")]
    theory: String,
    /// Ayanamsha system: lahiri, kp, raman, fagan-bradley, yukteshwar, surya-siddhanta,
    /// fixed-reference
    #[arg(long, global = true, default_value = "lahiri")]
    ayanamsha: String,
    /// Lunar node model: mean or true
    #[arg(long, global = true, default_value = "true")]
    nodes: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct LocationArgs {
    /// Latitude in degrees, north positive
    #[arg(long, default_value = "27.7", allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, default_value = "85.3", allow_hyphen_values = true)]
    lon: f64,
    /// UTC offset of local time in hours
    #[arg(long, default_value = "5.75", allow_hyphen_values = true)]
    tz: f64,
}

impl LocationArgs {
    fn location(&self) -> GeoLocation {
        let loc = GeoLocation::new(self.lat, self.lon, self.tz);
        loc.validate().unwrap_or_else(|e| fail(e));
        loc
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a civil date-time to Julian Day, Ahargana and sidereal time
    Convert {
        /// Local date-time (YYYY-MM-DD[THH:MM[:SS]] or RFC 3339); now if omitted
        #[arg(long)]
        date: Option<String>,
        /// UTC offset in hours for a date without one
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        tz: f64,
    },
    /// Ecliptic longitude, speed and sign of a graha
    Longitude {
        /// Graha: sun, moon, mars, mercury, jupiter, venus, saturn, rahu, ketu
        body: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        tz: f64,
        /// Report sidereal rather than tropical longitude
        #[arg(long)]
        sidereal: bool,
    },
    /// The tithi, karana, nakshatra, pada or yoga in force, with its edges
    Boundary {
        /// Element: tithi, karana, nakshatra, pada, yoga
        element: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value = "5.75", allow_hyphen_values = true)]
        tz: f64,
    },
    /// Consecutive spans of an element over a number of days
    Spans {
        element: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value = "5.75", allow_hyphen_values = true)]
        tz: f64,
        /// Days to scan forward
        #[arg(long, default_value = "7")]
        days: f64,
    },
    /// Sunrise and sunset
    Sun {
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Moonrise and moonset
    Moon {
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Sunrise-anchored daily panchang
    Panchang {
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Sidereal chart: lagna and the nine grahas
    Kundali {
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
    },
}

fn fail(err: impl Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn build_ephemeris(cli: &Cli) -> Ephemeris {
    let luminaries = LuminaryTheory::from_name(&cli.theory)
        .unwrap_or_else(|| fail(format!("unknown theory '{}'", cli.theory)));
    let ayanamsha = AyanamshaSystem::from_name(&cli.ayanamsha)
        .unwrap_or_else(|| fail(format!("unknown ayanamsha '{}'", cli.ayanamsha)));
    let node_mode = NodeMode::from_name(&cli.nodes)
        .unwrap_or_else(|| fail(format!("unknown node mode '{}' (mean or true)", cli.nodes)));
    Ephemeris::new(EphemerisConfig {
        luminaries,
        ayanamsha,
        node_mode,
        ..EphemerisConfig::default()
    })
    .unwrap_or_else(|e| fail(e))
}

/// Parse a date argument. RFC 3339 text keeps its own offset; anything else
/// is read as local time at `utc_offset_hours`. `None` means now.
fn parse_date(text: Option<&str>, utc_offset_hours: f64) -> Result<CivilDateTime, String> {
    let Some(text) = text else {
        let offset_s = (utc_offset_hours * 3600.0).round() as i32;
        let offset = FixedOffset::east_opt(offset_s)
            .ok_or_else(|| format!("invalid UTC offset {utc_offset_hours}"))?;
        let now: DateTime<FixedOffset> = Utc::now().with_timezone(&offset);
        return CivilDateTime::from_datetime(&now).map_err(|e| e.to_string());
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return CivilDateTime::from_datetime(&dt).map_err(|e| e.to_string());
    }
    CivilDateTime::parse(text, utc_offset_hours).map_err(|e| e.to_string())
}

fn require_date(text: Option<&str>, utc_offset_hours: f64) -> CivilDateTime {
    parse_date(text, utc_offset_hours).unwrap_or_else(|e| fail(e))
}

fn parse_body(name: &str) -> Body {
    Body::from_name(name).unwrap_or_else(|| {
        eprintln!("Invalid graha name: {name}");
        eprintln!("Valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu");
        std::process::exit(1);
    })
}

fn parse_element(name: &str) -> ElementKind {
    ElementKind::from_name(name).unwrap_or_else(|| {
        eprintln!("Invalid element: {name}");
        eprintln!("Valid: tithi, karana, nakshatra, pada, yoga");
        std::process::exit(1);
    })
}

fn format_event(r: &RiseSetResult, location: &GeoLocation) -> String {
    match r {
        RiseSetResult::Event { .. } => r
            .civil(location)
            .map_or_else(String::new, |c| c.to_string()),
        RiseSetResult::NeverRises => "never rises".to_string(),
        RiseSetResult::NeverSets => "never sets".to_string(),
        RiseSetResult::NoEventOnDay => "none on this date".to_string(),
    }
}

fn format_edge(edge: Option<CivilDateTime>) -> String {
    edge.map_or_else(|| "not found".to_string(), |c| c.to_string())
}

fn print_boundary(b: &BoundaryEvent, utc_offset_hours: f64) {
    let civil = b.to_civil(utc_offset_hours);
    let unconverged = [b.start, b.end]
        .iter()
        .flatten()
        .any(|c| !c.converged);
    println!(
        "  {:<24} {:>3}  {}  ->  {}{}",
        b.label(),
        b.index + 1,
        format_edge(civil.start),
        format_edge(civil.end),
        if unconverged { "  (approx.)" } else { "" }
    );
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ephem = build_ephemeris(&cli);

    match cli.command {
        Commands::Convert { date, tz } => {
            let civil = require_date(date.as_deref(), tz);
            let ut = Instant::<Ut>::from_civil(&civil);
            let tt = ut.to_tt();
            println!("Civil:     {civil}");
            println!("JD (UT):   {:.6}", ut.jd());
            println!("JD (TT):   {:.6}", tt.jd());
            println!("Delta T:   {:.2} s", delta_t_seconds(ut.jd()));
            println!("Ahargana:  {:.6}", tt.ahargana());
            println!("GMST:      {:.6} deg", gmst_deg(ut.jd()));
            println!(
                "Vaar:      {}",
                vaar_from_jd(ut.jd(), civil.utc_offset_hours).name()
            );
        }

        Commands::Longitude {
            body,
            date,
            tz,
            sidereal,
        } => {
            let body = parse_body(&body);
            let civil = require_date(date.as_deref(), tz);
            let t = Instant::<Ut>::from_civil(&civil).to_tt();
            let pos = if sidereal {
                ephem.sidereal_position(body, t)
            } else {
                ephem.body_longitude(body, t)
            };
            println!(
                "{} ({}) at {civil}, {}:",
                body.name(),
                body.graha_name(),
                if sidereal { "sidereal" } else { "tropical" }
            );
            println!("  Longitude: {:.6} deg", pos.longitude);
            println!("  Latitude:  {:.6} deg", pos.latitude);
            println!(
                "  Speed:     {:.6} deg/day{}",
                pos.speed,
                if pos.retrograde { " (retrograde)" } else { "" }
            );
            if sidereal {
                let rashi = rashi_from_longitude(pos.longitude);
                let nak = nakshatra_from_longitude(pos.longitude);
                println!("  Rashi:     {} {}", rashi.rashi.name(), rashi.dms);
                println!("  Nakshatra: {} pada {}", nak.nakshatra.name(), nak.pada);
            }
        }

        Commands::Boundary { element, date, tz } => {
            let kind = parse_element(&element);
            let civil = require_date(date.as_deref(), tz);
            let t = Instant::<Ut>::from_civil(&civil).to_tt();
            let b = find_element_boundary(&ephem, kind, t);
            println!("{} at {civil}:", kind.name());
            print_boundary(&b, civil.utc_offset_hours);
        }

        Commands::Spans {
            element,
            date,
            tz,
            days,
        } => {
            let kind = parse_element(&element);
            let civil = require_date(date.as_deref(), tz);
            let from = Instant::<Ut>::from_civil(&civil).to_tt();
            let spans = element_spans(&ephem, kind, from, from + days, &TransitConfig::default())
                .unwrap_or_else(|e| fail(e));
            println!("{} spans from {civil} over {days} days:", kind.name());
            for b in &spans {
                print_boundary(b, civil.utc_offset_hours);
            }
        }

        Commands::Sun { date, location } => {
            let loc = location.location();
            let civil = require_date(date.as_deref(), loc.utc_offset_hours);
            let pair = sunrise_sunset(&civil, &loc, &RiseSetConfig::default());
            println!(
                "Sun on {:04}-{:02}-{:02} at {:.4}N, {:.4}E:",
                civil.year, civil.month, civil.day, loc.latitude_deg, loc.longitude_deg
            );
            println!("  Sunrise: {}", format_event(&pair.rise, &loc));
            println!("  Sunset:  {}", format_event(&pair.set, &loc));
        }

        Commands::Moon { date, location } => {
            let loc = location.location();
            let civil = require_date(date.as_deref(), loc.utc_offset_hours);
            let pair = moonrise_moonset(&civil, &loc, &RiseSetConfig::default(), &ephem);
            println!(
                "Moon on {:04}-{:02}-{:02} at {:.4}N, {:.4}E:",
                civil.year, civil.month, civil.day, loc.latitude_deg, loc.longitude_deg
            );
            println!("  Moonrise: {}", format_event(&pair.rise, &loc));
            println!("  Moonset:  {}", format_event(&pair.set, &loc));
        }

        Commands::Panchang { date, location } => {
            let loc = location.location();
            let civil = require_date(date.as_deref(), loc.utc_offset_hours);
            let p = daily_panchang(&ephem, &civil, &loc, &PanchangConfig::default())
                .unwrap_or_else(|e| fail(e));
            println!(
                "Panchang for {:04}-{:02}-{:02} at {:.4}N, {:.4}E\n",
                p.date.year, p.date.month, p.date.day, loc.latitude_deg, loc.longitude_deg
            );
            println!("  Vaar:     {}", p.vaar.name());
            println!("  Sunrise:  {}", p.date);
            println!("  Sunset:   {}", format_event(&p.sunset, &loc));
            println!("  Moonrise: {}", format_event(&p.moonrise, &loc));
            println!("  Moonset:  {}", format_event(&p.moonset, &loc));
            println!("  Paksha:   {}", p.paksha.name());
            println!("  Transition: {:?}\n", p.tithi_transition);
            for e in &p.elements {
                println!("{}:", e.kind.name());
                print_boundary(&e.boundary, loc.utc_offset_hours);
            }
        }

        Commands::Kundali { date, location } => {
            let loc = location.location();
            let civil = require_date(date.as_deref(), loc.utc_offset_hours);
            let k = kundali(&ephem, Instant::<Ut>::from_civil(&civil), &loc)
                .unwrap_or_else(|e| fail(e));
            println!(
                "Kundali for {civil} at {:.4}N, {:.4}E\n",
                loc.latitude_deg, loc.longitude_deg
            );
            println!(
                "  Lagna: {} {} ({} pada {}, navamsa {})\n",
                k.lagna.rashi.name(),
                k.lagna.dms,
                k.lagna_nakshatra.nakshatra.name(),
                k.lagna_nakshatra.pada,
                k.lagna_navamsa.name()
            );
            println!(
                "  {:<10} {:>10} {:<12} {:<18} {:>5} {:<12}",
                "Graha", "Longitude", "Rashi", "Nakshatra", "House", "Navamsa"
            );
            for g in &k.grahas {
                println!(
                    "  {:<10} {:>10.4} {:<12} {:<18} {:>5} {:<12}{}",
                    g.body.graha_name(),
                    g.longitude,
                    g.rashi.rashi.name(),
                    format!("{} {}", g.nakshatra.nakshatra.name(), g.nakshatra.pada),
                    g.house,
                    g.navamsa.name(),
                    if g.retrograde { " R" } else { "" }
                );
            }
        }
    }
}
