use chrono_tz::Tz;
use tracing::warn;

/// Parses the configured default zone, falling back to UTC when the
/// config value is not a known IANA name.
pub fn parse_default(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            warn!("Configured timezone '{}' is not a valid IANA zone, using UTC", name);
            chrono_tz::UTC
        }
    }
}

/// Resolves the zone a caller asked for. A missing or unrecognised
/// value falls back to the configured default rather than failing the
/// request.
pub fn resolve(requested: Option<&str>, default_zone: Tz) -> Tz {
    match requested {
        None => default_zone,
        Some(name) => match name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!("Unknown timezone '{}' requested, using {}", name, default_zone);
                default_zone
            }
        },
    }
}
