use almadial::{annual, eclipses_visible_from, lunar, moon_names, solar, GeoLocation, MoonState};
use chrono::{Datelike, Utc};
use qtty::Degrees;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let location = GeoLocation::new(Degrees::new(45.0), Degrees::new(-93.0))
        .expect("coordinates in range")
        .named("Minneapolis");

    let now = Utc::now();
    let today = now.date_naive();

    println!("Observer: {}", location.name().unwrap_or("unnamed"));
    println!("Solar disc: {}", solar::ring_rotation_angle(now, &location));
    println!("Annual disc: {}", annual::ring_rotation_angle(today));

    let sign = annual::zodiac_sign_for(today.month(), today.day()).expect("today is a real date");
    println!("Zodiac sign: {} ({})", sign.name, sign.element.name());

    let moon = moon_names::moon_name_for_month(today.month()).expect("month in range");
    println!("This month's full moon: {}", moon.name);

    // Phase and illumination normally come from the astronomical service.
    let state = MoonState::new(0.5, 0.998).expect("fractions in range");
    println!(
        "Lunar disc at {} -> {} ({:.0}% illuminated)",
        lunar::ring_rotation_angle(state.phase()),
        lunar::classify_phase(state.phase()).name(),
        state.illuminated_fraction() * 100.0
    );

    for eclipse in eclipses_visible_from(today.year(), &location) {
        println!(
            "Eclipse: {} on {:02}-{:02}",
            eclipse.name, eclipse.month, eclipse.day
        );
    }
}
