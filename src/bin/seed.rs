use chrono::{Duration, Utc};

use fitness_booking::config::Config;
use fitness_booking::domain::models::class::NewFitnessClass;
use fitness_booking::infra::factory::bootstrap_state;

fn sample_classes() -> Vec<NewFitnessClass> {
    let now = Utc::now();
    vec![
        NewFitnessClass {
            name: "Hatha Yoga".to_string(),
            instructor: "Priya Sharma".to_string(),
            start_time_utc: now + Duration::days(1) + Duration::hours(9),
            total_slots: 15,
            description: Some("Gentle yoga focusing on basic postures and breathing techniques".to_string()),
        },
        NewFitnessClass {
            name: "Power Yoga".to_string(),
            instructor: "Rahul Kumar".to_string(),
            start_time_utc: now + Duration::days(1) + Duration::hours(18),
            total_slots: 12,
            description: Some("Dynamic yoga flow for strength and flexibility".to_string()),
        },
        NewFitnessClass {
            name: "Zumba Dance Fitness".to_string(),
            instructor: "Maria Rodriguez".to_string(),
            start_time_utc: now + Duration::days(2) + Duration::hours(19),
            total_slots: 20,
            description: Some("High-energy dance workout with Latin music".to_string()),
        },
        NewFitnessClass {
            name: "HIIT Training".to_string(),
            instructor: "Alex Johnson".to_string(),
            start_time_utc: now + Duration::days(3) + Duration::hours(7),
            total_slots: 10,
            description: Some("High-intensity interval training for maximum calorie burn".to_string()),
        },
        NewFitnessClass {
            name: "Pilates Core".to_string(),
            instructor: "Sarah Thompson".to_string(),
            start_time_utc: now + Duration::days(3) + Duration::hours(17),
            total_slots: 12,
            description: Some("Core strengthening and flexibility with Pilates techniques".to_string()),
        },
        NewFitnessClass {
            name: "Vinyasa Flow".to_string(),
            instructor: "Amit Patel".to_string(),
            start_time_utc: now + Duration::days(4) + Duration::hours(8),
            total_slots: 14,
            description: Some("Flowing yoga sequences synchronized with breath".to_string()),
        },
        NewFitnessClass {
            name: "CrossFit WOD".to_string(),
            instructor: "Mike Wilson".to_string(),
            start_time_utc: now + Duration::days(5) + Duration::hours(18),
            total_slots: 8,
            description: Some("Workout of the Day - functional fitness training".to_string()),
        },
        NewFitnessClass {
            name: "Meditation & Mindfulness".to_string(),
            instructor: "Dr. Anjali Gupta".to_string(),
            start_time_utc: now + Duration::days(6) + Duration::hours(19),
            total_slots: 25,
            description: Some("Guided meditation and mindfulness practices".to_string()),
        },
    ]
}

#[tokio::main]
async fn main() {
    println!("Setting up database with sample data...");

    let config = Config::from_env();
    let state = bootstrap_state(&config).await;

    let existing = state
        .class_repo
        .count()
        .await
        .expect("Failed to count classes");
    if existing > 0 {
        println!(
            "Database already contains {} classes. Skipping sample data creation.",
            existing
        );
        return;
    }

    let classes = sample_classes();
    println!("\nCreated Classes:");
    println!("{}", "-".repeat(80));
    for class in &classes {
        let created = state
            .class_repo
            .insert(class)
            .await
            .expect("Failed to insert class");
        println!(
            "ID: {} | {} | {} | {} | Slots: {}/{}",
            created.id,
            created.name,
            created.instructor,
            created.start_time_utc,
            created.available_slots,
            created.total_slots
        );
    }

    println!("\nSuccessfully created {} sample fitness classes!", classes.len());
    println!("Database setup completed!");
}
