#[tokio::main]
async fn main() {
    fitness_booking::run().await;
}
