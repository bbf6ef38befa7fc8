use serde::Deserialize;

#[derive(Deserialize)]
pub struct BookingRequest {
    pub class_id: i64,
    pub client_name: String,
    pub client_email: String,
}
