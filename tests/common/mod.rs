use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use pilgrim_page::model::PilgrimProfile;
use pilgrim_page::storage::{LookupError, LookupGateway};

pub enum FakeResponse {
    Found(PilgrimProfile),
    Missing,
    Failing(String),
}

/// In-memory stand-in for the Supabase gateway, counting lookups so tests
/// can assert the pre-flight path never queries.
pub struct FakeLookup {
    pub response: FakeResponse,
    pub calls: AtomicUsize,
}

impl FakeLookup {
    pub fn new(response: FakeResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupGateway for FakeLookup {
    async fn fetch_profile(&self, _pilgrim_id: &str) -> Result<PilgrimProfile, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            FakeResponse::Found(profile) => Ok(profile.clone()),
            FakeResponse::Missing => Err(LookupError::NotFound),
            FakeResponse::Failing(message) => Err(LookupError::Transport(message.clone())),
        }
    }
}

/// A fully populated record, the shape the joined RPC row comes back in.
pub fn sample_profile() -> PilgrimProfile {
    PilgrimProfile {
        id: "PLG-1001".to_string(),
        full_name_arabic: Some("أحمد محمد العلي".to_string()),
        full_name_english: Some("Ahmed Mohammed Alali".to_string()),
        health_status: Some("sick".to_string()),
        national_id: Some("123456789".to_string()),
        blood_type: Some("O+".to_string()),
        group_number: Some("12".to_string()),
        bus_number: Some("7".to_string()),
        camp_name: Some("مخيم منى 3".to_string()),
        camp_location_name: Some("منى - المنطقة الشرقية".to_string()),
        camp_lat: Some(21.4225),
        camp_lng: Some(39.8262),
        emergency_contact_name: Some("سالم العلي".to_string()),
        emergency_contact_phone: Some("+966500000001".to_string()),
        phone: Some("+966500000002".to_string()),
    }
}

/// Same identifier, every optional field absent.
pub fn minimal_profile() -> PilgrimProfile {
    PilgrimProfile {
        id: "PLG-1001".to_string(),
        full_name_arabic: None,
        full_name_english: None,
        health_status: None,
        national_id: None,
        blood_type: None,
        group_number: None,
        bus_number: None,
        camp_name: None,
        camp_location_name: None,
        camp_lat: None,
        camp_lng: None,
        emergency_contact_name: None,
        emergency_contact_phone: None,
        phone: None,
    }
}
