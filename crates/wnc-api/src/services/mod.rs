// Per-domain service façades.
//
// Each service holds a `Client` clone and maps semantically named calls
// onto a route and a response model. Models carry the
// `{yang-module}:{container}` wrapper key as their outer field; payload
// fields default when absent so partial controller output still decodes.

pub mod ap;
pub mod client;
pub mod general;
pub mod rogue;
pub mod rrm;
pub mod site;
pub mod spaces;
pub mod urwb;
pub mod wlan;

pub use ap::ApService;
pub use client::ClientService;
pub use general::GeneralService;
pub use rogue::RogueService;
pub use rrm::RrmService;
pub use site::SiteService;
pub use spaces::SpacesService;
pub use urwb::UrwbService;
pub use wlan::WlanService;

use crate::client::Client;

impl Client {
    pub fn ap(&self) -> ApService {
        ApService::new(self.clone())
    }

    pub fn clients(&self) -> ClientService {
        ClientService::new(self.clone())
    }

    pub fn general(&self) -> GeneralService {
        GeneralService::new(self.clone())
    }

    pub fn rogue(&self) -> RogueService {
        RogueService::new(self.clone())
    }

    pub fn rrm(&self) -> RrmService {
        RrmService::new(self.clone())
    }

    pub fn site(&self) -> SiteService {
        SiteService::new(self.clone())
    }

    pub fn spaces(&self) -> SpacesService {
        SpacesService::new(self.clone())
    }

    pub fn urwb(&self) -> UrwbService {
        UrwbService::new(self.clone())
    }

    pub fn wlan(&self) -> WlanService {
        WlanService::new(self.clone())
    }
}
