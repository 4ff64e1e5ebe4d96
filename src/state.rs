use std::sync::Arc;

use crate::application::services::CampaignService;
use crate::domain::repositories::CampaignRepository;

#[derive(Clone)]
pub struct AppState {
    pub campaign_service: Arc<CampaignService<dyn CampaignRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn CampaignRepository>) -> Self {
        Self {
            campaign_service: Arc::new(CampaignService::new(repository)),
        }
    }
}
