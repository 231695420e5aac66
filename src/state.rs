use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::backendless::BackendlessUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<BackendlessUserRepository>>,
}

impl AppState {
    pub fn new(repository: BackendlessUserRepository) -> Self {
        Self {
            user_service: Arc::new(UserService::new(Arc::new(repository))),
        }
    }
}
