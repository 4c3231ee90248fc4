use crate::form::ProductivityForm;
use crate::upstream::PredictorClient;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub form: Arc<Mutex<ProductivityForm>>,
    pub predictor: PredictorClient,
}

impl AppState {
    pub fn new(form: ProductivityForm, predictor: PredictorClient) -> Self {
        Self {
            form: Arc::new(Mutex::new(form)),
            predictor,
        }
    }
}
