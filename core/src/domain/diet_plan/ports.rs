use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::entities::{DietPlanRequest, DietPlanResult},
};

pub trait DietPlanService: Send + Sync {
    fn generate_diet_plan(
        &self,
        request: DietPlanRequest,
    ) -> impl Future<Output = Result<DietPlanResult, CoreError>> + Send;
}
