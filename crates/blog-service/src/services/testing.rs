//! Testing service
//!
//! Wipes all application data. Only mounted outside production.

use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct TestingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TestingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Remove every user, blog, post, comment and reaction
    #[instrument(skip(self))]
    pub async fn clear_all_data(&self) -> ServiceResult<()> {
        self.ctx.data_reset_repo().clear_all().await?;
        info!("All application data cleared");
        Ok(())
    }
}
