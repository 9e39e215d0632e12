use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> LibraryResult<Response>;
}
