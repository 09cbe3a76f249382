pub mod gate;
pub mod rbac;
pub mod response;

pub use gate::access_gate;
pub use response::{ApiResponse, ApiResult};
