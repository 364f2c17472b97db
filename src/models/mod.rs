pub mod requests;
pub mod responses;

pub use requests::{AddPlayerRequest, LockRoleRequest};
pub use responses::{
    AssignmentResponse, DealtRoleResponse, DistributionResponse, PlayerResponse, SessionResponse,
};
