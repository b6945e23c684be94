//! Data transfer objects

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateGroupRequest, PopularGroupsQuery, UpdateGroupRequest, UpdatePreferencesRequest,
};
pub use responses::{
    GroupDetailResponse, GroupResponse, HealthResponse, PopularGroupResponse, PostResponse,
    PreferencesResponse, ReadinessResponse, UserResponse,
};
