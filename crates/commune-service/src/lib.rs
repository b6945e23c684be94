//! # commune-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreateGroupRequest, GroupDetailResponse, GroupResponse, HealthResponse, PopularGroupResponse,
    PopularGroupsQuery, PostResponse, PreferencesResponse, ReadinessResponse, UpdateGroupRequest,
    UpdatePreferencesRequest, UserResponse,
};
pub use services::{
    GroupService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
