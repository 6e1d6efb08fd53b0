// Persistence services

pub mod member_service;
pub mod workout_session_service;

pub use member_service::MemberService;
pub use workout_session_service::WorkoutSessionService;
