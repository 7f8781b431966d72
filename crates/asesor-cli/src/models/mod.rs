pub(crate) mod identity;
pub(crate) mod list_scope;
pub(crate) mod new_session;
pub(crate) mod new_user;
pub(crate) mod session_update;
pub(crate) mod time_format;
pub(crate) mod token_response;
pub(crate) mod tutoring_session;
pub(crate) mod user_profile;

pub use identity::Identity;
pub use list_scope::ListScope;
pub use new_session::{NewSession, SessionOwner};
pub use new_user::NewUser;
pub use session_update::SessionUpdate;
pub use token_response::TokenResponse;
pub use tutoring_session::TutoringSession;
pub use user_profile::UserProfile;
