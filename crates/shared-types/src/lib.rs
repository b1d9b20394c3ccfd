pub mod config;
pub mod error;
pub mod feature_flags;
pub mod requests;

// Authorization model
pub mod guard;
pub mod navigation;
pub mod policy;
pub mod principal;
pub mod role;
pub mod routing;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use requests::*;

pub use guard::*;
pub use navigation::*;
pub use policy::*;
pub use principal::*;
pub use role::*;
pub use routing::*;
