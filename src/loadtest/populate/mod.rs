//! Loadtest populate command handler.

mod logging;
mod run;

pub use logging::{mask_api_token, mask_url_credentials};
pub use run::run_populate;
