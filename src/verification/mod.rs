pub mod remote;

pub use remote::{check_remote, check_remote_with, is_ready, RemoteIdService};
