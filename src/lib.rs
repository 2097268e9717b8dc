pub mod app;
pub mod cli;
pub mod constants;
pub mod gateway;
pub mod proxy;
pub mod utils;

pub use app::{load_config, Config};
pub use gateway::{resolve_gateway_url, GatewaySources};
pub use proxy::{
    build_invoke_request, build_list_request, invoke_function, list_functions, Function,
    InvocationRequest, Transport,
};
pub use utils::FaasError;
