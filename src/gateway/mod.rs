/// Gateway address resolution - Gateway
mod descriptor;
mod resolver;

pub use descriptor::descriptor_gateway;
pub use resolver::{resolve_gateway_url, GatewaySources};
