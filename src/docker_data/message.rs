use crate::app_data::{ContainerId, ImageId};

/// Requests for data from the container runtime, executed synchronously by `DockerData`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerMessage {
    Inspect(ImageId),
    Logs(ContainerId),
    Update,
}
