use crate::{app_error::AppError, parse_args::CliArgs};

pub mod container_data;
pub mod detail_data;
pub mod image_data;
mod statefull_list;

pub use container_data::{ContainerData, ContainerId, ContainerItem};
pub use detail_data::{DetailData, DetailKind};
pub use image_data::{ImageData, ImageId, ImageItem};

/// Global app_state, owned by the input handler
#[derive(Debug, Clone)]
pub struct AppData {
    pub container_data: ContainerData,
    pub image_data: ImageData,
    pub detail_data: DetailData,
    pub error: Option<AppError>,
    pub args: CliArgs,
}

impl AppData {
    /// Empty panes, filled by the first update
    pub fn default(args: CliArgs) -> Self {
        Self {
            container_data: ContainerData::new(),
            image_data: ImageData::new(),
            detail_data: DetailData::new(args.color),
            error: None,
            args,
        }
    }

    /// The error currently shown in the popup, at most one at a time
    pub const fn get_error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn remove_error(&mut self) {
        self.error = None;
    }

    /// Replaces any error not yet cleared
    pub fn set_error(&mut self, error: AppError) {
        self.error = Some(error);
    }
}
