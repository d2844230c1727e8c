use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::{
    app_data::{AppData, ContainerId, ContainerItem, DetailKind, ImageId, ImageItem},
    app_error::AppError,
};

mod message;
#[cfg(test)]
pub mod mock;
mod runner;

pub use message::DockerMessage;
pub use runner::{CliRunner, CommandRunner, RunnerError};

const CONTAINERS_ARGS: [&str; 3] = ["ps", "--format", "json"];
const IMAGES_ARGS: [&str; 3] = ["images", "--format", "json"];

/// Decode newline delimited json, blank lines are skipped, invalid lines are logged and dropped
pub fn parse_json_lines<T: DeserializeOwned>(output: &str) -> Vec<T> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match serde_json::from_str::<T>(line) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(%line, "skipping unparseable json line: {e}");
                None
            }
        })
        .collect()
}

/// Fetches data from the container runtime, each call blocks until the runtime cli has exited
#[derive(Debug)]
pub struct DockerData<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> DockerData<R> {
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    #[cfg(test)]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    fn run_to_string(&self, args: &[&str]) -> Result<String, RunnerError> {
        let output = self.runner.run(args)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    pub fn fetch_containers(&self) -> Result<Vec<ContainerItem>, RunnerError> {
        Ok(parse_json_lines(&self.run_to_string(&CONTAINERS_ARGS)?))
    }

    pub fn fetch_images(&self) -> Result<Vec<ImageItem>, RunnerError> {
        Ok(parse_json_lines(&self.run_to_string(&IMAGES_ARGS)?))
    }

    pub fn fetch_logs(&self, id: &ContainerId) -> Result<String, RunnerError> {
        self.run_to_string(&["logs", id.get()])
    }

    pub fn fetch_inspect(&self, id: &ImageId) -> Result<String, RunnerError> {
        self.run_to_string(&["inspect", id.get()])
    }

    /// Execute a message, writing the result into app_data
    /// Errors never propagate, a failed fetch leaves the affected pane empty
    pub fn handle_message(&self, message: DockerMessage, app_data: &mut AppData) {
        match message {
            DockerMessage::Update => self.update_everything(app_data),
            DockerMessage::Logs(id) => {
                let name = app_data
                    .container_data
                    .get_container_items()
                    .iter()
                    .find(|i| i.id == id)
                    .map_or_else(|| id.to_string(), |i| i.name.clone());
                let content = self.fetch_logs(&id).unwrap_or_else(|e| {
                    error!(%id, "unable to fetch logs: {e}");
                    format!("Unable to fetch logs for {name}\n\n{e}")
                });
                app_data
                    .detail_data
                    .set_content(DetailKind::Logs, &name, content);
            }
            DockerMessage::Inspect(id) => {
                let name = app_data
                    .image_data
                    .get_image_items()
                    .iter()
                    .find(|i| i.id == id)
                    .map_or_else(|| id.to_string(), ImageItem::reference);
                let content = self.fetch_inspect(&id).unwrap_or_else(|e| {
                    error!(%id, "unable to inspect image: {e}");
                    format!("Unable to inspect {name}\n\n{e}")
                });
                app_data
                    .detail_data
                    .set_content(DetailKind::Inspect, &name, content);
            }
        }
    }

    /// Replace both record sets, reporting the last failure in the error popup
    fn update_everything(&self, app_data: &mut AppData) {
        let containers = self.fetch_containers().unwrap_or_else(|e| {
            error!("unable to list containers: {e}");
            app_data.set_error(AppError::ContainerList(e.to_string()));
            vec![]
        });
        app_data.container_data.set_containers(containers);

        let images = self.fetch_images().unwrap_or_else(|e| {
            error!("unable to list images: {e}");
            app_data.set_error(AppError::ImageList(e.to_string()));
            vec![]
        });
        app_data.image_data.set_images(images);
    }
}
