//! Project segmentation: reconstructs structured {title, description}
//! records from the free-form PROJECTS section of a resume.

pub mod segmenter;

pub use segmenter::{segment_projects, ProjectRecord};
