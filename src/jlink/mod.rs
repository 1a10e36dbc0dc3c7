//! Native runtime-image packaging.
//!
//! This module bundles a merged application archive into a minimized,
//! optionally compressed standalone runtime image by driving the JDK's
//! jlink tool.
//!
//! # Pipeline
//!
//! 1. Validate the [`JlinkOptions`] (the application archive must be set)
//! 2. Resolve the module set: the configured list, or jdeps discovery when
//!    none was configured
//! 3. Invoke jlink with a deterministic argument vector
//! 4. Copy the application archive into the image's `bin` directory
//!
//! A finished image can additionally be packed into a zip with
//! [`zip_image`].
//!
//! # Example
//!
//! ```no_run
//! use jlink_bundler::jlink::{ImagePipeline, JavaToolchain, JlinkOptions};
//! use jlink_bundler::process::SystemRunner;
//!
//! # async fn example() -> jlink_bundler::jlink::Result<()> {
//! let options = JlinkOptions::builder()
//!     .artifact("build/libs/app-all.jar")
//!     .strip_debug(true)
//!     .build();
//! let runner = SystemRunner;
//! let pipeline = ImagePipeline::new("app", options, JavaToolchain::detect()?, &runner);
//! let image = pipeline.run().await?;
//! println!("image at {}", image.image_dir.display());
//! # Ok(())
//! # }
//! ```

mod archive;
mod command;
mod discovery;
mod error;
mod options;
mod pipeline;
mod toolchain;

pub use archive::zip_image;
pub use command::build_command;
pub use discovery::discover_modules;
pub use error::{Error, ErrorExt, Result};
pub use options::{
    CompressionLevel,
    DEFAULT_OUTPUT,
    Endianness,
    JlinkOptions,
    JlinkOptionsBuilder,
};
pub use pipeline::{ImagePipeline, LinkedImage};
pub use toolchain::JavaToolchain;
