// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons a [`Controller`](crate::Controller) cannot be created.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ControllerError {
    /// The host has no container node.
    #[error("viewport container is missing")]
    MissingContainer,
    /// The host has no content node.
    #[error("viewport content is missing")]
    MissingContent,
    /// The content has no positive, finite area.
    #[error("viewport content size {width}x{height} is degenerate")]
    DegenerateContent {
        /// Reported content width.
        width: f64,
        /// Reported content height.
        height: f64,
    },
}
