// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article API endpoint
//!
//! Provides `POST /generate-content`.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::content_handler;
pub use request::ContentApiRequest;
pub use response::ContentApiResponse;
