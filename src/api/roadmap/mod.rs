// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Roadmap API endpoint
//!
//! Provides `POST /generate-roadmap`.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::roadmap_handler;
pub use request::RoadmapApiRequest;
pub use response::RoadmapApiResponse;
