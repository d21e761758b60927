// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API endpoint
//!
//! Provides `POST /generate-chat-response`.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::chat_handler;
pub use request::ChatApiRequest;
pub use response::ChatApiResponse;
